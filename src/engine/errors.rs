use thiserror::Error;

use crate::crypto::CipherError;
use crate::domain::chips::Chips;
use crate::domain::table::RoundState;
use crate::domain::{PlayerId, TableId};
use crate::engine::actions::ActionKind;
use crate::infra::escrow::EscrowError;

/// Ошибки движка. Любая ошибка означает, что стол не изменился.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Стол {0} не найден")]
    TableNotFound(TableId),

    #[error("Действие {action:?} недопустимо в состоянии {state}")]
    InvalidState { action: ActionKind, state: RoundState },

    #[error("Сейчас не ход игрока с id={0}")]
    NotYourTurn(PlayerId),

    #[error("Игрок {0} не сидит за этим столом")]
    Unauthorized(PlayerId),

    #[error("Недостаточно средств: нужно {needed}, доступно {available}")]
    InsufficientFunds { needed: Chips, available: Chips },

    #[error("Индекс карты {index} вне колоды")]
    IndexOutOfRange { index: usize },

    #[error("Колода должна содержать {expected} слотов, пришло {got}")]
    InvalidDeckSize { expected: usize, got: usize },

    #[error("Невозможно выполнить check – ставки не равны")]
    CannotCheck,

    #[error("Невозможно выполнить call – нет ставки для уравнивания")]
    CannotCall,

    #[error("Размер рейза слишком мал")]
    RaiseTooSmall,

    #[error("Ключи не раскрывают карту в слоте {0}")]
    UndecodableCard(usize),

    #[error("Ошибка шифра: {0}")]
    Cipher(#[from] CipherError),

    #[error("Ошибка эскроу: {0}")]
    Escrow(#[from] EscrowError),
}
