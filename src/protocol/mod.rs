//! Клиентская сторона протокола: что делает игрок у себя,
//! прежде чем отправить действие на стол.
//!
//! Контракт перемешивать и шифровать не умеет — он только проверяет очередь
//! и хранит колоду. Всю криптографию ведёт `Participant`.

pub mod participant;

use thiserror::Error;

use crate::crypto::CipherError;

pub use participant::Participant;

/// Ошибки клиентской стороны протокола.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("Ошибка шифра: {0}")]
    Cipher(#[from] CipherError),

    #[error("Колода должна содержать {expected} слотов, пришло {got}")]
    DeckSize { expected: usize, got: usize },

    #[error("Соперник ещё не раскрыл ключ для слота {index}")]
    MissingKey { index: usize },

    #[error("Ключи не раскрывают карту в слоте {index}")]
    Undecodable { index: usize },
}
