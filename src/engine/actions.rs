use serde::{Deserialize, Serialize};

use crate::crypto::{CardCipherText, KeyFragment};
use crate::domain::Chips;

/// Действие игрока над конкретным столом.
///
/// Поиск стола (`search_game`) работает над всеми столами сразу,
/// поэтому сюда не входит — см. `lifecycle::search_game`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Action {
    /// Выйти из стола до начала игры.
    CancelGame,
    /// Подтвердить готовность.
    StartGame,
    /// Перемешанная и зашифрованная общим ключом колода (53 слота).
    DeckShuffled { cards: Vec<CardCipherText> },
    /// Колода, перешифрованная ключами отдельных карт (53 слота).
    DeckRecrypted { cards: Vec<CardCipherText> },
    /// Фрагмент ключа для следующей раздаваемой карты.
    CardKey { key: KeyFragment },
    Check,
    Call,
    Raise { amount: Chips },
    Fold,
    /// Ключи своих карманных карт на шоудауне.
    ShowCards { keys: [KeyFragment; 2] },
    /// Начать следующую раздачу за тем же столом.
    NewHand,
    /// Открыть спор о нечестной игре.
    Dispute,
    /// Все приватные ключи игрока для аудита.
    CardKeys { keys: Vec<KeyFragment> },
    /// Оспорить один шаг перемешивания/перешифровки.
    DisputeStep { step: u8 },
}

/// Вид действия без данных — для таблицы допустимости и логов.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ActionKind {
    CancelGame,
    StartGame,
    DeckShuffled,
    DeckRecrypted,
    CardKey,
    Check,
    Call,
    Raise,
    Fold,
    ShowCards,
    NewHand,
    Dispute,
    CardKeys,
    DisputeStep,
}

impl ActionKind {
    /// Крючки спора: принимаются, но не проверяются.
    pub fn is_dispute(self) -> bool {
        matches!(self, ActionKind::Dispute | ActionKind::CardKeys | ActionKind::DisputeStep)
    }
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::CancelGame => ActionKind::CancelGame,
            Action::StartGame => ActionKind::StartGame,
            Action::DeckShuffled { .. } => ActionKind::DeckShuffled,
            Action::DeckRecrypted { .. } => ActionKind::DeckRecrypted,
            Action::CardKey { .. } => ActionKind::CardKey,
            Action::Check => ActionKind::Check,
            Action::Call => ActionKind::Call,
            Action::Raise { .. } => ActionKind::Raise,
            Action::Fold => ActionKind::Fold,
            Action::ShowCards { .. } => ActionKind::ShowCards,
            Action::NewHand => ActionKind::NewHand,
            Action::Dispute => ActionKind::Dispute,
            Action::CardKeys { .. } => ActionKind::CardKeys,
            Action::DisputeStep { .. } => ActionKind::DisputeStep,
        }
    }
}
