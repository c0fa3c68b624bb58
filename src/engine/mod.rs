//! Движок стола ментального покера на двоих.
//!
//! Высокоуровневый объект: `TableManager`
//! Основные операции:
//!   - `search_game` – найти соперника или создать стол
//!   - `apply_action` – чистый переход стола по действию игрока
//!   - `TableManager::apply` – то же, плюс эффекты эскроу и сохранение

pub mod actions;
pub mod betting;
pub mod errors;
pub mod game_loop;
pub mod hand_history;
pub mod lifecycle;
pub mod reveal;
pub mod showdown;
pub mod shuffle;
pub mod table_manager;
pub mod validation;

pub use actions::{Action, ActionKind};
pub use errors::GameError;
pub use game_loop::{apply_action, ActionContext, Effect, Transition};
pub use hand_history::{BetKind, EventLog, TableEvent, TableEventKind};
pub use lifecycle::search_game;
pub use table_manager::TableManager;
pub use validation::admits;

/// RNG интерфейс для перемешивания колоды.
/// Реализации — в infra (обёртка над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
