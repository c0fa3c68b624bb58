//! Доменная модель ментального покера: карты, колода, места, стол, конфиг.

pub mod card;
pub mod chips;
pub mod config;
pub mod deck;
pub mod hand;
pub mod player;
pub mod table;

/// Непрозрачный идентификатор аккаунта игрока.
pub type PlayerId = u64;
pub type TableId = u64;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use chips::*;
pub use config::*;
pub use deck::*;
pub use hand::*;
pub use player::*;
pub use table::*;
