use serde::{Deserialize, Serialize};

use crate::domain::TableId;
use crate::engine::GameError;

/// Ошибки внешнего API (то, что отдаём фронту / клиенту).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные (например, битый JSON).
    BadRequest(String),

    /// Стол не найден.
    TableNotFound(TableId),

    /// Игрок не сидит за столом.
    NotAtTable(String),

    /// Действие не может быть выполнено сейчас (фаза или очередь).
    InvalidCommand(String),

    /// Ошибка движка (ставки, ключи, эскроу).
    EngineError(String),
}

impl From<GameError> for ApiError {
    fn from(err: GameError) -> Self {
        match err {
            GameError::TableNotFound(id) => ApiError::TableNotFound(id),
            GameError::Unauthorized(_) => ApiError::NotAtTable(err.to_string()),
            GameError::InvalidState { .. } | GameError::NotYourTurn(_) => {
                ApiError::InvalidCommand(err.to_string())
            }
            other => ApiError::EngineError(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
