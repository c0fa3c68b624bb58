use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::chips::Chips;
use crate::domain::PlayerId;

/// Ошибки загрузки/проверки конфига.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Не удалось разобрать конфиг: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Бай-ин должен быть больше нуля")]
    ZeroBuyIn,

    #[error("Символ валюты не может быть пустым")]
    EmptyCurrency,
}

/// Конфиг игры: бай-ин, валюта и эскроу-аккаунт, куда уходят бай-ины.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GameConfig {
    /// Сколько стоит вход за стол (на одного игрока).
    pub buy_in: Chips,
    /// Символ валюты для запросов баланса у эскроу.
    pub currency: String,
    /// Общий пул, куда переводится `2 × buy_in` при старте игры.
    pub pool_account: PlayerId,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            buy_in: Chips::new(1000),
            currency: "EOS".to_string(),
            pool_account: 0,
        }
    }
}

impl GameConfig {
    /// Разобрать конфиг из JSON и сразу проверить.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let cfg: GameConfig = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.buy_in.is_zero() {
            return Err(ConfigError::ZeroBuyIn);
        }
        if self.currency.trim().is_empty() {
            return Err(ConfigError::EmptyCurrency);
        }
        Ok(())
    }
}

/// Диапазон ставок при поиске стола.
///
/// Принимается `search_game`, но пока не влияет на выбор стола:
/// бай-ин у всех столов одинаковый.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StakeRange {
    pub min: Chips,
    pub max: Chips,
}
