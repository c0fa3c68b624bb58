//! Главный модуль приложения «ментальный покер» на Linera.
//!
//! Здесь описываем ABI (Operation / Message / Query / Response) и
//! связываем contract/service с нашим MentalPokerState.

pub mod api;
pub mod crypto;
pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;
pub mod protocol;
pub mod state;

use linera_sdk::linera_base_types::{ContractAbi, ServiceAbi};
use serde::{Deserialize, Serialize};

use crate::api::{Command, Query, QueryResponse};
use crate::state::MentalPokerState;

/// Операции (внешние команды), которые модуль принимает.
///
/// Для простоты: одна операция = одна команда из api::Command.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum MentalPokerOperation {
    Command(Command),
}

/// Сообщения между приложениями Linera.
/// Пока нам не нужны – оставим пустой enum.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum MentalPokerMessage {}

/// Запросы к сервису (read-only).
pub type MentalPokerQuery = Query;

/// Ответы на запросы.
pub type MentalPokerResponse = QueryResponse;

/// ABI для контракта и сервиса.
#[derive(Clone, Debug)]
pub struct MentalPokerAbi;

impl ContractAbi for MentalPokerAbi {
    type Operation = MentalPokerOperation;
    type Response = ();
}

impl ServiceAbi for MentalPokerAbi {
    type Query = MentalPokerQuery;
    type QueryResponse = MentalPokerResponse;
}

/// Экспортируем типы состояния, чтобы contract.rs и service.rs могли их использовать.
pub type Storage = MentalPokerState;
