use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::chips::Chips;
use crate::domain::PlayerId;

/// Ошибки внешнего эскроу/токен-сервиса.
#[derive(Clone, Debug, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum EscrowError {
    #[error("У аккаунта {account} недостаточно средств: нужно {needed}, есть {available}")]
    InsufficientBalance {
        account: PlayerId,
        needed: Chips,
        available: Chips,
    },

    #[error("Перевод отклонён: {0}")]
    Rejected(String),
}

/// Внешний токен/эскроу-сервис.
///
/// Ядро игры только спрашивает баланс и просит один перевод бай-инов в пул
/// при старте игры. Выплаты выигрышей — забота хоста.
pub trait EscrowLedger {
    fn balance(&self, account: PlayerId, currency: &str) -> Chips;

    fn transfer(
        &mut self,
        from: PlayerId,
        to: PlayerId,
        amount: Chips,
        memo: &str,
    ) -> Result<(), EscrowError>;
}

/// Один выполненный перевод (для тестов и dev-CLI).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransferRecord {
    pub from: PlayerId,
    pub to: PlayerId,
    pub amount: Chips,
    pub memo: String,
}

/// Простая in-memory реализация для тестов и локального запуска.
/// Одна валюта на весь леджер.
#[derive(Debug, Default)]
pub struct InMemoryEscrow {
    balances: HashMap<PlayerId, Chips>,
    transfers: Vec<TransferRecord>,
}

impl InMemoryEscrow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Пополнить аккаунт.
    pub fn deposit(&mut self, account: PlayerId, amount: Chips) {
        *self.balances.entry(account).or_insert(Chips::ZERO) += amount;
    }

    pub fn transfers(&self) -> &[TransferRecord] {
        &self.transfers
    }
}

impl EscrowLedger for InMemoryEscrow {
    fn balance(&self, account: PlayerId, _currency: &str) -> Chips {
        self.balances.get(&account).copied().unwrap_or(Chips::ZERO)
    }

    fn transfer(
        &mut self,
        from: PlayerId,
        to: PlayerId,
        amount: Chips,
        memo: &str,
    ) -> Result<(), EscrowError> {
        let available = self.balances.get(&from).copied().unwrap_or(Chips::ZERO);
        let rest = available
            .checked_sub(amount)
            .ok_or(EscrowError::InsufficientBalance {
                account: from,
                needed: amount,
                available,
            })?;

        self.balances.insert(from, rest);
        *self.balances.entry(to).or_insert(Chips::ZERO) += amount;
        self.transfers.push(TransferRecord {
            from,
            to,
            amount,
            memo: memo.to_string(),
        });
        Ok(())
    }
}
