// src/engine/table_manager.rs

use tracing::{info, warn};

use crate::crypto::CommutativeCipher;
use crate::domain::config::{GameConfig, StakeRange};
use crate::domain::table::Table;
use crate::domain::{PlayerId, TableId};
use crate::engine::actions::Action;
use crate::engine::errors::GameError;
use crate::engine::game_loop::{apply_action, ActionContext, Effect, Transition};
use crate::engine::hand_history::EventLog;
use crate::engine::lifecycle;
use crate::infra::escrow::EscrowLedger;
use crate::infra::persistence::PokerStorage;

/// Менеджер столов:
/// - хранит столы через `PokerStorage`;
/// - применяет действия игроков через `engine::apply_action`;
/// - исполняет эффекты (переводы в эскроу) и только потом сохраняет стол.
///
/// Если эффект не прошёл, стол в хранилище остаётся прежним.
pub struct TableManager<S, C, L> {
    storage: S,
    cipher: C,
    ledger: L,
    config: GameConfig,
}

impl<S, C, L> TableManager<S, C, L>
where
    S: PokerStorage,
    C: CommutativeCipher,
    L: EscrowLedger,
{
    pub fn new(storage: S, cipher: C, ledger: L, config: GameConfig) -> Self {
        Self {
            storage,
            cipher,
            ledger,
            config,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Снимок стола.
    pub fn table(&self, table_id: TableId) -> Option<Table> {
        self.storage.load_table(table_id)
    }

    /// Все столы по возрастанию id.
    pub fn tables(&self) -> Vec<Table> {
        self.storage.tables()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn cipher(&self) -> &C {
        &self.cipher
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Нужен хосту, чтобы пополнять балансы (в тестах и dev-CLI).
    pub fn ledger_mut(&mut self) -> &mut L {
        &mut self.ledger
    }

    /// Найти соперника: сесть за первый открытый стол или создать свой.
    pub fn search_game(
        &mut self,
        actor: PlayerId,
        stakes: Option<StakeRange>,
    ) -> Result<(TableId, EventLog), GameError> {
        let tables = self.storage.tables();
        let new_id = self.storage.next_table_id();

        let t = lifecycle::search_game(&tables, actor, stakes, &self.config, new_id);
        let table_id = t.table.id;
        let events = self.commit(t)?;
        Ok((table_id, events))
    }

    /// Применить действие игрока к столу `table_id`.
    pub fn apply(
        &mut self,
        actor: PlayerId,
        table_id: TableId,
        action: &Action,
    ) -> Result<EventLog, GameError> {
        let table = self
            .storage
            .load_table(table_id)
            .ok_or(GameError::TableNotFound(table_id))?;

        let ctx = ActionContext::new(&self.cipher, &self.ledger, &self.config);
        let t = apply_action(&table, actor, action, &ctx)?;
        self.commit(t)
    }

    /// Исполнить эффекты перехода и сохранить новый стол.
    fn commit(&mut self, t: Transition) -> Result<EventLog, GameError> {
        let Transition {
            table,
            effects,
            events,
        } = t;

        for effect in &effects {
            match effect {
                Effect::Transfer {
                    from,
                    to,
                    amount,
                    memo,
                } => {
                    if let Err(e) = self.ledger.transfer(*from, *to, *amount, memo) {
                        warn!(table_id = table.id, from, to, %amount, error = %e, "escrow transfer failed");
                        return Err(e.into());
                    }
                    info!(table_id = table.id, from, to, %amount, "escrow transfer done");
                }
            }
        }

        self.storage.save_table(&table);
        Ok(events)
    }
}
