use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::crypto::CommutativeCipher;
use crate::domain::chips::Chips;
use crate::domain::config::GameConfig;
use crate::domain::player::Seat;
use crate::domain::table::Table;
use crate::domain::PlayerId;
use crate::engine::actions::Action;
use crate::engine::errors::GameError;
use crate::engine::hand_history::{EventLog, TableEventKind};
use crate::engine::validation::{require_admitted, require_seat};
use crate::engine::{betting, lifecycle, reveal, showdown, shuffle};
use crate::infra::escrow::EscrowLedger;

/// Всё, что действию нужно «снаружи» стола: шифр, баланс эскроу (только чтение), конфиг.
pub struct ActionContext<'a, C: ?Sized, L: ?Sized> {
    pub cipher: &'a C,
    pub ledger: &'a L,
    pub config: &'a GameConfig,
}

impl<'a, C: ?Sized, L: ?Sized> ActionContext<'a, C, L> {
    pub fn new(cipher: &'a C, ledger: &'a L, config: &'a GameConfig) -> Self {
        Self {
            cipher,
            ledger,
            config,
        }
    }
}

/// Внешний побочный эффект, который хост выполняет после перехода.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Effect {
    /// Перевод в эскроу.
    Transfer {
        from: PlayerId,
        to: PlayerId,
        amount: Chips,
        memo: String,
    },
}

/// Результат успешного действия: новый стол + эффекты + события.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub table: Table,
    pub effects: Vec<Effect>,
    pub events: EventLog,
}

impl Transition {
    pub fn new(table: Table) -> Self {
        Self {
            table,
            effects: Vec::new(),
            events: EventLog::new(),
        }
    }

    pub fn emit(&mut self, kind: TableEventKind) {
        self.events.push(kind);
    }
}

/// Применить действие игрока к столу.
///
/// Чистая функция: исходный стол не трогается, новый возвращается в `Transition`.
/// При ошибке наружу не уходит ничего, поэтому неудачное действие — всегда no-op.
pub fn apply_action<C, L>(
    table: &Table,
    actor: PlayerId,
    action: &Action,
    ctx: &ActionContext<'_, C, L>,
) -> Result<Transition, GameError>
where
    C: CommutativeCipher + ?Sized,
    L: EscrowLedger + ?Sized,
{
    let kind = action.kind();
    let result = dispatch(table, actor, action, ctx);

    match &result {
        Ok(t) => debug!(
            table_id = table.id,
            actor,
            action = ?kind,
            from = %table.state,
            to = %t.table.state,
            "action applied"
        ),
        Err(e) => debug!(
            table_id = table.id,
            actor,
            action = ?kind,
            state = %table.state,
            error = %e,
            "action rejected"
        ),
    }

    result
}

fn dispatch<C, L>(
    table: &Table,
    actor: PlayerId,
    action: &Action,
    ctx: &ActionContext<'_, C, L>,
) -> Result<Transition, GameError>
where
    C: CommutativeCipher + ?Sized,
    L: EscrowLedger + ?Sized,
{
    require_admitted(table, action.kind())?;
    let seat = require_seat(table, actor)?;

    let mut t = Transition::new(table.clone());

    match action {
        Action::CancelGame => lifecycle::cancel_game(&mut t, seat, actor)?,
        Action::StartGame => lifecycle::start_game(&mut t, seat, actor, ctx)?,
        Action::NewHand => lifecycle::new_hand(&mut t)?,
        Action::DeckShuffled { cards } | Action::DeckRecrypted { cards } => {
            shuffle::submit_deck(&mut t, seat, actor, cards)?
        }
        Action::CardKey { key } => reveal::card_key(&mut t, seat, actor, *key, ctx.cipher)?,
        Action::Check => betting::check(&mut t, seat, actor)?,
        Action::Call => betting::call(&mut t, seat, actor)?,
        Action::Raise { amount } => betting::raise(&mut t, seat, actor, *amount)?,
        Action::Fold => betting::fold(&mut t, seat, actor)?,
        Action::ShowCards { keys } => showdown::show_cards(&mut t, seat, keys, ctx.cipher)?,
        Action::Dispute | Action::CardKeys { .. } | Action::DisputeStep { .. } => {
            dispute_hook(&mut t, seat, action)
        }
    }

    Ok(t)
}

/// Споры о нечестной игре пока только фиксируются: стол не меняется.
fn dispute_hook(t: &mut Transition, seat: Seat, action: &Action) {
    warn!(
        table_id = t.table.id,
        %seat,
        action = ?action.kind(),
        "dispute requested, verification is not implemented"
    );
    t.emit(TableEventKind::DisputeRequested {
        seat,
        action: action.kind(),
    });
}
