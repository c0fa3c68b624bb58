//! Жизненный цикл стола: поиск соперника, выход до старта, готовность, новая раздача.

use tracing::info;

use crate::crypto::CommutativeCipher;
use crate::domain::chips::Chips;
use crate::domain::config::{GameConfig, StakeRange};
use crate::domain::player::Seat;
use crate::domain::table::{RoundState, Table};
use crate::domain::{PlayerId, TableId};
use crate::engine::errors::GameError;
use crate::engine::game_loop::{ActionContext, Effect, Transition};
use crate::engine::hand_history::TableEventKind;
use crate::infra::escrow::EscrowLedger;

/// Найти стол для игрока или создать новый.
///
/// First-fit по порядку `tables`: первый стол в `WAITING_FOR_PLAYERS`
/// со свободным местом, где игрок ещё не сидит. Диапазон ставок
/// принимается, но не используется — бай-ин у всех столов одинаковый.
pub fn search_game(
    tables: &[Table],
    actor: PlayerId,
    _stakes: Option<StakeRange>,
    config: &GameConfig,
    new_table_id: TableId,
) -> Transition {
    for table in tables {
        if !table.is_open() || table.seat_of(actor).is_some() {
            continue;
        }

        let mut t = Transition::new(table.clone());
        let seat = if t.table.alice.is_none() {
            // Создатель ушёл — новый игрок становится создателем, ждём дальше.
            t.table.alice = Some(actor);
            Seat::Alice
        } else {
            t.table.bob = Some(actor);
            t.table.state = RoundState::TableReady;
            Seat::Bob
        };
        t.emit(TableEventKind::PlayerJoined {
            table_id: table.id,
            seat,
            player: actor,
        });
        info!(table_id = table.id, actor, %seat, "player joined table");
        return t;
    }

    let mut table = Table::new(new_table_id, config.buy_in);
    table.alice = Some(actor);
    table.state = RoundState::WaitingForPlayers;

    let mut t = Transition::new(table);
    t.emit(TableEventKind::TableCreated {
        table_id: new_table_id,
        creator: actor,
    });
    info!(table_id = new_table_id, actor, "table created");
    t
}

/// Выйти из стола до начала игры.
///
/// Если уходит создатель, второй игрок становится создателем.
/// Стол не удаляется: он снова ждёт соперника.
pub fn cancel_game(t: &mut Transition, seat: Seat, actor: PlayerId) -> Result<(), GameError> {
    let table = &mut t.table;

    match seat {
        Seat::Alice => {
            table.alice = table.bob.take();
        }
        Seat::Bob => {
            table.bob = None;
        }
    }
    table.state = RoundState::WaitingForPlayers;
    table.target = None;
    table.alice_ready = false;
    table.bob_ready = false;

    t.emit(TableEventKind::PlayerLeft {
        seat,
        player: actor,
    });
    Ok(())
}

/// Подтвердить готовность. Когда готовы оба — старт перемешивания.
///
/// Завершающий вызов проверяет, что у игрока есть `2 × buy_in`,
/// и возвращает эффект перевода этой суммы в общий пул стола.
pub fn start_game<C, L>(
    t: &mut Transition,
    seat: Seat,
    actor: PlayerId,
    ctx: &ActionContext<'_, C, L>,
) -> Result<(), GameError>
where
    C: CommutativeCipher + ?Sized,
    L: EscrowLedger + ?Sized,
{
    if !t.table.is_ready(seat.opponent()) {
        t.table.set_ready(seat, true);
        t.emit(TableEventKind::PlayerReady { seat });
        return Ok(());
    }

    let buy_in = t.table.buy_in;
    let needed = buy_in.checked_mul(2).ok_or(GameError::InsufficientFunds {
        needed: Chips(u64::MAX),
        available: Chips::ZERO,
    })?;
    let available = ctx.ledger.balance(actor, &ctx.config.currency);
    if available < needed {
        return Err(GameError::InsufficientFunds { needed, available });
    }

    let table = &mut t.table;
    table.reset_hand();
    table.state = RoundState::Shuffle;
    table.target = Some(Seat::Alice);
    table.alice_ready = false;
    table.bob_ready = false;
    table.alice_bankroll = buy_in;
    table.bob_bankroll = buy_in;
    let table_id = table.id;

    t.effects.push(Effect::Transfer {
        from: actor,
        to: ctx.config.pool_account,
        amount: needed,
        memo: table_id.to_string(),
    });
    t.emit(TableEventKind::PlayerReady { seat });
    t.emit(TableEventKind::HandStarted { table_id, buy_in });
    info!(table_id, actor, %needed, "both players ready, buy-ins locked");
    Ok(())
}

/// Следующая раздача за тем же столом: банкроллы переносятся, колода заново.
pub fn new_hand(t: &mut Transition) -> Result<(), GameError> {
    let short = Seat::BOTH
        .into_iter()
        .map(|s| t.table.bankroll(s))
        .min()
        .unwrap_or(Chips::ZERO);
    if short.is_zero() {
        return Err(GameError::InsufficientFunds {
            needed: Chips(1),
            available: short,
        });
    }

    let table = &mut t.table;
    table.reset_hand();
    table.state = RoundState::Shuffle;
    table.target = Some(Seat::Alice);
    let (table_id, buy_in) = (table.id, table.buy_in);

    t.emit(TableEventKind::HandStarted { table_id, buy_in });
    info!(table_id, "new hand started");
    Ok(())
}
