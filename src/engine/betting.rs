//! Торговля на двоих: check / call / raise / fold.
//!
//! Ставки копятся всю раздачу и резервируются из банкролла (`bet <= bankroll`).
//! Банк = сумма ставок. Каждую улицу открывает alice; улицу закрывает
//! check второго игрока (bob) или любой call.

use tracing::info;

use crate::domain::chips::Chips;
use crate::domain::hand::ALL_CARDS_DEALT;
use crate::domain::player::Seat;
use crate::domain::table::RoundState;
use crate::domain::PlayerId;
use crate::engine::errors::GameError;
use crate::engine::game_loop::Transition;
use crate::engine::hand_history::{BetKind, TableEventKind};
use crate::engine::validation::require_target;

pub fn check(t: &mut Transition, seat: Seat, actor: PlayerId) -> Result<(), GameError> {
    require_target(&t.table, seat, actor)?;
    if t.table.alice_bet != t.table.bob_bet {
        return Err(GameError::CannotCheck);
    }

    emit_bet(t, seat, BetKind::Check);
    match seat {
        // Первое действие на улице — слово сопернику.
        Seat::Alice => t.table.target = Some(Seat::Bob),
        Seat::Bob => resolve_street(t),
    }
    Ok(())
}

/// Уравнять ставку соперника из своего банкролла. Всегда закрывает улицу.
pub fn call(t: &mut Transition, seat: Seat, actor: PlayerId) -> Result<(), GameError> {
    require_target(&t.table, seat, actor)?;

    let own = t.table.bet(seat);
    let target_bet = t.table.bet(seat.opponent());
    if target_bet <= own {
        return Err(GameError::CannotCall);
    }

    let bankroll = t.table.bankroll(seat);
    if target_bet > bankroll {
        return Err(GameError::InsufficientFunds {
            needed: target_bet - own,
            available: bankroll - own,
        });
    }

    *t.table.bet_mut(seat) = target_bet;
    emit_bet(t, seat, BetKind::Call);
    resolve_street(t);
    Ok(())
}

/// Поднять свою ставку на `amount`. Ход всегда переходит сопернику.
pub fn raise(t: &mut Transition, seat: Seat, actor: PlayerId, amount: Chips) -> Result<(), GameError> {
    require_target(&t.table, seat, actor)?;
    if amount.is_zero() {
        return Err(GameError::RaiseTooSmall);
    }

    let own = t.table.bet(seat);
    let available = t.table.bankroll(seat) - own;
    if amount > available {
        return Err(GameError::InsufficientFunds {
            needed: amount,
            available,
        });
    }

    let new_bet = own + amount;
    if new_bet <= t.table.bet(seat.opponent()) {
        return Err(GameError::RaiseTooSmall);
    }

    *t.table.bet_mut(seat) = new_bet;
    t.table.target = Some(seat.opponent());
    emit_bet(t, seat, BetKind::Raise);
    Ok(())
}

/// Сбросить карты: банк целиком уходит сопернику, раздача окончена.
pub fn fold(t: &mut Transition, seat: Seat, actor: PlayerId) -> Result<(), GameError> {
    require_target(&t.table, seat, actor)?;

    let winner = seat.opponent();
    let lost = t.table.bet(seat);
    let pot = t.table.pot();

    let table = &mut t.table;
    *table.bankroll_mut(seat) -= lost;
    *table.bankroll_mut(winner) += lost;
    table.alice_bet = Chips::ZERO;
    table.bob_bet = Chips::ZERO;
    table.state = RoundState::End;
    table.target = None;
    let table_id = table.id;

    t.emit(TableEventKind::PotAwarded {
        seat: winner,
        amount: pot,
    });
    t.emit(TableEventKind::HandFinished {
        winner: Some(winner),
    });
    info!(table_id, %seat, %pot, "player folded");
    Ok(())
}

/// Улица закрыта: дальше борд, либо шоудаун после ривера.
fn resolve_street(t: &mut Transition) {
    let table = &mut t.table;
    table.target = None;
    table.state = if table.cards_dealt < ALL_CARDS_DEALT {
        RoundState::DealTable
    } else {
        RoundState::Showdown
    };

    let (cards_dealt, next) = (table.cards_dealt, table.state);
    t.emit(TableEventKind::StreetResolved { cards_dealt, next });
}

fn emit_bet(t: &mut Transition, seat: Seat, kind: BetKind) {
    let bet = t.table.bet(seat);
    let pot = t.table.pot();
    t.emit(TableEventKind::BetPlaced {
        seat,
        kind,
        bet,
        pot,
    });
}
