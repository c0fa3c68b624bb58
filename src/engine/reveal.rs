//! Раскрытие карт по фрагментам ключей.
//!
//! DEAL_POCKET: ключ карманной карты раскрывает только соперник владельца —
//! свой ключ владелец знает сам.
//! DEAL_TABLE: общая карта открывается, когда пришли фрагменты обоих игроков
//! (в любом порядке).

use tracing::debug;

use crate::crypto::{reveal_card, CommutativeCipher, KeyFragment};
use crate::domain::hand::{DealSlot, FLOP_CARDS_DEALT, POCKET_CARDS_DEALT};
use crate::domain::player::Seat;
use crate::domain::table::RoundState;
use crate::domain::PlayerId;
use crate::engine::actions::ActionKind;
use crate::engine::errors::GameError;
use crate::engine::game_loop::Transition;
use crate::engine::hand_history::TableEventKind;

/// Принять фрагмент ключа для слота `cards_dealt + 1`.
pub fn card_key<C: CommutativeCipher + ?Sized>(
    t: &mut Transition,
    seat: Seat,
    actor: PlayerId,
    key: KeyFragment,
    cipher: &C,
) -> Result<(), GameError> {
    let index = t.table.cards_dealt as usize + 1;

    match t.table.state {
        RoundState::DealPocket => pocket_key(t, seat, actor, index, key),
        RoundState::DealTable => community_key(t, seat, index, key, cipher),
        state => Err(GameError::InvalidState {
            action: ActionKind::CardKey,
            state,
        }),
    }
}

fn pocket_key(
    t: &mut Transition,
    seat: Seat,
    actor: PlayerId,
    index: usize,
    key: KeyFragment,
) -> Result<(), GameError> {
    let DealSlot::Pocket(owner) = DealSlot::of(index) else {
        return Err(GameError::IndexOutOfRange { index });
    };
    // target в этой фазе — владелец раздаваемой карты.
    if seat == owner {
        return Err(GameError::NotYourTurn(actor));
    }

    let table = &mut t.table;
    table.keys_mut(seat)[index] = Some(key);
    table.cards_dealt += 1;

    if table.cards_dealt == POCKET_CARDS_DEALT {
        table.state = RoundState::BetRound;
        table.target = Some(Seat::Alice);
    } else {
        table.target = match DealSlot::of(index + 1) {
            DealSlot::Pocket(next_owner) => Some(next_owner),
            _ => None,
        };
    }

    t.emit(TableEventKind::KeySubmitted { seat, index });
    Ok(())
}

fn community_key<C: CommutativeCipher + ?Sized>(
    t: &mut Transition,
    seat: Seat,
    index: usize,
    key: KeyFragment,
    cipher: &C,
) -> Result<(), GameError> {
    if DealSlot::of(index) != DealSlot::Community || index >= t.table.encrypted_cards.len() {
        return Err(GameError::IndexOutOfRange { index });
    }

    let Some(other) = t.table.key_at(seat.opponent(), index) else {
        // Соперник ещё не прислал свой фрагмент — просто запоминаем наш.
        t.table.keys_mut(seat)[index] = Some(key);
        t.emit(TableEventKind::KeySubmitted { seat, index });
        return Ok(());
    };

    let block = t.table.encrypted_cards[index];
    let card = reveal_card(cipher, &block, &[&key, &other])?
        .ok_or(GameError::UndecodableCard(index))?;

    let table = &mut t.table;
    table.keys_mut(seat)[index] = Some(key);
    table.table_cards.push(card);
    table.cards_dealt += 1;

    if table.cards_dealt >= FLOP_CARDS_DEALT {
        // Флоп (или тёрн/ривер) открыт — новая улица торговли, первой ходит alice.
        table.state = RoundState::BetRound;
        table.target = Some(Seat::Alice);
    }

    t.emit(TableEventKind::KeySubmitted { seat, index });
    t.emit(TableEventKind::CardRevealed { index, card });
    debug!(table_id = t.table.id, index, %card, "community card revealed");
    Ok(())
}
