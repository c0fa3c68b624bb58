//! Шоудаун: игроки раскрывают ключи своих карманных карт,
//! движок расшифровывает обе руки и отдаёт банк сильнейшей.

use core::cmp::Ordering;

use tracing::info;

use crate::crypto::{reveal_card, CommutativeCipher, KeyFragment};
use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::player::Seat;
use crate::domain::table::{RoundState, Table};
use crate::engine::errors::GameError;
use crate::engine::game_loop::Transition;
use crate::engine::hand_history::TableEventKind;
use crate::eval::evaluate_best_hand;

/// Принять ключи своих карманных карт. Когда показали оба — расчёт.
pub fn show_cards<C: CommutativeCipher + ?Sized>(
    t: &mut Transition,
    seat: Seat,
    keys: &[KeyFragment; 2],
    cipher: &C,
) -> Result<(), GameError> {
    for (slot, key) in seat.pocket_slots().into_iter().zip(keys.iter()) {
        t.table.keys_mut(seat)[slot] = Some(*key);
    }
    // Сразу проверяем, что ключи действительно открывают карты.
    let cards = pocket_cards(&t.table, seat, cipher)?;
    t.emit(TableEventKind::CardsShown { seat, cards });

    if has_shown(&t.table, seat.opponent()) {
        settle(t, cipher)?;
    }
    Ok(())
}

fn has_shown(table: &Table, seat: Seat) -> bool {
    seat.pocket_slots()
        .into_iter()
        .all(|slot| table.key_at(seat, slot).is_some())
}

/// Расшифровать карманные карты места обоими фрагментами.
fn pocket_cards<C: CommutativeCipher + ?Sized>(
    table: &Table,
    seat: Seat,
    cipher: &C,
) -> Result<[Card; 2], GameError> {
    let [a, b] = seat.pocket_slots();
    Ok([decode_slot(table, a, cipher)?, decode_slot(table, b, cipher)?])
}

fn decode_slot<C: CommutativeCipher + ?Sized>(
    table: &Table,
    slot: usize,
    cipher: &C,
) -> Result<Card, GameError> {
    let block = table
        .encrypted_cards
        .get(slot)
        .ok_or(GameError::IndexOutOfRange { index: slot })?;
    let (Some(ka), Some(kb)) = (table.key_at(Seat::Alice, slot), table.key_at(Seat::Bob, slot)) else {
        return Err(GameError::UndecodableCard(slot));
    };
    reveal_card(cipher, block, &[&ka, &kb])?.ok_or(GameError::UndecodableCard(slot))
}

/// Оценить обе руки и распределить банк. Ничья — ставки просто возвращаются.
fn settle<C: CommutativeCipher + ?Sized>(t: &mut Transition, cipher: &C) -> Result<(), GameError> {
    let board: [Card; 5] = t
        .table
        .table_cards
        .as_slice()
        .try_into()
        .map_err(|_| GameError::IndexOutOfRange {
            index: t.table.table_cards.len(),
        })?;

    let alice_score = evaluate_best_hand(&pocket_cards(&t.table, Seat::Alice, cipher)?, &board);
    let bob_score = evaluate_best_hand(&pocket_cards(&t.table, Seat::Bob, cipher)?, &board);

    let winner = match alice_score.cmp(&bob_score) {
        Ordering::Greater => Some(Seat::Alice),
        Ordering::Less => Some(Seat::Bob),
        Ordering::Equal => None,
    };

    let pot = t.table.pot();
    let table = &mut t.table;
    if let Some(w) = winner {
        let lost = table.bet(w.opponent());
        *table.bankroll_mut(w.opponent()) -= lost;
        *table.bankroll_mut(w) += lost;
    }
    table.alice_bet = Chips::ZERO;
    table.bob_bet = Chips::ZERO;
    table.state = RoundState::End;
    table.target = None;
    let table_id = table.id;

    t.emit(TableEventKind::ShowdownScores {
        alice: alice_score,
        bob: bob_score,
    });
    if let Some(w) = winner {
        t.emit(TableEventKind::PotAwarded { seat: w, amount: pot });
    }
    t.emit(TableEventKind::HandFinished { winner });
    info!(
        table_id,
        alice = alice_score.0,
        bob = bob_score.0,
        ?winner,
        "showdown settled"
    );
    Ok(())
}
