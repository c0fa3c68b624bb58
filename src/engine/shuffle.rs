//! Две фазы двойного шифрования колоды: SHUFFLE и RECRYPT.
//!
//! В каждой фазе колоду сдаёт сначала alice, потом bob. Каждый видит
//! только свой слой шифра, поэтому итоговый порядок карт не знает никто.

use crate::crypto::CardCipherText;
use crate::domain::deck::DECK_SLOTS;
use crate::domain::player::Seat;
use crate::domain::table::RoundState;
use crate::domain::PlayerId;
use crate::engine::errors::GameError;
use crate::engine::game_loop::Transition;
use crate::engine::hand_history::TableEventKind;
use crate::engine::validation::require_target;

/// Принять колоду от игрока, чья сейчас очередь.
///
/// alice → ход переходит к bob, фаза та же.
/// bob → SHUFFLE переходит в RECRYPT, RECRYPT — в DEAL_POCKET.
pub fn submit_deck(
    t: &mut Transition,
    seat: Seat,
    actor: PlayerId,
    cards: &[CardCipherText],
) -> Result<(), GameError> {
    require_target(&t.table, seat, actor)?;
    if cards.len() != DECK_SLOTS {
        return Err(GameError::InvalidDeckSize {
            expected: DECK_SLOTS,
            got: cards.len(),
        });
    }

    let phase = t.table.state;
    let table = &mut t.table;
    table.encrypted_cards = cards.to_vec();

    match seat {
        Seat::Alice => {
            table.target = Some(Seat::Bob);
        }
        Seat::Bob => {
            // Первая карманная карта — у alice, её ключ раскрывает bob.
            table.target = Some(Seat::Alice);
            if phase == RoundState::Shuffle {
                table.state = RoundState::Recrypt;
            } else {
                table.state = RoundState::DealPocket;
                table.cards_dealt = 0;
            }
        }
    }

    t.emit(TableEventKind::DeckSubmitted { phase, seat });
    Ok(())
}
