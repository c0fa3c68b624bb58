use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, DECK_SIZE};

/// Размер зашифрованной колоды на столе: 52 карты + слот 0 (не используется).
pub const DECK_SLOTS: usize = DECK_SIZE as usize + 1;

/// Колода карт. В домене — просто упорядоченный список карт.
/// Перемешивание и шифрование делают игроки (см. `protocol`), НЕ здесь.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    /// Стандартная 52-карточная колода в порядке кодов 0..=51:
    /// Spades 2..A, Hearts 2..A, Diamonds 2..A, Clubs 2..A.
    pub fn standard_52() -> Self {
        let cards = (0..DECK_SIZE).filter_map(Card::from_code).collect();
        Deck { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Карта, лежащая в слоте стола `slot` (1..=52) до перемешивания.
    pub fn card_for_slot(slot: usize) -> Option<Card> {
        if slot == 0 || slot >= DECK_SLOTS {
            return None;
        }
        Card::from_code((slot - 1) as u8)
    }
}
