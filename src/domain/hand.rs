use serde::{Deserialize, Serialize};

use crate::domain::player::Seat;

/// Сколько слотов занято после раздачи карманных карт (2 игрока × 2 карты).
pub const POCKET_CARDS_DEALT: u8 = 4;

/// Сколько слотов занято после флопа (`4 + 3`).
pub const FLOP_CARDS_DEALT: u8 = 7;

/// Сколько слотов занято после ривера (`4 + 3 + 1 + 1`).
pub const ALL_CARDS_DEALT: u8 = 9;

/// Улица раздачи (выводится из `cards_dealt`).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
}

impl Street {
    pub fn from_cards_dealt(cards_dealt: u8) -> Street {
        match cards_dealt {
            0..=6 => Street::Preflop,
            7 => Street::Flop,
            8 => Street::Turn,
            _ => Street::River,
        }
    }
}

/// Кому принадлежит слот колоды в порядке раздачи.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum DealSlot {
    /// Карманная карта игрока.
    Pocket(Seat),
    /// Общая карта (флоп/тёрн/ривер).
    Community,
    /// Слот 0 и всё, что после ривера, в раздаче не участвует.
    Unused,
}

impl DealSlot {
    /// Слоты 1–2 — alice, 3–4 — bob, 5–9 — борд.
    pub fn of(index: usize) -> DealSlot {
        match index {
            1 | 2 => DealSlot::Pocket(Seat::Alice),
            3 | 4 => DealSlot::Pocket(Seat::Bob),
            5..=9 => DealSlot::Community,
            _ => DealSlot::Unused,
        }
    }
}

/// Итоговая сила руки: категория и кикеры, упакованные в одно число.
/// Больше = сильнее.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandScore(pub u32);
