use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Сколько карт в колоде.
pub const DECK_SIZE: u8 = 52;

/// Сколько рангов в одной масти.
pub const RANKS_PER_SUIT: u8 = 13;

/// Масть карты. Порядок совпадает с кодированием `card / 13`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    Spades = 0,   // ♠
    Hearts = 1,   // ♥
    Diamonds = 2, // ♦
    Clubs = 3,    // ♣
}

/// Ранг карты. Значение = `card % 13` (0 = двойка, 12 = туз).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Rank {
    Two = 0,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    pub fn from_index(idx: u8) -> Option<Suit> {
        Self::ALL.get(idx as usize).copied()
    }
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    pub fn from_value(value: u8) -> Option<Rank> {
        Self::ALL.get(value as usize).copied()
    }
}

/// Карта в целочисленном кодировании 0..=51.
///
/// `suit = code / 13`, `value = code % 13`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Card(u8);

impl Card {
    /// Карта из кода. `None`, если код вне 0..=51.
    pub const fn from_code(code: u8) -> Option<Card> {
        if code < DECK_SIZE {
            Some(Card(code))
        } else {
            None
        }
    }

    pub fn new(rank: Rank, suit: Suit) -> Self {
        Card(suit as u8 * RANKS_PER_SUIT + rank as u8)
    }

    pub const fn code(self) -> u8 {
        self.0
    }

    /// Номер масти 0..=3.
    pub const fn suit_index(self) -> u8 {
        self.0 / RANKS_PER_SUIT
    }

    /// Значение ранга 0..=12.
    pub const fn value(self) -> u8 {
        self.0 % RANKS_PER_SUIT
    }

    pub fn suit(self) -> Suit {
        match self.suit_index() {
            0 => Suit::Spades,
            1 => Suit::Hearts,
            2 => Suit::Diamonds,
            _ => Suit::Clubs,
        }
    }

    pub fn rank(self) -> Rank {
        Rank::from_value(self.value()).unwrap_or(Rank::Two)
    }
}

impl TryFrom<u8> for Card {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Card::from_code(code).ok_or_else(|| format!("Card code out of range: {code}"))
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ch = match self {
            Suit::Spades => 's',
            Suit::Hearts => 'h',
            Suit::Diamonds => 'd',
            Suit::Clubs => 'c',
        };
        write!(f, "{ch}")
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const CHARS: [char; 13] = ['2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K', 'A'];
        write!(f, "{}", CHARS[*self as usize])
    }
}

impl fmt::Display for Card {
    /// Формат вида `As`, `Td`, `7c`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

/// Парсинг строки вида "As", "Td", "7c".
impl FromStr for Card {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(r_ch), Some(s_ch), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err("Card string must have length 2".into());
        };

        let rank = match r_ch {
            '2' => Rank::Two,
            '3' => Rank::Three,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' | 't' => Rank::Ten,
            'J' | 'j' => Rank::Jack,
            'Q' | 'q' => Rank::Queen,
            'K' | 'k' => Rank::King,
            'A' | 'a' => Rank::Ace,
            _ => return Err(format!("Invalid rank: {r_ch}")),
        };

        let suit = match s_ch {
            's' | 'S' => Suit::Spades,
            'h' | 'H' => Suit::Hearts,
            'd' | 'D' => Suit::Diamonds,
            'c' | 'C' => Suit::Clubs,
            _ => return Err(format!("Invalid suit: {s_ch}")),
        };

        Ok(Card::new(rank, suit))
    }
}
