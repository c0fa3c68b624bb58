use core::fmt;

use serde::{Deserialize, Serialize};

/// Место за столом на двоих.
///
/// Alice — создатель стола, она же ходит первой на каждой фазе.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Seat {
    Alice,
    Bob,
}

impl Seat {
    pub const BOTH: [Seat; 2] = [Seat::Alice, Seat::Bob];

    /// Соперник по столу.
    pub fn opponent(self) -> Seat {
        match self {
            Seat::Alice => Seat::Bob,
            Seat::Bob => Seat::Alice,
        }
    }

    /// Индексы слотов колоды с карманными картами этого места.
    pub fn pocket_slots(self) -> [usize; 2] {
        match self {
            Seat::Alice => [1, 2],
            Seat::Bob => [3, 4],
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seat::Alice => write!(f, "alice"),
            Seat::Bob => write!(f, "bob"),
        }
    }
}
