use crate::domain::hand::HandScore;

/// Ширина «полосы» одной категории в итоговом счёте.
pub const CATEGORY_BAND: u32 = 100_000;

/// Категория покерной руки по силе.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum HandCategory {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
}

impl HandCategory {
    /// Базовое значение категории. Кикеры всегда укладываются в одну полосу,
    /// поэтому старшая категория выигрывает независимо от кикеров.
    pub const fn base(self) -> u32 {
        match self {
            HandCategory::HighCard => 0,
            HandCategory::OnePair => 300_000,
            HandCategory::TwoPair => 400_000,
            HandCategory::ThreeOfAKind => 500_000,
            HandCategory::Straight => 600_000,
            HandCategory::Flush => 700_000,
            HandCategory::FullHouse => 800_000,
            HandCategory::FourOfAKind => 900_000,
            HandCategory::StraightFlush => 1_000_000,
        }
    }
}

impl HandScore {
    /// Собрать счёт из категории и надбавки за кикеры.
    pub fn from_category(category: HandCategory, tie_break: u32) -> Self {
        HandScore(category.base() + tie_break)
    }

    /// Вытащить категорию из счёта.
    pub fn category(&self) -> HandCategory {
        if self.0 >= HandCategory::StraightFlush.base() {
            return HandCategory::StraightFlush;
        }
        match self.0 / CATEGORY_BAND {
            9 => HandCategory::FourOfAKind,
            8 => HandCategory::FullHouse,
            7 => HandCategory::Flush,
            6 => HandCategory::Straight,
            5 => HandCategory::ThreeOfAKind,
            4 => HandCategory::TwoPair,
            3 => HandCategory::OnePair,
            _ => HandCategory::HighCard,
        }
    }
}

/// Удобная функция – получить категорию из счёта.
pub fn hand_category(score: HandScore) -> HandCategory {
    score.category()
}

/// Человеческое описание руки по категории.
pub fn describe_hand(score: HandScore) -> String {
    let name = match score.category() {
        HandCategory::HighCard => "High card",
        HandCategory::OnePair => "One pair",
        HandCategory::TwoPair => "Two pair",
        HandCategory::ThreeOfAKind => "Three of a kind",
        HandCategory::Straight => "Straight",
        HandCategory::Flush => "Flush",
        HandCategory::FullHouse => "Full house",
        HandCategory::FourOfAKind => "Four of a kind",
        HandCategory::StraightFlush => "Straight flush",
    };
    name.to_string()
}
