use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::hand::HandScore;
use crate::domain::player::Seat;
use crate::domain::table::RoundState;
use crate::domain::{PlayerId, TableId};
use crate::engine::actions::ActionKind;

/// Ставочное действие (для истории).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum BetKind {
    Check,
    Call,
    Raise,
}

/// Тип события за столом.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TableEventKind {
    /// Поиск не нашёл свободного стола — создан новый.
    TableCreated { table_id: TableId, creator: PlayerId },

    /// Игрок занял место.
    PlayerJoined { table_id: TableId, seat: Seat, player: PlayerId },

    /// Игрок ушёл до начала игры.
    PlayerLeft { seat: Seat, player: PlayerId },

    /// Игрок подтвердил готовность.
    PlayerReady { seat: Seat },

    /// Новая раздача началась (колода ждёт перемешивания).
    HandStarted { table_id: TableId, buy_in: Chips },

    /// Колода принята на фазе `phase`.
    DeckSubmitted { phase: RoundState, seat: Seat },

    /// Принят фрагмент ключа для слота колоды.
    KeySubmitted { seat: Seat, index: usize },

    /// Общая карта раскрыта обоими фрагментами.
    CardRevealed { index: usize, card: Card },

    /// Улица закрыта, дальше — раздача борда или шоудаун.
    StreetResolved { cards_dealt: u8, next: RoundState },

    /// Ставочное действие игрока.
    BetPlaced { seat: Seat, kind: BetKind, bet: Chips, pot: Chips },

    /// Игрок раскрыл ключи своих карманных карт.
    CardsShown { seat: Seat, cards: [Card; 2] },

    /// Результат оценки рук на шоудауне.
    ShowdownScores { alice: HandScore, bob: HandScore },

    /// Выплата банка.
    PotAwarded { seat: Seat, amount: Chips },

    /// Раздача завершена. `None` — ничья.
    HandFinished { winner: Option<Seat> },

    /// Запрошен спор (проверка не реализована).
    DisputeRequested { seat: Seat, action: ActionKind },
}

/// Событие с порядковым номером внутри одного перехода.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableEvent {
    pub index: u32,
    pub kind: TableEventKind,
}

/// События, порождённые одним действием.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EventLog {
    pub events: Vec<TableEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: TableEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(TableEvent { index: idx, kind });
    }

    pub fn kinds(&self) -> impl Iterator<Item = &TableEventKind> {
        self.events.iter().map(|e| &e.kind)
    }

    pub fn contains(&self, pred: impl Fn(&TableEventKind) -> bool) -> bool {
        self.kinds().any(pred)
    }
}
