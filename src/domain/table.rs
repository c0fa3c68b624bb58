use core::fmt;

use serde::{Deserialize, Serialize};

use crate::crypto::{CardCipherText, KeyFragment};
use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::deck::DECK_SLOTS;
use crate::domain::player::Seat;
use crate::domain::{PlayerId, TableId};

/// Фаза стола. Порядок — прямой ход игры.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RoundState {
    /// Запись создана, но ещё не выставлена в поиск.
    NotStarted,
    /// Создатель ждёт соперника.
    WaitingForPlayers,
    /// Оба места заняты, ждём готовности обоих.
    TableReady,
    /// Каждый игрок шифрует колоду общим ключом и перемешивает (alice, потом bob).
    Shuffle,
    /// Каждый игрок снимает общий ключ и шифрует каждую карту своим ключом.
    Recrypt,
    /// Раздача карманных карт: соперник раскрывает свой фрагмент ключа.
    DealPocket,
    /// Торговля.
    BetRound,
    /// Раскрытие общих карт: нужны фрагменты обоих игроков.
    DealTable,
    /// Игроки раскрывают ключи своих карманных карт.
    Showdown,
    /// Раздача завершена, банк распределён.
    End,
}

impl fmt::Display for RoundState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RoundState::NotStarted => "NOT_STARTED",
            RoundState::WaitingForPlayers => "WAITING_FOR_PLAYERS",
            RoundState::TableReady => "TABLE_READY",
            RoundState::Shuffle => "SHUFFLE",
            RoundState::Recrypt => "RECRYPT",
            RoundState::DealPocket => "DEAL_POCKET",
            RoundState::BetRound => "BET_ROUND",
            RoundState::DealTable => "DEAL_TABLE",
            RoundState::Showdown => "SHOWDOWN",
            RoundState::End => "END",
        };
        f.write_str(s)
    }
}

/// Слоты ключей, параллельные `encrypted_cards`. `None` — фрагмент ещё не раскрыт.
pub type KeySlots = Vec<Option<KeyFragment>>;

/// Состояние стола на двоих (одна запись на `id`).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Table {
    pub id: TableId,

    pub state: RoundState,
    /// Кто должен действовать следующим (смысл зависит от `state`).
    pub target: Option<Seat>,

    /// Создатель стола.
    pub alice: Option<PlayerId>,
    /// Второй игрок (пусто, пока ждём соперника).
    pub bob: Option<PlayerId>,

    pub alice_bankroll: Chips,
    pub bob_bankroll: Chips,
    /// Ставки за текущую раздачу. Всегда `bet <= bankroll`.
    pub alice_bet: Chips,
    pub bob_bet: Chips,
    pub buy_in: Chips,

    /// Открытые общие карты (0–5).
    pub table_cards: Vec<Card>,
    /// Сколько слотов колоды уже разыграно (0–9).
    pub cards_dealt: u8,

    /// Дважды зашифрованная колода после перемешивания (слот 0 не используется).
    pub encrypted_cards: Vec<CardCipherText>,
    pub alice_keys: KeySlots,
    pub bob_keys: KeySlots,

    pub alice_ready: bool,
    pub bob_ready: bool,
}

impl Table {
    /// Пустая запись стола.
    pub fn new(id: TableId, buy_in: Chips) -> Self {
        Self {
            id,
            state: RoundState::NotStarted,
            target: None,
            alice: None,
            bob: None,
            alice_bankroll: Chips::ZERO,
            bob_bankroll: Chips::ZERO,
            alice_bet: Chips::ZERO,
            bob_bet: Chips::ZERO,
            buy_in,
            table_cards: Vec::new(),
            cards_dealt: 0,
            encrypted_cards: vec![CardCipherText::ZERO; DECK_SLOTS],
            alice_keys: vec![None; DECK_SLOTS],
            bob_keys: vec![None; DECK_SLOTS],
            alice_ready: false,
            bob_ready: false,
        }
    }

    /// На каком месте сидит игрок.
    pub fn seat_of(&self, player: PlayerId) -> Option<Seat> {
        if self.alice == Some(player) {
            Some(Seat::Alice)
        } else if self.bob == Some(player) {
            Some(Seat::Bob)
        } else {
            None
        }
    }

    pub fn player(&self, seat: Seat) -> Option<PlayerId> {
        match seat {
            Seat::Alice => self.alice,
            Seat::Bob => self.bob,
        }
    }

    /// Игрок, который должен действовать сейчас.
    pub fn target_player(&self) -> Option<PlayerId> {
        self.target.and_then(|s| self.player(s))
    }

    pub fn bankroll(&self, seat: Seat) -> Chips {
        match seat {
            Seat::Alice => self.alice_bankroll,
            Seat::Bob => self.bob_bankroll,
        }
    }

    pub fn bankroll_mut(&mut self, seat: Seat) -> &mut Chips {
        match seat {
            Seat::Alice => &mut self.alice_bankroll,
            Seat::Bob => &mut self.bob_bankroll,
        }
    }

    pub fn bet(&self, seat: Seat) -> Chips {
        match seat {
            Seat::Alice => self.alice_bet,
            Seat::Bob => self.bob_bet,
        }
    }

    pub fn bet_mut(&mut self, seat: Seat) -> &mut Chips {
        match seat {
            Seat::Alice => &mut self.alice_bet,
            Seat::Bob => &mut self.bob_bet,
        }
    }

    pub fn keys(&self, seat: Seat) -> &KeySlots {
        match seat {
            Seat::Alice => &self.alice_keys,
            Seat::Bob => &self.bob_keys,
        }
    }

    pub fn keys_mut(&mut self, seat: Seat) -> &mut KeySlots {
        match seat {
            Seat::Alice => &mut self.alice_keys,
            Seat::Bob => &mut self.bob_keys,
        }
    }

    pub fn is_ready(&self, seat: Seat) -> bool {
        match seat {
            Seat::Alice => self.alice_ready,
            Seat::Bob => self.bob_ready,
        }
    }

    pub fn set_ready(&mut self, seat: Seat, ready: bool) {
        match seat {
            Seat::Alice => self.alice_ready = ready,
            Seat::Bob => self.bob_ready = ready,
        }
    }

    /// Банк = сумма ставок обоих игроков.
    pub fn pot(&self) -> Chips {
        self.alice_bet + self.bob_bet
    }

    /// Фрагмент ключа игрока для слота, если он уже раскрыт.
    pub fn key_at(&self, seat: Seat, index: usize) -> Option<KeyFragment> {
        self.keys(seat).get(index).copied().flatten()
    }

    /// Можно ли найти стол поиском: ждёт соперника и второе место свободно.
    pub fn is_open(&self) -> bool {
        self.state == RoundState::WaitingForPlayers && self.bob.is_none()
    }

    /// Сбросить всё, что относится к одной раздаче. Банкроллы и места не трогаем.
    pub fn reset_hand(&mut self) {
        self.alice_bet = Chips::ZERO;
        self.bob_bet = Chips::ZERO;
        self.table_cards.clear();
        self.cards_dealt = 0;
        self.encrypted_cards = vec![CardCipherText::ZERO; DECK_SLOTS];
        self.alice_keys = vec![None; DECK_SLOTS];
        self.bob_keys = vec![None; DECK_SLOTS];
    }
}
