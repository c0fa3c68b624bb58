// tests/common/mod.rs
//
// Общий стенд для интеграционных тестов движка: два игрока, TableManager
// поверх in-memory хранилища и эскроу, SRA-шифр и сценарная раздача.

#![allow(dead_code)]

use mental_poker::crypto::SraCipher;
use mental_poker::domain::card::Card;
use mental_poker::domain::chips::Chips;
use mental_poker::domain::config::GameConfig;
use mental_poker::domain::player::Seat;
use mental_poker::domain::table::{RoundState, Table};
use mental_poker::domain::{PlayerId, TableId};
use mental_poker::engine::{Action, EventLog, GameError, RandomSource, TableManager};
use mental_poker::infra::{InMemoryEscrow, InMemoryPokerStorage, RngSeed};
use mental_poker::protocol::Participant;

pub const ALICE: PlayerId = 10;
pub const BOB: PlayerId = 20;
pub const OUTSIDER: PlayerId = 99;
pub const BUY_IN: u64 = 1000;

pub type Manager = TableManager<InMemoryPokerStorage, SraCipher, InMemoryEscrow>;

/// Перемешивание, которое ничего не двигает.
pub struct NoShuffle;

impl RandomSource for NoShuffle {
    fn shuffle<T>(&mut self, _slice: &mut [T]) {}
}

/// Раскладывает карты с заданными кодами в начало колоды (слоты 1, 2, ...).
/// Работает, если до этого колода была в исходном порядке.
pub struct DealOrder(pub Vec<u8>);

impl RandomSource for DealOrder {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        let mut code_at: Vec<u8> = (0..slice.len() as u8).collect();
        for (i, code) in self.0.iter().enumerate() {
            let j = code_at
                .iter()
                .position(|c| c == code)
                .expect("код карты должен быть в колоде");
            slice.swap(i, j);
            code_at.swap(i, j);
        }
    }
}

pub fn card(s: &str) -> Card {
    s.parse().expect("валидная карта")
}

pub fn codes(cards: &[&str]) -> Vec<u8> {
    cards.iter().map(|s| card(s).code()).collect()
}

/// Стол на двоих, который ведут тесты.
pub struct Game {
    pub manager: Manager,
    pub table_id: TableId,
    pub alice: Participant,
    pub bob: Participant,
}

impl Game {
    /// Оба игрока сели за стол (TABLE_READY).
    pub fn seated() -> Game {
        let mut escrow = InMemoryEscrow::new();
        escrow.deposit(ALICE, Chips::new(BUY_IN * 5));
        escrow.deposit(BOB, Chips::new(BUY_IN * 5));
        let config = GameConfig {
            buy_in: Chips::new(BUY_IN),
            ..GameConfig::default()
        };

        let mut manager = TableManager::new(InMemoryPokerStorage::new(), SraCipher, escrow, config);
        let (table_id, _) = manager.search_game(ALICE, None).expect("alice создаёт стол");
        let (joined, _) = manager.search_game(BOB, None).expect("bob садится");
        assert_eq!(table_id, joined);

        let alice = Participant::from_seed(&SraCipher, Seat::Alice, &RngSeed::from_u64(1));
        let bob = Participant::from_seed(&SraCipher, Seat::Bob, &RngSeed::from_u64(2));

        Game {
            manager,
            table_id,
            alice,
            bob,
        }
    }

    /// Оба готовы, бай-ины списаны (SHUFFLE).
    pub fn started() -> Game {
        let mut g = Game::seated();
        g.act(Seat::Alice, Action::StartGame).expect("alice готова");
        g.act(Seat::Bob, Action::StartGame).expect("bob готов");
        g
    }

    /// Колода перемешана и перешифрована (DEAL_POCKET).
    /// `order` — карты для слотов 1.. (alice, alice, bob, bob, борд ×5).
    pub fn dealt_deck(order: &[&str]) -> Game {
        let mut g = Game::started();
        g.shuffle_and_recrypt(order);
        g
    }

    /// Карманные карты розданы (BET_ROUND, префлоп).
    pub fn preflop(order: &[&str]) -> Game {
        let mut g = Game::dealt_deck(order);
        g.deal_pockets();
        g
    }

    pub fn id(seat: Seat) -> PlayerId {
        match seat {
            Seat::Alice => ALICE,
            Seat::Bob => BOB,
        }
    }

    pub fn participant(&self, seat: Seat) -> &Participant {
        match seat {
            Seat::Alice => &self.alice,
            Seat::Bob => &self.bob,
        }
    }

    pub fn table(&self) -> Table {
        self.manager.table(self.table_id).expect("стол существует")
    }

    pub fn act(&mut self, seat: Seat, action: Action) -> Result<EventLog, GameError> {
        self.manager.apply(Game::id(seat), self.table_id, &action)
    }

    pub fn shuffle_and_recrypt(&mut self, order: &[&str]) {
        let cipher = SraCipher;

        let deck = self
            .alice
            .shuffle(&cipher, &Participant::initial_deck(), &mut NoShuffle)
            .unwrap();
        self.act(Seat::Alice, Action::DeckShuffled { cards: deck }).unwrap();

        let deck = self
            .bob
            .shuffle(&cipher, &self.table().encrypted_cards, &mut DealOrder(codes(order)))
            .unwrap();
        self.act(Seat::Bob, Action::DeckShuffled { cards: deck }).unwrap();

        let deck = self.alice.recrypt(&cipher, &self.table().encrypted_cards).unwrap();
        self.act(Seat::Alice, Action::DeckRecrypted { cards: deck }).unwrap();

        let deck = self.bob.recrypt(&cipher, &self.table().encrypted_cards).unwrap();
        self.act(Seat::Bob, Action::DeckRecrypted { cards: deck }).unwrap();
    }

    /// Каждый отправляет фрагмент, который от него сейчас ждут. Возвращает, кто отправил.
    pub fn send_next_key(&mut self) -> Option<Seat> {
        let table = self.table();
        for seat in Seat::BOTH {
            if let Some(key) = self.participant(seat).next_key_for(&table) {
                self.act(seat, Action::CardKey { key }).unwrap();
                return Some(seat);
            }
        }
        None
    }

    pub fn deal_pockets(&mut self) {
        for _ in 0..4 {
            self.send_next_key().expect("ждём карманный ключ");
        }
        assert_eq!(self.table().state, RoundState::BetRound);
    }

    /// Открыть общие карты до следующего BET_ROUND.
    pub fn deal_board(&mut self) {
        while self.table().state == RoundState::DealTable {
            self.send_next_key().expect("ждём ключ общей карты");
        }
    }

    pub fn check_around(&mut self) {
        self.act(Seat::Alice, Action::Check).unwrap();
        self.act(Seat::Bob, Action::Check).unwrap();
    }

    /// Пройти все улицы чеками до SHOWDOWN (начиная с BET_ROUND).
    pub fn check_to_showdown(&mut self) {
        while self.table().state == RoundState::BetRound {
            self.check_around();
            self.deal_board();
        }
        assert_eq!(self.table().state, RoundState::Showdown);
    }

    pub fn show(&mut self, seat: Seat) -> Result<EventLog, GameError> {
        let keys = self.participant(seat).pocket_keys();
        self.act(seat, Action::ShowCards { keys })
    }
}
