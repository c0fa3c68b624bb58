// tests/engine_error_tests.rs
//
// Ошибки движка и главное свойство: неудачное действие ничего не меняет.
//
//  1) таблица допустимости действий по состояниям
//  2) чистый переход: исходный стол не трогается
//  3) крючки спора: принимаются, стол не меняется
//  4) proptest: случайное действие от случайного игрока в случайной фазе

mod common;

use common::*;

use proptest::prelude::*;

use mental_poker::crypto::{CardCipherText, KeyFragment, SraCipher};
use mental_poker::domain::chips::Chips;
use mental_poker::domain::config::GameConfig;
use mental_poker::domain::player::Seat;
use mental_poker::domain::table::{RoundState, Table};
use mental_poker::domain::PlayerId;
use mental_poker::engine::{admits, apply_action, Action, ActionContext, ActionKind, GameError, TableEventKind};
use mental_poker::infra::InMemoryEscrow;

const ORDER: [&str; 9] = ["As", "Ah", "2c", "7d", "Ks", "Kh", "5d", "9c", "Jc"];

// ===== ТЕСТ 1: таблица допустимости =====
#[test]
fn admission_table_matches_phases() {
    use ActionKind as A;

    assert!(!admits(RoundState::NotStarted, A::StartGame));
    assert!(!admits(RoundState::NotStarted, A::Dispute));
    assert!(admits(RoundState::WaitingForPlayers, A::CancelGame));
    assert!(!admits(RoundState::WaitingForPlayers, A::StartGame));
    assert!(admits(RoundState::TableReady, A::StartGame));
    assert!(admits(RoundState::Shuffle, A::DeckShuffled));
    assert!(!admits(RoundState::Shuffle, A::DeckRecrypted));
    assert!(admits(RoundState::Recrypt, A::DeckRecrypted));
    assert!(admits(RoundState::DealPocket, A::CardKey));
    assert!(admits(RoundState::DealTable, A::CardKey));
    for kind in [A::Check, A::Call, A::Raise, A::Fold] {
        assert!(admits(RoundState::BetRound, kind));
        assert!(!admits(RoundState::DealTable, kind));
    }
    assert!(admits(RoundState::Showdown, A::ShowCards));
    assert!(admits(RoundState::End, A::NewHand));
    assert!(!admits(RoundState::End, A::Fold));
    assert!(!admits(RoundState::TableReady, A::Dispute), "до старта спорить не о чем");
    assert!(admits(RoundState::BetRound, A::DisputeStep));
}

// ===== ТЕСТ 2: apply_action не трогает исходный стол =====
#[test]
fn apply_action_is_pure() {
    let g = Game::preflop(&ORDER);
    let table = g.table();
    let snapshot = table.clone();
    let ledger = InMemoryEscrow::new();
    let config = GameConfig::default();
    let ctx = ActionContext::new(&SraCipher, &ledger, &config);

    let t = apply_action(&table, ALICE, &Action::Raise { amount: Chips::new(10) }, &ctx).unwrap();
    assert_eq!(t.table.alice_bet, Chips::new(10));
    assert_eq!(table, snapshot);

    let err = apply_action(&table, BOB, &Action::Check, &ctx).unwrap_err();
    assert_eq!(err, GameError::NotYourTurn(BOB));
}

// ===== ТЕСТ 3: крючки спора =====
#[test]
fn dispute_hooks_leave_table_unchanged() {
    let mut g = Game::preflop(&ORDER);
    let before = g.table();

    for action in [
        Action::Dispute,
        Action::CardKeys { keys: vec![g.bob.card_key(1)] },
        Action::DisputeStep { step: 2 },
    ] {
        let kind = action.kind();
        let events = g.act(Seat::Bob, action).unwrap();
        assert!(events.contains(|e| *e == TableEventKind::DisputeRequested { seat: Seat::Bob, action: kind }));
        assert_eq!(g.table(), before);
    }

    let err = g.manager.apply(OUTSIDER, g.table_id, &Action::Dispute).unwrap_err();
    assert_eq!(err, GameError::Unauthorized(OUTSIDER));
}

// ===== ТЕСТ 4: состояние проверяется раньше места за столом =====
#[test]
fn state_is_checked_before_seat() {
    let mut g = Game::seated();
    let err = g.manager.apply(OUTSIDER, g.table_id, &Action::Fold).unwrap_err();
    assert!(matches!(err, GameError::InvalidState { .. }));
}

/// До какой фазы довести стол перед случайным действием.
fn game_at(phase: u8) -> Game {
    match phase {
        0 => Game::seated(),
        1 => Game::started(),
        2 => Game::dealt_deck(&ORDER),
        3 => Game::preflop(&ORDER),
        4 => {
            let mut g = Game::preflop(&ORDER);
            g.check_around();
            g
        }
        _ => {
            let mut g = Game::preflop(&ORDER);
            g.check_to_showdown();
            g
        }
    }
}

fn any_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        Just(Action::CancelGame),
        Just(Action::StartGame),
        (0usize..60).prop_map(|n| Action::DeckShuffled { cards: vec![CardCipherText::ZERO; n] }),
        Just(Action::DeckRecrypted { cards: vec![CardCipherText::ZERO; 53] }),
        any::<[u8; 32]>().prop_map(|b| Action::CardKey { key: KeyFragment(b) }),
        Just(Action::Check),
        Just(Action::Call),
        (0u64..3000).prop_map(|a| Action::Raise { amount: Chips::new(a) }),
        Just(Action::Fold),
        any::<[u8; 32]>().prop_map(|b| Action::ShowCards { keys: [KeyFragment(b); 2] }),
        Just(Action::NewHand),
    ]
}

fn actor(idx: u8) -> PlayerId {
    [ALICE, BOB, OUTSIDER][idx as usize % 3]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    // ===== ТЕСТ 5: неудачное действие — no-op =====
    #[test]
    fn failed_action_is_a_no_op(phase in 0u8..6, who in 0u8..3, action in any_action()) {
        let mut g = game_at(phase);
        let before: Table = g.table();
        let transfers_before = g.manager.ledger().transfers().len();

        if g.manager.apply(actor(who), g.table_id, &action).is_err() {
            prop_assert_eq!(g.table(), before);
            prop_assert_eq!(g.manager.ledger().transfers().len(), transfers_before);
        }
    }
}
