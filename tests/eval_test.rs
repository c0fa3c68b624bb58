// tests/eval_test.rs
//
// Оценка 7-карточных рук: фиксированные очки, порядок категорий,
// стрит с тузом снизу, детерминированность.

use proptest::prelude::*;

use mental_poker::domain::card::Card;
use mental_poker::domain::hand::HandScore;
use mental_poker::eval::{describe_hand, evaluate_best_hand, evaluate_five, evaluate_seven, hand_category, HandCategory};

fn five(codes: [u8; 5]) -> [Card; 5] {
    codes.map(|c| Card::from_code(c).unwrap())
}

fn parse<const N: usize>(cards: [&str; N]) -> [Card; N] {
    cards.map(|s| s.parse::<Card>().unwrap())
}

// ===== ТЕСТ 1: стрит-флеш 2–6 =====
#[test]
fn low_straight_flush_scores_one_million() {
    assert_eq!(evaluate_five(&five([0, 1, 2, 3, 4])), HandScore(1_000_000));
}

// ===== ТЕСТ 2: каре двоек с кикером-шестёркой =====
#[test]
fn four_twos_with_six_kicker() {
    assert_eq!(evaluate_five(&five([0, 13, 26, 39, 4])), HandScore(901_004));
}

// ===== ТЕСТ 3: две пары (двойки и тройки, кикер туз) =====
#[test]
fn two_pair_exact_score() {
    // 1000·(1+1) + 50·(0+1) + (0 + 1 + 12 − 0 − 1)
    assert_eq!(evaluate_five(&five([0, 1, 39, 40, 51])), HandScore(402_062));
}

// ===== ТЕСТ 4: порядок входа не важен =====
#[test]
fn input_order_does_not_matter() {
    assert_eq!(evaluate_five(&five([51, 40, 1, 39, 0])), HandScore(402_062));
    assert_eq!(evaluate_five(&five([39, 4, 26, 13, 0])), HandScore(901_004));
}

// ===== ТЕСТ 5: каждая категория бьёт предыдущую =====
#[test]
fn categories_are_strictly_ordered() {
    let ladder = [
        parse(["2s", "4d", "7h", "9c", "Jd"]), // старшая карта
        parse(["2s", "2d", "7h", "9c", "Jd"]), // пара
        parse(["2s", "2d", "7h", "7c", "Jd"]), // две пары
        parse(["2s", "2d", "2h", "9c", "Jd"]), // сет
        parse(["5s", "6d", "7h", "8c", "9d"]), // стрит
        parse(["2d", "4d", "7d", "9d", "Jd"]), // флеш
        parse(["2s", "2d", "2h", "9c", "9d"]), // фулл-хаус
        parse(["2s", "2d", "2h", "2c", "Jd"]), // каре
        parse(["5d", "6d", "7d", "8d", "9d"]), // стрит-флеш
    ];
    let expected = [
        HandCategory::HighCard,
        HandCategory::OnePair,
        HandCategory::TwoPair,
        HandCategory::ThreeOfAKind,
        HandCategory::Straight,
        HandCategory::Flush,
        HandCategory::FullHouse,
        HandCategory::FourOfAKind,
        HandCategory::StraightFlush,
    ];

    let scores: Vec<HandScore> = ladder.iter().map(evaluate_five).collect();
    for (score, cat) in scores.iter().zip(expected) {
        assert_eq!(hand_category(*score), cat, "score {}", score.0);
    }
    assert!(scores.windows(2).all(|w| w[0] < w[1]));

    // Худшая рука категории выше лучшей руки предыдущей.
    let best_high = evaluate_five(&parse(["9s", "Jd", "Qh", "Kc", "Ad"]));
    let worst_pair = evaluate_five(&parse(["2s", "2d", "3h", "4c", "5d"]));
    assert!(best_high < worst_pair);
}

// ===== ТЕСТ 6: стрит с тузом снизу — младший стрит =====
#[test]
fn wheel_is_the_lowest_straight() {
    let wheel = evaluate_five(&parse(["As", "2d", "3h", "4c", "5d"]));
    let six_high = evaluate_five(&parse(["2s", "3d", "4h", "5c", "6d"]));
    let broadway = evaluate_five(&parse(["Ts", "Jd", "Qh", "Kc", "Ad"]));

    assert_eq!(hand_category(wheel), HandCategory::Straight);
    assert_eq!(wheel, HandScore(600_003));
    assert!(wheel < six_high);
    assert!(six_high < broadway);
}

// ===== ТЕСТ 7: перехода через туза нет =====
#[test]
fn no_wrap_around_straight() {
    let score = evaluate_five(&parse(["Qs", "Kd", "Ah", "2c", "3d"]));
    assert_eq!(hand_category(score), HandCategory::HighCard);
}

// ===== ТЕСТ 8: лучшая пятёрка из семи =====
#[test]
fn best_five_of_seven() {
    let pocket = parse(["Ah", "Kh"]);
    let board = parse(["Qh", "Jh", "Th", "2c", "2d"]);
    let score = evaluate_best_hand(&pocket, &board);
    assert_eq!(hand_category(score), HandCategory::StraightFlush);
    assert_eq!(score, HandScore(1_000_008));
    assert_eq!(describe_hand(score), "Straight flush");

    let pocket = parse(["9c", "9d"]);
    let board = parse(["9h", "4s", "4d", "Kc", "2h"]);
    assert_eq!(hand_category(evaluate_best_hand(&pocket, &board)), HandCategory::FullHouse);
}

// ===== ТЕСТ 9: кикер решает внутри категории =====
#[test]
fn kicker_breaks_ties_within_category() {
    let board = parse(["Kd", "Ks", "7h", "5c", "2d"]);
    let ace = evaluate_best_hand(&parse(["Ac", "3h"]), &board);
    let queen = evaluate_best_hand(&parse(["Qc", "3s"]), &board);
    assert_eq!(hand_category(ace), HandCategory::OnePair);
    assert!(ace > queen);
}

fn seven_distinct() -> impl Strategy<Value = [u8; 7]> {
    proptest::sample::subsequence((0u8..52).collect::<Vec<_>>(), 7).prop_shuffle().prop_map(|v| {
        let mut out = [0u8; 7];
        out.copy_from_slice(&v);
        out
    })
}

proptest! {
    // ===== ТЕСТ 10: результат не зависит от порядка карт =====
    #[test]
    fn seven_card_score_is_permutation_invariant(codes in seven_distinct()) {
        let cards = codes.map(|c| Card::from_code(c).unwrap());
        let mut reversed = cards;
        reversed.reverse();

        let a = evaluate_seven(&cards);
        prop_assert_eq!(a, evaluate_seven(&reversed));
        prop_assert_eq!(a, evaluate_seven(&cards));

        let pocket = [cards[0], cards[1]];
        let board = [cards[2], cards[3], cards[4], cards[5], cards[6]];
        prop_assert_eq!(a, evaluate_best_hand(&pocket, &board));
    }
}
