use crate::domain::card::Card;
use crate::domain::hand::HandScore;

use super::hand_rank::HandCategory;
use super::lookup_tables::{detect_straight, weighted_sum, COMBINATION_MASKS};

/// Главная функция: лучшая 5-карточная рука из 2 карманных + 5 общих.
pub fn evaluate_best_hand(pocket: &[Card; 2], board: &[Card; 5]) -> HandScore {
    let seven = [
        pocket[0], pocket[1], board[0], board[1], board[2], board[3], board[4],
    ];
    evaluate_seven(&seven)
}

/// Оценка 7 карт: максимум по всем 21 пятёркам.
///
/// Сначала сортируем по значению — выбранные маской пятёрки
/// тогда тоже отсортированы, на этом держатся формулы кикеров.
pub fn evaluate_seven(cards: &[Card; 7]) -> HandScore {
    let mut sorted = *cards;
    sorted.sort_by_key(|c| (c.value(), c.code()));

    COMBINATION_MASKS
        .iter()
        .map(|&mask| {
            let mut five = [sorted[0]; 5];
            let mut n = 0;
            for (j, card) in sorted.iter().enumerate() {
                if mask & (1 << j) != 0 {
                    five[n] = *card;
                    n += 1;
                }
            }
            evaluate_five(&five)
        })
        .max()
        .unwrap_or(HandScore(0))
}

/// Оценка ровно 5 карт. Порядок входа не важен — сортируем здесь же.
pub fn evaluate_five(cards: &[Card; 5]) -> HandScore {
    let mut sorted = *cards;
    sorted.sort_by_key(|c| (c.value(), c.code()));

    let cv: [u8; 5] = [
        sorted[0].value(),
        sorted[1].value(),
        sorted[2].value(),
        sorted[3].value(),
        sorted[4].value(),
    ];
    let v = |i: usize| cv[i] as u32;

    let is_flush = sorted.iter().all(|c| c.suit_index() == sorted[0].suit_index());
    let straight_high = detect_straight(&cv);

    if is_flush && straight_high.is_some() {
        return HandScore::from_category(HandCategory::StraightFlush, v(0));
    }

    // Размеры групп одинаковых значений, по убыванию: [4,1], [3,2], [2,2,1], ...
    let mut groups: Vec<u8> = Vec::with_capacity(5);
    let mut run = 1u8;
    for i in 1..5 {
        if cv[i] == cv[i - 1] {
            run += 1;
        } else {
            groups.push(run);
            run = 1;
        }
    }
    groups.push(run);
    groups.sort_unstable_by(|a, b| b.cmp(a));

    match groups.as_slice() {
        // В отсортированной пятёрке cv2 всегда из каре/сета,
        // а cv0 + cv4 − cv2 — оставшаяся карта (кикер или пара).
        [4, 1] => HandScore::from_category(
            HandCategory::FourOfAKind,
            1000 * (v(2) + 1) + (v(0) + v(4) - v(2)),
        ),
        [3, 2] => HandScore::from_category(
            HandCategory::FullHouse,
            1000 * (v(2) + 1) + (v(0) + v(4) - v(2)),
        ),
        _ if is_flush => HandScore::from_category(HandCategory::Flush, weighted_sum(&cv)),
        _ if straight_high.is_some() => HandScore::from_category(
            HandCategory::Straight,
            straight_high.map(u32::from).unwrap_or_default(),
        ),
        [3, 1, 1] => HandScore::from_category(
            HandCategory::ThreeOfAKind,
            1000 * (v(2) + 1) + weighted_sum(&cv),
        ),
        // Две пары: cv1 — младшая пара, cv3 — старшая, остаток — кикер.
        [2, 2, 1] => HandScore::from_category(
            HandCategory::TwoPair,
            1000 * (v(3) + 1) + 50 * (v(1) + 1) + (v(0) + v(2) + v(4) - v(1) - v(3)),
        ),
        [2, 1, 1, 1] => HandScore::from_category(HandCategory::OnePair, pair_coefficient(&cv)),
        _ => HandScore::from_category(HandCategory::HighCard, weighted_sum(&cv)),
    }
}

/// Пара: `1000·(значение+1)` плюс три оставшиеся карты с весами их позиций.
fn pair_coefficient(cv: &[u8; 5]) -> u32 {
    let Some(i) = (0..4).find(|&i| cv[i] == cv[i + 1]) else {
        return weighted_sum(cv);
    };
    let kickers: u32 = (0..5)
        .filter(|&j| j != i && j != i + 1)
        .map(|j| (j as u32 + 1) * cv[j] as u32)
        .sum();
    1000 * (cv[i] as u32 + 1) + kickers
}
