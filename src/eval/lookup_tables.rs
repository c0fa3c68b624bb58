/// Все 21 способ выбрать 5 карт из 7.
///
/// Бит `j` (0..=6) означает «взять j-ю карту из отсортированных семи».
pub const COMBINATION_MASKS: [u8; 21] = [
    31, 47, 79, 55, 87, 103, 59, 91, 107, 115, 61, 93, 109, 117, 121, 62, 94, 110, 118, 122, 124,
];

/// Значения колеса A-2-3-4-5 после сортировки по возрастанию.
pub const WHEEL_VALUES: [u8; 5] = [0, 1, 2, 3, 12];

/// Значение старшей карты колеса (пятёрка).
pub const WHEEL_HIGH: u8 = 3;

/// Веса позиций в отсортированной пятёрке (младшая карта — вес 1).
pub const POSITION_WEIGHTS: [u32; 5] = [1, 2, 3, 4, 5];

/// Найти стрит в отсортированных значениях.
/// Возвращает значение старшей карты стрита.
///
/// Единственный «перенос» через туза — колесо A2345 (→ пятёрка).
/// Q-K-A-2-3 и подобные стритом не считаются.
pub fn detect_straight(values: &[u8; 5]) -> Option<u8> {
    if *values == WHEEL_VALUES {
        return Some(WHEEL_HIGH);
    }
    if values.windows(2).all(|w| w[1] == w[0] + 1) {
        return Some(values[4]);
    }
    None
}

/// Взвешенная сумма значений: `5·cv4 + 4·cv3 + 3·cv2 + 2·cv1 + cv0`.
pub fn weighted_sum(values: &[u8; 5]) -> u32 {
    values
        .iter()
        .zip(POSITION_WEIGHTS.iter())
        .map(|(v, w)| *v as u32 * w)
        .sum()
}
