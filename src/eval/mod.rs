//! Модуль оценки силы покерных рук (Texas Hold'em, 7 карт).
//!
//! Основная функция:
//!   `evaluate_best_hand(pocket, board) -> HandScore`
//!
//! Счёт — одно число: категория задаёт полосу шириной 100 000,
//! внутри полосы — надбавка за кикеры.

pub mod evaluator;
pub mod hand_rank;
pub mod lookup_tables;

pub use evaluator::{evaluate_best_hand, evaluate_five, evaluate_seven};
pub use hand_rank::{describe_hand, hand_category, HandCategory};
