//! Модуль оценки силы покерных рук (Texas Hold'em).
//!
//! Основная функция:
//!   `evaluate_best_hand(hole, board, ruleset) -> HandRank`
//!
//! Поддерживаются два варианта правил: обычная 52-карточная колода и
//! short-deck (36 карт, флеш старше фулл-хауса, стрит A-6-7-8-9).

pub mod evaluator;
pub mod hand_rank;
pub mod lookup_tables;

pub use evaluator::evaluate_best_hand;
pub use hand_rank::{describe_hand, hand_category, HandCategory};
