//! Тесты оценщика рук: категории, кикеры, колёса,
//! переключение вариантов правил (standard / short-deck).

use holdem_engine::domain::{Card, Ruleset};
use holdem_engine::eval::{evaluate_best_hand, hand_category, HandCategory};

/// Утилита: распарсить список карт вида "Ah Kd 7c".
fn cards(s: &str) -> Vec<Card> {
    s.split_whitespace()
        .map(|c| c.parse().expect("valid card"))
        .collect()
}

fn eval(hole: &str, board: &str, ruleset: Ruleset) -> holdem_engine::domain::HandRank {
    evaluate_best_hand(&cards(hole), &cards(board), ruleset)
}

//
// ====================== БАЗОВЫЕ КАТЕГОРИИ ======================
//

#[test]
fn categories_standard() {
    let r = eval("Ah Kd", "Qc 9s 7h 4d 2s", Ruleset::Standard);
    assert_eq!(hand_category(r), HandCategory::HighCard);

    let r = eval("Ah Ad", "Qc 9s 7h 4d 2s", Ruleset::Standard);
    assert_eq!(hand_category(r), HandCategory::OnePair);

    let r = eval("Ah Ad", "Qc Qs 7h 4d 2s", Ruleset::Standard);
    assert_eq!(hand_category(r), HandCategory::TwoPair);

    let r = eval("Ah Ad", "Ac 9s 7h 4d 2s", Ruleset::Standard);
    assert_eq!(hand_category(r), HandCategory::ThreeOfAKind);

    let r = eval("8h 9d", "Tc Js Qh 2d 2s", Ruleset::Standard);
    assert_eq!(hand_category(r), HandCategory::Straight);

    let r = eval("Ah 8h", "Qh 9h 3h Kd 2s", Ruleset::Standard);
    assert_eq!(hand_category(r), HandCategory::Flush);

    let r = eval("Ah Ad", "Ac Ks Kh 4d 2s", Ruleset::Standard);
    assert_eq!(hand_category(r), HandCategory::FullHouse);

    let r = eval("Ah Ad", "Ac As Kh 4d 2s", Ruleset::Standard);
    assert_eq!(hand_category(r), HandCategory::FourOfAKind);

    let r = eval("8h 9h", "Th Jh Qh 2d 2s", Ruleset::Standard);
    assert_eq!(hand_category(r), HandCategory::StraightFlush);
}

/// Из 7 карт выбирается лучшая 5-карточная комбинация.
#[test]
fn best_of_seven_prefers_stronger_combo() {
    // Пара на борде + флеш по руке: флеш должен победить.
    let r = eval("Ah 8h", "Qh 9h 3h Kd Ks", Ruleset::Standard);
    assert_eq!(hand_category(r), HandCategory::Flush);
}

/// Кикеры решают при равной категории.
#[test]
fn kickers_break_ties() {
    let high_kicker = eval("Ah Kd", "Ac 9s 7h 4d 2s", Ruleset::Standard);
    let low_kicker = eval("Ah Qd", "Ac 9s 7h 4d 2s", Ruleset::Standard);
    assert!(high_kicker > low_kicker);

    // Полностью равные руки – одинаковый ключ (сплит представим).
    let a = eval("Ah Kd", "Qs Js Ts 3c 2d", Ruleset::Standard);
    let b = eval("Ac Kc", "Qs Js Ts 3c 2d", Ruleset::Standard);
    assert_eq!(a, b);
}

//
// ====================== СТРИТЫ И КОЛЁСА ======================
//

#[test]
fn wheel_straight_standard() {
    // A2345 – младший стрит, туз снизу.
    let wheel = eval("As 2d", "3c 4h 5s Kd 9h", Ruleset::Standard);
    assert_eq!(hand_category(wheel), HandCategory::Straight);

    let six_high = eval("2s 3d", "4c 5h 6s Kd 9h", Ruleset::Standard);
    assert_eq!(hand_category(six_high), HandCategory::Straight);
    assert!(six_high > wheel);

    let broadway = eval("As Kd", "Qc Jh Ts 4d 9h", Ruleset::Standard);
    assert!(broadway > six_high);
}

/// Short-deck: A6789 – легальный стрит (туз снизу только здесь),
/// в standard такой набор – просто старшая карта.
#[test]
fn short_deck_wheel_straight() {
    let hole = "Ah 6s";
    let board = "7c 8d 9h";

    let short = eval(hole, board, Ruleset::ShortDeck);
    assert_eq!(hand_category(short), HandCategory::Straight);

    let standard = eval(hole, board, Ruleset::Standard);
    assert_eq!(hand_category(standard), HandCategory::HighCard);

    // Обычный T-high стрит старше short-deck колеса.
    let t_high = eval("6h 7s", "8c 9d Th", Ruleset::ShortDeck);
    assert!(t_high > short);

    // Туз сверху работает как обычно.
    let broadway = eval("Ah Kd", "Qc Jh Ts", Ruleset::ShortDeck);
    assert_eq!(hand_category(broadway), HandCategory::Straight);
    assert!(broadway > t_high);
}

//
// ====================== ПЕРЕКЛЮЧЕНИЕ ВАРИАНТА ======================
//

/// Стрит-флеш бьёт каре в обоих вариантах (перестановка
/// флеш/фулл-хаус его не касается).
#[test]
fn straight_flush_beats_quads_in_both_rulesets() {
    let sf_hole = cards("6s 7s");
    let sf_board = cards("8s 9s Ts");
    let quads_hole = cards("6c 6d");
    let quads_board = cards("6h 6s Ac");

    for ruleset in [Ruleset::Standard, Ruleset::ShortDeck] {
        let sf = evaluate_best_hand(&sf_hole, &sf_board, ruleset);
        let quads = evaluate_best_hand(&quads_hole, &quads_board, ruleset);
        assert_eq!(hand_category(sf), HandCategory::StraightFlush);
        assert_eq!(hand_category(quads), HandCategory::FourOfAKind);
        assert!(sf > quads, "straight flush must beat quads ({ruleset:?})");
    }
}

/// Ключевое отличие short-deck: флеш старше фулл-хауса.
/// Один и тот же борд, две руки — победитель зависит от варианта.
#[test]
fn flush_vs_full_house_ruleset_switch() {
    let board = "6h 7s 7c Ts Qs";
    let flush_hole = "6s 8s"; // флеш Q-high пиками
    let full_hole = "6c 6d"; // фулл-хаус 666 + 77

    let flush_std = eval(flush_hole, board, Ruleset::Standard);
    let full_std = eval(full_hole, board, Ruleset::Standard);
    assert_eq!(hand_category(flush_std), HandCategory::Flush);
    assert_eq!(hand_category(full_std), HandCategory::FullHouse);
    // Standard: фулл-хаус сильнее.
    assert!(full_std > flush_std);

    let flush_short = eval(flush_hole, board, Ruleset::ShortDeck);
    let full_short = eval(full_hole, board, Ruleset::ShortDeck);
    assert_eq!(hand_category(flush_short), HandCategory::Flush);
    assert_eq!(hand_category(full_short), HandCategory::FullHouse);
    // Short-deck: флеш сильнее.
    assert!(flush_short > full_short);
}

/// Роял-флеш – просто старший стрит-флеш.
#[test]
fn royal_flush_is_top_straight_flush() {
    let royal = eval("As Ks", "Qs Js Ts", Ruleset::Standard);
    let king_high_sf = eval("Ks Qs", "Js Ts 9s", Ruleset::Standard);
    assert_eq!(hand_category(royal), HandCategory::StraightFlush);
    assert_eq!(hand_category(king_high_sf), HandCategory::StraightFlush);
    assert!(royal > king_high_sf);
}

/// Категория декодируется из ключа без знания варианта правил.
#[test]
fn category_label_survives_ruleset_encoding() {
    let flush_short = eval("6s 8s", "9s Js Ks 7d 8c", Ruleset::ShortDeck);
    assert_eq!(hand_category(flush_short), HandCategory::Flush);

    let full_short = eval("6c 6d", "6h 7s 7c", Ruleset::ShortDeck);
    assert_eq!(hand_category(full_short), HandCategory::FullHouse);
}

/// Из ключа достаются ранги тай-брейка и текстовое описание.
#[test]
fn rank_key_decodes_ranks_and_description() {
    use holdem_engine::domain::Rank;
    use holdem_engine::eval::describe_hand;

    let broadway = eval("As Kd", "Qc Jh Ts", Ruleset::Standard);
    assert_eq!(describe_hand(broadway), "Straight");
    assert_eq!(
        broadway.ranks(),
        [Rank::Ace, Rank::King, Rank::Queen, Rank::Jack, Rank::Ten]
    );

    let pair = eval("Ah Ad", "Qc 9s 7h 4d 2s", Ruleset::Standard);
    assert_eq!(describe_hand(pair), "One pair");
    // Старшие позиции ключа: пара тузов, затем кикеры Q, 9, 7.
    let ranks = pair.ranks();
    assert_eq!(ranks[0], Rank::Ace);
    assert_eq!(ranks[1], Rank::Queen);
    assert_eq!(ranks[2], Rank::Nine);
    assert_eq!(ranks[3], Rank::Seven);
}
