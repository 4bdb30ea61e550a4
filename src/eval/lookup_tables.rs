use crate::domain::card::{Rank, Ruleset};

/// Битовая маска рангов.
///
/// Используем 13 бит (от 2 до A):
/// бит 0 = двойка, бит 12 = туз.
pub type RankMask = u16;

/// Маски всех стритов обычной колоды (5 подряд),
/// от колеса A2345 к бродвею TJQKA.
pub const STRAIGHT_MASKS: [RankMask; 10] = [
    // A2345 (wheel)
    mask_from_ranks(&[Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five]),
    mask_from_ranks(&[Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Six]),
    mask_from_ranks(&[Rank::Three, Rank::Four, Rank::Five, Rank::Six, Rank::Seven]),
    mask_from_ranks(&[Rank::Four, Rank::Five, Rank::Six, Rank::Seven, Rank::Eight]),
    mask_from_ranks(&[Rank::Five, Rank::Six, Rank::Seven, Rank::Eight, Rank::Nine]),
    mask_from_ranks(&[Rank::Six, Rank::Seven, Rank::Eight, Rank::Nine, Rank::Ten]),
    mask_from_ranks(&[Rank::Seven, Rank::Eight, Rank::Nine, Rank::Ten, Rank::Jack]),
    mask_from_ranks(&[Rank::Eight, Rank::Nine, Rank::Ten, Rank::Jack, Rank::Queen]),
    mask_from_ranks(&[Rank::Nine, Rank::Ten, Rank::Jack, Rank::Queen, Rank::King]),
    // TJQKA (broadway)
    mask_from_ranks(&[Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace]),
];

/// Старшая карта стрита для каждого индекса STRAIGHT_MASKS.
/// Колесо A2345 считается стритом с пятёркой.
const STRAIGHT_HIGHS: [Rank; 10] = [
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
    Rank::Ace,
];

/// Маски стритов short-deck колоды (ранги 6..A).
/// Особый случай: A6789 — туз играет "снизу", старшая карта девятка.
pub const SHORT_DECK_STRAIGHT_MASKS: [RankMask; 6] = [
    // A6789 (short-deck wheel)
    mask_from_ranks(&[Rank::Ace, Rank::Six, Rank::Seven, Rank::Eight, Rank::Nine]),
    mask_from_ranks(&[Rank::Six, Rank::Seven, Rank::Eight, Rank::Nine, Rank::Ten]),
    mask_from_ranks(&[Rank::Seven, Rank::Eight, Rank::Nine, Rank::Ten, Rank::Jack]),
    mask_from_ranks(&[Rank::Eight, Rank::Nine, Rank::Ten, Rank::Jack, Rank::Queen]),
    mask_from_ranks(&[Rank::Nine, Rank::Ten, Rank::Jack, Rank::Queen, Rank::King]),
    mask_from_ranks(&[Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace]),
];

const SHORT_DECK_STRAIGHT_HIGHS: [Rank; 6] = [
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
    Rank::Ace,
];

/// Получить битовую маску для одного ранга.
pub fn rank_to_bit(rank: Rank) -> RankMask {
    let idx = (rank as u8).saturating_sub(2); // Rank::Two = 2
    1u16 << idx
}

/// Построить маску из списка рангов.
pub const fn mask_from_ranks(ranks: &[Rank]) -> RankMask {
    let mut mask: RankMask = 0;
    let mut i = 0;
    while i < ranks.len() {
        let r = ranks[i] as u8;
        let idx = r.saturating_sub(2);
        mask |= 1 << idx;
        i += 1;
    }
    mask
}

/// Найти стрит в битовой маске рангов для заданного варианта правил.
/// Возвращает старшую карту стрита, если он есть.
///
/// Проверяем от самого сильного к слабейшему, так что из нескольких
/// стритов берётся старший.
pub fn detect_straight(rank_mask: RankMask, ruleset: Ruleset) -> Option<Rank> {
    let (masks, highs): (&[RankMask], &[Rank]) = match ruleset {
        Ruleset::Standard => (&STRAIGHT_MASKS, &STRAIGHT_HIGHS),
        Ruleset::ShortDeck => (&SHORT_DECK_STRAIGHT_MASKS, &SHORT_DECK_STRAIGHT_HIGHS),
    };

    for i in (0..masks.len()).rev() {
        if rank_mask & masks[i] == masks[i] {
            return Some(highs[i]);
        }
    }
    None
}
