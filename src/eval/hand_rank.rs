use crate::domain::card::{Rank, Ruleset};
use crate::domain::hand::HandRank;

/// Категория покерной руки.
///
/// Значение enum — это "ярлык" категории, он одинаков в обоих вариантах
/// правил. Сравнительная сила категории зависит от варианта
/// (в short-deck флеш старше фулл-хауса) и считается в `strength`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandCategory {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl HandCategory {
    /// Сила категории для сравнения рук в заданном варианте правил.
    pub fn strength(&self, ruleset: Ruleset) -> u32 {
        match ruleset {
            Ruleset::Standard => *self as u32,
            // Short-deck: флеш и фулл-хаус меняются местами,
            // остальной порядок без изменений.
            Ruleset::ShortDeck => match self {
                HandCategory::Flush => HandCategory::FullHouse as u32,
                HandCategory::FullHouse => HandCategory::Flush as u32,
                other => *other as u32,
            },
        }
    }
}

impl HandRank {
    /// Собрать HandRank из категории и 5 рангов (от старшего к младшему).
    ///
    /// Схема кодирования (u32):
    ///   [сила категории:4][категория:4][r0:4][r1:4][r2:4][r3:4][r4:4]
    /// Сила стоит в старших битах, поэтому сравнение HandRank как u32
    /// даёт полный порядок для выбранного варианта правил. Ярлык
    /// категории хранится отдельно и декодируется без знания варианта.
    pub fn from_category_and_ranks(
        category: HandCategory,
        ranks: [Rank; 5],
        ruleset: Ruleset,
    ) -> Self {
        let strength_bits = category.strength(ruleset) & 0x0F;
        let cat_bits = (category as u32) & 0x0F;
        let r0 = rank_to_nibble(ranks[0]);
        let r1 = rank_to_nibble(ranks[1]);
        let r2 = rank_to_nibble(ranks[2]);
        let r3 = rank_to_nibble(ranks[3]);
        let r4 = rank_to_nibble(ranks[4]);

        let value = (strength_bits << 24)
            | (cat_bits << 20)
            | ((r0 as u32) << 16)
            | ((r1 as u32) << 12)
            | ((r2 as u32) << 8)
            | ((r3 as u32) << 4)
            | (r4 as u32);

        HandRank(value)
    }

    /// Вытащить категорию из HandRank.
    pub fn category(&self) -> HandCategory {
        let cat_id = ((self.0 >> 20) & 0x0F) as u8;
        match cat_id {
            0 => HandCategory::HighCard,
            1 => HandCategory::OnePair,
            2 => HandCategory::TwoPair,
            3 => HandCategory::ThreeOfAKind,
            4 => HandCategory::Straight,
            5 => HandCategory::Flush,
            6 => HandCategory::FullHouse,
            7 => HandCategory::FourOfAKind,
            8 => HandCategory::StraightFlush,
            _ => HandCategory::HighCard,
        }
    }

    /// Достать 5 рангов (от старшего к младшему) из HandRank.
    pub fn ranks(&self) -> [Rank; 5] {
        let r0 = ((self.0 >> 16) & 0x0F) as u8;
        let r1 = ((self.0 >> 12) & 0x0F) as u8;
        let r2 = ((self.0 >> 8) & 0x0F) as u8;
        let r3 = ((self.0 >> 4) & 0x0F) as u8;
        let r4 = (self.0 & 0x0F) as u8;

        [
            nibble_to_rank(r0),
            nibble_to_rank(r1),
            nibble_to_rank(r2),
            nibble_to_rank(r3),
            nibble_to_rank(r4),
        ]
    }
}

fn rank_to_nibble(rank: Rank) -> u8 {
    // Rank::Two = 2, ..., Ace = 14 — всё помещается в 4 бита.
    rank as u8
}

fn nibble_to_rank(n: u8) -> Rank {
    match n {
        2 => Rank::Two,
        3 => Rank::Three,
        4 => Rank::Four,
        5 => Rank::Five,
        6 => Rank::Six,
        7 => Rank::Seven,
        8 => Rank::Eight,
        9 => Rank::Nine,
        10 => Rank::Ten,
        11 => Rank::Jack,
        12 => Rank::Queen,
        13 => Rank::King,
        14 => Rank::Ace,
        _ => Rank::Two, // fallback, но при корректной работе сюда не попадём
    }
}

/// Удобная функция – получить категорию из HandRank.
pub fn hand_category(rank: HandRank) -> HandCategory {
    rank.category()
}

/// Человеческое описание руки по категории.
pub fn describe_hand(rank: HandRank) -> String {
    let cat = rank.category();
    match cat {
        HandCategory::HighCard => "High card".to_string(),
        HandCategory::OnePair => "One pair".to_string(),
        HandCategory::TwoPair => "Two pair".to_string(),
        HandCategory::ThreeOfAKind => "Three of a kind".to_string(),
        HandCategory::Straight => "Straight".to_string(),
        HandCategory::Flush => "Flush".to_string(),
        HandCategory::FullHouse => "Full house".to_string(),
        HandCategory::FourOfAKind => "Four of a kind".to_string(),
        HandCategory::StraightFlush => "Straight flush".to_string(),
    }
}
