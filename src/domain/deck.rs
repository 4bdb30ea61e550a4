use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Ruleset, Suit};

/// Колода карт. В домене — просто упорядоченный список карт.
/// Перемешивание делает engine (через RNG из infra), НЕ здесь.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    /// Полная колода для выбранного варианта правил в порядке:
    /// Clubs, Diamonds, Hearts, Spades; внутри масти ранги по возрастанию.
    /// 52 карты для Standard, 36 для ShortDeck.
    pub fn for_ruleset(ruleset: Ruleset) -> Self {
        let mut cards = Vec::with_capacity(ruleset.deck_size());
        for suit in [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades] {
            for &rank in ruleset.ranks() {
                cards.push(Card::new(rank, suit));
            }
        }
        Deck { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Взять одну карту сверху колоды.
    ///
    /// `None` при исчерпании — для движка это фатальное нарушение
    /// инварианта (см. `EngineError::DeckExhausted`), сюда нельзя
    /// попасть при корректной оркестрации раздачи.
    pub fn draw_one(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Взять n карт сверху.
    pub fn draw_n(&mut self, n: usize) -> Vec<Card> {
        let mut taken = Vec::with_capacity(n);
        for _ in 0..n {
            if let Some(card) = self.cards.pop() {
                taken.push(card);
            } else {
                break;
            }
        }
        taken
    }
}
