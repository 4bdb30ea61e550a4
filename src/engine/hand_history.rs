use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::hand::Phase;
use crate::domain::{HandId, PlayerId, SeatIndex, TableId};
use crate::engine::actions::PlayerActionKind;

/// Тип события в раздаче.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum HandEventKind {
    /// Новая раздача началась.
    HandStarted { table_id: TableId, hand_id: HandId },

    /// Кнопка/блайнды.
    BlindsPosted {
        dealer: SeatIndex,
        small_blind: Option<(SeatIndex, Chips)>,
        big_blind: Option<(SeatIndex, Chips)>,
    },

    /// Игрок получил карманные карты.
    HoleCardsDealt { seat: SeatIndex, cards: Vec<Card> },

    /// Открыты общие карты на борде.
    BoardDealt { phase: Phase, cards: Vec<Card> },

    /// Действие игрока. Вместе с `index` события это полная
    /// запись аудита: кто, что, сколько, на какой улице.
    PlayerActed {
        player_id: PlayerId,
        seat: SeatIndex,
        action: PlayerActionKind,
        /// Сколько фишек реально ушло в банк этим действием
        /// (фактический размер call/raise/all-in, ноль для fold/check).
        amount: Chips,
        phase: Phase,
        new_stack: Chips,
        pot_after: Chips,
    },

    /// Переход на новую фазу.
    PhaseChanged { phase: Phase },

    /// Шоудаун – открытие карт.
    ShowdownReveal {
        seat: SeatIndex,
        player_id: PlayerId,
        hole_cards: Vec<Card>,
        rank_value: u32,
    },

    /// Выплата банка.
    PotAwarded {
        pot_index: usize,
        seat: SeatIndex,
        player_id: PlayerId,
        amount: Chips,
    },

    /// Раздача завершена.
    HandFinished { hand_id: HandId, table_id: TableId },

    /// Раздача прервана из-за нарушения инварианта (исчерпание колоды);
    /// вклады возвращены игрокам.
    HandAborted { hand_id: HandId, reason: String },
}

/// Событие в раздаче с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct HandEvent {
    pub index: u32,
    pub kind: HandEventKind,
}

/// Полная история раздачи: append-only журнал, записи не мутируются.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct HandHistory {
    pub events: Vec<HandEvent>,
}

impl HandHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: HandEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(HandEvent { index: idx, kind });
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
