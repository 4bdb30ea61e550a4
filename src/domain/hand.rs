use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::{HandId, PlayerId, TableId};

/// Фаза стола.
///
/// Полный цикл раздачи:
/// Waiting → Preflop → Flop → Turn → River → Showdown → HandComplete.
/// Ставки возможны только на четырёх улицах.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Phase {
    /// Стол ждёт начала раздачи.
    Waiting,
    Preflop,
    Flop,
    Turn,
    River,
    /// Вскрытие карт и раздача банков.
    Showdown,
    /// Раздача завершена, можно начинать следующую.
    HandComplete,
}

impl Phase {
    /// Идёт ли на этой фазе раунд ставок.
    pub fn is_betting_street(&self) -> bool {
        matches!(self, Phase::Preflop | Phase::Flop | Phase::Turn | Phase::River)
    }

    /// Открыты ли карты всех игроков (политика показа в API).
    pub fn is_showdown_or_later(&self) -> bool {
        matches!(self, Phase::Showdown | Phase::HandComplete)
    }
}

/// Сила руки. Упакованный ключ полного порядка; заполняется в eval.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct HandRank(pub u32);

/// Результат конкретного игрока в раздаче.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerHandResult {
    pub player_id: PlayerId,
    /// Итоговый ранг руки (если дошёл до шоудауна).
    pub rank: Option<HandRank>,
    /// Выигрыш минус вклад за раздачу: положительное = прибыль.
    pub net_chips: Chips,
    /// Является ли игрок победителем (включая сплит).
    pub is_winner: bool,
}

/// Краткое описание завершённой раздачи. Удобно для истории/реплеера.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandSummary {
    pub hand_id: HandId,
    pub table_id: TableId,
    pub phase_reached: Phase,
    pub board: Vec<Card>,
    pub total_pot: Chips,
    pub results: Vec<PlayerHandResult>,
}
