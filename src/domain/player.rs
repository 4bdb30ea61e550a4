use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::PlayerId;

/// Базовый профиль игрока – то, что не зависит от конкретного стола.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerProfile {
    pub id: PlayerId,
    pub name: String,
}

/// Статус игрока именно в контексте стола/раздачи.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayerStatus {
    /// Игрок активен в текущей раздаче.
    Active,
    /// Игрок сфолдил и больше не претендует на банк.
    Folded,
    /// Игрок в олл-ине – не может больше делать ставки.
    AllIn,
    /// Игрок сидит за столом, но не участвует в раздачах (sit out).
    SittingOut,
    /// Игрок вылетел (нулевой стек в турнире).
    Busted,
}

/// Состояние игрока за конкретным столом.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerAtTable {
    pub player_id: PlayerId,
    /// Текущий стек за столом.
    pub stack: Chips,
    /// Ставка в текущем раунде (улице).
    pub current_bet: Chips,
    /// Суммарный вклад за всю раздачу – основа расчёта сайд-потов.
    pub hand_bet: Chips,
    pub status: PlayerStatus,
    /// Карманные карты (0 или 2 для холдема).
    pub hole_cards: Vec<Card>,
    // Позиционные флаги раздачи; сбрасываются каждую раздачу.
    pub is_dealer: bool,
    pub is_small_blind: bool,
    pub is_big_blind: bool,
}

impl PlayerAtTable {
    pub fn new(player_id: PlayerId, stack: Chips) -> Self {
        Self {
            player_id,
            stack,
            current_bet: Chips::ZERO,
            hand_bet: Chips::ZERO,
            status: PlayerStatus::Active,
            hole_cards: Vec::new(),
            is_dealer: false,
            is_small_blind: false,
            is_big_blind: false,
        }
    }

    /// Претендует ли игрок на банк этой раздачи.
    pub fn is_in_hand(&self) -> bool {
        matches!(self.status, PlayerStatus::Active | PlayerStatus::AllIn)
    }

    /// Может ли игрок ещё действовать в раунде ставок.
    pub fn can_act(&self) -> bool {
        matches!(self.status, PlayerStatus::Active)
    }

    /// Сброс состояния к новой раздаче (стек и статус не трогаем).
    pub fn reset_for_new_hand(&mut self) {
        self.current_bet = Chips::ZERO;
        self.hand_bet = Chips::ZERO;
        self.hole_cards.clear();
        self.is_dealer = false;
        self.is_small_blind = false;
        self.is_big_blind = false;
    }
}
