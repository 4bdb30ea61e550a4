use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::hand::Phase;
use crate::domain::player::PlayerStatus;
use crate::domain::{PlayerId, TableId};

/// DTO игрока за столом. Публичные поля + закрытые карты,
/// если их можно показывать запрашивающему.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlayerAtTableDto {
    pub player_id: PlayerId,
    pub display_name: String,
    pub seat_index: u8,
    pub stack: Chips,
    pub current_bet: Chips,
    pub hand_bet: Chips,
    pub status: PlayerStatus,
    pub is_dealer: bool,
    pub is_small_blind: bool,
    pub is_big_blind: bool,
    /// Карманные карты – только для самого игрока,
    /// либо для всех после шоудауна.
    pub hole_cards: Option<Vec<Card>>,
}

/// DTO банка.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PotDto {
    pub amount: Chips,
    pub eligible_seats: Vec<u8>,
}

/// DTO стола.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TableViewDto {
    pub table_id: TableId,
    pub name: String,
    pub max_seats: u8,
    pub small_blind: Chips,
    pub big_blind: Chips,
    pub phase: Phase,
    pub dealer_button: Option<u8>,
    pub total_pot: Chips,
    /// Детализация банков по состоянию на последнее закрытие раунда.
    pub pots: Vec<PotDto>,
    pub board: Vec<Card>,
    pub players: Vec<PlayerAtTableDto>,
    pub hand_in_progress: bool,
    /// Текущий игрок, чей ход (если раздача идёт).
    pub current_actor_seat: Option<u8>,
}
