use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Ruleset};
use crate::domain::chips::Chips;
use crate::domain::hand::Phase;
use crate::domain::player::PlayerAtTable;
use crate::domain::{HandId, TableId};

/// Индекс места за столом (0..max_seats-1).
pub type SeatIndex = u8;

/// Тип стола.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TableType {
    /// Турнир: вылет при стеке <= 0, блайнды растут по расписанию.
    Tournament,
    /// Бесконечная игра: никто не вылетает, стек может уходить в минус.
    Continuous,
}

/// Правило раздачи неделимого остатка при сплите банка.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum OddChipRule {
    /// Лишние фишки — по одной победителям в порядке мест,
    /// начиная с первого места после кнопки дилера.
    FirstAfterButton,
}

/// Стейки стола (SB/BB).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableStakes {
    pub small_blind: Chips,
    pub big_blind: Chips,
}

impl TableStakes {
    pub fn new(sb: Chips, bb: Chips) -> Self {
        Self {
            small_blind: sb,
            big_blind: bb,
        }
    }
}

/// Конфиг стола: сколько мест, вариант правил, лимиты.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableConfig {
    /// Максимальное количество мест за столом (обычно 2–9).
    pub max_seats: u8,
    pub table_type: TableType,
    /// Вариант правил: обычная колода или short-deck.
    pub ruleset: Ruleset,
    /// Текущие блайнды (в турнире их обновляет контроллер перед раздачей).
    pub stakes: TableStakes,
    /// Разрешить отрицательные стеки (continuous-режим).
    /// При включённом флаге проверка вылета игроков не выполняется.
    pub allow_negative_chips: bool,
    pub odd_chip_rule: OddChipRule,
}

impl TableConfig {
    pub fn new(max_seats: u8, table_type: TableType, ruleset: Ruleset, stakes: TableStakes) -> Self {
        Self {
            max_seats,
            table_type,
            ruleset,
            stakes,
            allow_negative_chips: matches!(table_type, TableType::Continuous),
            odd_chip_rule: OddChipRule::FirstAfterButton,
        }
    }
}

/// Основное состояние стола. Один стол = одна игра; столы полностью
/// независимы друг от друга (см. TableManager).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Table {
    pub id: TableId,
    pub name: String,
    pub config: TableConfig,

    /// Места за столом: индекс вектора = SeatIndex.
    /// None – место пустое.
    pub seats: Vec<Option<PlayerAtTable>>,

    /// Общие карты борда (0–5 карт).
    pub board: Vec<Card>,

    /// Индекс дилерской кнопки или None, если раздача ещё не начиналась.
    pub dealer_button: Option<SeatIndex>,

    /// ID текущей/последней раздачи.
    pub current_hand_id: Option<HandId>,

    /// Текущая фаза стола.
    pub phase: Phase,

    /// Общий размер банка (детализация по потам – в engine).
    pub total_pot: Chips,
}

impl Table {
    /// Создать пустой стол с заданной конфигурацией.
    pub fn new(id: TableId, name: String, config: TableConfig) -> Self {
        let seats = vec![None; config.max_seats as usize];
        Self {
            id,
            name,
            config,
            seats,
            board: Vec::new(),
            dealer_button: None,
            current_hand_id: None,
            phase: Phase::Waiting,
            total_pot: Chips::ZERO,
        }
    }

    pub fn max_seats(&self) -> u8 {
        self.config.max_seats
    }

    pub fn seated_count(&self) -> usize {
        self.seats.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_seat_empty(&self, index: SeatIndex) -> bool {
        self.seats
            .get(index as usize)
            .map(|s| s.is_none())
            .unwrap_or(true)
    }

    pub fn seat(&self, index: SeatIndex) -> Option<&PlayerAtTable> {
        self.seats.get(index as usize).and_then(|s| s.as_ref())
    }

    pub fn seat_mut(&mut self, index: SeatIndex) -> Option<&mut PlayerAtTable> {
        self.seats.get_mut(index as usize).and_then(|s| s.as_mut())
    }

    /// Идёт ли сейчас раздача (ставки или шоудаун).
    pub fn hand_in_progress(&self) -> bool {
        self.phase.is_betting_street() || self.phase == Phase::Showdown
    }
}
