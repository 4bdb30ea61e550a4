use std::collections::HashMap;

use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::blinds::{BlindLevel, BlindStructure};
use crate::domain::table::Table;
use crate::domain::PlayerId;

/// Статус турнира.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TournamentStatus {
    Running,
    Finished,
}

/// Положение игрока в турнире.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerStanding {
    pub player_id: PlayerId,
    /// Вылетел ли игрок.
    pub is_busted: bool,
    /// Итоговое место (1 = победитель, N = первый вылет).
    pub finishing_place: Option<u32>,
}

/// Что произошло по итогам одной раздачи.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandOutcome {
    /// Кто вылетел в этой раздаче: (player_id, итоговое место).
    pub eliminated: Vec<(PlayerId, u32)>,
    /// Сменился ли уровень блайндов к следующей раздаче: (старый, новый).
    pub level_advanced: Option<(u32, u32)>,
    /// Завершился ли турнир.
    pub finished: bool,
    /// Победитель. None и при незавершённом турнире, и в вырожденном
    /// случае, когда одновременно вылетели все оставшиеся.
    pub winner_id: Option<PlayerId>,
}

/// Ошибки турнирного контроллера.
#[derive(Debug, Error, Clone)]
pub enum TournamentError {
    #[error("Invalid tournament config: {0}")]
    InvalidConfig(String),

    #[error("Tournament needs at least 2 players, got {0}")]
    NotEnoughPlayers(usize),

    #[error("Tournament is already finished")]
    AlreadyFinished,
}

/// Турнирный контроллер одного стола.
///
/// Цикл хоста:
///   1. `blinds_for_next_hand` / `prepare_hand` перед каждой раздачей —
///      актуальные блайнды по счётчику раздач;
///   2. раздача играется движком;
///   3. `on_hand_finished` после раздачи — вылеты, места, терминация.
///
/// Уровни сменяются по накопленному числу раздач: при hands_duration = 24
/// раздача №24 играется на уровне 1, раздача №25 — на уровне 2.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TournamentController {
    pub structure: BlindStructure,
    pub status: TournamentStatus,
    /// Сколько раздач уже завершено.
    pub hands_played: u64,
    /// Текущий уровень блайндов (номер из structure).
    pub current_level: u32,
    pub standings: HashMap<PlayerId, PlayerStanding>,

    /// Количество участников на старте — для раздачи мест:
    /// первый вылетевший получает место total_entries.
    pub total_entries: u32,
    /// Сколько игроков уже вылетело.
    pub finished_count: u32,

    /// Победитель (если турнир завершён и он есть).
    pub winner_id: Option<PlayerId>,
}

impl TournamentController {
    pub fn new(
        structure: BlindStructure,
        player_ids: &[PlayerId],
    ) -> Result<Self, TournamentError> {
        structure
            .validate()
            .map_err(TournamentError::InvalidConfig)?;

        if player_ids.len() < 2 {
            return Err(TournamentError::NotEnoughPlayers(player_ids.len()));
        }

        let standings = player_ids
            .iter()
            .map(|&id| {
                (
                    id,
                    PlayerStanding {
                        player_id: id,
                        is_busted: false,
                        finishing_place: None,
                    },
                )
            })
            .collect();

        Ok(Self {
            structure,
            status: TournamentStatus::Running,
            hands_played: 0,
            current_level: 1,
            standings,
            total_entries: player_ids.len() as u32,
            finished_count: 0,
            winner_id: None,
        })
    }

    pub fn is_finished(&self) -> bool {
        self.status == TournamentStatus::Finished
    }

    /// Уровень блайндов для следующей (ещё не сыгранной) раздачи.
    pub fn blinds_for_next_hand(&self) -> &BlindLevel {
        self.structure.level_for_hand(self.hands_played + 1)
    }

    /// Применить к столу блайнды следующей раздачи.
    /// Возвращает (старый, новый) уровень, если он сменился.
    pub fn prepare_hand(&mut self, table: &mut Table) -> Result<Option<(u32, u32)>, TournamentError> {
        if self.is_finished() {
            return Err(TournamentError::AlreadyFinished);
        }

        let level = self.blinds_for_next_hand().clone();
        table.config.stakes.small_blind = level.small_blind;
        table.config.stakes.big_blind = level.big_blind;

        let change = if level.level != self.current_level {
            let from = self.current_level;
            self.current_level = level.level;
            info!(
                "tournament: hand {} plays at level {} ({}/{})",
                self.hands_played + 1,
                level.level,
                level.small_blind.0,
                level.big_blind.0
            );
            Some((from, level.level))
        } else {
            None
        };

        Ok(change)
    }

    /// Количество игроков, ещё не вылетевших.
    pub fn active_player_count(&self) -> usize {
        self.standings.values().filter(|s| !s.is_busted).count()
    }

    /// Учёт итогов раздачи: счётчик, вылеты с местами, терминация.
    ///
    /// В continuous-режиме (allow_negative_chips) никто не вылетает,
    /// и турнир сам не завершается.
    pub fn on_hand_finished(&mut self, table: &mut Table) -> Result<HandOutcome, TournamentError> {
        if self.is_finished() {
            return Err(TournamentError::AlreadyFinished);
        }

        self.hands_played += 1;

        let mut eliminated = Vec::new();

        if !table.config.allow_negative_chips {
            // Вылеты в порядке мест после кнопки – так раздача мест
            // детерминирована при нескольких вылетах за раздачу.
            let button = table.dealer_button.unwrap_or(0);
            let max = table.max_seats() as usize;

            for i in 1..=max {
                let seat = ((button as usize + i) % max) as u8;
                let p = match table.seat(seat) {
                    Some(p) => p,
                    None => continue,
                };
                if p.stack.0 > 0 {
                    continue;
                }
                let player_id = p.player_id;

                if let Some(standing) = self.standings.get_mut(&player_id) {
                    if !standing.is_busted {
                        let place = self.total_entries - self.finished_count;
                        standing.is_busted = true;
                        standing.finishing_place = Some(place);
                        self.finished_count += 1;
                        eliminated.push((player_id, place));
                        info!("tournament: player {player_id} eliminated in place {place}");
                    }
                }
            }
        }

        // Терминация: один оставшийся — победитель; ноль — победителя нет
        // (вырожденный кейс представим, это не ошибка).
        let remaining: Vec<PlayerId> = self
            .standings
            .values()
            .filter(|s| !s.is_busted)
            .map(|s| s.player_id)
            .collect();

        if remaining.len() <= 1 && !table.config.allow_negative_chips {
            self.status = TournamentStatus::Finished;
            self.winner_id = remaining.first().copied();

            if let Some(winner) = self.winner_id {
                if let Some(standing) = self.standings.get_mut(&winner) {
                    if standing.finishing_place.is_none() {
                        standing.finishing_place = Some(1);
                    }
                }
                info!("tournament: finished, winner is player {winner}");
            } else {
                info!("tournament: finished with no winner");
            }
        }

        // Заранее фиксируем смену уровня к следующей раздаче.
        let next_level = self.structure.level_for_hand(self.hands_played + 1).level;
        let level_advanced = if !self.is_finished() && next_level != self.current_level {
            Some((self.current_level, next_level))
        } else {
            None
        };

        Ok(HandOutcome {
            eliminated,
            level_advanced,
            finished: self.is_finished(),
            winner_id: self.winner_id,
        })
    }
}
