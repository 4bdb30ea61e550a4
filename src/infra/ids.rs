use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use crate::domain::{HandId, PlayerId, TableId};

/// Простая генерация ID на основе монотонных счётчиков.
/// Удобно для локальных хостов и тестов; распределённый хост может
/// подставлять свои идентификаторы.
#[derive(Debug)]
pub struct IdGenerator {
    table_counter: AtomicU64,
    player_counter: AtomicU64,
    hand_counter: AtomicU64,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator {
    /// Создать генератор с начальным значением 1 для всех сущностей.
    pub fn new() -> Self {
        Self {
            table_counter: AtomicU64::new(1),
            player_counter: AtomicU64::new(1),
            hand_counter: AtomicU64::new(1),
        }
    }

    #[inline]
    pub fn next_table_id(&self) -> TableId {
        self.table_counter.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn next_player_id(&self) -> PlayerId {
        self.player_counter.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn next_hand_id(&self) -> HandId {
        self.hand_counter.fetch_add(1, Ordering::Relaxed)
    }
}

/// Человекочитаемый внешний ID (для интеграций поверх числовых).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ExternalId(pub String);
