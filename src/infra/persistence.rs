use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::deck::Deck;
use crate::domain::table::Table;
use crate::domain::{HandId, SeatIndex, TableId};
use crate::engine::betting::BettingState;
use crate::engine::game_loop::HandEngine;
use crate::engine::hand_history::HandHistory;
use crate::engine::pot::Pot;
use crate::tournament::TournamentController;

/// Снапшот HandEngine: «замороженная» раздача.
///
/// Вместе с Table этого достаточно, чтобы возобновить раздачу ровно
/// с текущей позиции раунда ставок: фаза и вклады лежат в Table,
/// здесь — неразданный остаток колоды, состояние ставок, банки,
/// текущий актёр и журнал.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct HandEngineSnapshot {
    pub table_id: TableId,
    pub hand_id: HandId,
    pub deck: Deck,
    pub betting: BettingState,
    pub pots: Vec<Pot>,
    pub current_actor: Option<SeatIndex>,
    pub history: HandHistory,
}

impl HandEngineSnapshot {
    /// Упаковать живой HandEngine в снапшот для хранения.
    pub fn from_engine(engine: &HandEngine) -> Self {
        Self {
            table_id: engine.table_id,
            hand_id: engine.hand_id,
            deck: engine.deck.clone(),
            betting: engine.betting.clone(),
            pots: engine.pots.clone(),
            current_actor: engine.current_actor,
            history: engine.history.clone(),
        }
    }

    /// Развернуть снапшот обратно в HandEngine (в памяти).
    pub fn into_engine(self) -> HandEngine {
        HandEngine {
            table_id: self.table_id,
            hand_id: self.hand_id,
            deck: self.deck,
            betting: self.betting,
            pots: self.pots,
            current_actor: self.current_actor,
            history: self.history,
        }
    }
}

/// Абстракция хранилища для покера.
///
/// Нужна для интеграционных тестов движка и для оффчейн-хостов
/// (лобби-сервер, бэкап активных раздач между рестартами).
pub trait PokerStorage {
    /// Загрузить стол.
    fn load_table(&self, id: TableId) -> Option<Table>;

    /// Сохранить стол.
    fn save_table(&mut self, table: &Table);

    /// Загрузить активную раздачу для стола (если она есть).
    fn load_active_hand(&self, table_id: TableId) -> Option<HandEngineSnapshot>;

    /// Сохранить / очистить активную раздачу.
    fn save_active_hand(&mut self, table_id: TableId, snapshot: Option<HandEngineSnapshot>);

    /// Загрузить турнирный контроллер.
    fn load_tournament(&self, table_id: TableId) -> Option<TournamentController>;

    /// Сохранить турнирный контроллер.
    fn save_tournament(&mut self, table_id: TableId, controller: &TournamentController);
}

/// In-memory реализация поверх JSON: данные живут сериализованными,
/// так что загрузка честно проходит через serde (тот же путь, что и
/// дисковое/сетевое хранилище).
#[derive(Debug, Default)]
pub struct InMemoryPokerStorage {
    tables: HashMap<TableId, String>,
    active_hands: HashMap<TableId, String>,
    tournaments: HashMap<TableId, String>,
}

impl InMemoryPokerStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PokerStorage for InMemoryPokerStorage {
    fn load_table(&self, id: TableId) -> Option<Table> {
        self.tables
            .get(&id)
            .and_then(|json| serde_json::from_str(json).ok())
    }

    fn save_table(&mut self, table: &Table) {
        if let Ok(json) = serde_json::to_string(table) {
            self.tables.insert(table.id, json);
        }
    }

    fn load_active_hand(&self, table_id: TableId) -> Option<HandEngineSnapshot> {
        self.active_hands
            .get(&table_id)
            .and_then(|json| serde_json::from_str(json).ok())
    }

    fn save_active_hand(&mut self, table_id: TableId, snapshot: Option<HandEngineSnapshot>) {
        match snapshot.and_then(|s| serde_json::to_string(&s).ok()) {
            Some(json) => {
                self.active_hands.insert(table_id, json);
            }
            None => {
                self.active_hands.remove(&table_id);
            }
        }
    }

    fn load_tournament(&self, table_id: TableId) -> Option<TournamentController> {
        self.tournaments
            .get(&table_id)
            .and_then(|json| serde_json::from_str(json).ok())
    }

    fn save_tournament(&mut self, table_id: TableId, controller: &TournamentController) {
        if let Ok(json) = serde_json::to_string(controller) {
            self.tournaments.insert(table_id, json);
        }
    }
}
