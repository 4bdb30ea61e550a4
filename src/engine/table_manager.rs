use std::collections::HashMap;

use log::{info, warn};

use crate::domain::chips::Chips;
use crate::domain::player::{PlayerAtTable, PlayerStatus};
use crate::domain::table::Table;
use crate::domain::{HandId, PlayerId, SeatIndex, TableId};
use crate::engine::game_loop::{self, HandEngine, HandStatus};
use crate::engine::hand_history::HandHistory;
use crate::engine::validation::{legal_actions, LegalAction};
use crate::engine::{self, EngineError, PlayerAction, RandomSource};

/// Ошибки уровня менеджера столов (над движком одной раздачи).
#[derive(Debug)]
pub enum ManagerError {
    /// Стол с таким ID не найден.
    TableNotFound(TableId),

    /// Для стола нет активной раздачи.
    NoActiveHand(TableId),

    /// Место занято / игрока нельзя посадить.
    SeatUnavailable(TableId, SeatIndex),

    /// Состав игроков можно менять только между раздачами.
    HandInProgress(TableId),

    /// Проброшенная ошибка движка.
    Engine(EngineError),
}

impl From<EngineError> for ManagerError {
    fn from(e: EngineError) -> Self {
        ManagerError::Engine(e)
    }
}

/// Внутренний объект: стол + опционально активный движок раздачи +
/// материалы последней завершённой раздачи (для history query).
struct ManagedTable {
    table: Table,
    engine: Option<HandEngine>,
    last_history: Option<HandHistory>,
}

impl ManagedTable {
    fn new(table: Table) -> Self {
        Self {
            table,
            engine: None,
            last_history: None,
        }
    }
}

/// Реестр столов, которым владеет хостящий процесс.
///
/// Каждый стол — независимая машина состояний; все мутации идут через
/// `&mut self`, то есть дисциплина "один писатель на стол" обеспечивается
/// владением (хост, обслуживающий много столов конкурентно, держит
/// по одному владельцу на TableId — например, актор или мьютекс на запись).
/// Никакого глобального состояния: реестр создаётся и уничтожается явно.
pub struct TableManager {
    tables: HashMap<TableId, ManagedTable>,
}

impl Default for TableManager {
    fn default() -> Self {
        Self::new()
    }
}

impl TableManager {
    /// Создать пустой реестр.
    pub fn new() -> Self {
        Self {
            tables: HashMap::new(),
        }
    }

    /// Добавить стол под его TableId. Существующий стол заменяется.
    pub fn add_table(&mut self, table: Table) {
        let id = table.id;
        self.tables.insert(id, ManagedTable::new(table));
    }

    /// Убрать стол из реестра (например, по завершении турнира).
    pub fn remove_table(&mut self, table_id: TableId) -> Option<Table> {
        self.tables.remove(&table_id).map(|mt| mt.table)
    }

    pub fn has_table(&self, table_id: TableId) -> bool {
        self.tables.contains_key(&table_id)
    }

    pub fn table_ids(&self) -> Vec<TableId> {
        let mut ids: Vec<TableId> = self.tables.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Получить ссылку на стол (read-only).
    pub fn table(&self, table_id: TableId) -> Option<&Table> {
        self.tables.get(&table_id).map(|mt| &mt.table)
    }

    /// Получить ссылку на стол (mutable). Для слоёв выше движка
    /// (турнирный контроллер обновляет блайнды между раздачами).
    pub fn table_mut(&mut self, table_id: TableId) -> Option<&mut Table> {
        self.tables.get_mut(&table_id).map(|mt| &mut mt.table)
    }

    pub fn has_active_hand(&self, table_id: TableId) -> bool {
        self.tables
            .get(&table_id)
            .map(|mt| mt.engine.is_some())
            .unwrap_or(false)
    }

    /// Движок активной раздачи (read-only).
    pub fn hand_engine(&self, table_id: TableId) -> Option<&HandEngine> {
        self.tables.get(&table_id).and_then(|mt| mt.engine.as_ref())
    }

    /// Текущий актёр на столе (если раздача идёт).
    pub fn current_actor_seat(&self, table_id: TableId) -> Option<SeatIndex> {
        self.hand_engine(table_id).and_then(|e| e.current_actor)
    }

    /// История текущей раздачи, либо последней завершённой.
    pub fn hand_history(&self, table_id: TableId) -> Option<&HandHistory> {
        let mt = self.tables.get(&table_id)?;
        match &mt.engine {
            Some(engine) => Some(&engine.history),
            None => mt.last_history.as_ref(),
        }
    }

    /// Посадить игрока за стол. Состав меняется только между раздачами.
    pub fn seat_player(
        &mut self,
        table_id: TableId,
        seat: SeatIndex,
        player_id: PlayerId,
        stack: Chips,
    ) -> Result<(), ManagerError> {
        let mt = self
            .tables
            .get_mut(&table_id)
            .ok_or(ManagerError::TableNotFound(table_id))?;

        if mt.engine.is_some() || mt.table.hand_in_progress() {
            return Err(ManagerError::HandInProgress(table_id));
        }
        if !mt.table.is_seat_empty(seat) || seat >= mt.table.max_seats() {
            return Err(ManagerError::SeatUnavailable(table_id, seat));
        }

        mt.table.seats[seat as usize] = Some(PlayerAtTable::new(player_id, stack));
        info!("table {table_id}: player {player_id} seated at {seat} with {} chips", stack.0);
        Ok(())
    }

    /// Убрать игрока с места (между раздачами).
    pub fn unseat_player(
        &mut self,
        table_id: TableId,
        seat: SeatIndex,
    ) -> Result<Option<PlayerAtTable>, ManagerError> {
        let mt = self
            .tables
            .get_mut(&table_id)
            .ok_or(ManagerError::TableNotFound(table_id))?;

        if mt.engine.is_some() || mt.table.hand_in_progress() {
            return Err(ManagerError::HandInProgress(table_id));
        }

        let removed = mt
            .table
            .seats
            .get_mut(seat as usize)
            .and_then(|s| s.take());
        Ok(removed)
    }

    /// Запустить новую раздачу на конкретном столе.
    ///
    /// hand_id генерируется снаружи (IdGenerator / счётчик хоста).
    /// Если блайнды посадили всех в олл-ин, борд доигрывается сразу.
    pub fn start_hand<R: RandomSource>(
        &mut self,
        table_id: TableId,
        rng: &mut R,
        hand_id: HandId,
    ) -> Result<HandStatus, ManagerError> {
        let runout_engine = {
            let mt = self
                .tables
                .get_mut(&table_id)
                .ok_or(ManagerError::TableNotFound(table_id))?;

            let engine = engine::start_hand(&mut mt.table, rng, hand_id)?;

            if engine.current_actor.is_some() {
                mt.engine = Some(engine);
                None
            } else {
                // Торговля невозможна с самого префлопа – доигровка борда.
                Some(engine)
            }
        };

        match runout_engine {
            Some(engine) => self.finish_or_store(table_id, engine),
            None => Ok(HandStatus::Ongoing),
        }
    }

    /// Применить действие игрока на конкретном столе.
    pub fn apply_action(
        &mut self,
        table_id: TableId,
        action: PlayerAction,
    ) -> Result<HandStatus, ManagerError> {
        let mt = self
            .tables
            .get_mut(&table_id)
            .ok_or(ManagerError::TableNotFound(table_id))?;

        let engine = mt
            .engine
            .as_mut()
            .ok_or(ManagerError::NoActiveHand(table_id))?;

        match engine::apply_action(&mut mt.table, engine, action) {
            Ok(HandStatus::Ongoing) => Ok(HandStatus::Ongoing),
            Ok(finished) => {
                // Раздача кончилась: журнал сохраняем для history query.
                mt.last_history = Some(engine.history.clone());
                mt.engine = None;
                Ok(finished)
            }
            Err(EngineError::DeckExhausted) => {
                // Фатальный инвариант: прерываем раздачу, вклады возвращаем.
                warn!("table {table_id}: deck exhausted, aborting hand");
                let mut engine = mt.engine.take().expect("engine проверен выше");
                game_loop::abort_hand(&mut mt.table, &mut engine, "deck exhausted");
                mt.last_history = Some(engine.history.clone());
                Err(ManagerError::Engine(EngineError::DeckExhausted))
            }
            Err(e) => Err(ManagerError::Engine(e)),
        }
    }

    /// Множество допустимых действий для игрока (пустое, если сейчас
    /// не его ход или раздача не идёт).
    pub fn legal_actions_for(
        &self,
        table_id: TableId,
        player_id: PlayerId,
    ) -> Result<Vec<LegalAction>, ManagerError> {
        let mt = self
            .tables
            .get(&table_id)
            .ok_or(ManagerError::TableNotFound(table_id))?;

        let engine = match &mt.engine {
            Some(e) => e,
            None => return Ok(Vec::new()),
        };

        let actor_seat = match engine.current_actor {
            Some(s) => s,
            None => return Ok(Vec::new()),
        };

        let player = match mt.table.seat(actor_seat) {
            Some(p) if p.player_id == player_id => p,
            _ => return Ok(Vec::new()),
        };

        Ok(legal_actions(player, &engine.betting))
    }

    /// Финализация раздачи, начатой с пустой очередью (олл-ин с блайндов).
    fn finish_or_store(
        &mut self,
        table_id: TableId,
        mut engine: HandEngine,
    ) -> Result<HandStatus, ManagerError> {
        let mt = self
            .tables
            .get_mut(&table_id)
            .ok_or(ManagerError::TableNotFound(table_id))?;

        match engine::advance_if_needed(&mut mt.table, &mut engine) {
            Ok(HandStatus::Ongoing) => {
                mt.engine = Some(engine);
                Ok(HandStatus::Ongoing)
            }
            Ok(finished) => {
                mt.last_history = Some(engine.history.clone());
                Ok(finished)
            }
            Err(EngineError::DeckExhausted) => {
                warn!("table {table_id}: deck exhausted, aborting hand");
                game_loop::abort_hand(&mut mt.table, &mut engine, "deck exhausted");
                mt.last_history = Some(engine.history.clone());
                Err(ManagerError::Engine(EngineError::DeckExhausted))
            }
            Err(e) => Err(ManagerError::Engine(e)),
        }
    }
}

/// Подсчёт игроков, которых можно сдать в следующую раздачу.
pub fn dealable_players(table: &Table) -> usize {
    table
        .seats
        .iter()
        .filter_map(|s| s.as_ref())
        .filter(|p| {
            !matches!(p.status, PlayerStatus::Busted | PlayerStatus::SittingOut)
                && (table.config.allow_negative_chips || p.stack.0 > 0)
        })
        .count()
}
