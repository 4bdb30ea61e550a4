use serde::{Deserialize, Serialize};

use crate::domain::table::Table;
use crate::domain::{PlayerId, TableId};
use crate::engine::hand_history::HandHistory;
use crate::engine::validation::LegalAction;
use crate::engine::{HandEngine, TableManager};

use super::dto::{PlayerAtTableDto, PotDto, TableViewDto};
use super::errors::ApiError;

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Query {
    /// Состояние стола глазами конкретного игрока
    /// (None – наблюдатель без закрытых карт).
    GetTable {
        table_id: TableId,
        viewer: Option<PlayerId>,
    },

    /// Список столов (для лобби).
    ListTables,

    /// Точное множество допустимых действий игрока, чей сейчас ход.
    GetLegalActions {
        table_id: TableId,
        player_id: PlayerId,
    },

    /// Журнал текущей (или последней) раздачи.
    GetHistory { table_id: TableId },
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum QueryResponse {
    Table(TableViewDto),
    Tables(Vec<TableViewDto>),
    LegalActions(Vec<LegalAction>),
    History(HandHistory),
}

/// Выполнить запрос против реестра столов. Чтение не блокирует
/// мутирующий путь: менеджер отдаёт снимок по &self.
pub fn answer_query(
    manager: &TableManager,
    query: &Query,
    resolve_name: impl Fn(PlayerId) -> String,
) -> Result<QueryResponse, ApiError> {
    match query {
        Query::GetTable { table_id, viewer } => {
            let table = manager
                .table(*table_id)
                .ok_or(ApiError::TableNotFound(*table_id))?;
            let engine = manager.hand_engine(*table_id);
            Ok(QueryResponse::Table(build_table_view(
                table,
                engine,
                &resolve_name,
                |pid| Some(pid) == *viewer,
            )))
        }

        Query::ListTables => {
            let mut views = Vec::new();
            for id in manager.table_ids() {
                if let Some(table) = manager.table(id) {
                    let engine = manager.hand_engine(id);
                    views.push(build_table_view(table, engine, &resolve_name, |_| false));
                }
            }
            Ok(QueryResponse::Tables(views))
        }

        Query::GetLegalActions {
            table_id,
            player_id,
        } => {
            let actions = manager.legal_actions_for(*table_id, *player_id)?;
            Ok(QueryResponse::LegalActions(actions))
        }

        Query::GetHistory { table_id } => {
            if !manager.has_table(*table_id) {
                return Err(ApiError::TableNotFound(*table_id));
            }
            let history = manager
                .hand_history(*table_id)
                .cloned()
                .unwrap_or_default();
            Ok(QueryResponse::History(history))
        }
    }
}

/// Сформировать DTO стола на основе `Table` + опционального `HandEngine`.
///
/// Политика показа закрытых карт: видит сам игрок (`is_hero`), а после
/// шоудауна — все.
pub fn build_table_view(
    table: &Table,
    engine: Option<&HandEngine>,
    resolve_name: impl Fn(PlayerId) -> String,
    is_hero: impl Fn(PlayerId) -> bool,
) -> TableViewDto {
    let players = build_players_dto(table, &resolve_name, &is_hero);

    let current_actor_seat = engine.and_then(|e| e.current_actor);
    let pots = engine
        .map(|e| {
            e.pots
                .iter()
                .map(|p| PotDto {
                    amount: p.amount,
                    eligible_seats: p.eligible_seats.clone(),
                })
                .collect()
        })
        .unwrap_or_default();

    TableViewDto {
        table_id: table.id,
        name: table.name.clone(),
        max_seats: table.config.max_seats,
        small_blind: table.config.stakes.small_blind,
        big_blind: table.config.stakes.big_blind,
        phase: table.phase,
        dealer_button: table.dealer_button,
        total_pot: table.total_pot,
        pots,
        board: table.board.clone(),
        players,
        hand_in_progress: table.hand_in_progress(),
        current_actor_seat,
    }
}

/// Собрать DTO игроков за столом (с редактированием закрытых карт).
fn build_players_dto(
    table: &Table,
    resolve_name: &impl Fn(PlayerId) -> String,
    is_hero: &impl Fn(PlayerId) -> bool,
) -> Vec<PlayerAtTableDto> {
    let mut res = Vec::new();

    for (idx, seat_opt) in table.seats.iter().enumerate() {
        if let Some(p) = seat_opt {
            let pid = p.player_id;
            let show_cards = is_hero(pid) || table.phase.is_showdown_or_later();

            res.push(PlayerAtTableDto {
                player_id: pid,
                display_name: resolve_name(pid),
                seat_index: idx as u8,
                stack: p.stack,
                current_bet: p.current_bet,
                hand_bet: p.hand_bet,
                status: p.status,
                is_dealer: p.is_dealer,
                is_small_blind: p.is_small_blind,
                is_big_blind: p.is_big_blind,
                hole_cards: if show_cards {
                    Some(p.hole_cards.clone())
                } else {
                    None
                },
            });
        }
    }

    res
}
