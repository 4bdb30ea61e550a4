use serde::{Deserialize, Serialize};

use crate::domain::card::Ruleset;
use crate::domain::chips::Chips;
use crate::domain::table::{Table, TableConfig, TableStakes, TableType};
use crate::domain::{HandId, PlayerId, TableId};
use crate::engine::actions::PlayerAction;
use crate::engine::{HandStatus, RandomSource, TableManager};

use super::dto::TableViewDto;
use super::errors::ApiError;
use super::queries::build_table_view;

/// Команда верхнего уровня: всё, что меняет состояние.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Command {
    /// Создать новый стол.
    CreateTable(CreateTableCommand),

    /// Операция над конкретным столом.
    TableCommand(TableCommand),
}

/// Команда создания стола.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateTableCommand {
    /// Идентификатор нового стола.
    pub table_id: TableId,
    /// Имя стола (лобби).
    pub name: String,
    /// Максимальное количество мест (2–9, например).
    pub max_seats: u8,
    /// Блайнды.
    pub small_blind: Chips,
    pub big_blind: Chips,
    /// Вариант правил: обычная колода или short-deck.
    pub ruleset: Ruleset,
    /// Турнир или continuous-игра.
    pub table_type: TableType,
}

/// Команды, которые относятся к существующему столу.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum TableCommand {
    /// Посадить игрока за стол (только между раздачами).
    SeatPlayer(SeatPlayerCommand),

    /// Убрать игрока с места (только между раздачами).
    UnseatPlayer(UnseatPlayerCommand),

    /// Запустить новую раздачу (если сейчас нет активной).
    StartHand(StartHandCommand),

    /// Действие игрока в раздаче.
    PlayerAction(PlayerActionCommand),
}

/// Посадить игрока в конкретное место.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SeatPlayerCommand {
    pub table_id: TableId,
    pub player_id: PlayerId,
    pub seat_index: u8,
    pub initial_stack: Chips,
}

/// Убрать игрока с места.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UnseatPlayerCommand {
    pub table_id: TableId,
    pub seat_index: u8,
}

/// Запуск новой раздачи.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StartHandCommand {
    pub table_id: TableId,
    /// Идентификатор раздачи (генерится хостом).
    pub hand_id: HandId,
}

/// Действие игрока в раздаче.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlayerActionCommand {
    pub table_id: TableId,
    pub action: PlayerAction,
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum CommandResponse {
    /// Успешный результат без доп.данных.
    Ok,

    /// Создан новый стол.
    TableCreated(TableViewDto),

    /// Обновлённое состояние стола.
    TableState(TableViewDto),

    /// Раздача завершилась этой командой.
    HandFinished(TableViewDto),
}

/// Выполнить команду против реестра столов.
///
/// Каждая команда либо целиком применяется, либо отклоняется с ошибкой
/// без изменения состояния.
pub fn execute_command<R: RandomSource>(
    manager: &mut TableManager,
    rng: &mut R,
    command: Command,
) -> Result<CommandResponse, ApiError> {
    match command {
        Command::CreateTable(cmd) => {
            if cmd.max_seats < 2 {
                return Err(ApiError::BadRequest("max_seats must be >= 2".into()));
            }
            if cmd.big_blind.0 <= cmd.small_blind.0 || cmd.small_blind.0 <= 0 {
                return Err(ApiError::BadRequest("invalid blinds".into()));
            }

            let config = TableConfig::new(
                cmd.max_seats,
                cmd.table_type,
                cmd.ruleset,
                TableStakes::new(cmd.small_blind, cmd.big_blind),
            );
            let table = Table::new(cmd.table_id, cmd.name, config);
            let view = build_table_view(&table, None, |pid| format!("Player {pid}"), |_| false);
            manager.add_table(table);
            Ok(CommandResponse::TableCreated(view))
        }

        Command::TableCommand(table_cmd) => match table_cmd {
            TableCommand::SeatPlayer(cmd) => {
                manager.seat_player(cmd.table_id, cmd.seat_index, cmd.player_id, cmd.initial_stack)?;
                Ok(CommandResponse::Ok)
            }

            TableCommand::UnseatPlayer(cmd) => {
                manager.unseat_player(cmd.table_id, cmd.seat_index)?;
                Ok(CommandResponse::Ok)
            }

            TableCommand::StartHand(cmd) => {
                let status = manager.start_hand(cmd.table_id, rng, cmd.hand_id)?;
                table_state_response(manager, cmd.table_id, status)
            }

            TableCommand::PlayerAction(cmd) => {
                let status = manager.apply_action(cmd.table_id, cmd.action)?;
                table_state_response(manager, cmd.table_id, status)
            }
        },
    }
}

fn table_state_response(
    manager: &TableManager,
    table_id: TableId,
    status: HandStatus,
) -> Result<CommandResponse, ApiError> {
    let table = manager
        .table(table_id)
        .ok_or(ApiError::TableNotFound(table_id))?;
    let view = build_table_view(
        table,
        manager.hand_engine(table_id),
        |pid| format!("Player {pid}"),
        |_| false,
    );

    match status {
        HandStatus::Ongoing => Ok(CommandResponse::TableState(view)),
        HandStatus::Finished(..) => Ok(CommandResponse::HandFinished(view)),
    }
}
