use serde::{Deserialize, Serialize};

use crate::domain::{PlayerId, TableId};
use crate::engine::{EngineError, ManagerError};

/// Ошибки внешнего API (то, что отдаём клиенту).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные.
    BadRequest(String),

    /// Стол не найден.
    TableNotFound(TableId),

    /// Игрок не найден за столом.
    PlayerNotAtTable(PlayerId),

    /// Команда не может быть выполнена в текущем состоянии.
    InvalidCommand(String),

    /// Ошибка движка (ставки, действия). Действие отклонено,
    /// состояние стола не изменилось.
    EngineError(String),

    /// Внутренняя ошибка.
    Internal(String),
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        ApiError::EngineError(err.to_string())
    }
}

impl From<ManagerError> for ApiError {
    fn from(err: ManagerError) -> Self {
        match err {
            ManagerError::TableNotFound(id) => ApiError::TableNotFound(id),
            ManagerError::NoActiveHand(id) => {
                ApiError::InvalidCommand(format!("no active hand at table {id}"))
            }
            ManagerError::SeatUnavailable(id, seat) => {
                ApiError::InvalidCommand(format!("seat {seat} unavailable at table {id}"))
            }
            ManagerError::HandInProgress(id) => {
                ApiError::InvalidCommand(format!("hand in progress at table {id}"))
            }
            ManagerError::Engine(e) => ApiError::EngineError(e.to_string()),
        }
    }
}
