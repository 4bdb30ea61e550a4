use crate::domain::{PlayerId, SeatIndex, TableId};

use thiserror::Error;

/// Ошибки движка покера.
///
/// Все отказы синхронные: действие либо применяется целиком (мутация +
/// запись в историю), либо отклоняется с ошибкой, и состояние не меняется.
/// Политику отката (принудительный fold по таймауту и т.п.) выбирает
/// вызывающий, не движок.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Стол {0} не найден")]
    TableNotFound(TableId),

    #[error("Место {0} не существует за столом")]
    InvalidSeat(SeatIndex),

    #[error("В этом месте нет игрока")]
    EmptySeat,

    #[error("Игрок {0} не найден за столом")]
    PlayerNotAtTable(PlayerId),

    #[error("Недостаточно активных игроков для раздачи")]
    NotEnoughPlayers,

    #[error("Раздача уже идёт")]
    HandAlreadyInProgress,

    #[error("Раздача не активна")]
    NoActiveHand,

    #[error("Сейчас не ход игрока с id={0}")]
    NotPlayersTurn(PlayerId),

    #[error("Игрок {0} не участвует в раздаче (fold/вылет/sit out)")]
    PlayerNotInHand(PlayerId),

    #[error("Недопустимое действие в текущем состоянии раздачи")]
    IllegalAction,

    #[error("Недостаточно фишек для этой ставки")]
    NotEnoughChips,

    #[error("Размер рейза слишком мал")]
    RaiseTooSmall,

    #[error("Невозможно выполнить check – нужно хотя бы уравнять ставку")]
    CannotCheck,

    #[error("Невозможно выполнить call – нет ставки для уравнивания")]
    CannotCall,

    #[error("Невозможно выполнить fold – check бесплатен")]
    CannotFold,

    /// Фатальное нарушение инварианта: при корректной оркестрации колода
    /// не может закончиться. Раздача прерывается (вклады возвращаются),
    /// банки не искажаются.
    #[error("Колода исчерпана – раздача прервана")]
    DeckExhausted,

    #[error("Внутренняя ошибка: {0}")]
    Internal(&'static str),
}
