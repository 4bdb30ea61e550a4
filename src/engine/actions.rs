use serde::{Deserialize, Serialize};

use crate::domain::{Chips, PlayerId, SeatIndex};

/// Тип действия игрока.
///
/// Закрытый enum: валидатор и применение действия — тотальные функции
/// по этому множеству, "необработанных" действий не бывает.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayerActionKind {
    Fold,
    Check,
    /// Уравнять текущую ставку. Если стека не хватает —
    /// неявный олл-ин на остаток (это не ошибка).
    Call,
    /// Поднять до указанной суммарной ставки на улице.
    /// Первая ставка на улице — это рейз поверх нуля.
    Raise(Chips),
    /// Поставить весь стек.
    AllIn,
}

/// Конкретное действие игрока.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerAction {
    /// Какой игрок действует.
    pub player_id: PlayerId,
    /// На каком месте он сидит (0..max_seats-1).
    pub seat: SeatIndex,
    /// Само действие.
    pub kind: PlayerActionKind,
}
