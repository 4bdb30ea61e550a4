//! Покерный движок: ставки, переход улиц, сайд-поты, шоудаун.
//!
//! Высокоуровневый объект: `HandEngine`
//! Основные операции:
//!   - `start_hand` – запустить новую раздачу
//!   - `apply_action` – применить действие игрока
//!   - `legal_actions` – множество допустимых действий текущего игрока
//!   - `advance_if_needed` – переход улиц / доигровка борда / завершение
//!
//! Несколько столов обслуживает `TableManager` (реестр с дисциплиной
//! "один писатель на стол").

pub mod actions;
pub mod betting;
pub mod errors;
pub mod game_loop;
pub mod hand_history;
pub mod positions;
pub mod pot;
pub mod side_pots;
pub mod table_manager;
pub mod validation;

pub use actions::{PlayerAction, PlayerActionKind};
pub use errors::EngineError;
pub use game_loop::{advance_if_needed, apply_action, start_hand, HandEngine, HandStatus};
pub use hand_history::{HandEvent, HandEventKind, HandHistory};
pub use pot::Pot;
pub use side_pots::compute_pots;
pub use validation::{legal_actions, LegalAction};

/// RNG интерфейс для engine. Реализации — в infra
/// (системный RNG и детерминированный для тестов/реплеев).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}

pub use table_manager::{ManagerError, TableManager};
