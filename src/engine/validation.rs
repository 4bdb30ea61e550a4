use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::player::{PlayerAtTable, PlayerStatus};
use crate::engine::actions::PlayerActionKind;
use crate::engine::betting::BettingState;
use crate::engine::errors::EngineError;

/// Допустимое действие с подсказкой по суммам (для клиента).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum LegalAction {
    Fold,
    Check,
    /// Сколько нужно доплатить (уже обрезано по стеку – короткий стек
    /// уравнивает олл-ином).
    Call { amount: Chips },
    /// Диапазон суммарной ставки на улице: min = текущая ставка + min_raise,
    /// max = стек + уже поставленное (рейз на max – это олл-ин).
    Raise { min: Chips, max: Chips },
    /// Весь остаток стека.
    AllIn { amount: Chips },
}

/// Посчитать множество допустимых действий игрока при текущем состоянии
/// ставок. Именно это множество видит клиент через legal-actions query,
/// и именно по нему валидируется присланное действие.
///
/// Правила:
/// - бесплатный check вытесняет fold (fold легален только против ставки);
/// - call обрезается по стеку (неявный олл-ин);
/// - raise требует строго больше фишек, чем доплата до call, и
///   возможности сделать хотя бы минимальный полный рейз;
/// - all-in доступен, пока есть фишки.
pub fn legal_actions(player: &PlayerAtTable, betting: &BettingState) -> Vec<LegalAction> {
    if !player.can_act() {
        return Vec::new();
    }

    let stack = player.stack.available();
    let to_call = diff_to_call(player, betting);

    let mut actions = Vec::with_capacity(4);

    if to_call.is_zero() {
        actions.push(LegalAction::Check);
    } else {
        actions.push(LegalAction::Fold);
        actions.push(LegalAction::Call {
            amount: to_call.min(stack),
        });
    }

    if stack.0 > to_call.0 {
        let min_total = betting.current_bet + betting.min_raise;
        let max_total = player.current_bet + stack;
        if max_total.0 >= min_total.0 {
            actions.push(LegalAction::Raise {
                min: min_total,
                max: max_total,
            });
        }
    }

    if stack.0 > 0 {
        actions.push(LegalAction::AllIn { amount: stack });
    }

    actions
}

/// Проверка, может ли игрок выполнить это действие при текущем состоянии
/// ставок. Сверяется с множеством из `legal_actions`; отказ не меняет
/// никакого состояния.
pub fn validate_action(
    player: &PlayerAtTable,
    action: &PlayerActionKind,
    betting: &BettingState,
) -> Result<(), EngineError> {
    if matches!(
        player.status,
        PlayerStatus::Folded | PlayerStatus::Busted | PlayerStatus::SittingOut
    ) {
        return Err(EngineError::PlayerNotInHand(player.player_id));
    }
    if matches!(player.status, PlayerStatus::AllIn) {
        return Err(EngineError::IllegalAction);
    }

    let legal = legal_actions(player, betting);

    match action {
        PlayerActionKind::Fold => {
            if legal.contains(&LegalAction::Fold) {
                Ok(())
            } else {
                Err(EngineError::CannotFold)
            }
        }

        PlayerActionKind::Check => {
            if legal.contains(&LegalAction::Check) {
                Ok(())
            } else {
                Err(EngineError::CannotCheck)
            }
        }

        PlayerActionKind::Call => {
            if legal.iter().any(|a| matches!(a, LegalAction::Call { .. })) {
                Ok(())
            } else {
                Err(EngineError::CannotCall)
            }
        }

        PlayerActionKind::Raise(total_bet) => {
            let window = legal.iter().find_map(|a| match a {
                LegalAction::Raise { min, max } => Some((*min, *max)),
                _ => None,
            });
            match window {
                None => Err(EngineError::NotEnoughChips),
                Some((min, _)) if total_bet.0 < min.0 => Err(EngineError::RaiseTooSmall),
                Some((_, max)) if total_bet.0 > max.0 => Err(EngineError::NotEnoughChips),
                Some(_) => Ok(()),
            }
        }

        PlayerActionKind::AllIn => {
            if legal.iter().any(|a| matches!(a, LegalAction::AllIn { .. })) {
                Ok(())
            } else {
                Err(EngineError::IllegalAction)
            }
        }
    }
}

/// Сколько фишек нужно добавить игроку, чтобы уравнять текущую ставку.
pub fn diff_to_call(player: &PlayerAtTable, betting: &BettingState) -> Chips {
    if betting.current_bet.0 <= player.current_bet.0 {
        Chips::ZERO
    } else {
        Chips(betting.current_bet.0 - player.current_bet.0)
    }
}
