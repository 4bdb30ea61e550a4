use serde::{Deserialize, Serialize};

use crate::domain::{chips::Chips, SeatIndex};

/// Банк (главный или сайд-пот): сумма и круг претендентов.
///
/// Сфолдившие игроки оставляют фишки в банках, но в eligible_seats
/// не попадают — выиграть банк они не могут.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pot {
    pub amount: Chips,
    /// Места игроков, претендующих на этот банк (вклад >= уровня банка,
    /// не сфолдили).
    pub eligible_seats: Vec<SeatIndex>,
}

impl Pot {
    pub fn new(amount: Chips, eligible_seats: Vec<SeatIndex>) -> Self {
        Self {
            amount,
            eligible_seats,
        }
    }

    pub fn is_eligible(&self, seat: SeatIndex) -> bool {
        self.eligible_seats.contains(&seat)
    }
}

/// Сумма всех банков. Инвариант раздачи: равна сумме hand_bet всех игроков.
pub fn total_of(pots: &[Pot]) -> Chips {
    pots.iter().fold(Chips::ZERO, |acc, p| acc + p.amount)
}
