use core::ops::{Add, AddAssign, Sub, SubAssign};

use serde::{Deserialize, Serialize};

/// Количество фишек. Обёртка над i64, чтобы не путать с обычными числами.
///
/// Знаковый тип: в "continuous"-режиме (не турнир) принудительные блайнды
/// могут увести стек ниже нуля, и игрок при этом остаётся в игре.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct Chips(pub i64);

impl Chips {
    pub const ZERO: Chips = Chips(0);

    pub fn new(amount: i64) -> Self {
        Chips(amount)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Сколько фишек реально доступно для ставки: отрицательный стек
    /// считается пустым.
    pub fn available(&self) -> Chips {
        Chips(self.0.max(0))
    }

    /// Вычитание, не дающее уйти ниже нуля.
    pub fn saturating_sub(self, other: Chips) -> Chips {
        Chips((self.0 - other.0).max(0))
    }
}

impl Add for Chips {
    type Output = Chips;

    fn add(self, rhs: Chips) -> Self::Output {
        Chips(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Chips {
    fn add_assign(&mut self, rhs: Chips) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl Sub for Chips {
    type Output = Chips;

    fn sub(self, rhs: Chips) -> Self::Output {
        Chips(self.0.saturating_sub(rhs.0))
    }
}

impl SubAssign for Chips {
    fn sub_assign(&mut self, rhs: Chips) {
        self.0 = self.0.saturating_sub(rhs.0);
    }
}
