use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;

/// Один уровень блайндов.
/// Пример: level = 3, SB = 15, BB = 30, hands_duration = 10.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlindLevel {
    /// Порядковый номер уровня (1, 2, 3, ...).
    pub level: u32,
    /// Малый блайнд.
    pub small_blind: Chips,
    /// Большой блайнд.
    pub big_blind: Chips,
    /// Сколько раздач действует уровень.
    pub hands_duration: u32,
}

impl BlindLevel {
    pub fn new(level: u32, small_blind: Chips, big_blind: Chips, hands_duration: u32) -> Self {
        Self {
            level,
            small_blind,
            big_blind,
            hands_duration,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.small_blind.0 <= 0 {
            return Err(format!("BlindLevel {}: small_blind <= 0", self.level));
        }
        if self.big_blind.0 <= 0 {
            return Err(format!("BlindLevel {}: big_blind <= 0", self.level));
        }
        if self.big_blind.0 <= self.small_blind.0 {
            return Err(format!(
                "BlindLevel {}: big_blind ({}) <= small_blind ({})",
                self.level, self.big_blind.0, self.small_blind.0
            ));
        }
        if self.hands_duration == 0 {
            return Err(format!("BlindLevel {}: hands_duration = 0", self.level));
        }
        Ok(())
    }
}

/// Структура уровней блайндов для турнира.
///
/// Уровни сменяются по счётчику сыгранных раздач (не по времени):
/// уровень 1 действует для раздач 1..=d1, уровень 2 для d1+1..=d1+d2 и т.д.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlindStructure {
    pub levels: Vec<BlindLevel>,
}

impl BlindStructure {
    pub fn new(levels: Vec<BlindLevel>) -> Self {
        Self { levels }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.levels.is_empty() {
            return Err("BlindStructure: empty levels".into());
        }

        let mut expected_level = 1u32;
        for lvl in &self.levels {
            lvl.validate()?;
            if lvl.level != expected_level {
                return Err(format!(
                    "BlindStructure: expected level {}, got {}",
                    expected_level, lvl.level
                ));
            }
            expected_level += 1;
        }

        Ok(())
    }

    pub fn first_level(&self) -> &BlindLevel {
        &self.levels[0]
    }

    pub fn level_by_number(&self, number: u32) -> Option<&BlindLevel> {
        self.levels.iter().find(|lvl| lvl.level == number)
    }

    pub fn total_hands(&self) -> u64 {
        self.levels.iter().map(|lvl| lvl.hands_duration as u64).sum()
    }

    /// Уровень для раздачи с номером `hand_no` (нумерация с 1).
    ///
    /// При hands_duration = 24 раздача 24 играется ещё на уровне 1,
    /// раздача 25 – уже на уровне 2. После исчерпания расписания
    /// остаётся последний уровень.
    pub fn level_for_hand(&self, hand_no: u64) -> &BlindLevel {
        let mut acc = 0u64;
        let mut current = &self.levels[0];

        for lvl in &self.levels {
            acc += lvl.hands_duration as u64;
            current = lvl;
            if hand_no <= acc {
                return lvl;
            }
        }

        current
    }

    /// Демо-структура: четыре коротких уровня по 10 раздач.
    pub fn simple_demo_structure() -> Self {
        let levels = vec![
            BlindLevel::new(1, Chips::new(5), Chips::new(10), 10),
            BlindLevel::new(2, Chips::new(10), Chips::new(20), 10),
            BlindLevel::new(3, Chips::new(15), Chips::new(30), 10),
            BlindLevel::new(4, Chips::new(25), Chips::new(50), 10),
        ];

        BlindStructure { levels }
    }
}
