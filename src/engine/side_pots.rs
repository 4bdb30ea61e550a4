use crate::domain::player::{PlayerAtTable, PlayerStatus};
use crate::domain::{chips::Chips, SeatIndex};
use crate::engine::pot::Pot;

/// Разложить вклады игроков (hand_bet) на главный банк и сайд-поты.
///
/// Для каждого уровня вклада L (по возрастанию) формируется банк,
/// собирающий `min(вклад, L) - предыдущий_уровень` с каждого, кто дошёл
/// хотя бы до предыдущего уровня. Претенденты банка — те, кто вложил >= L
/// и не сфолдил. Последний (некрытый) банк собирает остаток поверх
/// старшего уровня олл-инов.
///
/// Инвариант: сумма банков == сумма hand_bet (фишки не теряются,
/// сфолдившие вклады остаются в банках).
pub fn compute_pots(seats: &[Option<PlayerAtTable>]) -> Vec<Pot> {
    // (seat, вклад, претендует ли на банк)
    let mut entries: Vec<(SeatIndex, Chips, bool)> = Vec::new();
    for (idx, seat_opt) in seats.iter().enumerate() {
        if let Some(p) = seat_opt {
            if p.hand_bet.0 > 0 {
                let contends = !matches!(
                    p.status,
                    PlayerStatus::Folded | PlayerStatus::Busted | PlayerStatus::SittingOut
                );
                entries.push((idx as SeatIndex, p.hand_bet, contends));
            }
        }
    }

    if entries.is_empty() {
        return Vec::new();
    }

    // Уникальные уровни вкладов по возрастанию.
    let mut levels: Vec<i64> = entries.iter().map(|(_, c, _)| c.0).collect();
    levels.sort_unstable();
    levels.dedup();

    let mut pots = Vec::new();
    let mut prev_level = 0i64;

    for level in levels {
        let slice = level - prev_level;

        // Каждый вклад сам является одним из уровней, поэтому игрок либо
        // дошёл до уровня целиком, либо уже исчерпан предыдущими слоями.
        let mut amount = 0i64;
        let mut eligible = Vec::new();
        for &(seat, contrib, contends) in &entries {
            if contrib.0 >= level {
                amount += slice;
                if contends {
                    eligible.push(seat);
                }
            }
        }

        if amount > 0 {
            pots.push(Pot::new(Chips(amount), eligible));
        }

        prev_level = level;
    }

    pots
}
