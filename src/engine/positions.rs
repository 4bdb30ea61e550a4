use crate::domain::player::PlayerStatus;
use crate::domain::{SeatIndex, Table};

/// Собрать занятые места по кругу, начиная с `start` (включительно).
pub fn collect_occupied_seats_from(table: &Table, start: SeatIndex) -> Vec<SeatIndex> {
    let max = table.max_seats() as usize;
    let mut seats = Vec::new();

    if max == 0 {
        return seats;
    }

    let mut idx = start as usize % max;
    for _ in 0..max {
        if idx < table.seats.len() && table.seats[idx].is_some() {
            seats.push(idx as SeatIndex);
        }
        idx = (idx + 1) % max;
    }

    seats
}

/// Места, за которыми сидят игроки, способные участвовать в новой раздаче
/// (не вылетевшие и не sit out), по кругу от `start`.
pub fn collect_dealable_seats_from(table: &Table, start: SeatIndex) -> Vec<SeatIndex> {
    collect_occupied_seats_from(table, start)
        .into_iter()
        .filter(|&seat| {
            table
                .seat(seat)
                .map(|p| !matches!(p.status, PlayerStatus::Busted | PlayerStatus::SittingOut))
                .unwrap_or(false)
        })
        .collect()
}

/// Следующая позиция дилерской кнопки:
/// - если кнопка есть – следующее место с играющим игроком;
/// - если нет – первое такое место от нуля.
pub fn next_dealer(table: &Table) -> Option<SeatIndex> {
    let start = match table.dealer_button {
        Some(button) => (button as usize + 1) % table.max_seats().max(1) as usize,
        None => 0,
    };
    collect_dealable_seats_from(table, start as SeatIndex)
        .first()
        .copied()
}

/// Первый активный игрок строго после `start` по кругу (сам `start`
/// не рассматривается). Используется для постфлоп-очереди: на поздних
/// улицах первым ходит первый активный слева от кнопки.
pub fn first_active_after(table: &Table, start: SeatIndex) -> Option<SeatIndex> {
    let max = table.max_seats() as usize;
    if max == 0 {
        return None;
    }

    let mut idx = (start as usize + 1) % max;
    for _ in 0..max.saturating_sub(1) {
        if let Some(p) = table.seat(idx as SeatIndex) {
            if matches!(p.status, PlayerStatus::Active) {
                return Some(idx as SeatIndex);
            }
        }
        idx = (idx + 1) % max;
    }

    None
}
