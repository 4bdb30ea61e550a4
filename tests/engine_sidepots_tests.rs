//! Тесты разложения банков: главный пот + сайд-поты по уровням вкладов,
//! круг претендентов, исключение сфолдивших, сохранение фишек.

use holdem_engine::domain::{Chips, PlayerAtTable, PlayerStatus, SeatIndex};
use holdem_engine::engine::pot::total_of;
use holdem_engine::engine::{compute_pots, Pot};

/// Утилита: игрок с заданным суммарным вкладом и статусом.
fn seat(player_id: u64, hand_bet: i64, status: PlayerStatus) -> Option<PlayerAtTable> {
    let mut p = PlayerAtTable::new(player_id, Chips(0));
    p.hand_bet = Chips(hand_bet);
    p.status = status;
    Some(p)
}

/// Утилита: достать (amount, eligible_seats_sorted) из Pot.
fn pot_info(p: &Pot) -> (i64, Vec<SeatIndex>) {
    let mut seats = p.eligible_seats.clone();
    seats.sort_unstable();
    (p.amount.0, seats)
}

//
// ====================== СЛОИ САЙД-ПОТОВ ======================
//

/// Два игрока с равными вкладами – один общий пот.
#[test]
fn side_pots_two_players_equal() {
    let seats = vec![
        seat(100, 100, PlayerStatus::AllIn),
        seat(101, 100, PlayerStatus::AllIn),
    ];

    let pots = compute_pots(&seats);
    assert_eq!(pots.len(), 1, "Должен быть один общий пот");
    assert_eq!(pot_info(&pots[0]), (200, vec![0, 1]));
}

/// Литеральный сценарий из спеки: уровни вкладов 100 < 300 < 500,
/// на верхнем уровне двое. Ожидаем поты 400 / 600 / 400 и сужающийся
/// круг претендентов.
#[test]
fn side_pots_literal_scenario_100_300_500_500() {
    let seats = vec![
        seat(100, 100, PlayerStatus::AllIn),
        seat(101, 300, PlayerStatus::AllIn),
        seat(102, 500, PlayerStatus::Active),
        seat(103, 500, PlayerStatus::Active),
    ];

    let pots = compute_pots(&seats);
    assert_eq!(pots.len(), 3, "Ожидаем 3 слоя");

    assert_eq!(pot_info(&pots[0]), (400, vec![0, 1, 2, 3])); // 100 × 4
    assert_eq!(pot_info(&pots[1]), (600, vec![1, 2, 3])); // 200 × 3
    assert_eq!(pot_info(&pots[2]), (400, vec![2, 3])); // 200 × 2

    // Сохранение фишек: сумма потов == сумме вкладов.
    assert_eq!(total_of(&pots), Chips(1400));
}

/// Вклады 100/300/300/500: некрытый остаток уходит в пот единственного
/// претендента верхнего уровня.
#[test]
fn side_pots_100_300_300_500() {
    let seats = vec![
        seat(100, 100, PlayerStatus::AllIn),
        seat(101, 300, PlayerStatus::AllIn),
        seat(102, 300, PlayerStatus::AllIn),
        seat(103, 500, PlayerStatus::Active),
    ];

    let pots = compute_pots(&seats);
    assert_eq!(pots.len(), 3);

    assert_eq!(pot_info(&pots[0]), (400, vec![0, 1, 2, 3]));
    assert_eq!(pot_info(&pots[1]), (600, vec![1, 2, 3]));
    assert_eq!(pot_info(&pots[2]), (200, vec![3]));

    assert_eq!(total_of(&pots), Chips(1200));
}

//
// ====================== СФОЛДИВШИЕ И ПУСТЫЕ МЕСТА ======================
//

/// Сфолдивший игрок оставляет фишки в банке, но не претендует на него.
#[test]
fn folded_player_contributes_but_is_not_eligible() {
    let seats = vec![
        seat(100, 100, PlayerStatus::Folded),
        seat(101, 200, PlayerStatus::Active),
        seat(102, 200, PlayerStatus::Active),
    ];

    let pots = compute_pots(&seats);
    assert_eq!(pots.len(), 2);

    // Слой 100: сфолдивший внёс, но из претендентов исключён.
    assert_eq!(pot_info(&pots[0]), (300, vec![1, 2]));
    assert_eq!(pot_info(&pots[1]), (200, vec![1, 2]));

    // Его фишки никуда не делись.
    assert_eq!(total_of(&pots), Chips(500));

    for p in &pots {
        assert!(!p.is_eligible(0), "Сфолдивший не претендует на банки");
    }
}

/// Пустые места и нулевые вклады не создают потов.
#[test]
fn empty_and_zero_contributions_ignored() {
    let seats = vec![
        None,
        seat(101, 0, PlayerStatus::Active),
        None,
        seat(103, 50, PlayerStatus::Active),
    ];

    let pots = compute_pots(&seats);
    assert_eq!(pots.len(), 1);
    assert_eq!(pot_info(&pots[0]), (50, vec![3]));

    let none: Vec<Option<PlayerAtTable>> = vec![None, None];
    assert!(compute_pots(&none).is_empty());
}

/// Нет нулевых потов; слои идут по возрастанию уровней.
#[test]
fn pots_are_non_zero_and_conserve_chips() {
    let seats = vec![
        seat(100, 50, PlayerStatus::AllIn),
        seat(101, 200, PlayerStatus::Active),
        seat(102, 200, PlayerStatus::Active),
        seat(103, 150, PlayerStatus::Folded),
    ];

    let pots = compute_pots(&seats);
    assert!(!pots.is_empty());

    for p in &pots {
        assert!(p.amount.0 > 0, "Пот не должен быть нулевым");
    }

    let total_contrib: i64 = seats
        .iter()
        .filter_map(|s| s.as_ref())
        .map(|p| p.hand_bet.0)
        .sum();
    assert_eq!(total_of(&pots), Chips(total_contrib));

    // Круг претендентов только сужается от слоя к слою.
    for w in pots.windows(2) {
        assert!(w[0].eligible_seats.len() >= w[1].eligible_seats.len());
    }
}
