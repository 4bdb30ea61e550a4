//! Тесты турнирного контроллера: эскалация блайндов по числу раздач,
//! вылеты с местами, терминация (включая вырожденный случай без победителя).

use holdem_engine::domain::{
    BlindLevel, BlindStructure, Chips, PlayerAtTable, Ruleset, Table, TableConfig, TableStakes,
    TableType,
};
use holdem_engine::engine::{
    apply_action, start_hand, HandStatus, PlayerAction, PlayerActionKind, RandomSource,
};
use holdem_engine::tournament::{TournamentController, TournamentError, TournamentStatus};

struct FixedOrderRng;

impl RandomSource for FixedOrderRng {
    fn shuffle<T>(&mut self, _slice: &mut [T]) {}
}

fn make_table(stacks: &[i64], sb: i64, bb: i64, table_type: TableType) -> Table {
    let config = TableConfig::new(
        stacks.len() as u8,
        table_type,
        Ruleset::Standard,
        TableStakes::new(Chips(sb), Chips(bb)),
    );
    let mut table = Table::new(1, "mtt".into(), config);
    for (i, &s) in stacks.iter().enumerate() {
        table.seats[i] = Some(PlayerAtTable::new(100 + i as u64, Chips(s)));
    }
    table
}

fn set_stack(table: &mut Table, seat: u8, stack: i64) {
    table.seat_mut(seat).unwrap().stack = Chips(stack);
}

fn escalating_structure() -> BlindStructure {
    BlindStructure::new(vec![
        BlindLevel::new(1, Chips(10), Chips(20), 24),
        BlindLevel::new(2, Chips(20), Chips(40), 24),
        BlindLevel::new(3, Chips(40), Chips(80), 24),
    ])
}

//
// ====================== КОНФИГУРАЦИЯ ======================
//

#[test]
fn controller_rejects_bad_input() {
    // Меньше двух игроков.
    let err = TournamentController::new(escalating_structure(), &[100]).unwrap_err();
    assert!(matches!(err, TournamentError::NotEnoughPlayers(1)));

    // Битая структура блайндов.
    let bad = BlindStructure::new(vec![BlindLevel::new(1, Chips(20), Chips(10), 5)]);
    let err = TournamentController::new(bad, &[100, 101]).unwrap_err();
    assert!(matches!(err, TournamentError::InvalidConfig(_)));
}

//
// ====================== ЭСКАЛАЦИЯ БЛАЙНДОВ ======================
//

/// Граница уровней: при hands_duration = 24 раздача 24 играется на
/// уровне 1, раздача 25 – на уровне 2.
#[test]
fn blind_level_boundary_at_hand_24_and_25() {
    let mut table = make_table(&[10_000, 10_000], 10, 20, TableType::Tournament);
    let mut ctrl = TournamentController::new(escalating_structure(), &[100, 101]).unwrap();

    // Отыгрываем 23 раздачи (без вылетов – стеки большие, трогать их не надо).
    for _ in 0..23 {
        ctrl.prepare_hand(&mut table).unwrap();
        ctrl.on_hand_finished(&mut table).unwrap();
    }

    // Раздача 24 – всё ещё уровень 1.
    assert_eq!(ctrl.blinds_for_next_hand().level, 1);
    let change = ctrl.prepare_hand(&mut table).unwrap();
    assert!(change.is_none());
    assert_eq!(table.config.stakes.big_blind, Chips(20));
    let outcome = ctrl.on_hand_finished(&mut table).unwrap();

    // Контроллер сообщает о смене уровня к следующей раздаче.
    assert_eq!(outcome.level_advanced, Some((1, 2)));

    // Раздача 25 – уровень 2, блайнды выросли.
    assert_eq!(ctrl.blinds_for_next_hand().level, 2);
    let change = ctrl.prepare_hand(&mut table).unwrap();
    assert_eq!(change, Some((1, 2)));
    assert_eq!(table.config.stakes.small_blind, Chips(20));
    assert_eq!(table.config.stakes.big_blind, Chips(40));
}

//
// ====================== ВЫЛЕТЫ И ТЕРМИНАЦИЯ ======================
//

/// 4 игрока, три вылетают в трёх раздачах: контроллер останавливается
/// ровно тогда, когда остаётся один, и называет его id.
#[test]
fn four_player_tournament_terminates_with_single_winner() {
    let mut table = make_table(&[100, 100, 100, 100], 10, 20, TableType::Tournament);
    table.dealer_button = Some(0);
    let mut ctrl =
        TournamentController::new(escalating_structure(), &[100, 101, 102, 103]).unwrap();

    // Раздача 1: игрок на месте 3 теряет стек.
    ctrl.prepare_hand(&mut table).unwrap();
    set_stack(&mut table, 3, 0);
    set_stack(&mut table, 0, 200);
    let outcome = ctrl.on_hand_finished(&mut table).unwrap();
    assert_eq!(outcome.eliminated, vec![(103, 4)]);
    assert!(!outcome.finished);
    assert_eq!(ctrl.active_player_count(), 3);

    // Раздача 2: вылетает место 2.
    ctrl.prepare_hand(&mut table).unwrap();
    set_stack(&mut table, 2, 0);
    set_stack(&mut table, 1, 200);
    let outcome = ctrl.on_hand_finished(&mut table).unwrap();
    assert_eq!(outcome.eliminated, vec![(102, 3)]);
    assert!(!outcome.finished, "двое в игре – турнир продолжается");

    // Раздача 3: вылетает место 1 – остался один, турнир окончен.
    ctrl.prepare_hand(&mut table).unwrap();
    set_stack(&mut table, 1, 0);
    set_stack(&mut table, 0, 400);
    let outcome = ctrl.on_hand_finished(&mut table).unwrap();
    assert_eq!(outcome.eliminated, vec![(101, 2)]);
    assert!(outcome.finished);
    assert_eq!(outcome.winner_id, Some(100));

    assert!(ctrl.is_finished());
    assert_eq!(ctrl.status, TournamentStatus::Finished);
    assert_eq!(
        ctrl.standings.get(&100).unwrap().finishing_place,
        Some(1),
        "победителю – первое место"
    );

    // После завершения учёт раздач отклоняется.
    let err = ctrl.on_hand_finished(&mut table).unwrap_err();
    assert!(matches!(err, TournamentError::AlreadyFinished));
}

/// Вырожденный случай: все оставшиеся вылетают одновременно –
/// турнир завершается без победителя (это не ошибка).
#[test]
fn degenerate_simultaneous_elimination_has_no_winner() {
    let mut table = make_table(&[100, 100], 10, 20, TableType::Tournament);
    table.dealer_button = Some(0);
    let mut ctrl = TournamentController::new(escalating_structure(), &[100, 101]).unwrap();

    ctrl.prepare_hand(&mut table).unwrap();
    set_stack(&mut table, 0, 0);
    set_stack(&mut table, 1, 0);
    let outcome = ctrl.on_hand_finished(&mut table).unwrap();

    assert!(outcome.finished);
    assert_eq!(outcome.winner_id, None);
    assert_eq!(outcome.eliminated.len(), 2);
    assert_eq!(ctrl.active_player_count(), 0);
}

/// Continuous-режим: никто не вылетает, контроллер не завершает игру.
#[test]
fn continuous_mode_skips_elimination() {
    let mut table = make_table(&[100, 100], 10, 20, TableType::Continuous);
    table.dealer_button = Some(0);
    let mut ctrl = TournamentController::new(escalating_structure(), &[100, 101]).unwrap();

    ctrl.prepare_hand(&mut table).unwrap();
    set_stack(&mut table, 0, -50);
    let outcome = ctrl.on_hand_finished(&mut table).unwrap();

    assert!(outcome.eliminated.is_empty());
    assert!(!outcome.finished);
    assert_eq!(ctrl.active_player_count(), 2);
}

//
// ====================== СКВОЗНОЙ МИНИ-ТУРНИР ======================
//

/// Хедз-ап до вылета через настоящий движок: олл-ин первой же раздачей,
/// проигравший выбывает, контроллер объявляет победителя.
#[test]
fn heads_up_tournament_end_to_end() {
    let mut table = make_table(&[100, 100], 5, 10, TableType::Tournament);
    let mut ctrl = TournamentController::new(
        BlindStructure::new(vec![BlindLevel::new(1, Chips(5), Chips(10), 100)]),
        &[100, 101],
    )
    .unwrap();

    ctrl.prepare_hand(&mut table).unwrap();
    let mut engine = start_hand(&mut table, &mut FixedOrderRng, 1).unwrap();

    // SB (место 1) олл-ин, BB коллирует: фиксированная колода отдаёт
    // банк месту 1 (J-high стрит-флеш против T-high).
    apply_action(
        &mut table,
        &mut engine,
        PlayerAction {
            player_id: 101,
            seat: 1,
            kind: PlayerActionKind::AllIn,
        },
    )
    .unwrap();
    let status = apply_action(
        &mut table,
        &mut engine,
        PlayerAction {
            player_id: 100,
            seat: 0,
            kind: PlayerActionKind::Call,
        },
    )
    .unwrap();
    assert!(matches!(status, HandStatus::Finished(..)));

    let outcome = ctrl.on_hand_finished(&mut table).unwrap();
    assert_eq!(outcome.eliminated, vec![(100, 2)]);
    assert!(outcome.finished);
    assert_eq!(outcome.winner_id, Some(101));
    assert_eq!(
        ctrl.standings.get(&101).unwrap().finishing_place,
        Some(1)
    );

    // Сдавать следующую раздачу некому: остался один игрок с фишками.
    assert_eq!(holdem_engine::engine::table_manager::dealable_players(&table), 1);
}
