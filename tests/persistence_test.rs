//! Тесты снапшотов: заморозка раздачи посреди раунда ставок,
//! восстановление через JSON-хранилище и доигрывание с той же позиции.

use holdem_engine::domain::{
    Chips, Phase, PlayerAtTable, Ruleset, Table, TableConfig, TableStakes, TableType,
};
use holdem_engine::engine::{
    apply_action, start_hand, HandEngine, HandStatus, PlayerAction, PlayerActionKind, RandomSource,
};
use holdem_engine::infra::{HandEngineSnapshot, InMemoryPokerStorage, PokerStorage};
use holdem_engine::tournament::TournamentController;
use holdem_engine::domain::{BlindLevel, BlindStructure};

struct FixedOrderRng;

impl RandomSource for FixedOrderRng {
    fn shuffle<T>(&mut self, _slice: &mut [T]) {}
}

fn make_table(stacks: &[i64]) -> Table {
    let config = TableConfig::new(
        stacks.len() as u8,
        TableType::Tournament,
        Ruleset::Standard,
        TableStakes::new(Chips(5), Chips(10)),
    );
    let mut table = Table::new(1, "snap".into(), config);
    for (i, &s) in stacks.iter().enumerate() {
        table.seats[i] = Some(PlayerAtTable::new(100 + i as u64, Chips(s)));
    }
    table
}

fn act(table: &mut Table, engine: &mut HandEngine, seat: u8, kind: PlayerActionKind) -> HandStatus {
    apply_action(
        table,
        engine,
        PlayerAction {
            player_id: 100 + seat as u64,
            seat,
            kind,
        },
    )
    .unwrap()
}

fn stacks_of(table: &Table) -> Vec<i64> {
    table
        .seats
        .iter()
        .filter_map(|s| s.as_ref())
        .map(|p| p.stack.0)
        .collect()
}

/// Снапшот раздачи переживает сериализацию и восстанавливается
/// с точностью до поля.
#[test]
fn snapshot_roundtrip_through_json_storage() {
    let mut table = make_table(&[1000, 1000, 1000]);
    let mut engine = start_hand(&mut table, &mut FixedOrderRng, 7).unwrap();
    act(&mut table, &mut engine, 0, PlayerActionKind::Raise(Chips(30)));

    let snapshot = HandEngineSnapshot::from_engine(&engine);

    let mut storage = InMemoryPokerStorage::new();
    storage.save_table(&table);
    storage.save_active_hand(table.id, Some(snapshot.clone()));

    let loaded_table = storage.load_table(1).expect("стол сохранён");
    let loaded_snapshot = storage.load_active_hand(1).expect("раздача сохранена");

    assert_eq!(loaded_table, table);
    assert_eq!(loaded_snapshot, snapshot);

    // Позиция раунда ставок сохранена точно: фаза, очередь, актёр, колода.
    assert_eq!(loaded_table.phase, Phase::Preflop);
    assert_eq!(loaded_snapshot.current_actor, engine.current_actor);
    assert_eq!(loaded_snapshot.betting, engine.betting);
    assert_eq!(loaded_snapshot.deck.len(), engine.deck.len());

    // Очистка активной раздачи.
    storage.save_active_hand(1, None);
    assert!(storage.load_active_hand(1).is_none());
}

/// Восстановленная раздача доигрывается в точности как оригинал:
/// одинаковые действия – одинаковые стеки на выходе.
#[test]
fn restored_hand_plays_out_identically() {
    let mut table = make_table(&[1000, 1000, 1000]);
    let mut engine = start_hand(&mut table, &mut FixedOrderRng, 7).unwrap();
    act(&mut table, &mut engine, 0, PlayerActionKind::Raise(Chips(30)));

    // Замораживаем посреди префлопа.
    let mut storage = InMemoryPokerStorage::new();
    storage.save_table(&table);
    storage.save_active_hand(table.id, Some(HandEngineSnapshot::from_engine(&engine)));

    let mut restored_table = storage.load_table(1).unwrap();
    let mut restored_engine = storage.load_active_hand(1).unwrap().into_engine();

    // Один и тот же сценарий на обеих копиях.
    let script: Vec<(u8, PlayerActionKind)> = vec![
        (1, PlayerActionKind::Call),
        (2, PlayerActionKind::Call),
        // Флоп, тёрн, ривер: чеки до вскрытия.
        (1, PlayerActionKind::Check),
        (2, PlayerActionKind::Check),
        (0, PlayerActionKind::Check),
        (1, PlayerActionKind::Check),
        (2, PlayerActionKind::Check),
        (0, PlayerActionKind::Check),
        (1, PlayerActionKind::Check),
        (2, PlayerActionKind::Check),
        (0, PlayerActionKind::Check),
    ];

    let mut last_original = None;
    let mut last_restored = None;
    for &(seat, kind) in &script {
        last_original = Some(act(&mut table, &mut engine, seat, kind));
        last_restored = Some(act(&mut restored_table, &mut restored_engine, seat, kind));
    }

    assert!(matches!(last_original, Some(HandStatus::Finished(..))));
    assert!(matches!(last_restored, Some(HandStatus::Finished(..))));

    // Колода была сохранена, поэтому борд и исходы совпадают.
    assert_eq!(table.board, restored_table.board);
    assert_eq!(stacks_of(&table), stacks_of(&restored_table));

    // Фишки сохранены.
    let total: i64 = stacks_of(&table).iter().sum();
    assert_eq!(total, 3000);
}

/// Турнирный контроллер сохраняется и восстанавливается.
#[test]
fn tournament_controller_roundtrip() {
    let structure = BlindStructure::new(vec![
        BlindLevel::new(1, Chips(5), Chips(10), 10),
        BlindLevel::new(2, Chips(10), Chips(20), 10),
    ]);
    let ctrl = TournamentController::new(structure, &[100, 101, 102]).unwrap();

    let mut storage = InMemoryPokerStorage::new();
    storage.save_tournament(1, &ctrl);

    let loaded = storage.load_tournament(1).expect("контроллер сохранён");
    assert_eq!(loaded.hands_played, ctrl.hands_played);
    assert_eq!(loaded.current_level, ctrl.current_level);
    assert_eq!(loaded.total_entries, 3);
    assert_eq!(loaded.standings.len(), 3);
}
