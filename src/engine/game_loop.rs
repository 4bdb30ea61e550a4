use std::collections::HashMap;

use log::{debug, info};

use crate::domain::chips::Chips;
use crate::domain::deck::Deck;
use crate::domain::hand::{HandRank, HandSummary, Phase, PlayerHandResult};
use crate::domain::player::{PlayerAtTable, PlayerStatus};
use crate::domain::table::{OddChipRule, Table};
use crate::domain::{HandId, SeatIndex, TableId};
use crate::engine::actions::{PlayerAction, PlayerActionKind};
use crate::engine::betting::BettingState;
use crate::engine::errors::EngineError;
use crate::engine::hand_history::{HandEventKind, HandHistory};
use crate::engine::pot::{total_of, Pot};
use crate::engine::positions::{collect_dealable_seats_from, first_active_after, next_dealer};
use crate::engine::side_pots::compute_pots;
use crate::engine::validation::{diff_to_call, validate_action};
use crate::engine::RandomSource;

/// Статус раздачи для внешнего кода.
#[derive(Debug)]
pub enum HandStatus {
    Ongoing,
    Finished(HandSummary, HandHistory),
}

/// Внутреннее состояние раздачи.
///
/// Живёт от start_hand до завершения; всё, что нужно для возобновления
/// раздачи с текущей позиции (см. infra::persistence), лежит здесь
/// и в Table.
#[derive(Debug)]
pub struct HandEngine {
    pub table_id: TableId,
    pub hand_id: HandId,
    /// Неразданный остаток колоды.
    pub deck: Deck,
    pub betting: BettingState,
    /// Банки по состоянию на последнее закрытие раунда / шоудаун.
    pub pots: Vec<Pot>,
    /// Чей сейчас ход (seat). None – ходить некому (доигровка борда).
    pub current_actor: Option<SeatIndex>,
    /// История раздачи.
    pub history: HandHistory,
}

impl HandEngine {
    fn new(table_id: TableId, hand_id: HandId, deck: Deck, betting: BettingState) -> Self {
        Self {
            table_id,
            hand_id,
            deck,
            betting,
            pots: Vec::new(),
            current_actor: None,
            history: HandHistory::new(),
        }
    }
}

/// Старт новой раздачи:
/// - двигает кнопку на следующего играющего;
/// - постит блайнды;
/// - раздаёт карманные карты;
/// - настраивает BettingState и current_actor.
///
/// Если после блайндов ходить некому (все в олл-ине), current_actor
/// будет None – вызывающий должен сразу дернуть `advance_if_needed`,
/// чтобы доиграть борд до шоудауна.
pub fn start_hand<R: RandomSource>(
    table: &mut Table,
    rng: &mut R,
    new_hand_id: HandId,
) -> Result<HandEngine, EngineError> {
    if table.hand_in_progress() {
        return Err(EngineError::HandAlreadyInProgress);
    }

    let allow_negative = table.config.allow_negative_chips;

    // Сброс игроков к новой раздаче; без фишек в турнире – вылет.
    for seat_opt in table.seats.iter_mut() {
        if let Some(p) = seat_opt {
            if matches!(p.status, PlayerStatus::Busted | PlayerStatus::SittingOut) {
                continue;
            }
            if !allow_negative && p.stack.0 <= 0 {
                p.status = PlayerStatus::Busted;
                continue;
            }
            p.status = PlayerStatus::Active;
            p.reset_for_new_hand();
        }
    }

    let active_count = table
        .seats
        .iter()
        .filter_map(|s| s.as_ref())
        .filter(|p| p.can_act())
        .count();
    if active_count < 2 {
        return Err(EngineError::NotEnoughPlayers);
    }

    let table_id = table.id;
    let mut deck = Deck::for_ruleset(table.config.ruleset);
    rng.shuffle(&mut deck.cards);

    // Сброс стола.
    table.board.clear();
    table.total_pot = Chips::ZERO;
    table.current_hand_id = Some(new_hand_id);
    table.phase = Phase::Preflop;

    // Кнопка двигается на следующего играющего.
    let dealer_seat = next_dealer(table).ok_or(EngineError::NotEnoughPlayers)?;
    table.dealer_button = Some(dealer_seat);
    if let Some(p) = table.seat_mut(dealer_seat) {
        p.is_dealer = true;
    }

    let mut engine = HandEngine::new(
        table_id,
        new_hand_id,
        deck,
        BettingState::new(
            Phase::Preflop,
            Chips::ZERO,
            table.config.stakes.big_blind, // min_raise по умолчанию = BB
            Vec::new(),
        ),
    );

    engine.history.push(HandEventKind::HandStarted {
        table_id,
        hand_id: new_hand_id,
    });

    post_blinds(table, &mut engine, dealer_seat);
    deal_hole_cards(table, &mut engine)?;

    info!(
        "table {}: hand #{} started, dealer seat {}, blinds {}/{}",
        table_id,
        new_hand_id,
        dealer_seat,
        table.config.stakes.small_blind.0,
        table.config.stakes.big_blind.0
    );

    Ok(engine)
}

/// Постинг блайндов и формирование префлоп-очереди.
fn post_blinds(table: &mut Table, engine: &mut HandEngine, dealer_seat: SeatIndex) {
    let stakes = table.config.stakes;
    let allow_negative = table.config.allow_negative_chips;

    let occupied = collect_dealable_seats_from(table, dealer_seat);
    if occupied.len() < 2 {
        return;
    }

    // Хедз-ап: occupied = [dealer, other], SB достаётся второму,
    // BB — самому дилеру (как в исходной реализации).
    let sb_seat = occupied[1 % occupied.len()];
    let bb_seat = occupied[2 % occupied.len()];

    let mut sb_evt = None;
    if let Some(p) = table.seats[sb_seat as usize].as_mut() {
        let paid = take_from_stack(p, stakes.small_blind, allow_negative);
        p.current_bet += paid;
        p.hand_bet += paid;
        p.is_small_blind = true;
        if !allow_negative && p.stack.is_zero() {
            p.status = PlayerStatus::AllIn;
        }
        table.total_pot += paid;
        sb_evt = Some((sb_seat, paid));
    }

    let mut bb_evt = None;
    if let Some(p) = table.seats[bb_seat as usize].as_mut() {
        let paid = take_from_stack(p, stakes.big_blind, allow_negative);
        p.current_bet += paid;
        p.hand_bet += paid;
        p.is_big_blind = true;
        if !allow_negative && p.stack.is_zero() {
            p.status = PlayerStatus::AllIn;
        }
        table.total_pot += paid;
        bb_evt = Some((bb_seat, paid));
    }

    // Целевая ставка улицы — полный BB, даже если блайнд был коротким.
    engine.betting.current_bet = stakes.big_blind;
    engine.betting.min_raise = stakes.big_blind;
    engine.betting.last_aggressor = Some(bb_seat);

    engine.history.push(HandEventKind::BlindsPosted {
        dealer: dealer_seat,
        small_blind: sb_evt,
        big_blind: bb_evt,
    });

    // Первым на префлопе ходит первый активный после BB.
    let mut to_act = Vec::new();
    let start_idx = match occupied.iter().position(|&s| s == bb_seat) {
        Some(idx) => (idx + 1) % occupied.len(),
        None => 0,
    };
    for i in 0..occupied.len() {
        let idx = (start_idx + i) % occupied.len();
        let seat = occupied[idx];
        if let Some(p) = table.seats[seat as usize].as_ref() {
            if p.can_act() {
                to_act.push(seat);
            }
        }
    }

    engine.betting.to_act = to_act;
    engine.current_actor = engine.betting.to_act.first().copied();
}

/// Взять из стека не более amount (в continuous-режиме блайнд снимается
/// целиком, и стек может уйти в минус).
fn take_from_stack(player: &mut PlayerAtTable, amount: Chips, allow_negative: bool) -> Chips {
    let real = if allow_negative {
        amount
    } else {
        amount.min(player.stack.available())
    };
    player.stack -= real;
    real
}

/// Раздача карманных карт – по 2 карты, по кругу от дилера.
fn deal_hole_cards(table: &mut Table, engine: &mut HandEngine) -> Result<(), EngineError> {
    let dealer = table
        .dealer_button
        .ok_or(EngineError::Internal("дилер не задан при раздаче карт"))?;
    let order = collect_dealable_seats_from(table, dealer);

    for _round in 0..2 {
        for &seat in &order {
            let card = engine.deck.draw_one().ok_or(EngineError::DeckExhausted)?;
            if let Some(p) = table.seats[seat as usize].as_mut() {
                p.hole_cards.push(card);
                engine.history.push(HandEventKind::HoleCardsDealt {
                    seat,
                    cards: vec![card],
                });
            }
        }
    }

    Ok(())
}

/// Применить действие игрока. Возвращает статус раздачи (идёт / закончилась).
///
/// Действие вне допустимого множества отклоняется ошибкой, состояние
/// при этом не меняется. Каждое принятое действие попадает в историю.
pub fn apply_action(
    table: &mut Table,
    engine: &mut HandEngine,
    action: PlayerAction,
) -> Result<HandStatus, EngineError> {
    if !table.phase.is_betting_street() {
        return Err(EngineError::NoActiveHand);
    }

    let seat_idx = action.seat as usize;
    if seat_idx >= table.seats.len() {
        return Err(EngineError::InvalidSeat(action.seat));
    }

    let player_ref = table.seats[seat_idx]
        .as_ref()
        .ok_or(EngineError::EmptySeat)?;

    if player_ref.player_id != action.player_id {
        return Err(EngineError::PlayerNotAtTable(action.player_id));
    }

    if engine.current_actor != Some(action.seat) {
        return Err(EngineError::NotPlayersTurn(action.player_id));
    }

    validate_action(player_ref, &action.kind, &engine.betting)?;

    let to_call = diff_to_call(player_ref, &engine.betting);
    let phase = table.phase;

    match action.kind {
        PlayerActionKind::Fold => {
            let (player_id, new_stack) = {
                let player = table.seats[seat_idx]
                    .as_mut()
                    .ok_or(EngineError::EmptySeat)?;
                player.status = PlayerStatus::Folded;
                (player.player_id, player.stack)
            };

            engine.history.push(HandEventKind::PlayerActed {
                player_id,
                seat: action.seat,
                action: action.kind,
                amount: Chips::ZERO,
                phase,
                new_stack,
                pot_after: table.total_pot,
            });
        }

        PlayerActionKind::Check => {
            let (player_id, new_stack) = {
                let player = table.seats[seat_idx]
                    .as_mut()
                    .ok_or(EngineError::EmptySeat)?;
                (player.player_id, player.stack)
            };

            engine.history.push(HandEventKind::PlayerActed {
                player_id,
                seat: action.seat,
                action: action.kind,
                amount: Chips::ZERO,
                phase,
                new_stack,
                pot_after: table.total_pot,
            });
        }

        PlayerActionKind::Call => {
            let (player_id, new_stack, paid) = {
                let player = table.seats[seat_idx]
                    .as_mut()
                    .ok_or(EngineError::EmptySeat)?;

                // Короткий стек уравнивает тем, что есть – неявный олл-ин.
                let pay = to_call.min(player.stack.available());
                player.stack -= pay;
                player.current_bet += pay;
                player.hand_bet += pay;
                if player.stack.0 <= 0 {
                    player.status = PlayerStatus::AllIn;
                }
                table.total_pot += pay;

                (player.player_id, player.stack, pay)
            };

            engine.history.push(HandEventKind::PlayerActed {
                player_id,
                seat: action.seat,
                action: action.kind,
                amount: paid,
                phase,
                new_stack,
                pot_after: table.total_pot,
            });
        }

        PlayerActionKind::Raise(total_bet) => {
            let current_bet_before = engine.betting.current_bet;
            let (player_id, new_stack, new_bet, paid) = {
                let player = table.seats[seat_idx]
                    .as_mut()
                    .ok_or(EngineError::EmptySeat)?;

                let diff = Chips(total_bet.0 - player.current_bet.0);
                player.stack -= diff;
                player.current_bet = total_bet;
                player.hand_bet += diff;
                if player.stack.0 <= 0 {
                    player.status = PlayerStatus::AllIn;
                }
                table.total_pot += diff;

                (player.player_id, player.stack, player.current_bet, diff)
            };

            // Валидация гарантирует полный рейз: min_raise = его размер.
            let raise_size = Chips(new_bet.0 - current_bet_before.0);
            engine.betting.on_raise(
                action.seat,
                new_bet,
                raise_size,
                collect_betting_order_after_raise(table, action.seat),
            );

            engine.history.push(HandEventKind::PlayerActed {
                player_id,
                seat: action.seat,
                action: action.kind,
                amount: paid,
                phase,
                new_stack,
                pot_after: table.total_pot,
            });
        }

        PlayerActionKind::AllIn => {
            let current_bet_before = engine.betting.current_bet;
            let min_raise_before = engine.betting.min_raise;
            let (player_id, new_stack, new_bet, paid) = {
                let player = table.seats[seat_idx]
                    .as_mut()
                    .ok_or(EngineError::EmptySeat)?;

                let allin = player.stack.available();
                player.stack -= allin;
                player.status = PlayerStatus::AllIn;

                let new_bet = player.current_bet + allin;
                player.current_bet = new_bet;
                player.hand_bet += allin;
                table.total_pot += allin;

                (player.player_id, player.stack, new_bet, allin)
            };

            if new_bet.0 > current_bet_before.0 {
                // Олл-ин поверх ставки: остальные отвечают заново.
                // Недорейз (меньше min_raise) не увеличивает порог рейза.
                let raise_size = Chips(new_bet.0 - current_bet_before.0);
                let new_min_raise = if raise_size.0 >= min_raise_before.0 {
                    raise_size
                } else {
                    min_raise_before
                };
                engine.betting.on_raise(
                    action.seat,
                    new_bet,
                    new_min_raise,
                    collect_betting_order_after_raise(table, action.seat),
                );
            } else {
                // Олл-ин "под ставку" – просто снимаем из очереди.
                engine.betting.mark_acted(action.seat);
            }

            engine.history.push(HandEventKind::PlayerActed {
                player_id,
                seat: action.seat,
                action: action.kind,
                amount: paid,
                phase,
                new_stack,
                pot_after: table.total_pot,
            });
        }
    }

    debug!(
        "table {}: seat {} -> {:?}, pot {}",
        table.id, action.seat, action.kind, table.total_pot.0
    );

    // Текущий игрок походил → убираем из очереди.
    engine.betting.mark_acted(action.seat);

    // Остался один непосфолдивший – банк его без вскрытия.
    if count_in_hand(table) == 1 {
        let summary = finish_hand_without_showdown(table, engine);
        return Ok(HandStatus::Finished(summary, engine.history.clone()));
    }

    if engine.betting.is_round_complete() {
        advance_if_needed(table, engine)
    } else {
        engine.current_actor = engine.betting.to_act.first().copied();
        Ok(HandStatus::Ongoing)
    }
}

/// Пересчёт очереди после рейза: начиная со следующего за raiser по кругу,
/// только активные (не олл-ин, не fold).
fn collect_betting_order_after_raise(table: &Table, raiser_seat: SeatIndex) -> Vec<SeatIndex> {
    let order = collect_dealable_seats_from(table, raiser_seat);
    let mut res = Vec::new();
    if order.len() <= 1 {
        return res;
    }

    for i in 1..order.len() {
        let seat = order[i];
        if let Some(p) = table.seats[seat as usize].as_ref() {
            if p.can_act() {
                res.push(seat);
            }
        }
    }
    res
}

/// Подсчёт претендующих на банк (active + all-in).
fn count_in_hand(table: &Table) -> usize {
    table
        .seats
        .iter()
        .filter_map(|s| s.as_ref())
        .filter(|p| p.is_in_hand())
        .count()
}

/// Сколько игроков ещё могут делать ставки.
fn count_can_act(table: &Table) -> usize {
    table
        .seats
        .iter()
        .filter_map(|s| s.as_ref())
        .filter(|p| p.can_act())
        .count()
}

/// Переход улиц / доигровка борда / шоудаун.
///
/// Вызывается при закрытом раунде ставок (или при current_actor == None
/// сразу после start_hand, когда блайнды посадили всех в олл-ин).
pub fn advance_if_needed(
    table: &mut Table,
    engine: &mut HandEngine,
) -> Result<HandStatus, EngineError> {
    // Закрытие раунда: фиксируем банки и сбрасываем ставки улицы.
    engine.pots = compute_pots(&table.seats);
    reset_street_bets(table);

    // Если ставить больше некому (максимум один может действовать),
    // борд доигрывается без торговли до самого шоудауна.
    if count_in_hand(table) >= 2 && count_can_act(table) <= 1 {
        while table.phase != Phase::River {
            let (count, next_phase) = match table.phase {
                Phase::Preflop => (3, Phase::Flop),
                Phase::Flop => (1, Phase::Turn),
                Phase::Turn => (1, Phase::River),
                _ => return Err(EngineError::Internal("доигровка вне улиц")),
            };
            deal_board_cards(table, engine, count, next_phase)?;
        }
        let summary = finish_hand_with_showdown(table, engine)?;
        return Ok(HandStatus::Finished(summary, engine.history.clone()));
    }

    match table.phase {
        Phase::Preflop => {
            deal_board_cards(table, engine, 3, Phase::Flop)?;
            open_betting_round(table, engine, Phase::Flop);
            Ok(HandStatus::Ongoing)
        }
        Phase::Flop => {
            deal_board_cards(table, engine, 1, Phase::Turn)?;
            open_betting_round(table, engine, Phase::Turn);
            Ok(HandStatus::Ongoing)
        }
        Phase::Turn => {
            deal_board_cards(table, engine, 1, Phase::River)?;
            open_betting_round(table, engine, Phase::River);
            Ok(HandStatus::Ongoing)
        }
        Phase::River => {
            let summary = finish_hand_with_showdown(table, engine)?;
            Ok(HandStatus::Finished(summary, engine.history.clone()))
        }
        _ => Err(EngineError::Internal("advance вне активной раздачи")),
    }
}

/// Открыть board-карты и перейти на новую фазу.
fn deal_board_cards(
    table: &mut Table,
    engine: &mut HandEngine,
    count: usize,
    phase: Phase,
) -> Result<(), EngineError> {
    let mut new_cards = Vec::with_capacity(count);
    for _ in 0..count {
        let card = engine.deck.draw_one().ok_or(EngineError::DeckExhausted)?;
        table.board.push(card);
        new_cards.push(card);
    }

    table.phase = phase;
    engine.history.push(HandEventKind::BoardDealt {
        phase,
        cards: new_cards,
    });
    engine.history.push(HandEventKind::PhaseChanged { phase });

    Ok(())
}

/// Сбросить ставки улицы у игроков (суммарные вклады сохраняются).
fn reset_street_bets(table: &mut Table) {
    for seat_opt in table.seats.iter_mut() {
        if let Some(p) = seat_opt {
            p.current_bet = Chips::ZERO;
        }
    }
}

/// Настроить BettingState и очередь для новой улицы.
/// На постфлопе первым ходит первый активный строго после кнопки.
fn open_betting_round(table: &mut Table, engine: &mut HandEngine, phase: Phase) {
    let dealer = table.dealer_button.unwrap_or(0);

    let mut to_act = Vec::new();
    if let Some(first) = first_active_after(table, dealer) {
        let order = collect_dealable_seats_from(table, first);
        for seat in order {
            if let Some(p) = table.seats[seat as usize].as_ref() {
                if p.can_act() {
                    to_act.push(seat);
                }
            }
        }
    }

    engine.betting = BettingState::new(
        phase,
        Chips::ZERO,
        table.config.stakes.big_blind,
        to_act,
    );
    engine.current_actor = engine.betting.to_act.first().copied();
}

/// Завершение раздачи без шоудауна (остался один непосфолдивший).
fn finish_hand_without_showdown(table: &mut Table, engine: &mut HandEngine) -> HandSummary {
    let phase_reached = table.phase;

    let winner_seat = table
        .seats
        .iter()
        .enumerate()
        .find_map(|(idx, s)| {
            s.as_ref()
                .filter(|p| p.is_in_hand())
                .map(|_| idx as SeatIndex)
        })
        .expect("должен быть хотя бы один игрок в раздаче");

    engine.pots = compute_pots(&table.seats);
    let total_pot = table.total_pot;

    if let Some(winner) = table.seats[winner_seat as usize].as_mut() {
        winner.stack += total_pot;
        engine.history.push(HandEventKind::PotAwarded {
            pot_index: 0,
            seat: winner_seat,
            player_id: winner.player_id,
            amount: total_pot,
        });
        info!(
            "table {}: hand #{} won by seat {} without showdown ({} chips)",
            table.id, engine.hand_id, winner_seat, total_pot.0
        );
    }

    let mut won_by_seat: HashMap<SeatIndex, Chips> = HashMap::new();
    won_by_seat.insert(winner_seat, total_pot);
    let results = build_results(table, &won_by_seat, &HashMap::new());

    conclude_hand(table, engine);

    HandSummary {
        hand_id: engine.hand_id,
        table_id: engine.table_id,
        phase_reached,
        board: table.board.clone(),
        total_pot,
        results,
    }
}

/// Завершение раздачи со вскрытием и раздачей банков по потам.
fn finish_hand_with_showdown(
    table: &mut Table,
    engine: &mut HandEngine,
) -> Result<HandSummary, EngineError> {
    table.phase = Phase::Showdown;
    engine
        .history
        .push(HandEventKind::PhaseChanged { phase: Phase::Showdown });

    engine.pots = compute_pots(&table.seats);
    let total_pot = total_of(&engine.pots);

    // Оцениваем руку каждого претендента один раз.
    let mut ranks: HashMap<SeatIndex, HandRank> = HashMap::new();
    for (idx, seat_opt) in table.seats.iter().enumerate() {
        if let Some(p) = seat_opt {
            if p.is_in_hand() {
                let rank = crate::eval::evaluate_best_hand(
                    &p.hole_cards,
                    &table.board,
                    table.config.ruleset,
                );
                ranks.insert(idx as SeatIndex, rank);
                engine.history.push(HandEventKind::ShowdownReveal {
                    seat: idx as SeatIndex,
                    player_id: p.player_id,
                    hole_cards: p.hole_cards.clone(),
                    rank_value: rank.0,
                });
            }
        }
    }

    // Каждый банк разыгрывается независимо среди своих претендентов.
    let dealer = table.dealer_button.unwrap_or(0);
    let mut won_by_seat: HashMap<SeatIndex, Chips> = HashMap::new();

    let pots = engine.pots.clone();
    for (pot_index, pot) in pots.iter().enumerate() {
        if pot.amount.is_zero() {
            continue;
        }

        let best = pot
            .eligible_seats
            .iter()
            .filter_map(|s| ranks.get(s))
            .max()
            .copied();
        let best = match best {
            Some(r) => r,
            None => continue, // банк без претендентов (все сфолдили) не бывает при count_in_hand >= 1
        };

        let winners: Vec<SeatIndex> = pot
            .eligible_seats
            .iter()
            .copied()
            .filter(|s| ranks.get(s) == Some(&best))
            .collect();

        let share = Chips(pot.amount.0 / winners.len() as i64);
        let remainder = pot.amount.0 % winners.len() as i64;

        // Сплит: остаток по одной фишке в порядке мест после кнопки.
        let ordered = order_winners_after_button(table, dealer, &winners);
        for (i, seat) in ordered.into_iter().enumerate() {
            let mut prize = share;
            match table.config.odd_chip_rule {
                OddChipRule::FirstAfterButton => {
                    if (i as i64) < remainder {
                        prize += Chips(1);
                    }
                }
            }
            if prize.is_zero() {
                continue;
            }
            if let Some(p) = table.seats[seat as usize].as_mut() {
                p.stack += prize;
                *won_by_seat.entry(seat).or_insert(Chips::ZERO) += prize;
                engine.history.push(HandEventKind::PotAwarded {
                    pot_index,
                    seat,
                    player_id: p.player_id,
                    amount: prize,
                });
            }
        }
    }

    info!(
        "table {}: hand #{} showdown, {} pot(s), total {}",
        table.id,
        engine.hand_id,
        pots.len(),
        total_pot.0
    );

    let results = build_results(table, &won_by_seat, &ranks);

    conclude_hand(table, engine);

    Ok(HandSummary {
        hand_id: engine.hand_id,
        table_id: engine.table_id,
        phase_reached: Phase::Showdown,
        board: table.board.clone(),
        total_pot,
        results,
    })
}

/// Претендовавшие на банк места в порядке после кнопки.
fn order_winners_after_button(
    table: &Table,
    dealer: SeatIndex,
    winners: &[SeatIndex],
) -> Vec<SeatIndex> {
    let max = table.max_seats() as usize;
    let mut ordered = Vec::with_capacity(winners.len());
    for i in 1..=max {
        let seat = ((dealer as usize + i) % max) as SeatIndex;
        if winners.contains(&seat) {
            ordered.push(seat);
        }
    }
    ordered
}

/// Итоги по каждому участнику раздачи: чистый результат = выигрыш - вклад.
fn build_results(
    table: &Table,
    won_by_seat: &HashMap<SeatIndex, Chips>,
    ranks: &HashMap<SeatIndex, HandRank>,
) -> Vec<PlayerHandResult> {
    let mut results = Vec::new();

    for (idx, seat_opt) in table.seats.iter().enumerate() {
        if let Some(p) = seat_opt {
            let seat = idx as SeatIndex;
            let participated = p.is_in_hand()
                || matches!(p.status, PlayerStatus::Folded)
                || p.hand_bet.0 > 0;
            if !participated {
                continue;
            }

            let won = won_by_seat.get(&seat).copied().unwrap_or(Chips::ZERO);
            results.push(PlayerHandResult {
                player_id: p.player_id,
                rank: ranks.get(&seat).copied(),
                net_chips: Chips(won.0 - p.hand_bet.0),
                is_winner: won.0 > 0,
            });
        }
    }

    results.sort_by_key(|r| r.player_id);
    results
}

/// Общий хвост завершения раздачи: фаза, вылеты, обнуление банка.
fn conclude_hand(table: &mut Table, engine: &mut HandEngine) {
    table.phase = Phase::HandComplete;
    engine.history.push(HandEventKind::PhaseChanged {
        phase: Phase::HandComplete,
    });
    engine.history.push(HandEventKind::HandFinished {
        hand_id: engine.hand_id,
        table_id: engine.table_id,
    });

    update_busted_statuses_after_hand(table);
    table.total_pot = Chips::ZERO;
    engine.current_actor = None;
}

/// Прервать раздачу после фатальной ошибки (исчерпание колоды):
/// вклады возвращаются игрокам, банки не искажаются.
pub fn abort_hand(table: &mut Table, engine: &mut HandEngine, reason: &str) {
    for seat_opt in table.seats.iter_mut() {
        if let Some(p) = seat_opt {
            p.stack += p.hand_bet;
            p.hand_bet = Chips::ZERO;
            p.current_bet = Chips::ZERO;
            p.hole_cards.clear();
        }
    }

    table.board.clear();
    table.total_pot = Chips::ZERO;
    table.phase = Phase::Waiting;

    engine.pots.clear();
    engine.current_actor = None;
    engine.history.push(HandEventKind::HandAborted {
        hand_id: engine.hand_id,
        reason: reason.to_string(),
    });

    info!(
        "table {}: hand #{} aborted ({reason}), contributions refunded",
        table.id, engine.hand_id
    );
}

/// Пометить игроков как Busted, если после раздачи у них стек <= 0.
///
/// В continuous-режиме (allow_negative_chips) проверка не выполняется:
/// игрок с минусовым стеком продолжает играть.
fn update_busted_statuses_after_hand(table: &mut Table) {
    if table.config.allow_negative_chips {
        return;
    }

    for seat_opt in table.seats.iter_mut() {
        if let Some(p) = seat_opt {
            if p.stack.0 <= 0 && !matches!(p.status, PlayerStatus::Busted | PlayerStatus::SittingOut)
            {
                p.status = PlayerStatus::Busted;
            }
        }
    }
}
