//! Турнирный слой: эскалация блайндов по числу раздач,
//! вылет игроков, определение победителя.

pub mod controller;

pub use controller::{
    HandOutcome, PlayerStanding, TournamentController, TournamentError, TournamentStatus,
};
