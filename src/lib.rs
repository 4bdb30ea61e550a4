//! Движок многопользовательского Texas Hold'em.
//!
//! Ядро: машина ставок по улицам, главный/сайд-поты, оценка рук
//! (обычная колода и short-deck), турнирный цикл с эскалацией блайндов.
//!
//! Транспорт (HTTP и т.п.), ИИ-клиенты и оркестрация процессов —
//! снаружи. Движок чисто реактивный: он не двигает состояние, пока
//! хост не применит действие игрока (таймауты — забота хоста,
//! принудительный fold/check подаётся как обычное действие).

pub mod api;
pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;
pub mod tournament;
