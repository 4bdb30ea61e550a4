//! Инфраструктурный слой вокруг покерного движка:
//! - генерация ID;
//! - RNG-реализации для движка;
//! - снапшоты раздач и абстракция хранения (резюмирование/тесты).

pub mod ids;
pub mod persistence;
pub mod rng;

pub use ids::*;
pub use persistence::*;
pub use rng::*;
