//! Инфраструктурный слой вокруг движка:
//! - RNG-реализации для клиентов игроков;
//! - seed-деривация ключей;
//! - абстракция хранения столов (off-chain / тесты);
//! - порт внешнего эскроу.

pub mod escrow;
pub mod persistence;
pub mod rng;
pub mod rng_seed;

pub use escrow::*;
pub use persistence::*;
pub use rng::*;
pub use rng_seed::RngSeed;
