//! Игровой движок: блэкджек и рулетка поверх общего кошелька.
//!
//! Высокоуровневый объект: `CasinoSession`
//! Основные операции:
//!   - `blackjack::start_round` / `blackjack::apply_action` – раунд блэкджека
//!   - `roulette::place_bet` / `roulette::spin` – ставка и вращение колеса
//!   - `session::CasinoSession` – обёртка над обоими столами и кошельком

pub mod actions;
pub mod blackjack;
pub mod errors;
pub mod roulette;
pub mod session;
pub mod validation;

pub use actions::BlackjackAction;
pub use blackjack::{apply_action, start_round, RoundStatus, DEALER_STANDS_AT};
pub use errors::EngineError;
pub use roulette::{resolve_bet, spin, SpinReport};
pub use session::CasinoSession;

/// RNG интерфейс для engine.
/// Реализации живут в infra (обёртки над `rand`).
pub trait RandomSource {
    /// Равномерно перемешать срез (колоду).
    fn shuffle<T>(&mut self, slice: &mut [T]);

    /// Равномерный индекс в диапазоне `[0, len)`. `len` должен быть > 0.
    fn pick_index(&mut self, len: usize) -> usize;
}
