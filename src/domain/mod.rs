//! Доменная модель казино: карты, фишки, руки, кошелёк, колесо, ставки.

pub mod bet;
pub mod card;
pub mod chips;
pub mod deck;
pub mod hand;
pub mod table;
pub mod wallet;
pub mod wheel;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use bet::*;
pub use card::*;
pub use chips::*;
pub use deck::*;
pub use hand::*;
pub use table::*;
pub use wallet::*;
pub use wheel::*;
