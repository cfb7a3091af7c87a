//! Инфраструктурный слой вокруг движка:
//! - RNG-реализации для engine (боевая и детерминированная).

pub mod rng;

pub use rng::*;
