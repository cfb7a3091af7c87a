//! Ядро настольных игр казино: блэкджек и рулетка на общем кошельке.
//!
//! Слои:
//! - `domain` — данные: карты, фишки, руки, колесо, ставки, столы;
//! - `engine` — переходы состояния и валидация, `CasinoSession`;
//! - `api` — команды, запросы и DTO-снапшоты для фронта;
//! - `infra` — реализации RNG поверх `rand`.
//!
//! Рендеринг, события и навигация страниц остаются снаружи: крейт
//! принимает команды и отдаёт снапшоты, а чем их рисовать — дело клиента.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;

pub use api::{answer_query, execute_command, ApiError, Command, CommandResponse, Query, QueryResponse};
pub use engine::{CasinoSession, EngineError, RandomSource, RoundStatus};
