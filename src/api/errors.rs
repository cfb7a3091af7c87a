use serde::{Deserialize, Serialize};

use crate::engine::EngineError;

/// Ошибки внешнего API (то, что отдаём фронту / клиенту).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Команда отклонена движком; строка — причина для игрока.
    /// Состояние при этом не изменилось.
    EngineError(String),
}

impl ApiError {
    /// Причина отказа в человеческом виде.
    pub fn reason(&self) -> &str {
        match self {
            ApiError::EngineError(reason) => reason,
        }
    }
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        ApiError::EngineError(err.to_string())
    }
}
