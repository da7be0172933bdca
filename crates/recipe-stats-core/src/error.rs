#[derive(Debug, Clone, thiserror::Error, Eq, PartialEq)]
pub enum StatsError {
    #[error("begin hour not found at {0:?}")]
    BeginHourNotFound(String),
    #[error("end hour not found at {0:?}")]
    EndHourNotFound(String),
    #[error("invalid hour: {0}")]
    InvalidHour(String),
    #[error("validation error: {0}")]
    Validation(String),
    #[error("serialization error: {0}")]
    Serialization(String),
}
