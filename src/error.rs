use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid type: {0}")]
    InvalidType(String),

    #[error("unknown key: {0}")]
    UnknownKey(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("market data fetch failed: {0}")]
    Fetch(String),
}
