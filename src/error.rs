/**
* filename : error
* author : HAMA
* date: 2025. 5. 8.
* description:
**/

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResearchError {
    #[error("Insufficient data: need at least {required} valid bars, got {available}")]
    InsufficientData { required: usize, available: usize },

    #[error("No candidates available for selection")]
    NoCandidates,

    #[error("Malformed row: {0}")]
    MalformedRow(String),

    #[error("Invalid date key: {0}")]
    InvalidDate(String),

    #[error("Unexpected payload: {0}")]
    UnexpectedPayload(String),

    #[error("Provider message: {0}")]
    ProviderMessage(String),

    #[error("Instrument not found: {0}")]
    InstrumentNotFound(String),

    #[error("Catalog fetch failed: {0}")]
    CatalogFetch(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl ResearchError {
    /// 데이터 부족 여부 (신규 상장 종목에서는 정상적인 상황)
    pub fn is_short_history(&self) -> bool {
        matches!(self, ResearchError::InsufficientData { .. })
    }
}
