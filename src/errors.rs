// src/errors.rs

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BubbleChatError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    #[error("Logging error: {0}")]
    Logging(#[from] flexi_logger::FlexiLoggerError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl BubbleChatError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        BubbleChatError::Config(msg.into())
    }
}

pub type BubbleChatResult<T> = Result<T, BubbleChatError>;
