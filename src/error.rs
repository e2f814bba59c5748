use thiserror::Error;

/// Errors raised by the board's control surface and configuration loading
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Unknown brush type: {0}")]
    UnknownBrush(String),

    #[error("Unknown color: {0}")]
    UnknownColor(String),

    #[error("Brush size {0} is outside 1..=15")]
    InvalidSize(u32),

    #[error("Failed to read config file: {0}")]
    ConfigRead(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

/// Result type for board operations
pub type BoardResult<T> = Result<T, BoardError>;
