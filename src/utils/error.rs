use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Gateway request failed: {0}")]
    GatewayError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Document parse error: {0}")]
    DocumentError(#[from] serde_json::Error),

    #[error("Report write error: {0}")]
    ReportError(#[from] csv::Error),

    #[error("No POS location mapping for store '{store_id}'")]
    UnknownStore { store_id: String },

    #[error("Gateway returned status {status} from {endpoint}")]
    GatewayRejected { endpoint: String, status: u16 },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid config value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, SyncError>;
