use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReliquaryError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

    #[error("Malformed '{kind}' record: {message}")]
    MalformedRecord { kind: String, message: String },
}

impl ReliquaryError {
    /// 給使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            ReliquaryError::IoError(e) => format!("Could not read or write a file: {}", e),
            ReliquaryError::SerializationError(e) => {
                format!("Input is not valid query JSON: {}", e)
            }
            ReliquaryError::ConfigError { .. }
            | ReliquaryError::ConfigValidationError { .. }
            | ReliquaryError::InvalidConfigValueError { .. }
            | ReliquaryError::MissingConfigError { .. } => {
                format!("Configuration problem: {}", self)
            }
            ReliquaryError::ProcessingError { message } => {
                format!("Could not process query results: {}", message)
            }
            ReliquaryError::MalformedRecord { kind, message } => format!(
                "A '{}' record could not be read ({}). Set [classify] on_malformed = \"skip\" to drop such records.",
                kind, message
            ),
        }
    }

    /// 依錯誤類別決定退出碼
    pub fn exit_code(&self) -> i32 {
        match self {
            ReliquaryError::ConfigError { .. }
            | ReliquaryError::ConfigValidationError { .. }
            | ReliquaryError::InvalidConfigValueError { .. }
            | ReliquaryError::MissingConfigError { .. } => 2,
            ReliquaryError::IoError(_) => 3,
            ReliquaryError::SerializationError(_)
            | ReliquaryError::ProcessingError { .. }
            | ReliquaryError::MalformedRecord { .. } => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, ReliquaryError>;
