use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Configuration error: {field} is empty")]
    Empty { field: String },

    #[error("Configuration error: {field} = {value} ({reason})")]
    Invalid {
        field: String,
        value: String,
        reason: String,
    },
}

pub type ConfigResult<T> = Result<T, ConfigError>;
