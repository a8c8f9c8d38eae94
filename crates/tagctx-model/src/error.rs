use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TagError {
    #[error("invalid value for tag '{key}': {value:?}")]
    InvalidValue { key: String, value: String },

    #[error("invalid tag key name: {0:?}")]
    InvalidKeyName(String),
}

pub type TagResult<T> = Result<T, TagError>;
