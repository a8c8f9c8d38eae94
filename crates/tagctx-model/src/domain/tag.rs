use serde::{Deserialize, Serialize};

use crate::Key;

/// Key–value pair used to dimension telemetry data.
///
/// The value is not validated here; validation happens when a value enters a [`crate::TagMap`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    key: Key,
    value: String,
}

impl Tag {
    /// Create a new tag.
    pub fn new(key: Key, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }

    /// Get the key.
    pub fn key(&self) -> &Key {
        &self.key
    }

    /// Get the value.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl From<(Key, String)> for Tag {
    fn from((key, value): (Key, String)) -> Self {
        Self { key, value }
    }
}

impl From<(&Key, &str)> for Tag {
    fn from((key, value): (&Key, &str)) -> Self {
        Self {
            key: key.clone(),
            value: value.to_string(),
        }
    }
}
