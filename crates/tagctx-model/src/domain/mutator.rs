use serde::{Deserialize, Serialize};

use crate::domain::{Key, TagMap, TagRules};
use crate::error::{TagError, TagResult};

/// Single edit applied while deriving a [`TagMap`].
///
/// Presence conflicts are silent: `Insert` on an existing key and `Update` on a missing key
/// leave the map unchanged. Only a rejected value fails.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Mutator {
    /// Set the value only if the key is absent.
    Insert { key: Key, value: String },
    /// Replace the value only if the key is present.
    Update { key: Key, value: String },
    /// Set the value unconditionally.
    Upsert { key: Key, value: String },
    /// Remove the key if present.
    Delete { key: Key },
}

impl Mutator {
    /// Mutator that sets `key` only if it is absent.
    pub fn insert(key: Key, value: impl Into<String>) -> Self {
        Mutator::Insert {
            key,
            value: value.into(),
        }
    }

    /// Mutator that replaces the value of `key` only if it is present.
    pub fn update(key: Key, value: impl Into<String>) -> Self {
        Mutator::Update {
            key,
            value: value.into(),
        }
    }

    /// Mutator that sets `key` unconditionally.
    pub fn upsert(key: Key, value: impl Into<String>) -> Self {
        Mutator::Upsert {
            key,
            value: value.into(),
        }
    }

    /// Mutator that removes `key`.
    pub fn delete(key: Key) -> Self {
        Mutator::Delete { key }
    }

    /// Key targeted by this mutator.
    pub fn key(&self) -> &Key {
        match self {
            Mutator::Insert { key, .. }
            | Mutator::Update { key, .. }
            | Mutator::Upsert { key, .. }
            | Mutator::Delete { key } => key,
        }
    }

    /// Returns the operation as a static string.
    pub fn kind(&self) -> &'static str {
        match self {
            Mutator::Insert { .. } => "insert",
            Mutator::Update { .. } => "update",
            Mutator::Upsert { .. } => "upsert",
            Mutator::Delete { .. } => "delete",
        }
    }

    /// Validate and apply the edit. On error `map` is left untouched.
    pub(crate) fn apply(self, map: &mut TagMap, rules: &TagRules) -> TagResult<()> {
        match self {
            Mutator::Insert { key, value } => {
                validate(rules, &key, &value)?;
                map.insert(key, value);
            }
            Mutator::Update { key, value } => {
                validate(rules, &key, &value)?;
                map.update(key, value);
            }
            Mutator::Upsert { key, value } => {
                validate(rules, &key, &value)?;
                map.upsert(key, value);
            }
            Mutator::Delete { key } => map.delete(&key),
        }
        Ok(())
    }
}

fn validate(rules: &TagRules, key: &Key, value: &str) -> TagResult<()> {
    if rules.check(value) {
        Ok(())
    } else {
        Err(TagError::InvalidValue {
            key: key.name().to_string(),
            value: value.to_string(),
        })
    }
}
