use serde::{Deserialize, Serialize};

use crate::domain::constants::MAX_TAG_LEN;

/// Validation rules applied to tag values by every value-carrying [`crate::Mutator`].
///
/// Values must always be printable ASCII. Length and emptiness are configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TagRules {
    /// Maximum value length in bytes.
    pub max_value_len: usize,
    /// Whether `""` is an acceptable value.
    pub allow_empty_values: bool,
}

impl Default for TagRules {
    fn default() -> Self {
        Self {
            max_value_len: MAX_TAG_LEN,
            allow_empty_values: false,
        }
    }
}

impl TagRules {
    /// Returns `true` if `value` may be stored in a tag map under these rules.
    pub fn check(&self, value: &str) -> bool {
        if value.is_empty() {
            return self.allow_empty_values;
        }
        value.len() <= self.max_value_len && is_printable(value)
    }
}

/// Returns `true` if `value` passes the default [`TagRules`].
pub fn check_value(value: &str) -> bool {
    TagRules::default().check(value)
}

/// Returns `true` if `name` is usable as a tag key name.
///
/// A key name is non-empty, at most [`MAX_TAG_LEN`] bytes and printable ASCII.
pub fn check_key_name(name: &str) -> bool {
    !name.is_empty() && name.len() <= MAX_TAG_LEN && is_printable(name)
}

pub(crate) fn is_printable(s: &str) -> bool {
    s.bytes().all(|b| (0x20..=0x7e).contains(&b))
}
