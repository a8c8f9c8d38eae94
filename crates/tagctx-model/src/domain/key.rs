use std::{fmt, str::FromStr, sync::Arc};

use serde::{Deserialize, Serialize};

use crate::domain::rules::check_key_name;
use crate::error::{TagError, TagResult};

/// Identifier of a tag.
///
/// Keys are compared, hashed and ordered by name. Cloning is cheap: the name is shared.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String")]
#[serde(into = "String")]
pub struct Key(Arc<str>);

impl Key {
    /// Creates a key after validating its name.
    ///
    /// # Examples
    /// ```
    /// use tagctx_model::Key;
    ///
    /// let key = Key::new("region").unwrap();
    /// assert_eq!(key.name(), "region");
    /// assert!(Key::new("").is_err());
    /// ```
    pub fn new(name: impl Into<String>) -> TagResult<Self> {
        Self::try_from(name.into())
    }

    /// Display name of the key.
    #[inline]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Key {
    type Error = TagError;
    fn try_from(name: String) -> Result<Self, Self::Error> {
        if check_key_name(&name) {
            Ok(Key(Arc::from(name)))
        } else {
            Err(TagError::InvalidKeyName(name))
        }
    }
}

impl FromStr for Key {
    type Err = TagError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.to_owned())
    }
}

impl From<Key> for String {
    fn from(k: Key) -> Self {
        k.0.to_string()
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_keeps_name() {
        let key = Key::new("zone").unwrap();
        assert_eq!(key.name(), "zone");
        assert_eq!(key.to_string(), "zone");
    }

    #[test]
    fn rejects_invalid_names() {
        for name in ["", "new\nline", "caf\u{e9}"] {
            let err = Key::new(name).unwrap_err();
            assert_eq!(err, TagError::InvalidKeyName(name.to_string()));
        }
    }

    #[test]
    fn clones_are_equal_and_share_name() {
        let a = Key::new("zone").unwrap();
        let b = a.clone();
        let c: Key = "zone".parse().unwrap();

        assert_eq!(a, b);
        assert_eq!(a, c);
        assert_ne!(a, Key::new("region").unwrap());
    }

    #[test]
    fn orders_by_name() {
        let mut keys: Vec<Key> = ["zone", "app", "region"]
            .into_iter()
            .map(|n| Key::new(n).unwrap())
            .collect();
        keys.sort();

        let names: Vec<_> = keys.iter().map(Key::name).collect();
        assert_eq!(names, ["app", "region", "zone"]);
    }

    #[test]
    fn serde_roundtrip_as_plain_string() {
        let key = Key::new("http.method").unwrap();
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, r#""http.method""#);

        let back: Key = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
    }

    #[test]
    fn serde_rejects_invalid_name() {
        assert!(serde_json::from_str::<Key>(r#""""#).is_err());
    }
}
