use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use crate::domain::rules::is_printable;
use crate::domain::{Key, Mutator, Tag, TagRules};
use crate::error::{TagError, TagResult};

/// Set of tags with at most one value per key.
///
/// A map is never edited in place. New maps are produced by [`TagMap::derive`], which copies an
/// ancestor and applies [`Mutator`]s to the copy.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "BTreeMap<String, String>")]
pub struct TagMap {
    m: HashMap<Key, String>,
}

impl TagMap {
    fn with_capacity(size_hint: usize) -> Self {
        Self {
            m: HashMap::with_capacity(size_hint),
        }
    }

    /// Derive a new map from `ancestor` using the default [`TagRules`].
    ///
    /// Entries of `ancestor` are copied first, then `mutators` are applied in order.
    /// The first rejected value aborts the whole derivation and no map is returned.
    /// `ancestor` itself is never modified.
    ///
    /// # Examples
    /// ```
    /// use tagctx_model::{Key, Mutator, TagMap};
    ///
    /// let region = Key::new("region").unwrap();
    /// let zone = Key::new("zone").unwrap();
    ///
    /// let base = TagMap::derive(None, [Mutator::insert(region.clone(), "us")]).unwrap();
    /// let next = TagMap::derive(
    ///     Some(&base),
    ///     [Mutator::upsert(zone.clone(), "a"), Mutator::delete(region.clone())],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(next.get(&zone), Some("a"));
    /// assert_eq!(next.get(&region), None);
    /// assert_eq!(next.to_string(), "{ {zone a} }");
    /// assert_eq!(base.get(&region), Some("us"));
    /// ```
    pub fn derive<I>(ancestor: Option<&TagMap>, mutators: I) -> TagResult<TagMap>
    where
        I: IntoIterator<Item = Mutator>,
    {
        Self::derive_with(&TagRules::default(), ancestor, mutators)
    }

    /// Same as [`TagMap::derive`], validating values against `rules`.
    pub fn derive_with<I>(
        rules: &TagRules,
        ancestor: Option<&TagMap>,
        mutators: I,
    ) -> TagResult<TagMap>
    where
        I: IntoIterator<Item = Mutator>,
    {
        let mut out = TagMap::with_capacity(ancestor.map_or(0, TagMap::len));
        if let Some(orig) = ancestor {
            for (k, v) in &orig.m {
                out.insert(k.clone(), v.clone());
            }
        }
        for mutator in mutators {
            mutator.apply(&mut out, rules)?;
        }
        Ok(out)
    }

    /// Get the value for a key, if present.
    pub fn get(&self, key: &Key) -> Option<&str> {
        self.m.get(key).map(String::as_str)
    }

    /// Returns `true` if a value is stored for `key`.
    pub fn contains(&self, key: &Key) -> bool {
        self.m.contains_key(key)
    }

    /// Number of tags in the map.
    pub fn len(&self) -> usize {
        self.m.len()
    }

    /// Returns `true` if the map holds no tags.
    pub fn is_empty(&self) -> bool {
        self.m.is_empty()
    }

    /// Iterate over all tags ordered by key name.
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &str)> {
        let mut entries: Vec<_> = self.m.iter().map(|(k, v)| (k, v.as_str())).collect();
        entries.sort_unstable_by(|a, b| a.0.name().cmp(b.0.name()));
        entries.into_iter()
    }

    /// Collect all tags ordered by key name.
    pub fn tags(&self) -> Vec<Tag> {
        self.iter().map(Tag::from).collect()
    }

    pub(crate) fn insert(&mut self, k: Key, v: String) {
        self.m.entry(k).or_insert(v);
    }

    pub(crate) fn update(&mut self, k: Key, v: String) {
        if let Some(slot) = self.m.get_mut(&k) {
            *slot = v;
        }
    }

    pub(crate) fn upsert(&mut self, k: Key, v: String) {
        self.m.insert(k, v);
    }

    pub(crate) fn delete(&mut self, k: &Key) {
        self.m.remove(k);
    }
}

/// Renders `{ {name1 value1}{name2 value2} }`, ordered by key name.
impl fmt::Display for TagMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{ ")?;
        for (k, v) in self.iter() {
            write!(f, "{{{k} {v}}}")?;
        }
        f.write_str(" }")
    }
}

impl Serialize for TagMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.iter())
    }
}

/// Accepts any valid key name and printable ASCII value. Length and emptiness limits belong
/// to the [`TagRules`] used at derivation time, so maps built with custom rules read back intact.
impl TryFrom<BTreeMap<String, String>> for TagMap {
    type Error = TagError;
    fn try_from(raw: BTreeMap<String, String>) -> Result<Self, Self::Error> {
        let mut out = TagMap::with_capacity(raw.len());
        for (name, value) in raw {
            let key = Key::try_from(name)?;
            if !is_printable(&value) {
                return Err(TagError::InvalidValue {
                    key: key.name().to_string(),
                    value,
                });
            }
            out.upsert(key, value);
        }
        Ok(out)
    }
}
