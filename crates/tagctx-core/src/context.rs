//! Explicit carrier for the tag map in scope of a request.
//!
//! A [`TagContext`] is passed down the call chain by the caller. Code that wants to add
//! dimensions derives a new map from the one in scope and attaches it to a new context;
//! the context it was handed stays as it was.
use std::{fmt, sync::Arc};

use tagctx_model::{Mutator, TagMap, TagResult, TagRules};
use tracing::{debug, trace, warn};

/// Request-scoped context holding the current [`TagMap`], if any.
///
/// Cloning is cheap: the map is shared and never modified after it is attached.
#[derive(Clone, Default)]
pub struct TagContext {
    tags: Option<Arc<TagMap>>,
    rules: TagRules,
}

impl TagContext {
    /// Create a context with no map in scope and default validation rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the map in scope.
    pub fn tag_map(&self) -> Option<&TagMap> {
        self.tags.as_deref()
    }

    /// Get the rules used to validate values during derivation.
    pub fn rules(&self) -> &TagRules {
        &self.rules
    }

    /// Attach `map` and return the updated context.
    pub fn with_tag_map(mut self, map: TagMap) -> Self {
        self.tags = Some(Arc::new(map));
        self
    }

    /// Replace the validation rules and return the updated context.
    pub fn with_rules(mut self, rules: TagRules) -> Self {
        self.rules = rules;
        self
    }

    /// Derive a new map from the one in scope.
    ///
    /// Starts from an empty map when nothing is in scope. See [`TagMap::derive`].
    pub fn derive<I>(&self, mutators: I) -> TagResult<TagMap>
    where
        I: IntoIterator<Item = Mutator>,
    {
        let mut applied = 0usize;
        let mutators = mutators.into_iter().inspect(|m| {
            applied += 1;
            trace!(op = m.kind(), key = %m.key(), "applying tag mutator");
        });

        match TagMap::derive_with(&self.rules, self.tag_map(), mutators) {
            Ok(map) => {
                debug!(mutators = applied, tags = %map, "derived tag map");
                Ok(map)
            }
            Err(e) => {
                warn!(error = %e, position = applied, "tag map derivation rejected");
                Err(e)
            }
        }
    }

    /// Derive a new map from the one in scope and return a context carrying it.
    ///
    /// # Examples
    /// ```
    /// use tagctx_core::prelude::*;
    ///
    /// let region = Key::new("region").unwrap();
    /// let zone = Key::new("zone").unwrap();
    ///
    /// let root = TagContext::new()
    ///     .new_context([Mutator::upsert(region.clone(), "us")])
    ///     .unwrap();
    /// let child = root
    ///     .new_context([Mutator::upsert(zone, "a"), Mutator::delete(region.clone())])
    ///     .unwrap();
    ///
    /// assert_eq!(child.to_string(), "TagContext(tags={ {zone a} })");
    /// assert_eq!(root.tag_map().and_then(|m| m.get(&region)), Some("us"));
    /// ```
    pub fn new_context<I>(&self, mutators: I) -> TagResult<TagContext>
    where
        I: IntoIterator<Item = Mutator>,
    {
        let map = self.derive(mutators)?;
        Ok(self.clone().with_tag_map(map))
    }
}

impl From<TagMap> for TagContext {
    fn from(map: TagMap) -> Self {
        Self::new().with_tag_map(map)
    }
}

impl fmt::Debug for TagContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TagContext")
            .field("tags_len", &self.tags.as_ref().map_or(0, |m| m.len()))
            .field("rules", &self.rules)
            .finish()
    }
}

impl fmt::Display for TagContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.tag_map() {
            Some(map) => write!(f, "TagContext(tags={map})"),
            None => f.write_str("TagContext(tags=none)"),
        }
    }
}
