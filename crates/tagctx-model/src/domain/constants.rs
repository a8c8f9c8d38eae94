//! Limits shared by key and value validation.

/// Maximum length, in bytes, of a tag key name, and the default value length limit.
///
/// Key names are always bound by it. Values are bound by [`crate::TagRules::max_value_len`],
/// which defaults to this limit and may be raised or lowered.
pub const MAX_TAG_LEN: usize = 255;
