mod domain;
pub use domain::MAX_TAG_LEN;
pub use domain::{Key, Mutator, Tag, TagMap, TagRules, check_key_name, check_value};

mod error;
pub use error::{TagError, TagResult};
