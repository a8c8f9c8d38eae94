mod constants;
pub use constants::MAX_TAG_LEN;

mod rules;
pub use rules::{TagRules, check_key_name, check_value};

mod key;
pub use key::Key;

mod tag;
pub use tag::Tag;

mod map;
pub use map::TagMap;

mod mutator;
pub use mutator::Mutator;
