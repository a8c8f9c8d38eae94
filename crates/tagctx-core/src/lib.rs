pub mod context;

pub mod prelude {
    pub use crate::context::TagContext;
    pub use tagctx_model::{Key, Mutator, TagError, TagMap, TagRules};
}
