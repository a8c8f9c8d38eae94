mod logger;
pub use logger::*;

mod span;
pub use span::tag_span;
