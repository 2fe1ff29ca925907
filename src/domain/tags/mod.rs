//! Tag system

pub mod extract;
pub mod list;
pub mod normalize;
pub mod parser;
pub mod query;

// Re-export main types
pub use extract::{extract_hashtags, extract_hashtags_from_markdown};
pub use list::{AddOptions, TagList, TagValue};
pub use normalize::{parameterize, Normalizer};
pub use parser::{parse, TagListParser};
pub use query::{MatchMode, TaggedWith};
