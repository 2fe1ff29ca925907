//! Application layer - Use cases over collections of tagged records

pub mod hashtaggable;
pub mod tag_counts;
pub mod tagged_with;

pub use hashtaggable::Hashtaggable;
pub use tag_counts::{TagCount, TagCountOptions, TagCountOrder, TagCountsService};
pub use tagged_with::TaggedWithService;
