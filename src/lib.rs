//! simple_hashtag - Hashtag extraction and tag list handling
//!
//! Finds `#hashtags` in free text and turns delimited tag strings into
//! canonical, deduplicated tag lists (and back).

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use domain::tags::{parse, TagListParser, TagValue};
pub use domain::{Config, Delimiter, TagList};
pub use error::HashtagError;
