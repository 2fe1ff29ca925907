//! Domain layer - Tag parsing, normalization and matching

pub mod config;
pub mod delimiter;
pub mod tags;

pub use config::Config;
pub use delimiter::Delimiter;
pub use tags::TagList;
