#![allow(dead_code)]

use simple_hashtag::application::Hashtaggable;
use simple_hashtag::{Config, Delimiter, TagList};
use std::sync::Arc;

pub fn default_config() -> Arc<Config> {
    Arc::new(Config::default())
}

pub fn config_with_delimiter(delimiter: Delimiter) -> Arc<Config> {
    Arc::new(Config::new(delimiter).unwrap())
}

pub fn tag_list(values: &[&str]) -> TagList {
    TagList::from_values(default_config(), values.iter().copied())
}

/// A host record with a body field, the usual shape of a tagged record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: u32,
    pub body: String,
}

impl Post {
    pub fn new(id: u32, body: &str) -> Self {
        Post {
            id,
            body: body.to_string(),
        }
    }
}

impl Hashtaggable for Post {
    fn hashtaggable_content(&self) -> &str {
        &self.body
    }
}
