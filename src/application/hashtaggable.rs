//! Host records that carry hashtags in their content

use crate::domain::tags::{extract_hashtags, extract_hashtags_from_markdown, TagList};
use crate::domain::Config;
use std::sync::Arc;

/// A record whose text content is scanned for `#hashtags`.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use simple_hashtag::application::Hashtaggable;
/// use simple_hashtag::domain::Config;
///
/// struct Post {
///     body: String,
/// }
///
/// impl Hashtaggable for Post {
///     fn hashtaggable_content(&self) -> &str {
///         &self.body
///     }
/// }
///
/// let post = Post { body: "Launch day #release #Rust #release".to_string() };
/// let tags = post.parsed_hashtags(&Arc::new(Config::default()));
/// assert_eq!(tags.as_slice(), ["release", "Rust"]);
/// ```
pub trait Hashtaggable {
    /// The text to scan
    fn hashtaggable_content(&self) -> &str;

    /// Treat the content as markdown so code spans and blocks are skipped
    fn content_is_markdown(&self) -> bool {
        false
    }

    /// Unique hashtag names as written in the content
    fn scan_for_hashtags(&self) -> Vec<String> {
        let content = self.hashtaggable_content();
        if self.content_is_markdown() {
            extract_hashtags_from_markdown(content)
        } else {
            extract_hashtags(content)
        }
    }

    /// The record's hashtags as a normalized tag list
    fn parsed_hashtags(&self, config: &Arc<Config>) -> TagList {
        TagList::from_values(Arc::clone(config), self.scan_for_hashtags())
    }
}

impl Hashtaggable for String {
    fn hashtaggable_content(&self) -> &str {
        self
    }
}

impl Hashtaggable for &str {
    fn hashtaggable_content(&self) -> &str {
        self
    }
}
