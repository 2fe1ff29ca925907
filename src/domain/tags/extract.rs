//! Hashtag extraction from free text

use pulldown_cmark::{Event, Parser as MdParser, Tag, TagEnd};
use regex::Regex;
use std::ops::Range;
use std::sync::OnceLock;

/// Regex for hashtags: `#` at the start of the text or after whitespace,
/// followed by letters, digits, `-` or `_`
fn hashtag_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(?:^|\s)#([A-Za-z0-9_-]+)").unwrap())
}

/// Extract hashtag names (without `#`) from text.
///
/// Names are unique and in order of first appearance. A name standing alone
/// (followed by whitespace or the end of text) is skipped when it is all
/// digits, or made of word characters with a leading or trailing `_`.
///
/// # Examples
///
/// ```
/// use simple_hashtag::domain::tags::extract_hashtags;
///
/// let tags = extract_hashtags("Shipping #rust and #Serde today #42");
/// assert_eq!(tags, vec!["rust", "Serde"]);
/// ```
pub fn extract_hashtags(text: &str) -> Vec<String> {
    let mut names = Vec::new();
    collect_hashtags(text, &mut names);
    names
}

/// Like [`extract_hashtags`], skipping fenced code blocks and inline code
pub fn extract_hashtags_from_markdown(markdown: &str) -> Vec<String> {
    let mut names = Vec::new();
    let mut cursor = 0usize;

    for range in excluded_ranges(markdown) {
        if range.start > cursor {
            collect_hashtags(&markdown[cursor..range.start], &mut names);
        }
        cursor = cursor.max(range.end);
    }

    if cursor < markdown.len() {
        collect_hashtags(&markdown[cursor..], &mut names);
    }

    names
}

fn collect_hashtags(text: &str, names: &mut Vec<String>) {
    for captures in hashtag_regex().captures_iter(text) {
        let Some(name) = captures.get(1) else {
            continue;
        };

        let standalone = text[name.end()..]
            .chars()
            .next()
            .map_or(true, char::is_whitespace);
        if standalone && is_rejected(name.as_str()) {
            continue;
        }

        let name = name.as_str().to_string();
        if !names.contains(&name) {
            names.push(name);
        }
    }
}

fn is_rejected(name: &str) -> bool {
    if name.chars().all(|c| c.is_ascii_digit()) {
        return true;
    }

    let word = name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    word && name.len() > 1 && (name.starts_with('_') || name.ends_with('_'))
}

fn excluded_ranges(markdown: &str) -> Vec<Range<usize>> {
    let mut ranges: Vec<Range<usize>> = Vec::new();
    let mut code_block_start: Option<usize> = None;

    for (event, range) in MdParser::new(markdown).into_offset_iter() {
        match event {
            Event::Start(Tag::CodeBlock(_)) => {
                code_block_start = Some(range.start);
            }
            Event::End(TagEnd::CodeBlock) => {
                if let Some(start) = code_block_start.take() {
                    ranges.push(start..range.end);
                }
            }
            Event::Code(_) => {
                if code_block_start.is_none() {
                    ranges.push(range);
                }
            }
            _ => {}
        }
    }

    ranges.sort_by_key(|r| r.start);
    ranges
}
