//! Tag list parsing from delimited text
//!
//! Splits a string such as `Round, "Square,Cube"` into raw tag tokens.
//! A token may be wrapped in double or single quotes to carry the
//! delimiter literally. An unmatched apostrophe is plain text. Tokens are returned as written: trimming,
//! blank removal and deduplication are left to [`TagList`](super::TagList).

use crate::domain::config::Config;
use crate::domain::delimiter::Delimiter;
use log::debug;

/// Characters that may open a quoted token
pub(crate) const QUOTES: [char; 2] = ['"', '\''];

pub struct TagListParser<'a> {
    delimiter: &'a Delimiter,
}

impl<'a> TagListParser<'a> {
    pub fn new(config: &'a Config) -> Self {
        TagListParser {
            delimiter: config.delimiter(),
        }
    }

    pub fn with_delimiter(delimiter: &'a Delimiter) -> Self {
        TagListParser { delimiter }
    }

    /// Split `input` into raw tag tokens.
    ///
    /// Empty or whitespace-only input yields no tokens. An unterminated
    /// double quote runs to the end of the input.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_hashtag::domain::{Config, tags::TagListParser};
    ///
    /// let config = Config::default();
    /// let tokens = TagListParser::new(&config).parse(r#"Round, "Square,Cube""#);
    /// assert_eq!(tokens, vec!["Round", "Square,Cube"]);
    /// ```
    pub fn parse(&self, input: &str) -> Vec<String> {
        if input.trim().is_empty() {
            return Vec::new();
        }

        let mut tokens = Vec::new();
        let mut pos = 0;
        loop {
            let (token, next) = self.next_token(input, pos);
            tokens.push(token);
            match next {
                Some(next) => pos = next,
                None => break,
            }
        }

        tokens
    }

    /// Read the token starting at `start`.
    ///
    /// Returns the token and the position just past the delimiter that
    /// ended it, or `None` if the token ran to the end of the input.
    fn next_token(&self, input: &str, start: usize) -> (String, Option<usize>) {
        self.quoted_token(input, start)
            .unwrap_or_else(|| self.plain_token(input, start))
    }

    fn plain_token(&self, input: &str, start: usize) -> (String, Option<usize>) {
        for (offset, _) in input[start..].char_indices() {
            let pos = start + offset;
            if let Some(len) = self.delimiter.match_at(input, pos) {
                return (input[start..pos].to_string(), Some(pos + len));
            }
        }

        (input[start..].to_string(), None)
    }

    fn quoted_token(&self, input: &str, start: usize) -> Option<(String, Option<usize>)> {
        let rest = &input[start..];
        let trimmed = rest.trim_start();
        let quote = trimmed.chars().next().filter(|c| QUOTES.contains(c))?;
        let open = start + (rest.len() - trimmed.len());
        let body_start = open + quote.len_utf8();

        let mut search = body_start;
        let mut saw_closing = false;
        while let Some(offset) = input[search..].find(quote) {
            saw_closing = true;
            let close = search + offset;
            let after = close + quote.len_utf8();

            if let Some(next) = self.boundary_after(input, after) {
                return Some((input[body_start..close].to_string(), next));
            }
            search = after;
        }

        if saw_closing || quote != '"' {
            // No closing quote at a token boundary: plain text. Only a
            // double quote may run to the end of the input.
            return None;
        }

        debug!(
            "unterminated {} quote at byte {}, closing at end of input",
            quote, open
        );
        Some((input[body_start..].to_string(), None))
    }

    /// Check that only whitespace separates `after` from a delimiter or
    /// the end of input. `Some(None)` means end of input.
    fn boundary_after(&self, input: &str, after: usize) -> Option<Option<usize>> {
        for (offset, ch) in input[after..].char_indices() {
            let pos = after + offset;
            if let Some(len) = self.delimiter.match_at(input, pos) {
                return Some(Some(pos + len));
            }
            if !ch.is_whitespace() {
                return None;
            }
        }

        Some(None)
    }
}

/// Parse `input` with the delimiter from `config`
pub fn parse(config: &Config, input: &str) -> Vec<String> {
    TagListParser::new(config).parse(input)
}
