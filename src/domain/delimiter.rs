//! Tag delimiter configuration
//!
//! A delimiter is either one separator string or an ordered set of candidate
//! separators. Both the parser and the serializer consume it the same way:
//! any candidate ends a token, and any candidate inside a tag forces quoting.

use crate::error::{HashtagError, Result};
use serde::{Deserialize, Deserializer, Serialize};

/// Delimiter used when none is configured
pub const DEFAULT_DELIMITER: &str = ",";

/// Tag separator.
///
/// Deserializes from a string or a list of strings and is validated while
/// deserializing, so a config holding an empty delimiter cannot be built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Delimiter {
    /// One separator, e.g. `","` or `"; "`
    Single(String),

    /// Any of these separators ends a token. The first one is used for output.
    AnyOf(Vec<String>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDelimiter {
    Single(String),
    AnyOf(Vec<String>),
}

impl<'de> Deserialize<'de> for Delimiter {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let delimiter = match RawDelimiter::deserialize(deserializer)? {
            RawDelimiter::Single(separator) => Delimiter::Single(separator),
            RawDelimiter::AnyOf(separators) => Delimiter::AnyOf(separators),
        };
        delimiter.validate().map_err(serde::de::Error::custom)?;
        Ok(delimiter)
    }
}

impl Default for Delimiter {
    fn default() -> Self {
        Delimiter::Single(DEFAULT_DELIMITER.to_string())
    }
}

impl Delimiter {
    pub fn single(separator: impl Into<String>) -> Self {
        Delimiter::Single(separator.into())
    }

    pub fn any_of<I, S>(separators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Delimiter::AnyOf(separators.into_iter().map(Into::into).collect())
    }

    /// All candidate separators, in configured order
    pub fn candidates(&self) -> &[String] {
        match self {
            Delimiter::Single(separator) => std::slice::from_ref(separator),
            Delimiter::AnyOf(separators) => separators,
        }
    }

    /// Reject delimiters that could never split anything
    pub fn validate(&self) -> Result<()> {
        if let Delimiter::AnyOf(separators) = self {
            if separators.is_empty() {
                return Err(HashtagError::Config(
                    "delimiter set must contain at least one separator".to_string(),
                ));
            }
        }

        if self.candidates().iter().any(|s| s.is_empty()) {
            return Err(HashtagError::Config(
                "delimiter must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// The string placed between tags when rendering a list.
    ///
    /// This is the (first) delimiter followed by a space, unless the
    /// delimiter already ends in whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_hashtag::domain::Delimiter;
    ///
    /// assert_eq!(Delimiter::single(",").glue(), ", ");
    /// assert_eq!(Delimiter::single("; ").glue(), "; ");
    /// ```
    pub fn glue(&self) -> String {
        let first = self
            .candidates()
            .first()
            .map(String::as_str)
            .unwrap_or(DEFAULT_DELIMITER);

        if first.ends_with(char::is_whitespace) {
            first.to_string()
        } else {
            format!("{} ", first)
        }
    }

    /// Length in bytes of the separator starting at `pos`, if any.
    ///
    /// When several candidates match, the longest wins.
    pub fn match_at(&self, text: &str, pos: usize) -> Option<usize> {
        let rest = text.get(pos..)?;
        self.candidates()
            .iter()
            .filter(|s| !s.is_empty() && rest.starts_with(s.as_str()))
            .map(String::len)
            .max()
    }

    /// Whether any separator occurs inside `text`
    pub fn occurs_in(&self, text: &str) -> bool {
        self.candidates()
            .iter()
            .any(|s| !s.is_empty() && text.contains(s.as_str()))
    }
}
