//! Tag name normalization passes

use crate::domain::config::Config;

/// The normalization pipeline applied to a tag list after every change.
///
/// Passes run in order: strip, lowercase (optional), parameterize
/// (optional), drop blanks, dedupe keeping the first occurrence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Normalizer {
    pub force_lowercase: bool,
    pub force_parameterize: bool,
}

impl Normalizer {
    pub fn from_config(config: &Config) -> Self {
        Normalizer {
            force_lowercase: config.force_lowercase(),
            force_parameterize: config.force_parameterize(),
        }
    }

    /// Normalize a single name, or `None` if nothing is left of it
    pub fn normalize_one(&self, raw: &str) -> Option<String> {
        let mut name = raw.trim().to_string();

        if self.force_lowercase {
            name = name.to_lowercase();
        }

        if self.force_parameterize {
            name = parameterize(&name);
        }

        if name.trim().is_empty() {
            None
        } else {
            Some(name)
        }
    }

    /// Normalize a whole sequence into canonical form
    pub fn normalize_all<I>(&self, names: I) -> Vec<String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for name in names.into_iter().filter_map(|n| self.normalize_one(&n)) {
            if !unique.contains(&name) {
                unique.push(name);
            }
        }
        unique
    }
}

/// Turn a name into a URL-friendly slug.
///
/// Runs of anything other than alphanumerics and `_` become one `-`,
/// leading and trailing separators are dropped, and the result is
/// lowercased.
///
/// # Examples
///
/// ```
/// use simple_hashtag::domain::tags::parameterize;
///
/// assert_eq!(parameterize("  Square, Cube! "), "square-cube");
/// assert_eq!(parameterize("rust_lang"), "rust_lang");
/// ```
pub fn parameterize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_dash = false;

    for ch in raw.chars() {
        if ch.is_alphanumeric() || ch == '_' {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.extend(ch.to_lowercase());
        } else {
            pending_dash = true;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_strip_and_drop_blanks() {
        let normalizer = Normalizer::default();
        let result = normalizer.normalize_all(strings(&[" Fun ", "", "   ", "\tHappy\n"]));
        assert_eq!(result, vec!["Fun", "Happy"]);
    }

    #[test]
    fn test_dedupe_keeps_first_position() {
        let normalizer = Normalizer::default();
        let result = normalizer.normalize_all(strings(&["Fun", "Happy", " Fun", "Sad"]));
        assert_eq!(result, vec!["Fun", "Happy", "Sad"]);
    }

    #[test]
    fn test_case_preserved_by_default() {
        let normalizer = Normalizer::default();
        let result = normalizer.normalize_all(strings(&["Fun", "fun"]));
        assert_eq!(result, vec!["Fun", "fun"]);
    }

    #[test]
    fn test_force_lowercase_merges_case_variants() {
        let normalizer = Normalizer {
            force_lowercase: true,
            force_parameterize: false,
        };
        let result = normalizer.normalize_all(strings(&["Fun", "FUN", "Big Day"]));
        assert_eq!(result, vec!["fun", "big day"]);
    }

    #[test]
    fn test_force_parameterize() {
        let normalizer = Normalizer {
            force_lowercase: false,
            force_parameterize: true,
        };
        let result = normalizer.normalize_all(strings(&["Big Day", "big-day", "!!!", "C++"]));
        assert_eq!(result, vec!["big-day", "c"]);
    }

    #[test]
    fn test_parameterize_collapses_separators() {
        assert_eq!(parameterize("design   team"), "design-team");
        assert_eq!(parameterize("--a--b--"), "a-b");
        assert_eq!(parameterize("Ünïcode Tag"), "ünïcode-tag");
    }

    #[test]
    fn test_normalize_one() {
        let normalizer = Normalizer::default();
        assert_eq!(normalizer.normalize_one("  x "), Some("x".to_string()));
        assert_eq!(normalizer.normalize_one(" \t "), None);
    }
}
