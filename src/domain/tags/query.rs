//! Tag membership queries
//!
//! `TaggedWith` decides whether a record's tags satisfy a list of wanted
//! tags, in one of four modes.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use simple_hashtag::domain::Config;
//! use simple_hashtag::domain::tags::{MatchMode, TaggedWith};
//!
//! let config = Arc::new(Config::default());
//! let query = TaggedWith::parse(&config, "awesome, cool").mode(MatchMode::Any);
//! assert!(query.matches(&["cool".to_string()]));
//! assert!(!query.matches(&["boring".to_string()]));
//! ```

use crate::domain::config::Config;
use crate::domain::tags::list::TagList;
use std::collections::HashSet;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchMode {
    /// Every wanted tag is present
    #[default]
    All,

    /// At least one wanted tag is present
    Any,

    /// None of the wanted tags is present
    Exclude,

    /// The record has exactly the wanted tags and nothing else
    MatchAll,
}

#[derive(Debug, Clone)]
pub struct TaggedWith {
    tags: Vec<String>,
    mode: MatchMode,
    wild: bool,
    order_by_matching_tag_count: bool,
    strict_case_match: bool,
}

impl TaggedWith {
    /// Query for the tags in `list`, using its configuration for case matching
    pub fn new(list: &TagList) -> Self {
        TaggedWith {
            tags: list.as_slice().to_vec(),
            mode: MatchMode::default(),
            wild: false,
            order_by_matching_tag_count: false,
            strict_case_match: list.config().strict_case_match(),
        }
    }

    /// Query for the tags in a delimited string
    pub fn parse(config: &Arc<Config>, input: &str) -> Self {
        TaggedWith::new(&TagList::from_parsed(Arc::clone(config), input))
    }

    pub fn mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }

    /// Match wanted tags as substrings of record tags (`All`, `Any`, `Exclude`)
    pub fn wild(mut self, wild: bool) -> Self {
        self.wild = wild;
        self
    }

    /// Rank `Any` results by how many wanted tags they carry
    pub fn order_by_matching_tag_count(mut self, enabled: bool) -> Self {
        self.order_by_matching_tag_count = enabled;
        self
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn match_mode(&self) -> MatchMode {
        self.mode
    }

    pub fn orders_by_matching_tag_count(&self) -> bool {
        self.order_by_matching_tag_count && self.mode == MatchMode::Any
    }

    /// Evaluate this query against a record's tags.
    ///
    /// A query without tags matches nothing.
    pub fn matches(&self, record_tags: &[String]) -> bool {
        if self.tags.is_empty() {
            return false;
        }

        match self.mode {
            MatchMode::All => self.tags.iter().all(|t| self.present(t, record_tags)),
            MatchMode::Any => self.tags.iter().any(|t| self.present(t, record_tags)),
            MatchMode::Exclude => !self.tags.iter().any(|t| self.present(t, record_tags)),
            MatchMode::MatchAll => {
                let wanted: HashSet<String> = self.tags.iter().map(|t| self.key(t)).collect();
                let actual: HashSet<String> = record_tags.iter().map(|t| self.key(t)).collect();
                wanted == actual
            }
        }
    }

    /// Number of wanted tags present in `record_tags`
    pub fn matching_count(&self, record_tags: &[String]) -> usize {
        self.tags
            .iter()
            .filter(|t| self.present(t, record_tags))
            .count()
    }

    fn present(&self, wanted: &str, record_tags: &[String]) -> bool {
        let wanted = self.key(wanted);
        record_tags.iter().any(|tag| {
            let tag = self.key(tag);
            if self.wild {
                tag.contains(&wanted)
            } else {
                tag == wanted
            }
        })
    }

    fn key(&self, name: &str) -> String {
        if self.strict_case_match {
            name.to_string()
        } else {
            name.to_lowercase()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Arc<Config> {
        Arc::new(Config::default())
    }

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_normalizes_input() {
        let query = TaggedWith::parse(&config(), " awesome, cool ,awesome");
        assert_eq!(query.tags(), ["awesome", "cool"]);
        assert_eq!(query.match_mode(), MatchMode::All);
    }

    #[test]
    fn test_all() {
        let query = TaggedWith::parse(&config(), "awesome, cool");
        assert!(query.matches(&tags(&["cool", "awesome", "extra"])));
        assert!(!query.matches(&tags(&["awesome"])));
    }

    #[test]
    fn test_any() {
        let query = TaggedWith::parse(&config(), "awesome, cool").mode(MatchMode::Any);
        assert!(query.matches(&tags(&["awesome"])));
        assert!(query.matches(&tags(&["cool", "other"])));
        assert!(!query.matches(&tags(&["other"])));
    }

    #[test]
    fn test_exclude() {
        let query = TaggedWith::parse(&config(), "awesome, cool").mode(MatchMode::Exclude);
        assert!(query.matches(&tags(&["other"])));
        assert!(query.matches(&tags(&[])));
        assert!(!query.matches(&tags(&["cool"])));
    }

    #[test]
    fn test_match_all() {
        let query = TaggedWith::parse(&config(), "awesome, cool").mode(MatchMode::MatchAll);
        assert!(query.matches(&tags(&["cool", "awesome"])));
        assert!(!query.matches(&tags(&["cool", "awesome", "extra"])));
        assert!(!query.matches(&tags(&["cool"])));
    }

    #[test]
    fn test_empty_query_matches_nothing() {
        for mode in [MatchMode::All, MatchMode::Any, MatchMode::Exclude, MatchMode::MatchAll] {
            let query = TaggedWith::parse(&config(), " , ").mode(mode);
            assert!(!query.matches(&tags(&["anything"])));
            assert!(!query.matches(&tags(&[])));
        }
    }

    #[test]
    fn test_case_insensitive_by_default() {
        let query = TaggedWith::parse(&config(), "Awesome");
        assert!(query.matches(&tags(&["awesome"])));
    }

    #[test]
    fn test_strict_case_match() {
        let strict = Arc::new(Config::default().with_strict_case_match(true));
        let query = TaggedWith::parse(&strict, "Awesome");
        assert!(!query.matches(&tags(&["awesome"])));
        assert!(query.matches(&tags(&["Awesome"])));
    }

    #[test]
    fn test_wild_exclude() {
        let query = TaggedWith::parse(&config(), "rust")
            .mode(MatchMode::Exclude)
            .wild(true);
        assert!(!query.matches(&tags(&["rustacean"])));
        assert!(query.matches(&tags(&["go"])));
    }

    #[test]
    fn test_matching_count() {
        let query = TaggedWith::parse(&config(), "a, b, c").mode(MatchMode::Any);
        assert_eq!(query.matching_count(&tags(&["a", "c", "z"])), 2);
        assert_eq!(query.matching_count(&tags(&["z"])), 0);
    }

    #[test]
    fn test_order_by_matching_count_only_for_any() {
        let any = TaggedWith::parse(&config(), "a")
            .mode(MatchMode::Any)
            .order_by_matching_tag_count(true);
        assert!(any.orders_by_matching_tag_count());

        let all = TaggedWith::parse(&config(), "a").order_by_matching_tag_count(true);
        assert!(!all.orders_by_matching_tag_count());
    }
}
