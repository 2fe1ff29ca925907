//! Ordered, deduplicated tag lists
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use simple_hashtag::domain::{Config, tags::TagList};
//!
//! let mut tags = TagList::new(Arc::new(Config::default()));
//! tags.add(["Round", "Square,Cube", "Round"]);
//! assert_eq!(tags.to_string(), r#"Round, "Square,Cube""#);
//! ```

use crate::domain::config::Config;
use crate::domain::tags::normalize::Normalizer;
use crate::domain::tags::parser::{TagListParser, QUOTES};
use crate::error::{HashtagError, Result};
use std::fmt;
use std::sync::Arc;

/// A value accepted by [`TagList::add`] and [`TagList::remove`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagValue {
    /// A tag name, or a delimited string when parsing is enabled
    Text(String),

    /// Tags taken as-is; list elements are never split
    List(Vec<TagValue>),
}

impl From<&str> for TagValue {
    fn from(value: &str) -> Self {
        TagValue::Text(value.to_string())
    }
}

impl From<String> for TagValue {
    fn from(value: String) -> Self {
        TagValue::Text(value)
    }
}

impl From<&String> for TagValue {
    fn from(value: &String) -> Self {
        TagValue::Text(value.clone())
    }
}

impl<T: Into<TagValue>> From<Vec<T>> for TagValue {
    fn from(values: Vec<T>) -> Self {
        TagValue::List(values.into_iter().map(Into::into).collect())
    }
}

impl From<&TagList> for TagValue {
    fn from(list: &TagList) -> Self {
        TagValue::List(list.tags.iter().cloned().map(TagValue::Text).collect())
    }
}

impl TryFrom<toml::Value> for TagValue {
    type Error = HashtagError;

    /// Scalars are used in their text form; tables and datetimes are rejected.
    fn try_from(value: toml::Value) -> Result<Self> {
        match value {
            toml::Value::String(s) => Ok(TagValue::Text(s)),
            toml::Value::Integer(i) => Ok(TagValue::Text(i.to_string())),
            toml::Value::Float(f) => Ok(TagValue::Text(f.to_string())),
            toml::Value::Boolean(b) => Ok(TagValue::Text(b.to_string())),
            toml::Value::Array(items) => items
                .into_iter()
                .map(TagValue::try_from)
                .collect::<Result<Vec<_>>>()
                .map(TagValue::List),
            toml::Value::Table(_) => Err(HashtagError::InvalidArgument(
                "a table cannot be used as a tag".to_string(),
            )),
            toml::Value::Datetime(dt) => Err(HashtagError::InvalidArgument(format!(
                "a datetime cannot be used as a tag: {}",
                dt
            ))),
        }
    }
}

/// Options for [`TagList::add_with`] and [`TagList::remove_with`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AddOptions {
    /// Split text values with the configured delimiter first
    pub parse: bool,
}

impl AddOptions {
    pub fn parsed() -> Self {
        AddOptions { parse: true }
    }
}

/// Canonical tag names in first-seen order.
///
/// After every change no name is blank, every name is trimmed, and no name
/// appears twice.
#[derive(Debug, Clone)]
pub struct TagList {
    tags: Vec<String>,
    config: Arc<Config>,
    owner: Option<String>,
}

impl TagList {
    pub fn new(config: Arc<Config>) -> Self {
        TagList {
            tags: Vec::new(),
            config,
            owner: None,
        }
    }

    /// Create a list seeded with `values`
    pub fn from_values<I, V>(config: Arc<Config>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<TagValue>,
    {
        let mut list = TagList::new(config);
        list.add(values);
        list
    }

    /// Create a list from one delimited string
    pub fn from_parsed(config: Arc<Config>, input: &str) -> Self {
        let mut list = TagList::new(config);
        list.add_parsed(input);
        list
    }

    /// Add tags. Blank and duplicate names are ignored.
    pub fn add<I, V>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<TagValue>,
    {
        self.add_with(values, AddOptions::default())
    }

    /// Add tags from a delimited string, e.g. `"Fun, Happy"`
    pub fn add_parsed(&mut self, input: &str) -> &mut Self {
        self.add_with([input], AddOptions::parsed())
    }

    pub fn add_with<I, V>(&mut self, values: I, options: AddOptions) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<TagValue>,
    {
        let names = self.flatten(values, options);
        self.tags.extend(names);
        self.clean();
        self
    }

    /// Add a single value
    pub fn append(&mut self, value: impl Into<TagValue>) -> &mut Self {
        self.add([value])
    }

    /// Append every tag of `other`
    pub fn concat(&mut self, other: &TagList) -> &mut Self {
        self.tags.extend(other.tags.iter().cloned());
        self.clean();
        self
    }

    /// A new list holding the tags of `self` followed by those of `other`.
    ///
    /// The result has no owner.
    pub fn combine(&self, other: &TagList) -> TagList {
        let mut combined = TagList::new(Arc::clone(&self.config));
        combined.concat(self).concat(other);
        combined
    }

    /// Remove tags. Names that are not in the list are ignored.
    pub fn remove<I, V>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<TagValue>,
    {
        self.remove_with(values, AddOptions::default())
    }

    /// Remove tags given as a delimited string
    pub fn remove_parsed(&mut self, input: &str) -> &mut Self {
        self.remove_with([input], AddOptions::parsed())
    }

    pub fn remove_with<I, V>(&mut self, values: I, options: AddOptions) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<TagValue>,
    {
        let normalizer = self.normalizer();
        let doomed: Vec<String> = self
            .flatten(values, options)
            .into_iter()
            .filter_map(|name| normalizer.normalize_one(&name))
            .collect();

        self.tags.retain(|name| !doomed.contains(name));
        self
    }

    pub fn as_slice(&self) -> &[String] {
        &self.tags
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.tags.iter()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tags.iter().any(|tag| tag == name)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.tags
    }

    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Opaque label of the record this list belongs to
    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    pub fn set_owner(&mut self, owner: impl Into<String>) {
        self.owner = Some(owner.into());
    }

    fn normalizer(&self) -> Normalizer {
        Normalizer::from_config(&self.config)
    }

    fn flatten<I, V>(&self, values: I, options: AddOptions) -> Vec<String>
    where
        I: IntoIterator<Item = V>,
        V: Into<TagValue>,
    {
        let parser = TagListParser::new(&self.config);
        let parser = options.parse.then_some(&parser);

        let mut names = Vec::new();
        for value in values {
            flatten_into(value.into(), parser, &mut names);
        }
        names
    }

    fn clean(&mut self) {
        let tags = std::mem::take(&mut self.tags);
        self.tags = self.normalizer().normalize_all(tags);
    }
}

fn flatten_into(value: TagValue, parser: Option<&TagListParser<'_>>, out: &mut Vec<String>) {
    match value {
        TagValue::Text(text) => match parser {
            Some(parser) => out.extend(parser.parse(&text)),
            None => out.push(text),
        },
        TagValue::List(items) => {
            for item in items {
                flatten_into(item, None, out);
            }
        }
    }
}

impl fmt::Display for TagList {
    /// Join tags with the glue, quoting any tag that contains a delimiter
    /// or starts with a quote
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let delimiter = self.config.delimiter();
        let glue = self.config.glue();

        for (i, name) in self.tags.iter().enumerate() {
            if i > 0 {
                f.write_str(&glue)?;
            }
            if delimiter.occurs_in(name) || name.starts_with(&QUOTES[..]) {
                write!(f, "\"{}\"", name)?;
            } else {
                f.write_str(name)?;
            }
        }

        Ok(())
    }
}

impl PartialEq for TagList {
    fn eq(&self, other: &Self) -> bool {
        self.tags == other.tags
    }
}

impl Eq for TagList {}

impl<'a> IntoIterator for &'a TagList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.iter()
    }
}
