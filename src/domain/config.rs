//! Tag handling configuration
//!
//! Build one `Config` at startup and share it (usually as `Arc<Config>`)
//! with parsers, tag lists and services. It is never mutated afterwards.

use crate::domain::delimiter::Delimiter;
use crate::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    delimiter: Delimiter,
    force_lowercase: bool,
    force_parameterize: bool,
    strict_case_match: bool,
    remove_unused_tags: bool,
}

impl Config {
    /// Create a config with the given delimiter and all flags off
    pub fn new(delimiter: Delimiter) -> Result<Self> {
        delimiter.validate()?;
        Ok(Config {
            delimiter,
            ..Config::default()
        })
    }

    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Result<Self> {
        delimiter.validate()?;
        self.delimiter = delimiter;
        Ok(self)
    }

    pub fn with_force_lowercase(mut self, enabled: bool) -> Self {
        self.force_lowercase = enabled;
        self
    }

    pub fn with_force_parameterize(mut self, enabled: bool) -> Self {
        self.force_parameterize = enabled;
        self
    }

    pub fn with_strict_case_match(mut self, enabled: bool) -> Self {
        self.strict_case_match = enabled;
        self
    }

    pub fn with_remove_unused_tags(mut self, enabled: bool) -> Self {
        self.remove_unused_tags = enabled;
        self
    }

    /// Check invariants that deserialization alone cannot enforce
    pub fn validate(&self) -> Result<()> {
        self.delimiter.validate()
    }

    pub fn delimiter(&self) -> &Delimiter {
        &self.delimiter
    }

    /// Separator placed between tags when rendering a list
    pub fn glue(&self) -> String {
        self.delimiter.glue()
    }

    /// Lowercase every tag during normalization
    pub fn force_lowercase(&self) -> bool {
        self.force_lowercase
    }

    /// Slugify every tag during normalization
    pub fn force_parameterize(&self) -> bool {
        self.force_parameterize
    }

    /// Compare tag names case-sensitively when matching and counting
    pub fn strict_case_match(&self) -> bool {
        self.strict_case_match
    }

    /// Drop known tags that no record uses anymore
    pub fn remove_unused_tags(&self) -> bool {
        self.remove_unused_tags
    }
}
