//! Tag membership filtering use case

use crate::application::hashtaggable::Hashtaggable;
use crate::domain::tags::{MatchMode, TaggedWith};
use crate::domain::Config;
use log::debug;
use std::sync::Arc;

/// Service for selecting records by their hashtags
pub struct TaggedWithService {
    config: Arc<Config>,
}

impl TaggedWithService {
    pub fn new(config: Arc<Config>) -> Self {
        TaggedWithService { config }
    }

    /// Build a query for a delimited tag string
    pub fn query(&self, tags: &str, mode: MatchMode) -> TaggedWith {
        TaggedWith::parse(&self.config, tags).mode(mode)
    }

    /// Records whose hashtags satisfy `query`, in input order.
    ///
    /// With `order_by_matching_tag_count` on an `Any` query, records
    /// carrying more of the wanted tags come first.
    pub fn filter<'a, R: Hashtaggable>(&self, query: &TaggedWith, records: &'a [R]) -> Vec<&'a R> {
        let mut matched: Vec<(usize, &'a R)> = records
            .iter()
            .filter_map(|record| {
                let tags = record.parsed_hashtags(&self.config);
                query
                    .matches(tags.as_slice())
                    .then(|| (query.matching_count(tags.as_slice()), record))
            })
            .collect();

        if query.orders_by_matching_tag_count() {
            matched.sort_by(|a, b| b.0.cmp(&a.0));
        }

        debug!(
            "{} of {} records tagged with {:?} ({:?})",
            matched.len(),
            records.len(),
            query.tags(),
            query.match_mode()
        );
        matched.into_iter().map(|(_, record)| record).collect()
    }
}
