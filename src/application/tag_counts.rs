//! Tag frequency use case

use crate::application::hashtaggable::Hashtaggable;
use crate::domain::tags::TagList;
use crate::domain::Config;
use log::debug;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// How many records use a tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagCount {
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TagCountOrder {
    /// Order in which tags were first seen
    #[default]
    FirstSeen,

    /// Most used first; ties keep first-seen order
    CountDesc,

    /// Alphabetical, case-insensitive
    Name,
}

/// Options for counting tags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TagCountOptions {
    /// Drop tags used by fewer records
    pub at_least: Option<usize>,

    /// Drop tags used by more records
    pub at_most: Option<usize>,

    /// Maximum number of tags returned
    pub limit: Option<usize>,

    pub order: TagCountOrder,
}

/// Service for counting and listing the tags of many records
pub struct TagCountsService {
    config: Arc<Config>,
}

impl TagCountsService {
    pub fn new(config: Arc<Config>) -> Self {
        TagCountsService { config }
    }

    /// Count tags over the hashtags of `records`
    pub fn tag_counts_on<R: Hashtaggable>(
        &self,
        records: &[R],
        options: &TagCountOptions,
    ) -> Vec<TagCount> {
        let lists: Vec<TagList> = records
            .iter()
            .map(|r| r.parsed_hashtags(&self.config))
            .collect();
        self.count_lists(&lists, options)
    }

    /// Tag names used by `records`, without counts.
    ///
    /// Only `order` and `limit` apply.
    pub fn tags_on<R: Hashtaggable>(&self, records: &[R], options: &TagCountOptions) -> Vec<String> {
        let options = TagCountOptions {
            at_least: None,
            at_most: None,
            ..*options
        };

        self.tag_counts_on(records, &options)
            .into_iter()
            .map(|c| c.name)
            .collect()
    }

    /// Count how many lists use each tag.
    ///
    /// Names differing only by case are one tag unless `strict_case_match`
    /// is set; the first spelling seen is reported.
    pub fn count_lists<'a, I>(&self, lists: I, options: &TagCountOptions) -> Vec<TagCount>
    where
        I: IntoIterator<Item = &'a TagList>,
    {
        let mut counts: Vec<TagCount> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for list in lists {
            let mut seen_in_list = HashSet::new();
            for name in list {
                let key = self.key(name);
                if !seen_in_list.insert(key.clone()) {
                    continue;
                }

                match index.get(&key) {
                    Some(&i) => counts[i].count += 1,
                    None => {
                        index.insert(key, counts.len());
                        counts.push(TagCount {
                            name: name.clone(),
                            count: 1,
                        });
                    }
                }
            }
        }

        counts.retain(|c| {
            options.at_least.map_or(true, |min| c.count >= min)
                && options.at_most.map_or(true, |max| c.count <= max)
        });

        match options.order {
            TagCountOrder::FirstSeen => {}
            TagCountOrder::CountDesc => counts.sort_by(|a, b| b.count.cmp(&a.count)),
            TagCountOrder::Name => counts.sort_by(|a, b| {
                a.name
                    .to_lowercase()
                    .cmp(&b.name.to_lowercase())
                    .then_with(|| a.name.cmp(&b.name))
            }),
        }

        if let Some(limit) = options.limit {
            counts.truncate(limit);
        }

        debug!("counted {} tags", counts.len());
        counts
    }

    /// Remove tags from `known` that no record uses.
    ///
    /// Does nothing unless `remove_unused_tags` is enabled. Returns the
    /// removed names.
    pub fn prune_unused<R: Hashtaggable>(&self, known: &mut TagList, records: &[R]) -> Vec<String> {
        if !self.config.remove_unused_tags() {
            return Vec::new();
        }

        let used: HashSet<String> = records
            .iter()
            .flat_map(|r| r.parsed_hashtags(&self.config).into_vec())
            .map(|name| self.key(&name))
            .collect();

        let unused: Vec<String> = known
            .iter()
            .filter(|name| !used.contains(&self.key(name)))
            .cloned()
            .collect();

        if !unused.is_empty() {
            debug!("removing {} unused tags", unused.len());
            known.remove(unused.iter());
        }

        unused
    }

    fn key(&self, name: &str) -> String {
        if self.config.strict_case_match() {
            name.to_string()
        } else {
            name.to_lowercase()
        }
    }
}
