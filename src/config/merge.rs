//! Precedence merge of resolved snapshots
//!
//! One ranked sequence drives both rules:
//! - Scalars: walk highest rank first, the first non-default value wins.
//! - Named maps: walk lowest rank first and overwrite, so the highest-ranked
//!   definition of a name replaces the whole entity. Names defined by a
//!   single snapshot survive whatever its rank.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use super::reader::Snapshot;
use crate::domain::Config;

/// Snapshots ordered by location precedence, highest first.
pub struct RankedSnapshots<'a> {
    ordered: Vec<&'a Snapshot>,
}

impl<'a> RankedSnapshots<'a> {
    pub fn new(snapshots: impl IntoIterator<Item = &'a Snapshot>) -> Self {
        let mut ordered: Vec<&'a Snapshot> = snapshots.into_iter().collect();
        ordered.sort_by_key(|snapshot| Reverse(snapshot.location.rank()));
        Self { ordered }
    }

    pub fn highest_first(&self) -> impl Iterator<Item = &'a Snapshot> + '_ {
        self.ordered.iter().copied()
    }

    pub fn lowest_first(&self) -> impl Iterator<Item = &'a Snapshot> + '_ {
        self.ordered.iter().rev().copied()
    }

    /// Highest-ranked value of a scalar field that passes `is_set`.
    fn first_set<T: Clone + 'a>(
        &self,
        field: impl Fn(&'a Config) -> &'a T,
        is_set: impl Fn(&T) -> bool,
    ) -> Option<T> {
        self.highest_first().map(|s| field(&s.config)).find(|v| is_set(v)).cloned()
    }

    /// Union of a named map across all snapshots, higher ranks overwriting.
    fn overlay<V: Clone + 'a>(
        &self,
        field: impl Fn(&'a Config) -> &'a BTreeMap<String, V>,
    ) -> BTreeMap<String, V> {
        let mut merged = BTreeMap::new();
        for snapshot in self.lowest_first() {
            for (name, entity) in field(&snapshot.config) {
                merged.insert(name.clone(), entity.clone());
            }
        }
        merged
    }

    /// Build a new config from the ranked snapshots. Inputs are only
    /// borrowed; every entry in the result is an owned copy.
    pub fn merge(&self) -> Config {
        Config {
            current_context: self
                .first_set(|c| &c.current_context, |v| !v.is_empty())
                .unwrap_or_default(),
            auth_infos: self.overlay(|c| &c.auth_infos),
            clusters: self.overlay(|c| &c.clusters),
            contexts: self.overlay(|c| &c.contexts),
            preferences: self
                .first_set(|c| &c.preferences, |p| !p.is_default())
                .unwrap_or_default(),
        }
    }
}

/// Merge snapshots given in any order. No snapshots yields an empty config.
pub fn merge<'a>(snapshots: impl IntoIterator<Item = &'a Snapshot>) -> Config {
    RankedSnapshots::new(snapshots).merge()
}
