//! Per-parent child lists that are fetched on demand and reconciled
//! individually after a mutation.

use std::collections::{HashMap, HashSet};
use std::future::Future;

use leptos::*;

use crate::api::ApiError;
use crate::state::panel::{RequestSequence, RequestToken};

#[derive(Debug, Clone, PartialEq)]
pub struct SubtreeCache<T> {
    entries: HashMap<i64, Vec<T>>,
    expanded: HashSet<i64>,
    loading: HashSet<i64>,
    tokens: HashMap<i64, RequestToken>,
    seq: RequestSequence,
}

impl<T> Default for SubtreeCache<T> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            expanded: HashSet::new(),
            loading: HashSet::new(),
            tokens: HashMap::new(),
            seq: RequestSequence::default(),
        }
    }
}

impl<T> SubtreeCache<T> {
    pub fn children(&self, parent: i64) -> Option<&[T]> {
        self.entries.get(&parent).map(Vec::as_slice)
    }

    pub fn is_cached(&self, parent: i64) -> bool {
        self.entries.contains_key(&parent)
    }

    pub fn is_expanded(&self, parent: i64) -> bool {
        self.expanded.contains(&parent)
    }

    pub fn is_loading(&self, parent: i64) -> bool {
        self.loading.contains(&parent)
    }

    /// Flips the expanded flag. Returns `true` when the caller should fetch:
    /// the parent was just expanded and nothing is cached or in flight.
    pub fn toggle(&mut self, parent: i64) -> bool {
        if self.expanded.remove(&parent) {
            return false;
        }
        self.expanded.insert(parent);
        !self.is_cached(parent) && !self.is_loading(parent)
    }

    pub fn expand(&mut self, parent: i64) {
        self.expanded.insert(parent);
    }

    pub fn begin_load(&mut self, parent: i64) -> RequestToken {
        let token = self.seq.issue();
        self.loading.insert(parent);
        self.tokens.insert(parent, token);
        token
    }

    /// Stores the children unless a newer load for the same parent was issued.
    /// A failed load leaves the previous children in place.
    pub fn finish_load(
        &mut self,
        parent: i64,
        token: RequestToken,
        result: Result<Vec<T>, ApiError>,
    ) -> bool {
        if self.tokens.get(&parent) != Some(&token) {
            log::debug!("subtree {}: discarding stale response {:?}", parent, token);
            return false;
        }
        self.tokens.remove(&parent);
        self.loading.remove(&parent);
        match result {
            Ok(children) => {
                self.entries.insert(parent, children);
                true
            }
            Err(err) => {
                log::error!("subtree {}: failed to load children: {}", parent, err);
                false
            }
        }
    }

    /// Drops a parent entirely, e.g. after the parent itself was deleted.
    pub fn forget(&mut self, parent: i64) {
        self.entries.remove(&parent);
        self.expanded.remove(&parent);
        self.loading.remove(&parent);
        self.tokens.remove(&parent);
    }

    /// Keeps only the parents still present after the top-level list reloads.
    pub fn retain_parents(&mut self, parents: &[i64]) {
        let keep: HashSet<i64> = parents.iter().copied().collect();
        self.entries.retain(|id, _| keep.contains(id));
        self.expanded.retain(|id| keep.contains(id));
        self.loading.retain(|id| keep.contains(id));
        self.tokens.retain(|id, _| keep.contains(id));
    }

    pub fn cached_parents(&self) -> Vec<i64> {
        let mut parents: Vec<i64> = self.entries.keys().copied().collect();
        parents.sort_unstable();
        parents
    }
}

/// Fetches the children of `parent` and stores them unless superseded.
pub fn spawn_subtree_load<T, F, Fut>(cache: RwSignal<SubtreeCache<T>>, parent: i64, fetch: F)
where
    T: 'static,
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = Result<Vec<T>, ApiError>> + 'static,
{
    let Some(token) = cache.try_update(|c| c.begin_load(parent)) else {
        return;
    };
    spawn_local(async move {
        let result = fetch().await;
        cache.update(|c| {
            c.finish_load(parent, token, result);
        });
    });
}
