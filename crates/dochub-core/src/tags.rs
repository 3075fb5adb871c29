//! Per-document boolean tags keyed by stable identity.
//!
//! The engine never derives identity itself: callers compute a
//! [`DocumentId`] once from immutable document content and use it for
//! every listing the document appears in. Keys tied to list position or
//! the active tab break as soon as a listing is re-sorted or refetched,
//! which is exactly what this engine exists to rule out.
//!
//! Toggles are commutative and idempotent, so replaying an event is safe.

use std::collections::{BTreeMap, BTreeSet};

use dochub_model::{DocumentId, TagName};

/// Accumulates tag sets per document identity.
#[derive(Debug, Clone, Default)]
pub struct TagEngine {
    tags: BTreeMap<DocumentId, BTreeSet<TagName>>,
}

impl TagEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply or remove a tag. Returns whether anything changed.
    ///
    /// The per-document set is created lazily on first use and evicted
    /// when its last tag is removed; the two states are observationally
    /// equivalent through this API.
    pub fn set_tag(&mut self, id: &DocumentId, tag: &TagName, present: bool) -> bool {
        if present {
            self.tags.entry(*id).or_default().insert(tag.clone())
        } else {
            let Some(set) = self.tags.get_mut(id) else {
                return false;
            };
            let removed = set.remove(tag);
            if set.is_empty() {
                self.tags.remove(id);
            }
            removed
        }
    }

    /// Total: unknown document ids simply carry no tags.
    pub fn has_tag(&self, id: &DocumentId, tag: &TagName) -> bool {
        self.tags.get(id).is_some_and(|set| set.contains(tag))
    }

    /// All documents carrying a tag, deduplicated.
    ///
    /// Backs cross-tab aggregations: a document listed under several tabs
    /// has one identity and therefore appears here once.
    pub fn documents_with_tag(&self, tag: &TagName) -> BTreeSet<DocumentId> {
        self.tags
            .iter()
            .filter(|(_, set)| set.contains(tag))
            .map(|(id, _)| *id)
            .collect()
    }

    pub fn tags_for<'a>(&'a self, id: &DocumentId) -> impl Iterator<Item = &'a TagName> {
        self.tags.get(id).into_iter().flatten()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn clear(&mut self) {
        self.tags.clear();
    }
}
