//! Dashboard state: the document store, tab listings, and user tags.
//!
//! Every record's identity is computed once when the store is built and
//! reused for all tag operations, so stars and visit marks survive
//! re-listing, re-sorting, and tab changes. Listings themselves are
//! recomputed per call from the backing store.

use dochub_core::TagEngine;
use dochub_model::{DocumentId, DocumentOrigin, DocumentRecord, SearchQuery, TagName};

use crate::navigation::DashboardTab;

/// One listed document with its stable identity.
#[derive(Debug)]
pub struct DocumentView<'a> {
    pub id: DocumentId,
    pub record: &'a DocumentRecord,
}

struct StoredDocument {
    id: DocumentId,
    record: DocumentRecord,
}

/// Backing state for the tabbed dashboard.
pub struct DashboardState {
    documents: Vec<StoredDocument>,
    tags: TagEngine,
    starred: TagName,
    visited: TagName,
}

impl DashboardState {
    pub fn new(documents: Vec<DocumentRecord>) -> Self {
        let documents = documents
            .into_iter()
            .map(|record| StoredDocument {
                id: record.identity(),
                record,
            })
            .collect();
        Self {
            documents,
            tags: TagEngine::new(),
            starred: TagName::starred(),
            visited: TagName::visited(),
        }
    }

    /// The documents shown under a tab, filtered by the search query.
    ///
    /// Marked aggregates starred documents across every origin; a document
    /// listed under several origins appears there once (first occurrence
    /// in store order). Search matches title, snippet, or department.
    pub fn documents_for_tab(
        &self,
        tab: DashboardTab,
        query: &SearchQuery,
    ) -> Vec<DocumentView<'_>> {
        match tab {
            DashboardTab::All => self.listing(query, |_| true),
            DashboardTab::Uploaded => {
                self.listing(query, |doc| doc.record.origin == DocumentOrigin::Uploaded)
            }
            DashboardTab::Verified => {
                self.listing(query, |doc| doc.record.origin == DocumentOrigin::Verified)
            }
            DashboardTab::Marked => {
                let starred = self.tags.documents_with_tag(&self.starred);
                let mut seen = std::collections::BTreeSet::new();
                self.listing(query, move |doc| {
                    starred.contains(&doc.id) && seen.insert(doc.id)
                })
            }
        }
    }

    fn listing<'a>(
        &'a self,
        query: &SearchQuery,
        mut keep: impl FnMut(&StoredDocument) -> bool,
    ) -> Vec<DocumentView<'a>> {
        self.documents
            .iter()
            .filter(|doc| {
                query.matches_any([
                    doc.record.title.as_str(),
                    doc.record.snippet.as_str(),
                    doc.record.department.as_str(),
                ])
            })
            .filter(|doc| keep(doc))
            .map(|doc| DocumentView {
                id: doc.id,
                record: &doc.record,
            })
            .collect()
    }

    /// Per-tab listing sizes for the navbar, under the same query.
    pub fn tab_counts(&self, query: &SearchQuery) -> [(DashboardTab, usize); 4] {
        DashboardTab::ALL.map(|tab| (tab, self.documents_for_tab(tab, query).len()))
    }

    pub fn document(&self, id: &DocumentId) -> Option<&DocumentRecord> {
        self.documents
            .iter()
            .find(|doc| doc.id == *id)
            .map(|doc| &doc.record)
    }

    pub fn toggle_starred(&mut self, id: &DocumentId) -> bool {
        let now_starred = !self.is_starred(id);
        self.tags.set_tag(id, &self.starred, now_starred);
        now_starred
    }

    pub fn is_starred(&self, id: &DocumentId) -> bool {
        self.tags.has_tag(id, &self.starred)
    }

    /// Record that the user opened a document. Never unset by the UI.
    pub fn mark_visited(&mut self, id: &DocumentId) {
        self.tags.set_tag(id, &self.visited, true);
    }

    pub fn is_visited(&self, id: &DocumentId) -> bool {
        self.tags.has_tag(id, &self.visited)
    }

    /// Drop all stars and visit marks, keeping the document store.
    pub fn clear_tags(&mut self) {
        self.tags.clear();
    }
}
