//! Tests for stable-identity tagging across re-listed views.

use dochub_core::TagEngine;
use dochub_model::{DocumentOrigin, DocumentRecord, TagName};

fn record(title: &str, origin: DocumentOrigin) -> DocumentRecord {
    DocumentRecord {
        title: title.to_string(),
        snippet: "Snippet text.".to_string(),
        department: "Operations".to_string(),
        date: "2024-02-25".to_string(),
        language: "English".to_string(),
        origin,
    }
}

#[test]
fn tag_survives_relisting_in_a_different_order() {
    let mut listing = vec![
        record("Passenger Feedback Analysis", DocumentOrigin::Received),
        record("Monthly Operations Report", DocumentOrigin::Uploaded),
        record("Vendor Invoice", DocumentOrigin::Received),
    ];

    let mut engine = TagEngine::new();
    let starred_id = listing[1].identity();
    engine.set_tag(&starred_id, &TagName::starred(), true);

    // Regenerate the listing in a different order, as a refetch would.
    listing.reverse();
    let relisted = listing
        .iter()
        .find(|doc| doc.title == "Monthly Operations Report")
        .expect("document still listed");

    assert_eq!(relisted.identity(), starred_id);
    assert!(engine.has_tag(&relisted.identity(), &TagName::starred()));
}

#[test]
fn same_document_under_two_tabs_aggregates_once() {
    // The same conceptual document listed under two origins shares one
    // identity, so the aggregation set holds it exactly once.
    let under_all = record("Environmental Impact Assessment", DocumentOrigin::Received);
    let under_verified = record("Environmental Impact Assessment", DocumentOrigin::Verified);
    assert_eq!(under_all.identity(), under_verified.identity());

    let mut engine = TagEngine::new();
    engine.set_tag(&under_all.identity(), &TagName::starred(), true);
    engine.set_tag(&under_verified.identity(), &TagName::starred(), true);

    let starred = engine.documents_with_tag(&TagName::starred());
    assert_eq!(starred.len(), 1);
    assert!(starred.contains(&under_all.identity()));
}

#[test]
fn aggregation_only_returns_documents_with_that_tag() {
    let a = record("Safety Circular", DocumentOrigin::Received);
    let b = record("HR Policy Update", DocumentOrigin::Received);

    let mut engine = TagEngine::new();
    engine.set_tag(&a.identity(), &TagName::starred(), true);
    engine.set_tag(&b.identity(), &TagName::visited(), true);

    let starred = engine.documents_with_tag(&TagName::starred());
    assert_eq!(starred.len(), 1);
    assert!(starred.contains(&a.identity()));
    assert!(!starred.contains(&b.identity()));
}

#[test]
fn toggle_twice_round_trips() {
    let doc = record("Vendor Invoice", DocumentOrigin::Received);
    let mut engine = TagEngine::new();

    engine.set_tag(&doc.identity(), &TagName::starred(), true);
    engine.set_tag(&doc.identity(), &TagName::starred(), true);
    assert!(engine.has_tag(&doc.identity(), &TagName::starred()));

    engine.set_tag(&doc.identity(), &TagName::starred(), false);
    assert!(!engine.has_tag(&doc.identity(), &TagName::starred()));
    assert!(engine.documents_with_tag(&TagName::starred()).is_empty());
}

#[test]
fn clear_resets_all_tags() {
    let doc = record("Safety Circular", DocumentOrigin::Received);
    let mut engine = TagEngine::new();
    engine.set_tag(&doc.identity(), &TagName::starred(), true);
    engine.set_tag(&doc.identity(), &TagName::visited(), true);

    engine.clear();
    assert!(engine.is_empty());
    assert!(!engine.has_tag(&doc.identity(), &TagName::visited()));
}
