//! Tests for dashboard tab listings, stars, and visit marks.

use dochub_model::{DocumentOrigin, DocumentRecord, SearchQuery};
use dochub_portal::{DashboardState, DashboardTab};

fn record(title: &str, department: &str, origin: DocumentOrigin) -> DocumentRecord {
    DocumentRecord {
        title: title.to_string(),
        snippet: format!("{title} snippet."),
        department: department.to_string(),
        date: "2024-03-01".to_string(),
        language: "English".to_string(),
        origin,
    }
}

fn sample_dashboard() -> DashboardState {
    DashboardState::new(vec![
        record("Safety Circular", "Safety", DocumentOrigin::Received),
        record("Monthly Operations Report", "Operations", DocumentOrigin::Uploaded),
        record("Vendor Invoice", "Procurement", DocumentOrigin::Received),
        record("Environmental Impact Assessment", "Planning", DocumentOrigin::Verified),
    ])
}

#[test]
fn all_tab_lists_every_origin() {
    let dashboard = sample_dashboard();
    let all = dashboard.documents_for_tab(DashboardTab::All, &SearchQuery::default());
    assert_eq!(all.len(), 4);

    let uploaded = dashboard.documents_for_tab(DashboardTab::Uploaded, &SearchQuery::default());
    assert_eq!(uploaded.len(), 1);
    assert_eq!(uploaded[0].record.title, "Monthly Operations Report");

    let verified = dashboard.documents_for_tab(DashboardTab::Verified, &SearchQuery::default());
    assert_eq!(verified.len(), 1);
}

#[test]
fn marked_tab_aggregates_starred_across_origins() {
    let mut dashboard = sample_dashboard();
    let query = SearchQuery::default();

    assert!(dashboard.documents_for_tab(DashboardTab::Marked, &query).is_empty());

    let received_id = dashboard.documents_for_tab(DashboardTab::All, &query)[0].id;
    let verified_id = dashboard.documents_for_tab(DashboardTab::Verified, &query)[0].id;
    dashboard.toggle_starred(&received_id);
    dashboard.toggle_starred(&verified_id);

    let marked = dashboard.documents_for_tab(DashboardTab::Marked, &query);
    assert_eq!(marked.len(), 2);
    assert!(marked.iter().any(|doc| doc.id == received_id));
    assert!(marked.iter().any(|doc| doc.id == verified_id));
}

#[test]
fn star_survives_tab_switch_and_relisting() {
    let mut dashboard = sample_dashboard();
    let query = SearchQuery::default();

    let id = dashboard
        .documents_for_tab(DashboardTab::All, &query)
        .iter()
        .find(|doc| doc.record.title == "Environmental Impact Assessment")
        .expect("document listed")
        .id;
    dashboard.toggle_starred(&id);

    // The same document reached through a different tab keeps its star.
    let via_verified = dashboard.documents_for_tab(DashboardTab::Verified, &query)[0].id;
    assert_eq!(via_verified, id);
    assert!(dashboard.is_starred(&via_verified));
}

#[test]
fn duplicate_listing_appears_once_under_marked() {
    // The same conceptual document listed under two origins.
    let mut dashboard = DashboardState::new(vec![
        record("Corridor Extension Assessment", "Planning", DocumentOrigin::Received),
        record("Corridor Extension Assessment", "Planning", DocumentOrigin::Verified),
    ]);
    let query = SearchQuery::default();

    let id = dashboard.documents_for_tab(DashboardTab::All, &query)[0].id;
    dashboard.toggle_starred(&id);

    let marked = dashboard.documents_for_tab(DashboardTab::Marked, &query);
    assert_eq!(marked.len(), 1);
    assert_eq!(marked[0].id, id);
}

#[test]
fn toggle_starred_round_trips() {
    let mut dashboard = sample_dashboard();
    let id = dashboard.documents_for_tab(DashboardTab::All, &SearchQuery::default())[0].id;

    assert!(dashboard.toggle_starred(&id));
    assert!(dashboard.is_starred(&id));
    assert!(!dashboard.toggle_starred(&id));
    assert!(!dashboard.is_starred(&id));
}

#[test]
fn visited_is_sticky_and_independent_of_stars() {
    let mut dashboard = sample_dashboard();
    let id = dashboard.documents_for_tab(DashboardTab::All, &SearchQuery::default())[0].id;

    dashboard.mark_visited(&id);
    dashboard.mark_visited(&id);
    assert!(dashboard.is_visited(&id));
    assert!(!dashboard.is_starred(&id));

    dashboard.toggle_starred(&id);
    dashboard.toggle_starred(&id);
    assert!(dashboard.is_visited(&id));
}

#[test]
fn search_filters_listings_and_counts() {
    let mut dashboard = sample_dashboard();
    let query = SearchQuery::new("operations");

    // Matches "Monthly Operations Report" (title and department).
    let all = dashboard.documents_for_tab(DashboardTab::All, &query);
    assert_eq!(all.len(), 1);

    // A starred document outside the query stays hidden under Marked.
    let safety_id = dashboard
        .documents_for_tab(DashboardTab::All, &SearchQuery::default())[0]
        .id;
    dashboard.toggle_starred(&safety_id);
    assert!(dashboard.documents_for_tab(DashboardTab::Marked, &query).is_empty());

    let counts = dashboard.tab_counts(&query);
    assert_eq!(counts[0], (DashboardTab::All, 1));
    assert_eq!(counts[1], (DashboardTab::Uploaded, 1));
    assert_eq!(counts[2], (DashboardTab::Verified, 0));
    assert_eq!(counts[3], (DashboardTab::Marked, 0));
}

#[test]
fn clear_tags_keeps_documents() {
    let mut dashboard = sample_dashboard();
    let query = SearchQuery::default();
    let id = dashboard.documents_for_tab(DashboardTab::All, &query)[0].id;
    dashboard.toggle_starred(&id);
    dashboard.mark_visited(&id);

    dashboard.clear_tags();
    assert!(!dashboard.is_starred(&id));
    assert!(!dashboard.is_visited(&id));
    assert_eq!(dashboard.documents_for_tab(DashboardTab::All, &query).len(), 4);
}

#[test]
fn document_lookup_by_identity() {
    let dashboard = sample_dashboard();
    let id = dashboard.documents_for_tab(DashboardTab::All, &SearchQuery::default())[2].id;
    let record = dashboard.document(&id).expect("known id");
    assert_eq!(record.title, "Vendor Invoice");
}
