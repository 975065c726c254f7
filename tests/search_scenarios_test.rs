/// End-to-end search scenarios against catalogs loaded from disk
mod common;

use case_search::history::HistoryStore;
use case_search::models::ResultKind;
use case_search::search::{KeyOutcome, MAX_RESULTS, NavKey, PanelState};
use case_search::storage::{FileStore, MemoryStore};
use case_search::{PathCollector, SearchSession, load_catalog, match_catalog};
use common::CatalogBuilder;

fn session_for(data: &common::TestCatalog) -> SearchSession {
    let catalog = load_catalog(&data.data_file).unwrap();
    SearchSession::new(catalog, HistoryStore::load(Box::new(FileStore::new(&data.history_file))))
}

#[test]
fn test_s3_scenario_from_disk() {
    let data = CatalogBuilder::s3_scenario().build();
    let catalog = load_catalog(&data.data_file).unwrap();

    let results = match_catalog("s3", &catalog);
    let summary: Vec<(ResultKind, &str, &str)> = results
        .iter()
        .map(|r| (r.kind, r.title.as_str(), r.target_path.as_str()))
        .collect();

    assert_eq!(
        summary,
        vec![
            (ResultKind::Case, "AWS S3 Bucket Data Breach", "/cases/1"),
            (ResultKind::Evidence, "s3_access_logs.csv", "/evidence/1"),
        ]
    );
}

#[test]
fn test_no_match_scenario() {
    let data = CatalogBuilder::s3_scenario().build();
    let mut session = session_for(&data);

    session.set_query("zzz-nomatch");
    assert_eq!(session.state(), PanelState::NoResults);
    assert!(session.results().is_empty());
}

#[test]
fn test_accept_navigates_and_persists_history() {
    let data = CatalogBuilder::s3_scenario().build();
    let mut session = session_for(&data);
    let mut navigator = PathCollector::new();

    session.set_query("s3");
    assert_eq!(session.handle_key(NavKey::Down, &mut navigator), KeyOutcome::Moved);
    let outcome = session.handle_key(NavKey::Enter, &mut navigator);

    let KeyOutcome::Accepted(accepted) = outcome else {
        panic!("expected an accepted result");
    };
    assert_eq!(accepted.query, "s3");
    assert_eq!(accepted.result.kind, ResultKind::Evidence);
    assert_eq!(navigator.last(), Some("/evidence/1"));
    assert_eq!(session.query(), "");
    assert_eq!(session.state(), PanelState::Idle);
    assert_eq!(data.persisted_history(), vec!["s3".to_string()]);
}

#[test]
fn test_history_survives_new_session() {
    let data = CatalogBuilder::s3_scenario().build();
    let mut navigator = PathCollector::new();

    {
        let mut session = session_for(&data);
        session.set_query("phish");
        session.accept(0, &mut navigator).unwrap();
    }

    let mut session = session_for(&data);
    session.focus();
    assert_eq!(session.state(), PanelState::ShowingHistory);
    assert_eq!(session.history().entries(), &["phish".to_string()]);

    // Enter on the highlighted entry runs it again without navigating
    navigator.take();
    let outcome = session.handle_key(NavKey::Enter, &mut navigator);
    assert_eq!(outcome, KeyOutcome::Recalled("phish".to_string()));
    assert_eq!(session.state(), PanelState::ShowingResults);
    assert_eq!(navigator.last(), None);
}

#[test]
fn test_events_follow_cases_and_evidence() {
    let data = CatalogBuilder::s3_scenario()
        .with_event("t1", "S3 bucket policy changed", "2024-01-30T22:15:00Z")
        .build();
    let catalog = load_catalog(&data.data_file).unwrap();

    let kinds: Vec<ResultKind> = match_catalog("s3", &catalog).iter().map(|r| r.kind).collect();
    assert_eq!(kinds, vec![ResultKind::Case, ResultKind::Evidence, ResultKind::Event]);
}

#[test]
fn test_result_cap_with_large_catalog() {
    let mut builder = CatalogBuilder::new();
    for i in 0..8 {
        builder = builder.with_case(&format!("c{}", i), &format!("Ransomware wave {}", i), &[]);
    }
    for i in 0..8 {
        builder = builder.with_evidence(&format!("e{}", i), &format!("ransomware_{}.bin", i), None);
    }
    let data = builder.build();
    let catalog = load_catalog(&data.data_file).unwrap();

    let results = match_catalog("RANSOM", &catalog);
    assert_eq!(results.len(), MAX_RESULTS);
    assert_eq!(results.iter().filter(|r| r.kind == ResultKind::Case).count(), 8);
    assert_eq!(results.iter().filter(|r| r.kind == ResultKind::Evidence).count(), 2);
}

#[test]
fn test_selection_clamps_at_both_ends() {
    let data = CatalogBuilder::s3_scenario().build();
    let catalog = load_catalog(&data.data_file).unwrap();
    let history = HistoryStore::load(Box::new(MemoryStore::new()));
    let mut session = SearchSession::new(catalog, history);
    let mut navigator = PathCollector::new();

    session.set_query("s3");
    for _ in 0..5 {
        session.handle_key(NavKey::Down, &mut navigator);
    }
    assert_eq!(session.selected_idx(), 1);
    for _ in 0..5 {
        session.handle_key(NavKey::Up, &mut navigator);
    }
    assert_eq!(session.selected_idx(), 0);
}

#[test]
fn test_keys_ignored_while_closed() {
    let data = CatalogBuilder::s3_scenario().build();
    let mut session = session_for(&data);
    let mut navigator = PathCollector::new();

    session.set_query("s3");
    assert_eq!(session.handle_key(NavKey::Escape, &mut navigator), KeyOutcome::Closed);
    assert_eq!(session.query(), "s3");

    assert_eq!(session.handle_key(NavKey::Enter, &mut navigator), KeyOutcome::Ignored);
    assert_eq!(navigator.last(), None);
    assert!(!data.history_file.exists());
}
