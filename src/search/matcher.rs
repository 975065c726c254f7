use crate::models::{Case, Catalog, Evidence, ResultKind, SearchResult, TimelineEvent};
use crate::utils::format_absolute_timestamp;

/// Queries shorter than this (in characters) never reach the matcher
pub const MIN_QUERY_LEN: usize = 2;
/// Upper bound on the number of results returned for one query
pub const MAX_RESULTS: usize = 10;

/// Match a query against cases and evidence items.
///
/// Matching is a case-insensitive substring test:
/// - Case: title, description, or any tag
/// - Evidence: name or description
///
/// Case matches come first, then evidence, each in collection order. The output holds at
/// most [`MAX_RESULTS`] entries, so enough matching cases crowd out all evidence. Missing
/// optional fields never match and never fail.
pub fn match_query(query: &str, cases: &[Case], evidence: &[Evidence]) -> Vec<SearchResult> {
    let needle = query.to_lowercase();

    cases
        .iter()
        .filter(|case| case_matches(case, &needle))
        .map(case_result)
        .chain(evidence.iter().filter(|item| evidence_matches(item, &needle)).map(evidence_result))
        .take(MAX_RESULTS)
        .collect()
}

/// Match a query against a whole catalog.
///
/// Same as [`match_query`] with timeline events (title or description) appended after
/// evidence, under the same [`MAX_RESULTS`] cap.
pub fn match_catalog(query: &str, catalog: &Catalog) -> Vec<SearchResult> {
    let mut results = match_query(query, &catalog.cases, &catalog.evidence);
    if results.len() >= MAX_RESULTS {
        return results;
    }

    let needle = query.to_lowercase();
    let remaining = MAX_RESULTS - results.len();
    results.extend(
        catalog
            .events
            .iter()
            .filter(|event| event_matches(event, &needle))
            .map(event_result)
            .take(remaining),
    );
    results
}

/// Case-insensitive substring test; `needle` must already be lowercase
fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

fn optional_contains(field: Option<&str>, needle: &str) -> bool {
    field.is_some_and(|text| contains_folded(text, needle))
}

fn case_matches(case: &Case, needle: &str) -> bool {
    contains_folded(&case.title, needle)
        || optional_contains(case.description.as_deref(), needle)
        || case.tags.iter().any(|tag| contains_folded(tag, needle))
}

fn evidence_matches(item: &Evidence, needle: &str) -> bool {
    contains_folded(&item.name, needle) || optional_contains(item.description.as_deref(), needle)
}

fn event_matches(event: &TimelineEvent, needle: &str) -> bool {
    contains_folded(&event.title, needle) || optional_contains(event.description.as_deref(), needle)
}

fn case_result(case: &Case) -> SearchResult {
    SearchResult::new(ResultKind::Case, &case.id, &case.title, Some(case.status.to_string()))
}

fn evidence_result(item: &Evidence) -> SearchResult {
    let subtitle = item
        .evidence_type
        .clone()
        .or_else(|| item.case_id.as_ref().map(|case_id| format!("case {}", case_id)));
    SearchResult::new(ResultKind::Evidence, &item.id, &item.name, subtitle)
}

fn event_result(event: &TimelineEvent) -> SearchResult {
    SearchResult::new(
        ResultKind::Event,
        &event.id,
        &event.title,
        Some(format_absolute_timestamp(&event.timestamp)),
    )
}
