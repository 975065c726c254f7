//! Dashboard statistics over a loaded catalog

use chrono::{DateTime, Utc};

use crate::models::{CaseStatus, Catalog};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_cases: usize,
    pub open_cases: usize,
    pub in_progress_cases: usize,
    pub closed_cases: usize,
    pub total_evidence: usize,
    /// Evidence items not linked to any case in the catalog
    pub unlinked_evidence: usize,
    pub total_events: usize,
    pub oldest_event: Option<DateTime<Utc>>,
    pub newest_event: Option<DateTime<Utc>>,
}

impl DashboardStats {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let count_status =
            |status: CaseStatus| catalog.cases.iter().filter(|c| c.status == status).count();

        let unlinked_evidence = catalog
            .evidence
            .iter()
            .filter(|e| match &e.case_id {
                Some(case_id) => !catalog.cases.iter().any(|c| &c.id == case_id),
                None => true,
            })
            .count();

        Self {
            total_cases: catalog.cases.len(),
            open_cases: count_status(CaseStatus::Open),
            in_progress_cases: count_status(CaseStatus::InProgress),
            closed_cases: count_status(CaseStatus::Closed),
            total_evidence: catalog.evidence.len(),
            unlinked_evidence,
            total_events: catalog.events.len(),
            oldest_event: catalog.events.iter().map(|e| e.timestamp).min(),
            newest_event: catalog.events.iter().map(|e| e.timestamp).max(),
        }
    }
}
