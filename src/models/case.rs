use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStatus {
    #[default]
    Open,
    #[serde(alias = "in-progress", alias = "inProgress")]
    InProgress,
    Closed,
}

impl CaseStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CaseStatus::Open => "Open",
            CaseStatus::InProgress => "In progress",
            CaseStatus::Closed => "Closed",
        }
    }
}

impl fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Case {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub status: CaseStatus,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evidence {
    pub id: String,
    #[serde(default, alias = "caseId")]
    pub case_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "type", alias = "evidenceType")]
    pub evidence_type: Option<String>,
    #[serde(default, alias = "collectedAt")]
    pub collected_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub id: String,
    #[serde(default, alias = "caseId")]
    pub case_id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// Snapshot of the collections fetched from the dashboard backend.
///
/// Every array is optional in the serialized form so a partial export still loads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub cases: Vec<Case>,
    #[serde(default)]
    pub evidence: Vec<Evidence>,
    #[serde(default, alias = "timeline")]
    pub events: Vec<TimelineEvent>,
}

impl Catalog {
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty() && self.evidence.is_empty() && self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cases.len() + self.evidence.len() + self.events.len()
    }
}
