use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultKind {
    Case,
    Evidence,
    Event,
}

impl ResultKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultKind::Case => "case",
            ResultKind::Evidence => "evidence",
            ResultKind::Event => "event",
        }
    }

    /// Route prefix the dashboard uses for this kind of record
    pub fn route(&self) -> &'static str {
        match self {
            ResultKind::Case => "/cases",
            ResultKind::Evidence => "/evidence",
            ResultKind::Event => "/timeline",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: String,
    pub kind: ResultKind,
    pub title: String,
    pub subtitle: Option<String>,
    pub target_path: String,
}

impl SearchResult {
    pub fn new(kind: ResultKind, id: &str, title: &str, subtitle: Option<String>) -> Self {
        Self {
            id: id.to_string(),
            kind,
            title: title.to_string(),
            subtitle,
            target_path: format!("{}/{}", kind.route(), id),
        }
    }
}
