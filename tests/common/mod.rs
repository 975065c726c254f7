//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::TempDir;

/// Builder for a temporary directory holding a catalog snapshot and a history file
pub struct CatalogBuilder {
    temp_dir: TempDir,
    cases: Vec<Value>,
    evidence: Vec<Value>,
    events: Vec<Value>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir, cases: vec![], evidence: vec![], events: vec![] }
    }

    /// Add a case with the given tags
    pub fn with_case(mut self, id: &str, title: &str, tags: &[&str]) -> Self {
        self.cases.push(json!({
            "id": id,
            "title": title,
            "description": format!("Investigation notes for {}", id),
            "tags": tags,
            "status": "open",
        }));
        self
    }

    pub fn with_case_json(mut self, case: Value) -> Self {
        self.cases.push(case);
        self
    }

    pub fn with_evidence(mut self, id: &str, name: &str, case_id: Option<&str>) -> Self {
        self.evidence.push(json!({ "id": id, "name": name, "caseId": case_id }));
        self
    }

    pub fn with_event(mut self, id: &str, title: &str, timestamp: &str) -> Self {
        self.events.push(json!({ "id": id, "title": title, "timestamp": timestamp }));
        self
    }

    /// The scenario catalog: one S3 case, one S3 evidence file, one unrelated case
    pub fn s3_scenario() -> Self {
        Self::new()
            .with_case("1", "AWS S3 Bucket Data Breach", &["aws", "s3"])
            .with_case("2", "Phishing campaign", &["email"])
            .with_evidence("1", "s3_access_logs.csv", Some("1"))
    }

    /// Write `catalog.json` and return the built directory
    pub fn build(self) -> TestCatalog {
        let document = json!({
            "cases": self.cases,
            "evidence": self.evidence,
            "events": self.events,
        });
        let data_file = self.temp_dir.path().join("catalog.json");
        fs::write(&data_file, serde_json::to_string_pretty(&document).unwrap())
            .expect("Failed to write catalog.json");

        let history_file = self.temp_dir.path().join("history.json");
        TestCatalog { temp_dir: self.temp_dir, data_file, history_file }
    }
}

impl Default for CatalogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub struct TestCatalog {
    temp_dir: TempDir,
    pub data_file: PathBuf,
    pub history_file: PathBuf,
}

impl TestCatalog {
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Pre-seed the history file with raw store contents
    pub fn with_history_json(self, content: &str) -> Self {
        fs::write(&self.history_file, content).expect("Failed to write history.json");
        self
    }

    /// History entries as persisted on disk, most recent first
    pub fn persisted_history(&self) -> Vec<String> {
        let raw = fs::read_to_string(&self.history_file).expect("Failed to read history.json");
        let map: serde_json::Map<String, Value> = serde_json::from_str(&raw).unwrap();
        let entries = map.get("case-search.history").and_then(Value::as_str).unwrap_or("[]");
        serde_json::from_str(entries).unwrap()
    }
}
