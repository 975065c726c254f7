use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::Catalog;
use crate::utils::{MAX_DATA_FILE_BYTES, validate_file_size};

/// Load a catalog snapshot from disk
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    // Open once and check the size on the handle we read from
    let file = File::open(path)
        .with_context(|| format!("Failed to open catalog file: {}", path.display()))?;
    validate_file_size(&file, path, MAX_DATA_FILE_BYTES)?;

    let mut content = String::new();
    BufReader::new(file)
        .read_to_string(&mut content)
        .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;

    let catalog = parse_catalog(&content)
        .with_context(|| format!("Failed to parse catalog file: {}", path.display()))?;

    tracing::info!(
        path = %path.display(),
        cases = catalog.cases.len(),
        evidence = catalog.evidence.len(),
        events = catalog.events.len(),
        "loaded catalog"
    );

    Ok(catalog)
}

/// Parse a catalog snapshot. An empty document is an empty catalog.
pub fn parse_catalog(content: &str) -> Result<Catalog> {
    if content.trim().is_empty() {
        return Ok(Catalog::default());
    }

    let catalog: Catalog = serde_json::from_str(content).context("Invalid catalog JSON")?;
    warn_on_duplicate_ids(&catalog);
    Ok(catalog)
}

/// Duplicate ids make two results share a target path; worth a warning, not a failure
fn warn_on_duplicate_ids(catalog: &Catalog) {
    let groups: [(&str, Vec<&str>); 3] = [
        ("case", catalog.cases.iter().map(|c| c.id.as_str()).collect()),
        ("evidence", catalog.evidence.iter().map(|e| e.id.as_str()).collect()),
        ("event", catalog.events.iter().map(|e| e.id.as_str()).collect()),
    ];

    for (kind, ids) in groups {
        let mut seen = HashSet::new();
        for id in ids {
            if !seen.insert(id) {
                tracing::warn!(kind, id, "duplicate id in catalog");
            }
        }
    }
}
