//! Flat term-list files: one entry per line, blank lines and duplicate
//! lines ignored. These back the keyword, skip-word, and collection lists
//! loaded once at startup.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::warn;

/// Load a term list. A missing file is treated as an empty list (with a
/// warning) so a fresh working directory starts usable.
pub fn load_terms(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        warn!(path = %path.display(), "term-list file not found, starting empty");
        return Ok(Vec::new());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading term list {}", path.display()))?;

    let mut terms: Vec<String> = Vec::new();
    for line in content.lines() {
        let term = line.trim();
        if term.is_empty() || terms.iter().any(|t| t == term) {
            continue;
        }
        terms.push(term.to_string());
    }
    Ok(terms)
}
