//! Checklist file loading
//!
//! The fixed URL list is client-side data: a TOML file carried alongside
//! the tool, never served. The shared store may hold keys outside this
//! list; those are tolerated and simply not rendered.

use crate::error::ClientError;
use serde::Deserialize;
use std::path::Path;

/// Shape of the checklist file
#[derive(Debug, Deserialize)]
struct ChecklistFile {
    urls: Vec<String>,
}

/// Load the fixed URL list from a TOML file with a top-level `urls` array
///
/// ```toml
/// urls = [
///     "https://zetarmold.com/",
///     "https://zetarmold.com/about-us/",
/// ]
/// ```
pub fn load_checklist_urls(path: &Path) -> Result<Vec<String>, ClientError> {
    let raw = std::fs::read_to_string(path)?;
    let file: ChecklistFile = toml::from_str(&raw)?;
    Ok(file.urls)
}
