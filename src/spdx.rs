use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// One entry of the SPDX license information table.
#[derive(Debug, Clone, Deserialize)]
pub struct SpdxEntry {
    /// Defaults to the table key when absent from the entry body.
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub osi_approved: bool,
    #[serde(default)]
    pub fsf_libre: bool,
    #[serde(default)]
    pub url: String,
}

/// Lookup result for a license name or identifier.
///
/// `found` is false (and `spdx_id` empty) when no table entry matched; the
/// queried name is echoed back in `name`.
#[derive(Debug, Clone, Serialize)]
pub struct SpdxInfo {
    pub spdx_id: Option<String>,
    pub name: String,
    pub osi_approved: bool,
    pub fsf_libre: bool,
    pub url: String,
    pub found: bool,
}

/// SPDX license metadata table with case-insensitive fuzzy lookup.
#[derive(Debug, Clone)]
pub struct SpdxCatalog {
    entries: Vec<SpdxEntry>,
}

impl SpdxCatalog {
    /// Load the table from `path`, falling back to the built-in entries on
    /// any failure.
    pub fn load_or_default(path: Option<&Path>) -> SpdxCatalog {
        match path {
            Some(p) => Self::from_file(p).unwrap_or_default(),
            None => SpdxCatalog::default(),
        }
    }

    pub fn from_file(path: &Path) -> Result<SpdxCatalog> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read SPDX table {}", path.display()))?;
        let map: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(&content).context("SPDX table is not a JSON object")?;

        let mut entries = Vec::with_capacity(map.len());
        for (id, value) in map {
            let mut entry: SpdxEntry = serde_json::from_value(value)
                .with_context(|| format!("invalid SPDX entry {id:?}"))?;
            if entry.id.is_empty() {
                entry.id = id;
            }
            entries.push(entry);
        }
        Ok(SpdxCatalog { entries })
    }

    /// Look up SPDX metadata for a license name or identifier.
    ///
    /// Matches when the queried name is a case-insensitive substring of an
    /// entry's full name, or equals its id exactly. The first matching entry
    /// in table order wins.
    pub fn lookup(&self, license: &str) -> SpdxInfo {
        let query = license.to_lowercase();
        for entry in &self.entries {
            if entry.name.to_lowercase().contains(&query) || license == entry.id {
                return SpdxInfo {
                    spdx_id: Some(entry.id.clone()),
                    name: entry.name.clone(),
                    osi_approved: entry.osi_approved,
                    fsf_libre: entry.fsf_libre,
                    url: entry.url.clone(),
                    found: true,
                };
            }
        }

        SpdxInfo {
            spdx_id: None,
            name: license.to_string(),
            osi_approved: false,
            fsf_libre: false,
            url: String::new(),
            found: false,
        }
    }
}

impl Default for SpdxCatalog {
    /// Built-in metadata for the six default catalogue licenses.
    fn default() -> Self {
        let entry = |id: &str, name: &str| SpdxEntry {
            id: id.to_string(),
            name: name.to_string(),
            osi_approved: true,
            fsf_libre: true,
            url: format!("https://spdx.org/licenses/{id}.html"),
        };

        SpdxCatalog {
            entries: vec![
                entry("MIT", "MIT License"),
                entry("Apache-2.0", "Apache License 2.0"),
                entry("GPL-2.0", "GNU General Public License v2.0"),
                entry("GPL-3.0", "GNU General Public License v3.0"),
                entry("BSD-3-Clause", "BSD 3-Clause License"),
                entry("LGPL-2.1", "GNU Lesser General Public License v2.1"),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_lookup_by_exact_id() {
        let info = SpdxCatalog::default().lookup("Apache-2.0");
        assert!(info.found);
        assert_eq!(info.spdx_id.as_deref(), Some("Apache-2.0"));
        assert_eq!(info.name, "Apache License 2.0");
        assert!(info.osi_approved);
        assert_eq!(info.url, "https://spdx.org/licenses/Apache-2.0.html");
    }

    #[test]
    fn test_lookup_by_name_substring() {
        let info = SpdxCatalog::default().lookup("mit license");
        assert!(info.found);
        assert_eq!(info.spdx_id.as_deref(), Some("MIT"));
    }

    #[test]
    fn test_lookup_coarse_substring_takes_first_entry() {
        // "GPL" is a substring of no full name, but "General Public License"
        // matches both GPL entries; table order decides.
        let info = SpdxCatalog::default().lookup("General Public License");
        assert!(info.found);
        assert_eq!(info.spdx_id.as_deref(), Some("GPL-2.0"));
    }

    #[test]
    fn test_lookup_not_found() {
        let info = SpdxCatalog::default().lookup("Totally Custom License");
        assert!(!info.found);
        assert!(info.spdx_id.is_none());
        assert_eq!(info.name, "Totally Custom License");
        assert!(!info.osi_approved);
        assert!(info.url.is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let mut f = NamedTempFile::new().unwrap();
        write!(
            f,
            r#"{{"ISC": {{"id": "ISC", "name": "ISC License", "osi_approved": true, "url": "https://spdx.org/licenses/ISC.html"}}}}"#
        )
        .unwrap();

        let catalog = SpdxCatalog::from_file(f.path()).unwrap();
        let info = catalog.lookup("ISC");
        assert!(info.found);
        assert!(!info.fsf_libre);
    }

    #[test]
    fn test_load_failure_falls_back_to_default() {
        let catalog = SpdxCatalog::load_or_default(Some(Path::new("/nonexistent/spdx.json")));
        assert!(catalog.lookup("MIT").found);
    }
}
