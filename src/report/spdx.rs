use std::collections::HashSet;

use crate::models::ExportRecord;
use crate::spdx::SpdxCatalog;

/// Identifier used for results without a concluded license.
const NO_ASSERTION: &str = "NOASSERTION";

/// Render a batch of results as an SPDX-2.3 tag:value document.
///
/// Results are grouped by SPDX id in first-seen order, one package block per
/// group, followed by an extracted-licenses section listing the unique
/// concluded ids in sorted order.
pub fn render(records: &[ExportRecord], catalog: &SpdxCatalog) -> String {
    let mut lines = vec![
        "SPDXVersion: SPDX-2.3".to_string(),
        "DataLicense: CC0-1.0".to_string(),
        "SPDXID: SPDXRef-DOCUMENT".to_string(),
        "DocumentName: License Detection Report".to_string(),
        "DocumentNamespace: https://example.com/license-detection".to_string(),
        String::new(),
        "## Package Information".to_string(),
        String::new(),
    ];

    // Group by SPDX id, keeping first-seen order for determinism.
    let mut groups: Vec<(String, Vec<&ExportRecord>)> = Vec::new();
    for record in records {
        let spdx_id = record.spdx_id.as_deref().unwrap_or(NO_ASSERTION);
        match groups.iter_mut().find(|(id, _)| id == spdx_id) {
            Some((_, group)) => group.push(record),
            None => groups.push((spdx_id.to_string(), vec![record])),
        }
    }

    for (package_num, (spdx_id, group)) in groups.iter().enumerate() {
        let n = package_num + 1;
        lines.push(format!("## Package {n}"));
        lines.push(format!("PackageName: Fragment-{n}"));
        lines.push(format!("SPDXID: SPDXRef-Package-{n}"));
        lines.push(format!("PackageLicenseDeclared: {spdx_id}"));
        lines.push(format!("PackageLicenseConcluded: {spdx_id}"));
        lines.push("PackageCopyrightText: NOASSERTION".to_string());
        lines.push(format!(
            "PackageComment: Detected with confidence {}",
            group[0].confidence
        ));
        lines.push(String::new());
    }

    lines.push("## Extracted Licenses".to_string());
    lines.push(String::new());

    let unique: HashSet<&str> = records
        .iter()
        .filter_map(|r| r.spdx_id.as_deref())
        .filter(|id| *id != NO_ASSERTION)
        .collect();
    let mut unique: Vec<&str> = unique.into_iter().collect();
    unique.sort_unstable();

    for spdx_id in unique {
        let info = catalog.lookup(spdx_id);
        lines.push(format!("LicenseID: LicenseRef-{spdx_id}"));
        lines.push(format!("ExtractedText: {}", info.name));
        lines.push(String::new());
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, spdx_id: Option<&str>, confidence: f64) -> ExportRecord {
        ExportRecord {
            id: id.to_string(),
            detected_license: spdx_id.unwrap_or("Unknown").to_string(),
            spdx_id: spdx_id.map(str::to_string),
            confidence,
            is_ambiguous: false,
            original_text: String::new(),
            matches: Vec::new(),
        }
    }

    #[test]
    fn test_document_preamble() {
        let doc = render(&[], &SpdxCatalog::default());
        assert!(doc.starts_with("SPDXVersion: SPDX-2.3\nDataLicense: CC0-1.0\n"));
        assert!(doc.contains("DocumentName: License Detection Report"));
    }

    #[test]
    fn test_groups_by_spdx_id_in_first_seen_order() {
        let records = vec![
            record("1", Some("MIT"), 0.9),
            record("2", Some("Apache-2.0"), 0.85),
            record("3", Some("MIT"), 0.7),
        ];
        let doc = render(&records, &SpdxCatalog::default());

        // Two packages: MIT first (first seen), Apache second.
        assert!(doc.contains("## Package 1\nPackageName: Fragment-1"));
        assert!(doc.contains("## Package 2"));
        assert!(!doc.contains("## Package 3"));

        let mit_pos = doc.find("PackageLicenseDeclared: MIT").unwrap();
        let apache_pos = doc.find("PackageLicenseDeclared: Apache-2.0").unwrap();
        assert!(mit_pos < apache_pos);

        // The group comment carries the first member's confidence.
        assert!(doc.contains("PackageComment: Detected with confidence 0.9"));
    }

    #[test]
    fn test_missing_spdx_id_becomes_noassertion() {
        let doc = render(&[record("1", None, 0.0)], &SpdxCatalog::default());
        assert!(doc.contains("PackageLicenseDeclared: NOASSERTION"));
        // NOASSERTION never appears in the extracted licenses section.
        assert!(!doc.contains("LicenseID: LicenseRef-NOASSERTION"));
    }

    #[test]
    fn test_extracted_licenses_sorted_and_unique() {
        let records = vec![
            record("1", Some("MIT"), 0.9),
            record("2", Some("Apache-2.0"), 0.85),
            record("3", Some("MIT"), 0.7),
        ];
        let doc = render(&records, &SpdxCatalog::default());

        let license_ids: Vec<&str> = doc
            .lines()
            .filter(|l| l.starts_with("LicenseID: "))
            .collect();
        assert_eq!(
            license_ids,
            vec!["LicenseID: LicenseRef-Apache-2.0", "LicenseID: LicenseRef-MIT"]
        );
        assert!(doc.contains("ExtractedText: MIT License"));
        assert!(doc.contains("ExtractedText: Apache License 2.0"));
    }
}
