use crate::models::ExportRecord;

/// Maximum number of characters of source text carried into a CSV row.
const TEXT_PREVIEW_LEN: usize = 100;

const HEADER: &str = "ID,Detected License,SPDX ID,Confidence,Is Ambiguous,Original Text";

/// Render a batch of results as CSV: the fixed header row plus one row per
/// record. Fields containing the delimiter, quotes, or line breaks are
/// quoted; the original text is truncated to its first 100 characters.
pub fn render(records: &[ExportRecord]) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');

    for record in records {
        let preview: String = record.original_text.chars().take(TEXT_PREVIEW_LEN).collect();
        let row = [
            escape(&record.id),
            escape(&record.detected_license),
            escape(record.spdx_id.as_deref().unwrap_or("")),
            record.confidence.to_string(),
            record.is_ambiguous.to_string(),
            escape(&preview),
        ];
        out.push_str(&row.join(","));
        out.push('\n');
    }

    out
}

/// Quote a field when it contains the delimiter, a quote, or a line break;
/// embedded quotes are doubled.
fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
