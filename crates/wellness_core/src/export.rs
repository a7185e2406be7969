//! CSV export of the journal entry history.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::sanitize::unescape_markup;
use crate::types::{JournalEntry, JournalRow};

/// Placeholder for columns with no recorded value.
const MISSING: &str = "N/A";

/// Export column order. Fixed; the header row is generated from it.
pub const COLUMNS: [&str; 11] = [
    "id",
    "created_at",
    "energy",
    "gratitude_1",
    "gratitude_2",
    "gratitude_3",
    "journal",
    "tags",
    "sleep_hours",
    "water_cups",
    "timestamp",
];

/// Parse a row's opaque payload into a structured entry.
///
/// Rows written by older form versions hold plain text rather than a
/// serialized record; those fall back to an entry whose only populated
/// field is `journal` (the raw text), so every other column renders as
/// the missing-value placeholder.
pub fn parse_journal_payload(raw: &str) -> JournalEntry {
    serde_json::from_str(raw).unwrap_or_else(|_| JournalEntry {
        journal: raw.to_string(),
        ..JournalEntry::default()
    })
}

/// Encode the entry history as comma-separated text.
///
/// Returns `None` for an empty history so the caller suppresses the
/// export action entirely.
pub fn journal_csv(rows: &[JournalRow]) -> Option<String> {
    if rows.is_empty() {
        return None;
    }

    let mut out = String::new();
    out.push_str(&COLUMNS.join(","));
    out.push('\n');

    for row in rows {
        let entry = parse_journal_payload(&row.entry);
        let fields = flatten(row, &entry);
        let encoded: Vec<String> = fields.iter().map(|f| csv_field(f)).collect();
        out.push_str(&encoded.join(","));
        out.push('\n');
    }

    debug!(rows = rows.len(), "encoded journal export");
    Some(out)
}

/// Download filename embedding the export timestamp.
pub fn export_filename(now: DateTime<Utc>) -> String {
    format!("wellness-entries-{}.csv", now.format("%Y%m%d%H%M%S"))
}

fn flatten(row: &JournalRow, entry: &JournalEntry) -> [String; 11] {
    let gratitude = |i: usize| {
        entry
            .gratitude
            .get(i)
            .filter(|g| !g.is_empty())
            .cloned()
            .unwrap_or_else(|| MISSING.to_string())
    };
    let journal = if entry.journal.is_empty() {
        MISSING.to_string()
    } else {
        unescape_markup(&entry.journal)
    };
    let tags = if entry.tags.is_empty() {
        MISSING.to_string()
    } else {
        entry.tags.join("|")
    };

    [
        or_missing(&row.id),
        or_missing(&row.created_at),
        entry
            .energy
            .map(|e| e.to_string())
            .unwrap_or_else(|| MISSING.to_string()),
        gratitude(0),
        gratitude(1),
        gratitude(2),
        journal,
        tags,
        entry
            .sleep_hours
            .map(|h| h.to_string())
            .unwrap_or_else(|| MISSING.to_string()),
        entry
            .water_cups
            .map(|c| c.to_string())
            .unwrap_or_else(|| MISSING.to_string()),
        entry
            .timestamp
            .clone()
            .unwrap_or_else(|| MISSING.to_string()),
    ]
}

fn or_missing(value: &str) -> String {
    if value.is_empty() {
        MISSING.to_string()
    } else {
        value.to_string()
    }
}

/// Quote a field when it contains a comma, quote, or line break;
/// internal quotes are doubled.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
