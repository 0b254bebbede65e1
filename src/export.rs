//! CSV export of the collected dataset.

use crate::meli::models::Record;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

/// Header row naming the five projected fields.
pub const CSV_HEADER: &str = "item_id,title,price,domain_id,brand";

/// Serializes records to CSV, one row per record in dataset order.
pub fn to_csv(records: &[Record]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(CSV_HEADER.to_string());

    for record in records {
        let title = csv_escape(&record.title);
        let brand = record.brand.as_deref().map(csv_escape).unwrap_or_default();

        lines.push(format!(
            "{},{},{},{},{}",
            record.item_id, title, record.price, record.domain_id, brand
        ));
    }

    lines.join("\n") + "\n"
}

/// Writes the dataset to `path`, replacing any existing file.
pub fn write_csv(records: &[Record], path: &Path) -> Result<()> {
    debug!("Writing {} records to {}", records.len(), path.display());

    std::fs::write(path, to_csv(records))
        .with_context(|| format!("Failed to write dataset to {}", path.display()))
}

fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
