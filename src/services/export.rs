//! CSV export of the enriched series.

use crate::error::Result;
use crate::types::EnrichedPoint;
use csv::Writer;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Default export filename, matching the download name users see.
pub const DEFAULT_EXPORT_FILENAME: &str = "analytics_export.csv";

/// Fixed column schema of the export.
pub const CSV_HEADERS: [&str; 5] = [
    "timestamp",
    "overall",
    "technical",
    "communication",
    "problemSolving",
];

fn field(value: Option<f64>) -> String {
    // Absent metrics render as empty fields, never a literal placeholder.
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Serialize the series as CSV into `out`, one row per point in series
/// order, preceded by the header row.
pub fn write_csv<W: Write>(series: &[EnrichedPoint], out: W) -> Result<()> {
    let mut writer = Writer::from_writer(out);
    writer.write_record(CSV_HEADERS)?;

    for p in series {
        writer.write_record(&[
            p.point.timestamp.clone(),
            field(p.point.overall),
            field(p.point.technical),
            field(p.point.communication),
            field(p.point.problem_solving),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Save the series to a CSV file. An empty series produces no file at all.
pub fn export_to_file(series: &[EnrichedPoint], path: impl AsRef<Path>) -> Result<()> {
    if series.is_empty() {
        info!("Skipping CSV export: series is empty");
        return Ok(());
    }

    let file = File::create(&path)?;
    write_csv(series, file)?;
    info!(
        "Exported {} points to {}",
        series.len(),
        path.as_ref().display()
    );
    Ok(())
}
