//! CSV sink for serializable row types.

use std::fs;
use std::path::Path;

use chrono::Local;
use serde::Serialize;
use tracing::info;

use crate::error::Result;

/// Serialize rows to a CSV file, creating parent directories as needed.
/// Headers come from the row type's field names.
pub fn write_csv<P: AsRef<Path>, S: Serialize>(path: P, rows: &[S]) -> Result<()> {
    if let Some(parent) = path.as_ref().parent() {
        fs::create_dir_all(parent)?;
    }
    let mut writer = csv::Writer::from_path(path.as_ref())?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    info!(path = %path.as_ref().display(), rows = rows.len(), "wrote csv");
    Ok(())
}

/// Date-stamped output file name, e.g. `roster 2026-08-25.csv`
pub fn dated_file_name(stem: &str) -> String {
    format!("{} {}.csv", stem, Local::now().format("%Y-%m-%d"))
}
