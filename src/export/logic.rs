// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{events_to_rows, trips_to_rows};
use crate::export::{ExportFormat, notify_export_success};
use crate::models::Trip;
use crate::ui::messages::warning;
use std::io::BufRead;
use std::path::Path;

/// High-level export of a fetched trip list.
pub struct ExportLogic;

impl ExportLogic {
    /// - `format`: csv | json
    /// - `file`: absolute output path
    /// - `events`: CSV only, one row per event instead of per trip;
    ///   rejected for JSON
    ///
    /// Returns `false` when there was nothing to write.
    pub fn export<R: BufRead>(
        trips: &[Trip],
        format: &ExportFormat,
        file: &str,
        events: bool,
        force: bool,
        input: &mut R,
    ) -> AppResult<bool> {
        if events && matches!(format, ExportFormat::Json) {
            return Err(AppError::Export("--events applies to CSV export only".into()));
        }

        let path = Path::new(file);
        ensure_writable(path, force, input)?;

        let written = match format {
            ExportFormat::Json => write_unless_empty(trips, |t| export_json(t, path))?,
            ExportFormat::Csv if events => {
                write_unless_empty(&events_to_rows(trips), |rows| export_csv(rows, path))?
            }
            ExportFormat::Csv => write_unless_empty(&trips_to_rows(trips), |rows| export_csv(rows, path))?,
        };

        if !written {
            let what = if events { "events" } else { "trips" };
            warning(format!("No {what} found, nothing exported."));
            return Ok(false);
        }

        tracing::debug!(trips = trips.len(), format = format.as_str(), "Export written");
        notify_export_success(&format.as_str().to_uppercase(), path);
        Ok(true)
    }
}

/// The file is only created when there is at least one row.
fn write_unless_empty<T>(rows: &[T], write: impl FnOnce(&[T]) -> AppResult<()>) -> AppResult<bool> {
    if rows.is_empty() {
        return Ok(false);
    }
    write(rows)?;
    Ok(true)
}
