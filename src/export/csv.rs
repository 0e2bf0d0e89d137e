use crate::errors::AppResult;
use crate::export::{PersonExport, notify_export_success};
use crate::ui::messages::info;
use std::path::Path;

/// Export CSV (header written by serde from the first row).
pub(crate) fn export_csv(rows: &[PersonExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = ::csv::Writer::from_path(path)?;
    for item in rows {
        wtr.serialize(item)?;
    }
    wtr.flush()?;

    notify_export_success("CSV", path, rows.len());
    Ok(())
}
