use crate::core::RegistryLogic;
use crate::db::RecordStore;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::PersonExport;
use crate::export::csv::export_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::export_json;
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export of the people registry.
pub struct ExportLogic;

impl ExportLogic {
    /// Write every person to `file` and return how many rows were written.
    ///
    /// - `format`: csv (flat columns) | json (tagged objects)
    /// - `file`: absolute path of the output file
    pub fn export(
        store: &dyn RecordStore,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let people = RegistryLogic::all_people(store)?;

        if people.is_empty() {
            warning("Registry is empty, nothing exported.");
            return Ok(0);
        }

        match format {
            ExportFormat::Csv => {
                let rows: Vec<PersonExport> = people.iter().map(PersonExport::from).collect();
                export_csv(&rows, path)?
            }
            ExportFormat::Json => export_json(&people, path)?,
        }

        tracing::info!(format = format.as_str(), rows = people.len(), "registry exported");
        Ok(people.len())
    }
}
