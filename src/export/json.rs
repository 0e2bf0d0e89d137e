use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::models::Person;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export the tagged people, pretty-printed.
pub(crate) fn export_json(people: &[Person], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(people)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path, people.len());
    Ok(())
}
