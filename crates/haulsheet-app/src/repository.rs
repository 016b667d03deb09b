//! Repository adapters for sheet files

use std::path::{Path, PathBuf};

use haulsheet_domain::model::WeeklySheet;
use haulsheet_domain::repository::SheetRepository;
use haulsheet_infra::{load_loads_from_csv, FileSheetRepository};
use haulsheet_types::{Error, Result};
use tracing::info;

/// Open a sheet file repository; the extension picks JSON or TOML
pub fn open_sheet_repo(path: impl Into<PathBuf>) -> Result<FileSheetRepository> {
    FileSheetRepository::new(path)
}

/// Read a sheet file
pub fn load_sheet(path: &Path) -> Result<WeeklySheet> {
    open_sheet_repo(path)?.load()
}

/// Read a sheet file, or start an empty sheet when it does not exist yet
pub fn load_sheet_or_default(path: &Path) -> Result<WeeklySheet> {
    match load_sheet(path) {
        Err(Error::FileNotFound(_)) => {
            info!(path = %path.display(), "sheet file not found, starting empty");
            Ok(WeeklySheet::default())
        }
        other => other,
    }
}

pub fn save_sheet(path: &Path, sheet: &WeeklySheet) -> Result<()> {
    open_sheet_repo(path)?.save(sheet)
}

/// Append the loads from a CSV file to a sheet file. Returns the number
/// imported.
pub fn import_loads_into(csv_path: &Path, sheet_path: &Path) -> Result<usize> {
    let loads = load_loads_from_csv(csv_path)?;
    let count = loads.len();
    let mut sheet = load_sheet_or_default(sheet_path)?;
    sheet.loads.extend(loads);
    save_sheet(sheet_path, &sheet)?;
    Ok(count)
}
