//! File-based implementation of SheetRepository
//!
//! Sheets are stored as JSON or TOML, chosen by file extension.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use haulsheet_domain::model::WeeklySheet;
use haulsheet_domain::repository::SheetRepository;
use haulsheet_types::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetFileFormat {
    Json,
    Toml,
}

impl SheetFileFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("json") => Ok(SheetFileFormat::Json),
            Some("toml") => Ok(SheetFileFormat::Toml),
            _ => Err(Error::SheetFormat(format!(
                "unsupported sheet file (expected .json or .toml): {}",
                path.display()
            ))),
        }
    }
}

/// Weekly sheet stored in a single file
pub struct FileSheetRepository {
    path: PathBuf,
    format: SheetFileFormat,
}

impl FileSheetRepository {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let format = SheetFileFormat::from_path(&path)?;
        Ok(Self { path, format })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> SheetFileFormat {
        self.format
    }

    fn decode(&self, content: &str) -> Result<WeeklySheet> {
        match self.format {
            SheetFileFormat::Json => Ok(serde_json::from_str(content)?),
            SheetFileFormat::Toml => {
                toml::from_str(content).map_err(|e| Error::SheetFormat(e.to_string()))
            }
        }
    }

    fn encode(&self, sheet: &WeeklySheet) -> Result<String> {
        match self.format {
            SheetFileFormat::Json => Ok(serde_json::to_string_pretty(sheet)?),
            SheetFileFormat::Toml => {
                toml::to_string_pretty(sheet).map_err(|e| Error::SheetFormat(e.to_string()))
            }
        }
    }
}

impl SheetRepository for FileSheetRepository {
    fn load(&self) -> Result<WeeklySheet> {
        if !self.path.exists() {
            return Err(Error::FileNotFound(self.path.display().to_string()));
        }
        let content = fs::read_to_string(&self.path)?;
        let sheet = self.decode(&content)?;
        debug!(
            path = %self.path.display(),
            loads = sheet.loads.len(),
            drivers = sheet.drivers.len(),
            "loaded sheet"
        );
        Ok(sheet)
    }

    fn save(&self, sheet: &WeeklySheet) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = self.encode(sheet)?;
        fs::write(&self.path, content)?;
        debug!(path = %self.path.display(), "saved sheet");
        Ok(())
    }
}
