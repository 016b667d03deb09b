//! Configuration management for haulsheet
//!
//! Config stored at: ~/.config/haulsheet/config.json

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use haulsheet_types::{ConfigError, OutputFormat, PageSize, Result};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Company name printed in the report title
    #[serde(default = "default_company_name")]
    pub company_name: String,

    /// File name the report is saved under
    #[serde(default = "default_report_file_name")]
    pub report_file_name: String,

    /// Directory reports are written to (current directory if unset)
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    /// Default output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Paper size of the report
    #[serde(default)]
    pub page_size: PageSize,
}

fn default_company_name() -> String {
    "HG Transport LLC".to_string()
}

fn default_report_file_name() -> String {
    "weekly_report.pdf".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            company_name: default_company_name(),
            report_file_name: default_report_file_name(),
            output_dir: None,
            output_format: OutputFormat::default(),
            page_size: PageSize::default(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("haulsheet");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Directory reports are written to
    pub fn report_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    /// Load config from the default location, or defaults if absent
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from a specific file, or defaults if absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| ConfigError::ParseError(e.to_string()))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save config to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Haulsheet Configuration")?;
        writeln!(f, "=======================")?;
        writeln!(f)?;
        writeln!(f, "Company:        {}", self.company_name)?;
        writeln!(f, "Report file:    {}", self.report_file_name)?;
        writeln!(f, "Output dir:     {}", self.report_dir().display())?;
        writeln!(f, "Output format:  {}", self.output_format)?;
        writeln!(f, "Page size:      {}", self.page_size)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}
