//! CSV import for weekly loads
//!
//! Accepts exports from spreadsheets and dispatch boards. Files that are not
//! valid UTF-8 are decoded as Windows-1252, which is what Excel writes on
//! US-locale machines.

use std::fs;
use std::path::Path;

use encoding_rs::WINDOWS_1252;
use tracing::{info, warn};

use haulsheet_domain::model::Load;
use haulsheet_types::{Error, Result};

/// Column order used when the file has no header row
const DEFAULT_COLUMNS: [&str; 5] = ["date", "origin", "destination", "price", "dispatch_percentage"];

/// Load weekly loads from a CSV file
///
/// Expected columns (header optional):
/// date, origin, destination, price, dispatch_percentage
pub fn load_loads_from_csv(path: &Path) -> Result<Vec<Load>> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    let bytes = fs::read(path)?;
    let content = decode(&bytes);
    let loads = parse_loads_csv(&content)?;
    info!(path = %path.display(), count = loads.len(), "imported loads from CSV");
    Ok(loads)
}

fn decode(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.trim_start_matches('\u{feff}').to_string(),
        Err(_) => {
            let (decoded, _, had_errors) = WINDOWS_1252.decode(bytes);
            if had_errors {
                warn!("some characters could not be decoded from Windows-1252");
            }
            decoded.into_owned()
        }
    }
}

/// Parse CSV text into loads
pub fn parse_loads_csv(content: &str) -> Result<Vec<Load>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let mut columns: Vec<Option<&'static str>> = DEFAULT_COLUMNS.iter().map(|c| Some(*c)).collect();
    let mut loads = Vec::new();

    for (row_idx, record) in reader.records().enumerate() {
        let record = record.map_err(|e| Error::CsvImport(e.to_string()))?;
        if record.iter().all(|cell| cell.is_empty()) {
            continue;
        }
        if row_idx == 0 && is_header(&record) {
            columns = record.iter().map(column_for_header).collect();
            continue;
        }

        let mut load = Load::default();
        for (cell, column) in record.iter().zip(columns.iter()) {
            if let Some(key) = column {
                load.set_field(key, cell)?;
            }
        }
        loads.push(load);
    }

    Ok(loads)
}

/// A header row carries no data-shaped cells, names a price column, and
/// matches at least two known column names.
fn is_header(record: &csv::StringRecord) -> bool {
    if record.iter().any(looks_like_data) {
        return false;
    }
    let columns: Vec<&str> = record.iter().filter_map(column_for_header).collect();
    columns.len() >= 2 && columns.contains(&"price")
}

/// Numbers and dates start with a digit (or a sign / currency mark)
fn looks_like_data(cell: &str) -> bool {
    let cell = cell.trim_start_matches(['$', '-', '+']);
    cell.starts_with(|c: char| c.is_ascii_digit()) || cell.parse::<f64>().is_ok()
}

fn column_for_header(cell: &str) -> Option<&'static str> {
    let h = cell.trim().to_ascii_lowercase();
    match h.as_str() {
        "date" | "load date" | "pickup date" => Some("date"),
        "origin" | "from" | "pickup" => Some("origin"),
        "destination" | "dest" | "to" | "delivery" => Some("destination"),
        "price" | "rate" | "amount" | "pay" => Some("price"),
        "dispatch" | "dispatch %" | "dispatch percentage" | "dispatch pct" | "percent" | "pct"
        | "%" => Some("dispatch_percentage"),
        _ => None,
    }
}
