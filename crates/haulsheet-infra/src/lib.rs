//! Infrastructure layer - sheet file persistence and CSV import

pub mod loads_csv;
pub mod sheet_file;

pub use loads_csv::{load_loads_from_csv, parse_loads_csv};
pub use sheet_file::{FileSheetRepository, SheetFileFormat};
