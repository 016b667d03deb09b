//! Repository trait definitions

use haulsheet_types::Error;

use crate::model::WeeklySheet;

/// Source and sink for weekly sheet documents
pub trait SheetRepository {
    /// Read the sheet
    fn load(&self) -> Result<WeeklySheet, Error>;

    /// Write the sheet, replacing any previous contents
    fn save(&self, sheet: &WeeklySheet) -> Result<(), Error>;
}
