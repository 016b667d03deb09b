//! Application state and the transitions that change it
//!
//! Everything the user edits lives in one `AppState`. Callers change it only
//! through the methods below; fields are private.

use chrono::NaiveDate;

use haulsheet_domain::model::{Driver, Expenses, Load, Totals, WeeklySheet};
use haulsheet_domain::service::{calculate_totals, validate_driver};
use haulsheet_types::{Error, Result};

use crate::report::ReportInput;

/// Screen the user is looking at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    DriverList,
    DriverForm,
    Loads,
    Expenses,
    Summary,
}

impl View {
    pub const ALL: [View; 5] = [
        View::DriverList,
        View::DriverForm,
        View::Loads,
        View::Expenses,
        View::Summary,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            View::DriverList => "drivers",
            View::DriverForm => "driver-form",
            View::Loads => "loads",
            View::Expenses => "expenses",
            View::Summary => "summary",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            View::DriverList => "Drivers",
            View::DriverForm => "Driver Form",
            View::Loads => "Weekly Loads",
            View::Expenses => "Expenses",
            View::Summary => "Summary",
        }
    }

    pub fn parse(value: &str) -> Option<View> {
        let value = value.trim();
        View::ALL
            .into_iter()
            .find(|v| v.key().eq_ignore_ascii_case(value) || v.label().eq_ignore_ascii_case(value))
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    company: Option<String>,
    week_of: Option<NaiveDate>,
    drivers: Vec<Driver>,
    draft: Driver,
    editing: Option<usize>,
    report_driver: Option<usize>,
    loads: Vec<Load>,
    expenses: Expenses,
    view: View,
    message: Option<String>,
}

/// Index error using the 1-based numbering shown to users
fn out_of_range(entity: &'static str, index: usize, len: usize) -> Error {
    Error::IndexOutOfRange {
        entity,
        index: index + 1,
        len,
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a saved sheet; its driver becomes the draft form
    pub fn from_sheet(sheet: WeeklySheet) -> Self {
        let editing = sheet.editing_index();
        let report_driver = sheet.report_driver_index();
        Self {
            company: sheet.company,
            week_of: sheet.week_of,
            drivers: sheet.drivers,
            draft: sheet.driver,
            editing,
            report_driver,
            loads: sheet.loads,
            expenses: sheet.expenses,
            ..Self::default()
        }
    }

    pub fn to_sheet(&self) -> WeeklySheet {
        WeeklySheet {
            company: self.company.clone(),
            week_of: self.week_of,
            editing: self.editing.map(|i| i + 1),
            report_driver: self.report_driver.map(|i| i + 1),
            driver: self.draft.clone(),
            drivers: self.drivers.clone(),
            loads: self.loads.clone(),
            expenses: self.expenses.clone(),
        }
    }

    pub fn drivers(&self) -> &[Driver] {
        &self.drivers
    }

    pub fn draft(&self) -> &Driver {
        &self.draft
    }

    pub fn editing(&self) -> Option<usize> {
        self.editing
    }

    pub fn loads(&self) -> &[Load] {
        &self.loads
    }

    pub fn expenses(&self) -> &Expenses {
        &self.expenses
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn week_of(&self) -> Option<NaiveDate> {
        self.week_of
    }

    pub fn set_week_of(&mut self, week_of: Option<NaiveDate>) {
        self.week_of = week_of;
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    pub fn navigate(&mut self, view: View) {
        self.view = view;
    }

    // ----- drivers

    pub fn set_driver_field(&mut self, key: &str, value: &str) -> Result<()> {
        self.draft.set_field(key, value)
    }

    /// Validate the draft and store it, replacing the record being edited or
    /// appending a new one. Returns the roster index. On failure the roster
    /// is untouched and the error text becomes the inline message.
    pub fn save_driver(&mut self) -> Result<usize> {
        if let Err(err) = validate_driver(&self.draft) {
            self.message = Some(err.to_string());
            return Err(err.into());
        }

        let driver = std::mem::take(&mut self.draft);
        let index = match self.editing.take() {
            Some(i) if i < self.drivers.len() => {
                self.drivers[i] = driver;
                i
            }
            _ => {
                self.drivers.push(driver);
                self.drivers.len() - 1
            }
        };
        self.message = Some(format!("Driver #{} saved", index + 1));
        self.view = View::DriverList;
        Ok(index)
    }

    /// Load roster record `index` into the draft for editing
    pub fn edit_driver(&mut self, index: usize) -> Result<()> {
        let driver = self
            .drivers
            .get(index)
            .ok_or_else(|| out_of_range("driver", index, self.drivers.len()))?;
        self.draft = driver.clone();
        self.editing = Some(index);
        self.view = View::DriverForm;
        Ok(())
    }

    pub fn cancel_edit(&mut self) {
        self.draft = Driver::default();
        self.editing = None;
    }

    pub fn delete_driver(&mut self, index: usize) -> Result<Driver> {
        if index >= self.drivers.len() {
            return Err(out_of_range("driver", index, self.drivers.len()));
        }
        let removed = self.drivers.remove(index);

        self.editing = match self.editing {
            Some(e) if e == index => {
                self.draft = Driver::default();
                None
            }
            Some(e) if e > index => Some(e - 1),
            other => other,
        };
        self.report_driver = match self.report_driver {
            Some(r) if r == index => None,
            Some(r) if r > index => Some(r - 1),
            other => other,
        };

        self.message = Some(format!("Driver #{} deleted", index + 1));
        Ok(removed)
    }

    /// Issue the report for roster record `index`
    pub fn use_driver(&mut self, index: usize) -> Result<()> {
        if index >= self.drivers.len() {
            return Err(out_of_range("driver", index, self.drivers.len()));
        }
        self.report_driver = Some(index);
        Ok(())
    }

    /// Driver the report is issued for: the chosen roster record, or the draft
    pub fn report_driver(&self) -> &Driver {
        self.report_driver
            .and_then(|i| self.drivers.get(i))
            .unwrap_or(&self.draft)
    }

    pub fn report_driver_index(&self) -> Option<usize> {
        self.report_driver
    }

    // ----- loads

    /// Append a blank load and return its index
    pub fn add_load(&mut self) -> usize {
        self.loads.push(Load::default());
        self.loads.len() - 1
    }

    pub fn set_load_field(&mut self, index: usize, key: &str, value: &str) -> Result<()> {
        let len = self.loads.len();
        let load = self
            .loads
            .get_mut(index)
            .ok_or_else(|| out_of_range("load", index, len))?;
        load.set_field(key, value)
    }

    pub fn extend_loads(&mut self, loads: impl IntoIterator<Item = Load>) {
        self.loads.extend(loads);
    }

    // ----- expenses

    pub fn set_expense_field(&mut self, key: &str, value: &str) -> Result<()> {
        self.expenses.set_field(key, value)
    }

    // ----- derived

    pub fn totals(&self) -> Totals {
        calculate_totals(&self.loads, &self.expenses)
    }

    pub fn report_input<'a>(&'a self, default_company: &'a str) -> ReportInput<'a> {
        ReportInput::new(
            self.company.as_deref().unwrap_or(default_company),
            self.week_of,
            self.report_driver(),
            &self.loads,
            &self.expenses,
        )
    }
}
