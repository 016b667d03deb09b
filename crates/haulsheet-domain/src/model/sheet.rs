//! Weekly sheet: one session's worth of entries

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Driver, Expenses, Load, Totals};
use crate::service::calculate_totals;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeeklySheet {
    /// Company name override for the report title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub week_of: Option<NaiveDate>,
    /// Roster number (1-based) the driver form was loaded from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editing: Option<usize>,
    /// Roster number (1-based) the report is issued for; the form driver when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_driver: Option<usize>,
    /// Driver form contents
    pub driver: Driver,
    pub drivers: Vec<Driver>,
    pub loads: Vec<Load>,
    pub expenses: Expenses,
}

impl WeeklySheet {
    pub fn totals(&self) -> Totals {
        calculate_totals(&self.loads, &self.expenses)
    }

    /// Roster index of the record being edited, if it still exists
    pub fn editing_index(&self) -> Option<usize> {
        self.roster_index(self.editing)
    }

    /// Roster index of the report driver, if it still exists
    pub fn report_driver_index(&self) -> Option<usize> {
        self.roster_index(self.report_driver)
    }

    /// Driver the report is issued for
    pub fn report_driver(&self) -> &Driver {
        self.report_driver_index()
            .map(|i| &self.drivers[i])
            .unwrap_or(&self.driver)
    }

    fn roster_index(&self, number: Option<usize>) -> Option<usize> {
        number
            .and_then(|n| n.checked_sub(1))
            .filter(|&i| i < self.drivers.len())
    }
}
