use serde::{Deserialize, Serialize};

/// Figures derived from the loads and expenses of one week
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub income: f64,
    pub dispatch_total: f64,
    pub expense_total: f64,
    pub profit: f64,
}
