//! Output formatting module

use serde::Serialize;

use haulsheet_domain::model::Totals;
use haulsheet_types::{OutputFormat, Result};

/// Outcome of checking one driver record
#[derive(Debug, Clone, Serialize)]
pub struct ValidationRow {
    pub record: String,
    pub name: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub fn output_totals(output_format: OutputFormat, totals: &Totals, load_count: usize) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(totals)?;
        println!("{}", content);
    } else {
        println!("\nWeekly Totals");
        println!("=============");
        println!("Loads:           {}", load_count);
        println!("Total Income:    ${:.2}", totals.income);
        println!("Total Dispatch:  ${:.2}", totals.dispatch_total);
        println!("Total Expenses:  ${:.2}", totals.expense_total);
        println!("-----------------------------");
        println!("Weekly Profit:   ${:.2}", totals.profit);
    }

    Ok(())
}

pub fn output_validation(output_format: OutputFormat, rows: &[ValidationRow]) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(rows)?;
        println!("{}", content);
        return Ok(());
    }

    if rows.is_empty() {
        println!("No driver records to validate");
        return Ok(());
    }

    println!("{:<8} {:<24} {}", "Record", "Name", "Result");
    println!("{}", "-".repeat(60));
    for row in rows {
        let result = match &row.error {
            None => "OK".to_string(),
            Some(error) => error.clone(),
        };
        println!("{:<8} {:<24} {}", row.record, truncate(&row.name, 24), result);
    }

    Ok(())
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len - 3).collect();
        format!("{}...", cut)
    }
}
