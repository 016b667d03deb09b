//! Excel export of a weekly sheet

use std::path::Path;

use chrono::Local;
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use tracing::info;

use haulsheet_domain::model::{Totals, WeeklySheet};
use haulsheet_types::{Error, Result};

fn xl(e: XlsxError) -> Error {
    Error::Excel(e.to_string())
}

/// Export the sheet and its totals to an Excel workbook
pub fn export_to_excel(sheet: &WeeklySheet, totals: &Totals, company: &str, output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    let summary_sheet = workbook.add_worksheet();
    write_summary_sheet(summary_sheet, sheet, totals, company)?;

    let loads_sheet = workbook.add_worksheet();
    write_loads_sheet(loads_sheet, sheet)?;

    workbook.save(output_path).map_err(xl)?;
    info!(path = %output_path.display(), loads = sheet.loads.len(), "workbook written");

    Ok(())
}

fn write_summary_sheet(sheet: &mut Worksheet, week: &WeeklySheet, totals: &Totals, company: &str) -> Result<()> {
    sheet.set_name("Summary").map_err(xl)?;

    let header_format = Format::new().set_bold();
    let money_format = Format::new().set_num_format("$#,##0.00");
    let profit_format = Format::new().set_bold().set_num_format("$#,##0.00");

    sheet
        .write_string_with_format(0, 0, format!("{} - Weekly Report", company), &header_format)
        .map_err(xl)?;

    let driver = week.report_driver();
    let week_of = week
        .week_of
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default();
    let generated = Local::now().format("%Y-%m-%d %H:%M").to_string();
    let info_rows = [
        ("Week of:", week_of),
        ("Generated:", generated),
        ("Driver:", driver.name.clone()),
        ("License:", driver.license.clone()),
        ("Phone:", driver.phone.clone()),
        ("Address:", driver.address()),
    ];
    for (i, (label, value)) in info_rows.iter().enumerate() {
        let row = 2 + i as u32;
        sheet.write_string(row, 0, *label).map_err(xl)?;
        sheet.write_string(row, 1, value).map_err(xl)?;
    }

    sheet
        .write_string_with_format(9, 0, "Expenses", &header_format)
        .map_err(xl)?;
    let expense_rows = [
        ("Recurring", week.expenses.recurring.value()),
        ("Additional", week.expenses.additional.value()),
        ("Fuel", week.expenses.fuel.value()),
    ];
    for (i, (label, value)) in expense_rows.iter().enumerate() {
        let row = 10 + i as u32;
        sheet.write_string(row, 0, *label).map_err(xl)?;
        sheet
            .write_number_with_format(row, 1, *value, &money_format)
            .map_err(xl)?;
    }

    sheet
        .write_string_with_format(14, 0, "Totals", &header_format)
        .map_err(xl)?;
    let total_rows = [
        ("Total Income", totals.income),
        ("Total Dispatch", totals.dispatch_total),
        ("Total Expenses", totals.expense_total),
    ];
    for (i, (label, value)) in total_rows.iter().enumerate() {
        let row = 15 + i as u32;
        sheet.write_string(row, 0, *label).map_err(xl)?;
        sheet
            .write_number_with_format(row, 1, *value, &money_format)
            .map_err(xl)?;
    }
    sheet
        .write_string_with_format(18, 0, "Weekly Profit", &header_format)
        .map_err(xl)?;
    sheet
        .write_number_with_format(18, 1, totals.profit, &profit_format)
        .map_err(xl)?;

    sheet.set_column_width(0, 18).map_err(xl)?;
    sheet.set_column_width(1, 36).map_err(xl)?;

    Ok(())
}

fn write_loads_sheet(sheet: &mut Worksheet, week: &WeeklySheet) -> Result<()> {
    sheet.set_name("Loads").map_err(xl)?;

    let header_format = Format::new().set_bold();
    let money_format = Format::new().set_num_format("$#,##0.00");

    let headers = ["#", "Date", "Origin", "Destination", "Price", "Dispatch %", "Dispatch Fee"];
    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(xl)?;
    }

    for (idx, load) in week.loads.iter().enumerate() {
        let row = (idx + 1) as u32;
        sheet.write_number(row, 0, (idx + 1) as f64).map_err(xl)?;
        sheet.write_string(row, 1, &load.date).map_err(xl)?;
        sheet.write_string(row, 2, &load.origin).map_err(xl)?;
        sheet.write_string(row, 3, &load.destination).map_err(xl)?;
        sheet
            .write_number_with_format(row, 4, load.price.value(), &money_format)
            .map_err(xl)?;
        sheet
            .write_number(row, 5, load.dispatch_percentage.value())
            .map_err(xl)?;
        sheet
            .write_number_with_format(row, 6, load.dispatch_fee(), &money_format)
            .map_err(xl)?;
    }

    sheet.set_column_width(1, 12).map_err(xl)?;
    sheet.set_column_width(2, 24).map_err(xl)?;
    sheet.set_column_width(3, 24).map_err(xl)?;
    sheet.set_column_width(6, 14).map_err(xl)?;

    Ok(())
}
