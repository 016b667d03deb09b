//! Report layout as a flat list of drawing commands
//!
//! Positions are not decided here. The paginator walks the commands with a
//! vertical cursor and places each line.

use super::ReportInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontSize {
    Heading,
    Body,
}

impl FontSize {
    /// Size in points
    pub fn points(&self) -> f32 {
        match self {
            FontSize::Heading => 14.0,
            FontSize::Body => 12.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LayoutCommand {
    /// Font used by the following lines
    SetFont(FontSize),
    /// One line of text; the cursor moves down by `advance` mm afterwards
    Line { text: String, advance: f32 },
    /// Move the cursor down without drawing
    Skip(f32),
    /// Start a new page unless the next `span` mm below the cursor still fit
    KeepTogether(f32),
}

pub const DRIVER_LINE_ADVANCE: f32 = 10.0;
pub const ROW_ADVANCE: f32 = 7.0;
pub const SECTION_ADVANCE: f32 = 10.0;

fn line(text: impl Into<String>, advance: f32) -> LayoutCommand {
    LayoutCommand::Line {
        text: text.into(),
        advance,
    }
}

/// Dollar amount with two decimals
pub fn money(value: f64) -> String {
    format!("${:.2}", value)
}

pub fn build_layout(input: &ReportInput<'_>) -> Vec<LayoutCommand> {
    let driver = input.driver;
    let mut commands = vec![
        LayoutCommand::SetFont(FontSize::Heading),
        line(input.title(), DRIVER_LINE_ADVANCE),
    ];
    if let Some(week) = input.week_of {
        commands.push(line(format!("Week of {}", week.format("%Y-%m-%d")), DRIVER_LINE_ADVANCE));
    }
    commands.extend([
        line(format!("Driver: {}", driver.name), DRIVER_LINE_ADVANCE),
        line(format!("License: {}", driver.license), DRIVER_LINE_ADVANCE),
        line(format!("Phone: {}", driver.phone), DRIVER_LINE_ADVANCE),
        line(format!("Address: {}", driver.address()), DRIVER_LINE_ADVANCE),
        LayoutCommand::SetFont(FontSize::Body),
    ]);

    for (i, load) in input.loads.iter().enumerate() {
        commands.push(LayoutCommand::KeepTogether(ROW_ADVANCE));
        commands.push(line(
            format!(
                "Load {}: {}, {} - {}",
                i + 1,
                load.date,
                load.origin,
                load.destination
            ),
            ROW_ADVANCE,
        ));
        commands.push(line(
            format!(
                "Price: ${} | Dispatch: {}%",
                load.price.raw(),
                load.dispatch_percentage.raw()
            ),
            SECTION_ADVANCE,
        ));
    }

    let expenses = input.expenses;
    commands.extend([
        LayoutCommand::KeepTogether(2.0 * ROW_ADVANCE),
        line(format!("Recurring Expenses: ${}", expenses.recurring.raw()), ROW_ADVANCE),
        line(format!("Additional Expenses: ${}", expenses.additional.raw()), ROW_ADVANCE),
        line(format!("Fuel Expenses: ${}", expenses.fuel.raw()), SECTION_ADVANCE),
    ]);

    let totals = &input.totals;
    commands.extend([
        LayoutCommand::KeepTogether(3.0 * ROW_ADVANCE + SECTION_ADVANCE),
        line(format!("Total Income: {}", money(totals.income)), ROW_ADVANCE),
        line(format!("Total Dispatch: {}", money(totals.dispatch_total)), ROW_ADVANCE),
        line(format!("Total Expenses: {}", money(totals.expense_total)), ROW_ADVANCE),
        LayoutCommand::Skip(SECTION_ADVANCE),
        LayoutCommand::SetFont(FontSize::Heading),
        line(format!("Weekly Profit: {}", money(totals.profit)), 0.0),
    ]);

    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use haulsheet_domain::model::{Driver, Expenses, Load, NumericField};
    use haulsheet_domain::service::calculate_totals;

    fn lines(commands: &[LayoutCommand]) -> Vec<&str> {
        commands
            .iter()
            .filter_map(|c| match c {
                LayoutCommand::Line { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    fn sample() -> (Driver, Vec<Load>, Expenses) {
        let driver = Driver {
            name: "Ana Gomez".to_string(),
            license: "TX-99812".to_string(),
            phone: "9565551234".to_string(),
            street_address: "12 Main St".to_string(),
            city_state_zip: "Laredo, TX 78040".to_string(),
            ..Default::default()
        };
        let loads = vec![
            Load {
                date: "2024-03-04".to_string(),
                origin: "Laredo".to_string(),
                destination: "Dallas".to_string(),
                price: NumericField::new("1000"),
                dispatch_percentage: NumericField::new("10"),
            },
            Load {
                date: "2024-03-06".to_string(),
                origin: "Dallas".to_string(),
                destination: "Houston".to_string(),
                price: NumericField::new("500"),
                dispatch_percentage: NumericField::new("20"),
            },
        ];
        let expenses = Expenses {
            recurring: NumericField::new("100"),
            additional: NumericField::new("50"),
            fuel: NumericField::new("200"),
        };
        (driver, loads, expenses)
    }

    #[test]
    fn test_line_sequence() {
        let (driver, loads, expenses) = sample();
        let input = ReportInput {
            company: "HG Transport LLC",
            week_of: None,
            driver: &driver,
            loads: &loads,
            expenses: &expenses,
            totals: calculate_totals(&loads, &expenses),
        };
        let commands = build_layout(&input);
        assert_eq!(
            lines(&commands),
            vec![
                "HG Transport LLC - Weekly Report",
                "Driver: Ana Gomez",
                "License: TX-99812",
                "Phone: 9565551234",
                "Address: 12 Main St, Laredo, TX 78040",
                "Load 1: 2024-03-04, Laredo - Dallas",
                "Price: $1000 | Dispatch: 10%",
                "Load 2: 2024-03-06, Dallas - Houston",
                "Price: $500 | Dispatch: 20%",
                "Recurring Expenses: $100",
                "Additional Expenses: $50",
                "Fuel Expenses: $200",
                "Total Income: $1500.00",
                "Total Dispatch: $200.00",
                "Total Expenses: $350.00",
                "Weekly Profit: $950.00",
            ]
        );
    }

    #[test]
    fn test_profit_is_emphasized_after_gap() {
        let (driver, loads, expenses) = sample();
        let input = ReportInput {
            company: "HG Transport LLC",
            week_of: None,
            driver: &driver,
            loads: &loads,
            expenses: &expenses,
            totals: calculate_totals(&loads, &expenses),
        };
        let commands = build_layout(&input);
        let n = commands.len();
        assert_eq!(commands[n - 3], LayoutCommand::Skip(SECTION_ADVANCE));
        assert_eq!(commands[n - 2], LayoutCommand::SetFont(FontSize::Heading));
        assert!(matches!(&commands[n - 1], LayoutCommand::Line { text, .. } if text.starts_with("Weekly Profit")));
    }

    #[test]
    fn test_week_line_and_no_loads() {
        let driver = Driver::default();
        let expenses = Expenses::default();
        let input = ReportInput {
            company: "Rio Freight",
            week_of: NaiveDate::from_ymd_opt(2024, 3, 4),
            driver: &driver,
            loads: &[],
            expenses: &expenses,
            totals: calculate_totals(&[], &expenses),
        };
        let commands = build_layout(&input);
        let text = lines(&commands);
        assert_eq!(text[0], input.title());
        assert_eq!(text[1], "Week of 2024-03-04");
        assert!(!text.iter().any(|l| l.starts_with("Load ")));
        assert_eq!(text.last().copied(), Some("Weekly Profit: $0.00"));
    }

    #[test]
    fn test_money_format() {
        assert_eq!(money(1500.0), "$1500.00");
        assert_eq!(money(12.345678), "$12.35");
        assert_eq!(money(-125.0), "$-125.00");
    }
}
