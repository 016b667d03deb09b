//! Interactive session
//!
//! Reads one command line at a time and applies it to an `AppState`. Errors
//! never end the session; they come back as the reply text.

use std::fmt::Write as _;
use std::path::Path;

use chrono::NaiveDate;
use tracing::debug;

use haulsheet_domain::model::schema::{DRIVER_FIELDS, EXPENSE_FIELDS, LOAD_FIELDS};
use haulsheet_domain::model::{FieldDescriptor, Totals};
use haulsheet_infra::load_loads_from_csv;
use haulsheet_types::{Error, Result};

use crate::config::Config;
use crate::export::export_to_excel;
use crate::report::layout::money;
use crate::report::{write_report, write_report_to, ReportOptions};
use crate::repository::save_sheet;
use crate::state::{AppState, View};

pub const HELP: &str = "\
Commands:
  show                              redisplay the current view
  view <drivers|driver-form|loads|expenses|summary>
  fields <driver|load|expenses>     list editable fields
  driver set <field> <value>        edit the driver form
  driver save                       validate and save the form
  driver edit <n> | cancel          load driver n into the form / discard it
  driver delete <n>                 remove driver n
  driver use <n>                    issue the report for driver n
  driver list
  load add                          append a blank load
  load set <n> <field> <value>
  load list
  expenses set <field> <value>
  week <YYYY-MM-DD>                 set the week the report covers
  totals                            income, dispatch, expenses and profit
  report [path]                     write the PDF report
  export <path.xlsx>                write an Excel workbook
  import <loads.csv>                append loads from a CSV file
  save <sheet.json|sheet.toml>      write the sheet to a file
  quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Quit,
}

pub struct Session {
    state: AppState,
    config: Config,
}

impl Session {
    pub fn new(state: AppState, config: Config) -> Self {
        Self { state, config }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn into_state(self) -> AppState {
        self.state
    }

    /// Apply one command line
    pub fn execute(&mut self, line: &str) -> Reply {
        match self.dispatch(line) {
            Ok(reply) => reply,
            Err(err) => {
                debug!(command = line, error = %err, "command failed");
                Reply::Text(format!("! {}", err))
            }
        }
    }

    fn dispatch(&mut self, line: &str) -> Result<Reply> {
        let args = shell_words::split(line)
            .map_err(|e| Error::Command(format!("Cannot parse command: {}", e)))?;
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        self.state.clear_message();

        let text = match args.as_slice() {
            [] => String::new(),
            ["quit"] | ["exit"] => return Ok(Reply::Quit),
            ["help"] => HELP.to_string(),
            ["show"] => self.render_view(),
            ["view", name] => {
                let view = View::parse(name)
                    .ok_or_else(|| Error::Command(format!("Unknown view: {}", name)))?;
                self.state.navigate(view);
                self.render_view()
            }
            ["fields", entity] => render_fields(fields_for(entity)?),
            ["driver", rest @ ..] => self.driver_command(rest)?,
            ["load", rest @ ..] => self.load_command(rest)?,
            ["expenses", "set", key, value @ ..] => {
                self.state.set_expense_field(key, &value.join(" "))?;
                self.state.navigate(View::Expenses);
                self.render_view()
            }
            ["week", date] => {
                let week = NaiveDate::parse_from_str(date, "%Y-%m-%d")
                    .map_err(|_| Error::Command(format!("Not a YYYY-MM-DD date: {}", date)))?;
                self.state.set_week_of(Some(week));
                format!("Week of {}", week)
            }
            ["totals"] => render_totals(&self.state.totals()),
            ["report"] => {
                let input = self.state.report_input(&self.config.company_name);
                let path = write_report(
                    &input,
                    &ReportOptions::from_config(&self.config),
                    &self.config.report_dir(),
                )?;
                format!("Report written to {}", path.display())
            }
            ["report", path] => {
                let input = self.state.report_input(&self.config.company_name);
                write_report_to(&input, &ReportOptions::from_config(&self.config), Path::new(path))?;
                format!("Report written to {}", path)
            }
            ["export", path] => {
                let sheet = self.state.to_sheet();
                let company = sheet.company.as_deref().unwrap_or(&self.config.company_name);
                export_to_excel(&sheet, &self.state.totals(), company, Path::new(path))?;
                format!("Workbook written to {}", path)
            }
            ["import", path] => {
                let loads = load_loads_from_csv(Path::new(path))?;
                let count = loads.len();
                self.state.extend_loads(loads);
                format!("Imported {} load(s); {} total", count, self.state.loads().len())
            }
            ["save", path] => {
                save_sheet(Path::new(path), &self.state.to_sheet())?;
                format!("Sheet saved to {}", path)
            }
            _ => return Err(Error::Command(format!("Unknown command: {} (try 'help')", line.trim()))),
        };
        Ok(Reply::Text(text))
    }

    fn driver_command(&mut self, args: &[&str]) -> Result<String> {
        match args {
            ["set", key, value @ ..] => {
                self.state.set_driver_field(key, &value.join(" "))?;
                self.state.navigate(View::DriverForm);
                Ok(self.render_view())
            }
            ["save"] => {
                self.state.save_driver()?;
                Ok(self.render_with_message())
            }
            ["edit", n] => {
                self.state.edit_driver(parse_index(n)?)?;
                Ok(self.render_view())
            }
            ["cancel"] => {
                self.state.cancel_edit();
                Ok(self.render_view())
            }
            ["delete", n] => {
                self.state.delete_driver(parse_index(n)?)?;
                self.state.navigate(View::DriverList);
                Ok(self.render_with_message())
            }
            ["use", n] => {
                let index = parse_index(n)?;
                self.state.use_driver(index)?;
                Ok(format!("Report will be issued for {}", self.state.report_driver().name))
            }
            ["list"] => {
                self.state.navigate(View::DriverList);
                Ok(self.render_view())
            }
            _ => Err(Error::Command("Usage: driver set|save|edit|cancel|delete|use|list".to_string())),
        }
    }

    fn load_command(&mut self, args: &[&str]) -> Result<String> {
        match args {
            ["add"] => {
                let index = self.state.add_load();
                self.state.navigate(View::Loads);
                Ok(format!("Load {} added", index + 1))
            }
            ["set", n, key, value @ ..] => {
                self.state.set_load_field(parse_index(n)?, key, &value.join(" "))?;
                self.state.navigate(View::Loads);
                Ok(self.render_view())
            }
            ["list"] => {
                self.state.navigate(View::Loads);
                Ok(self.render_view())
            }
            _ => Err(Error::Command("Usage: load add|set <n> <field> <value>|list".to_string())),
        }
    }

    fn render_with_message(&self) -> String {
        let mut out = String::new();
        if let Some(message) = self.state.message() {
            let _ = writeln!(out, "{}", message);
        }
        out.push_str(&self.render_view());
        out
    }

    /// Text rendering of the current view
    pub fn render_view(&self) -> String {
        let state = &self.state;
        let mut out = String::new();
        let view = state.view();
        let _ = writeln!(out, "== {} ==", view.label());

        match view {
            View::DriverList => {
                if state.drivers().is_empty() {
                    out.push_str("  (no drivers saved)\n");
                }
                for (i, driver) in state.drivers().iter().enumerate() {
                    let marker = if state.report_driver_index() == Some(i) { "*" } else { " " };
                    let _ = writeln!(
                        out,
                        " {}{}. {} ({}) [{}]",
                        marker,
                        i + 1,
                        driver.name,
                        driver.license,
                        driver.status.label()
                    );
                }
            }
            View::DriverForm => {
                match state.editing() {
                    Some(i) => {
                        let _ = writeln!(out, "Editing driver #{}", i + 1);
                    }
                    None => out.push_str("New driver\n"),
                }
                let draft = state.draft();
                for descriptor in DRIVER_FIELDS {
                    let value = draft.field(descriptor.key).unwrap_or_default();
                    let _ = writeln!(out, "  {}: {}", field_label(descriptor), value);
                }
            }
            View::Loads => {
                if state.loads().is_empty() {
                    out.push_str("  (no loads this week)\n");
                }
                for (i, load) in state.loads().iter().enumerate() {
                    let _ = writeln!(
                        out,
                        "  {}. {} {} -> {}  price {}  dispatch {}%",
                        i + 1,
                        load.date,
                        load.origin,
                        load.destination,
                        load.price.raw(),
                        load.dispatch_percentage.raw()
                    );
                }
            }
            View::Expenses => {
                let expenses = state.expenses();
                for descriptor in EXPENSE_FIELDS {
                    let value = expenses.field(descriptor.key).unwrap_or_default();
                    let _ = writeln!(out, "  {}: {}", descriptor.label, value);
                }
            }
            View::Summary => out.push_str(&render_totals(&state.totals())),
        }
        out
    }
}

fn field_label(descriptor: &FieldDescriptor) -> String {
    if descriptor.required {
        format!("{}*", descriptor.label)
    } else {
        descriptor.label.to_string()
    }
}

fn fields_for(entity: &str) -> Result<&'static [FieldDescriptor]> {
    match entity.to_ascii_lowercase().as_str() {
        "driver" | "drivers" => Ok(DRIVER_FIELDS),
        "load" | "loads" => Ok(LOAD_FIELDS),
        "expense" | "expenses" => Ok(EXPENSE_FIELDS),
        other => Err(Error::Command(format!("Unknown entity: {}", other))),
    }
}

fn render_fields(fields: &[FieldDescriptor]) -> String {
    let mut out = String::new();
    for descriptor in fields {
        let _ = writeln!(
            out,
            "  {:<22} {:<18} {}",
            descriptor.key,
            field_label(descriptor),
            descriptor.kind.hint()
        );
    }
    out
}

/// Convert a 1-based number typed by the user into an index
fn parse_index(value: &str) -> Result<usize> {
    match value.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(Error::Command(format!("Expected a number starting at 1, got '{}'", value))),
    }
}

pub fn render_totals(totals: &Totals) -> String {
    format!(
        "  Total Income:   {}\n  Total Dispatch: {}\n  Total Expenses: {}\n  Weekly Profit:  {}\n",
        money(totals.income),
        money(totals.dispatch_total),
        money(totals.expense_total),
        money(totals.profit)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::load_sheet;
    use tempfile::tempdir;

    fn session() -> Session {
        Session::new(AppState::new(), Config::default())
    }

    fn text(reply: Reply) -> String {
        match reply {
            Reply::Text(t) => t,
            Reply::Quit => panic!("unexpected quit"),
        }
    }

    fn fill_driver(s: &mut Session) {
        for cmd in [
            "driver set name Ana Gomez",
            "driver set license TX-99812",
            "driver set phone 9565551234",
            "driver set street_address \"12 Main St\"",
            "driver set city_state_zip Laredo, TX 78040",
            "driver set birth_date 1988-07-14",
        ] {
            let out = text(s.execute(cmd));
            assert!(!out.starts_with('!'), "{} -> {}", cmd, out);
        }
    }

    #[test]
    fn test_quit_and_blank() {
        let mut s = session();
        assert_eq!(s.execute(""), Reply::Text(String::new()));
        assert_eq!(s.execute("quit"), Reply::Quit);
        assert_eq!(s.execute("exit"), Reply::Quit);
    }

    #[test]
    fn test_unknown_command_is_inline_error() {
        let mut s = session();
        let out = text(s.execute("fly away"));
        assert!(out.starts_with("! Unknown command"));
    }

    #[test]
    fn test_unbalanced_quote() {
        let mut s = session();
        let out = text(s.execute("driver set name \"Ana"));
        assert!(out.starts_with("! Cannot parse command"));
    }

    #[test]
    fn test_driver_save_flow() {
        let mut s = session();
        fill_driver(&mut s);
        assert_eq!(s.state().draft().city_state_zip, "Laredo, TX 78040");
        let out = text(s.execute("driver save"));
        assert!(out.contains("Driver #1 saved"));
        assert!(out.contains("1. Ana Gomez (TX-99812) [active]"));
        assert_eq!(s.state().drivers().len(), 1);
    }

    #[test]
    fn test_driver_save_rejects_bad_phone() {
        let mut s = session();
        fill_driver(&mut s);
        s.execute("driver set phone 12345");
        let out = text(s.execute("driver save"));
        assert_eq!(out, "! Phone number must be exactly 10 digits");
        assert!(s.state().drivers().is_empty());
    }

    #[test]
    fn test_driver_edit_is_one_based() {
        let mut s = session();
        fill_driver(&mut s);
        s.execute("driver save");
        let out = text(s.execute("driver edit 1"));
        assert!(out.contains("Editing driver #1"));
        assert!(out.contains("Name*: Ana Gomez"));
        let out = text(s.execute("driver edit 0"));
        assert!(out.starts_with("! Expected a number"));
        let out = text(s.execute("driver edit 2"));
        assert_eq!(out, "! No driver #2 (have 1)");
    }

    #[test]
    fn test_loads_expenses_totals() {
        let mut s = session();
        assert_eq!(text(s.execute("load add")), "Load 1 added");
        s.execute("load set 1 price 1000");
        s.execute("load set 1 dispatch_percentage 10");
        s.execute("load add");
        s.execute("load set 2 Price 500");
        s.execute("load set 2 \"Dispatch %\" 20");
        s.execute("expenses set recurring 100");
        s.execute("expenses set additional 50");
        let out = text(s.execute("expenses set fuel 200"));
        assert!(out.contains("Fuel: 200"));

        let out = text(s.execute("totals"));
        assert!(out.contains("Total Income:   $1500.00"));
        assert!(out.contains("Total Dispatch: $200.00"));
        assert!(out.contains("Total Expenses: $350.00"));
        assert!(out.contains("Weekly Profit:  $950.00"));
    }

    #[test]
    fn test_unknown_field_reported() {
        let mut s = session();
        s.execute("load add");
        let out = text(s.execute("load set 1 weight 20"));
        assert_eq!(out, "! Unknown load field: weight");
    }

    #[test]
    fn test_view_switching() {
        let mut s = session();
        let out = text(s.execute("view summary"));
        assert!(out.starts_with("== Summary =="));
        assert_eq!(s.state().view(), View::Summary);
        let out = text(s.execute("view garage"));
        assert_eq!(out, "! Unknown view: garage");
        assert_eq!(s.state().view(), View::Summary);
    }

    #[test]
    fn test_fields_listing() {
        let mut s = session();
        let out = text(s.execute("fields load"));
        assert!(out.contains("dispatch_percentage"));
        assert!(out.contains("number"));
        assert!(text(s.execute("fields trucks")).starts_with("! Unknown entity"));
    }

    #[test]
    fn test_week_command() {
        let mut s = session();
        assert_eq!(text(s.execute("week 2024-03-04")), "Week of 2024-03-04");
        assert!(text(s.execute("week 03/04/2024")).starts_with("! Not a YYYY-MM-DD date"));
        assert_eq!(s.state().week_of(), NaiveDate::from_ymd_opt(2024, 3, 4));
    }

    #[test]
    fn test_report_and_save_write_files() {
        let dir = tempdir().unwrap();
        let mut s = session();
        fill_driver(&mut s);
        s.execute("load add");
        s.execute("load set 1 price 800");

        let pdf = dir.path().join("week.pdf");
        let out = text(s.execute(&format!("report \"{}\"", pdf.display())));
        assert!(out.starts_with("Report written to"), "{}", out);
        assert!(std::fs::read(&pdf).unwrap().starts_with(b"%PDF-"));

        let sheet_path = dir.path().join("week.json");
        let out = text(s.execute(&format!("save \"{}\"", sheet_path.display())));
        assert!(out.starts_with("Sheet saved"), "{}", out);
        let saved = load_sheet(&sheet_path).unwrap();
        assert_eq!(saved.driver.name, "Ana Gomez");
        assert_eq!(saved.loads.len(), 1);
    }

    #[test]
    fn test_import_appends_loads() {
        let dir = tempdir().unwrap();
        let csv = dir.path().join("loads.csv");
        std::fs::write(&csv, "date,origin,destination,price,dispatch\n2024-03-04,Laredo,Dallas,1000,10\n").unwrap();
        let mut s = session();
        s.execute("load add");
        let out = text(s.execute(&format!("import \"{}\"", csv.display())));
        assert_eq!(out, "Imported 1 load(s); 2 total");
    }
}
