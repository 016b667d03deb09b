//! Command implementations

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::debug;

use haulsheet_app::config::Config;
use haulsheet_app::export::export_to_excel;
use haulsheet_app::report::{write_report, write_report_to, ReportInput, ReportOptions};
use haulsheet_app::repository::{import_loads_into, load_sheet, load_sheet_or_default, save_sheet};
use haulsheet_app::session::{Reply, Session};
use haulsheet_app::state::AppState;
use haulsheet_domain::model::{Driver, Expenses, Load, NumericField, WeeklySheet};
use haulsheet_domain::service::validate_driver;
use haulsheet_types::{Error, OutputFormat, PageSize, Result};

use crate::cli::{Cli, Commands};
use crate::output::{output_totals, output_validation, ValidationRow};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let output_format = cli.format.unwrap_or(config.output_format);
    debug!(%output_format, "loaded configuration");

    match cli.command {
        Commands::Totals { sheet } => cmd_totals(&sheet, output_format),

        Commands::Report {
            sheet,
            output,
            driver,
            company,
            page_size,
        } => cmd_report(config, &sheet, output, driver, company, page_size),

        Commands::Validate { sheet } => cmd_validate(&sheet, output_format),

        Commands::Export { sheet, output } => cmd_export(&config, &sheet, output),

        Commands::ImportLoads { csv, into } => {
            let count = import_loads_into(&csv, &into)?;
            println!("Imported {} load(s) into {}", count, into.display());
            Ok(())
        }

        Commands::Template { path, force } => cmd_template(&path, force),

        Commands::Session { sheet } => cmd_session(config, sheet),

        Commands::Config {
            show,
            set_company,
            set_report_file,
            set_output_dir,
            set_output,
            set_page_size,
            reset,
        } => cmd_config(
            show,
            set_company,
            set_report_file,
            set_output_dir,
            set_output,
            set_page_size,
            reset,
        ),
    }
}

fn cmd_totals(sheet_path: &Path, output_format: OutputFormat) -> Result<()> {
    let sheet = load_sheet(sheet_path)?;
    output_totals(output_format, &sheet.totals(), sheet.loads.len())
}

fn cmd_report(
    mut config: Config,
    sheet_path: &Path,
    output: Option<PathBuf>,
    driver: Option<usize>,
    company: Option<String>,
    page_size: Option<PageSize>,
) -> Result<()> {
    let mut sheet = load_sheet(sheet_path)?;
    if let Some(company) = company {
        sheet.company = Some(company);
    }
    if let Some(page_size) = page_size {
        config.page_size = page_size;
    }

    let mut input = ReportInput::from_sheet(&sheet, &config.company_name);
    if let Some(n) = driver {
        let roster_driver = n
            .checked_sub(1)
            .and_then(|i| sheet.drivers.get(i))
            .ok_or(Error::IndexOutOfRange {
                entity: "driver",
                index: n,
                len: sheet.drivers.len(),
            })?;
        input = input.with_driver(roster_driver);
    }

    let options = ReportOptions::from_config(&config);
    let path = match output {
        Some(path) => {
            write_report_to(&input, &options, &path)?;
            path
        }
        None => write_report(&input, &options, &config.report_dir())?,
    };

    println!("Report written to: {}", path.display());
    Ok(())
}

fn cmd_validate(sheet_path: &Path, output_format: OutputFormat) -> Result<()> {
    let sheet = load_sheet(sheet_path)?;

    let mut records: Vec<(String, &Driver)> = Vec::new();
    if sheet.driver != Driver::default() {
        records.push(("form".to_string(), &sheet.driver));
    }
    for (i, driver) in sheet.drivers.iter().enumerate() {
        records.push((format!("#{}", i + 1), driver));
    }

    let rows: Vec<ValidationRow> = records
        .into_iter()
        .map(|(record, driver)| {
            let error = validate_driver(driver).err().map(|e| e.to_string());
            ValidationRow {
                record,
                name: driver.name.clone(),
                valid: error.is_none(),
                error,
            }
        })
        .collect();

    output_validation(output_format, &rows)?;

    let failed = rows.iter().filter(|r| !r.valid).count();
    if failed > 0 {
        return Err(Error::Command(format!(
            "{} of {} driver record(s) failed validation",
            failed,
            rows.len()
        )));
    }
    Ok(())
}

fn cmd_export(config: &Config, sheet_path: &Path, output: Option<PathBuf>) -> Result<()> {
    let sheet = load_sheet(sheet_path)?;
    let output_path = output.unwrap_or_else(|| sheet_path.with_extension("xlsx"));
    let company = sheet.company.as_deref().unwrap_or(&config.company_name);

    export_to_excel(&sheet, &sheet.totals(), company, &output_path)?;

    println!("Exported to: {}", output_path.display());
    Ok(())
}

fn cmd_template(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(Error::Command(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }
    save_sheet(path, &template_sheet())?;
    println!("Template written to: {}", path.display());
    Ok(())
}

fn template_sheet() -> WeeklySheet {
    let driver = Driver {
        name: "Jane Driver".to_string(),
        license: "TX-0000000".to_string(),
        phone: "5555550100".to_string(),
        street_address: "100 Main St".to_string(),
        city_state_zip: "Laredo, TX 78040".to_string(),
        birth_date: "1985-01-31".to_string(),
        ..Default::default()
    };
    let load = |date: &str, origin: &str, destination: &str, price: &str, pct: &str| Load {
        date: date.to_string(),
        origin: origin.to_string(),
        destination: destination.to_string(),
        price: NumericField::new(price),
        dispatch_percentage: NumericField::new(pct),
    };

    WeeklySheet {
        company: None,
        week_of: NaiveDate::from_ymd_opt(2024, 3, 4),
        editing: None,
        report_driver: Some(1),
        driver: Driver::default(),
        drivers: vec![driver],
        loads: vec![
            load("2024-03-04", "Laredo, TX", "Dallas, TX", "1000", "10"),
            load("2024-03-06", "Dallas, TX", "Houston, TX", "500", "20"),
        ],
        expenses: Expenses {
            recurring: NumericField::new("100"),
            additional: NumericField::new("50"),
            fuel: NumericField::new("200"),
        },
    }
}

fn cmd_session(config: Config, sheet_path: Option<PathBuf>) -> Result<()> {
    let state = match &sheet_path {
        Some(path) => AppState::from_sheet(load_sheet_or_default(path)?),
        None => AppState::new(),
    };
    let mut session = Session::new(state, config);

    println!("{}", session.render_view());
    println!("Type 'help' for commands.");
    if let Some(path) = &sheet_path {
        println!("Use 'save \"{}\"' to keep your changes.", path.display());
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();
    loop {
        print!("haulsheet> ");
        stdout.flush()?;

        let Some(line) = lines.next() else {
            println!();
            break;
        };
        match session.execute(&line?) {
            Reply::Text(text) if text.is_empty() => {}
            Reply::Text(text) => println!("{}", text.trim_end()),
            Reply::Quit => break,
        }
    }

    Ok(())
}

fn cmd_config(
    show: bool,
    set_company: Option<String>,
    set_report_file: Option<String>,
    set_output_dir: Option<PathBuf>,
    set_output: Option<OutputFormat>,
    set_page_size: Option<PageSize>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(company) = set_company {
        config.company_name = company;
        modified = true;
    }

    if let Some(file_name) = set_report_file {
        config.report_file_name = file_name;
        modified = true;
    }

    if let Some(dir) = set_output_dir {
        config.output_dir = Some(dir);
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(page_size) = set_page_size {
        config.page_size = page_size;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_sheet_is_valid() {
        let sheet = template_sheet();
        assert!(validate_driver(sheet.report_driver()).is_ok());
        assert_eq!(sheet.driver, Driver::default());
        let totals = sheet.totals();
        assert_eq!(totals.income, 1500.0);
        assert_eq!(totals.profit, 950.0);
    }
}
