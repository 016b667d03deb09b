//! CLI definition using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use haulsheet_types::{OutputFormat, PageSize};

#[derive(Parser)]
#[command(name = "haulsheet")]
#[command(author = "hg-transport")]
#[command(version)]
#[command(about = "Weekly trucking sheet: drivers, loads, expenses and the weekly report")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output (debug logging on stderr)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show income, dispatch, expenses and profit for a sheet
    Totals {
        /// Sheet file (.json or .toml)
        sheet: PathBuf,
    },

    /// Write the weekly PDF report
    Report {
        /// Sheet file (.json or .toml)
        sheet: PathBuf,

        /// Output PDF path. Defaults to <output dir>/<report file name>.
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Roster driver to issue the report for (1-based)
        #[arg(long, short = 'd')]
        driver: Option<usize>,

        /// Company name override
        #[arg(long)]
        company: Option<String>,

        /// Paper size override
        #[arg(long)]
        page_size: Option<PageSize>,
    },

    /// Check the sheet's driver records
    Validate {
        /// Sheet file (.json or .toml)
        sheet: PathBuf,
    },

    /// Export the sheet to Excel
    Export {
        /// Sheet file (.json or .toml)
        sheet: PathBuf,

        /// Output Excel file path
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Append loads from a CSV file to a sheet file
    ImportLoads {
        /// CSV file (date, origin, destination, price, dispatch %)
        csv: PathBuf,

        /// Sheet file to append to; created if missing
        #[arg(long)]
        into: PathBuf,
    },

    /// Write an example sheet file to start from
    Template {
        /// Path of the new sheet file (.json or .toml)
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Edit a sheet interactively
    Session {
        /// Sheet file to start from
        #[arg(long)]
        sheet: Option<PathBuf>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set company name
        #[arg(long)]
        set_company: Option<String>,

        /// Set report file name
        #[arg(long)]
        set_report_file: Option<String>,

        /// Set report output directory
        #[arg(long)]
        set_output_dir: Option<PathBuf>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set report paper size
        #[arg(long)]
        set_page_size: Option<PageSize>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_report() {
        let cli = Cli::try_parse_from([
            "haulsheet", "report", "week.json", "-o", "out.pdf", "--driver", "2", "--page-size", "letter",
        ])
        .unwrap();
        match cli.command {
            Commands::Report {
                sheet,
                output,
                driver,
                page_size,
                ..
            } => {
                assert_eq!(sheet, PathBuf::from("week.json"));
                assert_eq!(output, Some(PathBuf::from("out.pdf")));
                assert_eq!(driver, Some(2));
                assert_eq!(page_size, Some(PageSize::Letter));
            }
            _ => panic!("expected report"),
        }
    }

    #[test]
    fn test_global_format_flag() {
        let cli = Cli::try_parse_from(["haulsheet", "totals", "week.toml", "-f", "json", "-v"]).unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(cli.verbose);
    }

    #[test]
    fn test_import_requires_target() {
        assert!(Cli::try_parse_from(["haulsheet", "import-loads", "loads.csv"]).is_err());
    }
}
