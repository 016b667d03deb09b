//! Weekly report rendering
//!
//! `build_layout` turns the week into drawing commands, `paginate` positions
//! them, and a `DocumentCanvas` serializes the result.

pub mod canvas;
pub mod layout;
pub mod paginate;
pub mod pdf;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::info;

use haulsheet_domain::model::{Driver, Expenses, Load, Totals, WeeklySheet};
use haulsheet_domain::service::calculate_totals;
use haulsheet_types::{PageSize, Result};

use crate::config::Config;

pub use canvas::{draw_pages, DocumentCanvas};
pub use layout::{build_layout, FontSize, LayoutCommand};
pub use paginate::{paginate, PageGeometry, PageLayout, PlacedText};
pub use pdf::PdfCanvas;

/// Everything the report shows
#[derive(Debug, Clone)]
pub struct ReportInput<'a> {
    pub company: &'a str,
    pub week_of: Option<NaiveDate>,
    pub driver: &'a Driver,
    pub loads: &'a [Load],
    pub expenses: &'a Expenses,
    pub totals: Totals,
}

impl<'a> ReportInput<'a> {
    /// Build the input, computing totals from the loads and expenses given
    pub fn new(
        company: &'a str,
        week_of: Option<NaiveDate>,
        driver: &'a Driver,
        loads: &'a [Load],
        expenses: &'a Expenses,
    ) -> Self {
        Self {
            company,
            week_of,
            driver,
            loads,
            expenses,
            totals: calculate_totals(loads, expenses),
        }
    }

    pub fn from_sheet(sheet: &'a WeeklySheet, default_company: &'a str) -> Self {
        Self::new(
            sheet.company.as_deref().unwrap_or(default_company),
            sheet.week_of,
            sheet.report_driver(),
            &sheet.loads,
            &sheet.expenses,
        )
    }

    pub fn with_driver(self, driver: &'a Driver) -> Self {
        Self { driver, ..self }
    }

    pub fn title(&self) -> String {
        format!("{} - Weekly Report", self.company)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportOptions {
    pub page_size: PageSize,
    pub file_name: String,
}

impl ReportOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            page_size: config.page_size,
            file_name: config.report_file_name.clone(),
        }
    }
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Lay out and paginate the report without drawing it
pub fn layout_pages(input: &ReportInput<'_>, geometry: &PageGeometry) -> Vec<PageLayout> {
    paginate(&build_layout(input), geometry)
}

/// Draw the report on any canvas
pub fn render_with<C: DocumentCanvas>(
    input: &ReportInput<'_>,
    geometry: &PageGeometry,
    mut canvas: C,
) -> Result<Vec<u8>> {
    let pages = layout_pages(input, geometry);
    draw_pages(&mut canvas, &pages)?;
    canvas.finish()
}

/// Render the report as PDF bytes
pub fn render_report(input: &ReportInput<'_>, options: &ReportOptions) -> Result<Vec<u8>> {
    let geometry = PageGeometry::for_size(options.page_size);
    let canvas = PdfCanvas::new(&input.title(), geometry)?;
    render_with(input, &geometry, canvas)
}

/// Render the report to an explicit path
pub fn write_report_to(input: &ReportInput<'_>, options: &ReportOptions, path: &Path) -> Result<()> {
    let bytes = render_report(input, options)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, &bytes)?;
    info!(
        path = %path.display(),
        loads = input.loads.len(),
        bytes = bytes.len(),
        "report written"
    );
    Ok(())
}

/// Render the report into `dir` under the configured file name
pub fn write_report(input: &ReportInput<'_>, options: &ReportOptions, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(&options.file_name);
    write_report_to(input, options, &path)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::canvas::testing::TranscriptCanvas;
    use super::*;
    use haulsheet_domain::model::NumericField;
    use tempfile::tempdir;

    fn sheet_with_loads(n: usize) -> WeeklySheet {
        WeeklySheet {
            driver: Driver {
                name: "Ana Gomez".to_string(),
                ..Default::default()
            },
            loads: (0..n)
                .map(|i| Load {
                    date: format!("2024-03-{:02}", i % 28 + 1),
                    origin: "Laredo".to_string(),
                    destination: "Dallas".to_string(),
                    price: NumericField::new("1000"),
                    dispatch_percentage: NumericField::new("10"),
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_transcript_places_title_then_driver() {
        let sheet = sheet_with_loads(1);
        let input = ReportInput::from_sheet(&sheet, "HG Transport LLC");
        let bytes = render_with(&input, &PageGeometry::default(), TranscriptCanvas::default()).unwrap();
        let transcript = String::from_utf8(bytes).unwrap();
        let mut lines = transcript.lines();
        assert_eq!(lines.next(), Some("page 1"));
        assert_eq!(lines.next(), Some("HG Transport LLC - Weekly Report@14pt (20, 20)"));
        assert_eq!(lines.next(), Some("Driver: Ana Gomez@14pt (20, 30)"));
        assert!(transcript.contains("Load 1: 2024-03-01, Laredo - Dallas@12pt (20, 70)"));
        assert!(transcript.contains("Price: $1000 | Dispatch: 10%@12pt (20, 77)"));
    }

    #[test]
    fn test_sheet_company_overrides_default() {
        let sheet = WeeklySheet {
            company: Some("Rio Freight".to_string()),
            ..Default::default()
        };
        let input = ReportInput::from_sheet(&sheet, "HG Transport LLC");
        assert_eq!(input.title(), "Rio Freight - Weekly Report");
    }

    #[test]
    fn test_with_driver_swaps_only_driver() {
        let sheet = sheet_with_loads(2);
        let other = Driver {
            name: "Luis Ortega".to_string(),
            ..Default::default()
        };
        let input = ReportInput::from_sheet(&sheet, "HG").with_driver(&other);
        assert_eq!(input.driver.name, "Luis Ortega");
        assert_eq!(input.loads.len(), 2);
        assert!((input.totals.income - 2000.0).abs() < 1e-9);
    }

    #[test]
    fn test_long_week_spans_pages() {
        let sheet = sheet_with_loads(30);
        let input = ReportInput::from_sheet(&sheet, "HG");
        let pages = layout_pages(&input, &PageGeometry::default());
        assert!(pages.len() >= 2);
        let last = pages.last().unwrap().lines.last().unwrap();
        assert!(last.text.starts_with("Weekly Profit"));
        // each load keeps its two lines on one page
        for page in &pages {
            let first = &page.lines[0].text;
            assert!(!first.starts_with("Price:"), "orphaned price line: {}", first);
        }
    }

    #[test]
    fn test_pdf_bytes() {
        let sheet = sheet_with_loads(3);
        let input = ReportInput::from_sheet(&sheet, "HG Transport LLC");
        let bytes = render_report(&input, &ReportOptions::default()).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn test_write_report_uses_fixed_name() {
        let dir = tempdir().unwrap();
        let sheet = sheet_with_loads(40);
        let input = ReportInput::from_sheet(&sheet, "HG Transport LLC");
        let path = write_report(&input, &ReportOptions::default(), &dir.path().join("out")).unwrap();
        assert_eq!(path.file_name().unwrap(), "weekly_report.pdf");
        let written = fs::read(&path).unwrap();
        assert!(written.starts_with(b"%PDF-"));
    }
}
