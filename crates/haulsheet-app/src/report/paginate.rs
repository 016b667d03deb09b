//! Cursor-driven placement of layout commands onto pages
//!
//! Coordinates are millimetres measured from the top-left corner of the page.

use tracing::debug;

use haulsheet_types::PageSize;

use super::layout::{FontSize, LayoutCommand};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub left_margin: f32,
    pub top_margin: f32,
    pub bottom_margin: f32,
}

impl PageGeometry {
    pub fn for_size(size: PageSize) -> Self {
        let (width, height) = size.dimensions_mm();
        Self {
            width,
            height,
            left_margin: 20.0,
            top_margin: 20.0,
            bottom_margin: 20.0,
        }
    }

    /// Lowest baseline a line may be placed at
    pub fn bottom_limit(&self) -> f32 {
        self.height - self.bottom_margin
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::for_size(PageSize::default())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedText {
    pub text: String,
    pub font_size: f32,
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLayout {
    pub lines: Vec<PlacedText>,
}

/// Place every line, breaking to a new page when the cursor passes the
/// bottom margin. Always returns at least one page.
pub fn paginate(commands: &[LayoutCommand], geometry: &PageGeometry) -> Vec<PageLayout> {
    let mut pages = vec![PageLayout::default()];
    let mut cursor = geometry.top_margin;
    let mut font = FontSize::Body;
    let limit = geometry.bottom_limit();

    for command in commands {
        match command {
            LayoutCommand::SetFont(size) => font = *size,
            LayoutCommand::Skip(distance) => cursor += distance,
            LayoutCommand::KeepTogether(span) => {
                if cursor + span > limit {
                    cursor = break_page(&mut pages, geometry);
                }
            }
            LayoutCommand::Line { text, advance } => {
                if cursor > limit {
                    cursor = break_page(&mut pages, geometry);
                }
                if let Some(page) = pages.last_mut() {
                    page.lines.push(PlacedText {
                        text: text.clone(),
                        font_size: font.points(),
                        x: geometry.left_margin,
                        y: cursor,
                    });
                }
                cursor += advance;
            }
        }
    }

    pages
}

/// Open a new page unless the current one is still blank; returns the reset cursor
fn break_page(pages: &mut Vec<PageLayout>, geometry: &PageGeometry) -> f32 {
    if pages.last().is_some_and(|page| !page.lines.is_empty()) {
        pages.push(PageLayout::default());
        debug!(page = pages.len(), "report continues on a new page");
    }
    geometry.top_margin
}
