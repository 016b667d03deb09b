//! Document canvas abstraction
//!
//! A canvas receives already-positioned text and turns it into a file.

use haulsheet_types::Result;

use super::paginate::PageLayout;

pub trait DocumentCanvas {
    /// Start a new page; text placed afterwards lands on it
    fn begin_page(&mut self) -> Result<()>;

    /// Place text with its baseline at `(x, y)` mm from the top-left corner
    fn place_text(&mut self, text: &str, font_size: f32, x: f32, y: f32) -> Result<()>;

    /// Serialize the document
    fn finish(self) -> Result<Vec<u8>>;
}

/// Replay paginated lines onto a canvas
pub fn draw_pages<C: DocumentCanvas>(canvas: &mut C, pages: &[PageLayout]) -> Result<()> {
    for page in pages {
        canvas.begin_page()?;
        for line in &page.lines {
            canvas.place_text(&line.text, line.font_size, line.x, line.y)?;
        }
    }
    Ok(())
}
