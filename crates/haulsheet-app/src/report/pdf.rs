//! PDF canvas backed by printpdf

use printpdf::{
    BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerIndex,
    PdfLayerReference, PdfPageIndex,
};

use haulsheet_types::{Error, Result};

use super::canvas::DocumentCanvas;
use super::paginate::PageGeometry;

pub struct PdfCanvas {
    doc: PdfDocumentReference,
    font: IndirectFontRef,
    geometry: PageGeometry,
    first_page: Option<(PdfPageIndex, PdfLayerIndex)>,
    layer: Option<PdfLayerReference>,
}

impl PdfCanvas {
    pub fn new(title: &str, geometry: PageGeometry) -> Result<Self> {
        let (doc, page, layer) = PdfDocument::new(
            title,
            Mm(geometry.width),
            Mm(geometry.height),
            "Layer 1",
        );
        let font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| Error::Pdf(e.to_string()))?;
        Ok(Self {
            doc,
            font,
            geometry,
            first_page: Some((page, layer)),
            layer: None,
        })
    }
}

impl DocumentCanvas for PdfCanvas {
    fn begin_page(&mut self) -> Result<()> {
        // printpdf creates the first page together with the document
        let (page, layer) = match self.first_page.take() {
            Some(first) => first,
            None => self.doc.add_page(
                Mm(self.geometry.width),
                Mm(self.geometry.height),
                "Layer 1",
            ),
        };
        self.layer = Some(self.doc.get_page(page).get_layer(layer));
        Ok(())
    }

    fn place_text(&mut self, text: &str, font_size: f32, x: f32, y: f32) -> Result<()> {
        let layer = self
            .layer
            .as_ref()
            .ok_or_else(|| Error::Pdf("text placed before the first page".to_string()))?;
        // PDF user space grows upward from the bottom edge
        layer.use_text(text, font_size, Mm(x), Mm(self.geometry.height - y), &self.font);
        Ok(())
    }

    fn finish(self) -> Result<Vec<u8>> {
        let PdfCanvas { doc, layer, .. } = self;
        drop(layer);
        doc.save_to_bytes().map_err(|e| Error::Pdf(e.to_string()))
    }
}
