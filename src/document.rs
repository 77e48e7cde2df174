use crate::{
    font::Font,
    info::Info,
    layout::Measure,
    outline::Outline,
    page::Page,
    refs::{ObjectReferences, RefType},
    PDFError, Pt,
};
use id_arena::{Arena, Id};
use pdf_writer::{Finish, Pdf, Ref};
use std::io::Write;

#[derive(Default)]
/// A document is the main object that stores all the contents of the PDF
/// then renders it out with a call to [Document::write]
pub struct Document {
    pub info: Option<Info>,
    pub pages: Arena<Page>,
    pub page_order: Vec<Id<Page>>,
    pub fonts: Arena<Font>,
    pub outline: Outline,
}

impl Document {
    /// Sets information about the document. If not provided, no information block will be
    /// written to the PDF
    pub fn set_info(&mut self, info: Info) {
        self.info = Some(info);
    }

    /// Add a page to the end of the document, returning its id
    pub fn add_page(&mut self, page: Page) -> Id<Page> {
        let id = self.pages.alloc(page);
        self.page_order.push(id);
        id
    }

    /// Add a font to the document. Fonts are shared by every page, which refer to
    /// them by the returned id.
    pub fn add_font(&mut self, font: Font) -> Id<Font> {
        self.fonts.alloc(font)
    }

    pub fn page_count(&self) -> usize {
        self.page_order.len()
    }

    /// Pages in document order
    pub fn ordered_pages(&self) -> impl Iterator<Item = &Page> {
        self.page_order.iter().filter_map(|id| self.pages.get(*id))
    }

    /// Add a bookmark pointing at the page with the given 0-based index
    pub fn add_bookmark<S: ToString>(&mut self, title: S, page_index: usize) {
        self.outline.add_bookmark(page_index, title);
    }

    /// Write the entire document to the writer. The whole document is serialised in
    /// memory first, then written out in one go.
    pub fn write<W: Write>(&self, mut w: W) -> Result<(), PDFError> {
        let mut refs = ObjectReferences::new();

        let catalog_id = refs.gen(RefType::Catalog);
        let page_tree_id = refs.gen(RefType::PageTree);

        let mut writer = Pdf::new();
        if let Some(info) = &self.info {
            info.write(&mut refs, &mut writer);
        }

        for (id, font) in self.fonts.iter() {
            font.write(&mut refs, id, &mut writer)?;
        }

        // page refs are keyed by position in the page order so bookmarks can use them
        for (page_index, id) in self.page_order.iter().enumerate() {
            let page = self.pages.get(*id).ok_or(PDFError::PageMissing)?;
            page.write(&mut refs, page_index, &self.fonts, &mut writer)?;
        }
        let page_refs: Vec<Ref> = (0..self.page_order.len())
            .filter_map(|i| refs.get(RefType::Page(i)))
            .collect();
        writer
            .pages(page_tree_id)
            .count(page_refs.len() as i32)
            .kids(page_refs);

        if !self.outline.is_empty() {
            self.outline.write(&mut refs, &mut writer);
        }

        let mut catalog = writer.catalog(catalog_id);
        catalog.pages(page_tree_id);
        if let Some(outlines) = refs.get(RefType::Outlines) {
            catalog.outlines(outlines);
        }
        catalog.finish();

        w.write_all(writer.finish().as_slice()).map_err(Into::into)
    }

    /// Render the document into an in-memory buffer
    pub fn to_bytes(&self) -> Result<Vec<u8>, PDFError> {
        let mut bytes = Vec::new();
        self.write(&mut bytes)?;
        Ok(bytes)
    }
}

impl Measure for Document {
    fn width_of_text(&self, text: &str, font: Id<Font>, size: Pt) -> Pt {
        self.fonts
            .get(font)
            .map(|font| font.width_of_text(text, size))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{colours, pagesize, BuiltinFont, SpanFont, SpanLayout};

    fn one_page_document() -> Document {
        let mut doc = Document::default();
        let font = doc.add_font(Font::builtin(BuiltinFont::Helvetica));
        let mut page = Page::new(pagesize::A4, None);
        page.add_span(SpanLayout {
            text: "Olá".to_string(),
            font: SpanFont {
                id: font,
                size: Pt(12.0),
            },
            colour: colours::BLACK,
            coords: (Pt(72.0), Pt(700.0)),
        });
        doc.add_page(page);
        doc
    }

    #[test]
    fn test_write_produces_pdf() {
        let mut doc = one_page_document();
        doc.set_info(Info::new().title("Ata").clone());
        doc.add_bookmark("BOAS VINDAS", 0);

        let bytes = doc.to_bytes().expect("document writes");
        assert!(bytes.starts_with(b"%PDF-"));
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/Helvetica"));
        assert!(text.contains("/WinAnsiEncoding"));
        assert!(text.contains("/Outlines"));
        assert!(text.trim_end().ends_with("%%EOF"));
    }

    #[test]
    fn test_measure_via_document() {
        let doc = one_page_document();
        let (font, _) = doc.fonts.iter().next().expect("font was added");
        assert_eq!(doc.page_count(), 1);
        // "ii" = 2 * 222 / 1000 * 10
        let width = doc.width_of_text("ii", font, Pt(10.0));
        assert!((width.0 - 4.44).abs() < 1e-4);
    }
}
