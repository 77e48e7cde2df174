use super::{wrap_lines, Margins};
use crate::colour::Colour;
use crate::document::Document;
use crate::font::Font;
use crate::page::{Page, RuleLayout, SpanFont, SpanLayout};
use crate::pagesize::PageSize;
use crate::units::Pt;
use id_arena::Id;
use log::debug;

/// How a run of text is drawn: size, line spacing and fill colour
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: Pt,
    /// Distance between consecutive baselines; 1.2 × size when [None]
    pub leading: Option<Pt>,
    pub colour: Colour,
}

impl TextStyle {
    pub fn new(size: Pt, colour: Colour) -> TextStyle {
        TextStyle {
            size,
            leading: None,
            colour,
        }
    }

    pub fn with_leading(self, leading: Pt) -> TextStyle {
        TextStyle {
            leading: Some(leading),
            ..self
        }
    }

    pub fn leading(&self) -> Pt {
        self.leading.unwrap_or(self.size * 1.2)
    }
}

/// The in-progress layout of a document: the page being filled and a baseline cursor
/// that only ever moves down the page.
///
/// Pages are created on demand. Whenever a line is about to be drawn below the bottom
/// of the content box, the current page is closed and the cursor moves to the top of
/// the content box of a fresh page. Every span carries its own font and colour, so
/// nothing has to be re-established after a break.
pub struct PageCursor {
    document: Document,
    page: Page,
    page_size: PageSize,
    margins: Margins,
    font: Id<Font>,
    x: Pt,
    y: Pt,
}

impl PageCursor {
    /// Start laying out on the first page of `document`, drawing text in `font`
    pub fn new(document: Document, font: Id<Font>, page_size: PageSize, margins: Margins) -> Self {
        let page = Page::new(page_size, Some(margins));
        let (x, y) = (page.content_box.x1, page.content_box.y2);
        PageCursor {
            document,
            page,
            page_size,
            margins,
            font,
            x,
            y,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn font(&self) -> Id<Font> {
        self.font
    }

    /// The left edge text is drawn from
    pub fn x(&self) -> Pt {
        self.x
    }

    /// Baseline of the next line to be drawn
    pub fn y(&self) -> Pt {
        self.y
    }

    /// Where the cursor starts on a fresh page
    pub fn top(&self) -> Pt {
        self.page.content_box.y2
    }

    /// The lowest baseline a line may be drawn at
    pub fn bottom(&self) -> Pt {
        self.page.content_box.y1
    }

    pub fn content_width(&self) -> Pt {
        self.page.content_box.width()
    }

    pub fn right(&self) -> Pt {
        self.page.content_box.x2
    }

    /// 0-based index of the page currently being filled
    pub fn page_index(&self) -> usize {
        self.document.page_count()
    }

    /// Move the cursor down without drawing anything
    pub fn advance(&mut self, by: Pt) {
        self.y -= by;
    }

    /// Close the current page and continue at the top of a new one
    pub fn break_page(&mut self) {
        let next = Page::new(self.page_size, Some(self.margins));
        let done = std::mem::replace(&mut self.page, next);
        self.document.add_page(done);
        self.y = self.top();
        debug!("page break, now on page {}", self.page_index() + 1);
    }

    /// Break the page if the cursor has gone below the bottom margin
    pub fn ensure_room(&mut self) {
        if self.y < self.bottom() {
            self.break_page();
        }
    }

    /// Draw one line of text, left-aligned at the cursor, and move down one leading
    pub fn draw_line(&mut self, text: &str, style: TextStyle) {
        self.ensure_room();
        if !text.is_empty() {
            self.page.add_span(SpanLayout {
                text: text.to_string(),
                font: SpanFont {
                    id: self.font,
                    size: style.size,
                },
                colour: style.colour,
                coords: (self.x, self.y),
            });
        }
        self.y -= style.leading();
    }

    /// Draw free text at the cursor. Paragraphs are separated by newlines; each one is
    /// wrapped to the content width, and a blank paragraph leaves one empty line.
    /// Returns the cursor position after the last line.
    pub fn draw_paragraphs(&mut self, text: &str, style: TextStyle) -> Pt {
        let font = SpanFont {
            id: self.font,
            size: style.size,
        };
        let max_width = self.content_width();
        for paragraph in text.split('\n').map(str::trim) {
            if paragraph.is_empty() {
                self.y -= style.leading();
                continue;
            }
            for line in wrap_lines(&self.document, paragraph, font, max_width) {
                self.draw_line(&line, style);
            }
        }
        self.y
    }

    /// Stroke a horizontal rule at `y` across the given horizontal extent of the
    /// current page. Does not move the cursor.
    pub fn draw_rule(&mut self, from_x: Pt, to_x: Pt, y: Pt, thickness: Pt, colour: Colour) {
        self.page.add_rule(RuleLayout {
            from: (from_x, y),
            to: (to_x, y),
            thickness,
            colour,
        });
    }

    /// Bookmark the page currently being filled
    pub fn bookmark<S: ToString>(&mut self, title: S) {
        let index = self.page_index();
        self.document.add_bookmark(title, index);
    }

    /// Close the last page and hand back the finished document
    pub fn finish(self) -> Document {
        let PageCursor {
            mut document, page, ..
        } = self;
        document.add_page(page);
        document
    }
}
