//! Text layout: measuring, greedy line wrapping and a paginating page cursor.
//!
//! # Example
//!
//! ```
//! use ata_pdf::{colours, pagesize, BuiltinFont, Document, Font, Pt};
//! use ata_pdf::layout::{Margins, PageCursor, TextStyle};
//!
//! let mut doc = Document::default();
//! let font = doc.add_font(Font::builtin(BuiltinFont::Helvetica));
//!
//! let mut cursor = PageCursor::new(doc, font, pagesize::A4, Margins::all(Pt(56.0)));
//! cursor.draw_paragraphs("Hello, world!\nSecond paragraph.", TextStyle::new(Pt(10.0), colours::BLACK));
//! let doc = cursor.finish();
//!
//! assert_eq!(doc.page_count(), 1);
//! ```

mod cursor;
mod margins;
mod text;

pub use cursor::*;
pub use margins::*;
pub use text::*;
