mod colour;
pub use colour::*;

mod content;

mod document;
pub use document::*;

mod font;
pub use font::*;

mod info;
pub use info::*;

/// Utility functions and structures to lay text out across pages
pub mod layout;

mod outline;
pub use outline::*;

mod page;
pub use page::*;

pub mod pagesize;
pub use pagesize::Paper;

mod rect;
pub use rect::*;

pub(crate) mod refs;

mod units;
pub use units::*;

mod error;
pub use error::*;

mod ata;
pub use ata::*;

pub mod scripture;

/// Re-export PDF-writer functionality, mostly for custom [pdf_writer::Content] generation
pub use pdf_writer;
