//! Meeting records ("atas") laid out as paginated documents.
//!
//! An ata is built from three inputs: the [Record] itself, the [Details] of what
//! happened in the meeting, and an optional [Template] of boilerplate text. The
//! sections are always laid out in the same order (see [Section]); absent details
//! only leave lines out.

mod compose;
mod export;
mod model;
mod placeholders;
mod style;

pub use compose::Section;
pub use export::*;
pub use model::*;
pub use placeholders::*;
pub use style::*;
