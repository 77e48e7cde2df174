use thiserror::Error;

/// All errors that the crate can generate while building or writing a document
#[derive(Error, Debug)]
pub enum PDFError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsingError(#[from] owned_ttf_parser::FaceParsingError),

    #[error("font has no cmap table to map characters to glyphs")]
    /// The TrueType font cannot be embedded because it has no unicode cmap
    MissingCmap,

    #[error("page is referenced in the page order but missing from the document")]
    /// The page order references a page that is no longer in the arena
    PageMissing,

    #[error("page tree was not allocated before its pages were written")]
    /// A page was written before the document's page tree had a reference
    PageTreeMissing,

    #[error("document has no font to lay text out with")]
    /// Text was laid out before any font was added to the document
    FontMissing,
}
