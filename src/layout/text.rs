use crate::font::Font;
use crate::page::SpanFont;
use crate::units::Pt;
use id_arena::Id;

/// Anything that knows how wide a string renders in a given font and size.
///
/// [`Document`](crate::Document) measures with the fonts added to it; layout code
/// only depends on this trait so it can be exercised with simpler metrics.
pub trait Measure {
    fn width_of_text(&self, text: &str, font: Id<Font>, size: Pt) -> Pt;
}

/// Splits a single paragraph into lines no wider than `max_width`, filling each line
/// greedily with as many whitespace-separated words as fit.
///
/// Words are never broken: a word that is wider than `max_width` on its own gets a
/// line to itself and overflows it. There is no look-ahead balancing of line lengths
/// either; a short final line is accepted as-is.
///
/// ```
/// use ata_pdf::{BuiltinFont, Document, Font, Pt, SpanFont};
/// use ata_pdf::layout::wrap_lines;
///
/// let mut doc = Document::default();
/// let id = doc.add_font(Font::builtin(BuiltinFont::Helvetica));
/// let font = SpanFont { id, size: Pt(10.0) };
///
/// let lines = wrap_lines(&doc, "Hino de Abertura: Conta as bênçãos", font, Pt(100.0));
/// assert_eq!(lines, vec!["Hino de Abertura:", "Conta as bênçãos"]);
/// ```
pub fn wrap_lines<M: Measure + ?Sized>(
    measure: &M,
    paragraph: &str,
    font: SpanFont,
    max_width: Pt,
) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();

    for word in paragraph.split_whitespace() {
        if line.is_empty() {
            line.push_str(word);
            continue;
        }

        let candidate = format!("{line} {word}");
        if measure.width_of_text(&candidate, font.id, font.size) <= max_width {
            line = candidate;
        } else {
            lines.push(std::mem::replace(&mut line, word.to_string()));
        }
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}
