use crate::colour::{colours, Colour};
use crate::layout::{Margins, TextStyle};
use crate::pagesize::Paper;
use crate::units::{Mm, Pt};
use serde::Deserialize;

/// Every visual constant of an ata document. Missing keys in a deserialized table
/// keep their [Style::standard] value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Style {
    pub paper: Paper,
    pub margins: Margins,

    pub header_size: Pt,
    /// Space taken by the header line before the status badge
    pub header_advance: Pt,
    /// Whether the status badge is drawn under the header
    pub show_status: bool,
    pub status_size: Pt,
    pub status_advance: Pt,
    /// Status shown when the record has none
    pub default_status: String,

    pub title_size: Pt,
    pub title_rule_offset: Pt,
    pub title_rule_thickness: Pt,
    pub theme_size: Pt,
    pub body_size: Pt,
    pub guidance_size: Pt,
    /// Line spacing as a multiple of the font size
    pub leading_factor: f32,

    /// Space after the last item of a block
    pub block_gap: Pt,
    /// Space between items within a block
    pub item_gap: Pt,
    /// Space after template guidance of an action category
    pub guidance_gap: Pt,
    /// Space after the theme line
    pub theme_gap: Pt,

    pub text_colour: Colour,
    pub accent_colour: Colour,
    pub status_colour: Colour,
    pub muted_colour: Colour,

    pub footer_size: Pt,
    pub footer_caption: String,
    /// Label of the last speaker, which is not numbered like the others
    pub last_speaker_label: String,

    /// Font size and line spacing for records that are plain text
    pub raw_size: Pt,
    pub raw_leading: Pt,
    /// Plain text lines are cut to this many characters
    pub raw_max_chars: usize,
}

impl Default for Style {
    fn default() -> Self {
        Style::standard()
    }
}

impl Style {
    /// The full layout, with a status badge under the header
    pub fn standard() -> Style {
        Style {
            paper: Paper::A4,
            margins: Margins::all(Mm(20.0)),
            header_size: Pt(16.0),
            header_advance: Pt(18.0),
            show_status: true,
            status_size: Pt(10.0),
            status_advance: Pt(14.0),
            default_status: "Completa".to_string(),
            title_size: Pt(12.0),
            title_rule_offset: Pt(3.0),
            title_rule_thickness: Pt(0.5),
            theme_size: Pt(11.0),
            body_size: Pt(10.0),
            guidance_size: Pt(10.0),
            leading_factor: 1.2,
            block_gap: Pt(6.0),
            item_gap: Pt(4.0),
            guidance_gap: Pt(3.0),
            theme_gap: Pt(8.0),
            text_colour: colours::BLACK,
            accent_colour: colours::ACCENT,
            status_colour: colours::STATUS,
            muted_colour: colours::MUTED,
            footer_size: Pt(8.0),
            footer_caption: "Gerado pelo Sistema de Atas".to_string(),
            last_speaker_label: "3º/Último".to_string(),
            raw_size: Pt(10.0),
            raw_leading: Pt(12.0),
            raw_max_chars: 200,
        }
    }

    /// Tighter sizing without the status badge
    pub fn compact() -> Style {
        Style {
            header_size: Pt(14.0),
            header_advance: Pt(16.0),
            show_status: false,
            title_size: Pt(11.0),
            theme_size: Pt(10.0),
            body_size: Pt(9.0),
            guidance_size: Pt(9.0),
            block_gap: Pt(4.0),
            item_gap: Pt(2.0),
            theme_gap: Pt(6.0),
            ..Style::standard()
        }
    }

    fn text(&self, size: Pt, colour: Colour) -> TextStyle {
        TextStyle::new(size, colour).with_leading(size * self.leading_factor)
    }

    pub fn body(&self) -> TextStyle {
        self.text(self.body_size, self.text_colour)
    }

    pub fn guidance(&self) -> TextStyle {
        self.text(self.guidance_size, self.text_colour)
    }

    pub fn theme(&self) -> TextStyle {
        self.text(self.theme_size, self.text_colour)
    }

    pub fn title(&self) -> TextStyle {
        self.text(self.title_size, self.accent_colour)
    }

    pub fn header(&self) -> TextStyle {
        TextStyle::new(self.header_size, self.text_colour).with_leading(self.header_advance)
    }

    pub fn status(&self) -> TextStyle {
        TextStyle::new(self.status_size, self.status_colour).with_leading(self.status_advance)
    }

    pub fn footer(&self) -> TextStyle {
        self.text(self.footer_size, self.muted_colour)
    }

    pub fn raw(&self) -> TextStyle {
        TextStyle::new(self.raw_size, self.text_colour).with_leading(self.raw_leading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_table_keeps_defaults() {
        let style: Style = serde_json::from_value(serde_json::json!({
            "paper": "letter",
            "body_size": 9.5,
            "accent_colour": "#112233",
            "show_status": false,
        }))
        .expect("valid style table");

        assert_eq!(style.paper, Paper::Letter);
        assert_eq!(style.body_size, Pt(9.5));
        assert_eq!(style.accent_colour, Colour::new_rgb_bytes(0x11, 0x22, 0x33));
        assert!(!style.show_status);
        assert_eq!(style.header_size, Style::standard().header_size);
        assert_eq!(style.margins, Style::standard().margins);
    }

    #[test]
    fn test_compact_differs_only_in_sizing() {
        let (standard, compact) = (Style::standard(), Style::compact());
        assert!(compact.body_size < standard.body_size);
        assert!(!compact.show_status);
        assert_eq!(compact.paper, standard.paper);
        assert_eq!(compact.footer_caption, standard.footer_caption);
    }

    #[test]
    fn test_leading_follows_factor() {
        let style = Style::standard();
        assert_eq!(style.body().leading(), Pt(10.0) * 1.2);
        assert_eq!(style.header().leading(), Pt(18.0));
    }
}
