use super::model::{ActionCategory, Details, Record, Template};
use super::placeholders::Placeholders;
use super::style::Style;
use crate::document::Document;
use crate::font::Font;
use crate::layout::{Measure, PageCursor};
use crate::page::{RuleLayout, SpanFont, SpanLayout};
use crate::units::Pt;
use id_arena::Id;
use log::debug;

/// The sections of an ata, in the order they are always laid out. Only what is inside
/// a section depends on the data; the order never does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Header,
    Theme,
    Welcome,
    Opening,
    Actions,
    Sacrament,
    Messages,
    Closing,
}

impl Section {
    pub const ORDER: [Section; 8] = [
        Section::Header,
        Section::Theme,
        Section::Welcome,
        Section::Opening,
        Section::Actions,
        Section::Sacrament,
        Section::Messages,
        Section::Closing,
    ];

    /// The styled title drawn at the top of the section, if it has one
    pub fn title(self) -> Option<&'static str> {
        match self {
            Section::Header | Section::Theme => None,
            Section::Welcome => Some("BOAS VINDAS"),
            Section::Opening => Some("ABERTURA"),
            Section::Actions => Some("AÇÕES"),
            Section::Sacrament => Some("SACRAMENTO"),
            Section::Messages => Some("MENSAGENS"),
            Section::Closing => Some("ENCERRAMENTO"),
        }
    }
}

/// Lays the sections of one ata out through a [PageCursor]
pub(crate) struct Composer<'a> {
    cursor: &'a mut PageCursor,
    style: &'a Style,
    record: &'a Record,
    details: &'a Details,
    template: Option<&'a Template>,
    placeholders: Placeholders<'a>,
}

impl<'a> Composer<'a> {
    pub(crate) fn new(
        cursor: &'a mut PageCursor,
        style: &'a Style,
        record: &'a Record,
        details: &'a Details,
        template: Option<&'a Template>,
    ) -> Self {
        Composer {
            cursor,
            style,
            record,
            details,
            template,
            placeholders: Placeholders::new(record, details),
        }
    }

    /// Lay out every section, returning the ones that drew anything
    pub(crate) fn compose(mut self) -> Vec<Section> {
        Section::ORDER
            .into_iter()
            .filter(|&section| {
                let drawn = self.section(section);
                debug!("section {section:?}: {}", if drawn { "drawn" } else { "omitted" });
                drawn
            })
            .collect()
    }

    fn section(&mut self, section: Section) -> bool {
        match section {
            Section::Header => self.header(),
            Section::Theme => self.theme(),
            Section::Welcome => self.welcome(),
            Section::Opening => self.opening(),
            Section::Actions => self.actions(),
            Section::Sacrament => self.sacrament(),
            Section::Messages => self.messages(),
            Section::Closing => self.closing(),
        }
    }

    fn title(&mut self, section: Section) {
        let Some(title) = section.title() else {
            return;
        };
        let style = self.style.title();
        self.cursor.ensure_room();
        self.cursor.bookmark(title);

        let baseline = self.cursor.y();
        self.cursor.draw_line(title, style);
        let rule_y = baseline - self.style.title_rule_offset;
        let (from, to) = (self.cursor.x(), self.cursor.right());
        self.cursor.draw_rule(
            from,
            to,
            rule_y,
            self.style.title_rule_thickness,
            self.style.accent_colour,
        );
    }

    /// Template text with placeholders filled in, if the template has it
    fn boilerplate(&self, pick: impl Fn(&Template) -> Option<&String>) -> Option<String> {
        self.template
            .and_then(pick)
            .map(|text| self.placeholders.apply(text))
    }

    fn block(&mut self, text: &str, gap: Pt) {
        self.cursor.draw_paragraphs(text, self.style.body());
        self.cursor.advance(gap);
    }

    fn labelled(&mut self, label: &str, value: Option<&String>, gap: Pt) {
        if let Some(value) = value {
            self.block(&format!("{label}: {value}"), gap);
        }
    }

    fn header(&mut self) -> bool {
        let kind = capitalize(self.record.kind.as_deref().unwrap_or_default());
        let mut header = format!("Ata {kind}").trim_end().to_string();
        if let Some(date) = &self.record.date {
            header.push_str(" - ");
            header.push_str(date);
        }
        self.cursor.draw_line(&header, self.style.header());

        if self.style.show_status {
            let status = self
                .record
                .status
                .as_deref()
                .unwrap_or(&self.style.default_status);
            self.cursor
                .draw_line(&format!("Status: {status}"), self.style.status());
        }
        true
    }

    fn theme(&mut self) -> bool {
        let Some(theme) = &self.details.theme else {
            return false;
        };
        self.cursor
            .draw_paragraphs(&format!("TEMA: {theme}"), self.style.theme());
        self.cursor.advance(self.style.theme_gap);
        true
    }

    fn welcome(&mut self) -> bool {
        self.title(Section::Welcome);
        if let Some(text) = self.boilerplate(|t| t.welcome.as_ref()) {
            self.block(&text, self.style.block_gap);
        }
        true
    }

    fn opening(&mut self) -> bool {
        self.title(Section::Opening);
        let (details, item, block) = (self.details, self.style.item_gap, self.style.block_gap);

        self.labelled("Presidida por", details.presiding.as_ref(), item);
        self.labelled("Dirigida por", details.conducting.as_ref(), item);
        if !details.greeters.is_empty() {
            self.block(&format!("Recepcionistas: {}", details.greeters.join(", ")), item);
        }
        self.labelled(
            "Reconhecemos a presença",
            details.acknowledged_presence.as_ref(),
            item,
        );
        if !details.announcements.is_empty() {
            self.block(&format!("Anúncios:\n{}", details.announcements.join("\n")), item);
        }
        self.labelled("Hino de Abertura", details.opening_hymn.as_ref(), item);
        self.labelled("Oração de Abertura", details.opening_prayer.as_ref(), block);
        true
    }

    fn actions(&mut self) -> bool {
        let guidance = self.template.map(|t| &t.guidance);
        let present = |category: &ActionCategory| {
            !self.details.action(*category).is_empty()
                || guidance.is_some_and(|g| g.contains_key(category))
        };
        if !ActionCategory::ALL.iter().any(present) {
            return false;
        }

        self.title(Section::Actions);
        for category in ActionCategory::ALL {
            if let Some(text) = self.boilerplate(|t| t.guidance.get(&category)) {
                self.cursor.draw_paragraphs(&text, self.style.guidance());
                self.cursor.advance(self.style.guidance_gap);
            }
            let entries = self.details.action(category);
            if !entries.is_empty() {
                let text = format!("{}:\n{}", category.label(), entries.join("\n"));
                self.block(&text, self.style.block_gap);
            }
        }
        true
    }

    fn sacrament(&mut self) -> bool {
        self.title(Section::Sacrament);
        if let Some(text) = self.boilerplate(|t| t.sacrament.as_ref()) {
            self.block(&text, self.style.block_gap);
        }
        let details = self.details;
        self.labelled("Hino Sacramental", details.sacrament_hymn.as_ref(), self.style.block_gap);
        true
    }

    fn messages(&mut self) -> bool {
        self.title(Section::Messages);
        if let Some(text) = self.boilerplate(|t| t.messages.as_ref()) {
            self.block(&text, self.style.block_gap);
        }

        let mut speakers: Vec<String> = self
            .details
            .speakers
            .iter()
            .enumerate()
            .map(|(i, name)| format!("{}º - {name}", i + 1))
            .collect();
        if let Some(last) = &self.details.last_speaker {
            speakers.push(format!("{} - {last}", self.style.last_speaker_label));
        }
        if !speakers.is_empty() {
            self.block(
                &format!("Discursantes:\n{}", speakers.join("\n")),
                self.style.block_gap,
            );
        }

        let details = self.details;
        let hymn = details.intermediate_hymn.as_ref();
        self.labelled("Hino Intermediário", hymn, self.style.block_gap);
        true
    }

    fn closing(&mut self) -> bool {
        self.title(Section::Closing);
        if let Some(text) = self.boilerplate(|t| t.closing.as_ref()) {
            self.block(&text, self.style.block_gap);
        }
        let (details, item, block) = (self.details, self.style.item_gap, self.style.block_gap);
        self.labelled("Hino de Encerramento", details.closing_hymn.as_ref(), item);
        self.labelled("Oração de Encerramento", details.closing_prayer.as_ref(), block);
        true
    }
}

/// Draw plain text line by line, without wrapping or sections. Overlong lines are cut.
pub(crate) fn compose_raw(cursor: &mut PageCursor, style: &Style, text: &str) {
    for line in text.lines() {
        let line: String = line.chars().take(style.raw_max_chars).collect();
        cursor.draw_line(&line, style.raw());
    }
}

/// Stamp the footer on every page: a separator, the caption on the left and the page
/// number on the right
pub(crate) fn stamp_footers(document: &mut Document, font: Id<Font>, style: &Style) {
    let total = document.page_count();
    let footer = style.footer();
    let span_font = SpanFont {
        id: font,
        size: footer.size,
    };

    for (index, id) in document.page_order.clone().into_iter().enumerate() {
        let label = format!("Página {} de {total}", index + 1);
        let label_width = document.width_of_text(&label, font, footer.size);
        let Some(page) = document.pages.get_mut(id) else {
            continue;
        };

        let bottom = page.content_box.y1;
        let (left, right) = (page.content_box.x1, page.content_box.x2);
        let baseline = bottom / 2.0;

        page.add_rule(RuleLayout {
            from: (left, bottom * 0.75),
            to: (right, bottom * 0.75),
            thickness: style.title_rule_thickness,
            colour: footer.colour,
        });
        page.add_span(SpanLayout {
            text: style.footer_caption.clone(),
            font: span_font,
            colour: footer.colour,
            coords: (left, baseline),
        });
        page.add_span(SpanLayout {
            text: label,
            font: span_font,
            colour: footer.colour,
            coords: (right - label_width, baseline),
        });
    }
}

/// Upper-case the first character and lower-case the rest
fn capitalize(text: &str) -> String {
    let mut chars = text.trim().chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
