use super::compose::{compose_raw, stamp_footers, Composer, Section};
use super::model::{Details, Record, Template};
use super::style::Style;
use crate::document::Document;
use crate::font::FontSource;
use crate::info::Info;
use crate::layout::PageCursor;
use crate::PDFError;
use log::{debug, warn};
use serde_json::Value;

pub const PDF_MIME_TYPE: &str = "application/pdf";
pub const DEFAULT_FILENAME: &str = "ata.pdf";
pub const SACRAMENTAL_FILENAME: &str = "ata_sacramental.pdf";

/// A finished document, ready to be sent to whoever asked for it
#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    pub bytes: Vec<u8>,
    pub filename: String,
    pub mime_type: &'static str,
}

/// A laid-out document before it is serialised, with the sections that were drawn.
/// Plain-text records have no sections.
pub struct Layout {
    pub document: Document,
    pub sections: Vec<Section>,
}

/// Renders atas with a given [Style] and body font.
///
/// Every call builds its own document from scratch, so one exporter can be shared
/// between threads.
///
/// ```
/// use ata_pdf::{BuiltinFont, Exporter, FontSource};
/// use serde_json::json;
///
/// let exporter = Exporter::default().with_font(FontSource::Builtin(BuiltinFont::Helvetica));
/// let record = json!({"type": "sacramental", "date": "2024-01-07"});
/// let artifact = exporter
///     .export(&record, Some(&json!({"tema": "Gratidão"})), None, None)
///     .expect("document renders");
///
/// assert_eq!(artifact.filename, "ata.pdf");
/// assert_eq!(artifact.mime_type, "application/pdf");
/// assert!(artifact.bytes.starts_with(b"%PDF"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Exporter {
    pub style: Style,
    pub font: FontSource,
}

impl Exporter {
    pub fn new(style: Style, font: FontSource) -> Exporter {
        Exporter { style, font }
    }

    pub fn with_style(self, style: Style) -> Exporter {
        Exporter { style, ..self }
    }

    pub fn with_font(self, font: FontSource) -> Exporter {
        Exporter { font, ..self }
    }

    fn cursor(&self, info: Info) -> Result<PageCursor, PDFError> {
        let mut document = Document::default();
        document.set_info(info);
        let font = document.add_font(self.font.load()?);
        Ok(PageCursor::new(
            document,
            font,
            self.style.paper.size(),
            self.style.margins,
        ))
    }

    /// Lay out a structured ata
    pub fn layout_ata(
        &self,
        record: &Record,
        details: &Details,
        template: Option<&Template>,
    ) -> Result<Layout, PDFError> {
        let mut cursor = self.cursor(info_for(record))?;
        let font = cursor.font();
        let sections = Composer::new(&mut cursor, &self.style, record, details, template).compose();

        let mut document = cursor.finish();
        stamp_footers(&mut document, font, &self.style);
        debug!(
            "laid out {} sections on {} pages",
            sections.len(),
            document.page_count()
        );
        Ok(Layout { document, sections })
    }

    /// Lay out preformatted text, one line per line of input
    pub fn layout_raw(&self, text: &str) -> Result<Layout, PDFError> {
        let mut cursor = self.cursor(Info::new().title("Ata").clone())?;
        compose_raw(&mut cursor, &self.style, text);
        Ok(Layout {
            document: cursor.finish(),
            sections: Vec::new(),
        })
    }

    /// Lay out loosely-typed inputs. A record that isn't an object is treated as plain
    /// text; details or a template that aren't objects are ignored.
    pub fn layout(
        &self,
        record: &Value,
        details: Option<&Value>,
        template: Option<&Value>,
    ) -> Result<Layout, PDFError> {
        let Value::Object(record) = record else {
            debug!("record is not an object, rendering it as plain text");
            return self.layout_raw(&raw_text(record));
        };

        let record = Record::from(record);
        let details = match details {
            None | Some(Value::Null) => Details::default(),
            Some(Value::Object(details)) => Details::from(details),
            Some(other) => {
                warn!("ignoring details that are not an object: {other}");
                Details::default()
            }
        };
        let template = match template {
            None | Some(Value::Null) => None,
            Some(Value::Object(template)) => Some(Template::from(template)),
            Some(other) => {
                warn!("ignoring template that is not an object: {other}");
                None
            }
        };

        self.layout_ata(&record, &details, template.as_ref())
    }

    /// Render an ata to PDF, named `filename` or [DEFAULT_FILENAME]
    pub fn export(
        &self,
        record: &Value,
        details: Option<&Value>,
        template: Option<&Value>,
        filename: Option<&str>,
    ) -> Result<Artifact, PDFError> {
        let layout = self.layout(record, details, template)?;
        Ok(Artifact {
            bytes: layout.document.to_bytes()?,
            filename: filename.unwrap_or(DEFAULT_FILENAME).to_string(),
            mime_type: PDF_MIME_TYPE,
        })
    }

    /// Same as [Exporter::export], named [SACRAMENTAL_FILENAME] by default
    pub fn export_sacramental(
        &self,
        record: &Value,
        details: Option<&Value>,
        template: Option<&Value>,
        filename: Option<&str>,
    ) -> Result<Artifact, PDFError> {
        self.export(
            record,
            details,
            template,
            Some(filename.unwrap_or(SACRAMENTAL_FILENAME)),
        )
    }
}

/// Render an ata with the default style and font
pub fn export_pdf(
    record: &Value,
    details: Option<&Value>,
    template: Option<&Value>,
    filename: Option<&str>,
) -> Result<Artifact, PDFError> {
    Exporter::default().export(record, details, template, filename)
}

/// Render a sacramental ata with the default style and font
pub fn export_sacramental(
    record: &Value,
    details: Option<&Value>,
    template: Option<&Value>,
    filename: Option<&str>,
) -> Result<Artifact, PDFError> {
    Exporter::default().export_sacramental(record, details, template, filename)
}

fn info_for(record: &Record) -> Info {
    let mut info = Info::new();
    let title = match (&record.kind, &record.date) {
        (Some(kind), Some(date)) => format!("Ata {kind} - {date}"),
        (Some(kind), None) => format!("Ata {kind}"),
        (None, Some(date)) => format!("Ata - {date}"),
        (None, None) => "Ata".to_string(),
    };
    info.title(title);
    if let Some(name) = record.community_name.as_ref().or(record.alias.as_ref()) {
        info.subject(name);
    }
    info
}

/// Falsy records draw nothing, strings draw as they are, anything else as JSON
fn raw_text(value: &Value) -> String {
    match value {
        Value::Null | Value::Bool(false) => String::new(),
        Value::Number(n) if n.as_f64() == Some(0.0) => String::new(),
        Value::Array(items) if items.is_empty() => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
