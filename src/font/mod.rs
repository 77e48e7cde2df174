use crate::{
    refs::{ObjectReferences, RefType},
    PDFError, Pt,
};
use id_arena::Id;
use owned_ttf_parser::{AsFaceRef, GlyphId, OwnedFace};
use pdf_writer::{
    types::{CidFontType, FontFlags, SystemInfo},
    Filter, Finish, Name, Pdf, Ref, Str,
};
use std::collections::HashMap;
use std::io::Write;

mod helvetica;
mod registry;

pub use registry::*;

/// One of the standard fonts every PDF reader ships with. These never need to be
/// embedded, which makes them the fallback when no TrueType font can be loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinFont {
    Helvetica,
}

impl BuiltinFont {
    pub fn base_name(self) -> &'static str {
        match self {
            BuiltinFont::Helvetica => "Helvetica",
        }
    }
}

enum Face {
    TrueType(OwnedFace),
    Builtin(BuiltinFont),
}

/// A font that text can be measured with and drawn in.
///
/// TrueType / OpenType fonts are embedded in their entirety as CID fonts, so glyphs
/// for accented text are always available. Builtin fonts are referenced by name and
/// encoded with WinAnsi; characters outside of that encoding are drawn as `?`.
///
/// Fonts are referred to from page contents by their [Id] within the
/// [Document](crate::Document).
pub struct Font {
    face: Face,
}

/// Glyph id -> (character, advance width in font units)
type GlyphTable = HashMap<u16, (char, u16)>;

impl Font {
    /// Load a TrueType / OpenType font from raw bytes, returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, PDFError> {
        let face = OwnedFace::from_vec(bytes, 0)?;
        Ok(Font {
            face: Face::TrueType(face),
        })
    }

    pub fn builtin(font: BuiltinFont) -> Font {
        Font {
            face: Face::Builtin(font),
        }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self.face, Face::Builtin(_))
    }

    /// The full name of the font, falling back to the family name
    pub fn name(&self) -> String {
        match &self.face {
            Face::TrueType(face) => {
                [
                    owned_ttf_parser::name_id::FULL_NAME,
                    owned_ttf_parser::name_id::FAMILY,
                ]
                .into_iter()
                .find_map(|id| {
                    face.as_face_ref()
                        .names()
                        .into_iter()
                        .find(|name| name.name_id == id && name.is_unicode())
                        .and_then(|name| name.to_string())
                })
                .unwrap_or_else(|| "Embedded".to_string())
            }
            Face::Builtin(font) => font.base_name().to_string(),
        }
    }

    fn scaling(&self, size: Pt) -> Pt {
        match &self.face {
            Face::TrueType(face) => size / face.as_face_ref().units_per_em() as f32,
            Face::Builtin(_) => size / helvetica::UNITS_PER_EM,
        }
    }

    /// The rendered width of `text` at the given size. Control characters are not
    /// drawn; characters the face has no glyph for are drawn as `.notdef`.
    pub fn width_of_text(&self, text: &str, size: Pt) -> Pt {
        let scaling = self.scaling(size);
        match &self.face {
            Face::TrueType(face) => {
                let face = face.as_face_ref();
                text.chars()
                    .filter(|ch| !ch.is_control())
                    .map(|ch| glyph_or_notdef(face, ch))
                    .map(|gid| scaling * face.glyph_hor_advance(gid).unwrap_or_default() as f32)
                    .sum()
            }
            Face::Builtin(_) => text
                .chars()
                .filter(|ch| !ch.is_control())
                .map(|ch| scaling * helvetica::advance(ch) as f32)
                .sum(),
        }
    }

    /// Write the hex-string body of a `Tj` operand for `text`: 2-byte glyph ids for
    /// embedded faces (Identity-H), single WinAnsi bytes for builtin ones
    pub(crate) fn write_encoded<W: Write>(&self, out: &mut W, text: &str) -> std::io::Result<()> {
        for ch in text.chars().filter(|ch| !ch.is_control()) {
            match &self.face {
                Face::TrueType(face) => {
                    let gid = glyph_or_notdef(face.as_face_ref(), ch);
                    write!(out, "{:04x}", gid.0)?;
                }
                Face::Builtin(_) => {
                    write!(out, "{:02x}", helvetica::encode(ch).unwrap_or(b'?'))?;
                }
            }
        }
        Ok(())
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        id: Id<Font>,
        writer: &mut Pdf,
    ) -> Result<(), PDFError> {
        let font_index = id.index();
        let font_ref = refs.gen(RefType::Font(font_index));
        match &self.face {
            Face::Builtin(font) => {
                writer
                    .type1_font(font_ref)
                    .base_font(Name(font.base_name().as_bytes()))
                    .encoding_predefined(Name(b"WinAnsiEncoding"));
            }
            Face::TrueType(face) => {
                let glyphs = glyph_table(face)?;
                let cid_font_ref = write_cid(face, &glyphs, refs, font_index, writer, &self.name());
                let to_unicode_ref = write_to_unicode(&glyphs, refs, font_index, writer);

                let mut font = writer.type0_font(font_ref);
                font.base_font(Name(format!("F{font_index}").as_bytes()));
                font.encoding_predefined(Name(b"Identity-H"));
                font.descendant_font(cid_font_ref);
                font.to_unicode(to_unicode_ref);
            }
        }
        Ok(())
    }
}

fn glyph_or_notdef(face: &owned_ttf_parser::Face, ch: char) -> GlyphId {
    face.glyph_index(ch).unwrap_or(GlyphId(0))
}

fn glyph_table(face: &OwnedFace) -> Result<GlyphTable, PDFError> {
    let face = face.as_face_ref();
    let cmap = face.tables().cmap.ok_or(PDFError::MissingCmap)?;

    let mut table = GlyphTable::new();
    for subtable in cmap.subtables.into_iter().filter(|t| t.is_unicode()) {
        subtable.codepoints(|codepoint| {
            let Ok(ch) = char::try_from(codepoint) else {
                return;
            };
            if let Some(gid) = subtable.glyph_index(codepoint).filter(|gid| gid.0 > 0) {
                let advance = face.glyph_hor_advance(gid).unwrap_or_default();
                table.entry(gid.0).or_insert((ch, advance));
            }
        });
    }
    Ok(table)
}

fn write_cid(
    face: &OwnedFace,
    glyphs: &GlyphTable,
    refs: &mut ObjectReferences,
    font_index: usize,
    writer: &mut Pdf,
    name: &str,
) -> Ref {
    let descriptor_ref = write_descriptor(face, glyphs, refs, font_index, writer, name);
    let face = face.as_face_ref();
    let scaling = 1000.0 / face.units_per_em() as f32;

    let id = refs.gen(RefType::CidFont(font_index));
    let mut cid_font = writer.cid_font(id);
    cid_font.subtype(CidFontType::Type2);
    cid_font.base_font(Name(format!("F{font_index}").as_bytes()));
    cid_font.system_info(SystemInfo {
        registry: Str(b"Adobe"),
        ordering: Str(b"Identity"),
        supplement: 0,
    });
    cid_font.font_descriptor(descriptor_ref);

    // the most common advance becomes the default width
    let mut counts: HashMap<u16, usize> = HashMap::new();
    for &(_, advance) in glyphs.values() {
        *counts.entry(advance).or_insert(0) += 1;
    }
    let default_width = counts
        .into_iter()
        .max_by_key(|&(_, count)| count)
        .map(|(advance, _)| advance as f32 * scaling)
        .unwrap_or(1000.0);

    let id_widths = glyph_widths(face, glyphs);

    // runs of consecutive glyph ids share one widths entry
    let mut widths = cid_font.widths();
    let mut run: Vec<f32> = Vec::new();
    let mut run_start: u16 = 0;
    for (gid, width) in id_widths {
        if !run.is_empty() && gid as usize != run_start as usize + run.len() {
            widths.consecutive(run_start, run.drain(..));
        }
        if run.is_empty() {
            run_start = gid;
        }
        run.push(width);
    }
    if !run.is_empty() {
        widths.consecutive(run_start, run);
    }
    widths.finish();

    cid_font.default_width(default_width);
    cid_font.cid_to_gid_map_predefined(Name(b"Identity"));

    id
}

/// Widths in 1/1000 em by glyph id, sorted. `.notdef` is included since it is drawn
/// for every character the face has no glyph for.
fn glyph_widths(face: &owned_ttf_parser::Face, glyphs: &GlyphTable) -> Vec<(u16, f32)> {
    let scaling = 1000.0 / face.units_per_em() as f32;
    let notdef = face.glyph_hor_advance(GlyphId(0)).unwrap_or_default();
    let mut widths: Vec<(u16, f32)> = std::iter::once((0, notdef))
        .chain(glyphs.iter().map(|(&gid, &(_, advance))| (gid, advance)))
        .map(|(gid, advance)| (gid, advance as f32 * scaling))
        .collect();
    widths.sort_by_key(|&(gid, _)| gid);
    widths
}

fn write_descriptor(
    owned: &OwnedFace,
    glyphs: &GlyphTable,
    refs: &mut ObjectReferences,
    font_index: usize,
    writer: &mut Pdf,
    name: &str,
) -> Ref {
    let data_ref = refs.gen(RefType::FontData(font_index));
    writer
        .stream(data_ref, owned.as_slice())
        .pair(Name(b"Length1"), owned.as_slice().len() as i32);

    let face = owned.as_face_ref();
    let scaling = 1000.0 / face.units_per_em() as f32;
    let max_width = glyphs.values().map(|&(_, w)| w).max().unwrap_or_default() as f32;
    let avg_width = if glyphs.is_empty() {
        0.0
    } else {
        glyphs.values().map(|&(_, w)| w as f32).sum::<f32>() / glyphs.len() as f32
    };
    let bbox = face.global_bounding_box();

    let id = refs.gen(RefType::FontDescriptor(font_index));
    let mut descriptor = writer.font_descriptor(id);
    descriptor.name(Name(name.replace(' ', "").as_bytes()));

    let mut flags = FontFlags::NON_SYMBOLIC;
    if face.is_monospaced() {
        flags.insert(FontFlags::FIXED_PITCH);
    }
    if face.is_italic() {
        flags.insert(FontFlags::ITALIC);
    }
    descriptor.flags(flags);
    descriptor.bbox(pdf_writer::Rect {
        x1: bbox.x_min as f32 * scaling,
        y1: bbox.y_min as f32 * scaling,
        x2: bbox.x_max as f32 * scaling,
        y2: bbox.y_max as f32 * scaling,
    });
    descriptor.italic_angle(face.italic_angle());
    descriptor.ascent(face.ascender() as f32 * scaling);
    descriptor.descent(face.descender() as f32 * scaling);
    descriptor.leading(face.line_gap() as f32 * scaling);
    descriptor.cap_height(
        face.capital_height()
            .map(|h| h as f32 * scaling)
            .unwrap_or(face.ascender() as f32 * scaling),
    );
    // the stem width isn't recorded in TrueType fonts; 80 is what most writers use
    descriptor.stem_v(80.0);
    descriptor.avg_width(avg_width * scaling);
    descriptor.max_width(max_width * scaling);
    descriptor.font_file2(data_ref);

    id
}

fn write_to_unicode(
    glyphs: &GlyphTable,
    refs: &mut ObjectReferences,
    font_index: usize,
    writer: &mut Pdf,
) -> Ref {
    let id = refs.gen(RefType::ToUnicode(font_index));

    let mut map = String::from(
        "/CIDInit /ProcSet findresource begin\n\
         12 dict begin\n\
         begincmap\n\
         /CIDSystemInfo\n\
         << /Registry (Adobe)\n\
         /Ordering (UCS) /Supplement 0 >> def\n\
         /CMapName /Adobe-Identity-UCS def\n\
         /CMapType 2 def\n\
         1 begincodespacerange\n\
         <0000> <FFFF>\n\
         endcodespacerange\n",
    );

    let mut entries: Vec<(u16, char)> = glyphs.iter().map(|(&gid, &(ch, _))| (gid, ch)).collect();
    entries.sort_by_key(|&(gid, _)| gid);

    // bfchar blocks hold at most 100 entries
    for block in entries.chunks(100) {
        map.push_str(&format!("{} beginbfchar\n", block.len()));
        for &(gid, ch) in block {
            let mut utf16 = [0u16; 2];
            let units: String = ch
                .encode_utf16(&mut utf16)
                .iter()
                .map(|unit| format!("{unit:04x}"))
                .collect();
            map.push_str(&format!("<{gid:04x}> <{units}>\n"));
        }
        map.push_str("endbfchar\n");
    }
    map.push_str("endcmap CMapName currentdict /CMap defineresource pop end end\n");

    let compressed = miniz_oxide::deflate::compress_to_vec_zlib(map.as_bytes(), 6);
    writer
        .stream(id, compressed.as_slice())
        .filter(Filter::FlateDecode);

    id
}
