use super::{BuiltinFont, Font};
use crate::PDFError;
use log::{debug, warn};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Environment variable naming a TrueType font to prefer over the search paths
pub const FONT_PATH_ENV: &str = "ATA_FONT_PATH";

/// File name of the preferred face; it has full coverage of accented Latin text
const PREFERRED_FONT: &str = "DejaVuSans.ttf";

const SYSTEM_FONT_DIRS: [&str; 5] = [
    "/usr/share/fonts/truetype/dejavu",
    "/usr/share/fonts/dejavu",
    "/usr/share/fonts/TTF",
    "/Library/Fonts",
    "C:\\Windows\\Fonts",
];

static DEFAULT_SOURCE: OnceCell<FontSource> = OnceCell::new();

/// Where the body font of a document comes from. Resolving a source is cheap to
/// repeat: every document gets its own [Font] loaded from it.
#[derive(Clone, Debug)]
pub enum FontSource {
    /// The raw bytes of a TrueType / OpenType font which has already parsed once
    TrueType { path: PathBuf, bytes: Arc<Vec<u8>> },
    /// A font every PDF reader has
    Builtin(BuiltinFont),
}

impl FontSource {
    /// Read and validate a TrueType font from disk
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<FontSource, PDFError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        Font::load(bytes.clone())?;
        Ok(FontSource::TrueType {
            path: path.to_path_buf(),
            bytes: Arc::new(bytes),
        })
    }

    /// Search for the preferred accented-text font, falling back to builtin Helvetica
    /// when none of the candidates can be read and parsed
    pub fn discover() -> FontSource {
        for candidate in candidate_paths() {
            match FontSource::from_path(&candidate) {
                Ok(source) => {
                    debug!("using font {}", candidate.display());
                    return source;
                }
                Err(PDFError::Io(_)) => continue,
                Err(e) => warn!("skipping unusable font {}: {e}", candidate.display()),
            }
        }
        warn!("{PREFERRED_FONT} not found, falling back to builtin Helvetica");
        FontSource::Builtin(BuiltinFont::Helvetica)
    }

    /// Instantiate the font for one document
    pub fn load(&self) -> Result<Font, PDFError> {
        match self {
            FontSource::TrueType { bytes, .. } => Font::load(bytes.as_ref().clone()),
            FontSource::Builtin(font) => Ok(Font::builtin(*font)),
        }
    }
}

impl Default for FontSource {
    fn default() -> Self {
        default_font_source().clone()
    }
}

/// The process-wide body font, resolved on first use and never re-registered
pub fn default_font_source() -> &'static FontSource {
    DEFAULT_SOURCE.get_or_init(FontSource::discover)
}

fn candidate_paths() -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = std::env::var_os(FONT_PATH_ENV)
        .map(PathBuf::from)
        .into_iter()
        .collect();
    paths.push(PathBuf::from(PREFERRED_FONT));
    paths.extend(SYSTEM_FONT_DIRS.iter().map(|dir| Path::new(dir).join(PREFERRED_FONT)));
    paths
}
