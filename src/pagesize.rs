//! Paper sizes the documents can be laid out on.
//!
//! All sizes are in portrait orientation (width, height) in points.

use crate::units::*;
use serde::Deserialize;

/// Page dimensions as (width, height) in points.
pub type PageSize = (Pt, Pt);

pub const LETTER: PageSize = (Pt(8.5 * 72.0), Pt(11.0 * 72.0));
pub const A4: PageSize = (Pt(210.0 * 72.0 / 25.4), Pt(297.0 * 72.0 / 25.4));
pub const A5: PageSize = (Pt(148.0 * 72.0 / 25.4), Pt(210.0 * 72.0 / 25.4));

/// A named paper size, as it appears in a [Style](crate::Style) table
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Paper {
    #[default]
    A4,
    A5,
    Letter,
}

impl Paper {
    pub fn size(self) -> PageSize {
        match self {
            Paper::A4 => A4,
            Paper::A5 => A5,
            Paper::Letter => LETTER,
        }
    }
}
