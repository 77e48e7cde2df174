use crate::units::Pt;
use serde::Deserialize;

/// Page margins. Nothing stops content from being drawn outside of them; they
/// define the `ContentBox` of each [`Page`](crate::Page), which in turn is what
/// the layout functions wrap and paginate against.
#[derive(Debug, Default, Clone, Copy, PartialEq, Deserialize)]
pub struct Margins {
    pub top: Pt,
    pub right: Pt,
    pub bottom: Pt,
    pub left: Pt,
}

impl Margins {
    /// Create margins by specifying individual components in a clockwise fashion
    /// starting at the top (in the same order as CSS margins)
    pub fn trbl(top: Pt, right: Pt, bottom: Pt, left: Pt) -> Margins {
        Margins {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Create margins where all values are equal
    pub fn all<D: Into<Pt>>(value: D) -> Margins {
        let value: Pt = value.into();
        Margins::trbl(value, value, value, value)
    }

    /// Create margins with one value for top and bottom and another for left and right
    pub fn symmetric<V: Into<Pt>, H: Into<Pt>>(vertical: V, horizontal: H) -> Margins {
        let (vertical, horizontal) = (vertical.into(), horizontal.into());
        Margins::trbl(vertical, horizontal, vertical, horizontal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Mm;

    #[test]
    fn test_all_from_mm() {
        let margins = Margins::all(Mm(25.4));
        assert!((margins.left.0 - 72.0).abs() < 1e-4);
        assert_eq!(margins.top, margins.bottom);
    }

    #[test]
    fn test_symmetric() {
        let margins = Margins::symmetric(Pt(10.0), Pt(20.0));
        assert_eq!(margins, Margins::trbl(Pt(10.0), Pt(20.0), Pt(10.0), Pt(20.0)));
    }
}
