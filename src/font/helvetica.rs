//! Metrics and encoding for the builtin Helvetica face. Widths are the advance
//! widths from the Adobe Core14 AFM, in 1/1000 em.

pub(crate) const UNITS_PER_EM: f32 = 1000.0;

/// Advance widths for 0x20..=0x7E
#[rustfmt::skip]
const ASCII_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    278, 278, 584, 584, 584, 556, 1015,
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    278, 278, 278, 469, 556, 333,
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    334, 260, 334, 584,
];

/// Advance widths for 0xA0..=0xFF, where WinAnsi matches Latin-1
#[rustfmt::skip]
const LATIN1_WIDTHS: [u16; 96] = [
    278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500,
];

/// Characters WinAnsi places in 0x80..=0x9F, with their code and width
const WIN_ANSI_EXTRAS: [(char, u8, u16); 18] = [
    ('€', 0x80, 556),
    ('‚', 0x82, 222),
    ('„', 0x84, 333),
    ('…', 0x85, 1000),
    ('†', 0x86, 556),
    ('‡', 0x87, 556),
    ('‰', 0x89, 1000),
    ('Œ', 0x8C, 1000),
    ('‘', 0x91, 222),
    ('’', 0x92, 222),
    ('“', 0x93, 333),
    ('”', 0x94, 333),
    ('•', 0x95, 350),
    ('–', 0x96, 556),
    ('—', 0x97, 1000),
    ('™', 0x99, 1000),
    ('œ', 0x9C, 944),
    ('Ÿ', 0x9F, 667),
];

/// WinAnsi code for a character, if the encoding has one
pub(crate) fn encode(ch: char) -> Option<u8> {
    match ch as u32 {
        0x20..=0x7E | 0xA0..=0xFF => Some(ch as u32 as u8),
        _ => WIN_ANSI_EXTRAS
            .iter()
            .find(|(c, _, _)| *c == ch)
            .map(|&(_, code, _)| code),
    }
}

/// Advance width of a character in font units. Characters outside of WinAnsi are
/// drawn as `?`, so they measure as one too.
pub(crate) fn advance(ch: char) -> u16 {
    match ch as u32 {
        code @ 0x20..=0x7E => ASCII_WIDTHS[(code - 0x20) as usize],
        code @ 0xA0..=0xFF => LATIN1_WIDTHS[(code - 0xA0) as usize],
        _ => WIN_ANSI_EXTRAS
            .iter()
            .find(|(c, _, _)| *c == ch)
            .map(|&(_, _, width)| width)
            .unwrap_or(ASCII_WIDTHS[(b'?' - 0x20) as usize]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_advances() {
        assert_eq!(advance(' '), 278);
        assert_eq!(advance('A'), 667);
        assert_eq!(advance('i'), 222);
        assert_eq!(advance('W'), 944);
        assert_eq!(advance('~'), 584);
    }

    #[test]
    fn test_accented_advances() {
        assert_eq!(advance('ç'), 500);
        assert_eq!(advance('ã'), advance('a'));
        assert_eq!(advance('É'), advance('E'));
        assert_eq!(advance('º'), 365);
    }

    #[test]
    fn test_encoding() {
        assert_eq!(encode('a'), Some(b'a'));
        assert_eq!(encode('ç'), Some(0xE7));
        assert_eq!(encode('—'), Some(0x97));
        assert_eq!(encode('\u{3b1}'), None);
        assert_eq!(advance('\u{3b1}'), advance('?'));
    }
}
