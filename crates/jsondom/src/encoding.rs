//! Text encodings: turning a Unicode codepoint into code units.
//!
//! The parser itself only ever inspects the ASCII subset of the grammar, so
//! these encoders are used when *synthesizing* characters: the serializer
//! routes every string payload character through an [`Encoding`] before
//! handing code units to its output stream.

/// Encodes one Unicode codepoint into a sequence of code units.
pub trait Encoding {
    /// The code unit type of this encoding.
    type Unit: Copy + Default;

    /// The most units a single codepoint can occupy.
    const MAX_UNITS: usize;

    /// Encodes `ch` into `out`, returning the number of units written.
    ///
    /// `out` must hold at least [`Self::MAX_UNITS`] units.
    fn encode(ch: char, out: &mut [Self::Unit]) -> usize;
}

/// UTF-8: one to four 8-bit units per codepoint.
pub struct Utf8;

impl Encoding for Utf8 {
    type Unit = u8;

    const MAX_UNITS: usize = 4;

    #[allow(clippy::cast_possible_truncation)]
    fn encode(ch: char, out: &mut [u8]) -> usize {
        let cp = ch as u32;
        if cp <= 0x7F {
            out[0] = cp as u8;
            1
        } else if cp <= 0x7FF {
            out[0] = 0xC0 | (cp >> 6) as u8;
            out[1] = 0x80 | (cp & 0x3F) as u8;
            2
        } else if cp <= 0xFFFF {
            out[0] = 0xE0 | (cp >> 12) as u8;
            out[1] = 0x80 | ((cp >> 6) & 0x3F) as u8;
            out[2] = 0x80 | (cp & 0x3F) as u8;
            3
        } else {
            out[0] = 0xF0 | (cp >> 18) as u8;
            out[1] = 0x80 | ((cp >> 12) & 0x3F) as u8;
            out[2] = 0x80 | ((cp >> 6) & 0x3F) as u8;
            out[3] = 0x80 | (cp & 0x3F) as u8;
            4
        }
    }
}

/// UTF-16: one unit for the basic multilingual plane, a surrogate pair above.
pub struct Utf16;

impl Encoding for Utf16 {
    type Unit = u16;

    const MAX_UNITS: usize = 2;

    #[allow(clippy::cast_possible_truncation)]
    fn encode(ch: char, out: &mut [u16]) -> usize {
        let cp = ch as u32;
        if cp <= 0xFFFF {
            // `char` can never be a lone surrogate, so the unit is valid as is.
            out[0] = cp as u16;
            1
        } else {
            let v = cp - 0x10000;
            out[0] = 0xD800 + (v >> 10) as u16;
            out[1] = 0xDC00 + (v & 0x3FF) as u16;
            2
        }
    }
}

/// UTF-32: every codepoint is exactly one 32-bit unit.
pub struct Utf32;

impl Encoding for Utf32 {
    type Unit = u32;

    const MAX_UNITS: usize = 1;

    fn encode(ch: char, out: &mut [u32]) -> usize {
        out[0] = ch as u32;
        1
    }
}
