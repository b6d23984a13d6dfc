//! Discrete palette selection.
//!
//! A 32-bit rolling hash (`h = h * 31 + unit`, wrapping) over the UTF-16
//! code units of the text picks one of six fixed entries per mode. No HSL
//! math is involved; the entries are literal colors.

use crate::mode::Mode;
use crate::scheme::ColorTriple;

/// A literal palette entry. Same shape as a generated triple.
pub type PaletteEntry = ColorTriple;

/// Number of entries in each palette.
pub const PALETTE_LEN: usize = 6;

/// Light palette: pale backgrounds with saturated borders and deep text.
pub const LIGHT_PALETTE: [PaletteEntry; PALETTE_LEN] = [
    ColorTriple::from_u32(0xe3f2fd, 0x1976d2, 0x0d47a1),
    ColorTriple::from_u32(0xf3e5f5, 0x7b1fa2, 0x4a148c),
    ColorTriple::from_u32(0xe8f5e8, 0x388e3c, 0x1b5e20),
    ColorTriple::from_u32(0xfff3e0, 0xf57c00, 0xe65100),
    ColorTriple::from_u32(0xfce4ec, 0xc2185b, 0x880e4f),
    ColorTriple::from_u32(0xe0f2f1, 0x00695c, 0x004d40),
];

/// Dark palette: deep backgrounds with bright borders and pale text.
pub const DARK_PALETTE: [PaletteEntry; PALETTE_LEN] = [
    ColorTriple::from_u32(0x1a237e, 0x3f51b5, 0xc5cae9),
    ColorTriple::from_u32(0x4a148c, 0x9c27b0, 0xe1bee7),
    ColorTriple::from_u32(0x1b5e20, 0x4caf50, 0xc8e6c9),
    ColorTriple::from_u32(0xe65100, 0xff9800, 0xffe0b2),
    ColorTriple::from_u32(0x880e4f, 0xe91e63, 0xf8bbd9),
    ColorTriple::from_u32(0x004d40, 0x009688, 0xb2dfdb),
];

/// The palette for `mode`.
pub fn entries(mode: Mode) -> &'static [PaletteEntry; PALETTE_LEN] {
    match mode {
        Mode::Light => &LIGHT_PALETTE,
        Mode::Dark => &DARK_PALETTE,
    }
}

/// Signed 32-bit rolling hash: `h = h * 31 + unit` with two's-complement
/// wraparound, over UTF-16 code units. The empty string hashes to 0.
pub fn rolling_hash(text: &str) -> i32 {
    text.encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

/// `|rolling_hash(text)| mod 6`.
pub fn palette_index(text: &str) -> usize {
    index_for_hash(rolling_hash(text))
}

/// `|hash| mod 6`. `i32::MIN` is taken as `2^31`.
pub fn index_for_hash(hash: i32) -> usize {
    (hash.unsigned_abs() % PALETTE_LEN as u32) as usize
}

/// Picks the palette entry for `text` in `mode`.
pub fn select(text: &str, mode: Mode) -> PaletteEntry {
    entries(mode)[palette_index(text)]
}
