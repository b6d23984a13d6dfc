//! Color types and HSL/hex conversion for badge-colors.
//!
//! Provides three color types (`Hsl`, `Srgb`, `HexColor`) and pure conversion
//! functions between them. Uses `f64` throughout; quantization to 8-bit
//! happens only when a color becomes a [`HexColor`].
//!
//! Every producer in the crate goes through [`quantize`], so the rounding rule
//! (round half away from zero on the 0-255 scale) is identical everywhere.

use std::fmt;
use std::str::FromStr;

use crate::error::ColorError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// HSL color: hue in degrees `[0, 360)`, saturation and lightness in `[0, 1]`.
///
/// Values built through [`Hsl::new`] are always in range: hue wraps modulo
/// 360 and saturation/lightness clamp silently.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// sRGB color with components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// An 8-bit RGB color rendered as `"#rrggbb"` (always lowercase).
///
/// Serializes as the hex string. Parsing accepts upper or lower case digits,
/// with or without the leading `#`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HexColor {
    rgb: [u8; 3],
}

impl Hsl {
    /// Creates an in-range HSL color. Hue wraps, saturation and lightness clamp.
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: wrap_hue(h),
            s: clamp_unit(s),
            l: clamp_unit(l),
        }
    }

    /// Returns a copy with every component forced back into range.
    pub fn clamped(self) -> Self {
        Self::new(self.h, self.s, self.l)
    }

    /// Converts to hex via [`hsl_to_hex`].
    pub fn to_hex(self) -> HexColor {
        hsl_to_hex(self.h, self.s, self.l)
    }
}

impl Srgb {
    /// Parses a hex color string like "#ff00aa" or "ff00aa" (case insensitive).
    pub fn from_hex(hex: &str) -> Result<Srgb, ColorError> {
        HexColor::parse(hex).map(HexColor::to_srgb)
    }

    /// Quantizes the color to a [`HexColor`]. Out-of-range components clamp.
    pub fn to_hex(self) -> HexColor {
        HexColor::from_rgb(quantize(self.r), quantize(self.g), quantize(self.b))
    }
}

impl HexColor {
    /// Builds a color from 8-bit channels.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { rgb: [r, g, b] }
    }

    /// Builds a color from a packed `0xRRGGBB` literal. Bits above 24 are ignored.
    pub const fn from_u32(packed: u32) -> Self {
        Self::from_rgb((packed >> 16) as u8, (packed >> 8) as u8, packed as u8)
    }

    /// Parses `#rrggbb` or `rrggbb`, case insensitive.
    ///
    /// Returns `ColorError::MalformedHex` for anything else, including
    /// 3-digit shorthand and sign-prefixed digits.
    pub fn parse(input: &str) -> Result<Self, ColorError> {
        let digits = input.strip_prefix('#').unwrap_or(input);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::MalformedHex(input.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| ColorError::MalformedHex(input.to_string()))
        };
        Ok(Self::from_rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// The raw `[r, g, b]` channels.
    pub fn channels(self) -> [u8; 3] {
        self.rgb
    }

    pub fn to_srgb(self) -> Srgb {
        let [r, g, b] = self.rgb;
        Srgb {
            r: f64::from(r) / 255.0,
            g: f64::from(g) / 255.0,
            b: f64::from(b) / 255.0,
        }
    }

    pub fn to_hsl(self) -> Hsl {
        srgb_to_hsl(self.to_srgb())
    }

    /// True when perceived luminance `(0.299 r + 0.587 g + 0.114 b) / 255`
    /// exceeds one half.
    pub fn is_light(self) -> bool {
        let [r, g, b] = self.rgb;
        let luminance = (0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b)) / 255.0;
        luminance > 0.5
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.rgb;
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl PartialEq<str> for HexColor {
    fn eq(&self, other: &str) -> bool {
        HexColor::parse(other).is_ok_and(|o| o == *self)
    }
}

impl PartialEq<&str> for HexColor {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        HexColor::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Wraps a hue into `[0, 360)`. Non-finite input maps to 0.
pub fn wrap_hue(h: f64) -> f64 {
    if !h.is_finite() {
        return 0.0;
    }
    let wrapped = h.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to exactly 360.0
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Clamps into `[0, 1]`. NaN maps to 0.
pub fn clamp_unit(v: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}

/// Scales a `[0, 1]` component to a byte, rounding half away from zero.
///
/// The scaled value is first snapped to six decimals so that float noise
/// just below a `.5` tie (e.g. `127.49999999999991`) rounds the way exact
/// arithmetic would. This widens the tie band: anything within `5e-7` below
/// `n + 0.5` also rounds up, e.g. `100.4999996` gives 101.
pub fn quantize(c: f64) -> u8 {
    let scaled = clamp_unit(c) * 255.0;
    let snapped = (scaled * 1e6).round() / 1e6;
    snapped.round() as u8
}

/// Piecewise hue-to-channel helper; `t` is a hue offset in turns.
fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Converts HSL to sRGB. Input is clamped first.
pub fn hsl_to_srgb(c: Hsl) -> Srgb {
    let Hsl { h, s, l } = c.clamped();
    if s == 0.0 {
        return Srgb { r: l, g: l, b: l };
    }
    let h = h / 360.0;
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    Srgb {
        r: hue_to_channel(p, q, h + 1.0 / 3.0),
        g: hue_to_channel(p, q, h),
        b: hue_to_channel(p, q, h - 1.0 / 3.0),
    }
}

/// Converts sRGB to HSL with hue in degrees.
///
/// Achromatic colors (max == min) get hue and saturation 0. When two channels
/// tie for the maximum, red wins over green, green over blue.
pub fn srgb_to_hsl(c: Srgb) -> Hsl {
    let Srgb { r, g, b } = c;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl::new(0.0, 0.0, l);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl::new(h / 6.0 * 360.0, s, l)
}

/// Converts HSL components to a hex color. Out-of-range input is clamped.
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> HexColor {
    hsl_to_srgb(Hsl::new(h, s, l)).to_hex()
}

/// Parses a hex color and converts it to HSL.
///
/// Returns `ColorError::MalformedHex` if `hex` is not 6 hex digits with an
/// optional `#` prefix.
pub fn hex_to_hsl(hex: &str) -> Result<Hsl, ColorError> {
    HexColor::parse(hex).map(HexColor::to_hsl)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-6;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    // -- Hsl construction --

    #[test]
    fn hsl_new_wraps_hue() {
        assert!(approx_eq(Hsl::new(370.0, 0.5, 0.5).h, 10.0));
        assert!(approx_eq(Hsl::new(-30.0, 0.5, 0.5).h, 330.0));
        assert!(approx_eq(Hsl::new(360.0, 0.5, 0.5).h, 0.0));
    }

    #[test]
    fn hsl_new_clamps_saturation_and_lightness() {
        let c = Hsl::new(10.0, 1.4, -0.2);
        assert_eq!(c.s, 1.0);
        assert_eq!(c.l, 0.0);
    }

    #[test]
    fn hsl_new_maps_non_finite_to_zero() {
        let c = Hsl::new(f64::NAN, f64::NAN, f64::INFINITY);
        assert_eq!(c.h, 0.0);
        assert_eq!(c.s, 0.0);
        assert_eq!(c.l, 1.0);
    }

    #[test]
    fn wrap_hue_never_returns_360() {
        let h = wrap_hue(-1e-20);
        assert!((0.0..360.0).contains(&h), "got {h}");
    }

    // -- quantize --

    #[test]
    fn quantize_rounds_half_away_from_zero() {
        assert_eq!(quantize(127.5 / 255.0), 128);
        assert_eq!(quantize(0.5 / 255.0), 1);
        assert_eq!(quantize(0.4 / 255.0), 0);
    }

    #[test]
    fn quantize_treats_float_noise_below_tie_as_tie() {
        assert_eq!(quantize(127.49999999999991 / 255.0), 128);
        assert_eq!(quantize(25.49999999999997 / 255.0), 26);
    }

    #[test]
    fn quantize_tie_band_is_half_a_millionth_wide() {
        assert_eq!(quantize(100.4999996 / 255.0), 101);
        assert_eq!(quantize(100.499998 / 255.0), 100);
        assert_eq!(quantize(100.49 / 255.0), 100);
    }

    #[test]
    fn quantize_clamps_out_of_range() {
        assert_eq!(quantize(1.5), 255);
        assert_eq!(quantize(-0.1), 0);
    }

    // -- hsl_to_hex --

    #[test]
    fn hsl_to_hex_primaries() {
        assert_eq!(hsl_to_hex(0.0, 1.0, 0.5).to_string(), "#ff0000");
        assert_eq!(hsl_to_hex(120.0, 1.0, 0.5).to_string(), "#00ff00");
        assert_eq!(hsl_to_hex(240.0, 1.0, 0.5).to_string(), "#0000ff");
    }

    #[test]
    fn hsl_to_hex_achromatic_shortcut() {
        assert_eq!(hsl_to_hex(123.0, 0.0, 0.0).to_string(), "#000000");
        assert_eq!(hsl_to_hex(45.0, 0.0, 1.0).to_string(), "#ffffff");
        assert_eq!(hsl_to_hex(300.0, 0.0, 0.5).to_string(), "#808080");
    }

    #[test]
    fn hsl_to_hex_worked_example_base() {
        assert_eq!(hsl_to_hex(210.0, 0.70, 0.50).to_string(), "#2680d9");
    }

    #[test]
    fn hsl_to_hex_worked_example_border_and_text() {
        assert_eq!(hsl_to_hex(210.0, 0.77, 0.35).to_string(), "#15599e");
        assert_eq!(hsl_to_hex(210.0, 0.84, 0.10).to_string(), "#041a2f");
    }

    #[test]
    fn hsl_to_hex_clamps_out_of_range_inputs() {
        assert_eq!(hsl_to_hex(360.0, 1.0, 0.5), hsl_to_hex(0.0, 1.0, 0.5));
        assert_eq!(hsl_to_hex(0.0, 2.0, 0.5), hsl_to_hex(0.0, 1.0, 0.5));
        assert_eq!(hsl_to_hex(0.0, 1.0, 7.0).to_string(), "#ffffff");
    }

    // -- hex_to_hsl --

    #[test]
    fn hex_to_hsl_pure_red() {
        let c = hex_to_hsl("#ff0000").unwrap();
        assert!(approx_eq(c.h, 0.0));
        assert!(approx_eq(c.s, 1.0));
        assert!(approx_eq(c.l, 0.5));
    }

    #[test]
    fn hex_to_hsl_green_and_blue_branches() {
        let green = hex_to_hsl("00ff00").unwrap();
        assert!(approx_eq(green.h, 120.0), "h: {}", green.h);
        let blue = hex_to_hsl("#0000FF").unwrap();
        assert!(approx_eq(blue.h, 240.0), "h: {}", blue.h);
    }

    #[test]
    fn hex_to_hsl_magenta_wraps_through_red_branch() {
        // max is red and g < b, so the +6 correction applies
        let c = hex_to_hsl("#ff00ff").unwrap();
        assert!(approx_eq(c.h, 300.0), "h: {}", c.h);
    }

    #[test]
    fn hex_to_hsl_gray_is_achromatic() {
        let c = hex_to_hsl("#808080").unwrap();
        assert_eq!(c.h, 0.0);
        assert_eq!(c.s, 0.0);
        assert!(approx_eq(c.l, 128.0 / 255.0));
    }

    #[test]
    fn hex_to_hsl_light_branch_uses_high_lightness_formula() {
        // l > 0.5: s = d / (2 - max - min)
        let c = hex_to_hsl("#e3f2fd").unwrap();
        let (max, min) = (253.0 / 255.0, 227.0 / 255.0);
        assert!(approx_eq(c.s, (max - min) / (2.0 - max - min)));
    }

    #[test]
    fn hex_to_hsl_rejects_malformed_input() {
        for bad in ["", "#fff", "#ff00ff00", "#gggggg", "+fffff", "#+fffff", "ff 000", "#ééé"] {
            assert!(
                matches!(hex_to_hsl(bad), Err(ColorError::MalformedHex(_))),
                "accepted {bad:?}"
            );
        }
    }

    // -- HexColor --

    #[test]
    fn hex_color_parse_normalizes_to_lowercase() {
        let c = HexColor::parse("#C0FFEE").unwrap();
        assert_eq!(c.to_string(), "#c0ffee");
        assert_eq!(HexColor::parse("c0ffee").unwrap(), c);
    }

    #[test]
    fn hex_color_from_u32_matches_parse() {
        assert_eq!(HexColor::from_u32(0x1976d2), HexColor::parse("#1976d2").unwrap());
    }

    #[test]
    fn hex_color_compares_with_str_case_insensitively() {
        let c = HexColor::from_u32(0xe3f2fd);
        assert_eq!(c, "#E3F2FD");
        assert_eq!(c, "e3f2fd");
        assert!(c != "#000000");
        assert!(c != "not a color");
    }

    #[test]
    fn hex_color_is_light() {
        for light in ["#FFFFFF", "#F0F0F0", "#FFFF00", "#00FFFF"] {
            assert!(HexColor::parse(light).unwrap().is_light(), "{light}");
        }
        for dark in ["#000000", "#333333", "#0000FF", "#800080"] {
            assert!(!HexColor::parse(dark).unwrap().is_light(), "{dark}");
        }
    }

    #[test]
    fn hex_color_serializes_as_string() {
        let json = serde_json::to_string(&HexColor::from_u32(0xff0000)).unwrap();
        assert_eq!(json, "\"#ff0000\"");
    }

    #[test]
    fn hex_color_deserialize_rejects_invalid() {
        let result: Result<HexColor, _> = serde_json::from_str("\"not-a-color\"");
        assert!(result.is_err());
        let ok: HexColor = serde_json::from_str("\"#00FF00\"").unwrap();
        assert_eq!(ok.channels(), [0, 255, 0]);
    }

    #[test]
    fn srgb_to_hex_clamps_out_of_range() {
        let color = Srgb {
            r: 1.5,
            g: -0.1,
            b: 0.5,
        };
        assert_eq!(color.to_hex().to_string(), "#ff0080");
    }

    #[test]
    fn srgb_from_hex_round_trip() {
        let original = "#804020";
        let color = Srgb::from_hex(original).unwrap();
        assert!(approx_eq(color.r, 0x80 as f64 / 255.0));
        assert_eq!(color.to_hex().to_string(), original);
    }

    // -- Property-based tests --

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn hex_hsl_hex_round_trip_within_one(r: u8, g: u8, b: u8) {
                let original = HexColor::from_rgb(r, g, b);
                let back = original.to_hsl().to_hex();
                for (a, z) in original.channels().iter().zip(back.channels().iter()) {
                    prop_assert!(
                        (i16::from(*a) - i16::from(*z)).abs() <= 1,
                        "{original} -> {back}"
                    );
                }
            }

            #[test]
            fn hex_to_hsl_always_in_range(r: u8, g: u8, b: u8) {
                let c = HexColor::from_rgb(r, g, b).to_hsl();
                prop_assert!((0.0..360.0).contains(&c.h), "h: {}", c.h);
                prop_assert!((0.0..=1.0).contains(&c.s), "s: {}", c.s);
                prop_assert!((0.0..=1.0).contains(&c.l), "l: {}", c.l);
            }

            #[test]
            fn hsl_to_srgb_always_in_unit_range(
                h in -720.0_f64..720.0,
                s in -1.0_f64..2.0,
                l in -1.0_f64..2.0,
            ) {
                let c = hsl_to_srgb(Hsl { h, s, l });
                for v in [c.r, c.g, c.b] {
                    prop_assert!((-1e-12..=1.0 + 1e-12).contains(&v), "component {v}");
                }
            }

            #[test]
            fn hsl_to_hex_is_deterministic(
                h in 0.0_f64..360.0,
                s in 0.0_f64..=1.0,
                l in 0.0_f64..=1.0,
            ) {
                prop_assert_eq!(hsl_to_hex(h, s, l), hsl_to_hex(h, s, l));
            }

            #[test]
            fn hex_parse_display_round_trip(r: u8, g: u8, b: u8) {
                let c = HexColor::from_rgb(r, g, b);
                prop_assert_eq!(HexColor::parse(&c.to_string()).unwrap(), c);
            }
        }
    }
}
