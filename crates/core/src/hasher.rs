//! Deterministic text to base-color hashing.
//!
//! [`StringHasher`] is the seam between the contrast policies and whatever
//! algorithm turns a string into a starting color. The default
//! [`BkdrHasher`] is a pure integer hash over UTF-16 code units, so the same
//! text and range give the same [`Hsl`] on every platform.

use serde::{Deserialize, Serialize};

use crate::color::Hsl;
use crate::error::ColorError;

/// Inclusive hue interval in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HueRange {
    pub min: f64,
    pub max: f64,
}

impl HueRange {
    /// The whole color wheel.
    pub const FULL: HueRange = HueRange {
        min: 0.0,
        max: 360.0,
    };
}

/// The band a hasher may draw a base color from: a hue interval plus small
/// candidate sets for saturation and lightness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HashRange {
    pub hue: HueRange,
    pub saturation: Vec<f64>,
    pub lightness: Vec<f64>,
}

impl HashRange {
    /// Delta policy, light mode: vivid and pale backgrounds.
    pub fn delta_light() -> Self {
        Self {
            hue: HueRange::FULL,
            saturation: vec![0.6, 0.7, 0.8],
            lightness: vec![0.85, 0.9, 0.95],
        }
    }

    /// Delta policy, dark mode: muted and deep backgrounds.
    pub fn delta_dark() -> Self {
        Self {
            hue: HueRange::FULL,
            saturation: vec![0.5, 0.6, 0.7],
            lightness: vec![0.15, 0.2, 0.25],
        }
    }

    /// Absolute policy, both modes. Lightness is discarded by the policy;
    /// only hue and saturation matter.
    pub fn vibrant() -> Self {
        Self {
            hue: HueRange::FULL,
            saturation: vec![0.7, 0.75, 0.8],
            lightness: vec![0.45, 0.5, 0.55],
        }
    }

    /// Checks that the range can always yield an in-range color.
    pub fn validate(&self) -> Result<(), ColorError> {
        let HueRange { min, max } = self.hue;
        if !min.is_finite() || !max.is_finite() || min < 0.0 || max > 360.0 || min > max {
            return Err(ColorError::InvalidConfig(format!(
                "hue range [{min}, {max}] must lie within [0, 360] with min <= max"
            )));
        }
        check_candidates("saturation", &self.saturation)?;
        check_candidates("lightness", &self.lightness)
    }
}

fn check_candidates(name: &str, values: &[f64]) -> Result<(), ColorError> {
    if values.is_empty() {
        return Err(ColorError::InvalidConfig(format!(
            "{name} candidates must not be empty"
        )));
    }
    if let Some(bad) = values.iter().find(|v| !(0.0..=1.0).contains(*v)) {
        return Err(ColorError::InvalidConfig(format!(
            "{name} candidate {bad} outside [0, 1]"
        )));
    }
    Ok(())
}

/// Maps text to a base color inside a [`HashRange`].
///
/// Implementations must be pure: the result depends only on `text` and
/// `range`. The trait is object-safe.
pub trait StringHasher {
    fn base_color(&self, text: &str, range: &HashRange) -> Hsl;
}

/// BKDR string hash bucketed into hue, saturation and lightness.
///
/// The hash runs over the UTF-16 code units of `text` followed by `'x'`,
/// multiplying by 131 and dividing by 137 whenever the accumulator would
/// leave the 53-bit safe-integer range. Hue takes one of 727 evenly spaced
/// steps across the range; saturation and lightness are then picked from the
/// candidate lists by successive ceiling divisions of the hash.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BkdrHasher;

impl BkdrHasher {
    const SEED: u64 = 131;
    const SEED2: u64 = 137;
    /// Largest accumulator that can still be multiplied without losing
    /// integer precision in a 53-bit mantissa.
    const MAX_SAFE: u64 = 9_007_199_254_740_991 / Self::SEED2;
    /// Number of hue steps; prime so consecutive hashes spread evenly.
    const HUE_RESOLUTION: u64 = 727;

    /// Raw BKDR hash of `text`.
    pub fn hash(text: &str) -> u64 {
        text.encode_utf16()
            .chain(std::iter::once(u16::from(b'x')))
            .fold(0u64, |hash, unit| {
                let hash = if hash > Self::MAX_SAFE {
                    hash / Self::SEED2
                } else {
                    hash
                };
                hash * Self::SEED + u64::from(unit)
            })
    }
}

impl StringHasher for BkdrHasher {
    fn base_color(&self, text: &str, range: &HashRange) -> Hsl {
        let hash = Self::hash(text);

        let step = (hash % Self::HUE_RESOLUTION) as f64;
        let h = step * (range.hue.max - range.hue.min) / Self::HUE_RESOLUTION as f64 + range.hue.min;

        let hash = hash.div_ceil(360);
        let s = pick(&range.saturation, hash);
        let hash = hash.div_ceil(range.saturation.len().max(1) as u64);
        let l = pick(&range.lightness, hash);

        Hsl::new(h, s, l)
    }
}

/// Picks `values[index % len]`, or the midpoint for an empty list.
fn pick(values: &[f64], index: u64) -> f64 {
    if values.is_empty() {
        return 0.5;
    }
    values[(index % values.len() as u64) as usize]
}
