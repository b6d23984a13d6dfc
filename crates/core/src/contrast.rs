//! Contrast policies: deriving background, border and text colors from a
//! base color.
//!
//! Two strategies share the [`ContrastPolicy`] trait:
//!
//! - [`DeltaParams`] keeps the base as the background and shifts lightness
//!   by fixed offsets for border and text, boosting saturation. Each string
//!   keeps its own lightness, with a guaranteed separation between layers.
//! - [`AbsoluteParams`] keeps only hue and saturation from the base and
//!   places all three colors at fixed lightness targets, so every badge in a
//!   mode carries the same visual weight.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::color::Hsl;
use crate::error::ColorError;
use crate::params::param_f64;

/// The three derived colors before hex conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HslTriple {
    pub background: Hsl,
    pub border: Hsl,
    pub text: Hsl,
}

/// Derives a full [`HslTriple`] from a base color.
pub trait ContrastPolicy {
    fn derive(&self, base: Hsl) -> HslTriple;
}

/// Relative adjustments for the delta strategy.
///
/// Lightness deltas are added to the base lightness; saturation boosts
/// multiply the base saturation. Results are clamped into range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeltaParams {
    pub border_lightness_delta: f64,
    pub text_lightness_delta: f64,
    pub border_saturation_boost: f64,
    pub text_saturation_boost: f64,
}

impl DeltaParams {
    /// Light mode darkens border and text.
    pub const LIGHT: DeltaParams = DeltaParams {
        border_lightness_delta: -0.15,
        text_lightness_delta: -0.40,
        border_saturation_boost: 1.10,
        text_saturation_boost: 1.20,
    };

    /// Dark mode lightens border and text.
    pub const DARK: DeltaParams = DeltaParams {
        border_lightness_delta: 0.20,
        text_lightness_delta: 0.50,
        border_saturation_boost: 1.10,
        text_saturation_boost: 1.15,
    };

    pub fn validate(&self) -> Result<(), ColorError> {
        check_finite(
            "delta",
            &[
                ("borderLightnessDelta", self.border_lightness_delta),
                ("textLightnessDelta", self.text_lightness_delta),
                ("borderSaturationBoost", self.border_saturation_boost),
                ("textSaturationBoost", self.text_saturation_boost),
            ],
        )
    }
}

impl ContrastPolicy for DeltaParams {
    fn derive(&self, base: Hsl) -> HslTriple {
        let base = base.clamped();
        HslTriple {
            background: base,
            border: Hsl::new(
                base.h,
                base.s * self.border_saturation_boost,
                base.l + self.border_lightness_delta,
            ),
            text: Hsl::new(
                base.h,
                base.s * self.text_saturation_boost,
                base.l + self.text_lightness_delta,
            ),
        }
    }
}

/// Absolute lightness targets and saturation fractions for the absolute
/// strategy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbsoluteParams {
    pub background_lightness: f64,
    pub border_lightness: f64,
    pub text_lightness: f64,
    /// Fraction of the base saturation kept for the background.
    pub background_saturation: f64,
    pub border_saturation: f64,
    pub text_saturation: f64,
}

impl AbsoluteParams {
    /// Very pale background, mid border, dark text.
    pub const LIGHT: AbsoluteParams = AbsoluteParams {
        background_lightness: 0.94,
        border_lightness: 0.85,
        text_lightness: 0.35,
        background_saturation: 0.40,
        border_saturation: 0.50,
        text_saturation: 0.90,
    };

    /// Deep background, slightly lighter border, pale text.
    pub const DARK: AbsoluteParams = AbsoluteParams {
        background_lightness: 0.15,
        border_lightness: 0.25,
        text_lightness: 0.75,
        background_saturation: 0.30,
        border_saturation: 0.40,
        text_saturation: 0.50,
    };

    /// Returns a copy with any fields present in `overrides` replaced.
    ///
    /// Keys are the camelCase field names (`backgroundLightness`,
    /// `textSaturation`, ...). Missing or non-numeric keys keep their
    /// current value.
    pub fn with_overrides(&self, overrides: &Value) -> Self {
        Self {
            background_lightness: param_f64(overrides, "backgroundLightness", self.background_lightness),
            border_lightness: param_f64(overrides, "borderLightness", self.border_lightness),
            text_lightness: param_f64(overrides, "textLightness", self.text_lightness),
            background_saturation: param_f64(overrides, "backgroundSaturation", self.background_saturation),
            border_saturation: param_f64(overrides, "borderSaturation", self.border_saturation),
            text_saturation: param_f64(overrides, "textSaturation", self.text_saturation),
        }
    }

    pub fn validate(&self) -> Result<(), ColorError> {
        check_finite(
            "absolute",
            &[
                ("backgroundLightness", self.background_lightness),
                ("borderLightness", self.border_lightness),
                ("textLightness", self.text_lightness),
                ("backgroundSaturation", self.background_saturation),
                ("borderSaturation", self.border_saturation),
                ("textSaturation", self.text_saturation),
            ],
        )
    }
}

impl ContrastPolicy for AbsoluteParams {
    fn derive(&self, base: Hsl) -> HslTriple {
        let base = base.clamped();
        HslTriple {
            background: Hsl::new(
                base.h,
                base.s * self.background_saturation,
                self.background_lightness,
            ),
            border: Hsl::new(base.h, base.s * self.border_saturation, self.border_lightness),
            text: Hsl::new(base.h, base.s * self.text_saturation, self.text_lightness),
        }
    }
}

fn check_finite(table: &str, fields: &[(&str, f64)]) -> Result<(), ColorError> {
    match fields.iter().find(|(_, v)| !v.is_finite()) {
        Some((name, v)) => Err(ColorError::InvalidConfig(format!(
            "{table} parameter {name} must be finite, got {v}"
        ))),
        None => Ok(()),
    }
}
