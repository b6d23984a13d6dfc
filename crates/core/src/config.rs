//! Serializable parameter tables for the scheme generator.
//!
//! [`SchemeConfig::default`] carries the built-in tables. A JSON document
//! loaded with [`SchemeConfig::from_json`] overrides any table, mode or
//! field it names; everything it omits keeps its default.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::contrast::{AbsoluteParams, DeltaParams};
use crate::error::ColorError;
use crate::hasher::HashRange;
use crate::mode::{DerivationPolicy, Mode, ModeTable};
use crate::params::{merge_json, param_object};
use crate::scheme::{ColorTriple, DARK_FALLBACK, LIGHT_FALLBACK};

/// Every numeric table the generator reads, one entry per mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SchemeConfig {
    /// Offsets and boosts for the delta policy.
    pub delta: ModeTable<DeltaParams>,
    /// Lightness targets and saturation fractions for the absolute policy.
    pub absolute: ModeTable<AbsoluteParams>,
    /// Base-color band hashed into for the delta policy.
    pub delta_ranges: ModeTable<HashRange>,
    /// Base-color band hashed into for the absolute policy.
    pub absolute_ranges: ModeTable<HashRange>,
    /// Returned for empty or whitespace-only text under every policy.
    pub fallback: ModeTable<ColorTriple>,
}

impl Default for SchemeConfig {
    fn default() -> Self {
        Self {
            delta: ModeTable {
                light: DeltaParams::LIGHT,
                dark: DeltaParams::DARK,
            },
            absolute: ModeTable {
                light: AbsoluteParams::LIGHT,
                dark: AbsoluteParams::DARK,
            },
            delta_ranges: ModeTable {
                light: HashRange::delta_light(),
                dark: HashRange::delta_dark(),
            },
            absolute_ranges: ModeTable {
                light: HashRange::vibrant(),
                dark: HashRange::vibrant(),
            },
            fallback: ModeTable {
                light: LIGHT_FALLBACK,
                dark: DARK_FALLBACK,
            },
        }
    }
}

impl SchemeConfig {
    /// Parses and validates a JSON config document.
    ///
    /// The document is layered over the defaults, so it may name a single
    /// mode or a single field. Candidate lists are replaced whole.
    pub fn from_json(json: &str) -> Result<Self, ColorError> {
        let invalid = |e: serde_json::Error| ColorError::InvalidConfig(e.to_string());
        let doc: Value = serde_json::from_str(json).map_err(invalid)?;
        let mut merged = serde_json::to_value(Self::default()).map_err(invalid)?;
        merge_json(&mut merged, doc);
        let config: SchemeConfig = serde_json::from_value(merged).map_err(invalid)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects non-finite parameters and hash ranges that cannot yield an
    /// in-range base color.
    pub fn validate(&self) -> Result<(), ColorError> {
        for mode in Mode::ALL {
            self.delta.get(mode).validate()?;
            self.absolute.get(mode).validate()?;
            self.delta_ranges.get(mode).validate()?;
            self.absolute_ranges.get(mode).validate()?;
        }
        debug!("scheme config validated");
        Ok(())
    }

    /// Applies partial absolute-policy overrides of the form
    /// `{"light": {"textLightness": 0.3}, "dark": {...}}`.
    ///
    /// Unknown keys and mistyped values are ignored.
    pub fn with_overrides(&self, overrides: &Value) -> Self {
        let mut config = self.clone();
        for mode in Mode::ALL {
            if let Some(section) = param_object(overrides, mode.name()) {
                let table = config.absolute.get_mut(mode);
                *table = table.with_overrides(section);
                debug!(%mode, "applied absolute parameter overrides");
            }
        }
        config
    }

    /// The hash range used to pick a base color, or `None` for the palette
    /// policy which never hashes into HSL.
    pub fn hash_range(&self, mode: Mode, policy: DerivationPolicy) -> Option<&HashRange> {
        match policy {
            DerivationPolicy::Delta => Some(self.delta_ranges.get(mode)),
            DerivationPolicy::Absolute => Some(self.absolute_ranges.get(mode)),
            DerivationPolicy::Palette => None,
        }
    }
}
