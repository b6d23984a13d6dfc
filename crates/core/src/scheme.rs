//! Color scheme generation: text + mode + policy to a [`ColorTriple`].
//!
//! [`ColorSchemeGenerator`] is a single-pass pure function over immutable
//! configuration. It holds no mutable state, so one generator can be shared
//! across threads freely.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::color::{HexColor, Hsl};
use crate::config::SchemeConfig;
use crate::contrast::{ContrastPolicy, HslTriple};
use crate::error::ColorError;
use crate::hasher::{BkdrHasher, StringHasher};
use crate::mode::{DerivationPolicy, Mode};
use crate::palette;

/// Background, border and text colors for one badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorTriple {
    pub background: HexColor,
    pub border: HexColor,
    pub text: HexColor,
}

/// Light-mode triple for empty or whitespace-only text.
pub const LIGHT_FALLBACK: ColorTriple = ColorTriple::from_u32(0xf0f0f0, 0xd0d0d0, 0x666666);

/// Dark-mode triple for empty or whitespace-only text.
pub const DARK_FALLBACK: ColorTriple = ColorTriple::from_u32(0x2a2a2a, 0x4a4a4a, 0xcccccc);

impl ColorTriple {
    /// Builds a triple from packed `0xRRGGBB` literals.
    pub const fn from_u32(background: u32, border: u32, text: u32) -> Self {
        Self {
            background: HexColor::from_u32(background),
            border: HexColor::from_u32(border),
            text: HexColor::from_u32(text),
        }
    }

    /// Renders the triple as CSS custom properties, one per line:
    ///
    /// ```text
    /// --badge-bg: #e3f2fd;
    /// --badge-border: #1976d2;
    /// --badge-text: #0d47a1;
    /// ```
    pub fn to_css_vars(&self, prefix: &str) -> String {
        format!(
            "{prefix}-bg: {};\n{prefix}-border: {};\n{prefix}-text: {};",
            self.background, self.border, self.text
        )
    }
}

impl From<HslTriple> for ColorTriple {
    fn from(t: HslTriple) -> Self {
        Self {
            background: t.background.to_hex(),
            border: t.border.to_hex(),
            text: t.text.to_hex(),
        }
    }
}

/// Turns text into a [`ColorTriple`] under a mode and derivation policy.
///
/// Generic over the [`StringHasher`] so the base-color algorithm can be
/// swapped without touching the contrast policies.
#[derive(Debug, Clone)]
pub struct ColorSchemeGenerator<H = BkdrHasher> {
    config: SchemeConfig,
    hasher: H,
}

impl ColorSchemeGenerator<BkdrHasher> {
    /// Creates a generator with the default BKDR hasher.
    ///
    /// Returns `ColorError::InvalidConfig` if `config` fails validation.
    pub fn new(config: SchemeConfig) -> Result<Self, ColorError> {
        Self::with_hasher(config, BkdrHasher)
    }
}

impl Default for ColorSchemeGenerator<BkdrHasher> {
    fn default() -> Self {
        Self {
            config: SchemeConfig::default(),
            hasher: BkdrHasher,
        }
    }
}

impl<H: StringHasher> ColorSchemeGenerator<H> {
    /// Creates a generator with a custom hasher.
    pub fn with_hasher(config: SchemeConfig, hasher: H) -> Result<Self, ColorError> {
        config.validate()?;
        Ok(Self { config, hasher })
    }

    pub fn config(&self) -> &SchemeConfig {
        &self.config
    }

    /// The hashed base color for `text`, or `None` under the palette policy.
    pub fn base_color(&self, text: &str, mode: Mode, policy: DerivationPolicy) -> Option<Hsl> {
        self.config
            .hash_range(mode, policy)
            .map(|range| self.hasher.base_color(text, range))
    }

    /// Computes the color triple for `text`.
    ///
    /// Empty or whitespace-only text yields the configured fallback for
    /// `mode` regardless of `policy`.
    pub fn compute(&self, text: &str, mode: Mode, policy: DerivationPolicy) -> ColorTriple {
        if text.trim().is_empty() {
            debug!(%mode, %policy, "blank text, using fallback triple");
            return *self.config.fallback.get(mode);
        }

        let triple = match policy {
            DerivationPolicy::Palette => palette::select(text, mode),
            DerivationPolicy::Delta => {
                let base = self.hashed_base(text, mode, policy);
                self.config.delta.get(mode).derive(base).into()
            }
            DerivationPolicy::Absolute => {
                let base = self.hashed_base(text, mode, policy);
                self.config.absolute.get(mode).derive(base).into()
            }
        };
        trace!(text, %mode, %policy, ?triple, "computed color triple");
        triple
    }

    /// Computes triples for many texts at once. Duplicate texts collapse to
    /// a single entry.
    pub fn compute_many<I, S>(
        &self,
        texts: I,
        mode: Mode,
        policy: DerivationPolicy,
    ) -> BTreeMap<String, ColorTriple>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        texts
            .into_iter()
            .map(|t| {
                let t = t.as_ref();
                (t.to_string(), self.compute(t, mode, policy))
            })
            .collect()
    }

    fn hashed_base(&self, text: &str, mode: Mode, policy: DerivationPolicy) -> Hsl {
        let base = self
            .base_color(text, mode, policy)
            .unwrap_or_else(|| Hsl::new(0.0, 0.0, 0.5));
        trace!(h = base.h, s = base.s, l = base.l, "hashed base color");
        base
    }
}

/// Process-wide generator over the built-in configuration.
static DEFAULT_GENERATOR: LazyLock<ColorSchemeGenerator> =
    LazyLock::new(ColorSchemeGenerator::default);

/// Computes a color triple with the built-in configuration.
pub fn compute_color_triple(text: &str, mode: Mode, policy: DerivationPolicy) -> ColorTriple {
    DEFAULT_GENERATOR.compute(text, mode, policy)
}

/// Batch form of [`compute_color_triple`].
pub fn compute_many<I, S>(texts: I, mode: Mode, policy: DerivationPolicy) -> BTreeMap<String, ColorTriple>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    DEFAULT_GENERATOR.compute_many(texts, mode, policy)
}
