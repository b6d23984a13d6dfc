#![deny(unsafe_code)]
//! Core color derivation for badge-colors.
//!
//! Turns an arbitrary string into a reproducible background/border/text
//! [`ColorTriple`] for light or dark display. Provides HSL/hex conversion
//! (`Hsl`, `Srgb`, `HexColor`), the [`StringHasher`] seam with the default
//! [`BkdrHasher`], the delta and absolute [`ContrastPolicy`] strategies, the
//! fixed six-entry palettes, and the [`ColorSchemeGenerator`] that ties them
//! together.

pub mod color;
pub mod config;
pub mod contrast;
pub mod error;
pub mod hasher;
pub mod mode;
pub mod palette;
pub mod params;
pub mod scheme;

pub use color::{hex_to_hsl, hsl_to_hex, HexColor, Hsl, Srgb};
pub use config::SchemeConfig;
pub use contrast::{AbsoluteParams, ContrastPolicy, DeltaParams, HslTriple};
pub use error::ColorError;
pub use hasher::{BkdrHasher, HashRange, HueRange, StringHasher};
pub use mode::{DerivationPolicy, Mode, ModeTable};
pub use palette::PaletteEntry;
pub use scheme::{compute_color_triple, compute_many, ColorSchemeGenerator, ColorTriple};
