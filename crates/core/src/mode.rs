//! Display modes, derivation policies, and per-mode parameter tables.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColorError;

/// Display mode a color triple is generated for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Light,
    Dark,
}

/// All mode names, in declaration order.
const MODE_NAMES: &[&str] = &["light", "dark"];

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Light, Mode::Dark];

    /// Looks up a mode by name (case insensitive).
    ///
    /// Returns `ColorError::UnknownMode` if the name is not recognized.
    pub fn from_name(name: &str) -> Result<Self, ColorError> {
        match name.to_ascii_lowercase().as_str() {
            "light" => Ok(Mode::Light),
            "dark" => Ok(Mode::Dark),
            _ => Err(ColorError::UnknownMode(name.to_string())),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Mode::Light => "light",
            Mode::Dark => "dark",
        }
    }

    /// Returns a slice of all recognized mode names.
    pub fn list_names() -> &'static [&'static str] {
        MODE_NAMES
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

/// Algorithm that turns text (or its base color) into a color triple.
///
/// - `Delta`: relative lightness offsets and saturation boosts from the base.
/// - `Absolute`: fixed lightness targets, saturation scaled from the base.
/// - `Palette`: discrete lookup into a fixed six-entry palette.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DerivationPolicy {
    #[default]
    Delta,
    Absolute,
    Palette,
}

const POLICY_NAMES: &[&str] = &["delta", "absolute", "palette"];

impl DerivationPolicy {
    pub const ALL: [DerivationPolicy; 3] = [
        DerivationPolicy::Delta,
        DerivationPolicy::Absolute,
        DerivationPolicy::Palette,
    ];

    /// Looks up a policy by name (case insensitive).
    ///
    /// Returns `ColorError::UnknownPolicy` if the name is not recognized.
    pub fn from_name(name: &str) -> Result<Self, ColorError> {
        match name.to_ascii_lowercase().as_str() {
            "delta" => Ok(DerivationPolicy::Delta),
            "absolute" => Ok(DerivationPolicy::Absolute),
            "palette" => Ok(DerivationPolicy::Palette),
            _ => Err(ColorError::UnknownPolicy(name.to_string())),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DerivationPolicy::Delta => "delta",
            DerivationPolicy::Absolute => "absolute",
            DerivationPolicy::Palette => "palette",
        }
    }

    pub fn list_names() -> &'static [&'static str] {
        POLICY_NAMES
    }
}

impl fmt::Display for DerivationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DerivationPolicy {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

/// One value per [`Mode`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModeTable<T> {
    pub light: T,
    pub dark: T,
}

impl<T> ModeTable<T> {
    pub fn get(&self, mode: Mode) -> &T {
        match mode {
            Mode::Light => &self.light,
            Mode::Dark => &self.dark,
        }
    }

    pub fn get_mut(&mut self, mode: Mode) -> &mut T {
        match mode {
            Mode::Light => &mut self.light,
            Mode::Dark => &mut self.dark,
        }
    }
}
