#![deny(unsafe_code)]
//! CLI binary for badge-colors.
//!
//! Subcommands:
//! - `color <text>`: compute the color triple for one string
//! - `batch <text>...`: compute triples for several strings
//! - `convert <hex>` / `convert --hsl H S L`: convert between hex and HSL
//! - `list`: print modes, policies and palette entries

mod error;
mod logging;

use badge_colors_core::palette;
use badge_colors_core::{
    hex_to_hsl, hsl_to_hex, ColorSchemeGenerator, DerivationPolicy, Mode, SchemeConfig,
};
use clap::{ArgAction, Parser, Subcommand};
use error::CliError;
use logging::{init_logging, LogConfig};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;
use tracing::debug;

#[derive(Parser)]
#[command(name = "badge-colors", about = "Deterministic badge colors from text")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// JSON file with a scheme configuration (omitted fields keep defaults).
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Absolute-policy overrides as JSON, e.g. '{"light": {"textLightness": 0.3}}'.
    #[arg(long, global = true)]
    params: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute background, border and text colors for a string.
    Color {
        /// Text to derive colors from.
        text: String,

        /// Display mode (light, dark).
        #[arg(short, long, default_value = "light")]
        mode: String,

        /// Derivation policy (delta, absolute, palette).
        #[arg(short, long, default_value = "delta")]
        policy: String,

        /// Print CSS custom properties instead of plain colors.
        #[arg(long)]
        css: bool,

        /// Custom property prefix used with --css.
        #[arg(long, default_value = "--badge", allow_hyphen_values = true)]
        prefix: String,
    },
    /// Compute colors for several strings at once.
    Batch {
        /// Texts to derive colors from.
        #[arg(required = true)]
        texts: Vec<String>,

        /// Display mode (light, dark).
        #[arg(short, long, default_value = "light")]
        mode: String,

        /// Derivation policy (delta, absolute, palette).
        #[arg(short, long, default_value = "delta")]
        policy: String,
    },
    /// Convert a hex color to HSL, or HSL components to hex.
    Convert {
        /// Hex color such as "#2680d9".
        #[arg(required_unless_present = "hsl", conflicts_with = "hsl")]
        hex: Option<String>,

        /// Hue (degrees), saturation and lightness (0-1).
        #[arg(long, num_args = 3, value_names = ["H", "S", "L"], allow_negative_numbers = true)]
        hsl: Option<Vec<f64>>,
    },
    /// List modes, policies and palette entries.
    List,
}

/// Loads the scheme configuration from an optional file, then applies
/// optional `--params` overrides.
fn load_config(path: Option<&Path>, params: Option<&str>) -> Result<SchemeConfig, CliError> {
    let mut config = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .map_err(|e| CliError::Io(format!("cannot read {}: {e}", path.display())))?;
            debug!(path = %path.display(), "loaded scheme config");
            SchemeConfig::from_json(&text)?
        }
        None => SchemeConfig::default(),
    };
    if let Some(params) = params {
        let overrides: serde_json::Value = serde_json::from_str(params)
            .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;
        config = config.with_overrides(&overrides);
    }
    Ok(config)
}

fn parse_selection(mode: &str, policy: &str) -> Result<(Mode, DerivationPolicy), CliError> {
    let mode = Mode::from_name(mode).map_err(|e| CliError::Input(e.to_string()))?;
    let policy = DerivationPolicy::from_name(policy).map_err(|e| CliError::Input(e.to_string()))?;
    Ok((mode, policy))
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = load_config(cli.config.as_deref(), cli.params.as_deref())?;
    let generator = ColorSchemeGenerator::new(config)?;

    match cli.command {
        Command::Color {
            text,
            mode,
            policy,
            css,
            prefix,
        } => {
            let (mode, policy) = parse_selection(&mode, &policy)?;
            let triple = generator.compute(&text, mode, policy);
            if cli.json {
                let mut info = serde_json::json!({
                    "text": text,
                    "mode": mode,
                    "policy": policy,
                    "colors": triple,
                });
                if css {
                    info["css"] = serde_json::Value::String(triple.to_css_vars(&prefix));
                }
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else if css {
                println!("{}", triple.to_css_vars(&prefix));
            } else {
                println!("background: {}", triple.background);
                println!("border:     {}", triple.border);
                println!("text:       {}", triple.text);
            }
        }
        Command::Batch {
            texts,
            mode,
            policy,
        } => {
            let (mode, policy) = parse_selection(&mode, &policy)?;
            let triples = generator.compute_many(&texts, mode, policy);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&triples)?);
            } else {
                for (text, t) in &triples {
                    println!("{} {} {}  {text}", t.background, t.border, t.text);
                }
            }
        }
        Command::Convert { hex, hsl } => match (hex, hsl) {
            (_, Some(hsl)) => {
                let [h, s, l] = hsl[..] else {
                    return Err(CliError::Input("--hsl takes exactly three values".into()));
                };
                let hex = hsl_to_hex(h, s, l);
                if cli.json {
                    let info = serde_json::json!({"h": h, "s": s, "l": l, "hex": hex});
                    println!("{}", serde_json::to_string_pretty(&info)?);
                } else {
                    println!("{hex}");
                }
            }
            (Some(hex), None) => {
                let hsl = hex_to_hsl(&hex).map_err(|e| CliError::Input(e.to_string()))?;
                if cli.json {
                    println!("{}", serde_json::to_string_pretty(&hsl)?);
                } else {
                    println!("hsl({:.2}, {:.4}, {:.4})", hsl.h, hsl.s, hsl.l);
                }
            }
            (None, None) => {
                return Err(CliError::Input("convert needs a hex color or --hsl".into()));
            }
        },
        Command::List => {
            let modes = Mode::list_names();
            let policies = DerivationPolicy::list_names();
            if cli.json {
                let info = serde_json::json!({
                    "modes": modes,
                    "policies": policies,
                    "palettes": {
                        "light": palette::LIGHT_PALETTE,
                        "dark": palette::DARK_PALETTE,
                    },
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Modes:");
                println!("  {}", modes.join(", "));
                println!("Policies:");
                println!("  {}", policies.join(", "));
                for mode in Mode::ALL {
                    println!("Palette ({mode}):");
                    for (i, e) in palette::entries(mode).iter().enumerate() {
                        println!("  {i}: {} {} {}", e.background, e.border, e.text);
                    }
                }
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let log_config =
        LogConfig::from_verbosity(cli.verbose).with_ansi(std::io::stderr().is_terminal());
    init_logging(&log_config);

    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::io::Write;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_color_with_defaults() {
        let cli = Cli::try_parse_from(["badge-colors", "color", "abc"]).unwrap();
        match cli.command {
            Command::Color {
                text, mode, policy, ..
            } => {
                assert_eq!(text, "abc");
                assert_eq!(mode, "light");
                assert_eq!(policy, "delta");
            }
            _ => panic!("expected color subcommand"),
        }
    }

    #[test]
    fn parses_convert_hsl_with_three_values() {
        let cli =
            Cli::try_parse_from(["badge-colors", "convert", "--hsl", "210", "0.7", "0.5"]).unwrap();
        match cli.command {
            Command::Convert { hex, hsl } => {
                assert!(hex.is_none());
                assert_eq!(hsl, Some(vec![210.0, 0.7, 0.5]));
            }
            _ => panic!("expected convert subcommand"),
        }
    }

    #[test]
    fn convert_requires_hex_or_hsl() {
        assert!(Cli::try_parse_from(["badge-colors", "convert"]).is_err());
    }

    #[test]
    fn batch_requires_texts() {
        assert!(Cli::try_parse_from(["badge-colors", "batch"]).is_err());
    }

    #[test]
    fn parse_selection_rejects_unknown_names() {
        let err = parse_selection("sepia", "delta").unwrap_err();
        assert_eq!(err.exit_code(), 12);
        let err = parse_selection("dark", "random").unwrap_err();
        assert_eq!(err.exit_code(), 12);
        assert!(parse_selection("DARK", "Palette").is_ok());
    }

    #[test]
    fn load_config_defaults_without_inputs() {
        let config = load_config(None, None).unwrap();
        assert_eq!(config, SchemeConfig::default());
    }

    #[test]
    fn load_config_reads_file_and_applies_params() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let mut custom = SchemeConfig::default();
        custom.absolute.dark.text_lightness = 0.8;
        write!(file, "{}", serde_json::to_string(&custom).unwrap()).unwrap();

        let config = load_config(
            Some(file.path()),
            Some(r#"{"light": {"borderLightness": 0.8}}"#),
        )
        .unwrap();
        assert!((config.absolute.dark.text_lightness - 0.8).abs() < f64::EPSILON);
        assert!((config.absolute.light.border_lightness - 0.8).abs() < f64::EPSILON);
    }

    #[test]
    fn load_config_accepts_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"absolute": {{"light": {{"textLightness": 0.3}}}}}}"#).unwrap();
        let config = load_config(Some(file.path()), None).unwrap();
        assert!((config.absolute.light.text_lightness - 0.3).abs() < f64::EPSILON);
        assert_eq!(config.absolute.dark, SchemeConfig::default().absolute.dark);
    }

    #[test]
    fn load_config_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(Some(&dir.path().join("absent.json")), None).unwrap_err();
        assert_eq!(err.exit_code(), 11);
    }

    #[test]
    fn load_config_invalid_file_is_color_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"deltaRanges": 5}}"#).unwrap();
        let err = load_config(Some(file.path()), None).unwrap_err();
        assert_eq!(err.exit_code(), 10);
    }

    #[test]
    fn load_config_bad_params_is_input_error() {
        let err = load_config(None, Some("{nope")).unwrap_err();
        assert_eq!(err.exit_code(), 12);
    }
}
