// In: src/config.rs

//! The single source of truth for how the base32k shell runs.
//!
//! `CodecConfig` is built once at the application boundary (from command-line
//! flags or a JSON document) and then handed to `cli::run` by reference.

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::Base32kError;

/// Which direction the shell transforms its input line.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// **Default:** bytes in, base32k text out.
    #[default]
    Encode,

    /// Base32k text in, bytes out.
    Decode,
}

/// Settings for one run of the shell.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct CodecConfig {
    #[serde(default)]
    pub mode: Mode,

    /// If true, a `\n` follows the output.
    #[serde(default = "default_true")]
    pub append_newline: bool,

    /// If true, `log_level` asks for debug-level diagnostics instead of warnings.
    #[serde(default)]
    pub verbose: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            append_newline: true,
            verbose: false,
        }
    }
}

impl CodecConfig {
    /// Parses a config from JSON; absent fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, Base32kError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The level handed to `init_logging`.
    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        }
    }

    /// A config for the given direction with everything else defaulted.
    pub fn for_mode(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }
}

/// Helper for `serde` to default a boolean field to true.
fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_yields_defaults() {
        let config = CodecConfig::from_json("{}").unwrap();
        assert_eq!(config, CodecConfig::default());
        assert_eq!(config.mode, Mode::Encode);
        assert!(config.append_newline);
    }

    #[test]
    fn test_decode_mode_from_json() {
        let config = CodecConfig::from_json(r#"{"mode": "decode", "append_newline": false}"#).unwrap();
        assert_eq!(config.mode, Mode::Decode);
        assert!(!config.append_newline);
        assert!(!config.verbose);
    }

    #[test]
    fn test_verbose_selects_debug_level() {
        let config = CodecConfig::from_json(r#"{"verbose": true}"#).unwrap();
        assert_eq!(config.log_level(), LevelFilter::Debug);
        assert_eq!(CodecConfig::default().log_level(), LevelFilter::Warn);
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        let err = CodecConfig::from_json(r#"{"mode": "compress"}"#).unwrap_err();
        assert!(matches!(err, Base32kError::SerdeJson(_)));
    }
}
