use crate::errors::ParseError;
use crate::parse::{ByteRange, parse_byte};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Defaults for the scan commands.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ScanSettings {
    /// Byte counted by `swar count`, as a character, `0xNN` or decimal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub needle: Option<String>,
    /// Inclusive range reported by `swar find`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<ByteRange>,
}

/// Output formatting defaults.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputSettings {
    /// Emit JSON instead of plain text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json: Option<bool>,
}

/// Configuration for the `swar` tool, loaded from TOML.
///
/// Every key is optional so override files only need the keys they change.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SwarConfig {
    #[serde(default)]
    pub scan: ScanSettings,
    #[serde(default)]
    pub output: OutputSettings,
}

impl SwarConfig {
    /// Parses a configuration from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads the built-in defaults.
    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../swar.toml");
        Ok(Self::from_toml(content)?)
    }

    /// Loads configuration from a custom file path.
    pub fn load_from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }

    /// Path of the per-user override file, if a config directory exists.
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("swar").join("swar.toml"))
    }

    /// Loads configuration with user overrides from standard locations.
    ///
    /// Searches in priority order:
    /// 1. Built-in defaults
    /// 2. `~/.config/swar/swar.toml` (user overrides)
    /// 3. `./swar.toml` (project-local overrides)
    ///
    /// A file that fails to parse is reported on stderr and skipped.
    pub fn load_with_overrides() -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = Self::load_default()?;

        let candidates = Self::user_config_path()
            .into_iter()
            .chain(std::iter::once(PathBuf::from("swar.toml")));

        for path in candidates {
            if !path.exists() {
                continue;
            }
            match Self::load_from_file(&path) {
                Ok(overrides) => config.merge(overrides),
                Err(e) => {
                    eprintln!("Warning: Failed to load config from {:?}: {}", path, e);
                }
            }
        }

        Ok(config)
    }

    /// Merges another configuration into this one; keys set in `other` win.
    pub fn merge(&mut self, other: SwarConfig) {
        if other.scan.needle.is_some() {
            self.scan.needle = other.scan.needle;
        }
        if other.scan.range.is_some() {
            self.scan.range = other.scan.range;
        }
        if other.output.json.is_some() {
            self.output.json = other.output.json;
        }
    }

    /// The configured needle byte, `b' '` when unset.
    pub fn needle(&self) -> Result<u8, ParseError> {
        self.scan.needle.as_deref().map_or(Ok(b' '), parse_byte)
    }

    /// The configured range, `A-Z` when unset.
    pub fn range(&self) -> ByteRange {
        self.scan.range.unwrap_or(ByteRange { lo: b'A', hi: b'Z' })
    }

    /// Whether JSON output is on by default.
    pub fn json(&self) -> bool {
        self.output.json.unwrap_or(false)
    }
}
