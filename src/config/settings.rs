use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{PassmanError, Result};
use crate::generator::{PasswordGenerator, DEFAULT_DICTIONARY};
use crate::store::{format, EnvelopeFormat, Store};

/// User-level configuration, loaded from `~/.passman.toml`.
///
/// Every field has a sensible default so passman works out-of-the-box
/// without any config file at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Where the encrypted password file lives.
    #[serde(default = "default_passwd_file")]
    pub passwd_file: PathBuf,

    /// Newline-delimited word list for word-mode generation.
    #[serde(default = "default_dictionary")]
    pub dictionary: PathBuf,

    /// Envelope used when writing the password file.
    #[serde(default)]
    pub envelope: EnvelopeFormat,
}

// ── Serde default helpers ────────────────────────────────────────────

fn home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

fn default_passwd_file() -> PathBuf {
    home_dir().join(".passman")
}

fn default_dictionary() -> PathBuf {
    PathBuf::from(DEFAULT_DICTIONARY)
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            passwd_file: default_passwd_file(),
            dictionary: default_dictionary(),
            envelope: EnvelopeFormat::default(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the home directory.
    const FILE_NAME: &'static str = ".passman.toml";

    /// `~/.passman.toml`.
    pub fn default_path() -> PathBuf {
        home_dir().join(Self::FILE_NAME)
    }

    /// Load settings from `config_path`.
    ///
    /// If the file does not exist, sensible defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            PassmanError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        Ok(settings)
    }

    /// Write settings to `config_path` as TOML.
    pub fn save(&self, config_path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| PassmanError::ConfigError(format!("Failed to encode settings: {e}")))?;
        format::write_file(config_path, contents.as_bytes())
    }

    /// Store handle for the configured password file and envelope.
    pub fn store(&self) -> Store {
        Store::new(&self.passwd_file, self.envelope)
    }

    /// Generator for `token` that reads the configured dictionary.
    pub fn generator(&self, token: &str) -> PasswordGenerator {
        PasswordGenerator::from_token(token).with_dictionary_path(&self.dictionary)
    }
}

// ── Tests ────────────────────────────────────────────────────────────
