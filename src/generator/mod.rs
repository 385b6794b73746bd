//! Password generator.
//!
//! ```no_run
//! use passman::generator::PasswordGenerator;
//!
//! let password = PasswordGenerator::from_token("lunc20").generate().unwrap();
//! assert_eq!(password.len(), 20);
//! ```

pub mod charset;
pub mod config;
pub mod dictionary;

pub use config::{GeneratorConfig, DEFAULT_LENGTH, MAX_LENGTH};
pub use dictionary::{Dictionary, DEFAULT_DICTIONARY};

use std::path::{Path, PathBuf};

use rand::CryptoRng;

use crate::errors::Result;

/// Produces passwords for one `GeneratorConfig`.
#[derive(Debug, Clone)]
pub struct PasswordGenerator {
    config: GeneratorConfig,
    dictionary_path: PathBuf,
}

impl PasswordGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            dictionary_path: PathBuf::from(DEFAULT_DICTIONARY),
        }
    }

    /// Shorthand for `PasswordGenerator::new(GeneratorConfig::parse(token))`.
    pub fn from_token(token: &str) -> Self {
        Self::new(GeneratorConfig::parse(token))
    }

    /// Use a different word list for word mode.
    pub fn with_dictionary_path(mut self, path: impl AsRef<Path>) -> Self {
        self.dictionary_path = path.as_ref().to_path_buf();
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate with the thread-local CSPRNG.
    pub fn generate(&self) -> Result<String> {
        self.generate_with(&mut rand::rng())
    }

    /// Generate with a caller-supplied CSPRNG.
    ///
    /// Word mode reads the dictionary file on every call.
    pub fn generate_with<R: CryptoRng>(&self, rng: &mut R) -> Result<String> {
        self.config.check_length()?;
        if self.config.words {
            let dictionary = Dictionary::load(&self.dictionary_path)?;
            self.generate_from(&dictionary, rng)
        } else {
            charset::generate(&self.config, rng)
        }
    }

    /// Word-mode generation from an already loaded dictionary.
    pub fn generate_from<R: CryptoRng>(
        &self,
        dictionary: &Dictionary,
        rng: &mut R,
    ) -> Result<String> {
        self.config.check_length()?;
        Ok(dictionary.generate(self.config.length, rng))
    }
}

/// Generate a password for `token` using the default dictionary.
pub fn generate(token: &str) -> Result<String> {
    PasswordGenerator::from_token(token).generate()
}
