//! Generator configuration parsed from a single token such as `"lunc24"`.
//!
//! - A trailing run of ASCII digits is the length (default 24).
//! - `l`, `u`, `n`, `c` enable lowercase, uppercase, numbers, symbols.
//! - `w` switches to dictionary-word mode.
//! - With none of those flags, lowercase + uppercase + numbers is used.
//!
//! Any other character is ignored, so the raw CLI form `-glun24` parses
//! the same as `lun24`.

use std::sync::LazyLock;

use regex::Regex;

use crate::errors::{PassmanError, Result};

/// Password length used when the token carries no usable digits.
pub const DEFAULT_LENGTH: usize = 24;

/// Longest password either mode will build.
pub const MAX_LENGTH: usize = 4096;

static TRAILING_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+$").expect("trailing-digit pattern is valid"));

/// Which character classes (or word mode) to use, and how long.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub lowercase: bool,
    pub uppercase: bool,
    pub numbers: bool,
    pub symbols: bool,
    pub words: bool,
    pub length: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            lowercase: true,
            uppercase: true,
            numbers: true,
            symbols: false,
            words: false,
            length: DEFAULT_LENGTH,
        }
    }
}

impl GeneratorConfig {
    /// Parse a configuration token.  Never fails.
    pub fn parse(token: &str) -> Self {
        let (flags, length) = match TRAILING_DIGITS.find(token) {
            Some(m) => (
                &token[..m.start()],
                m.as_str().parse().unwrap_or(DEFAULT_LENGTH),
            ),
            None => (token, DEFAULT_LENGTH),
        };

        let config = Self {
            lowercase: flags.contains('l'),
            uppercase: flags.contains('u'),
            numbers: flags.contains('n'),
            symbols: flags.contains('c'),
            words: flags.contains('w'),
            length,
        };

        if config.has_any_flag() {
            config
        } else {
            Self {
                length,
                ..Self::default()
            }
        }
    }

    /// Reject lengths past [`MAX_LENGTH`] before anything is allocated.
    pub fn check_length(&self) -> Result<()> {
        if self.length > MAX_LENGTH {
            return Err(PassmanError::LengthTooLong {
                length: self.length,
                max: MAX_LENGTH,
            });
        }
        Ok(())
    }

    fn has_any_flag(&self) -> bool {
        self.lowercase || self.uppercase || self.numbers || self.symbols || self.words
    }
}
