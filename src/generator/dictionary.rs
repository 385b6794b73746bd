//! Dictionary-word mode.
//!
//! The word list is a newline-delimited file such as
//! `/usr/share/dict/words`.  Blank lines are skipped.

use std::fs;
use std::path::Path;

use rand::{CryptoRng, Rng};

use crate::errors::{PassmanError, Result};

/// Default word list location on Unix systems.
pub const DEFAULT_DICTIONARY: &str = "/usr/share/dict/words";

/// A non-empty list of candidate words.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    /// Load a newline-delimited word list from `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let unavailable = |reason: String| PassmanError::DictionaryUnavailable {
            path: path.to_path_buf(),
            reason,
        };

        let contents = fs::read_to_string(path).map_err(|e| unavailable(e.to_string()))?;
        let dictionary = Self::from_words(contents.lines())
            .ok_or_else(|| unavailable("word list is empty".into()))?;

        tracing::debug!(
            path = %path.display(),
            words = dictionary.len(),
            "loaded dictionary"
        );
        Ok(dictionary)
    }

    /// Build from an in-memory word list.  Returns `None` if no
    /// non-blank word remains.
    pub fn from_words<I, S>(words: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_string())
            .filter(|w| !w.is_empty())
            .collect();

        (!words.is_empty()).then_some(Self { words })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Concatenate capitalized random words until at least `length`
    /// characters.  The result may overshoot and is never truncated.
    ///
    /// `length` is unbounded here; callers check it first.
    pub(crate) fn generate<R: CryptoRng>(&self, length: usize, rng: &mut R) -> String {
        let mut password = String::new();
        let mut chars = 0;

        while chars < length {
            let word = &self.words[rng.random_range(0..self.words.len())];
            chars += word.chars().count();
            push_capitalized(&mut password, word);
        }

        password
    }
}

fn push_capitalized(out: &mut String, word: &str) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.push_str(chars.as_str());
    }
}
