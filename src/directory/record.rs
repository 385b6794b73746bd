//! The `ServiceRecord` type stored inside a password file.
//!
//! Field names on disk are `Name`, `Password` and `Meta`.  Missing
//! fields default to an empty string and unknown keys are ignored, so
//! older or hand-edited files still load.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One named credential entry.
#[derive(Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ServiceRecord {
    /// Unique key (case-sensitive, exact match), e.g. "github.com".
    #[serde(rename = "Name", default)]
    pub name: String,

    /// The stored password.
    #[serde(rename = "Password", default)]
    pub secret: String,

    /// Free-text notes (username, recovery hints, ...).
    #[serde(rename = "Meta", default)]
    pub meta: String,
}

impl ServiceRecord {
    pub fn new(name: impl Into<String>, secret: impl Into<String>, meta: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            secret: secret.into(),
            meta: meta.into(),
        }
    }

    /// An empty record for `name`, used when adding a new service.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

// The secret never shows up in debug output.
impl fmt::Debug for ServiceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceRecord")
            .field("name", &self.name)
            .field("secret", &"<redacted>")
            .field("meta", &self.meta)
            .finish()
    }
}
