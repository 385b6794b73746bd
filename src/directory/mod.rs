//! Service directory — the in-memory, unique-by-name record list.
//!
//! Records keep their insertion order.  Replacing a record moves it to
//! the end of the sequence; only the serialized payload is sorted by
//! name.
//!
//! The payload is JSON shaped as `{"Services":[{"Name":..,"Password":..,"Meta":..}]}`.

pub mod record;

pub use record::ServiceRecord;

use serde::{Deserialize, Serialize};

use crate::errors::{PassmanError, Result};

/// Suffix stripped from search queries (`"go*"` is the same as `"go"`).
const WILDCARD: char = '*';

/// Ordered collection of service records, unique by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceDirectory {
    services: Vec<ServiceRecord>,
}

#[derive(Serialize)]
struct PayloadOut<'a> {
    #[serde(rename = "Services")]
    services: Vec<&'a ServiceRecord>,
}

#[derive(Deserialize)]
struct PayloadIn {
    // `null` and a missing key both mean "no services".
    #[serde(rename = "Services", default)]
    services: Option<Vec<ServiceRecord>>,
}

impl ServiceDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exact-match lookup.
    pub fn get(&self, name: &str) -> Option<&ServiceRecord> {
        self.services.iter().find(|s| s.name == name)
    }

    /// Insert `record`, replacing any record with the same name.
    ///
    /// The new record always lands at the end of the sequence.
    pub fn put(&mut self, record: ServiceRecord) {
        self.remove(&record.name);
        self.services.push(record);
    }

    /// Remove and return the record called `name`, if present.
    pub fn remove(&mut self, name: &str) -> Option<ServiceRecord> {
        let index = self.services.iter().position(|s| s.name == name)?;
        Some(self.services.remove(index))
    }

    /// All records whose name starts with `prefix`, in directory order.
    ///
    /// A single trailing `*` is ignored and the empty prefix matches
    /// every record.
    pub fn search(&self, prefix: &str) -> Vec<&ServiceRecord> {
        let prefix = prefix.strip_suffix(WILDCARD).unwrap_or(prefix);
        self.services
            .iter()
            .filter(|s| s.name.starts_with(prefix))
            .collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// Iterate in current directory order.
    pub fn iter(&self) -> std::slice::Iter<'_, ServiceRecord> {
        self.services.iter()
    }

    /// Names in current directory order.
    pub fn names(&self) -> Vec<&str> {
        self.services.iter().map(|s| s.name.as_str()).collect()
    }

    // ------------------------------------------------------------------
    // Payload encoding
    // ------------------------------------------------------------------

    /// Serialize to the plaintext JSON payload, sorted by name.
    ///
    /// Sorting happens on a borrowed projection; `self` keeps its order.
    pub fn to_payload(&self) -> Result<Vec<u8>> {
        let mut sorted: Vec<&ServiceRecord> = self.services.iter().collect();
        sorted.sort_by(|a, b| a.name.cmp(&b.name));

        serde_json::to_vec(&PayloadOut { services: sorted })
            .map_err(|e| PassmanError::SerializationError(format!("services: {e}")))
    }

    /// Parse a plaintext JSON payload.
    ///
    /// Duplicate names collapse with `put` semantics, so the uniqueness
    /// invariant holds even for hand-edited files.
    pub fn from_payload(bytes: &[u8]) -> std::result::Result<Self, serde_json::Error> {
        let payload: PayloadIn = serde_json::from_slice(bytes)?;
        Ok(payload.services.unwrap_or_default().into_iter().collect())
    }
}

impl FromIterator<ServiceRecord> for ServiceDirectory {
    fn from_iter<I: IntoIterator<Item = ServiceRecord>>(iter: I) -> Self {
        let mut directory = Self::new();
        for record in iter {
            directory.put(record);
        }
        directory
    }
}

impl<'a> IntoIterator for &'a ServiceDirectory {
    type Item = &'a ServiceRecord;
    type IntoIter = std::slice::Iter<'a, ServiceRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
