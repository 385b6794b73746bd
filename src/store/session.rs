//! Session-scoped passphrase handle.
//!
//! A `Session` owns the passphrase for as long as the caller keeps it
//! alive and wipes it on drop.  Store operations borrow it explicitly;
//! there is no process-wide passphrase slot.

use std::fmt;

use zeroize::Zeroizing;

use crate::errors::Result;

pub struct Session {
    passphrase: Zeroizing<String>,
}

impl Session {
    pub fn new(passphrase: impl Into<String>) -> Self {
        Self {
            passphrase: Zeroizing::new(passphrase.into()),
        }
    }

    /// Build a session from a passphrase prompt.
    pub fn from_prompt<F>(prompt: F) -> Result<Self>
    where
        F: FnOnce() -> Result<Zeroizing<String>>,
    {
        Ok(Self {
            passphrase: prompt()?,
        })
    }

    pub fn passphrase(&self) -> &str {
        &self.passphrase
    }

    /// Replace the passphrase (used when re-keying the store).
    ///
    /// The old passphrase is wiped when the previous value drops.
    pub fn rekey(&mut self, passphrase: Zeroizing<String>) {
        self.passphrase = passphrase;
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("passphrase", &"<redacted>")
            .finish()
    }
}
