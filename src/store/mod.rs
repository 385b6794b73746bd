//! Store — loads and saves a `ServiceDirectory` as an encrypted file.
//!
//! `Store` ties together the file format (`format`), the envelope
//! ciphers (`crate::crypto`) and the directory payload.  The passphrase
//! is passed in through a `Session` on every call.
//!
//! There is no cross-process locking: two processes that load, modify
//! and save the same file race, and the last writer wins.

pub mod format;
pub mod session;

pub use format::EnvelopeFormat;
pub use session::Session;

use std::path::{Path, PathBuf};

use zeroize::Zeroize;

use crate::directory::ServiceDirectory;
use crate::errors::{PassmanError, Result};

/// Handle on one password file.
#[derive(Debug, Clone)]
pub struct Store {
    /// Path to the password file on disk.
    path: PathBuf,

    /// Envelope used when writing.  Reads detect the format from the file.
    format: EnvelopeFormat,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>, format: EnvelopeFormat) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> EnvelopeFormat {
        self.format
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read, decrypt and parse the password file.
    ///
    /// A payload that does not parse means the passphrase was wrong
    /// (the legacy envelope cannot tell otherwise) and is reported as
    /// `InvalidPassphrase`.
    pub fn load(&self, session: &Session) -> Result<ServiceDirectory> {
        let contents = format::read_file(&self.path)?;
        let (found, envelope) = format::decode(&contents)?;

        if found != self.format {
            tracing::warn!(
                path = %self.path.display(),
                found = %found,
                configured = %self.format,
                "password file format differs from configuration; it will be rewritten on save"
            );
        }

        let mut plaintext = found.open(&envelope, session.passphrase())?;
        let parsed = ServiceDirectory::from_payload(&plaintext);
        plaintext.zeroize();

        let directory = parsed.map_err(|e| {
            tracing::debug!(error = %e, "decrypted payload did not parse");
            PassmanError::InvalidPassphrase
        })?;

        tracing::debug!(
            path = %self.path.display(),
            format = %found,
            services = directory.len(),
            "loaded password file"
        );
        Ok(directory)
    }

    /// Serialize (sorted by name), encrypt and atomically write.
    ///
    /// Every call uses a fresh IV or nonce.
    pub fn save(&self, session: &Session, directory: &ServiceDirectory) -> Result<()> {
        let mut payload = directory.to_payload()?;
        let sealed = self.format.seal(&payload, session.passphrase());
        payload.zeroize();

        let contents = format::encode(self.format, &sealed?);
        format::write_file(&self.path, &contents)?;

        tracing::debug!(
            path = %self.path.display(),
            format = %self.format,
            services = directory.len(),
            "saved password file"
        );
        Ok(())
    }

    /// Write an empty directory and read it back to verify the file.
    ///
    /// Refuses to replace a file that still holds services unless
    /// `overwrite` is set.  A file that cannot be opened with this
    /// session (wrong passphrase, corrupt) is treated as replaceable
    /// only when `overwrite` is set as well.
    pub fn initialize(&self, session: &Session, overwrite: bool) -> Result<ServiceDirectory> {
        if self.exists() && !overwrite {
            let existing = self.load(session)?;
            if !existing.is_empty() {
                return Err(PassmanError::CommandFailed(format!(
                    "{} already holds {} service(s)",
                    self.path.display(),
                    existing.len()
                )));
            }
        }

        let empty = ServiceDirectory::new();
        self.save(session, &empty)?;
        self.load(session)
    }

    /// Re-encrypt the current contents under a new passphrase.
    ///
    /// On success the session now holds the new passphrase.
    pub fn change_passphrase(
        &self,
        session: &mut Session,
        new_passphrase: zeroize::Zeroizing<String>,
    ) -> Result<()> {
        let directory = self.load(session)?;
        let next = Session::new(new_passphrase.as_str());
        self.save(&next, &directory)?;
        session.rekey(new_passphrase);
        Ok(())
    }
}
