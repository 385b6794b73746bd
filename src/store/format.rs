//! On-disk password file format.
//!
//! Two encodings exist:
//!
//! ```text
//! legacy:  base64( IV[16] | AES-256-CFB ciphertext )
//! sealed:  "$pmgcm1$" base64( nonce[12] | AES-256-GCM ciphertext | tag[16] )
//! ```
//!
//! The legacy form has no header or magic bytes.  `$` is not in the
//! base64 alphabet, so a sealed file can never be mistaken for a legacy
//! one.

use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::crypto::{encryption, sealed};
use crate::errors::{PassmanError, Result};

/// Prefix marking an authenticated (AES-GCM) password file.
pub const SEALED_TAG: &[u8] = b"$pmgcm1$";

/// Envelope construction used for a password file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EnvelopeFormat {
    /// Untagged AES-256-CFB, no integrity check.
    #[default]
    Legacy,
    /// Tagged AES-256-GCM.
    Sealed,
}

impl fmt::Display for EnvelopeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Legacy => f.write_str("legacy"),
            Self::Sealed => f.write_str("sealed"),
        }
    }
}

impl EnvelopeFormat {
    /// Encrypt `plaintext` into a raw envelope.
    pub fn seal(self, plaintext: &[u8], passphrase: &str) -> Result<Vec<u8>> {
        match self {
            Self::Legacy => Ok(encryption::encrypt(plaintext, passphrase)),
            Self::Sealed => sealed::encrypt(plaintext, passphrase),
        }
    }

    /// Decrypt a raw envelope.
    pub fn open(self, envelope: &[u8], passphrase: &str) -> Result<Vec<u8>> {
        match self {
            Self::Legacy => encryption::decrypt(envelope, passphrase),
            Self::Sealed => sealed::decrypt(envelope, passphrase),
        }
    }
}

/// Encode a raw envelope as file contents.
pub fn encode(format: EnvelopeFormat, envelope: &[u8]) -> Vec<u8> {
    let body = BASE64.encode(envelope);
    match format {
        EnvelopeFormat::Legacy => body.into_bytes(),
        EnvelopeFormat::Sealed => {
            let mut out = Vec::with_capacity(SEALED_TAG.len() + body.len());
            out.extend_from_slice(SEALED_TAG);
            out.extend_from_slice(body.as_bytes());
            out
        }
    }
}

/// Decode file contents into the detected format and raw envelope.
///
/// Leading and trailing whitespace is ignored.
pub fn decode(contents: &[u8]) -> Result<(EnvelopeFormat, Vec<u8>)> {
    let contents = contents.trim_ascii();

    let (format, body) = match contents.strip_prefix(SEALED_TAG) {
        Some(rest) => (EnvelopeFormat::Sealed, rest),
        None => (EnvelopeFormat::Legacy, contents),
    };

    let envelope = BASE64
        .decode(body)
        .map_err(|e| PassmanError::MalformedEnvelope(format!("invalid base64: {e}")))?;

    Ok((format, envelope))
}

/// Read the password file at `path`.
pub fn read_file(path: &Path) -> Result<Vec<u8>> {
    match fs::read(path) {
        Ok(data) => Ok(data),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(PassmanError::StoreNotFound(path.to_path_buf()))
        }
        Err(e) => Err(e.into()),
    }
}

/// Write `contents` to `path` **atomically**.
///
/// The data goes to a temp file in the same directory, which is then
/// renamed over the target, so readers never see a half-written file.
/// On Unix the file is owner read/write only.  A stale temp file from
/// an earlier failed write is replaced, and a failed write removes its
/// own temp file.
pub fn write_file(path: &Path, contents: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    if !parent.exists() {
        fs::create_dir_all(parent)?;
    }

    let tmp_path = temp_path(parent, path);
    match fs::remove_file(&tmp_path) {
        Ok(()) => tracing::debug!(path = %tmp_path.display(), "removed stale temp file"),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }

    let result = write_temp(&tmp_path, contents).and_then(|()| fs::rename(&tmp_path, path));
    if let Err(e) = result {
        let _ = fs::remove_file(&tmp_path);
        return Err(e.into());
    }
    Ok(())
}

fn temp_path(parent: &Path, path: &Path) -> PathBuf {
    parent.join(format!(
        ".{}.tmp",
        path.file_name().unwrap_or_default().to_string_lossy()
    ))
}

fn write_temp(tmp_path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(tmp_path)?;
    // The creation mode is filtered by the umask.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(fs::Permissions::from_mode(0o600))?;
    }
    file.write_all(contents)?;
    file.sync_all()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_encoding_is_plain_base64() {
        let encoded = encode(EnvelopeFormat::Legacy, b"\x00\x01\x02");
        assert_eq!(encoded, b"AAEC");
        let (format, raw) = decode(&encoded).unwrap();
        assert_eq!(format, EnvelopeFormat::Legacy);
        assert_eq!(raw, b"\x00\x01\x02");
    }

    #[test]
    fn sealed_encoding_carries_tag() {
        let encoded = encode(EnvelopeFormat::Sealed, b"abc");
        assert!(encoded.starts_with(SEALED_TAG));
        let (format, raw) = decode(&encoded).unwrap();
        assert_eq!(format, EnvelopeFormat::Sealed);
        assert_eq!(raw, b"abc");
    }

    #[test]
    fn trailing_newline_is_tolerated() {
        let (_, raw) = decode(b"AAEC\n").unwrap();
        assert_eq!(raw, b"\x00\x01\x02");
    }

    #[test]
    fn invalid_base64_is_malformed() {
        assert!(matches!(
            decode(b"not base64!!"),
            Err(PassmanError::MalformedEnvelope(_))
        ));
    }

    #[test]
    fn format_names_roundtrip_through_serde() {
        let json = serde_json::to_string(&EnvelopeFormat::Sealed).unwrap();
        assert_eq!(json, "\"sealed\"");
        assert_eq!(EnvelopeFormat::Sealed.to_string(), "sealed");
    }

    #[cfg(unix)]
    #[test]
    fn written_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("store");
        write_file(&path, b"data").unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
        assert_eq!(fs::read(&path).unwrap(), b"data");
    }

    #[cfg(unix)]
    #[test]
    fn stale_temp_file_does_not_leak_its_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("store");
        let stale = dir.path().join(".store.tmp");
        fs::write(&stale, b"left over").unwrap();
        fs::set_permissions(&stale, fs::Permissions::from_mode(0o644)).unwrap();

        write_file(&path, b"secret").unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
        assert_eq!(fs::read(&path).unwrap(), b"secret");
        assert!(!stale.exists());
    }

    #[test]
    fn failed_rename_cleans_up_temp_file() {
        let dir = tempfile::TempDir::new().unwrap();
        // A directory in the way makes the rename fail.
        let path = dir.path().join("store");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), b"x").unwrap();

        assert!(write_file(&path, b"secret").is_err());
        assert!(!dir.path().join(".store.tmp").exists());
    }

    #[test]
    fn missing_file_is_store_not_found() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = read_file(&dir.path().join("nope"));
        assert!(matches!(result, Err(PassmanError::StoreNotFound(_))));
    }
}
