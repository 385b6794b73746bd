//! AES-256-GCM authenticated envelope.
//!
//! The upgrade path for new password files.  Key derivation is the same
//! padded-passphrase scheme as the CFB envelope, but a wrong passphrase
//! or a corrupted file is caught by the auth tag instead of by a
//! downstream parse failure.
//!
//! Layout of the returned byte buffer:
//!   [ 12-byte nonce | ciphertext + 16-byte auth tag ]

use aes_gcm::aead::{Aead, KeyInit, OsRng};
use aes_gcm::{AeadCore, Aes256Gcm, Nonce};

use super::keys::CipherKey;
use crate::errors::{PassmanError, Result};

/// Size of the AES-256-GCM nonce in bytes.
pub const NONCE_LEN: usize = 12;

/// Size of the AES-256-GCM auth tag in bytes.
pub const TAG_LEN: usize = 16;

/// Encrypt `plaintext` under a key derived from `passphrase`.
///
/// Returns the nonce prepended to the ciphertext (nonce || ciphertext).
pub fn encrypt(plaintext: &[u8], passphrase: &str) -> Result<Vec<u8>> {
    let key = CipherKey::from_passphrase(passphrase);
    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| PassmanError::EncryptionFailed(format!("invalid key length: {e}")))?;

    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);

    let ciphertext = cipher
        .encrypt(&nonce, plaintext)
        .map_err(|e| PassmanError::EncryptionFailed(format!("encryption error: {e}")))?;

    let mut output = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    output.extend_from_slice(&nonce);
    output.extend_from_slice(&ciphertext);
    Ok(output)
}

/// Decrypt data that was produced by `encrypt`.
///
/// A failed tag check means the passphrase is wrong or the file was
/// corrupted; both surface as `InvalidPassphrase`.
pub fn decrypt(envelope: &[u8], passphrase: &str) -> Result<Vec<u8>> {
    if envelope.len() < NONCE_LEN + TAG_LEN {
        return Err(PassmanError::MalformedEnvelope(format!(
            "sealed envelope needs at least {} bytes, got {}",
            NONCE_LEN + TAG_LEN,
            envelope.len()
        )));
    }

    let (nonce_bytes, ciphertext) = envelope.split_at(NONCE_LEN);
    let nonce = Nonce::from_slice(nonce_bytes);

    let key = CipherKey::from_passphrase(passphrase);
    let cipher =
        Aes256Gcm::new_from_slice(key.as_bytes()).map_err(|_| PassmanError::InvalidPassphrase)?;

    cipher
        .decrypt(nonce, ciphertext)
        .map_err(|_| PassmanError::InvalidPassphrase)
}
