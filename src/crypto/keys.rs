//! Passphrase-to-key derivation.
//!
//! The cipher key is the UTF-8 passphrase truncated or zero-padded to
//! 32 bytes.  There is no salt and no iterated hashing, so a short
//! passphrase yields a weak key.  Every password file passman has
//! written depends on this exact derivation, so it must not change.
//! Files from the earlier Blowfish-based tool use a different cipher
//! and IV size and cannot be read.

use zeroize::Zeroize;

/// Length of an AES-256 key in bytes.
pub const KEY_LEN: usize = 32;

/// A 32-byte cipher key that zeroes its memory when dropped.
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct CipherKey {
    bytes: [u8; KEY_LEN],
}

impl CipherKey {
    /// Derive the key for `passphrase`.
    ///
    /// Bytes past [`KEY_LEN`] are ignored, and shorter passphrases are
    /// padded with zero bytes.
    pub fn from_passphrase(passphrase: &str) -> Self {
        let mut bytes = [0u8; KEY_LEN];
        let source = passphrase.as_bytes();
        let n = source.len().min(KEY_LEN);
        bytes[..n].copy_from_slice(&source[..n]);
        Self { bytes }
    }

    /// Access the raw key bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.bytes
    }
}
