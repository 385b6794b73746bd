//! AES-256-CFB envelope encryption.
//!
//! Each call to `encrypt` generates a fresh random 16-byte IV and
//! prepends it to the ciphertext.  `decrypt` splits the IV back out
//! before decrypting.
//!
//! Layout of the returned byte buffer:
//!   [ 16-byte IV | ciphertext (same length as plaintext) ]
//!
//! CFB carries no authentication tag.  Decrypting with the wrong
//! passphrase "succeeds" and returns garbage; callers detect a wrong
//! passphrase only when the plaintext fails to parse.

use aes::cipher::{AsyncStreamCipher, KeyIvInit};
use aes::Aes256;
use rand::RngCore;

use super::keys::CipherKey;
use crate::errors::{PassmanError, Result};

type Aes256CfbEnc = cfb_mode::Encryptor<Aes256>;
type Aes256CfbDec = cfb_mode::Decryptor<Aes256>;

/// AES block length, which is also the IV length.
pub const IV_LEN: usize = 16;

/// Encrypt `plaintext` under a key derived from `passphrase`.
///
/// Returns the IV prepended to the ciphertext (IV || ciphertext).
pub fn encrypt(plaintext: &[u8], passphrase: &str) -> Vec<u8> {
    let key = CipherKey::from_passphrase(passphrase);

    let mut iv = [0u8; IV_LEN];
    rand::rng().fill_bytes(&mut iv);

    let mut output = Vec::with_capacity(IV_LEN + plaintext.len());
    output.extend_from_slice(&iv);
    output.extend_from_slice(plaintext);

    Aes256CfbEnc::new(key.as_bytes().into(), (&iv).into()).encrypt(&mut output[IV_LEN..]);
    output
}

/// Decrypt an envelope produced by `encrypt`.
///
/// Expects the first 16 bytes to be the IV, followed by the ciphertext.
/// Never fails on a wrong passphrase.
pub fn decrypt(envelope: &[u8], passphrase: &str) -> Result<Vec<u8>> {
    if envelope.len() < IV_LEN {
        return Err(PassmanError::MalformedEnvelope(format!(
            "expected at least {IV_LEN} bytes, got {}",
            envelope.len()
        )));
    }

    let (iv, ciphertext) = envelope.split_at(IV_LEN);
    let key = CipherKey::from_passphrase(passphrase);

    let mut plaintext = ciphertext.to_vec();
    Aes256CfbDec::new_from_slices(key.as_bytes(), iv)
        .map_err(|e| PassmanError::MalformedEnvelope(format!("bad IV: {e}")))?
        .decrypt(&mut plaintext);

    Ok(plaintext)
}
