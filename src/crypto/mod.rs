//! Cryptographic primitives for passman.
//!
//! This module provides:
//! - Passphrase-to-key derivation (`keys`)
//! - AES-256-CFB envelope encryption, the legacy file format (`encryption`)
//! - AES-256-GCM authenticated envelopes (`sealed`)

pub mod encryption;
pub mod keys;
pub mod sealed;

// Re-export the CFB envelope so callers can write:
//   use crate::crypto::{encrypt, decrypt};
pub use encryption::{decrypt, encrypt, IV_LEN};
pub use keys::{CipherKey, KEY_LEN};
