//! Integration tests for loading and saving password files.

use std::fs;

use passman::directory::{ServiceDirectory, ServiceRecord};
use passman::errors::PassmanError;
use passman::store::{format, EnvelopeFormat, Session, Store};
use tempfile::TempDir;

/// Helper: a store path inside a fresh temp dir.
fn store(format: EnvelopeFormat) -> (TempDir, Store) {
    let dir = TempDir::new().expect("create temp dir");
    let store = Store::new(dir.path().join(".passman"), format);
    (dir, store)
}

fn sample() -> ServiceDirectory {
    let mut d = ServiceDirectory::new();
    d.put(ServiceRecord::new("zebra.io", "z-pass", ""));
    d.put(ServiceRecord::new("alpha.com", "a-pass", "user: alice"));
    d.put(ServiceRecord::new("mid.org", "m-pass", ""));
    d
}

// ---------------------------------------------------------------------------
// Save and re-load round-trip
// ---------------------------------------------------------------------------

#[test]
fn save_and_load_roundtrip_legacy() {
    let (_dir, store) = store(EnvelopeFormat::Legacy);
    let session = Session::new("test-password");

    store.save(&session, &sample()).unwrap();
    let loaded = store.load(&session).unwrap();

    assert_eq!(loaded.len(), 3);
    assert_eq!(loaded.get("alpha.com").unwrap().meta, "user: alice");
    assert_eq!(loaded.get("zebra.io").unwrap().secret, "z-pass");
}

#[test]
fn save_and_load_roundtrip_sealed() {
    let (_dir, store) = store(EnvelopeFormat::Sealed);
    let session = Session::new("test-password");

    store.save(&session, &sample()).unwrap();
    assert_eq!(store.load(&session).unwrap().len(), 3);
}

#[test]
fn loaded_order_is_sorted_but_saving_keeps_memory_order() {
    let (_dir, store) = store(EnvelopeFormat::Legacy);
    let session = Session::new("pw");
    let d = sample();

    store.save(&session, &d).unwrap();
    assert_eq!(d.names(), vec!["zebra.io", "alpha.com", "mid.org"]);

    let loaded = store.load(&session).unwrap();
    assert_eq!(loaded.names(), vec!["alpha.com", "mid.org", "zebra.io"]);
}

// ---------------------------------------------------------------------------
// Wrong passphrase
// ---------------------------------------------------------------------------

#[test]
fn wrong_passphrase_is_invalid_passphrase_legacy() {
    let (_dir, store) = store(EnvelopeFormat::Legacy);
    store.save(&Session::new("right"), &sample()).unwrap();

    let result = store.load(&Session::new("wrong"));
    assert!(matches!(result, Err(PassmanError::InvalidPassphrase)));
}

#[test]
fn wrong_passphrase_is_invalid_passphrase_sealed() {
    let (_dir, store) = store(EnvelopeFormat::Sealed);
    store.save(&Session::new("right"), &sample()).unwrap();

    let result = store.load(&Session::new("wrong"));
    assert!(matches!(result, Err(PassmanError::InvalidPassphrase)));
}

// ---------------------------------------------------------------------------
// File format
// ---------------------------------------------------------------------------

#[test]
fn legacy_file_is_base64_of_iv_and_ciphertext() {
    let (_dir, store) = store(EnvelopeFormat::Legacy);
    let session = Session::new("pw");
    let d = sample();
    store.save(&session, &d).unwrap();

    let contents = fs::read(store.path()).unwrap();
    let (found, envelope) = format::decode(&contents).unwrap();
    assert_eq!(found, EnvelopeFormat::Legacy);

    let payload = d.to_payload().unwrap();
    assert_eq!(envelope.len(), passman::crypto::IV_LEN + payload.len());
    assert_eq!(passman::crypto::decrypt(&envelope, "pw").unwrap(), payload);
}

#[test]
fn sealed_file_starts_with_tag() {
    let (_dir, store) = store(EnvelopeFormat::Sealed);
    store.save(&Session::new("pw"), &sample()).unwrap();

    let contents = fs::read(store.path()).unwrap();
    assert!(contents.starts_with(format::SEALED_TAG));
}

#[test]
fn two_saves_write_different_bytes() {
    let (_dir, store) = store(EnvelopeFormat::Legacy);
    let session = Session::new("pw");

    store.save(&session, &sample()).unwrap();
    let first = fs::read(store.path()).unwrap();
    store.save(&session, &sample()).unwrap();
    let second = fs::read(store.path()).unwrap();

    assert_ne!(first, second);
}

#[test]
fn sealed_store_reads_legacy_file() {
    let (dir, legacy) = store(EnvelopeFormat::Legacy);
    let session = Session::new("pw");
    legacy.save(&session, &sample()).unwrap();

    let sealed = Store::new(dir.path().join(".passman"), EnvelopeFormat::Sealed);
    assert_eq!(sealed.load(&session).unwrap().len(), 3);
}

#[test]
fn reads_file_written_with_null_services() {
    let (_dir, store) = store(EnvelopeFormat::Legacy);
    let envelope = passman::crypto::encrypt(b"{\"Services\":null}\n", "pw");
    fs::write(store.path(), format::encode(EnvelopeFormat::Legacy, &envelope)).unwrap();

    assert!(store.load(&Session::new("pw")).unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Error propagation
// ---------------------------------------------------------------------------

#[test]
fn missing_file_is_store_not_found() {
    let (_dir, store) = store(EnvelopeFormat::Legacy);
    assert!(matches!(
        store.load(&Session::new("pw")),
        Err(PassmanError::StoreNotFound(_))
    ));
}

#[test]
fn short_envelope_is_malformed() {
    let (_dir, store) = store(EnvelopeFormat::Legacy);
    // 8 bytes of envelope: shorter than one AES block.
    fs::write(store.path(), "AAAAAAAAAAA=").unwrap();

    assert!(matches!(
        store.load(&Session::new("pw")),
        Err(PassmanError::MalformedEnvelope(_))
    ));
}

#[test]
fn non_base64_file_is_malformed() {
    let (_dir, store) = store(EnvelopeFormat::Legacy);
    fs::write(store.path(), "this is not an envelope").unwrap();

    assert!(matches!(
        store.load(&Session::new("pw")),
        Err(PassmanError::MalformedEnvelope(_))
    ));
}

#[test]
fn save_leaves_no_temp_file_behind() {
    let (dir, store) = store(EnvelopeFormat::Legacy);
    store.save(&Session::new("pw"), &sample()).unwrap();

    let entries: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(entries, vec![std::ffi::OsString::from(".passman")]);
}
