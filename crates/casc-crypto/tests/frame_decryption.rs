//! Integration tests for decrypting frames through a storage session.
//!
//! Golden ciphertexts were produced with the published catalog key
//! FA505078126ACB3E and a Salsa20/20 implementation checked against the
//! ECRYPT test vectors.

use casc_core::config::KeyringConfig;
use casc_core::{CascError, KeyName};
use casc_crypto::{FrameEnvelope, Session};

const CATALOG_KEY: KeyName = KeyName(0xFA505078126ACB3E);

fn catalog_session() -> Session {
    Session::open(&KeyringConfig::default()).expect("open session")
}

fn unhex(s: &str) -> Vec<u8> {
    hex::decode(s).expect("valid hex")
}

fn frame_with(envelope: &FrameEnvelope, ciphertext: &[u8]) -> Vec<u8> {
    let mut frame = Vec::new();
    envelope.encode(&mut frame);
    frame.extend_from_slice(ciphertext);
    frame
}

#[test]
fn golden_frame_four_byte_iv_spanning_two_blocks() {
    let session = catalog_session();
    let envelope = FrameEnvelope::salsa20(CATALOG_KEY, &[0x11, 0x22, 0x33, 0x44]).unwrap();
    let ciphertext = unhex(
        "2461632b1d7b931056a5171a896e015283ada0624799a910219bb169a81fba54\
         3efdc16ecbd6636256b48ed8ac70db237504b6dc543d3a3988ba7bdcfbaa6959\
         c6992bb3",
    );
    let frame = frame_with(&envelope, &ciphertext);

    let mut output = vec![0u8; ciphertext.len()];
    let written = session.decrypt_frame(&frame, &mut output, 3).unwrap();

    assert_eq!(written, 68);
    assert_eq!(
        &output[..written],
        &b"frame payload crossing one keystream block boundary, seventy bytes!!"[..]
    );
}

#[test]
fn golden_frame_eight_byte_iv() {
    let session = catalog_session();
    let envelope = FrameEnvelope::salsa20(CATALOG_KEY, &[1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
    let frame = frame_with(&envelope, &unhex("9b5ff53c97"));

    let mut output = [0u8; 5];
    let written = session
        .decrypt_frame(&frame, &mut output, 0x0102_0304)
        .unwrap();

    assert_eq!(written, 5);
    assert_eq!(&output, b"short");
}

#[test]
fn wrong_frame_index_yields_different_plaintext() {
    let session = catalog_session();
    let envelope = FrameEnvelope::salsa20(CATALOG_KEY, &[1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
    let frame = frame_with(&envelope, &unhex("9b5ff53c97"));

    let mut output = [0u8; 5];
    session.decrypt_frame(&frame, &mut output, 0).unwrap();
    assert_ne!(&output, b"short");
}

#[test]
fn missing_key_can_be_registered_and_retried() {
    let mut session = Session::open(&KeyringConfig {
        builtin_catalog: false,
        ..KeyringConfig::default()
    })
    .unwrap();
    let envelope = FrameEnvelope::salsa20(CATALOG_KEY, &[0x11, 0x22, 0x33, 0x44]).unwrap();
    let frame = frame_with(&envelope, &unhex("2461632b1d"));
    let mut output = [0u8; 5];

    let err = session.decrypt_frame(&frame, &mut output, 3).unwrap_err();
    assert!(matches!(err, CascError::KeyNotFound(CATALOG_KEY)));

    let key: [u8; 16] = unhex("BDC51862ABED79B2DE48C8E7E66C6200")
        .try_into()
        .unwrap();
    session.add_encryption_key(CATALOG_KEY, key).unwrap();

    let written = session.decrypt_frame(&frame, &mut output, 3).unwrap();
    assert_eq!(&output[..written], b"frame");
}

#[test]
fn one_bad_frame_does_not_poison_the_session() {
    let session = catalog_session();
    let mut output = [0u8; 16];

    assert!(matches!(
        session.decrypt_frame(&[3, 0, 0], &mut output, 0),
        Err(CascError::UnsupportedFormat(_))
    ));
    assert!(matches!(
        session.decrypt_frame(&[8, 1, 2], &mut output, 0),
        Err(CascError::FileCorrupt { .. })
    ));

    let envelope = FrameEnvelope::salsa20(CATALOG_KEY, &[1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
    let frame = frame_with(&envelope, &unhex("9b5ff53c97"));
    let written = session
        .decrypt_frame(&frame, &mut output, 0x0102_0304)
        .unwrap();
    assert_eq!(&output[..written], b"short");
}

#[test]
fn runtime_capacity_is_configurable() {
    let mut session = Session::open(&KeyringConfig {
        extra_key_capacity: 2,
        builtin_catalog: false,
        key_files: Vec::new(),
    })
    .unwrap();

    session.add_encryption_key(KeyName(1), [1u8; 16]).unwrap();
    session.add_encryption_key(KeyName(2), [2u8; 16]).unwrap();
    let err = session
        .add_encryption_key(KeyName(3), [3u8; 16])
        .unwrap_err();

    assert!(matches!(err, CascError::CapacityExceeded { capacity: 2 }));
    assert!(session.find_key(KeyName(2)).unwrap().is_some());
    assert!(session.find_key(KeyName(3)).unwrap().is_none());
}

#[test]
fn passthrough_copy_through_session() {
    let session = catalog_session();
    let mut output = [0u8; 6];

    assert_eq!(session.direct_copy(b"plain!", &mut output).unwrap(), 6);
    assert_eq!(&output, b"plain!");
    assert!(matches!(
        session.direct_copy(b"plain!!", &mut output),
        Err(CascError::InsufficientBuffer {
            needed: 7,
            available: 6
        })
    ));
}
