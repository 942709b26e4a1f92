// Frame decoder suite: truncation, validation, size checks, checksum
// policies, and file loading.

mod common;

use common::{header_2d, record_with_payload, synthetic_payload};
use ultra_core::checksum::ChecksumPolicy;
use ultra_core::frame::{
    decode_frame_from_bytes, decode_frame_from_bytes_with, decode_frame_from_file,
    DecodeOptions, FrameError,
};
use ultra_core::header::{encode_header_le, FrameHeader};
use ultra_core::types::UltraError;

fn small_record() -> Vec<u8> {
    let payload = synthetic_payload(32, 32, 21);
    record_with_payload(header_2d(32, 32), &payload)
}

// 1. Structural rejection

#[test]
fn rejects_records_shorter_than_header() {
    for len in [0usize, 1, 16, 31] {
        let err = decode_frame_from_bytes(&vec![0u8; len]).unwrap_err();
        assert!(matches!(err, FrameError::Truncated { .. }), "len {}", len);
    }
}

#[test]
fn rejects_wrong_magic() {
    let mut record = small_record();
    record[0] ^= 0xFF;
    let err = decode_frame_from_bytes(&record).unwrap_err();
    assert!(matches!(err, FrameError::InvalidHeader(_)));
}

#[test]
fn rejects_payload_shorter_than_header_claims() {
    let mut record = small_record();
    record.truncate(record.len() - 1);
    let err = decode_frame_from_bytes(&record).unwrap_err();
    assert!(matches!(err, FrameError::SizeMismatch { .. }));
}

#[test]
fn rejects_header_only_record_with_declared_payload() {
    let record = encode_header_le(&header_2d(32, 32));
    let err = decode_frame_from_bytes(&record).unwrap_err();
    assert!(matches!(err, FrameError::SizeMismatch { .. }));
}

// 2. Successful decode

#[test]
fn copies_exactly_the_declared_payload() {
    let payload = synthetic_payload(32, 32, 22);
    let mut record = record_with_payload(header_2d(32, 32), &payload);
    // Trailing bytes beyond the declared payload are ignored.
    record.extend_from_slice(&[0xEE; 17]);

    let frame = decode_frame_from_bytes(&record).unwrap();
    assert!(frame.is_valid());
    assert_eq!(frame.image.width(), 32);
    assert_eq!(frame.image.height(), 32);
    assert_eq!(frame.image.data(), &payload[..]);
}

#[test]
fn header_metadata_survives_decode() {
    let frame = decode_frame_from_bytes(&small_record()).unwrap();
    assert_eq!(frame.header.frame_number, 7);
    assert_eq!(frame.header.timestamp_us, 1_700_000_000_000_000);
}

// 3. Checksum policies

fn corrupted_record() -> Vec<u8> {
    let mut record = small_record();
    let last = record.len() - 1;
    record[last] ^= 0x55;
    record
}

#[test]
fn warn_policy_is_fail_open() {
    // Historical behavior: mismatch is logged, frame still decodes.
    let frame = decode_frame_from_bytes(&corrupted_record()).unwrap();
    assert!(frame.is_valid());
}

#[test]
fn enforce_policy_is_fail_closed() {
    let opts = DecodeOptions {
        checksum: ChecksumPolicy::Enforce,
    };
    let err = decode_frame_from_bytes_with(&corrupted_record(), &opts).unwrap_err();
    assert!(matches!(err, FrameError::ChecksumMismatch { .. }));
}

#[test]
fn enforce_policy_accepts_intact_records() {
    let opts = DecodeOptions {
        checksum: ChecksumPolicy::Enforce,
    };
    decode_frame_from_bytes_with(&small_record(), &opts).unwrap();
}

#[test]
fn skip_policy_never_checks() {
    let opts = DecodeOptions {
        checksum: ChecksumPolicy::Skip,
    };
    decode_frame_from_bytes_with(&corrupted_record(), &opts).unwrap();
}

// 4. File loading

#[test]
fn decodes_a_file_round_trip() {
    let record = small_record();
    let path = std::env::temp_dir().join(format!("ultra_decode_test_{}.ultra", std::process::id()));
    std::fs::write(&path, &record).unwrap();

    let frame = decode_frame_from_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert!(frame.is_valid());
    assert_eq!(frame.image.width(), 32);
}

#[test]
fn missing_file_reports_the_path() {
    let path = std::env::temp_dir().join("ultra_no_such_file_7f3a.ultra");
    let err = decode_frame_from_file(&path).unwrap_err();
    match err {
        UltraError::Io { path: p, .. } => assert!(p.contains("ultra_no_such_file_7f3a")),
        other => panic!("expected Io error, got {}", other),
    }
}

// 5. Non-2D profiles decode but stay out of the pipeline's domain

#[test]
fn volumetric_record_decodes_with_full_payload() {
    let header = FrameHeader {
        depth: 2,
        ..header_2d(16, 16)
    };
    let payload = synthetic_payload(16, 32, 23); // 16*16*2 samples
    let record = record_with_payload(header, &payload);

    let frame = decode_frame_from_bytes(&record).unwrap();
    assert_eq!(frame.image.data().len(), 16 * 16 * 2);
    assert!(!frame.image.is_gray8_2d());
}
