// Checksum suite: CRC-32 reference values, corruption sensitivity, and the
// payload-only coverage contract.

mod common;

use common::{record_with_payload, synthetic_payload};
use ultra_core::checksum::{crc32, validate_payload_crc};
use ultra_core::header::{encode_header_le, FrameHeader};

#[test]
fn crc32_matches_standard_check_value() {
    // The canonical CRC-32 (IEEE) check value.
    assert_eq!(crc32(b"123456789"), 0xCBF4_3926);
}

#[test]
fn crc32_of_empty_input_is_zero() {
    assert_eq!(crc32(&[]), 0);
}

#[test]
fn any_single_byte_flip_changes_the_crc() {
    let payload = synthetic_payload(16, 4, 3);
    let reference = crc32(&payload);
    for i in 0..payload.len() {
        let mut corrupted = payload.clone();
        corrupted[i] ^= 0x01;
        assert_ne!(crc32(&corrupted), reference, "flip at byte {}", i);
    }
}

#[test]
fn validate_accepts_matching_payload() {
    let payload = synthetic_payload(32, 32, 11);
    let record = record_with_payload(common::header_2d(32, 32), &payload);
    let expected = crc32(&payload);
    assert!(validate_payload_crc(&record, expected));
}

#[test]
fn validate_rejects_mismatch_without_error() {
    let payload = synthetic_payload(32, 32, 12);
    let mut record = record_with_payload(common::header_2d(32, 32), &payload);
    record[40] ^= 0xFF;
    assert!(!validate_payload_crc(&record, crc32(&payload)));
}

#[test]
fn validate_rejects_records_shorter_than_header() {
    assert!(!validate_payload_crc(&[], 0));
    assert!(!validate_payload_crc(&[0u8; 31], 0));
}

#[test]
fn coverage_excludes_every_header_field() {
    // Two records with identical payloads but different header metadata
    // carry the same payload CRC: header edits never invalidate it.
    let payload = synthetic_payload(32, 32, 13);
    let a = common::header_2d(32, 32);
    let b = FrameHeader {
        frame_number: a.frame_number + 99,
        timestamp_us: a.timestamp_us + 1,
        reserved: 0xFFFF_FFFF,
        ..a
    };
    let expected = crc32(&payload);
    assert!(validate_payload_crc(&record_with_payload(a, &payload), expected));
    assert!(validate_payload_crc(&record_with_payload(b, &payload), expected));
}

#[test]
fn header_only_record_has_empty_payload_crc() {
    let record = encode_header_le(&FrameHeader::test_header());
    assert!(validate_payload_crc(&record, 0));
}
