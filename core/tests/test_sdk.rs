// Facade suite: the end-to-end scenario, version reporting, conversion,
// metadata, and the inference stub.

mod common;

use common::{canonical_record, header_2d, record_with_payload, synthetic_payload};
use ultra_core::checksum::ChecksumPolicy;
use ultra_core::frame::DecodeOptions;
use ultra_core::image::{ConvertedBuffer, SampleDepth};
use ultra_core::inference::InferenceOutcome;
use ultra_core::types::UltraError;
use ultra_core::UltraSdk;

#[test]
fn version_is_fixed_semver() {
    assert_eq!(UltraSdk::version(), "1.0.0");
}

// End-to-end: 128x128 record, magic 0x554C5452, frame 7, timestamp 1.7e15,
// valid payload CRC.
#[test]
fn end_to_end_decode_and_filter() {
    let sdk = UltraSdk::new();
    let record = canonical_record();

    let frame = sdk.load_frame_from_bytes(&record).unwrap();
    assert_eq!(frame.header.magic, 0x554C_5452);
    assert_eq!(frame.header.frame_number, 7);
    assert_eq!(frame.header.timestamp_us, 1_700_000_000_000_000);
    assert_eq!(frame.image.width(), 128);
    assert_eq!(frame.image.height(), 128);
    assert_eq!(frame.image.data().len(), 128 * 128);

    let processed = sdk.apply_default_filters(&frame.image).unwrap();
    assert_eq!(processed.width(), 128);
    assert_eq!(processed.height(), 128);
}

#[test]
fn facade_honours_configured_checksum_policy() {
    let sdk = UltraSdk::new().with_decode_options(DecodeOptions {
        checksum: ChecksumPolicy::Enforce,
    });
    let mut record = canonical_record();
    let last = record.len() - 1;
    record[last] ^= 0x01;

    let err = sdk.load_frame_from_bytes(&record).unwrap_err();
    assert!(matches!(err, UltraError::Frame(_)));
}

#[test]
fn validate_crc_agrees_with_decoder() {
    let sdk = UltraSdk::new();
    let record = canonical_record();
    let frame = sdk.load_frame_from_bytes(&record).unwrap();
    assert!(sdk.validate_crc(&record, frame.header.crc32));
    assert!(!sdk.validate_crc(&record, frame.header.crc32 ^ 1));
}

#[test]
fn convert_frame_widens_without_rescaling() {
    let sdk = UltraSdk::new();
    let payload = synthetic_payload(8, 8, 61);
    let record = record_with_payload(header_2d(8, 8), &payload);
    let frame = sdk.load_frame_from_bytes(&record).unwrap();

    match sdk.convert_frame(&frame.image, SampleDepth::U16) {
        ConvertedBuffer::U16(v) => {
            assert_eq!(v.len(), 64);
            for (wide, narrow) in v.iter().zip(payload.iter()) {
                assert_eq!(*wide, u16::from(*narrow));
            }
        }
        other => panic!("expected U16 buffer, got {:?}", other),
    }

    match sdk.convert_frame(&frame.image, SampleDepth::F32) {
        ConvertedBuffer::F32(v) => {
            assert_eq!(v[0], f32::from(payload[0]));
        }
        other => panic!("expected F32 buffer, got {:?}", other),
    }
}

#[test]
fn sample_depth_registry_rejects_unknown_ids() {
    SampleDepth::verify(SampleDepth::U8 as u16).unwrap();
    SampleDepth::verify(SampleDepth::U16 as u16).unwrap();
    SampleDepth::verify(SampleDepth::F32 as u16).unwrap();
    SampleDepth::verify(0x9999).unwrap_err();
}

#[test]
fn metadata_shortcut_skips_payload_checks() {
    let sdk = UltraSdk::new();
    // Header only: no payload at all, yet metadata is readable.
    let record = ultra_core::header::encode_header_le(&header_2d(64, 64));
    let (frame_number, timestamp_us) = sdk.frame_metadata(&record).unwrap();
    assert_eq!(frame_number, 7);
    assert_eq!(timestamp_us, 1_700_000_000_000_000);
}

#[test]
fn metadata_rejects_foreign_records() {
    let sdk = UltraSdk::new();
    let err = sdk.frame_metadata(&[0u8; 64]).unwrap_err();
    assert!(matches!(err, UltraError::Header(_)));
}

#[test]
fn inference_reports_not_available() {
    let sdk = UltraSdk::new();
    let frame = sdk.load_frame_from_bytes(&canonical_record()).unwrap();
    let outcome = sdk.run_inference(&frame, "/models/segment.tflite");
    assert!(!outcome.is_available());
    match outcome {
        InferenceOutcome::NotAvailable { reason } => {
            assert!(reason.contains("segment.tflite"));
        }
        other => panic!("expected NotAvailable, got {:?}", other),
    }
}

#[test]
fn facade_load_from_file_round_trip() {
    let sdk = UltraSdk::new();
    let record = canonical_record();
    let path = std::env::temp_dir().join(format!("ultra_sdk_test_{}.ultra", std::process::id()));
    std::fs::write(&path, &record).unwrap();

    let frame = sdk.load_frame_from_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(frame.header.frame_number, 7);
}

// Calls on independent data are safe from multiple threads; the facade has
// no shared mutable state.
#[test]
fn concurrent_calls_on_independent_data() {
    let sdk = UltraSdk::new();
    let handles: Vec<_> = (0..4)
        .map(|seed| {
            let sdk = sdk.clone();
            std::thread::spawn(move || {
                let payload = synthetic_payload(32, 32, 70 + seed);
                let record = record_with_payload(header_2d(32, 32), &payload);
                let frame = sdk.load_frame_from_bytes(&record).unwrap();
                sdk.apply_default_filters(&frame.image).unwrap()
            })
        })
        .collect();
    for handle in handles {
        let out = handle.join().unwrap();
        assert_eq!(out.data().len(), 32 * 32);
    }
}
