//! Shared fixtures: record builders and synthetic speckle frames.

#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use ultra_core::checksum::crc32;
use ultra_core::header::{encode_header_le, FrameHeader};

/// Assemble a full record from a header and payload, fixing up the header
/// CRC to cover the payload.
pub fn record_with_payload(mut header: FrameHeader, payload: &[u8]) -> Vec<u8> {
    header.crc32 = crc32(payload);
    let mut record = encode_header_le(&header).to_vec();
    record.extend_from_slice(payload);
    record
}

/// Deterministic speckle-like frame: a vertical intensity ramp with
/// multiplicative noise, the texture the denoise stage is tuned for.
pub fn synthetic_payload(width: usize, height: usize, seed: u64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut data = Vec::with_capacity(width * height);
    for y in 0..height {
        let base = 60.0 + 140.0 * (1.0 - y as f32 / height.max(1) as f32);
        for _ in 0..width {
            let speckle: f32 = 1.0 + rng.gen_range(-0.3..0.3);
            data.push((base * speckle).clamp(0.0, 255.0) as u8);
        }
    }
    data
}

/// Header for a `width` x `height` 8-bit 2D record.
pub fn header_2d(width: u16, height: u16) -> FrameHeader {
    FrameHeader {
        width,
        height,
        ..FrameHeader::test_header()
    }
}

/// The canonical 128x128 end-to-end record: frame_number 7, timestamp
/// 1_700_000_000_000_000, valid payload CRC.
pub fn canonical_record() -> Vec<u8> {
    let header = FrameHeader::test_header();
    let payload = synthetic_payload(header.width as usize, header.height as usize, 7);
    record_with_payload(header, &payload)
}
