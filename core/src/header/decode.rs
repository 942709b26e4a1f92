//! header/decode.rs
//!
//! Header decoding.
//!
//! Design notes:
//! - Deserializes the fixed 32-byte little-endian layout into `FrameHeader`.
//! - Field order must match `encode.rs` exactly.
//! - Does NOT validate the decoded fields; callers run
//!   `FrameHeader::validate()` separately so "too short" and "wrong format"
//!   stay distinguishable errors.

use byteorder::{ByteOrder, LittleEndian};

use crate::header::types::{FrameHeader, HeaderError};

/// Deserialize a 32-byte little-endian header from the front of `buf`.
///
/// # Returns
/// - `Ok(FrameHeader)` when at least `FrameHeader::LEN` bytes are supplied.
/// - `Err(HeaderError::BufferTooShort)` otherwise.
#[inline]
pub fn decode_header_le(buf: &[u8]) -> Result<FrameHeader, HeaderError> {
    if buf.len() < FrameHeader::LEN {
        return Err(HeaderError::BufferTooShort {
            have: buf.len(),
            need: FrameHeader::LEN,
        });
    }

    // --- fixed offsets ---
    let mut off = 0;

    let magic = LittleEndian::read_u32(&buf[off..off + 4]); // 0..4
    off += 4;
    let width = LittleEndian::read_u16(&buf[off..off + 2]); // 4..6
    off += 2;
    let height = LittleEndian::read_u16(&buf[off..off + 2]); // 6..8
    off += 2;
    let depth = LittleEndian::read_u16(&buf[off..off + 2]); // 8..10
    off += 2;
    let bytes_per_voxel = LittleEndian::read_u16(&buf[off..off + 2]); // 10..12
    off += 2;
    let frame_number = LittleEndian::read_u32(&buf[off..off + 4]); // 12..16
    off += 4;
    let timestamp_us = LittleEndian::read_u64(&buf[off..off + 8]); // 16..24
    off += 8;
    let reserved = LittleEndian::read_u32(&buf[off..off + 4]); // 24..28
    off += 4;
    let crc32 = LittleEndian::read_u32(&buf[off..off + 4]); // 28..32
    off += 4;

    debug_assert_eq!(off, FrameHeader::LEN, "decoding consumed incorrect length");

    Ok(FrameHeader {
        magic,
        width,
        height,
        depth,
        bytes_per_voxel,
        frame_number,
        timestamp_us,
        reserved,
        crc32,
    })
}
