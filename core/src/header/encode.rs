//! header/encode.rs
//!
//! Header encoding.
//!
//! Design notes:
//! - Serializes `FrameHeader` into a fixed 32-byte buffer, little-endian.
//! - Field order must match `decode.rs` exactly; the two are round-trip
//!   tested byte-for-byte.
//! - Encoding is infallible: any field combination has a wire form, valid or
//!   not, which is what the round-trip property requires.

use crate::header::types::FrameHeader;

/// Serialize a `FrameHeader` into its 32-byte little-endian wire form.
#[inline]
pub fn encode_header_le(h: &FrameHeader) -> [u8; FrameHeader::LEN] {
    let mut out = [0u8; FrameHeader::LEN];
    let mut i = 0usize;

    fn put_u16(out: &mut [u8], i: &mut usize, v: u16) {
        out[*i..*i + 2].copy_from_slice(&v.to_le_bytes());
        *i += 2;
    }
    fn put_u32(out: &mut [u8], i: &mut usize, v: u32) {
        out[*i..*i + 4].copy_from_slice(&v.to_le_bytes());
        *i += 4;
    }
    fn put_u64(out: &mut [u8], i: &mut usize, v: u64) {
        out[*i..*i + 8].copy_from_slice(&v.to_le_bytes());
        *i += 8;
    }

    put_u32(&mut out, &mut i, h.magic);           // 0..4   magic number
    put_u16(&mut out, &mut i, h.width);           // 4..6   width
    put_u16(&mut out, &mut i, h.height);          // 6..8   height
    put_u16(&mut out, &mut i, h.depth);           // 8..10  depth (slices)
    put_u16(&mut out, &mut i, h.bytes_per_voxel); // 10..12 bytes per sample
    put_u32(&mut out, &mut i, h.frame_number);    // 12..16 frame number
    put_u64(&mut out, &mut i, h.timestamp_us);    // 16..24 timestamp (us)
    put_u32(&mut out, &mut i, h.reserved);        // 24..28 reserved
    put_u32(&mut out, &mut i, h.crc32);           // 28..32 CRC-32 of payload

    debug_assert_eq!(i, FrameHeader::LEN, "encoding wrote incorrect length");

    out
}
