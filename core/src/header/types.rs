//! header/types.rs
//! Core header struct for the .ultra frame format.
//!
//! Design notes:
//! - Fixed 32-byte layout, little-endian, packed; the type is the single
//!   source of truth for field order and offsets.
//! - `reserved` carries no semantics yet but must round-trip unchanged so a
//!   future revision can claim it without a format bump.
//! - Decoding and validation are split on purpose: a decoded header with a
//!   wrong magic is still inspectable, so callers can tell "malformed" from
//!   "not an .ultra record".

use std::fmt;

use crate::constants::{
    DEFAULT_BYTES_PER_VOXEL, DEFAULT_DEPTH, DEFAULT_HEIGHT, DEFAULT_WIDTH, HEADER_LEN,
    MAGIC_ULTRA,
};

/// Fixed .ultra frame header (32 bytes on the wire).
/// - `payload_len()` derives the pixel-data size that must follow it.
/// - `crc32` covers payload bytes only (offset 32 to end of record), so
///   header-only edits never require re-checksumming the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    pub magic: u32,            // 0x554C5452 ("ULTR")
    pub width: u16,            // pixels per row, > 0
    pub height: u16,           // rows, > 0
    pub depth: u16,            // slices, 1 for 2D
    pub bytes_per_voxel: u16,  // bytes per sample, > 0
    pub frame_number: u32,     // sequence id, ordering not enforced
    pub timestamp_us: u64,     // microseconds since epoch
    pub reserved: u32,         // future use; round-trips unchanged
    pub crc32: u32,            // CRC-32 of the payload bytes
}

impl FrameHeader {
    /// Fixed wire size in bytes.
    pub const LEN: usize = HEADER_LEN;

    /// Derived payload size in bytes: width * height * depth * bytes_per_voxel.
    /// u64 arithmetic; four u16 factors cannot overflow it.
    pub fn payload_len(&self) -> u64 {
        u64::from(self.width)
            * u64::from(self.height)
            * u64::from(self.depth)
            * u64::from(self.bytes_per_voxel)
    }

    /// Structural sanity: magic matches and no zero-sized dimension/sample.
    pub fn validate(&self) -> Result<(), HeaderError> {
        if self.magic != MAGIC_ULTRA {
            return Err(HeaderError::InvalidMagic {
                have: self.magic,
                need: MAGIC_ULTRA,
            });
        }
        if self.width == 0 {
            return Err(HeaderError::ZeroWidth);
        }
        if self.height == 0 {
            return Err(HeaderError::ZeroHeight);
        }
        if self.bytes_per_voxel == 0 {
            return Err(HeaderError::ZeroBytesPerVoxel);
        }
        Ok(())
    }

    /// Convenience boolean form of `validate()`.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Canonical header for tests.
    /// Guaranteed to pass `validate()` unless a regression is introduced.
    pub fn test_header() -> Self {
        Self {
            frame_number: 7,
            timestamp_us: 1_700_000_000_000_000,
            ..Default::default()
        }
    }
}

impl Default for FrameHeader {
    /// Default 2D acquisition profile: 128x128, one slice, one byte per
    /// sample, zeroed optional fields.
    fn default() -> Self {
        Self {
            magic: MAGIC_ULTRA,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            depth: DEFAULT_DEPTH,
            bytes_per_voxel: DEFAULT_BYTES_PER_VOXEL,
            frame_number: 0,
            timestamp_us: 0,
            reserved: 0,
            crc32: 0,
        }
    }
}

#[derive(Debug)]
pub enum HeaderError {
    /// Buffer too short to contain a full header.
    BufferTooShort { have: usize, need: usize },

    /// Magic field does not identify an .ultra record.
    InvalidMagic { have: u32, need: u32 },

    /// Width is zero.
    ZeroWidth,

    /// Height is zero.
    ZeroHeight,

    /// Bytes-per-voxel is zero.
    ZeroBytesPerVoxel,
}

impl fmt::Display for HeaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use HeaderError::*;
        match self {
            BufferTooShort { have, need } => {
                write!(f, "header buffer too short: {} < {}", have, need)
            }
            InvalidMagic { have, need } => {
                write!(f, "invalid magic: expected {:#010x}, got {:#010x}", need, have)
            }
            ZeroWidth => write!(f, "invalid header: width is zero"),
            ZeroHeight => write!(f, "invalid header: height is zero"),
            ZeroBytesPerVoxel => write!(f, "invalid header: bytes_per_voxel is zero"),
        }
    }
}

impl std::error::Error for HeaderError {}
