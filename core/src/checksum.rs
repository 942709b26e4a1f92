//! Payload integrity via CRC-32 (IEEE polynomial, same as zip/PNG).
//!
//! Coverage starts at the first payload byte (offset 32): the checksum
//! guards pixel data only, so header-only edits never invalidate it.

use serde::{Deserialize, Serialize};

use crate::constants::PAYLOAD_OFFSET;

/// CRC-32 over an arbitrary byte range.
#[inline]
pub fn crc32(data: &[u8]) -> u32 {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(data);
    hasher.finalize()
}

/// Check the payload CRC of a full record (header + payload).
///
/// Computes CRC-32 over `record[PAYLOAD_OFFSET..]` and compares to
/// `expected`. Returns `false` on mismatch and `false` when the record is
/// shorter than the fixed header; never errors.
pub fn validate_payload_crc(record: &[u8], expected: u32) -> bool {
    if record.len() < PAYLOAD_OFFSET {
        return false;
    }
    crc32(&record[PAYLOAD_OFFSET..]) == expected
}

/// What the decoder does with a payload CRC mismatch.
///
/// `Warn` keeps decoding permissive but makes the mismatch visible in logs;
/// `Enforce` turns it into a hard decode failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChecksumPolicy {
    /// Fail-open: log a warning on mismatch, return the frame anyway.
    #[default]
    Warn,
    /// Fail-closed: a mismatch rejects the frame.
    Enforce,
    /// Do not compute the checksum at all.
    Skip,
}
