//! frame/types.rs
//! Decoded frame value and decoder options.

use std::fmt;

use crate::checksum::ChecksumPolicy;
use crate::header::FrameHeader;
use crate::image::ImageBuffer;

/// One decoded .ultra record: header metadata plus the pixel buffer.
///
/// A `Frame` is immutable value data. Each decode call produces an
/// independent frame; there is no pooling or caching, and filters never
/// mutate a frame's buffer in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub header: FrameHeader,
    pub image: ImageBuffer,
}

impl Frame {
    /// Valid iff the header passes validation and the buffer is non-empty.
    pub fn is_valid(&self) -> bool {
        self.header.is_valid() && !self.image.is_empty()
    }
}

/// Decoder knobs. Only the checksum policy for now.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    pub checksum: ChecksumPolicy,
}

#[derive(Debug)]
pub enum FrameError {
    /// Record shorter than the fixed header.
    Truncated { have: usize, need: usize },

    /// Header failed structural validation.
    InvalidHeader(crate::header::HeaderError),

    /// Record shorter than header + declared payload.
    SizeMismatch { have: usize, need: u64 },

    /// Payload CRC mismatch under `ChecksumPolicy::Enforce`.
    ChecksumMismatch { expected: u32, computed: u32 },
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use FrameError::*;
        match self {
            Truncated { have, need } => {
                write!(f, "record too small to contain header: {} < {}", have, need)
            }
            InvalidHeader(e) => write!(f, "invalid header: {}", e),
            SizeMismatch { have, need } => {
                write!(f, "size mismatch: {} bytes, need {} (header + payload)", have, need)
            }
            ChecksumMismatch { expected, computed } => write!(
                f,
                "payload CRC mismatch: header says {:#010x}, computed {:#010x}",
                expected, computed
            ),
        }
    }
}

impl std::error::Error for FrameError {}

impl From<crate::header::HeaderError> for FrameError {
    fn from(e: crate::header::HeaderError) -> Self {
        FrameError::InvalidHeader(e)
    }
}
