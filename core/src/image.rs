//! Pixel buffers and sample-depth conversion.
//!
//! Design notes:
//! - `ImageBuffer` is a plain owned row-major 8-bit grayscale buffer; once
//!   built it is treated as immutable value data. Filter stages produce new
//!   buffers rather than mutating in place.
//! - `SampleDepth` is an explicit id registry with a `verify()` gate, so a
//!   foreign boundary can name a target depth without sharing Rust enums.

use std::fmt;

use num_enum::TryFromPrimitive;

use crate::constants::depth_ids;

/// Owned row-major grayscale buffer, one byte per sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl ImageBuffer {
    /// Wrap raw sample bytes. `data.len()` is not forced to equal
    /// `width * height` here: decoded records may carry volumetric or
    /// multi-byte payloads; the pipeline checks layout before filtering.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Self {
        Self { width, height, data }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// True when the buffer is exactly one 8-bit sample per (x, y) cell,
    /// the only layout the filter pipeline operates on.
    pub fn is_gray8_2d(&self) -> bool {
        self.data.len() == self.width * self.height
    }
}

/// Target sample depths for `convert_depth` (registry ids, u16 on the wire).
#[repr(u16)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, TryFromPrimitive)]
pub enum SampleDepth {
    U8 = depth_ids::U8,
    U16 = depth_ids::U16,
    F32 = depth_ids::F32,
}

impl SampleDepth {
    pub fn verify(raw: u16) -> Result<(), ConvertError> {
        match raw {
            x if x == SampleDepth::U8 as u16 => Ok(()),
            x if x == SampleDepth::U16 as u16 => Ok(()),
            x if x == SampleDepth::F32 as u16 => Ok(()),
            _ => Err(ConvertError::UnknownDepth { raw }),
        }
    }
}

/// Result of a depth conversion. Values are cast, never rescaled.
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertedBuffer {
    U8(Vec<u8>),
    U16(Vec<u16>),
    F32(Vec<f32>),
}

impl ConvertedBuffer {
    pub fn len(&self) -> usize {
        match self {
            ConvertedBuffer::U8(v) => v.len(),
            ConvertedBuffer::U16(v) => v.len(),
            ConvertedBuffer::F32(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Cast every sample of `image` to `target` without rescaling.
/// Not used by the default pipeline; kept for forward extensibility
/// (16-bit and float profiles).
pub fn convert_depth(image: &ImageBuffer, target: SampleDepth) -> ConvertedBuffer {
    match target {
        SampleDepth::U8 => ConvertedBuffer::U8(image.data().to_vec()),
        SampleDepth::U16 => {
            ConvertedBuffer::U16(image.data().iter().map(|&p| u16::from(p)).collect())
        }
        SampleDepth::F32 => {
            ConvertedBuffer::F32(image.data().iter().map(|&p| f32::from(p)).collect())
        }
    }
}

#[derive(Debug)]
pub enum ConvertError {
    /// Raw id does not name a registered sample depth.
    UnknownDepth { raw: u16 },
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::UnknownDepth { raw } => {
                write!(f, "unknown sample depth: {:#06x}", raw)
            }
        }
    }
}

impl std::error::Error for ConvertError {}
