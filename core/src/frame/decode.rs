//! frame/decode.rs
//!
//! Record decoding: raw bytes -> header -> integrity check -> pixel buffer.
//!
//! Design notes:
//! - Whole-record, whole-file buffering. Frames are ~16 KiB; streamed reads
//!   and multi-frame containers are out of scope.
//! - The checksum step is policy-driven. `Warn` keeps the historical
//!   fail-open behavior but logs the mismatch; `Enforce` rejects.

use std::fs;
use std::path::Path;

use log::{debug, warn};

use crate::checksum::{crc32, ChecksumPolicy};
use crate::constants::PAYLOAD_OFFSET;
use crate::frame::types::{DecodeOptions, Frame, FrameError};
use crate::header::{decode_header_le, FrameHeader};
use crate::image::ImageBuffer;
use crate::types::UltraError;

/// Decode one full .ultra record with the default options (checksum `Warn`).
pub fn decode_frame_from_bytes(data: &[u8]) -> Result<Frame, FrameError> {
    decode_frame_from_bytes_with(data, &DecodeOptions::default())
}

/// Decode one full .ultra record.
///
/// Steps:
/// 1. reject records shorter than the 32-byte header
/// 2. decode the header, then validate it (magic, non-zero dimensions)
/// 3. reject records shorter than header + declared payload
/// 4. check the payload CRC per `opts.checksum`
/// 5. copy exactly `payload_len` bytes into the pixel buffer
pub fn decode_frame_from_bytes_with(
    data: &[u8],
    opts: &DecodeOptions,
) -> Result<Frame, FrameError> {
    if data.len() < FrameHeader::LEN {
        return Err(FrameError::Truncated {
            have: data.len(),
            need: FrameHeader::LEN,
        });
    }

    let header = decode_header_le(data)?;
    header.validate()?;

    let payload_len = header.payload_len();
    let need = FrameHeader::LEN as u64 + payload_len;
    if (data.len() as u64) < need {
        return Err(FrameError::SizeMismatch {
            have: data.len(),
            need,
        });
    }

    // Coverage is the declared payload extent; trailing bytes past it are
    // ignored by both the checksum and the pixel copy.
    let end = PAYLOAD_OFFSET + payload_len as usize;

    match opts.checksum {
        ChecksumPolicy::Skip => {}
        policy => {
            let computed = crc32(&data[PAYLOAD_OFFSET..end]);
            if computed != header.crc32 {
                match policy {
                    ChecksumPolicy::Enforce => {
                        return Err(FrameError::ChecksumMismatch {
                            expected: header.crc32,
                            computed,
                        });
                    }
                    _ => warn!(
                        "frame {}: payload CRC mismatch (header {:#010x}, computed {:#010x}), continuing",
                        header.frame_number, header.crc32, computed
                    ),
                }
            }
        }
    }

    let pixels = data[FrameHeader::LEN..end].to_vec();

    debug!(
        "decoded frame {}: {}x{}x{}, {} payload bytes",
        header.frame_number, header.width, header.height, header.depth, payload_len
    );

    Ok(Frame {
        header,
        image: ImageBuffer::from_raw(header.width as usize, header.height as usize, pixels),
    })
}

/// Read an entire .ultra file and decode it.
///
/// I/O failures carry the offending path in the error message.
pub fn decode_frame_from_file<P: AsRef<Path>>(path: P) -> Result<Frame, UltraError> {
    decode_frame_from_file_with(path, &DecodeOptions::default())
}

pub fn decode_frame_from_file_with<P: AsRef<Path>>(
    path: P,
    opts: &DecodeOptions,
) -> Result<Frame, UltraError> {
    let path = path.as_ref();
    let data = fs::read(path).map_err(|source| UltraError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(decode_frame_from_bytes_with(&data, opts)?)
}
