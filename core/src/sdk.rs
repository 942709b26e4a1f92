//! SDK facade composing decoder, checksum validation, and the pipeline.
//!
//! The facade holds no frame state between calls; its only fields are
//! default configuration values. Each call operates on caller-supplied,
//! independent data, so a shared `UltraSdk` is safe to use from multiple
//! threads without locking as long as callers do not mutate a buffer that
//! another call is still reading. Returned frames and buffers are owned
//! exclusively by the caller.

use std::path::Path;

use crate::checksum;
use crate::constants::SDK_VERSION;
use crate::frame::{
    decode_frame_from_bytes_with, decode_frame_from_file_with, DecodeOptions, Frame,
};
use crate::image::{convert_depth, ConvertedBuffer, ImageBuffer, SampleDepth};
use crate::inference::InferenceOutcome;
use crate::pipeline::{apply_filters, ProcessingConfig};
use crate::types::UltraError;

/// Public entry point for the .ultra codec + pipeline.
#[derive(Debug, Clone, Default)]
pub struct UltraSdk {
    default_config: ProcessingConfig,
    decode_options: DecodeOptions,
}

impl UltraSdk {
    /// SDK with default processing preset and fail-open checksum policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the decoder options (checksum policy) for this instance.
    pub fn with_decode_options(mut self, opts: DecodeOptions) -> Self {
        self.decode_options = opts;
        self
    }

    /// Override the default processing preset for this instance.
    pub fn with_default_config(mut self, config: ProcessingConfig) -> Self {
        self.default_config = config;
        self
    }

    /// Decode one full record (header + payload) from raw bytes.
    pub fn load_frame_from_bytes(&self, data: &[u8]) -> Result<Frame, UltraError> {
        Ok(decode_frame_from_bytes_with(data, &self.decode_options)?)
    }

    /// Read and decode one .ultra file.
    pub fn load_frame_from_file<P: AsRef<Path>>(&self, path: P) -> Result<Frame, UltraError> {
        decode_frame_from_file_with(path, &self.decode_options)
    }

    /// Run the filter pipeline with an explicit configuration.
    pub fn apply_filters(
        &self,
        image: &ImageBuffer,
        config: &ProcessingConfig,
    ) -> Result<ImageBuffer, UltraError> {
        Ok(apply_filters(image, config)?)
    }

    /// Run the filter pipeline with this instance's default preset.
    pub fn apply_default_filters(&self, image: &ImageBuffer) -> Result<ImageBuffer, UltraError> {
        self.apply_filters(image, &self.default_config)
    }

    /// Check the payload CRC of a full record against `expected`.
    pub fn validate_crc(&self, record: &[u8], expected: u32) -> bool {
        checksum::validate_payload_crc(record, expected)
    }

    /// Cast a buffer to a different sample depth without rescaling.
    pub fn convert_frame(&self, image: &ImageBuffer, target: SampleDepth) -> ConvertedBuffer {
        convert_depth(image, target)
    }

    /// Decode just enough of a record to report (frame_number, timestamp_us).
    ///
    /// Boundary adapters use this for list views without paying for a full
    /// pixel-buffer copy.
    pub fn frame_metadata(&self, data: &[u8]) -> Result<(u32, u64), UltraError> {
        let header = crate::header::decode_header_le(data)?;
        header.validate()?;
        Ok((header.frame_number, header.timestamp_us))
    }

    /// AI-inference hook. No backend is available yet; this reports the
    /// distinct not-available state instead of failing.
    pub fn run_inference<P: AsRef<Path>>(&self, _frame: &Frame, model_path: P) -> InferenceOutcome {
        InferenceOutcome::NotAvailable {
            reason: format!(
                "no inference backend built in (requested model: {})",
                model_path.as_ref().display()
            ),
        }
    }

    /// Semantic version of this SDK.
    pub fn version() -> &'static str {
        SDK_VERSION
    }
}
