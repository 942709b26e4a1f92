use thiserror::Error;

use crate::frame::FrameError;
use crate::header::HeaderError;
use crate::image::ConvertError;
use crate::pipeline::PipelineError;

/// Unified error covering I/O, header, frame, pipeline, and conversion
/// failures.
/// - `From<T>` impls enable `?` across the layers.
/// - Messages are human-readable and stable; no structured codes cross the
///   foreign boundary, only these rendered strings.
#[derive(Debug, Error)]
pub enum UltraError {
    /// File open/read failure; carries the offending path.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Header-level error (truncation or structural validation).
    #[error("header error: {0}")]
    Header(#[from] HeaderError),

    /// Record-level error (truncation, size mismatch, enforced checksum).
    #[error("frame error: {0}")]
    Frame(#[from] FrameError),

    /// Filter pipeline rejected its input.
    #[error("pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    /// Sample-depth conversion error.
    #[error("conversion error: {0}")]
    Convert(#[from] ConvertError),
}
