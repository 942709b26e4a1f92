//! Filter pipeline: an ordered list of named stages over a pixel buffer.
//!
//! Design notes:
//! - Stage order is part of the contract (gain before denoise, sharpen after
//!   denoise) and is never reordered by configuration; the config only
//!   selects and parameterizes stages.
//! - The plan is explicit data (`stage_plan`) rather than implicit call
//!   order, so it is testable on its own.
//! - Every run ends with an unconditional min-max normalize: the output is
//!   always in valid display range even if an intermediate stage saturated.

pub mod config;
pub mod stages;

use std::fmt;

use crate::constants::SHARPEN_SIGMA;
use crate::image::ImageBuffer;

pub use config::ProcessingConfig;

/// Named pipeline stages, in their fixed execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageKind {
    Normalize,
    Gain,
    Denoise,
    GaussianBlur,
    Sharpen,
    Contrast,
    /// Unconditional final safety net.
    FinalNormalize,
}

/// Resolve the configuration into the ordered list of stages that will run.
pub fn stage_plan(config: &ProcessingConfig) -> Vec<StageKind> {
    let mut plan = Vec::new();
    if config.normalize {
        plan.push(StageKind::Normalize);
    }
    if config.gain != 1.0 {
        plan.push(StageKind::Gain);
    }
    if config.denoise {
        plan.push(StageKind::Denoise);
    }
    if config.gaussian_blur && config.blur_kernel_size > 0 {
        plan.push(StageKind::GaussianBlur);
    }
    if config.sharpen {
        plan.push(StageKind::Sharpen);
    }
    if config.contrast_alpha != 1.0 || config.contrast_beta != 0 {
        plan.push(StageKind::Contrast);
    }
    plan.push(StageKind::FinalNormalize);
    plan
}

/// Run the configured stages over `image`, producing a new buffer of the
/// same shape. The input is never mutated.
///
/// Fails on an empty buffer, on a buffer that is not one 8-bit sample per
/// pixel, and on an even blur kernel size when the blur stage is selected.
pub fn apply_filters(
    image: &ImageBuffer,
    config: &ProcessingConfig,
) -> Result<ImageBuffer, PipelineError> {
    if image.is_empty() {
        return Err(PipelineError::EmptyInput);
    }
    if !image.is_gray8_2d() {
        return Err(PipelineError::UnsupportedLayout {
            len: image.data().len(),
            width: image.width(),
            height: image.height(),
        });
    }
    if config.gaussian_blur && config.blur_kernel_size > 0 && config.blur_kernel_size % 2 == 0 {
        return Err(PipelineError::EvenKernel {
            size: config.blur_kernel_size,
        });
    }

    let (w, h) = (image.width(), image.height());
    // Working copy seeded from the input; each stage yields a fresh buffer.
    let mut data = image.data().to_vec();

    for stage in stage_plan(config) {
        data = match stage {
            StageKind::Normalize | StageKind::FinalNormalize => stages::normalize_min_max(&data),
            StageKind::Gain => stages::apply_gain(&data, config.gain),
            StageKind::Denoise => stages::denoise_nlm(w, h, &data),
            StageKind::GaussianBlur => {
                stages::gaussian_blur(w, h, &data, config.blur_kernel_size as usize)
            }
            StageKind::Sharpen => stages::sharpen(w, h, &data, config.sharpen_amount, SHARPEN_SIGMA),
            StageKind::Contrast => {
                stages::apply_contrast(&data, config.contrast_alpha, config.contrast_beta)
            }
        };
    }

    Ok(ImageBuffer::from_raw(w, h, data))
}

#[derive(Debug)]
pub enum PipelineError {
    /// Zero-size pixel buffer.
    EmptyInput,

    /// Buffer is not one 8-bit sample per pixel (volumetric or multi-byte
    /// payloads are not filterable).
    UnsupportedLayout {
        len: usize,
        width: usize,
        height: usize,
    },

    /// Blur kernel side must be odd.
    EvenKernel { size: i32 },
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use PipelineError::*;
        match self {
            EmptyInput => write!(f, "empty frame: nothing to filter"),
            UnsupportedLayout { len, width, height } => write!(
                f,
                "unsupported sample layout: {} bytes for {}x{} 8-bit grayscale",
                len, width, height
            ),
            EvenKernel { size } => {
                write!(f, "blur kernel size must be odd, got {}", size)
            }
        }
    }
}

impl std::error::Error for PipelineError {}
