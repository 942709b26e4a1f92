//! pipeline/config.rs
//! Processing configuration value record.

use serde::{Deserialize, Serialize};

/// Toggles and magnitudes for each filter stage.
///
/// A plain value record with no identity; orchestration layers may persist
/// it as JSON and ship presets. Defaults are the "minimal processing"
/// preset: normalize + denoise on, everything else off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Min-max intensity normalization.
    pub normalize: bool,
    /// Non-local-means speckle denoising (fixed internal constants).
    pub denoise: bool,
    /// Intensity gain multiplier; expected 0.5..2.0, not hard-enforced.
    pub gain: f32,

    /// Separable Gaussian smoothing.
    pub gaussian_blur: bool,
    /// Blur kernel side; must be odd when the blur stage runs.
    pub blur_kernel_size: i32,

    /// Unsharp-mask edge enhancement.
    pub sharpen: bool,
    /// Sharpening strength.
    pub sharpen_amount: f32,

    /// Contrast multiplier; 1.0 = no change.
    pub contrast_alpha: f32,
    /// Brightness offset.
    pub contrast_beta: i32,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            normalize: true,
            denoise: true,
            gain: 1.0,
            gaussian_blur: false,
            blur_kernel_size: 3,
            sharpen: false,
            sharpen_amount: 1.0,
            contrast_alpha: 1.0,
            contrast_beta: 0,
        }
    }
}

impl ProcessingConfig {
    /// Identity-leaning preset: every optional stage off. The pipeline's
    /// unconditional final normalize still runs.
    pub fn passthrough() -> Self {
        Self {
            normalize: false,
            denoise: false,
            ..Default::default()
        }
    }
}
