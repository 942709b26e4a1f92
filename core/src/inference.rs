//! AI-inference hook.
//!
//! No backend ships today. "Not available" is modeled as a distinct result
//! state rather than an error, so wiring in a real backend later is a new
//! variant, not a breaking change for callers matching on the outcome.

use crate::image::ImageBuffer;

/// Outcome of an inference request.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum InferenceOutcome {
    /// No inference backend is compiled in or configured.
    NotAvailable { reason: String },

    /// A backend produced an output buffer.
    Processed(ImageBuffer),
}

impl InferenceOutcome {
    pub fn is_available(&self) -> bool {
        !matches!(self, InferenceOutcome::NotAvailable { .. })
    }
}
