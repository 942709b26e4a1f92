//! ultra-core
//!
//! Pure Rust codec + processing pipeline for .ultra grayscale sensor
//! frames. No FFI, no async runtime; concurrency belongs to the caller.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;

// Codec layers
pub mod checksum;
pub mod header;
pub mod image;

pub mod frame;
pub mod pipeline;

// Facade
pub mod inference;
pub mod sdk;

pub use sdk::UltraSdk;
pub use types::UltraError;
