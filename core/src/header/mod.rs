//! headers for the .ultra frame format.
//!
//! - Fixed 32-byte little-endian header, packed, no padding.
//! - Decode never rejects field values; validation is an explicit second
//!   step so callers can distinguish truncation from a wrong format.

pub mod decode;
pub mod encode;
pub mod types;

pub use decode::*;
pub use encode::*;
pub use types::*;
