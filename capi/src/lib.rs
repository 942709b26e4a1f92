//! ultra-capi
//!
//! C ABI boundary adapter over ultra-core for mobile/embedder bridges.
//! Resources that cross the boundary live in handle tables and are named by
//! opaque non-zero u64 ids; raw addresses never leave this crate. Every
//! handle has an explicit release function, and failing to call it is a
//! caller-side leak (documented per function), not a core defect.

mod error;
mod handles;

pub mod ffi;

pub use ffi::*;
