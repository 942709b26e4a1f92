/// Magic number for the .ultra frame format.
/// 0x554C5452 = "ULTR" read as a little-endian u32 field.
// - Stored as `u32` because the wire field is a 32-bit integer, not a byte
//   string; the on-disk bytes are its little-endian encoding.
pub const MAGIC_ULTRA: u32 = 0x554C_5452;

/// Fixed header size in bytes.
pub const HEADER_LEN: usize = 32;

/// Offset of the CRC field inside the header.
pub const CRC_OFFSET: usize = 28;

/// Offset of the first payload byte; CRC-32 coverage starts here.
pub const PAYLOAD_OFFSET: usize = 32;

/// SDK semantic version reported by the facade.
pub const SDK_VERSION: &str = "1.0.0";

/// Default acquisition profile (2D, 8-bit grayscale).
pub const DEFAULT_WIDTH: u16 = 128;
pub const DEFAULT_HEIGHT: u16 = 128;
pub const DEFAULT_DEPTH: u16 = 1;
pub const DEFAULT_BYTES_PER_VOXEL: u16 = 1;

/// Non-local-means denoise constants (fixed, not exposed via config).
pub mod denoise {
    /// Filter strength `h`.
    pub const FILTER_STRENGTH: f32 = 10.0;
    /// Patch (template) window side, odd.
    pub const TEMPLATE_WINDOW: usize = 7;
    /// Search window side, odd.
    pub const SEARCH_WINDOW: usize = 21;
}

/// Fixed Gaussian sigma used by the unsharp-mask sharpen stage.
pub const SHARPEN_SIGMA: f32 = 3.0;

/// Sample-depth identifiers (mirrored in the conversion registry).
pub mod depth_ids {
    pub const U8: u16 = 0x0001;
    pub const U16: u16 = 0x0002;
    pub const F32: u16 = 0x0003;
}
