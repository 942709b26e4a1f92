//! ffi.rs
//!
//! The exported C surface. Mirrors the mobile bridge contract:
//! init/release an SDK handle, process a raw record into an opaque result
//! handle, copy the result out as displayable gray8, query record metadata,
//! and report the SDK version. All handles are opaque table ids; 0 is never
//! a valid handle.

use std::ffi::{c_char, CString};
use std::sync::OnceLock;

use ultra_core::frame::Frame;
use ultra_core::image::ImageBuffer;
use ultra_core::pipeline::ProcessingConfig;
use ultra_core::UltraSdk;

use crate::error::{clear_last_error, last_error_ptr, set_last_error};
use crate::handles::HandleTable;

fn sdks() -> &'static HandleTable<UltraSdk> {
    static SDKS: OnceLock<HandleTable<UltraSdk>> = OnceLock::new();
    SDKS.get_or_init(HandleTable::new)
}

fn results() -> &'static HandleTable<ImageBuffer> {
    static RESULTS: OnceLock<HandleTable<ImageBuffer>> = OnceLock::new();
    RESULTS.get_or_init(HandleTable::new)
}

/// View caller bytes as a slice. Null data with a non-zero length is an
/// error; null with length zero is an empty record (which the decoder then
/// rejects with its own message).
///
/// # Safety
/// `data` must point to `len` readable bytes when non-null.
unsafe fn record_slice<'a>(data: *const u8, len: usize) -> Option<&'a [u8]> {
    if data.is_null() {
        if len == 0 {
            return Some(&[]);
        }
        set_last_error("null record pointer with non-zero length");
        return None;
    }
    // SAFETY: non-null and readable for `len` bytes per the caller contract.
    Some(unsafe { std::slice::from_raw_parts(data, len) })
}

/// Create an SDK instance and return its handle (never 0).
///
/// The handle must be released with `ultra_release`; leaking it leaks the
/// instance.
#[no_mangle]
pub extern "C" fn ultra_init() -> u64 {
    clear_last_error();
    sdks().insert(UltraSdk::new())
}

/// Release an SDK handle. Unknown or already-released handles are ignored.
#[no_mangle]
pub extern "C" fn ultra_release(handle: u64) {
    sdks().remove(handle);
}

/// Decode a raw .ultra record and run the filter pipeline over it.
///
/// `normalize`, `denoise` and `gain` override the corresponding fields of
/// the default preset, matching the bridge contract. Returns a result
/// handle (never 0 on success) that must be freed with
/// `ultra_release_result`, or 0 with the message in `ultra_last_error`.
///
/// # Safety
/// `data` must point to `len` readable bytes.
#[no_mangle]
pub unsafe extern "C" fn ultra_process_frame(
    handle: u64,
    data: *const u8,
    len: usize,
    normalize: bool,
    denoise: bool,
    gain: f32,
) -> u64 {
    clear_last_error();
    let Some(record) = (unsafe { record_slice(data, len) }) else {
        return 0;
    };

    let config = ProcessingConfig {
        normalize,
        denoise,
        gain,
        ..ProcessingConfig::default()
    };

    // Clone the instance out of the table so decode + filtering run without
    // holding the table lock; unrelated sessions stay unserialized.
    let Some(sdk) = sdks().with(handle, UltraSdk::clone) else {
        set_last_error(format!("invalid SDK handle: {}", handle));
        return 0;
    };

    let processed = sdk
        .load_frame_from_bytes(record)
        .and_then(|frame: Frame| sdk.apply_filters(&frame.image, &config));

    match processed {
        Ok(image) => results().insert(image),
        Err(e) => {
            set_last_error(e);
            0
        }
    }
}

/// Width of a processed result in pixels, or 0 for an unknown handle.
#[no_mangle]
pub extern "C" fn ultra_result_width(result: u64) -> u32 {
    results().with(result, |img| img.width() as u32).unwrap_or(0)
}

/// Height of a processed result in pixels, or 0 for an unknown handle.
#[no_mangle]
pub extern "C" fn ultra_result_height(result: u64) -> u32 {
    results().with(result, |img| img.height() as u32).unwrap_or(0)
}

/// Copy a processed result into a caller buffer as row-major gray8.
///
/// `out_len` must be at least width * height. Returns false (with a
/// message) on an unknown handle or an undersized buffer.
///
/// # Safety
/// `out` must point to `out_len` writable bytes.
#[no_mangle]
pub unsafe extern "C" fn ultra_result_copy_gray8(
    result: u64,
    out: *mut u8,
    out_len: usize,
) -> bool {
    clear_last_error();
    if out.is_null() {
        set_last_error("null output pointer");
        return false;
    }

    let copied = results().with(result, |img| {
        let needed = img.data().len();
        if out_len < needed {
            set_last_error(format!(
                "output buffer too small: {} < {}",
                out_len, needed
            ));
            return false;
        }
        // SAFETY: non-null and writable for `out_len >= needed` bytes.
        let dst = unsafe { std::slice::from_raw_parts_mut(out, needed) };
        dst.copy_from_slice(img.data());
        true
    });

    match copied {
        Some(ok) => ok,
        None => {
            set_last_error(format!("invalid result handle: {}", result));
            false
        }
    }
}

/// Release a result handle. Unknown or already-released handles are
/// ignored, so double-release is harmless.
#[no_mangle]
pub extern "C" fn ultra_release_result(result: u64) {
    results().remove(result);
}

/// Extract (frame_number, timestamp_us) from a raw record without copying
/// the payload. Returns false with a message on failure.
///
/// # Safety
/// `data` must point to `len` readable bytes; `frame_number` and
/// `timestamp_us` must be valid for writes.
#[no_mangle]
pub unsafe extern "C" fn ultra_frame_metadata(
    handle: u64,
    data: *const u8,
    len: usize,
    frame_number: *mut u32,
    timestamp_us: *mut u64,
) -> bool {
    clear_last_error();
    if frame_number.is_null() || timestamp_us.is_null() {
        set_last_error("null metadata output pointer");
        return false;
    }
    let Some(record) = (unsafe { record_slice(data, len) }) else {
        return false;
    };

    let Some(sdk) = sdks().with(handle, UltraSdk::clone) else {
        set_last_error(format!("invalid SDK handle: {}", handle));
        return false;
    };

    match sdk.frame_metadata(record) {
        Ok((number, ts)) => {
            // SAFETY: both pointers checked non-null above and valid for
            // writes per the caller contract.
            unsafe {
                frame_number.write(number);
                timestamp_us.write(ts);
            }
            true
        }
        Err(e) => {
            set_last_error(e);
            false
        }
    }
}

/// SDK version as a NUL-terminated string with static lifetime.
#[no_mangle]
pub extern "C" fn ultra_version() -> *const c_char {
    static VERSION: OnceLock<CString> = OnceLock::new();
    VERSION
        .get_or_init(|| CString::new(UltraSdk::version()).unwrap_or_default())
        .as_ptr()
}

/// The calling thread's last error message, or null when the previous call
/// succeeded. The pointer stays valid until the next fallible call on the
/// same thread.
#[no_mangle]
pub extern "C" fn ultra_last_error() -> *const c_char {
    last_error_ptr()
}
