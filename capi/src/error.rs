//! Last-error reporting for the C boundary.
//!
//! Fallible operations surface as a sentinel return value (0 / false / null)
//! plus a single human-readable message retrievable per thread; no
//! structured error codes cross the boundary.

use std::cell::RefCell;
use std::ffi::{c_char, CString};
use std::fmt::Display;

thread_local! {
    static LAST_ERROR: RefCell<Option<CString>> = const { RefCell::new(None) };
}

/// Record `err` as the calling thread's last error.
pub fn set_last_error(err: impl Display) {
    let rendered = err.to_string();
    log::warn!("boundary error: {}", rendered);
    // CString rejects interior NULs; substitute so the message survives.
    let cstring = CString::new(rendered.clone())
        .unwrap_or_else(|_| CString::new(rendered.replace('\0', "?")).unwrap_or_default());
    LAST_ERROR.with(|slot| *slot.borrow_mut() = Some(cstring));
}

pub fn clear_last_error() {
    LAST_ERROR.with(|slot| *slot.borrow_mut() = None);
}

/// Pointer to the thread's last error message, or null when there is none.
/// Valid until the next fallible call on the same thread.
pub fn last_error_ptr() -> *const c_char {
    LAST_ERROR.with(|slot| {
        slot.borrow()
            .as_ref()
            .map_or(std::ptr::null(), |msg| msg.as_ptr())
    })
}
