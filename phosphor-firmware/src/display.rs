//! Shared matrix handle and the buffer-swap service
//!
//! The engine lives behind a critical-section mutex: the refresh tick
//! and the drawing code both take it for short, bounded sections. Keep
//! drawing closures small (a row or two at a time) so refresh ticks are
//! not starved into visible flicker.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;

use phosphor_core::Matrix;

use crate::channels::FRAME_SIGNAL;

/// Matrix engine shared between the drawing context and the refresh tick
pub type SharedMatrix = Mutex<CriticalSectionRawMutex, RefCell<Matrix>>;

/// Run a closure against the engine inside the critical section
pub fn with_matrix<R>(matrix: &SharedMatrix, f: impl FnOnce(&mut Matrix) -> R) -> R {
    matrix.lock(|cell| f(&mut cell.borrow_mut()))
}

/// Exchange the writable and active buffers
///
/// The exchange itself happens on the refresh tick that wraps the plane
/// counter; `blocking = true` suspends until that tick has run, after
/// which the previous frame's buffer is writable again. Non-blocking
/// callers must poll the pending flag before reusing the back buffer.
/// In single-buffer mode the request is a no-op and this returns
/// immediately.
///
/// There is deliberately no timeout: the refresh task re-arms itself
/// unconditionally, so the frame boundary always arrives.
pub async fn swap_buffers(matrix: &SharedMatrix, blocking: bool) {
    with_matrix(matrix, |m| m.request_swap());
    if !blocking {
        return;
    }
    while with_matrix(matrix, |m| m.swap_pending()) {
        FRAME_SIGNAL.wait().await;
    }
}
