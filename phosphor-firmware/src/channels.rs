//! Inter-task signals
//!
//! The drawing side and the refresh tick share nothing but the engine
//! mutex and the frame signal defined here; everything is safe against
//! preemption by construction.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use portable_atomic::AtomicU32;

/// Raised by the refresh task at every frame boundary
///
/// Payload is the frame count at the boundary. Blocking buffer swaps
/// wait on this and re-check the engine's pending flag.
pub static FRAME_SIGNAL: Signal<CriticalSectionRawMutex, u32> = Signal::new();

/// Total frames emitted since boot
pub static FRAME_COUNT: AtomicU32 = AtomicU32::new(0);
