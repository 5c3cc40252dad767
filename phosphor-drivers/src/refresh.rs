//! Blocking one-shot refresh
//!
//! Platforms without a usable timer interrupt can still show a frame by
//! running the whole scan inline, busy-waiting each dwell through an
//! `embedded-hal` delay. The interrupt-driven path in the firmware
//! should be preferred wherever it exists; this repaints once and
//! returns, so the panel fades unless it is called continuously.

use embedded_hal::delay::DelayNs;

use phosphor_core::{Matrix, MatrixLines, StepOutcome};

/// Emit exactly one full frame, blocking between ticks
///
/// Steps the engine `scan_rows * planes` times from its current cursor
/// position and honors every BCM dwell with a blocking delay. Returns
/// the final step's outcome; its `frame_complete` flag is true whenever
/// the cursor started at the frame origin, which also makes this a
/// commit point for a pending buffer swap.
pub fn refresh_once<L, D>(matrix: &mut Matrix, lines: &mut L, delay: &mut D) -> StepOutcome
where
    L: MatrixLines,
    D: DelayNs,
{
    let mut outcome = StepOutcome {
        dwell_us: 0,
        frame_complete: false,
    };
    for _ in 0..matrix.geometry().ticks_per_frame() {
        outcome = matrix.step(lines);
        delay.delay_us(outcome.dwell_us);
    }
    outcome
}
