//! Matrix refresh tick task
//!
//! The timer-driven half of the display engine: one engine step per
//! wakeup, then re-arm with the dwell the step returned. Dwell grows
//! with plane significance, which is the whole brightness encoding -
//! this task must never insert extra delay of its own.

use defmt::*;
use embassy_time::Timer;
use portable_atomic::Ordering;

use phosphor_drivers::lines::GpioLines;
use phosphor_hal_rp2040::RpLine;

use crate::channels::{FRAME_COUNT, FRAME_SIGNAL};
use crate::display::{with_matrix, SharedMatrix};

#[embassy_executor::task]
pub async fn refresh_task(matrix: &'static SharedMatrix, mut lines: GpioLines<RpLine>) {
    info!("Refresh task started");

    loop {
        let outcome = with_matrix(matrix, |m| m.step(&mut lines));

        if outcome.frame_complete {
            let frames = FRAME_COUNT.fetch_add(1, Ordering::Relaxed).wrapping_add(1);
            FRAME_SIGNAL.signal(frames);
        }

        Timer::after_micros(outcome.dwell_us as u64).await;
    }
}
