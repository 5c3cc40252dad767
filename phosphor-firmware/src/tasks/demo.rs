//! Demo animation task
//!
//! Sweeps a hue gradient across the canvas, redrawing into the back
//! buffer and swapping at the frame boundary. Exercises the HSV encoder
//! and double buffering end to end; replace with real screens when the
//! application layer lands.

use defmt::*;
use embassy_time::Timer;

use phosphor_core::Color;

use crate::display::{swap_buffers, with_matrix, SharedMatrix};

/// Hue advance per animation frame, in degrees
const HUE_STEP: i32 = 3;

#[embassy_executor::task]
pub async fn demo_task(matrix: &'static SharedMatrix) {
    info!("Demo task started");

    let (width, height) = with_matrix(matrix, |m| (m.width(), m.height()));
    let mut base_hue: i32 = 0;

    loop {
        // Paint one row per lock so refresh ticks slot in between rows.
        for y in 0..height {
            with_matrix(matrix, |m| {
                for x in 0..width {
                    let hue =
                        base_hue + (x as i32 * 360) / width as i32 + (y as i32 * 120) / height as i32;
                    m.set_pixel(x, y, Color::hsv(hue, 255, 255, true));
                }
            });
        }

        // Block until the refresh loop has taken the new frame.
        swap_buffers(matrix, true).await;

        base_hue = (base_hue + HUE_STEP) % 360;
        Timer::after_millis(20).await;
    }
}
