//! Board pin assignments
//!
//! One function per supported board wiring, returning the full matrix
//! configuration. Pin numbers are RP2040 GPIOs; the address pins keep
//! the A, B, C order of the panel connector.

use heapless::Vec;
use phosphor_core::config::MAX_ADDR_PINS;
use phosphor_core::{LinePins, MatrixConfig};

/// Two chained 16x32 panels wired as a 64x16 smart-clock display
///
/// Double buffering is on: scrolling text and animations redraw every
/// frame and would shimmer badly on a single buffer.
pub fn smartclock_64x16() -> MatrixConfig {
    MatrixConfig {
        pins: LinePins {
            data: [2, 3, 6, 7, 8, 9],
            clock: 14,
            latch: 15,
            output_enable: 13,
            addr: addr_pins(&[26, 4, 27]),
        },
        panels: 2,
        height: 16,
        planes: MatrixConfig::DEFAULT_PLANES,
        double_buffer: true,
        base_interval_us: MatrixConfig::DEFAULT_BASE_INTERVAL_US,
    }
}

/// Single 32x32 panel (four address pins, 1:16 scan)
#[allow(dead_code)]
pub fn single_32x32() -> MatrixConfig {
    MatrixConfig {
        pins: LinePins {
            data: [2, 3, 6, 7, 8, 9],
            clock: 14,
            latch: 15,
            output_enable: 13,
            addr: addr_pins(&[26, 4, 27, 5]),
        },
        panels: 1,
        height: 32,
        planes: MatrixConfig::DEFAULT_PLANES,
        double_buffer: true,
        base_interval_us: MatrixConfig::DEFAULT_BASE_INTERVAL_US,
    }
}

fn addr_pins(pins: &[u8]) -> Vec<u8, MAX_ADDR_PINS> {
    let mut addr = Vec::new();
    for &pin in pins.iter().take(MAX_ADDR_PINS) {
        let _ = addr.push(pin);
    }
    addr
}
