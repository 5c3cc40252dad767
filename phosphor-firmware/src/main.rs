//! Phosphor - RGB Matrix Display Firmware
//!
//! Main firmware binary for RP2040-based boards driving HUB75-style
//! multiplexed LED panels. Wires the board pinout to the display engine,
//! then hands the panel to the interrupt-driven refresh task and the
//! demo renderer.

#![no_std]
#![no_main]

use core::cell::RefCell;

use defmt::*;
use embassy_executor::Spawner;
use embassy_sync::blocking_mutex::Mutex;
use embassy_time::{Delay, Duration, Timer};
use portable_atomic::Ordering;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use phosphor_core::{LinePins, Matrix};
use phosphor_drivers::lines::GpioLines;
use phosphor_drivers::refresh::refresh_once;
use phosphor_hal_rp2040::pins::PinBank;
use phosphor_hal_rp2040::RpLine;

use crate::channels::FRAME_COUNT;
use crate::display::SharedMatrix;

mod boards;
mod channels;
mod display;
mod tasks;

static MATRIX: StaticCell<SharedMatrix> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Phosphor firmware starting...");

    let p = embassy_rp::init(Default::default());
    let config = boards::smartclock_64x16();

    // Resolve the board pinout; a bad pin number or a double-assigned
    // GPIO is a wiring-configuration error and fatal here.
    let mut bank = PinBank::new(p);
    let mut lines = build_lines(&mut bank, &config.pins);

    // Geometry validation is equally fatal: the refresh loop cannot run
    // on top of a bad configuration.
    let mut matrix = unwrap!(Matrix::new(&config));
    info!(
        "Matrix ready: {}x{}, {} planes, {} ticks/frame, double_buffer={}",
        matrix.width(),
        matrix.height(),
        matrix.geometry().planes(),
        matrix.geometry().ticks_per_frame(),
        matrix.is_double_buffered()
    );

    // Scan one frame inline before the timer path takes over, so a
    // miswired connector shows up at boot instead of as a silently dark
    // panel later.
    refresh_once(&mut matrix, &mut lines, &mut Delay);

    let matrix: &'static SharedMatrix = MATRIX.init(Mutex::new(RefCell::new(matrix)));

    unwrap!(spawner.spawn(tasks::refresh_task(matrix, lines)));
    unwrap!(spawner.spawn(tasks::demo_task(matrix)));

    // Periodic refresh statistics
    let mut last_frames = 0u32;
    loop {
        Timer::after(Duration::from_secs(10)).await;
        let frames = FRAME_COUNT.load(Ordering::Relaxed);
        let stats = display::with_matrix(matrix, |m| m.stats());
        info!(
            "refresh: {} frames total, {} fps, cursor row {} plane {}",
            stats.frames,
            frames.wrapping_sub(last_frames) / 10,
            stats.scan_row,
            stats.plane
        );
        last_frames = frames;
    }
}

/// Claim the matrix connector pins from the bank
fn build_lines(bank: &mut PinBank, pins: &LinePins) -> GpioLines<RpLine> {
    let data = pins.data.map(|pin| unwrap!(RpLine::from_bank(bank, pin)));
    let clock = unwrap!(RpLine::from_bank(bank, pins.clock));
    let latch = unwrap!(RpLine::from_bank(bank, pins.latch));
    let output_enable = unwrap!(RpLine::from_bank(bank, pins.output_enable));

    let mut addr = heapless::Vec::new();
    for &pin in pins.addr.iter() {
        let _ = addr.push(unwrap!(RpLine::from_bank(bank, pin)));
    }

    GpioLines::new(data, clock, latch, output_enable, addr)
}
