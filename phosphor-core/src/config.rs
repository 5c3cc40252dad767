//! Matrix hardware configuration types
//!
//! These types carry the wiring and geometry the driver is constructed
//! from. Pin numbers are opaque to this crate; the firmware resolves them
//! against its GPIO bank. Validation happens in
//! [`PanelGeometry::from_config`](crate::geometry::PanelGeometry::from_config).

use heapless::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Columns per physical panel module
pub const PANEL_COLS: u16 = 32;

/// Maximum chained panels in one logical canvas
pub const MAX_PANELS: u8 = 8;

/// Maximum row-address pins (4 pins = 1:16 scan)
pub const MAX_ADDR_PINS: usize = 4;

/// GPIO assignment for one HUB75-style line set
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LinePins {
    /// Data line pins in shift order: R1, G1, B1, R2, G2, B2
    pub data: [u8; 6],
    /// Serial clock pin (one rising edge per shifted bit group)
    pub clock: u8,
    /// Latch pin (moves shifted data into the output registers)
    pub latch: u8,
    /// Output-enable pin (active-low at the connector)
    pub output_enable: u8,
    /// Row-address pins, least significant first (2-4 pins)
    pub addr: Vec<u8, MAX_ADDR_PINS>,
}

/// Complete matrix driver configuration
///
/// Fixed at construction; the driver never resizes or rewires itself
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MatrixConfig {
    /// Line wiring
    pub pins: LinePins,
    /// Number of chained panels (widens the logical canvas)
    pub panels: u8,
    /// Panel height in pixels (16 or 32)
    pub height: u8,
    /// Bit planes per channel; 2^planes brightness levels
    pub planes: u8,
    /// Allocate two framebuffers for tear-free animation
    pub double_buffer: bool,
    /// Dwell time of the least significant plane in microseconds
    pub base_interval_us: u32,
}

impl MatrixConfig {
    /// Default plane count (64 brightness levels per channel)
    pub const DEFAULT_PLANES: u8 = 6;

    /// Default least-significant-plane dwell
    pub const DEFAULT_BASE_INTERVAL_US: u32 = 30;

    /// Single 16-row panel with default depth and timing
    pub fn new(pins: LinePins) -> Self {
        Self {
            pins,
            panels: 1,
            height: 16,
            planes: Self::DEFAULT_PLANES,
            double_buffer: false,
            base_interval_us: Self::DEFAULT_BASE_INTERVAL_US,
        }
    }
}
