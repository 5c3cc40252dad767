//! Board-agnostic display engine for multiplexed RGB LED matrices
//!
//! This crate contains all driver logic that does not depend on specific
//! hardware implementations:
//!
//! - Hardware line-control trait (shift/latch/address/output-enable)
//! - Bit-plane framebuffer with single- and double-buffered modes
//! - Color encoding (3/4/8-bit channels, HSV, gamma lookup)
//! - Logical-to-physical pixel address mapping
//! - The interrupt-driven refresh state machine, modeled as an explicit
//!   `(row, plane)` cursor with one `step()` per timer tick so the whole
//!   scan-out can be tested on the host by simulating the timer
//!
//! The engine never touches a register itself; each `step()` emits one
//! chain row through a [`MatrixLines`] implementation and reports how long
//! the lit plane should dwell. Dwell doubles with plane significance,
//! which is what turns six on/off planes into 64 brightness levels
//! (binary-coded modulation).

#![no_std]
#![deny(unsafe_code)]

// Host-side unit tests record line activity in growable buffers.
#[cfg(test)]
extern crate std;

pub mod color;
pub mod config;
pub mod engine;
pub mod frame;
pub mod geometry;
#[cfg(feature = "graphics")]
pub mod graphics;
pub mod traits;

pub use color::Color;
pub use config::{LinePins, MatrixConfig};
pub use engine::{Matrix, RefreshStats, StepOutcome};
pub use geometry::{GeometryError, PanelGeometry};
pub use traits::MatrixLines;
