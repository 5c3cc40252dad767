//! RP2040-specific HAL for the Phosphor matrix display engine
//!
//! This crate provides RP2040 implementations of the shared
//! `phosphor-hal` traits, plus RP2040-specific functionality:
//!
//! - GPIO output pins backed by embassy-rp (implements `phosphor_hal::OutputPin`)
//! - Dynamic pin allocation for config-driven line assignment

#![no_std]

pub mod gpio;
pub mod pins;

// Re-export key types at crate root for convenience
pub use gpio::RpLine;
pub use pins::{PinBank, PinError};
