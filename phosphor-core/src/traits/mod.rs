//! Hardware abstraction traits
//!
//! The engine drives the panel exclusively through these traits, so the
//! refresh logic can be exercised on the host with a recording
//! implementation in place of real pins.

pub mod lines;

pub use lines::MatrixLines;
