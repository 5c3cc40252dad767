//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in phosphor-core on top of generic hardware abstractions:
//!
//! - Bit-banged HUB75 line control over `phosphor_hal::OutputPin`
//! - Blocking one-shot refresh for targets without a timer interrupt

#![no_std]
#![deny(unsafe_code)]

pub mod lines;
pub mod refresh;
