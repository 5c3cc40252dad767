//! Matrix line-control trait
//!
//! A HUB75-style panel is a long shift register with row-address,
//! latch and output-enable sidebands. One refresh tick walks this trait
//! in a fixed order: blank, shift a chain row, latch, address, unblank.
//! Implementations own their pins (no module-scope register state) and
//! are infallible: a GPIO write cannot fail at runtime, and the refresh
//! loop has no error path by design.

/// Control and data lines of one matrix chain
pub trait MatrixLines {
    /// Present six data bits on the color lines
    ///
    /// Bit assignment, LSB first: R1, G1, B1 (upper half row), R2, G2,
    /// B2 (lower half row). Bits 6 and 7 are ignored.
    fn set_rgb(&mut self, bits: u8);

    /// Clock the presented bits into the shift register (one pulse)
    fn pulse_clock(&mut self);

    /// Latch the shifted chain into the output registers (one pulse)
    fn pulse_latch(&mut self);

    /// Drive the row-address lines to the given scan row
    fn set_address(&mut self, scan_row: u8);

    /// Gate the LED outputs
    ///
    /// `false` blanks the panel; the engine blanks before every shift so
    /// the previous plane cannot ghost into the row being loaded.
    fn set_output_enabled(&mut self, enabled: bool);
}
