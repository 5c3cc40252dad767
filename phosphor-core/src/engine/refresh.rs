//! Interrupt-driven refresh state machine
//!
//! The scan-out advances one `(row, plane)` pair per timer tick instead
//! of running a blocking loop: the timer callback calls [`Matrix::step`]
//! once, re-arms itself with the returned dwell, and nothing else. That
//! makes the whole protocol testable off-target by driving `step()` from
//! a plain loop.
//!
//! Dwell doubles with plane significance (binary-coded modulation):
//! plane 0 is lit for one base interval, plane p for `2^p` of them, and
//! visual integration over a full cycle reconstructs the intended
//! brightness. A timing overrun therefore shows up as flicker, never as
//! an error; the step has no failure path.

use crate::traits::MatrixLines;

/// Scan position, advanced once per tick
///
/// Rows cycle within a plane; the plane advances on row wrap. The plane
/// wrap is the frame boundary and the only point where a pending buffer
/// swap may commit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(super) struct RefreshCursor {
    pub(super) row: u8,
    pub(super) plane: u8,
}

/// Result of one refresh tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StepOutcome {
    /// How long the just-lit plane must dwell before the next tick
    pub dwell_us: u32,
    /// The plane counter wrapped: a full frame has been emitted
    pub frame_complete: bool,
}

/// Snapshot of refresh progress, for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RefreshStats {
    /// Frames emitted since construction (wrapping)
    pub frames: u32,
    /// Scan row the next tick will emit
    pub scan_row: u8,
    /// Plane the next tick will emit
    pub plane: u8,
}

impl super::Matrix {
    /// Emit one `(row, plane)` pair to the panel
    ///
    /// Intended to run in interrupt context: no waiting, no allocation,
    /// no error path. The caller re-arms its timer with the returned
    /// dwell, which realizes the brightness encoding.
    pub fn step<L: MatrixLines>(&mut self, lines: &mut L) -> StepOutcome {
        let RefreshCursor { row, plane } = self.cursor;

        // Blank while the shift registers load, or the previous plane
        // ghosts across the row being replaced.
        lines.set_output_enabled(false);

        let span = self.geometry.row_span(row, plane);
        let chain = &self.buffers[self.active as usize].bytes()[span];
        for &bits in chain {
            lines.set_rgb(bits);
            lines.pulse_clock();
        }
        lines.pulse_latch();
        lines.set_address(row);
        lines.set_output_enabled(true);

        let dwell_us = self.base_interval_us << plane;
        let frame_complete = self.advance();
        StepOutcome {
            dwell_us,
            frame_complete,
        }
    }

    /// Advance the cursor; returns true when the plane counter wraps
    fn advance(&mut self) -> bool {
        self.cursor.row += 1;
        if self.cursor.row < self.geometry.scan_rows() {
            return false;
        }
        self.cursor.row = 0;
        self.cursor.plane += 1;
        if self.cursor.plane < self.geometry.planes() {
            return false;
        }
        self.cursor.plane = 0;
        self.frames = self.frames.wrapping_add(1);
        // Sole safe point to retarget the scan-out: no row of the old
        // frame is in flight here.
        if self.swap_pending {
            core::mem::swap(&mut self.active, &mut self.back);
            self.swap_pending = false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::test_config;
    use super::*;
    use crate::color::Color;
    use crate::engine::Matrix;

    /// Recorded line operations, one entry per trait call
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Op {
        Rgb(u8),
        Clock,
        Latch,
        Address(u8),
        Output(bool),
    }

    /// Recording implementation standing in for real pins
    #[derive(Default)]
    struct RecordingLines {
        ops: std::vec::Vec<Op>,
    }

    impl MatrixLines for RecordingLines {
        fn set_rgb(&mut self, bits: u8) {
            self.ops.push(Op::Rgb(bits));
        }
        fn pulse_clock(&mut self) {
            self.ops.push(Op::Clock);
        }
        fn pulse_latch(&mut self) {
            self.ops.push(Op::Latch);
        }
        fn set_address(&mut self, scan_row: u8) {
            self.ops.push(Op::Address(scan_row));
        }
        fn set_output_enabled(&mut self, enabled: bool) {
            self.ops.push(Op::Output(enabled));
        }
    }

    #[test]
    fn test_step_protocol_order() {
        let mut m = Matrix::new(&test_config(false)).unwrap();
        let mut lines = RecordingLines::default();
        m.step(&mut lines);

        let chain_len = m.geometry().chain_len() as usize;
        // Blank, shift the whole chain, latch, address, unblank.
        assert_eq!(lines.ops[0], Op::Output(false));
        for pair in lines.ops[1..1 + chain_len * 2].chunks(2) {
            assert!(matches!(pair[0], Op::Rgb(_)));
            assert_eq!(pair[1], Op::Clock);
        }
        assert_eq!(
            &lines.ops[1 + chain_len * 2..],
            &[Op::Latch, Op::Address(0), Op::Output(true)]
        );
    }

    #[test]
    fn test_rows_then_planes() {
        let mut m = Matrix::new(&test_config(false)).unwrap();
        let mut lines = RecordingLines::default();
        let scan_rows = m.geometry().scan_rows() as u32;
        let planes = m.geometry().planes() as u32;

        let mut addresses = std::vec::Vec::new();
        for _ in 0..m.geometry().ticks_per_frame() {
            m.step(&mut lines);
        }
        for op in &lines.ops {
            if let Op::Address(row) = op {
                addresses.push(*row);
            }
        }
        // Every scan row appears once per plane, in order.
        assert_eq!(addresses.len() as u32, scan_rows * planes);
        for (i, &row) in addresses.iter().enumerate() {
            assert_eq!(row as u32, i as u32 % scan_rows);
        }
    }

    #[test]
    fn test_bcm_dwell_doubles_per_plane() {
        let mut m = Matrix::new(&test_config(false)).unwrap();
        let mut lines = RecordingLines::default();
        let scan_rows = m.geometry().scan_rows() as usize;

        let mut dwells = std::vec::Vec::new();
        for _ in 0..m.geometry().ticks_per_frame() {
            dwells.push(m.step(&mut lines).dwell_us);
        }
        // Constant within a plane, exactly 2:1 between adjacent planes.
        for plane_dwells in dwells.chunks(scan_rows) {
            assert!(plane_dwells.iter().all(|&d| d == plane_dwells[0]));
        }
        for pair in dwells.chunks(scan_rows).collect::<std::vec::Vec<_>>().windows(2) {
            assert_eq!(pair[1][0], pair[0][0] * 2);
        }
        assert_eq!(dwells[0], 30);
    }

    #[test]
    fn test_frame_complete_cadence() {
        let mut m = Matrix::new(&test_config(false)).unwrap();
        let mut lines = RecordingLines::default();
        let ticks = m.geometry().ticks_per_frame();

        for tick in 1..=ticks * 3 {
            let outcome = m.step(&mut lines);
            assert_eq!(outcome.frame_complete, tick % ticks == 0);
        }
        assert_eq!(m.stats().frames, 3);
    }

    #[test]
    fn test_swap_commits_only_at_frame_boundary() {
        let mut m = Matrix::new(&test_config(true)).unwrap();
        let mut lines = RecordingLines::default();

        m.set_pixel(0, 0, Color::WHITE);
        m.request_swap();

        // Mid-frame ticks leave the request pending.
        for _ in 0..m.geometry().ticks_per_frame() - 1 {
            assert!(!m.step(&mut lines).frame_complete);
            assert!(m.swap_pending());
        }
        // The wrapping tick commits it.
        assert!(m.step(&mut lines).frame_complete);
        assert!(!m.swap_pending());
    }

    #[test]
    fn test_swap_exchanges_roles() {
        let mut m = Matrix::new(&test_config(true)).unwrap();
        let mut lines = RecordingLines::default();

        // Frame A goes to the writable buffer, then swaps in.
        m.set_pixel(0, 0, Color::WHITE);
        m.request_swap();
        for _ in 0..m.geometry().ticks_per_frame() {
            m.step(&mut lines);
        }

        // The previously active buffer is now writable and still dark.
        assert_eq!(m.pixel(0, 0), Some(Color::BLACK));

        // The scan-out now emits frame A: plane 0, row 0 carries the
        // white pixel's R1/G1/B1 bits in the first chain byte.
        lines.ops.clear();
        m.step(&mut lines);
        assert_eq!(lines.ops[1], Op::Rgb(0b111));
    }

    #[test]
    fn test_unswapped_back_buffer_not_scanned() {
        let mut m = Matrix::new(&test_config(true)).unwrap();
        let mut lines = RecordingLines::default();

        // Drawn but never swapped: scan-out must stay dark.
        m.set_pixel(0, 0, Color::WHITE);
        for _ in 0..m.geometry().ticks_per_frame() {
            m.step(&mut lines);
        }
        assert!(lines
            .ops
            .iter()
            .all(|op| !matches!(op, Op::Rgb(bits) if *bits != 0)));
    }

    #[test]
    fn test_single_buffer_scan_sees_draws() {
        let mut m = Matrix::new(&test_config(false)).unwrap();
        let mut lines = RecordingLines::default();

        m.set_pixel(0, 0, Color::WHITE);
        m.step(&mut lines);
        assert_eq!(lines.ops[1], Op::Rgb(0b111));
    }

    #[test]
    fn test_double_swap_returns_to_first_buffer() {
        let mut m = Matrix::new(&test_config(true)).unwrap();
        let mut lines = RecordingLines::default();

        m.set_pixel(1, 1, Color::WHITE);
        m.request_swap();
        for _ in 0..m.geometry().ticks_per_frame() {
            m.step(&mut lines);
        }
        m.request_swap();
        for _ in 0..m.geometry().ticks_per_frame() {
            m.step(&mut lines);
        }
        // Two swaps later the original writable buffer is back.
        assert_eq!(m.pixel(1, 1), Some(Color::WHITE));
    }
}
