//! Matrix display engine
//!
//! Owns the framebuffer(s) and the refresh cursor, and is the single
//! synchronization point between the drawing context and the refresh
//! tick. Drawing operations always touch the writable buffer; the
//! refresh step in [`refresh`] only ever reads the active one. In
//! double-buffer mode the two are disjoint, so a draw can never be
//! observed mid-write by the scan-out. In single-buffer mode the roles
//! coincide and visible tearing is the accepted tradeoff.

mod refresh;

pub use refresh::{RefreshStats, StepOutcome};

use heapless::Vec;

use crate::color::Color;
use crate::config::MatrixConfig;
use crate::frame::FrameBuffer;
use crate::geometry::{GeometryError, PanelGeometry};

use refresh::RefreshCursor;

/// Multiplexed RGB matrix engine
///
/// Constructed once from a validated configuration; buffers live for the
/// engine's entire lifetime and the geometry never changes afterwards.
pub struct Matrix {
    geometry: PanelGeometry,
    /// One buffer in single-buffer mode, two in double-buffer mode
    buffers: Vec<FrameBuffer, 2>,
    /// Index of the buffer the refresh step scans out
    active: u8,
    /// Index of the buffer drawing operations write into
    back: u8,
    /// A role exchange was requested and awaits the frame boundary
    swap_pending: bool,
    cursor: RefreshCursor,
    base_interval_us: u32,
    frames: u32,
}

impl Matrix {
    /// Build an engine from a configuration
    ///
    /// Fails only on invalid geometry; a failed construction must abort
    /// initialization, since the refresh loop cannot run on top of it.
    pub fn new(config: &MatrixConfig) -> Result<Self, GeometryError> {
        let geometry = PanelGeometry::from_config(config)?;
        let mut buffers = Vec::new();
        let _ = buffers.push(FrameBuffer::new(&geometry)?);
        if config.double_buffer {
            let _ = buffers.push(FrameBuffer::new(&geometry)?);
        }
        // Scan-out starts on buffer 0; drawing targets the other buffer
        // when there is one.
        let back = buffers.len() as u8 - 1;
        Ok(Self {
            geometry,
            buffers,
            active: 0,
            back,
            swap_pending: false,
            cursor: RefreshCursor::default(),
            base_interval_us: config.base_interval_us,
            frames: 0,
        })
    }

    /// Logical canvas width in pixels
    pub fn width(&self) -> u16 {
        self.geometry.width()
    }

    /// Logical canvas height in pixels
    pub fn height(&self) -> u16 {
        self.geometry.height()
    }

    /// The validated scan geometry
    pub fn geometry(&self) -> &PanelGeometry {
        &self.geometry
    }

    /// True when two buffers were allocated
    pub fn is_double_buffered(&self) -> bool {
        self.buffers.len() == 2
    }

    /// Write one pixel into the writable buffer
    ///
    /// Out-of-range coordinates are silently ignored: a display driver
    /// must never take the host application down over a cosmetic
    /// out-of-bounds write.
    pub fn set_pixel(&mut self, x: u16, y: u16, color: Color) {
        let Some(slot) = self.geometry.locate(x, y) else {
            return;
        };
        let levels = color.levels(self.geometry.planes());
        let mask = 0b111 << slot.bit_base;
        for plane in 0..self.geometry.planes() {
            let bits = plane_bits(levels, plane);
            let offset = self
                .geometry
                .offset(slot.scan_row, plane, slot.chain_col);
            let byte = &mut self.buffers[self.back as usize].bytes_mut()[offset];
            *byte = (*byte & !mask) | (bits << slot.bit_base);
        }
    }

    /// Read one pixel back from the writable buffer
    ///
    /// Returns `None` outside the canvas. The packed color is
    /// reconstructed from the bit planes, so a read returns exactly what
    /// the channel depth of the write preserved.
    pub fn pixel(&self, x: u16, y: u16) -> Option<Color> {
        let slot = self.geometry.locate(x, y)?;
        let buf = &self.buffers[self.back as usize];
        let mut levels = [0u8; 3];
        for plane in 0..self.geometry.planes() {
            let offset = self
                .geometry
                .offset(slot.scan_row, plane, slot.chain_col);
            let bits = buf.bytes()[offset] >> slot.bit_base;
            for (channel, level) in levels.iter_mut().enumerate() {
                *level |= ((bits >> channel) & 1) << plane;
            }
        }
        Some(Color::from_levels(levels, self.geometry.planes()))
    }

    /// Fill the whole writable buffer with one color
    ///
    /// A solid color collapses to one byte pattern per plane, so this is
    /// a block fill rather than per-pixel writes; all-black clears every
    /// byte in a single pass.
    pub fn fill(&mut self, color: Color) {
        if color == Color::BLACK {
            self.buffers[self.back as usize].clear();
            return;
        }
        let levels = color.levels(self.geometry.planes());
        for plane in 0..self.geometry.planes() {
            let bits = plane_bits(levels, plane);
            let pattern = bits | (bits << 3);
            for scan_row in 0..self.geometry.scan_rows() {
                let span = self.geometry.row_span(scan_row, plane);
                self.buffers[self.back as usize].bytes_mut()[span].fill(pattern);
            }
        }
    }

    /// Raw bytes of the writable buffer, for bulk writes
    ///
    /// Layout is scan-ordered bit planes (see
    /// [`geometry`](crate::geometry)); the handle is only valid until the
    /// next swap commits, so callers must not retain it across frames.
    pub fn back_buffer(&mut self) -> &mut [u8] {
        self.buffers[self.back as usize].bytes_mut()
    }

    /// Request that the writable and active buffers exchange roles
    ///
    /// The exchange is deferred to the refresh step that wraps the plane
    /// counter, the one point where retargeting the scan-out cannot tear
    /// a frame. In single-buffer mode the roles already coincide and
    /// this is a no-op. Poll [`Matrix::swap_pending`] to observe the
    /// commit.
    pub fn request_swap(&mut self) {
        if self.is_double_buffered() {
            self.swap_pending = true;
        }
    }

    /// True while a requested exchange has not yet committed
    pub fn swap_pending(&self) -> bool {
        self.swap_pending
    }

    /// Snapshot of refresh progress, for diagnostics
    pub fn stats(&self) -> RefreshStats {
        RefreshStats {
            frames: self.frames,
            scan_row: self.cursor.row,
            plane: self.cursor.plane,
        }
    }
}

/// Data-line bits of one plane for one pixel: R, G, B in bits 0..2
fn plane_bits(levels: [u8; 3], plane: u8) -> u8 {
    ((levels[0] >> plane) & 1)
        | (((levels[1] >> plane) & 1) << 1)
        | (((levels[2] >> plane) & 1) << 2)
}
