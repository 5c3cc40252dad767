//! Bit-plane framebuffer storage
//!
//! Dumb byte storage: layout knowledge lives in
//! [`PanelGeometry`](crate::geometry::PanelGeometry), and all pixel
//! manipulation goes through the engine. Buffers are sized from runtime
//! geometry into fixed-capacity storage once, at construction, and are
//! never reallocated.

use heapless::Vec;

use crate::geometry::{GeometryError, PanelGeometry, MAX_FRAME_BYTES};

/// One scan-ordered bit-plane buffer
pub struct FrameBuffer {
    data: Vec<u8, MAX_FRAME_BYTES>,
}

impl FrameBuffer {
    /// Allocate a zeroed buffer for the given geometry
    pub fn new(geometry: &PanelGeometry) -> Result<Self, GeometryError> {
        let mut data = Vec::new();
        data.resize(geometry.frame_bytes(), 0)
            .map_err(|_| GeometryError::FrameTooLarge)?;
        Ok(Self { data })
    }

    /// Buffer contents in scan order
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    /// Mutable buffer contents in scan order
    pub fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Reset every byte to zero (all LEDs dark)
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// Buffer length in bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True for a zero-sized buffer
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
