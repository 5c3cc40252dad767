//! embedded-graphics adapter
//!
//! Lets application code paint the writable buffer with the
//! embedded-graphics primitives and fonts instead of raw pixel calls.
//! `Rgb565` is the engine's packed format already, so the conversion is
//! a straight repack of the channel fields.

use core::convert::Infallible;

use embedded_graphics_core::pixelcolor::{Rgb565, RgbColor};
use embedded_graphics_core::prelude::*;
use embedded_graphics_core::Pixel;

use crate::color::Color;
use crate::engine::Matrix;

impl From<Rgb565> for Color {
    fn from(c: Rgb565) -> Self {
        Color::from_raw(((c.r() as u16) << 11) | ((c.g() as u16) << 5) | c.b() as u16)
    }
}

impl OriginDimensions for Matrix {
    fn size(&self) -> Size {
        Size::new(self.width() as u32, self.height() as u32)
    }
}

impl DrawTarget for Matrix {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            if coord.x >= 0 && coord.y >= 0 {
                // set_pixel drops anything past the canvas edge.
                self.set_pixel(coord.x as u16, coord.y as u16, color.into());
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(color.into());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LinePins, MatrixConfig};
    use heapless::Vec;

    fn test_config(double_buffer: bool) -> MatrixConfig {
        let mut addr = Vec::new();
        for pin in [26u8, 4, 27] {
            let _ = addr.push(pin);
        }
        MatrixConfig {
            pins: LinePins {
                data: [2, 3, 6, 7, 8, 9],
                clock: 14,
                latch: 15,
                output_enable: 13,
                addr,
            },
            panels: 2,
            height: 16,
            planes: 6,
            double_buffer,
            base_interval_us: 30,
        }
    }

    #[test]
    fn test_draw_target_roundtrip() {
        let mut m = Matrix::new(&test_config(false)).unwrap();
        let color = Rgb565::new(19, 33, 7);
        m.draw_iter([Pixel(Point::new(12, 9), color)]).unwrap();
        assert_eq!(m.pixel(12, 9), Some(color.into()));
    }

    #[test]
    fn test_negative_coordinates_ignored() {
        let mut m = Matrix::new(&test_config(false)).unwrap();
        m.draw_iter([Pixel(Point::new(-1, 2), Rgb565::new(31, 63, 31))])
            .unwrap();
        assert!(m.back_buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_clear_uses_bulk_fill() {
        let mut m = Matrix::new(&test_config(false)).unwrap();
        DrawTarget::clear(&mut m, Rgb565::new(31, 0, 0)).unwrap();
        assert_eq!(m.pixel(63, 15), Some(Color::rgb888(255, 0, 0)));
    }

    #[test]
    fn test_size_matches_geometry() {
        let m = Matrix::new(&test_config(false)).unwrap();
        assert_eq!(m.size(), Size::new(64, 16));
    }
}
