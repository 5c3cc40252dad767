//! Packed color values and encoders
//!
//! All encoders are pure and total: out-of-range inputs clamp (hue wraps
//! modulo 360°) and nothing here can fail. A [`Color`] is a packed
//! RGB565 word, the common currency of small-display drawing code; the
//! engine expands it to the framebuffer's native plane depth when a pixel
//! is written, optionally through the gamma lookup at encode time.

mod gamma;

use gamma::GAMMA8;

/// Packed 16-bit RGB565 color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color(u16);

impl Color {
    pub const BLACK: Self = Self(0);
    pub const WHITE: Self = Self(0xFFFF);

    /// Wrap a raw RGB565 word
    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    /// The raw RGB565 word
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Encode 3-bit-per-channel color (values 0-7, clamped)
    pub fn rgb333(r: u8, g: u8, b: u8) -> Self {
        Self::pack(
            expand(r.min(7), 3),
            expand(g.min(7), 3),
            expand(b.min(7), 3),
        )
    }

    /// Encode 4-bit-per-channel color (values 0-15, clamped)
    pub fn rgb444(r: u8, g: u8, b: u8) -> Self {
        Self::pack(
            expand(r.min(15), 4),
            expand(g.min(15), 4),
            expand(b.min(15), 4),
        )
    }

    /// Encode 8-bit-per-channel color
    pub fn rgb888(r: u8, g: u8, b: u8) -> Self {
        Self::pack(r, g, b)
    }

    /// Encode 8-bit-per-channel color through the gamma lookup
    ///
    /// Gamma never shifts hue; each channel passes through the same
    /// monotonic table before packing.
    pub fn rgb888_gamma(r: u8, g: u8, b: u8) -> Self {
        Self::pack(GAMMA8[r as usize], GAMMA8[g as usize], GAMMA8[b as usize])
    }

    /// Encode an HSV color
    ///
    /// `hue_deg` is taken modulo 360° (negative values wrap), saturation
    /// and value span 0-255. The conversion walks the six 60°-wide hue
    /// sectors with linear interpolation inside each, then feeds the
    /// resulting channels through [`Color::rgb888`] or
    /// [`Color::rgb888_gamma`].
    pub fn hsv(hue_deg: i32, sat: u8, val: u8, gamma: bool) -> Self {
        let h = hue_deg.rem_euclid(360) as u32;
        let s = sat as u32;
        let v = val as u32;

        let sector = h / 60;
        let f = h % 60;

        // Interpolants scaled to 0-255; 15300 = 255 * 60
        let p = (v * (255 - s) / 255) as u8;
        let q = (v * (15300 - s * f) / 15300) as u8;
        let t = (v * (15300 - s * (60 - f)) / 15300) as u8;
        let v = v as u8;

        let (r, g, b) = match sector {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };

        if gamma {
            Self::rgb888_gamma(r, g, b)
        } else {
            Self::rgb888(r, g, b)
        }
    }

    /// Per-channel levels at the framebuffer's native plane depth
    ///
    /// Returned as `[r, g, b]`, each in `0..(1 << planes)`.
    pub(crate) fn levels(self, planes: u8) -> [u8; 3] {
        let shift = 8 - planes;
        [self.r8() >> shift, self.g8() >> shift, self.b8() >> shift]
    }

    /// Reconstruct a packed color from native-depth channel levels
    pub(crate) fn from_levels(levels: [u8; 3], planes: u8) -> Self {
        Self::pack(
            expand(levels[0], planes),
            expand(levels[1], planes),
            expand(levels[2], planes),
        )
    }

    const fn pack(r8: u8, g8: u8, b8: u8) -> Self {
        Self(((r8 as u16 >> 3) << 11) | ((g8 as u16 >> 2) << 5) | (b8 as u16 >> 3))
    }

    fn r8(self) -> u8 {
        expand((self.0 >> 11) as u8, 5)
    }

    fn g8(self) -> u8 {
        expand((self.0 >> 5) as u8 & 0x3F, 6)
    }

    fn b8(self) -> u8 {
        expand(self.0 as u8 & 0x1F, 5)
    }
}

/// Widen an n-bit channel value to 8 bits by bit replication
///
/// Replication keeps full scale exact (all-ones maps to 255) and is
/// monotonic, which plain left-shifting is not at the top of the range.
const fn expand(value: u8, bits: u8) -> u8 {
    if bits >= 8 {
        return value;
    }
    let mut out: u8 = 0;
    let mut filled: u8 = 0;
    while filled < 8 {
        let shift = 8 - filled;
        if shift >= bits {
            out |= value << (shift - bits);
        } else {
            out |= value >> (bits - shift);
        }
        filled += bits;
    }
    out
}
