//! Dynamic pin allocation for config-driven line assignment
//!
//! The matrix pinout comes from a board configuration rather than being
//! hardcoded, so pins are requested by number at runtime. Requesting the
//! same pin twice (two lines wired to one GPIO) is caught here instead of
//! silently producing a scrambled display.

use embassy_rp::gpio::AnyPin;
use embassy_rp::{Peri, Peripherals};

/// Fatal pin-resolution error
///
/// Both variants mean the board configuration does not match the chip;
/// startup must not continue with a partially wired connector.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// Pin number out of range (0-29 valid)
    InvalidPin,
    /// Pin already assigned to another line
    AlreadyTaken,
}

/// All RP2040 GPIOs, claimable one at a time by number
pub struct PinBank {
    pins: [Option<Peri<'static, AnyPin>>; 30],
}

impl PinBank {
    /// Absorb every GPIO from the peripherals struct
    ///
    /// After this, the matrix lines (and anything else the board wires
    /// up) claim their pins through [`PinBank::take`].
    pub fn new(p: Peripherals) -> Self {
        Self {
            pins: [
                Some(p.PIN_0.into()),
                Some(p.PIN_1.into()),
                Some(p.PIN_2.into()),
                Some(p.PIN_3.into()),
                Some(p.PIN_4.into()),
                Some(p.PIN_5.into()),
                Some(p.PIN_6.into()),
                Some(p.PIN_7.into()),
                Some(p.PIN_8.into()),
                Some(p.PIN_9.into()),
                Some(p.PIN_10.into()),
                Some(p.PIN_11.into()),
                Some(p.PIN_12.into()),
                Some(p.PIN_13.into()),
                Some(p.PIN_14.into()),
                Some(p.PIN_15.into()),
                Some(p.PIN_16.into()),
                Some(p.PIN_17.into()),
                Some(p.PIN_18.into()),
                Some(p.PIN_19.into()),
                Some(p.PIN_20.into()),
                Some(p.PIN_21.into()),
                Some(p.PIN_22.into()),
                Some(p.PIN_23.into()),
                Some(p.PIN_24.into()),
                Some(p.PIN_25.into()),
                Some(p.PIN_26.into()),
                Some(p.PIN_27.into()),
                Some(p.PIN_28.into()),
                Some(p.PIN_29.into()),
            ],
        }
    }

    /// Claim one pin by its GPIO number
    ///
    /// Each pin can be claimed once; a second claim means two lines in
    /// the board configuration name the same GPIO.
    pub fn take(&mut self, pin_num: u8) -> Result<Peri<'static, AnyPin>, PinError> {
        self.pins
            .get_mut(pin_num as usize)
            .ok_or(PinError::InvalidPin)?
            .take()
            .ok_or(PinError::AlreadyTaken)
    }

    /// True while the numbered pin is still unclaimed
    pub fn is_available(&self, pin_num: u8) -> bool {
        matches!(self.pins.get(pin_num as usize), Some(Some(_)))
    }
}
