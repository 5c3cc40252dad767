//! GPIO output pins for RP2040
//!
//! Wraps embassy-rp push-pull outputs behind the shared `OutputPin`
//! trait so the generic line drivers can run on this chip.

use embassy_rp::gpio::{AnyPin, Level, Output};
use embassy_rp::Peri;

use phosphor_hal::OutputPin;

use crate::pins::{PinBank, PinError};

/// A single matrix control or data line on an RP2040 GPIO
///
/// The pin is configured as a push-pull output driven low at creation,
/// which leaves the panel blanked until the refresh loop takes over.
pub struct RpLine {
    out: Output<'static>,
}

impl RpLine {
    /// Configure a pin as a matrix line, initially low
    pub fn new(pin: Peri<'static, AnyPin>) -> Self {
        Self {
            out: Output::new(pin, Level::Low),
        }
    }

    /// Take a pin by number from the bank and configure it as a line
    ///
    /// Fails if the pin number is invalid or the pin was already taken;
    /// both are wiring-configuration errors and fatal at startup.
    pub fn from_bank(bank: &mut PinBank, pin_num: u8) -> Result<Self, PinError> {
        Ok(Self::new(bank.take(pin_num)?))
    }
}

impl OutputPin for RpLine {
    fn set_high(&mut self) {
        self.out.set_high();
    }

    fn set_low(&mut self) {
        self.out.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.out.is_set_high()
    }
}
