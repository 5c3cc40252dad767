//! Bit-banged HUB75 line control
//!
//! Drives the matrix connector with plain GPIO writes: six data lines,
//! clock, latch, output-enable and 2-4 row-address lines. The pins are
//! owned by the driver instance rather than living in module-scope
//! statics, so several chains could be driven independently if a board
//! ever needs to.

use heapless::Vec;

use phosphor_core::config::MAX_ADDR_PINS;
use phosphor_core::MatrixLines;
use phosphor_hal::OutputPin;

/// GPIO implementation of [`MatrixLines`]
///
/// `data` follows the shift order R1, G1, B1, R2, G2, B2; `addr` is
/// least-significant pin first. The output-enable line is active-low at
/// the connector, which this driver hides behind the logical
/// `set_output_enabled` polarity.
pub struct GpioLines<P> {
    data: [P; 6],
    clock: P,
    latch: P,
    output_enable: P,
    addr: Vec<P, MAX_ADDR_PINS>,
}

impl<P: OutputPin> GpioLines<P> {
    /// Take ownership of the connector pins
    ///
    /// All lines are driven to an idle state: clock and latch low,
    /// output disabled. The panel stays dark until the refresh loop
    /// emits its first row.
    pub fn new(data: [P; 6], clock: P, latch: P, output_enable: P, addr: Vec<P, MAX_ADDR_PINS>) -> Self {
        let mut lines = Self {
            data,
            clock,
            latch,
            output_enable,
            addr,
        };
        lines.clock.set_low();
        lines.latch.set_low();
        lines.set_output_enabled(false);
        lines.set_address(0);
        lines
    }
}

impl<P: OutputPin> MatrixLines for GpioLines<P> {
    fn set_rgb(&mut self, bits: u8) {
        for (i, pin) in self.data.iter_mut().enumerate() {
            pin.set_state(bits & (1 << i) != 0);
        }
    }

    fn pulse_clock(&mut self) {
        self.clock.set_high();
        self.clock.set_low();
    }

    fn pulse_latch(&mut self) {
        self.latch.set_high();
        self.latch.set_low();
    }

    fn set_address(&mut self, scan_row: u8) {
        for (i, pin) in self.addr.iter_mut().enumerate() {
            pin.set_state(scan_row & (1 << i) != 0);
        }
    }

    fn set_output_enabled(&mut self, enabled: bool) {
        // nOE: high blanks the panel.
        self.output_enable.set_state(!enabled);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mock GPIO pin for testing
    #[derive(Default)]
    struct MockPin {
        high: bool,
        edges: u32,
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            if !self.high {
                self.edges += 1;
            }
            self.high = true;
        }

        fn set_low(&mut self) {
            self.high = false;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    fn lines() -> GpioLines<MockPin> {
        let mut addr = Vec::new();
        for _ in 0..3 {
            let _ = addr.push(MockPin::default());
        }
        GpioLines::new(
            core::array::from_fn(|_| MockPin::default()),
            MockPin::default(),
            MockPin::default(),
            MockPin::default(),
            addr,
        )
    }

    #[test]
    fn test_starts_blanked_and_idle() {
        let l = lines();
        // nOE high = dark panel; clock and latch parked low.
        assert!(l.output_enable.is_set_high());
        assert!(l.clock.is_set_low());
        assert!(l.latch.is_set_low());
    }

    #[test]
    fn test_output_enable_is_active_low() {
        let mut l = lines();
        l.set_output_enabled(true);
        assert!(l.output_enable.is_set_low());
        l.set_output_enabled(false);
        assert!(l.output_enable.is_set_high());
    }

    #[test]
    fn test_rgb_bits_map_to_data_pins() {
        let mut l = lines();
        l.set_rgb(0b101001);
        let states: [bool; 6] = [true, false, false, true, false, true];
        for (pin, expected) in l.data.iter().zip(states) {
            assert_eq!(pin.is_set_high(), expected);
        }
        // Upper bits are ignored.
        l.set_rgb(0b11000000);
        assert!(l.data.iter().all(|p| p.is_set_low()));
    }

    #[test]
    fn test_address_bits_least_significant_first() {
        let mut l = lines();
        l.set_address(0b110);
        assert!(l.addr[0].is_set_low());
        assert!(l.addr[1].is_set_high());
        assert!(l.addr[2].is_set_high());
    }

    #[test]
    fn test_clock_pulses_leave_line_low() {
        let mut l = lines();
        let before = l.clock.edges;
        l.pulse_clock();
        l.pulse_clock();
        assert_eq!(l.clock.edges, before + 2);
        assert!(l.clock.is_set_low());
    }
}
