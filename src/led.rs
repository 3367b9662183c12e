//! Indicator LED control.
//!
//! The board carries two indicator LEDs, both wired active-low:
//! - **PA16**: SYS_LED, push-pull (status)
//! - **PA24**: RF_LED, open-drain (radio activity)
//!
//! The electrical level for "on" is taken from the registry polarity, so a
//! board revision that flips an LED only needs a table change.

use core::convert::Infallible;

use embedded_hal::digital::OutputPin;

use crate::registry::{LogicalPin, lookup_pin};

/// Logical indicator outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Led {
    /// System status
    Status,
    /// Radio activity
    Radio,
}

impl Led {
    /// Registry pin driving this LED.
    pub const fn pin(self) -> LogicalPin {
        match self {
            Led::Status => LogicalPin::SysLed,
            Led::Radio => LogicalPin::RfLed,
        }
    }
}

/// Controller for the two indicator LEDs.
///
/// Writes the electrical level directly; no state is kept beyond the output
/// register itself.
pub struct LedController<S, R> {
    /// Output driving SYS_LED
    status: S,
    /// Output driving RF_LED
    radio: R,
}

impl<S, R> LedController<S, R>
where
    S: OutputPin<Error = Infallible>,
    R: OutputPin<Error = Infallible>,
{
    /// Creates a new LedController and switches both LEDs off.
    ///
    /// # Arguments
    ///
    /// * `status` - Output configured for SYS_LED (push-pull)
    /// * `radio` - Output configured for RF_LED (open-drain)
    pub fn new(status: S, radio: R) -> Self {
        let mut this = Self { status, radio };
        this.set(Led::Status, false);
        this.set(Led::Radio, false);
        this
    }

    /// Switches an LED on or off.
    pub fn set(&mut self, led: Led, on: bool) {
        let high = lookup_pin(led.pin()).polarity.level(on);
        match led {
            Led::Status => drive(&mut self.status, high),
            Led::Radio => drive(&mut self.radio, high),
        }
    }

    /// Releases the underlying outputs.
    pub fn release(self) -> (S, R) {
        (self.status, self.radio)
    }
}

/// Shorthand for [`LedController::set`] on a controller owned elsewhere.
pub fn set_led<S, R>(leds: &mut LedController<S, R>, led: Led, on: bool)
where
    S: OutputPin<Error = Infallible>,
    R: OutputPin<Error = Infallible>,
{
    leds.set(led, on);
}

fn drive<P: OutputPin<Error = Infallible>>(pin: &mut P, high: bool) {
    let Ok(()) = if high { pin.set_high() } else { pin.set_low() };
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::digital::ErrorType;

    #[derive(Default)]
    struct Pin {
        high: Option<bool>,
        writes: usize,
    }

    impl ErrorType for Pin {
        type Error = Infallible;
    }

    impl OutputPin for Pin {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.high = Some(false);
            self.writes += 1;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.high = Some(true);
            self.writes += 1;
            Ok(())
        }
    }

    #[test]
    fn new_switches_both_off() {
        let (status, radio) = LedController::new(Pin::default(), Pin::default()).release();
        assert_eq!(status.high, Some(true));
        assert_eq!(radio.high, Some(true));
    }

    #[test]
    fn on_drives_low() {
        let mut leds = LedController::new(Pin::default(), Pin::default());
        leds.set(Led::Status, true);
        set_led(&mut leds, Led::Radio, true);
        let (status, radio) = leds.release();
        assert_eq!(status.high, Some(false));
        assert_eq!(radio.high, Some(false));
    }

    #[test]
    fn leds_are_independent() {
        let mut leds = LedController::new(Pin::default(), Pin::default());
        leds.set(Led::Radio, true);
        leds.set(Led::Radio, false);
        let (status, radio) = leds.release();
        assert_eq!(status.writes, 1);
        assert_eq!(radio.writes, 3);
        assert_eq!(radio.high, Some(true));
    }

    #[test]
    fn leds_map_to_registry_pins() {
        assert_eq!(Led::Status.pin(), LogicalPin::SysLed);
        assert_eq!(Led::Radio.pin(), LogicalPin::RfLed);
    }
}
