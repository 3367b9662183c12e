//! Startup mode selection from the BOOT_SEL and MFG_SEL straps.
//!
//! Both straps are pulled up and asserted by tying them low, so a released
//! strap reads `true` (high).
//!
//! | BOOT_SEL | MFG_SEL | mode                 |
//! |----------|---------|----------------------|
//! | low      | low     | manufacturing test   |
//! | low      | high    | bootloader           |
//! | high     | any     | normal               |

use core::convert::Infallible;

use embedded_hal::digital::InputPin;

use crate::registry::LogicalPin;

/// Operating mode chosen once during early init.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BootMode {
    Normal,
    ManufacturingTest,
    Bootloader,
}

impl BootMode {
    /// Strap pins sampled by [`BootMode::sample`], in argument order.
    pub const STRAP_PINS: [LogicalPin; 2] = [LogicalPin::BootSel, LogicalPin::MfgSel];

    /// Reads both straps and selects the mode.
    ///
    /// The pins must already be configured as pulled-up inputs.
    pub fn sample<B, M>(boot_sel: &mut B, mfg_sel: &mut M) -> Self
    where
        B: InputPin<Error = Infallible>,
        M: InputPin<Error = Infallible>,
    {
        let Ok(boot_sel) = boot_sel.is_high();
        let Ok(mfg_sel) = mfg_sel.is_high();
        select_boot_mode(boot_sel, mfg_sel)
    }

    pub const fn is_manufacturing(self) -> bool {
        matches!(self, BootMode::ManufacturingTest)
    }

    pub const fn is_bootloader(self) -> bool {
        matches!(self, BootMode::Bootloader)
    }
}

/// Selects the boot mode from the electrical strap levels (`true` = high).
pub const fn select_boot_mode(boot_sel_level: bool, mfg_sel_level: bool) -> BootMode {
    match (boot_sel_level, mfg_sel_level) {
        (false, false) => BootMode::ManufacturingTest,
        (false, true) => BootMode::Bootloader,
        (true, _) => BootMode::Normal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::digital::ErrorType;

    struct Strap(bool);

    impl ErrorType for Strap {
        type Error = Infallible;
    }

    impl InputPin for Strap {
        fn is_high(&mut self) -> Result<bool, Infallible> {
            Ok(self.0)
        }

        fn is_low(&mut self) -> Result<bool, Infallible> {
            Ok(!self.0)
        }
    }

    #[test]
    fn truth_table() {
        assert_eq!(select_boot_mode(false, false), BootMode::ManufacturingTest);
        assert_eq!(select_boot_mode(false, true), BootMode::Bootloader);
        assert_eq!(select_boot_mode(true, false), BootMode::Normal);
        assert_eq!(select_boot_mode(true, true), BootMode::Normal);
    }

    #[test]
    fn both_straps_grounded_enters_manufacturing() {
        let mode = BootMode::sample(&mut Strap(false), &mut Strap(false));
        assert_eq!(mode, BootMode::ManufacturingTest);
        assert!(mode.is_manufacturing());
        assert!(!mode.is_bootloader());
    }

    #[test]
    fn boot_sel_alone_enters_bootloader() {
        let mode = BootMode::sample(&mut Strap(false), &mut Strap(true));
        assert!(mode.is_bootloader());
        assert!(!mode.is_manufacturing());
    }

    #[test]
    fn released_boot_sel_ignores_mfg_sel() {
        assert_eq!(
            BootMode::sample(&mut Strap(true), &mut Strap(false)),
            BootMode::Normal
        );
    }

    #[test]
    fn straps_are_active_low_inputs() {
        use crate::registry::{PinMode, Polarity, lookup_pin};

        for pin in BootMode::STRAP_PINS {
            let desc = lookup_pin(pin);
            assert_eq!(desc.mode, PinMode::InputPullUp);
            assert_eq!(desc.polarity, Polarity::ActiveLow);
        }
    }
}
