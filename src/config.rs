//! Timing configuration for the board support layer.
//!
//! All durations are expressed in ticks of the free-running monotonic
//! counter. On this board one tick is one millisecond.

/// Frequency of the monotonic tick counter.
pub const TICK_HZ: u32 = 1000;

/// Hold time after which a press becomes a long press (restore-default
/// timeout of the EasyLink button).
pub const LONG_PRESS_TIMEOUT_TICKS: u32 = 3000;

/// Presses shorter than or equal to this are treated as contact bounce.
pub const CLICK_MIN_TICKS: u32 = 50;

/// Monotonic tick value. Wraps around at `u32::MAX`.
pub type Tick = u32;

/// Timing parameters of the gesture detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GestureConfig {
    /// Duration of the long-press timer. A release at or after this interval
    /// is never a click.
    pub long_press_timeout: Tick,
    /// Exclusive lower bound of the click window.
    pub click_min: Tick,
}

impl GestureConfig {
    /// Creates a configuration with a custom long-press timeout and the
    /// board's default bounce window.
    pub const fn new(long_press_timeout: Tick) -> Self {
        Self {
            long_press_timeout,
            click_min: CLICK_MIN_TICKS,
        }
    }

    /// Returns `true` if a press held for `interval` ticks is a click.
    pub const fn is_click(&self, interval: Tick) -> bool {
        interval > self.click_min && interval < self.long_press_timeout
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self::new(LONG_PRESS_TIMEOUT_TICKS)
    }
}
