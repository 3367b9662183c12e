//! Embassy binding for the gesture detector.
//!
//! Runs the detector from two async tasks instead of raw interrupt
//! handlers:
//!
//! - [`button_service`] owns the button pin, awaits the edge the detector
//!   last selected and feeds [`GestureDetector::on_edge`].
//! - [`timer_service`] implements the one-shot long-press timer on top of
//!   `embassy_time::Timer` and feeds [`GestureDetector::on_timer_expired`].
//!
//! The detector talks to both tasks through [`EdgeSelect`] and
//! [`SignalTimer`], which only flip atomics or post to a `Signal`, so the
//! detector's critical sections stay register-short.
//!
//! # Example
//!
//! ```ignore
//! static GESTURES: GestureDetector<EdgeSelect, SignalTimer> = GestureDetector::new(
//!     EdgeSelect::new(),
//!     SignalTimer::new(),
//!     GestureConfig::new(LONG_PRESS_TIMEOUT_TICKS),
//!     GestureHandlers::new(on_click, on_long_press),
//! );
//!
//! #[embassy_executor::task]
//! async fn easylink_button(pin: ExtiInput<'static>) {
//!     button_service(&GESTURES, pin).await
//! }
//!
//! #[embassy_executor::task]
//! async fn easylink_timer() {
//!     timer_service(&GESTURES).await
//! }
//! ```

use core::convert::Infallible;

use embassy_futures::select::{Either, select};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Instant, Timer};
use embedded_hal::digital::InputPin;
use embedded_hal_async::digital::Wait;
use portable_atomic::{AtomicBool, AtomicU8, Ordering};

use crate::config::{TICK_HZ, Tick};
use crate::gesture::{ArmToken, ButtonInput, Edge, GestureDetector, LongPressTimer};

const EDGE_NONE: u8 = 0;
const EDGE_FALLING: u8 = 1;
const EDGE_RISING: u8 = 2;

/// Current value of the monotonic tick counter.
pub fn now_ticks() -> Tick {
    (Instant::now().as_micros() / (1_000_000 / TICK_HZ as u64)) as Tick
}

fn ticks_to_duration(ticks: Tick) -> Duration {
    Duration::from_micros(ticks as u64 * (1_000_000 / TICK_HZ as u64))
}

/// [`ButtonInput`] backed by the level sampled in [`button_service`].
pub struct EdgeSelect {
    edge: AtomicU8,
    low: AtomicBool,
}

impl EdgeSelect {
    pub const fn new() -> Self {
        Self {
            edge: AtomicU8::new(EDGE_NONE),
            low: AtomicBool::new(false),
        }
    }

    /// Edge the detector is waiting for, `None` before it is started.
    pub fn edge(&self) -> Option<Edge> {
        match self.edge.load(Ordering::Acquire) {
            EDGE_FALLING => Some(Edge::Falling),
            EDGE_RISING => Some(Edge::Rising),
            _ => None,
        }
    }

    /// Records the pin level observed after an edge.
    pub fn sample(&self, low: bool) {
        self.low.store(low, Ordering::Release);
    }
}

impl Default for EdgeSelect {
    fn default() -> Self {
        Self::new()
    }
}

impl ButtonInput for EdgeSelect {
    fn is_low(&self) -> bool {
        self.low.load(Ordering::Acquire)
    }

    fn listen(&self, edge: Edge) {
        let code = match edge {
            Edge::Falling => EDGE_FALLING,
            Edge::Rising => EDGE_RISING,
        };
        self.edge.store(code, Ordering::Release);
    }
}

/// Command posted from the detector to [`timer_service`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerCommand {
    Start(ArmToken),
    Stop,
}

/// [`LongPressTimer`] that forwards start/stop to [`timer_service`].
///
/// A newer command replaces one the service has not picked up yet, so a
/// stop racing a start always leaves the last request in effect.
pub struct SignalTimer {
    commands: Signal<CriticalSectionRawMutex, TimerCommand>,
}

impl SignalTimer {
    pub const fn new() -> Self {
        Self {
            commands: Signal::new(),
        }
    }
}

impl Default for SignalTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl LongPressTimer for SignalTimer {
    fn start(&self, token: ArmToken) {
        self.commands.signal(TimerCommand::Start(token));
    }

    fn stop(&self) {
        self.commands.signal(TimerCommand::Stop);
    }
}

/// Drives the detector from edges on `pin`.
///
/// `pin` must be configured as a pulled-up input. Enables the detector's
/// falling-edge trigger on entry.
pub async fn button_service<T, P>(detector: &GestureDetector<EdgeSelect, T>, mut pin: P) -> !
where
    T: LongPressTimer,
    P: InputPin<Error = Infallible> + Wait,
{
    detector.start();

    loop {
        let Ok(()) = match detector.button().edge() {
            Some(Edge::Rising) => pin.wait_for_rising_edge().await,
            _ => pin.wait_for_falling_edge().await,
        };
        let Ok(low) = pin.is_low();
        detector.button().sample(low);
        detector.on_edge(now_ticks());
    }
}

/// Runs the long-press timer for `detector`.
///
/// Each `Start` races the configured timeout against the next command; the
/// token of the start that ran to completion is handed back to the detector.
pub async fn timer_service<B>(detector: &GestureDetector<B, SignalTimer>) -> !
where
    B: ButtonInput,
{
    let timeout = ticks_to_duration(detector.config().long_press_timeout);
    let commands = &detector.timer().commands;

    let mut command = commands.wait().await;
    loop {
        command = match command {
            TimerCommand::Stop => commands.wait().await,
            TimerCommand::Start(token) => {
                #[cfg(feature = "debug-mode")]
                defmt::debug!("long-press timer started for {}", token);

                match select(Timer::after(timeout), commands.wait()).await {
                    Either::First(()) => {
                        detector.on_timer_expired(token);
                        commands.wait().await
                    }
                    Either::Second(next) => next,
                }
            }
        };
    }
}
