//! EasyLink button gesture detection.
//!
//! Classifies the activity of a single active-low push-button into a
//! [`Gesture::Click`] or a [`Gesture::LongPress`] from two event sources:
//!
//! - the GPIO edge interrupt, delivered through [`GestureDetector::on_edge`]
//! - the expiry of the long-press timer, delivered through
//!   [`GestureDetector::on_timer_expired`]
//!
//! # State machine
//!
//! ```text
//! Idle       --falling edge-->  PressArmed   start timer, listen for rising
//! PressArmed --rising edge-->   Idle         stop timer, listen for falling,
//!                                            Click if 50 < interval < timeout
//! PressArmed --timer expiry-->  Idle         LongPress
//! ```
//!
//! There is no debounce timer. Bounce is filtered by toggling the trigger
//! edge after every transition and by requiring a click to last longer than
//! [`GestureConfig::click_min`].
//!
//! # Concurrency
//!
//! The edge interrupt and the timer service run in independent, mutually
//! preemptible contexts. Every read-modify-write of [`GestureState`] happens
//! inside one critical section, and each armed period is stamped with an
//! [`ArmToken`] that the timer service hands back on expiry. Whichever
//! context commits first wins:
//!
//! - timer first: the press is disarmed and LongPress is emitted; the
//!   release that follows sees an idle detector and emits nothing.
//! - release first: the timer is stopped. If the measured interval already
//!   reached the timeout the release emits the LongPress itself. A late
//!   expiry then carries a stale token and is dropped.
//!
//! Either way one press produces at most one gesture, and presses held for
//! at least the timeout always produce exactly one LongPress.

use core::cell::Cell;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

use crate::config::{GestureConfig, Tick};

/// Interrupt trigger edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    Falling,
    Rising,
}

/// Classified button interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Gesture {
    /// Short press and release
    Click,
    /// Held through the long-press timeout
    LongPress,
}

/// Identifies one armed period of the long-press timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ArmToken(u32);

/// Button pin capability supplied by the platform.
///
/// Both methods are called from inside the detector's critical section and
/// must only touch registers.
pub trait ButtonInput {
    /// Returns `true` while the button is held (pin reads low).
    fn is_low(&self) -> bool;

    /// Re-arms the edge interrupt to fire on `edge`.
    fn listen(&self, edge: Edge);
}

/// One-shot long-press timer supplied by the platform.
///
/// The timer runs for the configured long-press timeout. On expiry the
/// platform calls [`GestureDetector::on_timer_expired`] with the token the
/// timer was started with.
pub trait LongPressTimer {
    /// (Re)starts the timer for a new armed period.
    fn start(&self, token: ArmToken);

    /// Stops the timer. Must be idempotent.
    fn stop(&self);
}

/// Callbacks invoked from interrupt or timer context.
///
/// Handlers must not block; set a flag or post to a queue and return.
#[derive(Debug, Clone, Copy, Default)]
pub struct GestureHandlers {
    pub click: Option<fn()>,
    pub long_press: Option<fn()>,
}

impl GestureHandlers {
    /// No handlers registered.
    pub const NONE: Self = Self {
        click: None,
        long_press: None,
    };

    pub const fn new(click: fn(), long_press: fn()) -> Self {
        Self {
            click: Some(click),
            long_press: Some(long_press),
        }
    }

    fn dispatch(&self, gesture: Gesture) {
        let handler = match gesture {
            Gesture::Click => self.click,
            Gesture::LongPress => self.long_press,
        };
        if let Some(handler) = handler {
            handler();
        }
    }
}

/// Mutable detector state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GestureState {
    /// Tick at which the current press began, biased by one. Zero when no
    /// press is in progress.
    pub press_start_time: Tick,
    /// Set while the button is held and the long-press timer is running.
    pub is_armed: bool,
    /// Counter stamped into the [`ArmToken`] of each armed period.
    armed_period: u32,
}

impl GestureState {
    pub const IDLE: Self = Self {
        press_start_time: 0,
        is_armed: false,
        armed_period: 0,
    };
}

/// Detector phase derived from [`GestureState::is_armed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    Idle,
    PressArmed,
}

/// Gesture state machine for one button.
///
/// Owns the button capability, the long-press timer and the state they
/// share. Place it in a `static` (or a `StaticCell`) and call the two entry
/// points from the edge interrupt and the timer service.
pub struct GestureDetector<B, T> {
    button: B,
    timer: T,
    config: GestureConfig,
    handlers: GestureHandlers,
    state: Mutex<CriticalSectionRawMutex, Cell<GestureState>>,
}

impl<B, T> GestureDetector<B, T> {
    /// Creates an idle detector. Call [`GestureDetector::start`] once the
    /// button pin is configured.
    pub const fn new(button: B, timer: T, config: GestureConfig, handlers: GestureHandlers) -> Self {
        Self {
            button,
            timer,
            config,
            handlers,
            state: Mutex::new(Cell::new(GestureState::IDLE)),
        }
    }

    pub fn button(&self) -> &B {
        &self.button
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> GestureState {
        self.state.lock(|state| state.get())
    }

    pub fn phase(&self) -> Phase {
        if self.state().is_armed {
            Phase::PressArmed
        } else {
            Phase::Idle
        }
    }
}

impl<B: ButtonInput, T: LongPressTimer> GestureDetector<B, T> {
    /// Enables the falling-edge interrupt.
    pub fn start(&self) {
        self.state.lock(|_| self.button.listen(Edge::Falling));
    }

    /// Edge interrupt entry point.
    ///
    /// Samples the button level to tell a press from a release, so it can be
    /// wired to either trigger edge. Returns the gesture emitted, if any,
    /// after the registered handler has run.
    pub fn on_edge(&self, now: Tick) -> Option<Gesture> {
        let gesture = self.state.lock(|cell| {
            let mut state = cell.get();
            let gesture = if self.button.is_low() {
                self.press(&mut state, now);
                None
            } else {
                self.release(&mut state, now)
            };
            cell.set(state);
            gesture
        });

        if let Some(gesture) = gesture {
            self.handlers.dispatch(gesture);
        }
        gesture
    }

    /// Long-press timer entry point.
    ///
    /// Emits [`Gesture::LongPress`] only if `token` belongs to the press
    /// that is still armed.
    pub fn on_timer_expired(&self, token: ArmToken) -> Option<Gesture> {
        let committed = self.state.lock(|cell| {
            let mut state = cell.get();
            if !state.is_armed || state.armed_period != token.0 {
                #[cfg(feature = "debug-mode")]
                defmt::debug!("stale long-press expiry {} dropped", token);
                return false;
            }
            state.press_start_time = 0;
            state.is_armed = false;
            cell.set(state);
            true
        });

        if !committed {
            return None;
        }

        #[cfg(feature = "debug-mode")]
        defmt::info!("long press");

        self.handlers.dispatch(Gesture::LongPress);
        Some(Gesture::LongPress)
    }

    fn press(&self, state: &mut GestureState, now: Tick) {
        state.press_start_time = now.wrapping_add(1);
        state.is_armed = true;
        state.armed_period = state.armed_period.wrapping_add(1);

        self.timer.start(ArmToken(state.armed_period));
        self.button.listen(Edge::Rising);

        #[cfg(feature = "debug-mode")]
        defmt::debug!("press armed at {}", now);
    }

    fn release(&self, state: &mut GestureState, now: Tick) -> Option<Gesture> {
        let interval = now.wrapping_add(1).wrapping_sub(state.press_start_time);

        self.button.listen(Edge::Falling);
        self.timer.stop();

        let gesture = if !state.is_armed {
            None
        } else if interval >= self.config.long_press_timeout {
            Some(Gesture::LongPress)
        } else if self.config.is_click(interval) {
            Some(Gesture::Click)
        } else {
            None
        };

        #[cfg(feature = "debug-mode")]
        defmt::debug!("release after {} ticks: {}", interval, gesture);

        state.press_start_time = 0;
        state.is_armed = false;
        gesture
    }
}
