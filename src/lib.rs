//! Hardware abstraction layer for the MiCOKit-G55 board.
//!
//! # Overview
//!
//! This crate provides the board-facing core used by the application
//! firmware:
//! - Build-time tables mapping logical pins and bus peripherals to physical
//!   pins, FLEXCOM channels and multiplexer functions
//! - Boot mode selection from the BOOT_SEL / MFG_SEL straps
//! - Control of the two active-low indicator LEDs
//! - EasyLink button gesture detection (click and long press) driven by the
//!   edge interrupt and a one-shot timer
//!
//! Bus drivers, flash programming, the WiFi transport and the scheduler are
//! supplied by the platform; this crate only describes them or consumes
//! their capabilities through traits.
//!
//! # Module Organization
//!
//! - [`registry`] - Pin and peripheral descriptor tables
//! - [`boot_mode`] - Strap sampling at startup
//! - [`led`] - Indicator LED controller
//! - [`gesture`] - Button gesture state machine
//! - [`service`] - Embassy tasks driving the gesture detector
//! - [`config`] - Timing constants
//!
//! # Features
//!
//! - `board-mico-kit-g55` (default): MiCOKit-G55 tables
//! - `defmt`: `defmt::Format` for all public types
//! - `debug-mode`: log gesture transitions over defmt

#![cfg_attr(not(test), no_std)]

pub mod boot_mode;
pub mod config;
pub mod gesture;
pub mod led;
pub mod registry;
pub mod service;

pub use boot_mode::{BootMode, select_boot_mode};
pub use config::{GestureConfig, Tick};
pub use gesture::{Gesture, GestureDetector, GestureHandlers};
pub use led::{Led, LedController, set_led};
pub use registry::{LogicalPin, PeripheralId, lookup_peripheral, lookup_pin};
