//! Board-agnostic core logic for the Medgreet kiosk
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Screen state machine (`Scan`, `Greeting`, `Schedule`)
//! - Session state and name handling
//! - Screen controller (transitions, timers, button hit-testing)
//! - Input dispatcher (serial names, debounced taps)
//! - `Kiosk`, one iteration of the cooperative loop
//! - Configuration type definitions
//!
//! Time is passed in explicitly as [`time::Instant`], so everything here
//! runs on the host in tests.

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod controller;
pub mod dispatch;
pub mod kiosk;
pub mod session;
pub mod state;
pub mod time;

pub use config::{ConfigError, GreeterConfig, TouchCalibration};
pub use controller::{ButtonKind, ButtonRegion, ControllerError, ScreenController, TickOutcome};
pub use dispatch::InputDispatcher;
pub use kiosk::{Diagnostic, Kiosk, PollReport};
pub use session::{Session, UserName, MAX_NAME_LEN};
pub use state::{Event, ScreenMode};
pub use time::Instant;
