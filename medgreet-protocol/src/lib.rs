//! Medgreet input protocol
//!
//! This crate defines the two inputs the kiosk understands:
//!
//! - A line-oriented serial channel carrying user names, either as
//!   `NAME:<name>` or as a bare name. Lines are terminated by `\n`;
//!   a trailing `\r` is trimmed like any other whitespace.
//! - Polled touch samples in the touch controller's native range,
//!   rescaled to screen pixels.
//!
//! # Protocol Overview
//!
//! ```text
//! serial bytes ──► LineAssembler ──► Line ──► parse_name_command ──► NameCommand
//! raw (x, y)   ──► map_touch_sample ─────────────────────────────► TouchPoint
//! ```
//!
//! Both parsing paths are pure: `parse_name_command` and `map_touch_sample`
//! hold no state, and `LineAssembler` only buffers the current partial line.

#![no_std]
#![deny(unsafe_code)]

pub mod command;
pub mod line;
pub mod touch;

pub use command::{parse_name_command, CommandError, NameCommand, NAME_PREFIX};
pub use line::{Line, LineAssembler, LineError, MAX_LINE_LEN};
pub use touch::{map_touch_sample, AxisRange, RawTouch, SensorRange, TouchPoint};
