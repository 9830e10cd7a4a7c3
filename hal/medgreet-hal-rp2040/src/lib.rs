//! RP2040-specific HAL for the Medgreet kiosk
//!
//! This crate provides RP2040 implementations of the shared
//! `medgreet-hal` traits:
//!
//! - Non-blocking serial receive over the buffered UART
//!   (implements `medgreet_hal::SerialRx`)

#![no_std]

pub mod serial;

pub use serial::{IoSerialRx, UartSerialRx};
