//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in medgreet-hal:
//!
//! - Touch controllers (XPT2046 over SPI)

#![no_std]
#![deny(unsafe_code)]

pub mod touch;
