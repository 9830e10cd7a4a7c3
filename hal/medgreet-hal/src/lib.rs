//! Medgreet Hardware Abstraction Layer
//!
//! This crate defines the input-side hardware traits the kiosk polls every
//! loop iteration. Chip-specific crates implement them; the core only sees
//! these traits, so it runs unchanged on the host in tests.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  medgreet-core (Kiosk, controller)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  medgreet-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ medgreet-hal- │       │  medgreet-    │
//! │    rp2040     │       │  drivers      │
//! │ (serial)      │       │ (XPT2046)     │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`serial::SerialRx`] - Non-blocking serial receive
//! - [`touch::TouchSampler`] - Polled touch controller

#![no_std]
#![deny(unsafe_code)]

pub mod serial;
pub mod touch;

// Re-export key traits at crate root for convenience
pub use serial::SerialRx;
pub use touch::TouchSampler;
