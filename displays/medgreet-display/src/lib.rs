//! Render surface contract and screens for the Medgreet kiosk
//!
//! This crate provides:
//! - `DisplayBackend` trait, the render surface the controller draws through
//! - Geometry types (`Point`, `Size`, `Rect`) and palette tokens (`Paint`)
//! - Pure layout functions shared by drawing and hit-testing
//! - Screen routines for the scan prompt, greeting and medication schedule
//!
//! # Architecture
//!
//! The controller never deals in pixels or colors directly. It asks
//! `layout` where the active button is, then calls one routine in `screen`
//! which issues primitive calls against a `DisplayBackend`. Colors travel
//! as opaque `Paint` roles; the backend maps them to its pixel format.
//!
//! ## Backends
//!
//! - **embedded-graphics** (feature `embedded-graphics`): `EgBackend` wraps
//!   any `DrawTarget<Color = Rgb565>`, e.g. an SPI TFT driven by `mipidsi`.
//! - **mock** (feature `mock`): `RecordingBackend` records primitive calls
//!   for host-side tests.

#![no_std]
#![deny(unsafe_code)]

pub mod backend;
pub mod geometry;
pub mod layout;
pub mod schedule;
pub mod screen;

#[cfg(feature = "embedded-graphics")]
pub mod eg;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export key types
pub use backend::{DisplayBackend, DisplayError, FontSize, Paint, TextAlign, TextStyle};
pub use geometry::{Point, Rect, Size};
pub use schedule::{DoseSlot, MedicationSchedule, DEFAULT_SCHEDULE};
