//! Build-time configuration
//!
//! `build.rs` validates greeter.toml and generates `GREETER_CONFIG`.

use medgreet_core::config::{GreeterConfig, TouchCalibration};

include!(concat!(env!("OUT_DIR"), "/greeter_config.rs"));
