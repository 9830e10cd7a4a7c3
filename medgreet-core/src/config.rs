//! Configuration types
//!
//! All tunables of the kiosk with their defaults. The firmware builds a
//! `GreeterConfig` at compile time from `greeter.toml`; the same
//! validation rules run in its build script.

use medgreet_protocol::{map_touch_sample, AxisRange, RawTouch, SensorRange, TouchPoint};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default period between greeting refreshes
pub const DEFAULT_GREETING_REFRESH_MS: u32 = 5000;

/// Default idle time before returning to the scan prompt
pub const DEFAULT_INACTIVITY_TIMEOUT_MS: u32 = 10_000;

/// Default suppression window after a recognised tap
pub const DEFAULT_TAP_COOLDOWN_MS: u32 = 300;

/// Default sleep between loop iterations
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 100;

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Greeting refresh period is zero
    ZeroGreetingRefresh,
    /// Inactivity timeout does not exceed the greeting refresh period
    TimeoutNotAfterRefresh,
    /// Poll interval is zero
    ZeroPollInterval,
    /// A touch calibration axis has `max <= min`
    EmptyTouchRange,
}

/// Mapping from raw touch controller units to screen pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TouchCalibration {
    pub x_min: u16,
    pub x_max: u16,
    pub y_min: u16,
    pub y_max: u16,
    /// Panel mounted with sensor axes exchanged
    pub swap_xy: bool,
    pub invert_x: bool,
    pub invert_y: bool,
}

impl Default for TouchCalibration {
    fn default() -> Self {
        Self::UNCALIBRATED
    }
}

impl TouchCalibration {
    /// Full 12-bit range, no swap or inversion
    pub const UNCALIBRATED: Self = Self {
        x_min: 0,
        x_max: 4095,
        y_min: 0,
        y_max: 4095,
        swap_xy: false,
        invert_x: false,
        invert_y: false,
    };

    pub const fn sensor_range(&self) -> SensorRange {
        SensorRange {
            x: AxisRange::new(self.x_min, self.x_max),
            y: AxisRange::new(self.y_min, self.y_max),
        }
    }

    /// Map a raw sample onto a `width` x `height` screen
    pub fn map(&self, raw: RawTouch, width: u16, height: u16) -> TouchPoint {
        let raw = if self.swap_xy {
            RawTouch { x: raw.y, y: raw.x, ..raw }
        } else {
            raw
        };

        let mut point = map_touch_sample(raw, self.sensor_range(), width, height);
        if self.invert_x {
            point.x = width as i32 - point.x;
        }
        if self.invert_y {
            point.y = height as i32 - point.y;
        }
        point
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let range = self.sensor_range();
        if !range.x.is_valid() || !range.y.is_valid() {
            return Err(ConfigError::EmptyTouchRange);
        }
        Ok(())
    }
}

/// Kiosk configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GreeterConfig {
    /// Greeting screen redraws itself after this long (ms)
    pub greeting_refresh_ms: u32,
    /// Return to the scan prompt after this long without a tap (ms)
    pub inactivity_timeout_ms: u32,
    /// Ignore taps for this long after one hit a button (ms)
    pub tap_cooldown_ms: u32,
    /// Sleep between loop iterations (ms)
    pub poll_interval_ms: u32,
    pub touch: TouchCalibration,
}

impl Default for GreeterConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl GreeterConfig {
    pub const DEFAULT: Self = Self {
        greeting_refresh_ms: DEFAULT_GREETING_REFRESH_MS,
        inactivity_timeout_ms: DEFAULT_INACTIVITY_TIMEOUT_MS,
        tap_cooldown_ms: DEFAULT_TAP_COOLDOWN_MS,
        poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        touch: TouchCalibration::UNCALIBRATED,
    };

    /// Check the configuration for values the controller cannot honour
    ///
    /// The inactivity timeout must exceed the refresh period, otherwise a
    /// greeting refresh could never be observed before the timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.greeting_refresh_ms == 0 {
            return Err(ConfigError::ZeroGreetingRefresh);
        }
        if self.inactivity_timeout_ms <= self.greeting_refresh_ms {
            return Err(ConfigError::TimeoutNotAfterRefresh);
        }
        if self.poll_interval_ms == 0 {
            return Err(ConfigError::ZeroPollInterval);
        }
        self.touch.validate()
    }
}
