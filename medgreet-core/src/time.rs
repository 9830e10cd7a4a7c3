//! Monotonic millisecond timestamps
//!
//! Timestamps are a wrapping `u32` millisecond counter (about 49.7 days per
//! wrap). Durations are computed with wrapping subtraction, so an interval
//! that straddles the wrap still comes out as a small positive value.

/// Point in time, in milliseconds since an arbitrary epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Instant(u32);

impl Instant {
    pub const fn from_millis(ms: u32) -> Self {
        Self(ms)
    }

    pub const fn as_millis(self) -> u32 {
        self.0
    }

    /// Milliseconds from `earlier` to `self`, correct across a wrap
    pub const fn elapsed_since(self, earlier: Instant) -> u32 {
        self.0.wrapping_sub(earlier.0)
    }

    /// Check if strictly more than `duration_ms` has passed since `earlier`
    pub const fn exceeds(self, earlier: Instant, duration_ms: u32) -> bool {
        self.elapsed_since(earlier) > duration_ms
    }

    /// Timestamp `ms` later, wrapping
    pub const fn add_millis(self, ms: u32) -> Self {
        Self(self.0.wrapping_add(ms))
    }
}
