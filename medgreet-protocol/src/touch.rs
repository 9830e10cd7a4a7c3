//! Touch samples and their mapping to screen coordinates

/// Raw sample from the touch controller, in sensor-native units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawTouch {
    pub x: u16,
    pub y: u16,
    /// Pressure estimate (larger is firmer); 0 when not measured
    pub z: u16,
}

impl RawTouch {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y, z: 0 }
    }
}

/// Native range of one sensor axis (inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisRange {
    pub min: u16,
    pub max: u16,
}

impl AxisRange {
    pub const fn new(min: u16, max: u16) -> Self {
        Self { min, max }
    }

    /// Check if the range spans at least one step
    pub const fn is_valid(&self) -> bool {
        self.max > self.min
    }
}

/// Native range of both sensor axes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorRange {
    pub x: AxisRange,
    pub y: AxisRange,
}

impl SensorRange {
    /// 12-bit resistive controller range on both axes
    pub const TWELVE_BIT: Self = Self {
        x: AxisRange::new(0, 4095),
        y: AxisRange::new(0, 4095),
    };
}

impl Default for SensorRange {
    fn default() -> Self {
        Self::TWELVE_BIT
    }
}

/// Touch position in screen pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TouchPoint {
    pub x: i32,
    pub y: i32,
}

/// Linearly rescale `value` from `range` onto `0..=out_max`
///
/// Integer arithmetic, truncating toward zero. Values outside `range`
/// extrapolate instead of being rejected.
fn rescale(value: u16, range: AxisRange, out_max: u16) -> i32 {
    let span = (range.max as i32 - range.min as i32).max(1);
    (value as i32 - range.min as i32) * out_max as i32 / span
}

/// Map a raw touch sample onto a `width` x `height` screen
pub fn map_touch_sample(raw: RawTouch, range: SensorRange, width: u16, height: u16) -> TouchPoint {
    TouchPoint {
        x: rescale(raw.x, range.x, width),
        y: rescale(raw.y, range.y, height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_corners() {
        let range = SensorRange::TWELVE_BIT;
        assert_eq!(
            map_touch_sample(RawTouch::new(0, 0), range, 240, 320),
            TouchPoint { x: 0, y: 0 }
        );
        assert_eq!(
            map_touch_sample(RawTouch::new(4095, 4095), range, 240, 320),
            TouchPoint { x: 240, y: 320 }
        );
    }

    #[test]
    fn test_midpoint() {
        let p = map_touch_sample(RawTouch::new(2048, 2048), SensorRange::TWELVE_BIT, 240, 320);
        assert_eq!(p, TouchPoint { x: 120, y: 160 });
    }

    #[test]
    fn test_calibrated_range_extrapolates() {
        let range = SensorRange {
            x: AxisRange::new(200, 3900),
            y: AxisRange::new(300, 3800),
        };
        let p = map_touch_sample(RawTouch::new(100, 4000), range, 240, 320);
        assert!(p.x < 0);
        assert!(p.y > 320);
    }

    #[test]
    fn test_degenerate_range_does_not_divide_by_zero() {
        let range = SensorRange {
            x: AxisRange::new(100, 100),
            y: AxisRange::new(100, 100),
        };
        assert!(!range.x.is_valid());
        let _ = map_touch_sample(RawTouch::new(150, 50), range, 240, 320);
    }

    proptest! {
        #[test]
        fn prop_in_range_samples_land_on_screen(x in 0u16..=4095, y in 0u16..=4095) {
            let p = map_touch_sample(RawTouch::new(x, y), SensorRange::TWELVE_BIT, 240, 320);
            prop_assert!((0..=240).contains(&p.x));
            prop_assert!((0..=320).contains(&p.y));
        }

        #[test]
        fn prop_mapping_is_monotonic(a in 0u16..=4095, b in 0u16..=4095) {
            let range = SensorRange::TWELVE_BIT;
            let pa = map_touch_sample(RawTouch::new(a, a), range, 240, 320);
            let pb = map_touch_sample(RawTouch::new(b, b), range, 240, 320);
            if a <= b {
                prop_assert!(pa.x <= pb.x && pa.y <= pb.y);
            }
        }
    }
}
