//! Medication schedule shown on the schedule screen
//!
//! Each dose slot carries a time label and a tablet count for the two
//! pills, the same shape as the registration records (`time`, `pillA`,
//! `pillB`).

/// One dosing time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DoseSlot {
    /// Display label, e.g. "8:00 AM"
    pub time: &'static str,
    /// Tablets of pill A
    pub pill_a: u8,
    /// Tablets of pill B
    pub pill_b: u8,
}

impl DoseSlot {
    pub const fn new(time: &'static str, pill_a: u8, pill_b: u8) -> Self {
        Self {
            time,
            pill_a,
            pill_b,
        }
    }
}

/// A day's dosing times
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MedicationSchedule {
    slots: &'static [DoseSlot],
}

/// Schedule shown until per-user schedules are delivered over the link
pub const DEFAULT_SCHEDULE: MedicationSchedule = MedicationSchedule::new(&[
    DoseSlot::new("8:00 AM", 2, 1),
    DoseSlot::new("1:00 PM", 1, 0),
    DoseSlot::new("8:00 PM", 2, 1),
]);

impl MedicationSchedule {
    pub const fn new(slots: &'static [DoseSlot]) -> Self {
        Self { slots }
    }

    pub fn slots(&self) -> &'static [DoseSlot] {
        self.slots
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl Default for MedicationSchedule {
    fn default() -> Self {
        DEFAULT_SCHEDULE
    }
}

/// Unit label for a tablet count
pub fn tablet_unit(count: u8) -> &'static str {
    if count == 1 {
        "tablet"
    } else {
        "tablets"
    }
}
