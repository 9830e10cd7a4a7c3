//! Events that trigger screen transitions

/// Events that can trigger screen transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    // Input events
    /// A non-empty name arrived over the serial link
    NameReceived,
    /// The active button was tapped
    ButtonTapped,

    // Timer events
    /// The greeting has been shown for the refresh period
    GreetingExpired,
    /// No tap for the inactivity timeout
    InactivityExpired,
}

impl Event {
    /// Check if this event comes from a person at the kiosk
    pub fn is_user_event(&self) -> bool {
        matches!(self, Event::NameReceived | Event::ButtonTapped)
    }

    /// Check if this event is produced by `tick`
    pub fn is_timer_event(&self) -> bool {
        matches!(self, Event::GreetingExpired | Event::InactivityExpired)
    }
}
