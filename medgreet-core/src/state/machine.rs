//! Screen modes and the transition table

use super::events::Event;

/// The screen currently shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScreenMode {
    /// "SCAN HERE" prompt; initial state, no button
    #[default]
    Scan,
    /// Personalized greeting with the "SCHEDULE" button
    Greeting,
    /// Medication schedule with the "BACK" button
    Schedule,
}

impl ScreenMode {
    /// Check if this screen shows a user name (and so requires one)
    pub fn has_name(&self) -> bool {
        matches!(self, ScreenMode::Greeting | ScreenMode::Schedule)
    }

    /// Check if this screen has a tappable button
    pub fn has_button(&self) -> bool {
        self.has_name()
    }

    /// Check if the inactivity timeout applies
    pub fn is_timed(&self) -> bool {
        self.has_name()
    }

    /// Process an event and return the next mode
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use ScreenMode::*;

        match (self, event) {
            // A new name always greets, whatever is on screen
            (_, NameReceived) => Greeting,

            (Greeting, ButtonTapped) => Schedule,
            (Schedule, ButtonTapped) => Greeting,

            // Refresh redraws the greeting and restarts its timer
            (Greeting, GreetingExpired) => Greeting,

            (Greeting, InactivityExpired) => Scan,
            (Schedule, InactivityExpired) => Scan,

            // Default: stay on the current screen
            _ => self,
        }
    }
}
