//! Session state
//!
//! The one long-lived record of what the kiosk is showing and for whom.
//! Only the screen controller mutates it; everything else reads it.

use heapless::String;

use crate::state::ScreenMode;
use crate::time::Instant;

/// Maximum accepted name length in characters; longer names are truncated
pub const MAX_NAME_LEN: usize = 32;

/// Buffer size for a name of `MAX_NAME_LEN` characters of any width
const NAME_BUF_LEN: usize = MAX_NAME_LEN * 4;

/// Stored user name
pub type UserName = String<NAME_BUF_LEN>;

/// Check if `name` is longer than `MAX_NAME_LEN` characters
pub fn exceeds_max_name(name: &str) -> bool {
    name.chars().nth(MAX_NAME_LEN).is_some()
}

/// Copy `name`, keeping at most `MAX_NAME_LEN` characters
///
/// Trailing whitespace is dropped after the cut, so a stored name is
/// unchanged when it is trimmed and truncated again.
pub fn truncate_name(name: &str) -> UserName {
    let end = name
        .char_indices()
        .nth(MAX_NAME_LEN)
        .map_or(name.len(), |(i, _)| i);

    let mut out = UserName::new();
    // Cannot fail: MAX_NAME_LEN chars of at most 4 bytes each
    let _ = out.push_str(name[..end].trim_end());
    out
}

/// Mutable kiosk state
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Session {
    mode: ScreenMode,
    user_name: UserName,
    /// Last (re)entry into `Greeting`; drives the refresh timer
    mode_entered_at: Instant,
    /// Last entry into `Greeting`/`Schedule` or tap on a button
    last_interaction_at: Instant,
}

impl Session {
    /// Start in `Scan` with no name
    pub fn new(now: Instant) -> Self {
        Self {
            mode: ScreenMode::Scan,
            user_name: UserName::new(),
            mode_entered_at: now,
            last_interaction_at: now,
        }
    }

    pub fn mode(&self) -> ScreenMode {
        self.mode
    }

    /// Current user name; empty in `Scan`
    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn mode_entered_at(&self) -> Instant {
        self.mode_entered_at
    }

    pub fn last_interaction_at(&self) -> Instant {
        self.last_interaction_at
    }

    pub(crate) fn name_buf(&self) -> &UserName {
        &self.user_name
    }

    pub(crate) fn set_scan(&mut self) {
        self.mode = ScreenMode::Scan;
        self.user_name.clear();
    }

    pub(crate) fn set_greeting(&mut self, name: UserName, now: Instant) {
        self.mode = ScreenMode::Greeting;
        self.user_name = name;
        self.mode_entered_at = now;
        self.last_interaction_at = now;
    }

    pub(crate) fn restart_greeting_timer(&mut self, now: Instant) {
        self.mode_entered_at = now;
    }

    pub(crate) fn set_schedule(&mut self, now: Instant) {
        self.mode = ScreenMode::Schedule;
        self.last_interaction_at = now;
    }

    pub(crate) fn record_interaction(&mut self, now: Instant) {
        self.last_interaction_at = now;
    }
}
