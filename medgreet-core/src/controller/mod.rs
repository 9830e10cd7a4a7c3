//! Screen controller
//!
//! Applies transitions to a [`Session`] and redraws the screen through a
//! [`DisplayBackend`]. The controller owns the active [`ButtonRegion`],
//! recomputed from layout on every (re)draw, so hit-testing never sees
//! coordinates from a previous screen.
//!
//! # Errors
//!
//! A failed draw never undoes a transition. When an operation returns
//! [`ControllerError::Display`] the session change has been committed and
//! the button region recorded; only the pixels may be stale. Every other
//! error means nothing changed.

use heapless::Vec;

use medgreet_display::{
    layout, screen, DisplayBackend, DisplayError, MedicationSchedule, Point, Rect, Size,
};
use medgreet_protocol::CommandError;

use crate::config::GreeterConfig;
use crate::session::{truncate_name, Session};
use crate::state::{Event, ScreenMode};
use crate::time::Instant;

#[cfg(test)]
mod tests;

/// Which control a button region belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonKind {
    /// "SCHEDULE" on the greeting screen
    ViewSchedule,
    /// "BACK" on the schedule screen
    Back,
}

/// The single tappable area of the current screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonRegion {
    pub rect: Rect,
    pub kind: ButtonKind,
}

impl ButtonRegion {
    /// Button region for `mode` on a screen of `size`, if the mode has one
    pub fn for_mode(mode: ScreenMode, size: Size) -> Option<Self> {
        match mode {
            ScreenMode::Scan => None,
            ScreenMode::Greeting => Some(Self {
                rect: layout::schedule_button(size),
                kind: ButtonKind::ViewSchedule,
            }),
            ScreenMode::Schedule => Some(Self {
                rect: layout::back_button(size),
                kind: ButtonKind::Back,
            }),
        }
    }

    /// Inclusive hit test
    pub fn contains(&self, point: Point) -> bool {
        self.rect.contains(point)
    }
}

/// Controller errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControllerError {
    /// The name was empty after trimming
    Command(CommandError),
    /// Transition not allowed from the current mode
    InvalidTransition(ScreenMode),
    /// Drawing failed; the transition itself was applied
    Display(DisplayError),
}

impl From<CommandError> for ControllerError {
    fn from(e: CommandError) -> Self {
        ControllerError::Command(e)
    }
}

impl From<DisplayError> for ControllerError {
    fn from(e: DisplayError) -> Self {
        ControllerError::Display(e)
    }
}

impl ControllerError {
    /// Check if the requested transition was still applied
    pub fn is_committed(&self) -> bool {
        matches!(self, ControllerError::Display(_))
    }
}

/// Result of one `tick`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// Timer events that fired, in the order they were applied
    pub events: Vec<Event, 2>,
    /// First drawing failure, if any
    pub display_error: Option<DisplayError>,
}

impl TickOutcome {
    fn record(&mut self, event: Event, drawn: Result<(), DisplayError>) {
        // Capacity 2 matches the two checks in `tick`
        let _ = self.events.push(event);
        if let Err(e) = drawn {
            self.display_error.get_or_insert(e);
        }
    }

    /// Check if no timer fired
    pub fn is_idle(&self) -> bool {
        self.events.is_empty()
    }
}

/// Drives screen transitions and rendering
pub struct ScreenController<B> {
    display: B,
    config: GreeterConfig,
    schedule: MedicationSchedule,
    button: Option<ButtonRegion>,
}

impl<B: DisplayBackend> ScreenController<B> {
    pub fn new(display: B, config: GreeterConfig) -> Self {
        Self {
            display,
            config,
            schedule: MedicationSchedule::default(),
            button: None,
        }
    }

    /// Use `schedule` instead of the default on the schedule screen
    pub fn with_schedule(mut self, schedule: MedicationSchedule) -> Self {
        self.schedule = schedule;
        self
    }

    pub fn config(&self) -> &GreeterConfig {
        &self.config
    }

    pub fn backend(&self) -> &B {
        &self.display
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.display
    }

    pub fn screen_size(&self) -> Size {
        self.display.size()
    }

    /// Active button region; `None` on the scan screen
    pub fn button_region(&self) -> Option<ButtonRegion> {
        self.button
    }

    /// Draw the frame and show the scan prompt
    ///
    /// Called once at startup; later screens only redraw inside the frame.
    pub fn start(&mut self, session: &mut Session) -> Result<(), ControllerError> {
        let frame = screen::draw_frame(&mut self.display);
        let scan = self.show_scan(session);
        frame.and(scan).map_err(ControllerError::from)
    }

    /// Show the scan prompt and forget the user name
    pub fn enter_scan(&mut self, session: &mut Session) -> Result<(), ControllerError> {
        self.show_scan(session).map_err(ControllerError::from)
    }

    /// Greet `name` and restart both timers
    ///
    /// `name` is trimmed and truncated to `MAX_NAME_LEN` characters. An
    /// empty name leaves the session untouched.
    pub fn enter_greeting(
        &mut self,
        session: &mut Session,
        name: &str,
        now: Instant,
    ) -> Result<(), ControllerError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CommandError::EmptyName.into());
        }

        session.set_greeting(truncate_name(name), now);
        self.render(session).map_err(ControllerError::from)
    }

    /// Redraw the greeting and restart its refresh timer
    ///
    /// Unlike `enter_greeting` this leaves the inactivity timer alone.
    pub fn refresh_greeting(
        &mut self,
        session: &mut Session,
        now: Instant,
    ) -> Result<(), ControllerError> {
        if session.mode() != ScreenMode::Greeting {
            return Err(ControllerError::InvalidTransition(session.mode()));
        }

        session.restart_greeting_timer(now);
        self.render(session).map_err(ControllerError::from)
    }

    /// Show the schedule for the current user
    ///
    /// Only valid while a name is set, i.e. from `Greeting` or `Schedule`.
    pub fn enter_schedule(
        &mut self,
        session: &mut Session,
        now: Instant,
    ) -> Result<(), ControllerError> {
        if !session.mode().has_name() || session.user_name().is_empty() {
            return Err(ControllerError::InvalidTransition(session.mode()));
        }

        session.set_schedule(now);
        self.render(session).map_err(ControllerError::from)
    }

    /// Handle a tap at `point`
    ///
    /// Returns `Some(Event::ButtonTapped)` when the tap hit the active
    /// button; taps elsewhere are ignored. Debouncing is the caller's job.
    pub fn on_tap(
        &mut self,
        session: &mut Session,
        point: Point,
        now: Instant,
    ) -> Result<Option<Event>, ControllerError> {
        let hit = self.button.is_some_and(|region| region.contains(point));
        if !hit {
            return Ok(None);
        }

        session.record_interaction(now);
        match session.mode().transition(Event::ButtonTapped) {
            ScreenMode::Schedule => self.enter_schedule(session, now)?,
            ScreenMode::Greeting => {
                let name = session.name_buf().clone();
                self.enter_greeting(session, &name, now)?
            }
            ScreenMode::Scan => return Ok(None),
        }

        Ok(Some(Event::ButtonTapped))
    }

    /// Apply time-driven transitions
    ///
    /// The greeting refresh runs first; the inactivity check runs after it
    /// and is not affected by it, since a refresh never touches the
    /// interaction timestamp.
    pub fn tick(&mut self, session: &mut Session, now: Instant) -> TickOutcome {
        let mut outcome = TickOutcome::default();

        if session.mode() == ScreenMode::Greeting
            && now.exceeds(session.mode_entered_at(), self.config.greeting_refresh_ms)
        {
            // Mode is Greeting, so only a draw failure can come back
            let drawn = match self.refresh_greeting(session, now) {
                Err(ControllerError::Display(e)) => Err(e),
                _ => Ok(()),
            };
            outcome.record(Event::GreetingExpired, drawn);
        }

        if session.mode().is_timed()
            && now.exceeds(session.last_interaction_at(), self.config.inactivity_timeout_ms)
        {
            let drawn = self.show_scan(session);
            outcome.record(Event::InactivityExpired, drawn);
        }

        outcome
    }

    fn show_scan(&mut self, session: &mut Session) -> Result<(), DisplayError> {
        session.set_scan();
        self.render(session)
    }

    /// Record the button region for the session's mode, then draw it
    fn render(&mut self, session: &Session) -> Result<(), DisplayError> {
        let mode = session.mode();
        self.button = ButtonRegion::for_mode(mode, self.display.size());

        match (mode, self.button) {
            (ScreenMode::Greeting, Some(button)) => {
                screen::draw_greeting(&mut self.display, session.user_name(), button.rect)
            }
            (ScreenMode::Schedule, Some(button)) => screen::draw_schedule(
                &mut self.display,
                session.user_name(),
                &self.schedule,
                button.rect,
            ),
            _ => screen::draw_scan(&mut self.display),
        }
    }
}
