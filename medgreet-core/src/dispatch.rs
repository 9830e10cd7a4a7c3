//! Input dispatcher
//!
//! Turns serial lines into greetings and touch samples into taps, and
//! forwards them to the [`ScreenController`].
//!
//! Taps are debounced without blocking: a tap is only recognised on the
//! press edge (no touch, then touch), and after a tap that hit a button
//! further taps are ignored for `tap_cooldown_ms`.

use medgreet_display::DisplayBackend;
use medgreet_protocol::{parse_name_command, RawTouch, TouchPoint};

use crate::config::{GreeterConfig, TouchCalibration};
use crate::controller::{ControllerError, ScreenController};
use crate::session::Session;
use crate::state::Event;
use crate::time::Instant;

/// Routes raw input to the screen controller
#[derive(Debug, Clone)]
pub struct InputDispatcher {
    calibration: TouchCalibration,
    cooldown_ms: u32,
    /// Panel was pressed at the previous sample
    pressed: bool,
    /// Time of the last tap that hit a button
    last_tap: Option<Instant>,
}

impl InputDispatcher {
    pub fn new(config: &GreeterConfig) -> Self {
        Self {
            calibration: config.touch,
            cooldown_ms: config.tap_cooldown_ms,
            pressed: false,
            last_tap: None,
        }
    }

    /// Map a raw sample to screen pixels using the configured calibration
    pub fn map_touch(&self, raw: RawTouch, width: u16, height: u16) -> TouchPoint {
        self.calibration.map(raw, width, height)
    }

    /// Check if a tap at `now` falls inside the post-tap cooldown
    pub fn in_cooldown(&self, now: Instant) -> bool {
        match self.last_tap {
            Some(last) => now.elapsed_since(last) < self.cooldown_ms,
            None => false,
        }
    }

    /// Apply one complete serial line
    ///
    /// Accepts `NAME:<name>` or a bare name. Returns the event that was
    /// applied; an empty line is rejected and changes nothing.
    pub fn handle_line<B: DisplayBackend>(
        &mut self,
        line: &str,
        controller: &mut ScreenController<B>,
        session: &mut Session,
        now: Instant,
    ) -> Result<Event, ControllerError> {
        let command = parse_name_command(line)?;
        controller.enter_greeting(session, command.name, now)?;
        Ok(Event::NameReceived)
    }

    /// Apply one touch sample (`None` when the panel is not pressed)
    pub fn handle_touch<B: DisplayBackend>(
        &mut self,
        sample: Option<RawTouch>,
        controller: &mut ScreenController<B>,
        session: &mut Session,
        now: Instant,
    ) -> Result<Option<Event>, ControllerError> {
        let Some(raw) = sample else {
            self.pressed = false;
            return Ok(None);
        };

        let edge = !self.pressed;
        self.pressed = true;
        if !edge || self.in_cooldown(now) {
            return Ok(None);
        }

        let size = controller.screen_size();
        let point = self.map_touch(raw, size.width, size.height);
        let result = controller.on_tap(session, point.into(), now);

        let hit = match &result {
            Ok(event) => event.is_some(),
            Err(e) => e.is_committed(),
        };
        if hit {
            self.last_tap = Some(now);
        }

        result
    }
}
