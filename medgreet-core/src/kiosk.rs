//! One cooperative loop iteration
//!
//! [`Kiosk::poll`] drains the serial link, samples the touch panel, then
//! evaluates timers, in that order. A name that arrives in the same
//! iteration as an expired timer is applied first, so the timer check
//! sees the fresh timestamps.
//!
//! Nothing here logs. Everything worth reporting is returned in a
//! [`PollReport`] for the caller to log.

use heapless::Vec;

use medgreet_display::{DisplayBackend, DisplayError};
use medgreet_hal::{SerialRx, TouchSampler};
use medgreet_protocol::{CommandError, LineAssembler, LineError};

use crate::config::GreeterConfig;
use crate::controller::{ControllerError, ScreenController};
use crate::dispatch::InputDispatcher;
use crate::session::{exceeds_max_name, Session};
use crate::state::{Event, ScreenMode};
use crate::time::Instant;

/// Maximum events kept per poll
pub const MAX_EVENTS: usize = 8;

/// Maximum diagnostics kept per poll
pub const MAX_DIAGNOSTICS: usize = 8;

/// Serial read chunk size
const READ_CHUNK: usize = 32;

/// Upper bound on serial reads per poll, so a chatty link cannot starve
/// the touch panel and timers
const MAX_READS_PER_POLL: usize = 8;

/// Something worth logging that did not stop the loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Diagnostic {
    /// A line held no name
    EmptyName,
    /// A name was cut to `MAX_NAME_LEN` characters
    NameTruncated,
    /// A line exceeded `MAX_LINE_LEN` and was dropped
    LineOverflow,
    /// A line was not valid UTF-8 and was dropped
    InvalidUtf8,
    /// The serial port reported an error
    SerialRead,
    /// The touch controller reported an error
    TouchRead,
    /// Drawing failed; the screen state changed regardless
    Display(DisplayError),
    /// A transition was requested from a mode that does not allow it
    InvalidTransition(ScreenMode),
}

impl From<LineError> for Diagnostic {
    fn from(e: LineError) -> Self {
        match e {
            LineError::Overflow => Diagnostic::LineOverflow,
            LineError::InvalidUtf8 => Diagnostic::InvalidUtf8,
        }
    }
}

impl From<ControllerError> for Diagnostic {
    fn from(e: ControllerError) -> Self {
        match e {
            ControllerError::Command(CommandError::EmptyName) => Diagnostic::EmptyName,
            ControllerError::InvalidTransition(mode) => Diagnostic::InvalidTransition(mode),
            ControllerError::Display(e) => Diagnostic::Display(e),
        }
    }
}

/// What one poll did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PollReport {
    /// Applied events, in order
    pub events: Vec<Event, MAX_EVENTS>,
    pub diagnostics: Vec<Diagnostic, MAX_DIAGNOSTICS>,
    /// Events and diagnostics that did not fit
    pub dropped: u16,
}

impl PollReport {
    fn event(&mut self, event: Event) {
        if self.events.push(event).is_err() {
            self.dropped = self.dropped.saturating_add(1);
        }
    }

    fn diagnostic(&mut self, diagnostic: Diagnostic) {
        if self.diagnostics.push(diagnostic).is_err() {
            self.dropped = self.dropped.saturating_add(1);
        }
    }

    /// Record the outcome of a controller operation
    fn apply(&mut self, event: Event, result: Result<(), ControllerError>) {
        match result {
            Ok(()) => self.event(event),
            Err(e) => {
                if e.is_committed() {
                    self.event(event);
                }
                self.diagnostic(e.into());
            }
        }
    }

    /// Check if nothing happened
    pub fn is_empty(&self) -> bool {
        self.events.is_empty() && self.diagnostics.is_empty() && self.dropped == 0
    }
}

/// The whole kiosk: session, controller and input routing
pub struct Kiosk<B> {
    session: Session,
    controller: ScreenController<B>,
    dispatcher: InputDispatcher,
    lines: LineAssembler,
}

impl<B: DisplayBackend> Kiosk<B> {
    pub fn new(display: B, config: GreeterConfig, now: Instant) -> Self {
        Self {
            session: Session::new(now),
            controller: ScreenController::new(display, config),
            dispatcher: InputDispatcher::new(&config),
            lines: LineAssembler::new(),
        }
    }

    /// Build around an already configured controller
    pub fn with_controller(controller: ScreenController<B>, now: Instant) -> Self {
        let dispatcher = InputDispatcher::new(controller.config());
        Self {
            session: Session::new(now),
            controller,
            dispatcher,
            lines: LineAssembler::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn controller(&self) -> &ScreenController<B> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut ScreenController<B> {
        &mut self.controller
    }

    /// Draw the frame and the scan prompt
    pub fn start(&mut self) -> PollReport {
        let mut report = PollReport::default();
        if let Err(e) = self.controller.start(&mut self.session) {
            report.diagnostic(e.into());
        }
        report
    }

    /// Run one loop iteration: serial, then touch, then timers
    pub fn poll<S, T>(&mut self, serial: &mut S, touch: &mut T, now: Instant) -> PollReport
    where
        S: SerialRx,
        T: TouchSampler,
    {
        let mut report = PollReport::default();

        self.poll_serial(serial, now, &mut report);
        self.poll_touch(touch, now, &mut report);

        let outcome = self.controller.tick(&mut self.session, now);
        for event in outcome.events {
            report.event(event);
        }
        if let Some(e) = outcome.display_error {
            report.diagnostic(Diagnostic::Display(e));
        }

        report
    }

    /// Feed received bytes, applying each complete line
    pub fn feed_serial(&mut self, bytes: &[u8], now: Instant, report: &mut PollReport) {
        for &byte in bytes {
            match self.lines.feed(byte) {
                Ok(Some(line)) => self.apply_line(line.as_str(), now, report),
                Ok(None) => {}
                Err(e) => report.diagnostic(e.into()),
            }
        }
    }

    fn apply_line(&mut self, line: &str, now: Instant, report: &mut PollReport) {
        let result = self.dispatcher.handle_line(
            line,
            &mut self.controller,
            &mut self.session,
            now,
        );

        let applied = match result {
            Ok(_) => true,
            Err(e) => e.is_committed(),
        };
        if applied && exceeds_max_name(line_name(line)) {
            report.diagnostic(Diagnostic::NameTruncated);
        }
        report.apply(Event::NameReceived, result.map(|_| ()));
    }

    fn poll_serial<S: SerialRx>(&mut self, serial: &mut S, now: Instant, report: &mut PollReport) {
        let mut buf = [0u8; READ_CHUNK];
        for _ in 0..MAX_READS_PER_POLL {
            match serial.read_available(&mut buf) {
                Ok(0) => break,
                Ok(n) => self.feed_serial(&buf[..n], now, report),
                Err(_) => {
                    report.diagnostic(Diagnostic::SerialRead);
                    break;
                }
            }
        }
    }

    fn poll_touch<T: TouchSampler>(&mut self, touch: &mut T, now: Instant, report: &mut PollReport) {
        let sample = match touch.sample() {
            Ok(sample) => sample,
            Err(_) => {
                report.diagnostic(Diagnostic::TouchRead);
                return;
            }
        };

        match self
            .dispatcher
            .handle_touch(sample, &mut self.controller, &mut self.session, now)
        {
            Ok(Some(event)) => report.event(event),
            Ok(None) => {}
            Err(e) => report.apply(Event::ButtonTapped, Err(e)),
        }
    }
}

/// Name part of a line, as the controller stores it before truncation
fn line_name(line: &str) -> &str {
    medgreet_protocol::parse_name_command(line)
        .map(|command| command.name)
        .unwrap_or("")
}
