//! Recording backend for host-side tests
//!
//! Records every primitive call so tests can assert on what a screen drew
//! without a real panel.

use heapless::{String, Vec};

use crate::backend::{DisplayBackend, DisplayError, Paint, TextAlign, TextStyle};
use crate::geometry::{Point, Rect, Size};

/// Maximum recorded calls; later calls are counted but not stored
pub const MAX_OPS: usize = 512;

/// Longest text kept per recorded `draw_text`
pub const MAX_TEXT: usize = 48;

/// One recorded primitive call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOp {
    FillRect(Rect, Paint),
    DrawRect(Rect, Paint),
    FillRoundRect(Rect, Paint),
    DrawRoundRect(Rect, Paint),
    FillCircle(Point, u16, Paint),
    DrawCircle(Point, u16, Paint),
    Line(Point, Point, Paint),
    Text(String<MAX_TEXT>, Point, TextAlign, TextStyle),
}

/// `DisplayBackend` that records calls instead of drawing
#[derive(Debug, Clone)]
pub struct RecordingBackend {
    size: Size,
    ops: Vec<DrawOp, MAX_OPS>,
    dropped: usize,
    fail: bool,
}

impl RecordingBackend {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            ops: Vec::new(),
            dropped: 0,
            fail: false,
        }
    }

    /// Make every subsequent call fail with `DisplayError::Communication`
    pub fn set_failing(&mut self, fail: bool) {
        self.fail = fail;
    }

    /// Forget recorded calls
    pub fn reset(&mut self) {
        self.ops.clear();
        self.dropped = 0;
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Number of calls made, including those not stored
    pub fn call_count(&self) -> usize {
        self.ops.len() + self.dropped
    }

    /// Iterate over recorded text
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text(text, ..) => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn has_text(&self, needle: &str) -> bool {
        self.texts().any(|t| t == needle)
    }

    /// Count background fills of exactly `rect`
    pub fn clears_of(&self, rect: Rect) -> usize {
        self.ops
            .iter()
            .filter(|op| **op == DrawOp::FillRect(rect, Paint::Background))
            .count()
    }

    fn record(&mut self, op: DrawOp) -> Result<(), DisplayError> {
        if self.fail {
            return Err(DisplayError::Communication);
        }
        if self.ops.push(op).is_err() {
            self.dropped += 1;
        }
        Ok(())
    }
}

impl DisplayBackend for RecordingBackend {
    fn size(&self) -> Size {
        self.size
    }

    fn fill_rect(&mut self, rect: Rect, paint: Paint) -> Result<(), DisplayError> {
        self.record(DrawOp::FillRect(rect, paint))
    }

    fn draw_rect(&mut self, rect: Rect, paint: Paint) -> Result<(), DisplayError> {
        self.record(DrawOp::DrawRect(rect, paint))
    }

    fn fill_round_rect(
        &mut self,
        rect: Rect,
        _radius: u16,
        paint: Paint,
    ) -> Result<(), DisplayError> {
        self.record(DrawOp::FillRoundRect(rect, paint))
    }

    fn draw_round_rect(
        &mut self,
        rect: Rect,
        _radius: u16,
        paint: Paint,
    ) -> Result<(), DisplayError> {
        self.record(DrawOp::DrawRoundRect(rect, paint))
    }

    fn fill_circle(&mut self, center: Point, radius: u16, paint: Paint) -> Result<(), DisplayError> {
        self.record(DrawOp::FillCircle(center, radius, paint))
    }

    fn draw_circle(&mut self, center: Point, radius: u16, paint: Paint) -> Result<(), DisplayError> {
        self.record(DrawOp::DrawCircle(center, radius, paint))
    }

    fn draw_line(&mut self, from: Point, to: Point, paint: Paint) -> Result<(), DisplayError> {
        self.record(DrawOp::Line(from, to, paint))
    }

    fn draw_text(
        &mut self,
        text: &str,
        anchor: Point,
        align: TextAlign,
        style: TextStyle,
    ) -> Result<(), DisplayError> {
        let mut stored = String::new();
        for ch in text.chars() {
            if stored.push(ch).is_err() {
                break;
            }
        }
        self.record(DrawOp::Text(stored, anchor, align, style))
    }
}
