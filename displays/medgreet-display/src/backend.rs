//! Display backend trait
//!
//! Defines the render surface the screens draw through.

use crate::geometry::{Point, Rect};

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with display
    Communication,
    /// Text did not fit the formatting buffer
    BufferOverflow,
}

/// Palette role of a primitive
///
/// Backends map each role to a concrete color; screens never name colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Paint {
    Background,
    Border,
    BorderAccent,
    Text,
    Arrow,
    Greeting,
    Face,
    FaceFeature,
    Button,
    BackButton,
    ButtonText,
    Outline,
    Title,
    Rule,
    DoseTime,
    DoseDetail,
    PillA,
    PillB,
}

/// Relative text size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FontSize {
    Small,
    Medium,
    Large,
}

/// Which point of the text box the anchor refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextAlign {
    TopLeft,
    TopCenter,
    MiddleCenter,
}

/// Text styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TextStyle {
    pub paint: Paint,
    pub size: FontSize,
}

impl TextStyle {
    pub const fn new(paint: Paint, size: FontSize) -> Self {
        Self { paint, size }
    }
}

/// Display backend trait
///
/// Provides a hardware-agnostic interface for rendering to displays.
/// Coordinates are pixels with the origin at the top-left corner.
pub trait DisplayBackend {
    /// Screen size in pixels
    fn size(&self) -> crate::geometry::Size;

    /// Fill a rectangle
    fn fill_rect(&mut self, rect: Rect, paint: Paint) -> Result<(), DisplayError>;

    /// Draw a rectangle outline
    fn draw_rect(&mut self, rect: Rect, paint: Paint) -> Result<(), DisplayError>;

    /// Fill a rectangle with rounded corners
    fn fill_round_rect(&mut self, rect: Rect, radius: u16, paint: Paint)
        -> Result<(), DisplayError>;

    /// Draw a rounded rectangle outline
    fn draw_round_rect(&mut self, rect: Rect, radius: u16, paint: Paint)
        -> Result<(), DisplayError>;

    /// Fill a circle
    fn fill_circle(&mut self, center: Point, radius: u16, paint: Paint)
        -> Result<(), DisplayError>;

    /// Draw a circle outline
    fn draw_circle(&mut self, center: Point, radius: u16, paint: Paint)
        -> Result<(), DisplayError>;

    /// Draw a one pixel wide line
    fn draw_line(&mut self, from: Point, to: Point, paint: Paint) -> Result<(), DisplayError>;

    /// Draw text positioned by `anchor` according to `align`
    fn draw_text(
        &mut self,
        text: &str,
        anchor: Point,
        align: TextAlign,
        style: TextStyle,
    ) -> Result<(), DisplayError>;

    /// Set a single pixel
    fn draw_pixel(&mut self, point: Point, paint: Paint) -> Result<(), DisplayError> {
        self.fill_rect(Rect::new(point.x, point.y, 1, 1), paint)
    }

    /// Clear a region back to the background
    fn clear_region(&mut self, rect: Rect) -> Result<(), DisplayError> {
        self.fill_rect(rect, Paint::Background)
    }

    /// Flush buffered content to the display
    ///
    /// Displays drawn directly over SPI have nothing to flush.
    fn flush(&mut self) -> Result<(), DisplayError> {
        Ok(())
    }
}
