//! `DisplayBackend` over embedded-graphics
//!
//! Wraps any `DrawTarget<Color = Rgb565>` (an SPI TFT driver, a simulator,
//! a framebuffer) and maps palette roles to RGB565 colors.

use embedded_graphics::geometry::{Point as EgPoint, Size as EgSize};
use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_6X13, FONT_9X15_BOLD};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::{Rgb565, RgbColor};
use embedded_graphics::prelude::{Dimensions, DrawTarget, Primitive};
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, Rectangle, RoundedRectangle};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};
use embedded_graphics::{Drawable, Pixel};

use crate::backend::{DisplayBackend, DisplayError, FontSize, Paint, TextAlign, TextStyle};
use crate::geometry::{Point, Rect, Size};

const DARK_GREY: Rgb565 = Rgb565::new(15, 30, 15);

/// RGB565 color for a palette role
pub fn color(paint: Paint) -> Rgb565 {
    match paint {
        Paint::Background => Rgb565::WHITE,
        Paint::Border => Rgb565::BLUE,
        Paint::BorderAccent => Rgb565::RED,
        Paint::Text => Rgb565::BLACK,
        Paint::Arrow => Rgb565::RED,
        Paint::Greeting => Rgb565::RED,
        Paint::Face => Rgb565::YELLOW,
        Paint::FaceFeature => Rgb565::BLACK,
        Paint::Button => Rgb565::GREEN,
        Paint::BackButton => Rgb565::RED,
        Paint::ButtonText => Rgb565::WHITE,
        Paint::Outline => DARK_GREY,
        Paint::Title => Rgb565::BLUE,
        Paint::Rule => DARK_GREY,
        Paint::DoseTime => Rgb565::BLUE,
        Paint::DoseDetail => DARK_GREY,
        Paint::PillA => Rgb565::RED,
        Paint::PillB => Rgb565::BLUE,
    }
}

fn font(size: FontSize) -> &'static MonoFont<'static> {
    match size {
        FontSize::Small => &FONT_6X13,
        FontSize::Medium => &FONT_9X15_BOLD,
        FontSize::Large => &FONT_10X20,
    }
}

fn eg_point(p: Point) -> EgPoint {
    EgPoint::new(p.x, p.y)
}

fn eg_rect(rect: Rect) -> Rectangle {
    Rectangle::new(
        eg_point(rect.origin),
        EgSize::new(rect.size.width as u32, rect.size.height as u32),
    )
}

fn circle(center: Point, radius: u16) -> Circle {
    Circle::with_center(eg_point(center), radius as u32 * 2 + 1)
}

/// Display backend drawing through embedded-graphics
pub struct EgBackend<D> {
    target: D,
}

impl<D> EgBackend<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    pub fn new(target: D) -> Self {
        Self { target }
    }

    /// Access the wrapped draw target
    pub fn target_mut(&mut self) -> &mut D {
        &mut self.target
    }

    pub fn into_inner(self) -> D {
        self.target
    }
}

impl<D> DisplayBackend for EgBackend<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    fn size(&self) -> Size {
        let bounds = self.target.bounding_box().size;
        Size::new(bounds.width as u16, bounds.height as u16)
    }

    fn fill_rect(&mut self, rect: Rect, paint: Paint) -> Result<(), DisplayError> {
        eg_rect(rect)
            .into_styled(PrimitiveStyle::with_fill(color(paint)))
            .draw(&mut self.target)
            .map_err(|_| DisplayError::Communication)
    }

    fn draw_rect(&mut self, rect: Rect, paint: Paint) -> Result<(), DisplayError> {
        eg_rect(rect)
            .into_styled(PrimitiveStyle::with_stroke(color(paint), 1))
            .draw(&mut self.target)
            .map_err(|_| DisplayError::Communication)
    }

    fn fill_round_rect(
        &mut self,
        rect: Rect,
        radius: u16,
        paint: Paint,
    ) -> Result<(), DisplayError> {
        let corner = EgSize::new(radius as u32, radius as u32);
        RoundedRectangle::with_equal_corners(eg_rect(rect), corner)
            .into_styled(PrimitiveStyle::with_fill(color(paint)))
            .draw(&mut self.target)
            .map_err(|_| DisplayError::Communication)
    }

    fn draw_round_rect(
        &mut self,
        rect: Rect,
        radius: u16,
        paint: Paint,
    ) -> Result<(), DisplayError> {
        let corner = EgSize::new(radius as u32, radius as u32);
        RoundedRectangle::with_equal_corners(eg_rect(rect), corner)
            .into_styled(PrimitiveStyle::with_stroke(color(paint), 1))
            .draw(&mut self.target)
            .map_err(|_| DisplayError::Communication)
    }

    fn fill_circle(&mut self, center: Point, radius: u16, paint: Paint) -> Result<(), DisplayError> {
        circle(center, radius)
            .into_styled(PrimitiveStyle::with_fill(color(paint)))
            .draw(&mut self.target)
            .map_err(|_| DisplayError::Communication)
    }

    fn draw_circle(&mut self, center: Point, radius: u16, paint: Paint) -> Result<(), DisplayError> {
        circle(center, radius)
            .into_styled(PrimitiveStyle::with_stroke(color(paint), 1))
            .draw(&mut self.target)
            .map_err(|_| DisplayError::Communication)
    }

    fn draw_line(&mut self, from: Point, to: Point, paint: Paint) -> Result<(), DisplayError> {
        Line::new(eg_point(from), eg_point(to))
            .into_styled(PrimitiveStyle::with_stroke(color(paint), 1))
            .draw(&mut self.target)
            .map_err(|_| DisplayError::Communication)
    }

    fn draw_pixel(&mut self, point: Point, paint: Paint) -> Result<(), DisplayError> {
        Pixel(eg_point(point), color(paint))
            .draw(&mut self.target)
            .map_err(|_| DisplayError::Communication)
    }

    fn draw_text(
        &mut self,
        text: &str,
        anchor: Point,
        align: TextAlign,
        style: TextStyle,
    ) -> Result<(), DisplayError> {
        let (alignment, baseline) = match align {
            TextAlign::TopLeft => (Alignment::Left, Baseline::Top),
            TextAlign::TopCenter => (Alignment::Center, Baseline::Top),
            TextAlign::MiddleCenter => (Alignment::Center, Baseline::Middle),
        };
        let layout = TextStyleBuilder::new()
            .alignment(alignment)
            .baseline(baseline)
            .build();
        let character_style = MonoTextStyle::new(font(style.size), color(style.paint));

        Text::with_text_style(text, eg_point(anchor), character_style, layout)
            .draw(&mut self.target)
            .map(|_| ())
            .map_err(|_| DisplayError::Communication)
    }
}
