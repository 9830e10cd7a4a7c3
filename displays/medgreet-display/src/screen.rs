//! Screen routines
//!
//! Each routine clears the content area and redraws one screen. Button
//! rectangles are passed in by the caller (computed with [`crate::layout`])
//! so the drawn button and the hit region can never disagree.

use core::fmt::Write;

use heapless::String;

use crate::backend::{DisplayBackend, DisplayError, FontSize, Paint, TextAlign, TextStyle};
use crate::geometry::{Point, Rect};
use crate::layout::{self, BORDER_WIDTH, BUTTON_RADIUS};
use crate::schedule::{tablet_unit, MedicationSchedule};

/// Names longer than this are drawn with the medium font
pub const LONG_NAME_CHARS: usize = 10;

/// Schedule titles longer than this are drawn with the small font
pub const LONG_TITLE_CHARS: usize = 18;

/// Scratch buffer for formatted lines
type TextBuf = String<160>;

/// Draw the static frame: background, border bars and corner dots
///
/// Called once at startup; later screens only clear inside the border.
pub fn draw_frame<B: DisplayBackend>(display: &mut B) -> Result<(), DisplayError> {
    let size = display.size();
    let b = BORDER_WIDTH;

    display.fill_rect(Rect::from_size(size), Paint::Background)?;

    display.fill_rect(Rect::new(0, 0, size.width, b), Paint::Border)?;
    display.fill_rect(
        Rect::new(0, size.h() - b as i32, size.width, b),
        Paint::Border,
    )?;
    display.fill_rect(Rect::new(0, 0, b, size.height), Paint::Border)?;
    display.fill_rect(
        Rect::new(size.w() - b as i32, 0, b, size.height),
        Paint::Border,
    )?;

    for dot in layout::corner_dots(size) {
        display.fill_circle(dot, b, Paint::BorderAccent)?;
    }

    Ok(())
}

/// Draw the "SCAN HERE:" prompt with a downward arrow
pub fn draw_scan<B: DisplayBackend>(display: &mut B) -> Result<(), DisplayError> {
    let size = display.size();
    display.clear_region(layout::content_area(size))?;

    let style = TextStyle::new(Paint::Text, FontSize::Large);
    let x = layout::center_x(size);
    let mut y = size.h() / 3;

    display.draw_text("SCAN", Point::new(x, y), TextAlign::MiddleCenter, style)?;
    y += 60;
    display.draw_text("HERE:", Point::new(x, y), TextAlign::MiddleCenter, style)?;

    // Arrow: shaft, then a head narrowing downwards
    let arrow_y = y + 70;
    let arrow_width = 40;
    let arrow_height = 50;

    display.fill_rect(Rect::new(x - 5, arrow_y, 10, arrow_height as u16), Paint::Arrow)?;
    for i in 0..arrow_width / 2 {
        let row = arrow_y + arrow_height - 2 * i;
        display.draw_line(Point::new(x - i, row), Point::new(x + i, row), Paint::Arrow)?;
    }

    display.flush()
}

/// Draw the personalized greeting with the "SCHEDULE" button
pub fn draw_greeting<B: DisplayBackend>(
    display: &mut B,
    name: &str,
    button: Rect,
) -> Result<(), DisplayError> {
    let size = display.size();
    display.clear_region(layout::content_area(size))?;

    let x = layout::center_x(size);
    let mut y = size.h() / 4;

    display.draw_text(
        "Hello,",
        Point::new(x, y),
        TextAlign::MiddleCenter,
        TextStyle::new(Paint::Greeting, FontSize::Large),
    )?;

    let name_size = if name.chars().count() > LONG_NAME_CHARS {
        FontSize::Medium
    } else {
        FontSize::Large
    };
    y += 50;
    display.draw_text(
        name,
        Point::new(x, y),
        TextAlign::MiddleCenter,
        TextStyle::new(Paint::Greeting, name_size),
    )?;

    draw_smiley(display, Point::new(x, y + 60))?;
    draw_button(display, button, Paint::Button, "SCHEDULE", FontSize::Medium)?;

    display.flush()
}

fn draw_smiley<B: DisplayBackend>(display: &mut B, center: Point) -> Result<(), DisplayError> {
    display.fill_circle(center, 30, Paint::Face)?;
    display.draw_circle(center, 30, Paint::FaceFeature)?;

    display.fill_circle(center.offset(-12, -8), 6, Paint::FaceFeature)?;
    display.fill_circle(center.offset(12, -8), 6, Paint::FaceFeature)?;

    for i in -15..=15 {
        let dy = 10 - (i * i) / 20;
        display.draw_pixel(center.offset(i, dy), Paint::FaceFeature)?;
        display.draw_pixel(center.offset(i, dy + 1), Paint::FaceFeature)?;
    }

    Ok(())
}

fn draw_button<B: DisplayBackend>(
    display: &mut B,
    button: Rect,
    fill: Paint,
    label: &str,
    font: FontSize,
) -> Result<(), DisplayError> {
    display.fill_round_rect(button, BUTTON_RADIUS, fill)?;
    display.draw_round_rect(button, BUTTON_RADIUS, Paint::Outline)?;
    display.draw_text(
        label,
        button.center(),
        TextAlign::MiddleCenter,
        TextStyle::new(Paint::ButtonText, font),
    )
}

/// Draw the medication schedule with the "BACK" button
pub fn draw_schedule<B: DisplayBackend>(
    display: &mut B,
    name: &str,
    schedule: &MedicationSchedule,
    button: Rect,
) -> Result<(), DisplayError> {
    let size = display.size();
    let b = BORDER_WIDTH as i32;
    display.clear_region(layout::content_area(size))?;

    let mut title = TextBuf::new();
    write!(title, "{}'s Medication", name).map_err(|_| DisplayError::BufferOverflow)?;

    let long_title = title.chars().count() > LONG_TITLE_CHARS;
    let title_font = if long_title {
        FontSize::Small
    } else {
        FontSize::Medium
    };

    let x = layout::center_x(size);
    let mut y = b + 5;
    display.draw_text(
        &title,
        Point::new(x, y),
        TextAlign::TopCenter,
        TextStyle::new(Paint::Title, title_font),
    )?;

    let rule_y = if long_title { y + 20 } else { y + 30 };
    display.draw_line(
        Point::new(b + 20, rule_y),
        Point::new(size.w() - b - 20, rule_y),
        Paint::Rule,
    )?;

    y = rule_y + 10;
    let left = b + 15;
    let line_height = 20;
    let time_style = TextStyle::new(Paint::DoseTime, FontSize::Medium);
    let detail_style = TextStyle::new(Paint::DoseDetail, FontSize::Small);

    for slot in schedule.slots() {
        display.draw_text(slot.time, Point::new(left, y), TextAlign::TopLeft, time_style)?;
        y += 25;

        for (pill, count) in [("A", slot.pill_a), ("B", slot.pill_b)] {
            let mut line = TextBuf::new();
            write!(line, "Pill {}: {} {}", pill, count, tablet_unit(count))
                .map_err(|_| DisplayError::BufferOverflow)?;
            display.draw_text(&line, Point::new(left + 10, y), TextAlign::TopLeft, detail_style)?;
            y += line_height;
        }
        y += 5;
    }

    draw_pill_icon(display, Point::new(size.w() - 50, 100), Paint::PillA, "A")?;
    draw_pill_icon(display, Point::new(size.w() - 50, 185), Paint::PillB, "B")?;

    draw_button(display, button, Paint::BackButton, "BACK", FontSize::Small)?;

    display.flush()
}

/// Capsule-shaped pill with a letter label
fn draw_pill_icon<B: DisplayBackend>(
    display: &mut B,
    center: Point,
    paint: Paint,
    letter: &str,
) -> Result<(), DisplayError> {
    let (w, h) = (30u16, 15u16);
    let capsule = Rect::new(center.x - w as i32 / 2, center.y - h as i32 / 2, w, h);

    display.fill_round_rect(capsule, h / 2, paint)?;
    display.draw_round_rect(capsule, h / 2, Paint::FaceFeature)?;
    display.draw_text(
        letter,
        center,
        TextAlign::MiddleCenter,
        TextStyle::new(Paint::ButtonText, FontSize::Small),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Size;
    use crate::mock::{DrawOp, RecordingBackend};
    use crate::schedule::DEFAULT_SCHEDULE;

    const PORTRAIT: Size = Size::new(240, 320);

    fn text_style_of(display: &RecordingBackend, needle: &str) -> Option<TextStyle> {
        display.ops().iter().find_map(|op| match op {
            DrawOp::Text(text, _, _, style) if text.as_str() == needle => Some(*style),
            _ => None,
        })
    }

    #[test]
    fn test_frame_draws_border_and_dots() {
        let mut display = RecordingBackend::new(PORTRAIT);
        draw_frame(&mut display).unwrap();

        let bars = display
            .ops()
            .iter()
            .filter(|op| matches!(op, DrawOp::FillRect(_, Paint::Border)))
            .count();
        let dots = display
            .ops()
            .iter()
            .filter(|op| matches!(op, DrawOp::FillCircle(_, _, Paint::BorderAccent)))
            .count();
        assert_eq!(bars, 4);
        assert_eq!(dots, 4);
    }

    #[test]
    fn test_scan_clears_content_only() {
        let mut display = RecordingBackend::new(PORTRAIT);
        draw_scan(&mut display).unwrap();

        assert_eq!(display.clears_of(layout::content_area(PORTRAIT)), 1);
        assert_eq!(display.clears_of(Rect::from_size(PORTRAIT)), 0);
        assert!(display.has_text("SCAN"));
        assert!(display.has_text("HERE:"));
    }

    #[test]
    fn test_greeting_draws_name_and_button() {
        let mut display = RecordingBackend::new(PORTRAIT);
        let button = layout::schedule_button(PORTRAIT);
        draw_greeting(&mut display, "Ada", button).unwrap();

        assert!(display.has_text("Hello,"));
        assert!(display.has_text("Ada"));
        assert!(display.has_text("SCHEDULE"));
        assert!(display
            .ops()
            .contains(&DrawOp::FillRoundRect(button, Paint::Button)));
        assert_eq!(text_style_of(&display, "Ada").unwrap().size, FontSize::Large);
    }

    #[test]
    fn test_long_name_uses_smaller_font() {
        let mut display = RecordingBackend::new(PORTRAIT);
        draw_greeting(&mut display, "Bartholomew", layout::schedule_button(PORTRAIT)).unwrap();
        assert_eq!(
            text_style_of(&display, "Bartholomew").unwrap().size,
            FontSize::Medium
        );
    }

    #[test]
    fn test_schedule_lists_every_dose() {
        let mut display = RecordingBackend::new(PORTRAIT);
        let button = layout::back_button(PORTRAIT);
        draw_schedule(&mut display, "Ben", &DEFAULT_SCHEDULE, button).unwrap();

        assert!(display.has_text("Ben's Medication"));
        assert!(display.has_text("8:00 AM"));
        assert!(display.has_text("1:00 PM"));
        assert!(display.has_text("8:00 PM"));
        assert!(display.has_text("Pill A: 2 tablets"));
        assert!(display.has_text("Pill B: 1 tablet"));
        assert!(display.has_text("Pill B: 0 tablets"));
        assert!(display.has_text("BACK"));
        assert!(display
            .ops()
            .contains(&DrawOp::FillRoundRect(button, Paint::BackButton)));
        assert_eq!(
            text_style_of(&display, "Ben's Medication").unwrap().size,
            FontSize::Medium
        );
    }

    #[test]
    fn test_long_title_uses_small_font() {
        let mut display = RecordingBackend::new(PORTRAIT);
        draw_schedule(
            &mut display,
            "Alexandria",
            &DEFAULT_SCHEDULE,
            layout::back_button(PORTRAIT),
        )
        .unwrap();
        assert_eq!(
            text_style_of(&display, "Alexandria's Medication").unwrap().size,
            FontSize::Small
        );
    }

    #[test]
    fn test_backend_error_propagates() {
        let mut display = RecordingBackend::new(PORTRAIT);
        display.set_failing(true);
        assert_eq!(draw_scan(&mut display), Err(DisplayError::Communication));
    }
}
