//! Screen layout
//!
//! Pure functions of the screen size. Drawing and hit-testing both use
//! these, so a button is always tested where it was drawn.

use crate::geometry::{Point, Rect, Size};

/// Width of the decorative frame around every screen
pub const BORDER_WIDTH: u16 = 10;

/// "SCHEDULE" button on the greeting screen
pub const SCHEDULE_BUTTON_SIZE: Size = Size::new(160, 40);
/// Gap between the schedule button and the bottom border
const SCHEDULE_BUTTON_MARGIN: i32 = 40;

/// "BACK" button on the schedule screen
pub const BACK_BUTTON_SIZE: Size = Size::new(120, 35);
const BACK_BUTTON_MARGIN: i32 = 10;

/// Corner radius shared by both buttons
pub const BUTTON_RADIUS: u16 = 8;

/// Area inside the border; screens clear only this
pub fn content_area(screen: Size) -> Rect {
    let b = BORDER_WIDTH as i32;
    Rect::new(
        b,
        b,
        screen.width.saturating_sub(2 * BORDER_WIDTH),
        screen.height.saturating_sub(2 * BORDER_WIDTH),
    )
}

/// Horizontal center line of the screen
pub fn center_x(screen: Size) -> i32 {
    screen.w() / 2
}

fn bottom_button(screen: Size, button: Size, margin: i32) -> Rect {
    let x = (screen.w() - button.w()) / 2;
    let y = screen.h() - BORDER_WIDTH as i32 - button.h() - margin;
    Rect::new(x, y, button.width, button.height)
}

/// Hit region of the greeting screen's "SCHEDULE" button
pub fn schedule_button(screen: Size) -> Rect {
    bottom_button(screen, SCHEDULE_BUTTON_SIZE, SCHEDULE_BUTTON_MARGIN)
}

/// Hit region of the schedule screen's "BACK" button
pub fn back_button(screen: Size) -> Rect {
    bottom_button(screen, BACK_BUTTON_SIZE, BACK_BUTTON_MARGIN)
}

/// Centers of the four corner dots of the frame
pub fn corner_dots(screen: Size) -> [Point; 4] {
    let inset = 2 * BORDER_WIDTH as i32;
    let right = screen.w() - inset;
    let bottom = screen.h() - inset;
    [
        Point::new(inset, inset),
        Point::new(right, inset),
        Point::new(inset, bottom),
        Point::new(right, bottom),
    ]
}
