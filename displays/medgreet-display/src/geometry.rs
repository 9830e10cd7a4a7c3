//! Pixel geometry

use medgreet_protocol::TouchPoint;

/// A pixel position; may lie off-screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset by `dx`, `dy`
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl From<TouchPoint> for Point {
    fn from(p: TouchPoint) -> Self {
        Self::new(p.x, p.y)
    }
}

/// Width and height in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl Size {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub const fn w(&self) -> i32 {
        self.width as i32
    }

    pub const fn h(&self) -> i32 {
        self.height as i32
    }
}

/// Axis-aligned rectangle given by its top-left origin and size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: u16, height: u16) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Rectangle covering a whole screen of `size`
    pub const fn from_size(size: Size) -> Self {
        Self {
            origin: Point::new(0, 0),
            size,
        }
    }

    pub const fn x(&self) -> i32 {
        self.origin.x
    }

    pub const fn y(&self) -> i32 {
        self.origin.y
    }

    /// `x + width`
    pub const fn right(&self) -> i32 {
        self.origin.x + self.size.width as i32
    }

    /// `y + height`
    pub const fn bottom(&self) -> i32 {
        self.origin.y + self.size.height as i32
    }

    pub const fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.size.width as i32 / 2,
            self.origin.y + self.size.height as i32 / 2,
        )
    }

    /// Hit test with inclusive bounds on both axes
    ///
    /// A point on `right()` or `bottom()` counts as inside.
    pub const fn contains(&self, p: Point) -> bool {
        p.x >= self.x() && p.x <= self.right() && p.y >= self.y() && p.y <= self.bottom()
    }
}
