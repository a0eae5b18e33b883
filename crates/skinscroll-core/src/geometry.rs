//! Geometric primitives: Point, Size, Rect, Axes.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A 2D point with x and y coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
}

impl Point {
    /// Origin point (0, 0)
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Component along `axis`.
    #[must_use]
    pub const fn along(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    /// Copy with the component along `axis` replaced.
    #[must_use]
    pub const fn with_along(mut self, axis: Axis, value: f32) -> Self {
        match axis {
            Axis::Horizontal => self.x = value,
            Axis::Vertical => self.y = value,
        }
        self
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// A 2D size with width and height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Size {
    /// Zero size
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Create a new size.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Extent along `axis`.
    #[must_use]
    pub const fn along(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Copy with the extent along `axis` replaced.
    #[must_use]
    pub const fn with_along(mut self, axis: Axis, value: f32) -> Self {
        match axis {
            Axis::Horizontal => self.width = value,
            Axis::Vertical => self.height = value,
        }
        self
    }

    /// Check if this size can contain another size.
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        self.width >= other.width && self.height >= other.height
    }

    /// Whole-pixel dimensions, rounding to nearest and flooring at zero.
    #[must_use]
    pub fn to_pixels(&self) -> (u32, u32) {
        (
            self.width.max(0.0).round() as u32,
            self.height.max(0.0).round() as u32,
        )
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::ZERO
    }
}

/// A rectangle defined by position and size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// X position of top-left corner
    pub x: f32,
    /// Y position of top-left corner
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create from size at origin.
    #[must_use]
    pub const fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    /// Get the origin (top-left) point.
    #[must_use]
    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Get the size.
    #[must_use]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Check if a point is inside the rectangle (inclusive).
    #[must_use]
    pub fn contains_point(&self, point: &Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    /// Create a new rectangle with the given position.
    #[must_use]
    pub const fn with_origin(&self, origin: Point) -> Self {
        Self::new(origin.x, origin.y, self.width, self.height)
    }

    /// Create a new rectangle with the given size.
    #[must_use]
    pub const fn with_size(&self, size: Size) -> Self {
        Self::new(self.x, self.y, size.width, size.height)
    }

    /// Map a point from this rectangle's parent space into its local space.
    #[must_use]
    pub fn to_local(&self, point: Point) -> Point {
        point - self.origin()
    }
}

impl Default for Rect {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
}

/// One of the two layout axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// The x axis
    Horizontal,
    /// The y axis
    Vertical,
}

impl Axis {
    /// Both axes, horizontal first.
    pub const BOTH: [Self; 2] = [Self::Horizontal, Self::Vertical];
}

/// A pair of per-axis flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Axes {
    /// Flag for the horizontal axis
    pub x: bool,
    /// Flag for the vertical axis
    pub y: bool,
}

impl Axes {
    /// Both axes set.
    pub const BOTH: Self = Self { x: true, y: true };
    /// Neither axis set.
    pub const NONE: Self = Self { x: false, y: false };
    /// Only the horizontal axis set.
    pub const HORIZONTAL: Self = Self { x: true, y: false };
    /// Only the vertical axis set.
    pub const VERTICAL: Self = Self { x: false, y: true };

    /// Create a new flag pair.
    #[must_use]
    pub const fn new(x: bool, y: bool) -> Self {
        Self { x, y }
    }

    /// Flag for `axis`.
    #[must_use]
    pub const fn get(&self, axis: Axis) -> bool {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    /// Set the flag for `axis`.
    pub fn set(&mut self, axis: Axis, value: bool) {
        match axis {
            Axis::Horizontal => self.x = value,
            Axis::Vertical => self.y = value,
        }
    }

    /// True if either flag is set.
    #[must_use]
    pub const fn any(&self) -> bool {
        self.x || self.y
    }
}

impl Default for Axes {
    fn default() -> Self {
        Self::BOTH
    }
}

/// Keep a span `[start, start + size)` inside `[low, high]`.
///
/// A span that starts before `low` snaps to `low`; one that ends past `high`
/// snaps so that it ends at `high`. When the span is larger than the range,
/// `low` wins.
#[must_use]
pub fn limit_move(start: f32, size: f32, low: f32, high: f32) -> f32 {
    if start + size > high {
        (high - size).max(low)
    } else {
        start.max(low)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_point_default() {
        assert_eq!(Point::default(), Point::ORIGIN);
    }

    #[test]
    fn test_point_along() {
        let p = Point::new(3.0, 7.0);
        assert_eq!(p.along(Axis::Horizontal), 3.0);
        assert_eq!(p.along(Axis::Vertical), 7.0);
        assert_eq!(p.with_along(Axis::Vertical, 1.0), Point::new(3.0, 1.0));
    }

    #[test]
    fn test_size_default() {
        assert_eq!(Size::default(), Size::ZERO);
    }

    #[test]
    fn test_size_to_pixels_rounds_and_floors() {
        assert_eq!(Size::new(10.4, 19.6).to_pixels(), (10, 20));
        assert_eq!(Size::new(-3.0, 0.0).to_pixels(), (0, 0));
    }

    #[test]
    fn test_rect_contains_point_inclusive() {
        let r = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert!(r.contains_point(&Point::new(10.0, 10.0)));
        assert!(r.contains_point(&Point::new(30.0, 30.0)));
        assert!(!r.contains_point(&Point::new(30.1, 15.0)));
    }

    #[test]
    fn test_rect_to_local() {
        let r = Rect::new(5.0, 8.0, 10.0, 10.0);
        assert_eq!(r.to_local(Point::new(6.0, 9.0)), Point::new(1.0, 1.0));
    }

    #[test]
    fn test_axes_get_set() {
        let mut a = Axes::NONE;
        assert!(!a.any());
        a.set(Axis::Vertical, true);
        assert_eq!(a, Axes::VERTICAL);
        assert!(a.get(Axis::Vertical));
        assert!(!a.get(Axis::Horizontal));
    }

    #[test]
    fn test_limit_move() {
        assert_eq!(limit_move(-5.0, 10.0, 0.0, 100.0), 0.0);
        assert_eq!(limit_move(95.0, 10.0, 0.0, 100.0), 90.0);
        assert_eq!(limit_move(40.0, 10.0, 0.0, 100.0), 40.0);
        assert_eq!(limit_move(40.0, 200.0, 0.0, 100.0), 0.0);
    }

    proptest! {
        #[test]
        fn prop_limit_move_stays_in_range(
            start in -500.0f32..500.0,
            size in 0.0f32..100.0,
            high in 100.0f32..400.0,
        ) {
            let pos = limit_move(start, size, 0.0, high);
            prop_assert!(pos >= 0.0);
            prop_assert!(pos + size <= high + 1e-3);
        }
    }
}
