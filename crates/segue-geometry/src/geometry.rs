//! Geometric primitives: Point, Size, Axis

use std::ops::{Add, Neg, Sub};

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    /// Returns the coordinate of this point along `axis`.
    pub fn along(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    /// Builds a point that only has a component along `axis`.
    pub fn on_axis(axis: Axis, value: f32) -> Self {
        match axis {
            Axis::Horizontal => Self::new(value, 0.0),
            Axis::Vertical => Self::new(0.0, value),
        }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Self) -> Self::Output {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Self) -> Self::Output {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Self::Output {
        Point::new(-self.x, -self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    /// Width for [`Axis::Horizontal`], height for [`Axis::Vertical`].
    pub fn extent(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }
}

/// One of the two screen axes. Screen coordinates grow rightwards and downwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_components_follow_axis() {
        let point = Point::new(3.0, -4.0);
        assert_eq!(point.along(Axis::Horizontal), 3.0);
        assert_eq!(point.along(Axis::Vertical), -4.0);
        assert_eq!(Point::on_axis(Axis::Vertical, 7.0), Point::new(0.0, 7.0));
    }

    #[test]
    fn size_extent_picks_width_or_height() {
        let size = Size::new(320.0, 568.0);
        assert_eq!(size.extent(Axis::Horizontal), 320.0);
        assert_eq!(size.extent(Axis::Vertical), 568.0);
    }

    #[test]
    fn point_arithmetic() {
        let a = Point::new(10.0, 20.0);
        let b = Point::new(4.0, 5.0);
        assert_eq!(a - b, Point::new(6.0, 15.0));
        assert_eq!(a + b, Point::new(14.0, 25.0));
        assert_eq!(-b, Point::new(-4.0, -5.0));
    }

    #[test]
    fn non_finite_points_are_detected() {
        assert!(Point::new(1.0, 2.0).is_finite());
        assert!(!Point::new(f32::NAN, 2.0).is_finite());
        assert!(!Point::new(1.0, f32::INFINITY).is_finite());
    }
}
