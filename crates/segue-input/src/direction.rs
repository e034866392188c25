//! Slide directions and the axis they drive.

use segue_geometry::{Axis, Point};

/// Direction a finger travels to push a transition forward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlideDirection {
    Left,
    Right,
    Up,
    Down,
}

impl SlideDirection {
    pub fn opposite(self) -> Self {
        match self {
            SlideDirection::Left => SlideDirection::Right,
            SlideDirection::Right => SlideDirection::Left,
            SlideDirection::Up => SlideDirection::Down,
            SlideDirection::Down => SlideDirection::Up,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SlideDirection::Left => "left",
            SlideDirection::Right => "right",
            SlideDirection::Up => "up",
            SlideDirection::Down => "down",
        }
    }
}

/// Signed axis that gesture translation is projected onto.
///
/// Projection yields a forward-positive distance: dragging in the slide
/// direction grows it, dragging against it shrinks it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DriveAxis {
    axis: Axis,
    reversed: bool,
}

impl DriveAxis {
    pub fn from_direction(direction: SlideDirection) -> Self {
        let (axis, reversed) = match direction {
            SlideDirection::Right => (Axis::Horizontal, false),
            SlideDirection::Left => (Axis::Horizontal, true),
            SlideDirection::Down => (Axis::Vertical, false),
            SlideDirection::Up => (Axis::Vertical, true),
        };
        Self { axis, reversed }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn direction(&self) -> SlideDirection {
        match (self.axis, self.reversed) {
            (Axis::Horizontal, false) => SlideDirection::Right,
            (Axis::Horizontal, true) => SlideDirection::Left,
            (Axis::Vertical, false) => SlideDirection::Down,
            (Axis::Vertical, true) => SlideDirection::Up,
        }
    }

    /// Signed forward distance of `point` along this axis.
    pub fn project(&self, point: Point) -> f32 {
        let value = point.along(self.axis);
        if self.reversed {
            -value
        } else {
            value
        }
    }

    /// Inverse of [`DriveAxis::project`] for points on the axis.
    pub fn point(&self, distance: f32) -> Point {
        let value = if self.reversed { -distance } else { distance };
        Point::on_axis(self.axis, value)
    }
}

impl From<SlideDirection> for DriveAxis {
    fn from(direction: SlideDirection) -> Self {
        Self::from_direction(direction)
    }
}
