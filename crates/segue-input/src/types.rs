use segue_geometry::Point;

use crate::direction::DriveAxis;

/// Lifecycle phase reported by a pan recogniser.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GesturePhase {
    Began,
    Changed,
    Ended,
    Cancelled,
}

/// One report from a pan recogniser.
///
/// `translation` is cumulative since the recogniser started tracking, in the
/// coordinate space of the view the recogniser is attached to. `velocity` is
/// in the same units per second.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSample {
    pub phase: GesturePhase,
    pub translation: Point,
    pub velocity: Point,
}

impl GestureSample {
    pub fn new(phase: GesturePhase, translation: Point, velocity: Point) -> Self {
        Self {
            phase,
            translation,
            velocity,
        }
    }

    pub fn began(translation: Point) -> Self {
        Self::new(GesturePhase::Began, translation, Point::ZERO)
    }

    pub fn changed(translation: Point) -> Self {
        Self::new(GesturePhase::Changed, translation, Point::ZERO)
    }

    pub fn ended(translation: Point, velocity: Point) -> Self {
        Self::new(GesturePhase::Ended, translation, velocity)
    }

    pub fn cancelled(translation: Point) -> Self {
        Self::new(GesturePhase::Cancelled, translation, Point::ZERO)
    }

    /// Builds a sample from scalar distances measured along `drive`, forward
    /// positive. Handy for recorders and tests that think in one dimension.
    pub fn along(drive: DriveAxis, phase: GesturePhase, distance: f32, velocity: f32) -> Self {
        Self::new(phase, drive.point(distance), drive.point(velocity))
    }

    /// Both translation and velocity are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.translation.is_finite() && self.velocity.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SlideDirection;

    #[test]
    fn along_projects_back_to_the_same_distance() {
        let drive = DriveAxis::from_direction(SlideDirection::Left);
        let sample = GestureSample::along(drive, GesturePhase::Ended, 120.0, -40.0);

        assert_eq!(sample.translation, Point::new(-120.0, 0.0));
        assert_eq!(drive.project(sample.translation), 120.0);
        assert_eq!(drive.project(sample.velocity), -40.0);
    }

    #[test]
    fn nan_velocity_is_not_finite() {
        let sample = GestureSample::ended(Point::new(10.0, 0.0), Point::new(f32::NAN, 0.0));
        assert!(!sample.is_finite());
    }
}
