//! The recogniser-facing seam.

use crate::direction::{DriveAxis, SlideDirection};
use crate::types::GestureSample;

/// A pan recogniser as seen by a transition controller.
///
/// The controller never owns a source. It keeps a weak association and takes
/// the recogniser's pending report when asked to.
pub trait PanGestureSource {
    /// Direction that drives the transition forward, as configured on the
    /// recogniser's attached view.
    fn slide_direction(&self) -> SlideDirection;

    /// Hands over the latest report not yet taken, or `None` while nothing
    /// new has been reported. Each report is handed over at most once.
    fn take_sample(&self) -> Option<GestureSample>;

    fn drive_axis(&self) -> DriveAxis {
        DriveAxis::from_direction(self.slide_direction())
    }
}
