use segue_geometry::Size;
use segue_input::GestureSample;

use crate::decision::SampleOutcome;
use crate::error::TransitionError;

/// The transition being driven.
///
/// While a controller is interactive it is the only caller of the progress
/// and terminal methods. Exactly one of `finish_transition` or
/// `cancel_transition` is called per gesture.
pub trait TransitionContext {
    /// Bounds of the view the transition runs in. Its extent along the drive
    /// axis is the distance that maps to 100%.
    fn container_size(&self) -> Size;

    fn update_progress(&mut self, fraction: f32);

    fn finish_transition(&mut self);

    fn cancel_transition(&mut self);
}

/// Capability a transition coordinator holds to drive an interactive
/// transition from gesture input.
pub trait InteractiveTransitioning {
    fn on_gesture_sample(
        &mut self,
        sample: GestureSample,
        context: &mut dyn TransitionContext,
    ) -> Result<SampleOutcome, TransitionError>;

    fn is_interactive(&self) -> bool;

    fn percent_complete(&self) -> f32;
}
