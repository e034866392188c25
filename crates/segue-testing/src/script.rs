//! One-dimensional gesture scripts.
//!
//! Distances and velocities are forward-positive values along the slide
//! direction; the script turns them into 2-D samples the way a recogniser
//! attached to a view would report them.

use segue_input::{DriveAxis, GesturePhase, GestureSample, SlideDirection};
use segue_transition::{
    InteractiveTransitionController, InteractiveTransitioning, SampleOutcome, TransitionContext,
    TransitionError,
};

use crate::source::ScriptedPanSource;

#[derive(Clone, Debug)]
pub struct GestureScript {
    drive: DriveAxis,
    samples: Vec<GestureSample>,
}

impl GestureScript {
    pub fn new(direction: SlideDirection) -> Self {
        Self {
            drive: DriveAxis::from_direction(direction),
            samples: Vec::new(),
        }
    }

    /// Began, one move to `distance`, then release there with `velocity`.
    pub fn swipe(direction: SlideDirection, distance: f32, velocity: f32) -> Self {
        Self::new(direction)
            .begin()
            .drag_to(distance)
            .release(distance, velocity)
    }

    pub fn begin(self) -> Self {
        self.begin_at(0.0)
    }

    pub fn begin_at(self, distance: f32) -> Self {
        self.push(GesturePhase::Began, distance, 0.0)
    }

    pub fn drag_to(self, distance: f32) -> Self {
        self.push(GesturePhase::Changed, distance, 0.0)
    }

    pub fn drag_through<I>(self, distances: I) -> Self
    where
        I: IntoIterator<Item = f32>,
    {
        distances
            .into_iter()
            .fold(self, |script, distance| script.drag_to(distance))
    }

    pub fn release(self, distance: f32, velocity: f32) -> Self {
        self.push(GesturePhase::Ended, distance, velocity)
    }

    pub fn cancel(self, distance: f32) -> Self {
        self.push(GesturePhase::Cancelled, distance, 0.0)
    }

    /// Appends a raw sample, bypassing the one-dimensional helpers.
    pub fn sample(mut self, sample: GestureSample) -> Self {
        self.samples.push(sample);
        self
    }

    pub fn samples(&self) -> &[GestureSample] {
        &self.samples
    }

    /// Feeds every sample straight into `controller`, stopping at the first
    /// error.
    pub fn play(
        &self,
        controller: &mut dyn InteractiveTransitioning,
        context: &mut dyn TransitionContext,
    ) -> Result<Vec<SampleOutcome>, TransitionError> {
        self.samples
            .iter()
            .map(|sample| controller.on_gesture_sample(*sample, context))
            .collect()
    }

    /// Reports each sample on `source` and lets the controller pump it, the
    /// way a recogniser callback would.
    pub fn play_through(
        &self,
        source: &ScriptedPanSource,
        controller: &mut InteractiveTransitionController,
        context: &mut dyn TransitionContext,
    ) -> Result<Vec<SampleOutcome>, TransitionError> {
        let mut outcomes = Vec::with_capacity(self.samples.len());
        for sample in &self.samples {
            source.report(*sample);
            if let Some(outcome) = controller.pump(context)? {
                outcomes.push(outcome);
            }
        }
        Ok(outcomes)
    }

    fn push(mut self, phase: GesturePhase, distance: f32, velocity: f32) -> Self {
        self.samples
            .push(GestureSample::along(self.drive, phase, distance, velocity));
        self
    }
}
