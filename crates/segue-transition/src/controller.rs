//! Gesture-driven controller for percent-driven transitions.
//!
//! The controller is a three-state machine (`Idle → Interactive → Resolved`)
//! fed with samples in the order `Began → Changed* → (Ended | Cancelled)`.
//! Every accepted `Changed` sample is forwarded to the transition context as
//! a progress update before the call returns, and the terminal sample
//! produces exactly one finish or cancel call.
//!
//! Samples that break the grammar are protocol violations: the in-flight
//! transition (if any) is cancelled so the UI returns to its pre-gesture
//! state, and the controller drops back to idle.

use std::rc::{Rc, Weak};

use segue_input::{DriveAxis, GesturePhase, GestureSample, PanGestureSource, SlideDirection};

use crate::config::{is_usable_distance, ReversalPolicy, TransitionConfig};
use crate::context::{InteractiveTransitioning, TransitionContext};
use crate::decision::{Completion, DecisionReason, SampleOutcome, TransitionDecision};
use crate::error::{ConfigurationError, ControllerState, ProtocolViolation, TransitionError};

#[derive(Clone, Copy, Debug, PartialEq)]
struct ActiveGesture {
    /// Projected translation reported at `Began`.
    origin: f32,
    total_distance: f32,
    percent_complete: f32,
}

impl ActiveGesture {
    fn raw_fraction(&self, drive: DriveAxis, sample: &GestureSample) -> f32 {
        (drive.project(sample.translation) - self.origin) / self.total_distance
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum State {
    Idle,
    Interactive(ActiveGesture),
    Resolved,
}

impl State {
    fn kind(&self) -> ControllerState {
        match self {
            State::Idle => ControllerState::Idle,
            State::Interactive(_) => ControllerState::Interactive,
            State::Resolved => ControllerState::Resolved,
        }
    }
}

/// Maps a pan gesture onto the progress of an interactive transition.
///
/// A controller is bound to one gesture source for its whole life and serves
/// one gesture at a time. Construct it with [`InteractiveTransitionController::new`]
/// or through [`InteractiveTransitionController::builder`].
///
/// ```ignore
/// let controller = InteractiveTransitionController::new(&recognizer);
/// // from the recogniser's callback:
/// controller.pump(&mut context)?;
/// ```
pub struct InteractiveTransitionController {
    source: Weak<dyn PanGestureSource>,
    drive: DriveAxis,
    config: TransitionConfig,
    state: State,
    last_decision: Option<TransitionDecision>,
}

impl InteractiveTransitionController {
    /// Creates a controller with default thresholds, driven along the
    /// source's slide direction.
    pub fn new<S: PanGestureSource + 'static>(source: &Rc<S>) -> Self {
        let drive = source.drive_axis();
        let source = Rc::downgrade(source);
        let source: Weak<dyn PanGestureSource> = source;
        Self::from_parts(source, drive, TransitionConfig::default())
    }

    pub fn builder() -> InteractiveTransitionControllerBuilder {
        InteractiveTransitionControllerBuilder::new()
    }

    fn from_parts(
        source: Weak<dyn PanGestureSource>,
        drive: DriveAxis,
        config: TransitionConfig,
    ) -> Self {
        log::debug!(
            "interactive transition controller created (slide {}, cutoff {}, flick {})",
            drive.direction().as_str(),
            config.completion_cutoff,
            config.flick_velocity
        );
        Self {
            source,
            drive,
            config,
            state: State::Idle,
            last_decision: None,
        }
    }

    pub fn state(&self) -> ControllerState {
        self.state.kind()
    }

    pub fn is_interactive(&self) -> bool {
        matches!(self.state, State::Interactive(_))
    }

    /// Current progress in `[0, 1]`. Idle controllers report 0.0; resolved
    /// ones report the progress at the moment of the decision.
    pub fn percent_complete(&self) -> f32 {
        match self.state {
            State::Idle => 0.0,
            State::Interactive(active) => active.percent_complete,
            State::Resolved => self
                .last_decision
                .map_or(0.0, |decision| decision.percent_complete),
        }
    }

    pub fn drive_axis(&self) -> DriveAxis {
        self.drive
    }

    /// Distance that maps to 100%, fixed while a gesture is interactive.
    pub fn total_distance(&self) -> Option<f32> {
        match self.state {
            State::Interactive(active) => Some(active.total_distance),
            _ => None,
        }
    }

    pub fn last_decision(&self) -> Option<TransitionDecision> {
        self.last_decision
    }

    pub fn config(&self) -> &TransitionConfig {
        &self.config
    }

    /// Feeds one recogniser report into the state machine.
    pub fn on_gesture_sample(
        &mut self,
        sample: GestureSample,
        context: &mut dyn TransitionContext,
    ) -> Result<SampleOutcome, TransitionError> {
        if !sample.is_finite() {
            return Err(self.violate(ProtocolViolation::NonFiniteSample, context));
        }

        match (self.state, sample.phase) {
            (State::Idle, GesturePhase::Began) => self.begin(&sample, context),
            (State::Interactive(active), GesturePhase::Changed) => {
                Ok(self.progress(active, &sample, context))
            }
            (State::Interactive(active), GesturePhase::Ended) => {
                Ok(self.release(active, &sample, context))
            }
            (State::Interactive(active), GesturePhase::Cancelled) => {
                let active = ActiveGesture {
                    percent_complete: active.raw_fraction(self.drive, &sample).clamp(0.0, 1.0),
                    ..active
                };
                let velocity = self.drive.project(sample.velocity);
                Ok(SampleOutcome::Resolved(self.resolve(
                    active,
                    Completion::Cancel,
                    DecisionReason::GestureCancelled,
                    velocity,
                    context,
                )))
            }
            (state, phase) => Err(self.violate(
                ProtocolViolation::UnexpectedPhase {
                    phase,
                    state: state.kind(),
                },
                context,
            )),
        }
    }

    /// Takes the source's pending report and feeds it in.
    ///
    /// Returns `Ok(None)` when the recogniser has nothing new to report, so
    /// pumping more than once per callback is harmless.
    pub fn pump(
        &mut self,
        context: &mut dyn TransitionContext,
    ) -> Result<Option<SampleOutcome>, TransitionError> {
        let Some(source) = self.source.upgrade() else {
            return Err(self.violate(ProtocolViolation::SourceDetached, context));
        };
        let sample = source.take_sample();
        drop(source);

        match sample {
            Some(sample) => self.on_gesture_sample(sample, context).map(Some),
            None => Ok(None),
        }
    }

    /// Cancels the in-flight transition from outside the gesture stream.
    ///
    /// Owners tearing down mid-gesture must call this so the context is
    /// resolved before it goes away. Returns `None` when nothing was in flight.
    pub fn force_cancel(
        &mut self,
        context: &mut dyn TransitionContext,
    ) -> Option<TransitionDecision> {
        let State::Interactive(active) = self.state else {
            return None;
        };
        Some(self.resolve(
            active,
            Completion::Cancel,
            DecisionReason::ForcedCancel,
            0.0,
            context,
        ))
    }

    /// Returns a resolved controller to idle so it can serve the next gesture.
    pub fn reset(&mut self) -> Result<(), TransitionError> {
        if self.is_interactive() {
            return Err(ProtocolViolation::ResetWhileInteractive.into());
        }
        self.state = State::Idle;
        self.last_decision = None;
        Ok(())
    }

    fn begin(
        &mut self,
        sample: &GestureSample,
        context: &mut dyn TransitionContext,
    ) -> Result<SampleOutcome, TransitionError> {
        let total_distance = self
            .config
            .total_distance
            .unwrap_or_else(|| context.container_size().extent(self.drive.axis()));

        if !is_usable_distance(total_distance) {
            log::error!(
                "cannot drive transition over a distance of {total_distance}; cancelling"
            );
            context.cancel_transition();
            self.state = State::Idle;
            return Err(ConfigurationError::InvalidTotalDistance(total_distance).into());
        }

        let origin = self.drive.project(sample.translation);
        self.last_decision = None;
        self.state = State::Interactive(ActiveGesture {
            origin,
            total_distance,
            percent_complete: 0.0,
        });
        log::debug!("interactive transition began (origin {origin}, distance {total_distance})");
        Ok(SampleOutcome::Started)
    }

    fn progress(
        &mut self,
        active: ActiveGesture,
        sample: &GestureSample,
        context: &mut dyn TransitionContext,
    ) -> SampleOutcome {
        let raw = active.raw_fraction(self.drive, sample);

        if raw < 0.0 && self.config.reversal == ReversalPolicy::CancelOnReversal {
            let active = ActiveGesture {
                percent_complete: 0.0,
                ..active
            };
            let velocity = self.drive.project(sample.velocity);
            return SampleOutcome::Resolved(self.resolve(
                active,
                Completion::Cancel,
                DecisionReason::Reversed,
                velocity,
                context,
            ));
        }

        let percent_complete = raw.clamp(0.0, 1.0);
        self.state = State::Interactive(ActiveGesture {
            percent_complete,
            ..active
        });
        log::trace!("interactive transition progress {percent_complete:.3}");
        context.update_progress(percent_complete);
        SampleOutcome::Progressed(percent_complete)
    }

    fn release(
        &mut self,
        active: ActiveGesture,
        sample: &GestureSample,
        context: &mut dyn TransitionContext,
    ) -> SampleOutcome {
        let active = ActiveGesture {
            percent_complete: active.raw_fraction(self.drive, sample).clamp(0.0, 1.0),
            ..active
        };
        let velocity = self.drive.project(sample.velocity);
        let (completion, reason) = self
            .config
            .policy()
            .decide(active.percent_complete, velocity);
        SampleOutcome::Resolved(self.resolve(active, completion, reason, velocity, context))
    }

    fn resolve(
        &mut self,
        active: ActiveGesture,
        completion: Completion,
        reason: DecisionReason,
        velocity: f32,
        context: &mut dyn TransitionContext,
    ) -> TransitionDecision {
        // Leave the interactive state before calling out.
        self.state = State::Resolved;
        match completion {
            Completion::Finish => context.finish_transition(),
            Completion::Cancel => context.cancel_transition(),
        }

        let decision = TransitionDecision {
            completion,
            reason,
            percent_complete: active.percent_complete,
            release_velocity: velocity / active.total_distance,
        };
        self.last_decision = Some(decision);
        log::debug!(
            "interactive transition resolved: {:?} ({:?}) at {:.3}",
            completion,
            reason,
            active.percent_complete
        );
        decision
    }

    fn violate(
        &mut self,
        violation: ProtocolViolation,
        context: &mut dyn TransitionContext,
    ) -> TransitionError {
        log::error!("interactive transition protocol violation: {violation}");
        if self.is_interactive() {
            context.cancel_transition();
        }
        self.state = State::Idle;
        self.last_decision = None;
        violation.into()
    }
}

impl InteractiveTransitioning for InteractiveTransitionController {
    fn on_gesture_sample(
        &mut self,
        sample: GestureSample,
        context: &mut dyn TransitionContext,
    ) -> Result<SampleOutcome, TransitionError> {
        InteractiveTransitionController::on_gesture_sample(self, sample, context)
    }

    fn is_interactive(&self) -> bool {
        InteractiveTransitionController::is_interactive(self)
    }

    fn percent_complete(&self) -> f32 {
        InteractiveTransitionController::percent_complete(self)
    }
}

impl Drop for InteractiveTransitionController {
    fn drop(&mut self) {
        if self.is_interactive() {
            log::warn!(
                "interactive transition controller dropped mid-gesture at {:.3}; \
                 call force_cancel before teardown",
                self.percent_complete()
            );
        }
    }
}

/// Builder for controllers with non-default configuration.
///
/// A gesture source is mandatory; [`build`](Self::build) reports its absence
/// as [`ConfigurationError::MissingGestureSource`].
#[derive(Default)]
pub struct InteractiveTransitionControllerBuilder {
    source: Option<Weak<dyn PanGestureSource>>,
    direction: Option<SlideDirection>,
    config: TransitionConfig,
}

impl InteractiveTransitionControllerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gesture_source<S: PanGestureSource + 'static>(mut self, source: &Rc<S>) -> Self {
        let source = Rc::downgrade(source);
        let source: Weak<dyn PanGestureSource> = source;
        self.source = Some(source);
        self
    }

    pub fn gesture_source_weak(mut self, source: Weak<dyn PanGestureSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Overrides the slide direction reported by the source.
    pub fn slide_direction(mut self, direction: SlideDirection) -> Self {
        self.direction = Some(direction);
        self
    }

    pub fn config(mut self, config: TransitionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Result<InteractiveTransitionController, ConfigurationError> {
        let source = self.source.ok_or(ConfigurationError::MissingGestureSource)?;
        self.config.validate()?;

        let direction = match self.direction {
            Some(direction) => direction,
            None => source
                .upgrade()
                .map(|source| source.slide_direction())
                .ok_or(ConfigurationError::MissingGestureSource)?,
        };

        Ok(InteractiveTransitionController::from_parts(
            source,
            DriveAxis::from_direction(direction),
            self.config,
        ))
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
