//! Finish/cancel decisions for released gestures.

/// Terminal outcome delivered to the transition context.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Completion {
    Finish,
    Cancel,
}

/// Why a transition resolved the way it did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DecisionReason {
    /// Slow release; progress compared against the completion cutoff.
    Cutoff,
    /// Released with a fast flick along the slide direction.
    ForwardFlick,
    /// Released with a fast flick against the slide direction.
    BackwardFlick,
    /// The recogniser reported `Cancelled`.
    GestureCancelled,
    /// The drag crossed back over its origin under
    /// [`ReversalPolicy::CancelOnReversal`](crate::ReversalPolicy::CancelOnReversal).
    Reversed,
    /// The owner tore the transition down mid-gesture.
    ForcedCancel,
}

/// The terminal decision for one gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionDecision {
    pub completion: Completion,
    pub reason: DecisionReason,
    /// Progress at the moment the decision was taken.
    pub percent_complete: f32,
    /// Release velocity along the drive axis in completion fractions per
    /// second, forward positive. Lets the animator continue at finger speed.
    pub release_velocity: f32,
}

impl TransitionDecision {
    pub fn is_finish(&self) -> bool {
        self.completion == Completion::Finish
    }

    /// Fraction the animator still has to cover to reach the chosen end.
    pub fn remaining_fraction(&self) -> f32 {
        match self.completion {
            Completion::Finish => 1.0 - self.percent_complete,
            Completion::Cancel => self.percent_complete,
        }
    }
}

/// Result of feeding one sample to a controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SampleOutcome {
    /// `Began` accepted; the controller is now interactive at 0.0.
    Started,
    /// `Changed` accepted; carries the progress delivered to the context.
    Progressed(f32),
    /// A terminal decision was delivered to the context.
    Resolved(TransitionDecision),
}

/// Release rule: a decisive flick wins, otherwise the cutoff decides.
///
/// Velocities are measured along the drive axis, forward positive. A flick
/// must be strictly faster than the threshold in either direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CompletionPolicy {
    cutoff: f32,
    flick_velocity: f32,
}

impl CompletionPolicy {
    pub fn new(cutoff: f32, flick_velocity: f32) -> Self {
        Self {
            cutoff,
            flick_velocity,
        }
    }

    pub fn cutoff(&self) -> f32 {
        self.cutoff
    }

    pub fn flick_velocity(&self) -> f32 {
        self.flick_velocity
    }

    pub fn decide(&self, percent_complete: f32, velocity: f32) -> (Completion, DecisionReason) {
        if velocity > self.flick_velocity {
            (Completion::Finish, DecisionReason::ForwardFlick)
        } else if velocity < -self.flick_velocity {
            (Completion::Cancel, DecisionReason::BackwardFlick)
        } else if percent_complete >= self.cutoff {
            (Completion::Finish, DecisionReason::Cutoff)
        } else {
            (Completion::Cancel, DecisionReason::Cutoff)
        }
    }
}
