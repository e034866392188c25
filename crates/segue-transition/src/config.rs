use crate::decision::CompletionPolicy;
use crate::error::ConfigurationError;
use crate::gesture_constants::{DEFAULT_COMPLETION_CUTOFF, DEFAULT_FLICK_VELOCITY};

/// What happens when a drag travels back past the point where it began.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ReversalPolicy {
    /// Progress is pinned at 0.0 and the gesture stays interactive.
    #[default]
    Clamp,
    /// The transition is cancelled on the first sample behind the origin.
    CancelOnReversal,
}

/// Tunables for an [`InteractiveTransitionController`](crate::InteractiveTransitionController).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionConfig {
    /// Fraction at or above which a slow release finishes. Must lie in (0, 1].
    pub completion_cutoff: f32,
    /// Release speed beyond which the flick direction decides the outcome.
    pub flick_velocity: f32,
    /// Distance that maps to 100%. `None` uses the transition container's
    /// extent along the drive axis.
    pub total_distance: Option<f32>,
    pub reversal: ReversalPolicy,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            completion_cutoff: DEFAULT_COMPLETION_CUTOFF,
            flick_velocity: DEFAULT_FLICK_VELOCITY,
            total_distance: None,
            reversal: ReversalPolicy::Clamp,
        }
    }
}

impl TransitionConfig {
    pub fn with_completion_cutoff(mut self, cutoff: f32) -> Self {
        self.completion_cutoff = cutoff;
        self
    }

    pub fn with_flick_velocity(mut self, velocity: f32) -> Self {
        self.flick_velocity = velocity;
        self
    }

    pub fn with_total_distance(mut self, distance: f32) -> Self {
        self.total_distance = Some(distance);
        self
    }

    pub fn with_reversal_policy(mut self, reversal: ReversalPolicy) -> Self {
        self.reversal = reversal;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let cutoff = self.completion_cutoff;
        if !(cutoff > 0.0 && cutoff <= 1.0) {
            return Err(ConfigurationError::InvalidCompletionCutoff(cutoff));
        }
        let velocity = self.flick_velocity;
        if !(velocity.is_finite() && velocity >= 0.0) {
            return Err(ConfigurationError::InvalidFlickVelocity(velocity));
        }
        if let Some(distance) = self.total_distance {
            if !is_usable_distance(distance) {
                return Err(ConfigurationError::InvalidTotalDistance(distance));
            }
        }
        Ok(())
    }

    pub fn policy(&self) -> CompletionPolicy {
        CompletionPolicy::new(self.completion_cutoff, self.flick_velocity)
    }
}

pub(crate) fn is_usable_distance(distance: f32) -> bool {
    distance.is_finite() && distance > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = TransitionConfig::default();
        assert_eq!(config.completion_cutoff, 0.5);
        assert_eq!(config.flick_velocity, 500.0);
        assert_eq!(config.total_distance, None);
        assert_eq!(config.reversal, ReversalPolicy::Clamp);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn policy_carries_configured_thresholds() {
        let policy = TransitionConfig::default()
            .with_completion_cutoff(0.3)
            .with_flick_velocity(800.0)
            .policy();
        assert_eq!(policy.cutoff(), 0.3);
        assert_eq!(policy.flick_velocity(), 800.0);
    }

    #[test]
    fn cutoff_outside_unit_interval_is_rejected() {
        for cutoff in [0.0, -0.1, 1.01, f32::NAN] {
            let result = TransitionConfig::default()
                .with_completion_cutoff(cutoff)
                .validate();
            assert!(
                matches!(result, Err(ConfigurationError::InvalidCompletionCutoff(_))),
                "cutoff {cutoff} should be rejected, got {result:?}"
            );
        }
        assert_eq!(
            TransitionConfig::default()
                .with_completion_cutoff(1.0)
                .validate(),
            Ok(())
        );
    }

    #[test]
    fn flick_velocity_must_be_finite_and_non_negative() {
        assert_eq!(
            TransitionConfig::default()
                .with_flick_velocity(-1.0)
                .validate(),
            Err(ConfigurationError::InvalidFlickVelocity(-1.0))
        );
        assert!(TransitionConfig::default()
            .with_flick_velocity(f32::INFINITY)
            .validate()
            .is_err());
        assert_eq!(
            TransitionConfig::default().with_flick_velocity(0.0).validate(),
            Ok(())
        );
    }

    #[test]
    fn total_distance_override_must_be_positive() {
        assert_eq!(
            TransitionConfig::default()
                .with_total_distance(0.0)
                .validate(),
            Err(ConfigurationError::InvalidTotalDistance(0.0))
        );
        assert_eq!(
            TransitionConfig::default()
                .with_total_distance(300.0)
                .validate(),
            Ok(())
        );
    }
}
