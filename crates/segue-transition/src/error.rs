use std::fmt;

use segue_input::GesturePhase;
use thiserror::Error;

/// Observable lifecycle state of a controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ControllerState {
    /// No gesture in progress; waiting for `Began`.
    Idle,
    /// Driving a transition between `Began` and the terminal sample.
    Interactive,
    /// The terminal decision has been delivered.
    Resolved,
}

impl fmt::Display for ControllerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControllerState::Idle => f.write_str("idle"),
            ControllerState::Interactive => f.write_str("interactive"),
            ControllerState::Resolved => f.write_str("resolved"),
        }
    }
}

/// Construction-time misconfiguration. Always a caller bug.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("interactive transition controller requires a gesture source")]
    MissingGestureSource,
    #[error("completion cutoff must lie in (0, 1], got {0}")]
    InvalidCompletionCutoff(f32),
    #[error("flick velocity threshold must be finite and non-negative, got {0}")]
    InvalidFlickVelocity(f32),
    #[error("total distance must be finite and positive, got {0}")]
    InvalidTotalDistance(f32),
}

/// A sample or call arrived outside `Began → Changed* → (Ended | Cancelled)`.
///
/// The controller recovers by cancelling any in-flight transition and
/// returning to [`ControllerState::Idle`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProtocolViolation {
    #[error("{phase:?} sample received while {state}")]
    UnexpectedPhase {
        phase: GesturePhase,
        state: ControllerState,
    },
    #[error("gesture sample carries non-finite translation or velocity")]
    NonFiniteSample,
    #[error("gesture source was dropped before the controller")]
    SourceDetached,
    #[error("reset requested while a transition is still interactive")]
    ResetWhileInteractive,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransitionError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    Protocol(#[from] ProtocolViolation),
}

impl TransitionError {
    pub fn is_protocol_violation(&self) -> bool {
        matches!(self, TransitionError::Protocol(_))
    }
}
