//! Percent-driven interactive transitions for Segue
//!
//! An [`InteractiveTransitionController`] turns the samples of a pan gesture
//! into a completion fraction for an in-flight transition and, once the
//! gesture ends, decides whether that transition finishes or reverses. The
//! transition itself is animated elsewhere; the controller only drives a
//! [`TransitionContext`].

mod config;
mod context;
mod controller;
mod decision;
mod error;
pub mod gesture_constants;

pub use config::{ReversalPolicy, TransitionConfig};
pub use context::{InteractiveTransitioning, TransitionContext};
pub use controller::{InteractiveTransitionController, InteractiveTransitionControllerBuilder};
pub use decision::{
    Completion, CompletionPolicy, DecisionReason, SampleOutcome, TransitionDecision,
};
pub use error::{ConfigurationError, ControllerState, ProtocolViolation, TransitionError};

pub mod prelude {
    pub use crate::config::{ReversalPolicy, TransitionConfig};
    pub use crate::context::{InteractiveTransitioning, TransitionContext};
    pub use crate::controller::InteractiveTransitionController;
    pub use crate::decision::{Completion, DecisionReason, SampleOutcome, TransitionDecision};
    pub use crate::error::TransitionError;
    pub use segue_input::prelude::*;
}
