//! Default thresholds for interactive transitions.
//!
//! Both values are in the units of the drive axis (logical pixels for
//! on-screen drags) and can be overridden per controller through
//! [`TransitionConfig`](crate::TransitionConfig).

/// Completion fraction at or above which a slow release finishes the
/// transition.
pub const DEFAULT_COMPLETION_CUTOFF: f32 = 0.5;

/// Release speed along the drive axis, in logical pixels per second, above
/// which the direction of the flick decides the outcome regardless of how
/// far the transition has progressed.
///
/// Well below a typical maximum fling velocity (8000 px/s) and above the
/// drift speed of a finger settling before lift-off.
pub const DEFAULT_FLICK_VELOCITY: f32 = 500.0;
