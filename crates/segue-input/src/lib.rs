//! Gesture input types consumed by Segue transitions.
//!
//! Nothing here recognises gestures. A platform recogniser reports phase,
//! translation and velocity; these types carry those reports and project them
//! onto the axis that drives a transition.

pub mod direction;
pub mod source;
pub mod types;

pub use direction::{DriveAxis, SlideDirection};
pub use source::PanGestureSource;
pub use types::{GesturePhase, GestureSample};

pub mod prelude {
    pub use super::direction::{DriveAxis, SlideDirection};
    pub use super::source::PanGestureSource;
    pub use super::types::{GesturePhase, GestureSample};
}
