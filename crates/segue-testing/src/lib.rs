//! Testing utilities and harness for Segue

pub mod assertions;
pub mod context;
pub mod script;
pub mod source;

pub use assertions::*;
pub use context::{ContextCall, RecordingTransitionContext};
pub use script::GestureScript;
pub use source::ScriptedPanSource;

pub mod prelude {
    pub use crate::assertions;
    pub use crate::context::{ContextCall, RecordingTransitionContext};
    pub use crate::script::GestureScript;
    pub use crate::source::ScriptedPanSource;
}
