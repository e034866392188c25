//! Assertion helpers for transition tests.

use segue_transition::{Completion, SampleOutcome, TransitionDecision};

use crate::context::RecordingTransitionContext;

/// Assert that a value is within `tolerance` of `expected`.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that every progress update lies in `[0, 1]`.
pub fn assert_progress_in_unit_range(context: &RecordingTransitionContext, msg: &str) {
    for (index, fraction) in context.progress_updates().iter().enumerate() {
        assert!(
            (0.0..=1.0).contains(fraction),
            "{}: update #{} out of range: {}",
            msg,
            index,
            fraction
        );
    }
}

/// Assert that progress updates never go down.
pub fn assert_progress_non_decreasing(context: &RecordingTransitionContext, msg: &str) {
    let updates = context.progress_updates();
    for pair in updates.windows(2) {
        assert!(
            pair[1] >= pair[0],
            "{}: progress went backwards ({} -> {}) in {:?}",
            msg,
            pair[0],
            pair[1],
            updates
        );
    }
}

/// Assert that exactly one terminal call was made and that it was `expected`.
pub fn assert_resolved_with(context: &RecordingTransitionContext, expected: Completion, msg: &str) {
    assert_eq!(
        context.terminal_call_count(),
        1,
        "{}: expected exactly one terminal call, got {:?}",
        msg,
        context.calls()
    );
    assert_eq!(context.completion(), Some(expected), "{}", msg);
}

/// Pull the decision out of the last outcome of a played script.
pub fn final_decision(outcomes: &[SampleOutcome]) -> Option<TransitionDecision> {
    match outcomes.last() {
        Some(SampleOutcome::Resolved(decision)) => Some(*decision),
        _ => None,
    }
}
