//! A transition context that records every call it receives.

use segue_geometry::Size;
use segue_transition::{Completion, TransitionContext};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ContextCall {
    Update(f32),
    Finish,
    Cancel,
}

/// Records progress updates and terminal calls in arrival order.
#[derive(Clone, Debug)]
pub struct RecordingTransitionContext {
    size: Size,
    calls: SmallVec<[ContextCall; 16]>,
}

impl RecordingTransitionContext {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            calls: SmallVec::new(),
        }
    }

    /// A context whose extent along either axis is `distance`.
    pub fn square(distance: f32) -> Self {
        Self::new(Size::new(distance, distance))
    }

    pub fn calls(&self) -> &[ContextCall] {
        &self.calls
    }

    pub fn progress_updates(&self) -> Vec<f32> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                ContextCall::Update(fraction) => Some(*fraction),
                _ => None,
            })
            .collect()
    }

    pub fn terminal_call_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, ContextCall::Finish | ContextCall::Cancel))
            .count()
    }

    /// The single terminal call, if exactly one was made.
    pub fn completion(&self) -> Option<Completion> {
        let mut terminal = self.calls.iter().filter_map(|call| match call {
            ContextCall::Finish => Some(Completion::Finish),
            ContextCall::Cancel => Some(Completion::Cancel),
            ContextCall::Update(_) => None,
        });
        let first = terminal.next()?;
        match terminal.next() {
            Some(_) => None,
            None => Some(first),
        }
    }
}

impl TransitionContext for RecordingTransitionContext {
    fn container_size(&self) -> Size {
        self.size
    }

    fn update_progress(&mut self, fraction: f32) {
        self.calls.push(ContextCall::Update(fraction));
    }

    fn finish_transition(&mut self) {
        self.calls.push(ContextCall::Finish);
    }

    fn cancel_transition(&mut self) {
        self.calls.push(ContextCall::Cancel);
    }
}
