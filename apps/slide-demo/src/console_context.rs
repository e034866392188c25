use segue_geometry::Size;
use segue_transition::{Completion, TransitionContext};

const BAR_WIDTH: usize = 40;

/// Transition context that renders progress as a text bar in the log.
pub struct ConsoleTransitionContext {
    name: String,
    size: Size,
    outcome: Option<Completion>,
}

impl ConsoleTransitionContext {
    pub fn new(name: impl Into<String>, size: Size) -> Self {
        Self {
            name: name.into(),
            size,
            outcome: None,
        }
    }

    pub fn outcome(&self) -> Option<Completion> {
        self.outcome
    }
}

impl TransitionContext for ConsoleTransitionContext {
    fn container_size(&self) -> Size {
        self.size
    }

    fn update_progress(&mut self, fraction: f32) {
        let filled = (fraction * BAR_WIDTH as f32).round() as usize;
        log::info!(
            "[{}] [{}{}] {:5.1}%",
            self.name,
            "#".repeat(filled),
            ".".repeat(BAR_WIDTH - filled.min(BAR_WIDTH)),
            fraction * 100.0
        );
    }

    fn finish_transition(&mut self) {
        log::info!("[{}] transition finished", self.name);
        self.outcome = Some(Completion::Finish);
    }

    fn cancel_transition(&mut self) {
        log::info!("[{}] transition cancelled", self.name);
        self.outcome = Some(Completion::Cancel);
    }
}
