use std::cell::Cell;
use std::rc::Rc;

use segue_input::{GestureSample, PanGestureSource, SlideDirection};

/// Stand-in for a platform pan recogniser: it holds whatever report the demo
/// last pushed into it.
pub struct ReplayRecognizer {
    direction: SlideDirection,
    latest: Cell<Option<GestureSample>>,
}

impl ReplayRecognizer {
    pub fn new(direction: SlideDirection) -> Rc<Self> {
        Rc::new(Self {
            direction,
            latest: Cell::new(None),
        })
    }

    pub fn deliver(&self, sample: GestureSample) {
        self.latest.set(Some(sample));
    }
}

impl PanGestureSource for ReplayRecognizer {
    fn slide_direction(&self) -> SlideDirection {
        self.direction
    }

    fn take_sample(&self) -> Option<GestureSample> {
        self.latest.take()
    }
}
