//! A pan recogniser whose reports are set by the test.

use std::cell::Cell;
use std::rc::Rc;

use segue_input::{GestureSample, PanGestureSource, SlideDirection};

pub struct ScriptedPanSource {
    direction: SlideDirection,
    sample: Cell<Option<GestureSample>>,
}

impl ScriptedPanSource {
    pub fn new(direction: SlideDirection) -> Rc<Self> {
        Rc::new(Self {
            direction,
            sample: Cell::new(None),
        })
    }

    /// Queues `sample` as the recogniser's pending report, replacing any
    /// report not yet taken.
    pub fn report(&self, sample: GestureSample) {
        self.sample.set(Some(sample));
    }

    /// Drops any pending report.
    pub fn clear(&self) {
        self.sample.set(None);
    }
}

impl PanGestureSource for ScriptedPanSource {
    fn slide_direction(&self) -> SlideDirection {
        self.direction
    }

    fn take_sample(&self) -> Option<GestureSample> {
        self.sample.take()
    }
}
