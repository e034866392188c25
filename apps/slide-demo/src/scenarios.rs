//! Built-in gestures the demo can replay.

use segue_geometry::Size;
use segue_input::{DriveAxis, GesturePhase, GestureSample, SlideDirection};

/// How a scenario ends.
#[derive(Clone, Copy, Debug)]
pub enum Ending {
    /// Finger lifts at the last move with this velocity (units/sec, forward positive).
    Release { velocity: f32 },
    /// The platform cancels the gesture.
    Interrupted,
    /// The owning screen goes away before the gesture ends.
    Teardown,
}

#[derive(Clone, Copy, Debug)]
pub struct Scenario {
    pub name: &'static str,
    pub summary: &'static str,
    pub direction: SlideDirection,
    pub container: Size,
    pub moves: &'static [f32],
    pub ending: Ending,
}

const PHONE: Size = Size::new(375.0, 667.0);

pub const SCENARIOS: &[Scenario] = &[
    Scenario {
        name: "tab-swipe",
        summary: "slow swipe to the next tab, lifted past halfway",
        direction: SlideDirection::Left,
        container: PHONE,
        moves: &[20.0, 70.0, 130.0, 190.0, 240.0],
        ending: Ending::Release { velocity: 120.0 },
    },
    Scenario {
        name: "flick",
        summary: "short, fast flick that completes below halfway",
        direction: SlideDirection::Right,
        container: PHONE,
        moves: &[30.0, 80.0],
        ending: Ending::Release { velocity: 1400.0 },
    },
    Scenario {
        name: "flick-back",
        summary: "long drag thrown back against the slide direction",
        direction: SlideDirection::Right,
        container: PHONE,
        moves: &[60.0, 180.0, 300.0, 260.0],
        ending: Ending::Release { velocity: -900.0 },
    },
    Scenario {
        name: "hesitate",
        summary: "drag that stalls a third of the way and lifts slowly",
        direction: SlideDirection::Up,
        container: PHONE,
        moves: &[40.0, 150.0, 210.0, 200.0],
        ending: Ending::Release { velocity: -30.0 },
    },
    Scenario {
        name: "interrupted",
        summary: "nearly complete drag cancelled by the platform",
        direction: SlideDirection::Down,
        container: PHONE,
        moves: &[100.0, 400.0, 620.0],
        ending: Ending::Interrupted,
    },
    Scenario {
        name: "teardown",
        summary: "screen dismissed while the finger is still down",
        direction: SlideDirection::Left,
        container: PHONE,
        moves: &[50.0, 140.0],
        ending: Ending::Teardown,
    },
];

pub fn find(name: &str) -> Option<&'static Scenario> {
    SCENARIOS.iter().find(|scenario| scenario.name == name)
}

impl Scenario {
    /// Samples a recogniser would report for this scenario. A teardown
    /// scenario has no terminal sample.
    pub fn samples(&self) -> Vec<GestureSample> {
        let drive = DriveAxis::from_direction(self.direction);
        let last = self.moves.last().copied().unwrap_or(0.0);

        let mut samples = Vec::with_capacity(self.moves.len() + 2);
        samples.push(GestureSample::along(drive, GesturePhase::Began, 0.0, 0.0));
        samples.extend(
            self.moves
                .iter()
                .map(|distance| GestureSample::along(drive, GesturePhase::Changed, *distance, 0.0)),
        );
        match self.ending {
            Ending::Release { velocity } => {
                samples.push(GestureSample::along(drive, GesturePhase::Ended, last, velocity));
            }
            Ending::Interrupted => {
                samples.push(GestureSample::along(drive, GesturePhase::Cancelled, last, 0.0));
            }
            Ending::Teardown => {}
        }
        samples
    }
}
