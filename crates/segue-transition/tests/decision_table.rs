//! Release decisions for a 300-unit transition with a 500 units/sec flick
//! threshold, dragging to the right.

use segue_input::SlideDirection;
use segue_testing::{
    assert_approx_eq, assert_resolved_with, final_decision, GestureScript,
    RecordingTransitionContext,
};
use segue_transition::{
    Completion, DecisionReason, InteractiveTransitionController, TransitionConfig,
    TransitionDecision,
};

const DISTANCE: f32 = 300.0;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn run(script: GestureScript) -> (TransitionDecision, RecordingTransitionContext) {
    init_logging();
    let source = segue_testing::ScriptedPanSource::new(SlideDirection::Right);
    let mut controller = InteractiveTransitionController::builder()
        .gesture_source(&source)
        .config(
            TransitionConfig::default()
                .with_completion_cutoff(0.5)
                .with_flick_velocity(500.0),
        )
        .build()
        .expect("valid controller");
    let mut context = RecordingTransitionContext::square(DISTANCE);

    let outcomes = script
        .play(&mut controller, &mut context)
        .expect("script follows the gesture grammar");
    let decision = final_decision(&outcomes).expect("script ends with a decision");
    (decision, context)
}

#[test]
fn two_thirds_at_rest_finishes() {
    let (decision, context) = run(GestureScript::swipe(SlideDirection::Right, 200.0, 0.0));

    assert_approx_eq(decision.percent_complete, 0.667, 0.001, "percent at release");
    assert_eq!(decision.reason, DecisionReason::Cutoff);
    assert_resolved_with(&context, Completion::Finish, "200 at rest");
}

#[test]
fn one_third_with_forward_flick_finishes() {
    let (decision, context) = run(GestureScript::swipe(SlideDirection::Right, 100.0, 600.0));

    assert_approx_eq(decision.percent_complete, 0.333, 0.001, "percent at release");
    assert_eq!(decision.reason, DecisionReason::ForwardFlick);
    assert_resolved_with(&context, Completion::Finish, "100 with forward flick");
}

#[test]
fn two_thirds_with_backward_flick_cancels() {
    let (decision, context) = run(GestureScript::swipe(SlideDirection::Right, 200.0, -600.0));

    assert_eq!(decision.reason, DecisionReason::BackwardFlick);
    assert_approx_eq(decision.release_velocity, -2.0, 0.0001, "fractions per second");
    assert_resolved_with(&context, Completion::Cancel, "200 with backward flick");
}

#[test]
fn one_sixth_at_rest_cancels() {
    let (decision, context) = run(GestureScript::swipe(SlideDirection::Right, 50.0, 0.0));

    assert_approx_eq(decision.percent_complete, 0.167, 0.001, "percent at release");
    assert_eq!(decision.reason, DecisionReason::Cutoff);
    assert_resolved_with(&context, Completion::Cancel, "50 at rest");
}

#[test]
fn cancelled_gesture_cancels_regardless_of_progress() {
    for distance in [0.0, 150.0, 299.0, 300.0, 450.0] {
        let (decision, context) = run(GestureScript::new(SlideDirection::Right)
            .begin()
            .drag_to(distance)
            .cancel(distance));

        assert_eq!(decision.reason, DecisionReason::GestureCancelled);
        assert_resolved_with(&context, Completion::Cancel, "cancelled gesture");
    }
}

#[test]
fn release_without_intermediate_moves_uses_release_translation() {
    let (decision, context) = run(GestureScript::new(SlideDirection::Right)
        .begin()
        .release(200.0, 0.0));

    assert_approx_eq(decision.percent_complete, 0.667, 0.001, "percent at release");
    assert!(context.progress_updates().is_empty());
    assert_resolved_with(&context, Completion::Finish, "direct release");
}

#[test]
fn full_distance_maps_to_exactly_one() {
    init_logging();
    let source = segue_testing::ScriptedPanSource::new(SlideDirection::Right);
    let mut controller = InteractiveTransitionController::new(&source);
    let mut context = RecordingTransitionContext::square(DISTANCE);

    GestureScript::new(SlideDirection::Right)
        .begin()
        .drag_to(DISTANCE)
        .play(&mut controller, &mut context)
        .expect("valid prefix");

    assert_eq!(controller.percent_complete(), 1.0);
    assert_eq!(context.progress_updates(), vec![1.0]);
    controller.force_cancel(&mut context);
}

#[test]
fn same_rules_apply_for_every_slide_direction() {
    init_logging();
    for direction in [
        SlideDirection::Left,
        SlideDirection::Right,
        SlideDirection::Up,
        SlideDirection::Down,
    ] {
        let source = segue_testing::ScriptedPanSource::new(direction);
        let mut controller = InteractiveTransitionController::new(&source);
        let mut context = RecordingTransitionContext::square(DISTANCE);

        let outcomes = GestureScript::swipe(direction, 100.0, 600.0)
            .play(&mut controller, &mut context)
            .expect("valid script");

        let decision = final_decision(&outcomes).expect("decision");
        assert_eq!(decision.reason, DecisionReason::ForwardFlick, "{direction:?}");
        assert_resolved_with(&context, Completion::Finish, direction.as_str());
    }
}

#[test]
fn dragging_against_the_slide_direction_never_finishes_slowly() {
    init_logging();
    let direction = SlideDirection::Left;
    let source = segue_testing::ScriptedPanSource::new(direction);
    let mut controller = InteractiveTransitionController::new(&source);
    let mut context = RecordingTransitionContext::square(DISTANCE);

    GestureScript::swipe(direction.opposite(), 250.0, 0.0)
        .play(&mut controller, &mut context)
        .expect("valid script");

    assert_eq!(context.progress_updates(), vec![0.0]);
    assert_resolved_with(&context, Completion::Cancel, "opposite drag");
}
