use segue_input::SlideDirection;
use segue_testing::{
    assert_resolved_with, final_decision, ContextCall, GestureScript, RecordingTransitionContext,
    ScriptedPanSource,
};
use segue_transition::{
    Completion, ControllerState, DecisionReason, InteractiveTransitionController,
    ProtocolViolation, SampleOutcome, TransitionError,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn recogniser_callbacks_drive_the_transition() {
    init_logging();
    let source = ScriptedPanSource::new(SlideDirection::Left);
    let mut controller = InteractiveTransitionController::new(&source);
    let mut context = RecordingTransitionContext::square(400.0);

    let outcomes = GestureScript::new(SlideDirection::Left)
        .begin()
        .drag_through([40.0, 120.0, 260.0])
        .release(260.0, 0.0)
        .play_through(&source, &mut controller, &mut context)
        .expect("valid gesture");

    assert_eq!(outcomes.len(), 5);
    assert_eq!(context.progress_updates(), vec![0.1, 0.3, 0.65]);
    assert_resolved_with(&context, Completion::Finish, "left swipe past half");
    assert_eq!(controller.state(), ControllerState::Resolved);
}

#[test]
fn idle_recogniser_reports_nothing() {
    init_logging();
    let source = ScriptedPanSource::new(SlideDirection::Right);
    let mut controller = InteractiveTransitionController::new(&source);
    let mut context = RecordingTransitionContext::square(300.0);

    assert_eq!(controller.pump(&mut context), Ok(None));
    source.report(segue_input::GestureSample::began(segue_geometry::Point::ZERO));
    assert_eq!(
        controller.pump(&mut context),
        Ok(Some(SampleOutcome::Started))
    );
    assert_eq!(controller.pump(&mut context), Ok(None));
    assert!(controller.is_interactive());
    assert!(context.calls().is_empty());
    controller.force_cancel(&mut context);
}

#[test]
fn pumping_twice_per_callback_does_not_replay_began() {
    init_logging();
    let source = ScriptedPanSource::new(SlideDirection::Right);
    let mut controller = InteractiveTransitionController::new(&source);
    let mut context = RecordingTransitionContext::square(300.0);

    source.report(segue_input::GestureSample::began(segue_geometry::Point::ZERO));
    assert_eq!(
        controller.pump(&mut context),
        Ok(Some(SampleOutcome::Started))
    );
    assert_eq!(controller.pump(&mut context), Ok(None));
    assert_eq!(controller.state(), ControllerState::Interactive);
    assert_eq!(context.terminal_call_count(), 0);

    GestureScript::new(SlideDirection::Right)
        .drag_to(150.0)
        .release(150.0, 0.0)
        .play_through(&source, &mut controller, &mut context)
        .expect("gesture continues");
    assert_resolved_with(&context, Completion::Finish, "half-way release");
}

#[test]
fn owner_teardown_mid_gesture_resolves_context() {
    init_logging();
    let source = ScriptedPanSource::new(SlideDirection::Down);
    let mut controller = InteractiveTransitionController::new(&source);
    let mut context = RecordingTransitionContext::square(500.0);

    GestureScript::new(SlideDirection::Down)
        .begin()
        .drag_to(400.0)
        .play_through(&source, &mut controller, &mut context)
        .expect("valid prefix");

    let decision = controller
        .force_cancel(&mut context)
        .expect("in-flight transition");
    assert_eq!(decision.reason, DecisionReason::ForcedCancel);
    assert_eq!(decision.remaining_fraction(), 0.8);
    assert_eq!(
        context.calls(),
        &[ContextCall::Update(0.8), ContextCall::Cancel]
    );
}

#[test]
fn dropped_recogniser_is_a_protocol_violation() {
    init_logging();
    let source = ScriptedPanSource::new(SlideDirection::Right);
    let mut controller = InteractiveTransitionController::new(&source);
    let mut context = RecordingTransitionContext::square(300.0);

    GestureScript::new(SlideDirection::Right)
        .begin()
        .drag_to(90.0)
        .play_through(&source, &mut controller, &mut context)
        .expect("valid prefix");
    drop(source);

    assert_eq!(
        controller.pump(&mut context),
        Err(TransitionError::Protocol(ProtocolViolation::SourceDetached))
    );
    assert_resolved_with(&context, Completion::Cancel, "detached source");
    assert_eq!(controller.state(), ControllerState::Idle);
}

#[test]
fn controller_serves_consecutive_gestures_after_reset() {
    init_logging();
    let source = ScriptedPanSource::new(SlideDirection::Right);
    let mut controller = InteractiveTransitionController::new(&source);

    let mut first = RecordingTransitionContext::square(300.0);
    let outcomes = GestureScript::swipe(SlideDirection::Right, 60.0, 0.0)
        .play_through(&source, &mut controller, &mut first)
        .expect("first gesture");
    assert_eq!(
        final_decision(&outcomes).map(|decision| decision.completion),
        Some(Completion::Cancel)
    );

    controller.reset().expect("resolved controller resets");
    source.clear();

    let mut second = RecordingTransitionContext::square(300.0);
    let outcomes = GestureScript::swipe(SlideDirection::Right, 240.0, 0.0)
        .play_through(&source, &mut controller, &mut second)
        .expect("second gesture");
    assert_eq!(
        final_decision(&outcomes).map(|decision| decision.completion),
        Some(Completion::Finish)
    );
    assert_resolved_with(&second, Completion::Finish, "second gesture");
}
