use std::time::Duration;

use vitrine_motion::{
    AnimationConfig, AnimationKind, ElementId, ObservationOptions, Phase,
    ScrollAnimationController, Stage, VisualProps,
};

const FRAME: Duration = Duration::from_millis(10);

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn attach(
    stage: &mut Stage,
    kind: AnimationKind,
    options: ObservationOptions,
) -> (ElementId, [ScrollAnimationController; 1]) {
    let el = stage.add_element();
    let controller =
        ScrollAnimationController::attach(Some(el), AnimationConfig::new(kind), options, stage);
    (el, [controller])
}

#[test]
fn burst_of_visibility_changes_plays_one_enter() {
    let mut stage = Stage::new();
    let (el, mut cs) = attach(&mut stage, AnimationKind::FadeUp, ObservationOptions::default());
    assert_eq!(stage.props(el).map(|p| p.opacity), Some(0.0));

    for visible in [true, false, true] {
        stage.set_intersecting(el, visible);
        stage.step(FRAME, &mut cs);
    }
    assert_eq!(stage.pending_timers(), 1);

    stage.run_for(ms(40), FRAME, &mut cs);
    assert_eq!(stage.tweens_started(), 0);

    stage.run_for(ms(10), FRAME, &mut cs);
    assert_eq!(stage.tweens_started(), 1);
    assert_eq!(cs[0].phase(), Phase::Entering);

    stage.run_for(ms(1000), FRAME, &mut cs);
    assert_eq!(stage.props(el), Some(VisualProps::VISIBLE));
    assert_eq!(cs[0].phase(), Phase::Entered);
}

#[test]
fn leaving_mid_enter_never_runs_two_transitions() {
    let mut stage = Stage::new();
    let (el, mut cs) = attach(&mut stage, AnimationKind::FadeUp, ObservationOptions::default());

    stage.set_intersecting(el, true);
    stage.run_for(ms(160), FRAME, &mut cs);
    let mid = stage.props(el).expect("element");
    assert!(mid.opacity > 0.0 && mid.opacity < 1.0);

    stage.set_intersecting(el, false);
    for _ in 0..80 {
        stage.step(FRAME, &mut cs);
        assert!(stage.active_tweens_for(el) <= 1);
    }

    let exit = AnimationKind::FadeUp.exit(40.0, 0.97);
    assert!(stage.props(el).expect("element").approx_eq(&exit, 1e-9));
    assert_eq!(cs[0].phase(), Phase::Idle);
    assert!(!cs[0].is_visible());
    assert_eq!(stage.tweens_started(), 2);
}

#[test]
fn once_plays_a_single_enter_across_cycles() {
    let mut stage = Stage::new();
    let (el, mut cs) = attach(
        &mut stage,
        AnimationKind::Scale,
        ObservationOptions::default().once(),
    );

    for visible in [true, false, true, false] {
        stage.set_intersecting(el, visible);
        stage.run_for(ms(1000), FRAME, &mut cs);
    }

    assert_eq!(stage.tweens_started(), 1);
    assert_eq!(stage.props(el), Some(VisualProps::VISIBLE));
    assert!(cs[0].is_visible());
}

#[test]
fn stagger_children_start_in_order() {
    let mut stage = Stage::new();
    let grid = stage.add_element();
    let cards: Vec<_> = (0..3).map(|_| stage.add_child(grid, "card")).collect();
    let mut cs = [ScrollAnimationController::attach(
        Some(grid),
        AnimationConfig::new(AnimationKind::stagger(".card")),
        ObservationOptions::default(),
        &mut stage,
    )];

    stage.set_intersecting(grid, true);
    stage.step(Duration::ZERO, &mut cs);
    stage.run_for(ms(60), FRAME, &mut cs);

    let first = stage.props(cards[0]).expect("card");
    let last = stage.props(cards[2]).expect("card");
    assert!(first.opacity > 0.0);
    assert_eq!(last.opacity, 0.0);
    assert_eq!(last.y, 20.0);

    stage.run_for(ms(1000), FRAME, &mut cs);
    for card in &cards {
        assert_eq!(stage.props(*card), Some(VisualProps::VISIBLE));
    }
}

#[test]
fn detach_releases_every_host_resource() {
    let mut stage = Stage::new();
    let (el, mut cs) = attach(&mut stage, AnimationKind::FadeRight, ObservationOptions::default());
    stage.set_intersecting(el, true);
    stage.run_for(ms(100), FRAME, &mut cs);
    stage.set_intersecting(el, false);
    stage.step(FRAME, &mut cs);

    assert!(cs[0].state().is_transition_in_flight);
    let frozen = stage.props(el).expect("element");

    cs[0].detach(&mut stage);
    cs[0].detach(&mut stage);
    assert_eq!(stage.watch_count(), 0);
    assert_eq!(stage.subscription_count(), 0);
    assert_eq!(stage.pending_timers(), 0);
    assert_eq!(stage.active_tweens_for(el), 0);

    let started = stage.tweens_started();
    stage.set_intersecting(el, true);
    stage.run_for(ms(500), FRAME, &mut cs);
    assert_eq!(stage.tweens_started(), started);
    assert_eq!(stage.props(el), Some(frozen));
}

#[test]
fn reduced_motion_at_attach_shows_without_observing() {
    let mut stage = Stage::new().with_reduced_motion(true);
    let (el, mut cs) = attach(&mut stage, AnimationKind::FadeLeft, ObservationOptions::default());

    assert_eq!(stage.props(el), Some(VisualProps::VISIBLE));
    assert_eq!(stage.watch_count(), 0);

    stage.set_intersecting(el, true);
    stage.run_for(ms(500), FRAME, &mut cs);
    assert_eq!(stage.tweens_started(), 0);
    assert!(cs[0].is_visible());
}

#[test]
fn enabling_reduced_motion_snaps_to_visible() {
    let mut stage = Stage::new();
    let (el, mut cs) = attach(&mut stage, AnimationKind::FadeDown, ObservationOptions::default());
    stage.set_intersecting(el, true);
    stage.run_for(ms(100), FRAME, &mut cs);
    assert!(cs[0].state().is_transition_in_flight);

    stage.set_reduced_motion(true);
    stage.step(FRAME, &mut cs);

    assert_eq!(stage.props(el), Some(VisualProps::VISIBLE));
    assert_eq!(stage.active_tweens_for(el), 0);
    assert_eq!(stage.watch_count(), 0);
    assert!(cs[0].is_reduced_motion());

    stage.set_reduced_motion(false);
    stage.set_intersecting(el, false);
    stage.run_for(ms(500), FRAME, &mut cs);
    assert_eq!(stage.props(el), Some(VisualProps::VISIBLE));
}
