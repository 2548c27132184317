use std::time::Duration;

use uidom::transitions::{progress, DEFAULT_DURATION, FADE_OFFSET};
use uidom::{Easing, EnterTransition, ExitTransition, Frame};

// =============================================================================
// Easing Function Tests
// =============================================================================

#[test]
fn test_easing_boundaries() {
    for easing in [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
    ] {
        assert_eq!(easing.apply(0.0), 0.0, "{:?} at 0", easing);
        assert_eq!(easing.apply(1.0), 1.0, "{:?} at 1", easing);
    }
}

#[test]
fn test_easing_clamps_out_of_range() {
    assert_eq!(Easing::EaseOut.apply(-0.5), 0.0);
    assert_eq!(Easing::EaseIn.apply(1.5), 1.0);
}

#[test]
fn test_easing_shapes() {
    assert_eq!(Easing::EaseIn.apply(0.5), 0.25);
    assert_eq!(Easing::EaseOut.apply(0.5), 0.75);
    assert_eq!(Easing::EaseInOut.apply(0.5), 0.5);
    assert!(Easing::EaseInOut.apply(0.25) < 0.25);
}

// =============================================================================
// Preset Tests
// =============================================================================

#[test]
fn test_fade_in_down_starts_hidden_above() {
    let enter = EnterTransition::fade_in_down();
    assert_eq!(enter.duration, DEFAULT_DURATION);

    let start = enter.sample(0.0);
    assert_eq!(start.opacity, 0.0);
    assert_eq!(start.offset_y, -FADE_OFFSET);

    assert_eq!(enter.sample(1.0), Frame::SETTLED);
}

#[test]
fn test_fade_out_up_ends_hidden_above() {
    let exit = ExitTransition::fade_out_up().duration(Duration::from_millis(150));
    assert_eq!(exit.duration, Duration::from_millis(150));

    assert_eq!(exit.sample(0.0), Frame::SETTLED);
    let end = exit.sample(1.0);
    assert_eq!(end.opacity, 0.0);
    assert_eq!(end.offset_y, -FADE_OFFSET);
}

#[test]
fn test_sample_midpoint_linear() {
    let enter = EnterTransition::fade_in_down().easing(Easing::Linear);
    let mid = enter.sample(0.5);
    assert!((mid.opacity - 0.5).abs() < 0.0001);
    assert!((mid.offset_y + FADE_OFFSET / 2.0).abs() < 0.0001);
}

#[test]
fn test_plain_fades_do_not_move() {
    assert_eq!(EnterTransition::fade_in().sample(0.0).offset_y, 0.0);
    assert_eq!(ExitTransition::fade_out().sample(1.0).offset_y, 0.0);
}

#[test]
fn test_progress() {
    let d = Duration::from_millis(100);
    assert_eq!(progress(Duration::ZERO, d), 0.0);
    assert!((progress(Duration::from_millis(50), d) - 0.5).abs() < 0.0001);
    assert_eq!(progress(Duration::from_millis(500), d), 1.0);
    assert_eq!(progress(Duration::ZERO, Duration::ZERO), 1.0);
}
