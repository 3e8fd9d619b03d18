use std::time::Duration;

use portfolio_scene::core::{FrameClock, ManualClock};
use portfolio_scene::timeline::{DecorativeTextStream, StagedTimeline, TimelineStage};

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn timeline() -> StagedTimeline {
    StagedTimeline::new(ms(3000), ms(1000))
}

// ============================================================================
// StagedTimeline
// ============================================================================

#[test]
fn test_loading_until_deadline() {
    let mut tl = timeline();
    tl.start();

    assert!(tl.advance(ms(2999)).is_empty());
    assert_eq!(tl.stage(), TimelineStage::Loading);
}

#[test]
fn test_reveal_fires_exactly_once_at_deadline() {
    let mut tl = timeline();
    tl.start();

    tl.advance(ms(2999));
    assert_eq!(tl.advance(ms(1)), vec![TimelineStage::Revealing]);
    assert_eq!(tl.stage(), TimelineStage::Revealing);

    let mut later = Vec::new();
    for _ in 0..200 {
        later.extend(tl.advance(ms(50)));
    }
    assert!(!later.contains(&TimelineStage::Revealing));
    assert_eq!(later, vec![TimelineStage::Settled]);
}

#[test]
fn test_single_long_advance_reports_both_transitions_in_order() {
    let mut tl = timeline();
    tl.start();

    assert_eq!(
        tl.advance(ms(10_000)),
        vec![TimelineStage::Revealing, TimelineStage::Settled]
    );
    assert_eq!(tl.time_in_stage(), ms(6000));
}

#[test]
fn test_cancel_with_start_handle_keeps_loading() {
    let mut tl = timeline();
    let handle = tl.start().expect("first start arms the gate");

    tl.advance(ms(2999));
    assert!(tl.cancel(handle));
    assert!(!tl.has_pending_transition());

    assert!(tl.advance(ms(10_000)).is_empty());
    assert_eq!(tl.stage(), TimelineStage::Loading);
}

#[test]
fn test_dispose_before_deadline_blocks_transitions() {
    let mut tl = timeline();
    let handle = tl.start();
    assert!(handle.is_some());

    tl.advance(ms(1000));
    tl.dispose();
    assert!(!tl.has_pending_transition());

    assert!(tl.advance(ms(5000)).is_empty());
    assert_eq!(tl.stage(), TimelineStage::Loading);
}

#[test]
fn test_dispose_during_reveal_freezes_stage() {
    let mut tl = timeline();
    tl.start();
    tl.advance(ms(3500));

    tl.dispose();
    assert!(tl.advance(ms(5000)).is_empty());
    assert_eq!(tl.stage(), TimelineStage::Revealing);
}

#[test]
fn test_start_twice_schedules_once() {
    let mut tl = timeline();
    assert!(tl.start().is_some());
    assert!(tl.start().is_none());

    assert_eq!(tl.advance(ms(3000)), vec![TimelineStage::Revealing]);
}

#[test]
fn test_unstarted_timeline_is_inert() {
    let mut tl = timeline();
    assert!(tl.advance(ms(60_000)).is_empty());
    assert_eq!(tl.stage(), TimelineStage::Loading);
}

#[test]
fn test_driven_by_manual_clock() {
    let mut clock = ManualClock::new();
    let mut tl = timeline();
    tl.start();

    let mut seen = Vec::new();
    for _ in 0..250 {
        clock.advance(ms(16));
        seen.extend(tl.advance(clock.tick()));
    }
    // 4000 ms total: reveal at 3000, settle at 4000
    assert_eq!(seen, vec![TimelineStage::Revealing, TimelineStage::Settled]);
}

// ============================================================================
// DecorativeTextStream
// ============================================================================

#[test]
fn test_text_stream_reveals_and_stops() {
    let mut stream = DecorativeTextStream::new(&["AI"], ms(150));
    assert_eq!(stream.visible(), "");

    let expected = ["A", "AI", "AI"];
    for want in expected {
        stream.advance(ms(150));
        assert_eq!(stream.visible(), want);
    }
    assert!(stream.is_finished());
}

#[test]
fn test_text_stream_catches_up_on_long_frames() {
    let mut stream = DecorativeTextStream::new(&["Hello"], ms(100));
    stream.advance(ms(350));
    assert_eq!(stream.visible(), "Hel");
}

#[test]
fn test_looping_stream_wraps_after_pause() {
    let mut stream = DecorativeTextStream::new(&["ab", "c"], ms(10)).looping(ms(100));

    stream.advance(ms(20));
    assert_eq!(stream.visible(), "ab");
    assert!(stream.is_holding());

    stream.advance(ms(100));
    assert_eq!(stream.index(), 1);
    assert_eq!(stream.visible(), "");

    stream.advance(ms(10));
    assert_eq!(stream.visible(), "c");

    stream.advance(ms(100));
    assert_eq!(stream.index(), 0);
    assert!(!stream.is_finished());
}

#[test]
fn test_streams_are_independent() {
    let mut a = DecorativeTextStream::new(&["xyz"], ms(10));
    let b = DecorativeTextStream::new(&["xyz"], ms(10));

    a.advance(ms(30));
    assert_eq!(a.visible(), "xyz");
    assert_eq!(b.visible(), "");
}

#[test]
fn test_empty_stream_is_finished() {
    let mut stream = DecorativeTextStream::new::<&str>(&[], ms(10));
    stream.advance(ms(100));
    assert!(stream.is_finished());
    assert_eq!(stream.visible(), "");
}
