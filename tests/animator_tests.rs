use glam::Vec3;
use portfolio_scene::animation::{advance, AnimatedTransform, ColorCycle, Easing, RotationRates, Tween};
use portfolio_scene::math::Color;

const EPSILON: f32 = 1e-5;

const STARS: RotationRates = RotationRates::new(-1.0 / 20.0, -1.0 / 25.0, 0.0);
const GALAXY: RotationRates = RotationRates::new(0.0, 0.15, 0.0);

fn assert_angles_close(a: Vec3, b: Vec3) {
    assert!((a - b).abs().max_element() < EPSILON, "{:?} != {:?}", a, b);
}

#[test]
fn test_zero_delta_leaves_angles_unchanged() {
    let start = Vec3::new(0.3, -1.2, 4.0);
    let mut transform = AnimatedTransform::with_angles(start);

    advance(&mut transform, 0.0, &STARS);
    assert_eq!(transform.angles, start);
}

#[test]
fn test_split_advance_matches_single_advance() {
    for (d1, d2) in [(0.016, 0.016), (0.5, 1.25), (0.0, 3.0), (10.0, 0.001)] {
        let mut split = AnimatedTransform::new();
        advance(&mut split, d1, &STARS);
        advance(&mut split, d2, &STARS);

        let mut whole = AnimatedTransform::new();
        advance(&mut whole, d1 + d2, &STARS);

        assert_angles_close(split.angles, whole.angles);
    }
}

#[test]
fn test_axes_without_rate_stay_put() {
    let mut transform = AnimatedTransform::with_angles(Vec3::new(1.0, 2.0, 3.0));
    advance(&mut transform, 2.0, &GALAXY);

    assert_eq!(transform.angles.x, 1.0);
    assert!((transform.angles.y - 2.3).abs() < EPSILON);
    assert_eq!(transform.angles.z, 3.0);
}

#[test]
fn test_objects_advance_independently() {
    let mut stars = AnimatedTransform::new();
    let mut galaxy = AnimatedTransform::new();

    stars.advance(1.0, &STARS);
    galaxy.advance(1.0, &GALAXY);
    galaxy.advance(1.0, &GALAXY);

    assert_angles_close(stars.angles, Vec3::new(-0.05, -0.04, 0.0));
    assert_angles_close(galaxy.angles, Vec3::new(0.0, 0.3, 0.0));
}

#[test]
fn test_angles_are_not_wrapped() {
    let mut transform = AnimatedTransform::new();
    advance(&mut transform, 100.0, &GALAXY);
    assert!(transform.angles.y > std::f32::consts::TAU);
}

#[test]
fn test_tween_with_delay() {
    let mut tween = Tween::new(0.0, 10.0, 1.0, Easing::Linear).with_delay(0.5);
    tween.update(0.5);
    assert_eq!(tween.value(), 0.0);
    tween.update(0.5);
    assert!((tween.value() - 5.0).abs() < EPSILON);
    tween.update(5.0);
    assert!(tween.finished());
    assert_eq!(tween.value(), 10.0);
}

#[test]
fn test_color_cycle_returns_to_first_stop() {
    let stops = vec![Color::WHITE, Color::BLACK];
    let mut cycle = ColorCycle::new(stops, 4.0);
    assert_eq!(cycle.current(), Color::WHITE);

    cycle.update(4.0);
    assert!((cycle.current().r - 1.0).abs() < EPSILON);
}
