//! Unit tests for workout formulas.

use fitness_tracker::training::{
    Running, SportsWalking, Swimming, Training, TrainingData, TrainingError,
};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}

#[test]
fn test_running_reference() {
    let run = Running::new(15000, 1.0, 75.0);

    assert_close(run.distance(), 9.75);
    assert_close(run.mean_speed().unwrap(), 9.75);
    assert_close(
        run.spent_calories().unwrap(),
        (18.0 * 9.75 - 20.0) * 75.0 / 1000.0 * 60.0,
    );
}

#[test]
fn test_running_scales_with_duration() {
    // Same pace over twice the time: distance doubles, speed stays, calories double
    let short = Running::new(10000, 1.0, 70.0);
    let long = Running::new(20000, 2.0, 70.0);

    assert_close(long.distance(), short.distance() * 2.0);
    assert_close(long.mean_speed().unwrap(), short.mean_speed().unwrap());
    assert_close(long.spent_calories().unwrap(), short.spent_calories().unwrap() * 2.0);
}

#[test]
fn test_walking_reference() {
    let walk = SportsWalking::new(9000, 1.0, 75.0, 180);

    assert_close(walk.distance(), 5.85);
    assert_close(walk.mean_speed().unwrap(), 5.85);
    assert_close(walk.spent_calories().unwrap(), 157.5);
    assert_eq!(walk.height(), 180);
}

#[test]
fn test_walking_floor_division_truncates_down() {
    // speed 6.5 km/h at 0.5 h: 6.5^2 = 42.25, 42.25 // 20 = 2
    let walk = SportsWalking::new(5000, 0.5, 60.0, 20);
    assert_close(walk.mean_speed().unwrap(), 6.5);
    let expected = (0.035 * 60.0 + 2.0 * 0.029 * 60.0) * (0.5 * 60.0);
    assert_close(walk.spent_calories().unwrap(), expected);
}

#[test]
fn test_walking_zero_height_is_an_error() {
    let walk = SportsWalking::new(9000, 1.0, 75.0, 0);
    assert_eq!(
        walk.spent_calories(),
        Err(TrainingError::ZeroDivision { divisor: "height" })
    );
}

#[test]
fn test_swimming_reference() {
    let swim = Swimming::new(720, 1.0, 80.0, 25, 40);

    assert_close(swim.mean_speed().unwrap(), 1.0);
    assert_close(swim.distance(), 0.9936);
    assert_close(swim.spent_calories().unwrap(), 336.0);
    assert_eq!(swim.step_length(), 1.38);
    assert_eq!(swim.length_pool(), 25);
    assert_eq!(swim.count_pool(), 40);
}

#[test]
fn test_swimming_uses_pool_for_speed() {
    // 50 m pool, 30 lengths in 0.5 h = 3.0 km/h
    let swim = Swimming::new(1000, 0.5, 65.0, 50, 30);
    assert_close(swim.mean_speed().unwrap(), 3.0);
    assert_close(swim.distance(), 1.38);
    assert_close(swim.spent_calories().unwrap(), (3.0 + 1.1) * 2.0 * 65.0);
}

#[test]
fn test_zero_duration_is_an_error_for_every_variant() {
    let expected = Err(TrainingError::ZeroDivision {
        divisor: "duration",
    });

    assert_eq!(Running::new(100, 0.0, 70.0).spent_calories(), expected);
    assert_eq!(SportsWalking::new(100, 0.0, 70.0, 170).spent_calories(), expected);
    assert_eq!(Swimming::new(100, 0.0, 70.0, 25, 4).spent_calories(), expected);
}

#[test]
fn test_base_training_has_no_calories() {
    let base = TrainingData::new(15000, 1.0, 75.0);

    assert_close(base.distance(), 9.75);
    assert!(matches!(
        base.spent_calories(),
        Err(TrainingError::UnsupportedOperation {
            operation: "spent_calories",
            ..
        })
    ));
    // Deterministic: the same call fails the same way every time
    assert_eq!(base.spent_calories(), base.spent_calories());
}

#[test]
fn test_info_uses_variant_name() {
    let info = Running::new(15000, 1.0, 75.0).show_training_info().unwrap();
    assert_eq!(info.training_type, "Running");

    let info = SportsWalking::new(9000, 1.0, 75.0, 180)
        .show_training_info()
        .unwrap();
    assert_eq!(info.training_type, "SportsWalking");

    let info = Swimming::new(720, 1.0, 80.0, 25, 40)
        .show_training_info()
        .unwrap();
    assert_eq!(info.training_type, "Swimming");
    assert_close(info.duration, 1.0);
}
