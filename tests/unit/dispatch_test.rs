//! Unit tests for package dispatch.

use fitness_tracker::training::{read_package, Training, TrainingError, Workout, WorkoutType};

#[test]
fn test_dispatch_each_code() {
    let swim = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
    assert!(matches!(swim, Workout::Swimming(_)));

    let run = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();
    assert!(matches!(run, Workout::Running(_)));

    let walk = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
    assert!(matches!(walk, Workout::SportsWalking(_)));
}

#[test]
fn test_dispatch_unknown_code() {
    assert_eq!(
        read_package("SWM1", &[720.0, 1.0, 80.0, 25.0, 40.0]),
        Err(TrainingError::UnknownWorkoutType("SWM1".to_string()))
    );
    assert_eq!(
        read_package("", &[]),
        Err(TrainingError::UnknownWorkoutType(String::new()))
    );
}

#[test]
fn test_dispatch_arity_mismatch() {
    assert_eq!(
        read_package("RUN", &[15000.0, 1.0, 75.0, 180.0]),
        Err(TrainingError::ArityMismatch {
            code: "RUN".to_string(),
            expected: 3,
            actual: 4,
        })
    );
    assert_eq!(
        read_package("SWM", &[720.0, 1.0, 80.0]),
        Err(TrainingError::ArityMismatch {
            code: "SWM".to_string(),
            expected: 5,
            actual: 3,
        })
    );
    assert!(matches!(
        read_package("WLK", &[]),
        Err(TrainingError::ArityMismatch { expected: 4, actual: 0, .. })
    ));
}

#[test]
fn test_dispatch_rejects_fractional_integer_fields() {
    assert_eq!(
        read_package("RUN", &[150.5, 1.0, 75.0]),
        Err(TrainingError::InvalidField {
            field: "action",
            value: 150.5,
        })
    );
    assert!(matches!(
        read_package("WLK", &[9000.0, 1.0, 75.0, 180.2]),
        Err(TrainingError::InvalidField { field: "height", .. })
    ));
    assert!(matches!(
        read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.5]),
        Err(TrainingError::InvalidField { field: "count_pool", .. })
    ));
}

#[test]
fn test_dispatch_accepts_fractional_float_fields() {
    let run = read_package("RUN", &[15000.0, 1.25, 72.5]).unwrap();
    assert_eq!(run.data().duration, 1.25);
    assert_eq!(run.data().weight, 72.5);
}

#[test]
fn test_workout_type_round_trip_codes() {
    for workout_type in WorkoutType::ALL {
        assert_eq!(workout_type.code().parse::<WorkoutType>(), Ok(workout_type));
        assert_eq!(workout_type.to_string(), workout_type.code());
    }
}
