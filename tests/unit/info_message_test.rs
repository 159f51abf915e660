//! Unit tests for report line rendering.

use fitness_tracker::training::InfoMessage;

fn info(training_type: &str, duration: f64, distance: f64, speed: f64, calories: f64) -> InfoMessage {
    InfoMessage {
        training_type: training_type.to_string(),
        duration,
        distance,
        speed,
        calories,
    }
}

#[test]
fn test_message_template() {
    let message = info("SportsWalking", 1.0, 5.85, 5.85, 157.5).message();
    assert_eq!(
        message,
        "Тип тренировки: SportsWalking; Длительность: 1.000 ч.; Дистанция: 5.850 км; Ср. скорость: 5.850 км/ч; Потрачено ккал: 157.500."
    );
}

#[test]
fn test_message_is_pure() {
    let a = info("Running", 0.75, 3.2109, 4.28, 123.4567);
    let b = a.clone();
    assert_eq!(a.message(), b.message());
    assert_eq!(a.message(), a.to_string());
}

#[test]
fn test_message_rounding() {
    // 0.0005 is stored slightly above the midpoint and rounds up
    let message = info("Running", 0.125, 0.0005, 2.0004, 1234.56789).message();
    assert!(message.contains("Длительность: 0.125 ч."));
    assert!(message.contains("Дистанция: 0.001 км"));
    assert!(message.contains("Ср. скорость: 2.000 км/ч"));
    assert!(message.contains("Потрачено ккал: 1234.568."));
}

#[test]
fn test_message_negative_values() {
    let message = info("Running", 1.0, 0.65, 0.65, -1.034).message();
    assert!(message.ends_with("Потрачено ккал: -1.034."));
}
