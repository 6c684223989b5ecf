//! Human-readable workout summaries.

use serde::Serialize;
use std::fmt;

/// Summary of a computed workout, ready to be printed
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InfoMessage {
    pub training_type: String,
    /// Hours
    pub duration: f64,
    /// Kilometers
    pub distance: f64,
    /// km/h
    pub speed: f64,
    /// kcal
    pub calories: f64,
}

impl InfoMessage {
    pub fn new(
        training_type: impl Into<String>,
        duration: f64,
        distance: f64,
        speed: f64,
        calories: f64,
    ) -> Self {
        Self {
            training_type: training_type.into(),
            duration,
            distance,
            speed,
            calories,
        }
    }

    /// Render the one-line summary, every value to three decimals
    pub fn get_message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}; \
             Длительность: {:.3} ч.; \
             Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; \
             Потрачено ккал: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_format() {
        let msg = InfoMessage::new("Running", 1.0, 9.75, 9.75, 797.805);
        assert_eq!(
            msg.get_message(),
            "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; \
             Ср. скорость: 9.750 км/ч; Потрачено ккал: 797.805."
        );
    }

    #[test]
    fn test_always_three_decimals() {
        let msg = InfoMessage::new("Swimming", 2.0, 0.123456789, 12.0, 0.0005);
        let text = msg.get_message();
        assert!(text.contains("Длительность: 2.000 ч."));
        assert!(text.contains("Дистанция: 0.123 км"));
        assert!(text.contains("Ср. скорость: 12.000 км/ч"));
        assert!(text.ends_with("Потрачено ккал: 0.001."));
    }

    #[test]
    fn test_serializes_unrounded() {
        let msg = InfoMessage::new("Swimming", 1.0, 0.9936, 1.0, 336.0);
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["training_type"], "Swimming");
        assert_eq!(json["distance"], 0.9936);
    }
}
