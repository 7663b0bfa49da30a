//! Training report assembly and rendering
//!
//! One report per workout: the four derived metrics plus the variant label,
//! rendered into a single fixed-template line with three fractional digits
//! per metric.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Derived metrics for one workout, ready for rendering
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrainingReport {
    /// Variant name (Running, SportsWalking, Swimming)
    pub label: String,
    pub duration_hours: f64,
    pub distance_km: f64,
    pub avg_speed_kmh: f64,
    pub calories_kcal: f64,
}

impl TrainingReport {
    /// Render the fixed one-line report template.
    ///
    /// Field order and the three fractional digits are fixed regardless of
    /// input magnitude.
    pub fn render(&self) -> String {
        format!(
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            self.label, self.duration_hours, self.distance_km, self.avg_speed_kmh, self.calories_kcal
        )
    }
}

impl fmt::Display for TrainingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn report(duration: f64, distance: f64, speed: f64, calories: f64) -> TrainingReport {
        TrainingReport {
            label: "Swimming".to_string(),
            duration_hours: duration,
            distance_km: distance,
            avg_speed_kmh: speed,
            calories_kcal: calories,
        }
    }

    #[test]
    fn test_render_reference_line() {
        let line = report(1.0, 0.9936, 1.0, 336.0).render();
        assert_eq!(
            line,
            "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; \
             Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000."
        );
    }

    #[test]
    fn test_render_integer_values_keep_three_digits() {
        let line = report(2.0, 10.0, 5.0, 400.0).render();
        assert!(line.contains("Длительность: 2.000 ч."));
        assert!(line.contains("Дистанция: 10.000 км"));
        assert!(line.contains("Ср. скорость: 5.000 км/ч"));
        assert!(line.contains("Потрачено ккал: 400.000."));
    }

    #[test]
    fn test_display_matches_render() {
        let r = report(1.0, 9.75, 9.75, 797.805);
        assert_eq!(format!("{}", r), r.render());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: every metric renders with exactly three fractional digits
        #[test]
        fn prop_three_fractional_digits(
            duration in 0.0f64..100.0,
            distance in 0.0f64..1000.0,
            speed in 0.0f64..100.0,
            calories in 0.0f64..100_000.0
        ) {
            let line = report(duration, distance, speed, calories).render();
            // Trailing '.' closes the template; strip it before splitting
            let body = line.strip_suffix('.').unwrap();
            let numbers: Vec<&str> = body
                .split("; ")
                .skip(1) // the label segment carries no number
                .map(|segment| {
                    let value = segment.split(": ").nth(1).unwrap();
                    value.split(' ').next().unwrap()
                })
                .collect();
            prop_assert_eq!(numbers.len(), 4);
            for number in numbers {
                let fraction = number.split('.').nth(1).unwrap();
                prop_assert_eq!(fraction.len(), 3, "value {} in line {}", number, line);
                prop_assert!(fraction.chars().all(|c| c.is_ascii_digit()));
            }
        }
    }
}
