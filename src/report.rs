//! Report module - one summary line per workout

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Computed workout statistics, produced once per workout
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub kind_label: String,
    pub duration_hours: f64,
    pub distance_km: f64,
    pub speed_kmh: f64,
    pub calories_kcal: f64,
}

/// Language of the summary line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "ru" => Ok(Locale::Ru),
            other => Err(format!("unsupported language '{}', expected en or ru", other)),
        }
    }
}

impl Summary {
    /// Render the summary line, all numbers fixed to 3 decimals
    pub fn message(&self, locale: Locale) -> String {
        match locale {
            Locale::En => format!(
                "Training kind: {}; Duration: {:.3} h; Distance: {:.3} km; \
                 Mean speed: {:.3} km/h; Calories spent: {:.3}.",
                self.kind_label,
                self.duration_hours,
                self.distance_km,
                self.speed_kmh,
                self.calories_kcal
            ),
            Locale::Ru => format!(
                "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; \
                 Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
                self.kind_label,
                self.duration_hours,
                self.distance_km,
                self.speed_kmh,
                self.calories_kcal
            ),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message(Locale::En))
    }
}
