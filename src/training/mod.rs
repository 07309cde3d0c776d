//! Training module - formulas for distance, speed and calories
//!
//! Features:
//! - Shared session data (action count, duration, weight)
//! - Default distance and mean speed, overridable per kind
//! - Per-kind calorie formulas

pub mod running;
pub mod swimming;
pub mod walking;

pub use running::Running;
pub use swimming::Swimming;
pub use walking::SportsWalking;

use crate::dispatch::WorkoutKind;
use crate::error::{WorkoutError, WorkoutResult};
use crate::report::Summary;

/// Minutes in an hour
pub const M_IN_H: f64 = 60.0;
/// Centimeters in a meter
pub const CM_IN_M: f64 = 100.0;
/// km/h -> m/s divisor
pub const KM_H_IN_M_S_COEFF: f64 = 3.6;
/// Meters in a kilometer
pub const M_IN_KM: f64 = 1000.0;
/// Step length in meters (running, walking)
pub const LEN_STEP: f64 = 0.65;
/// Stroke length in meters (swimming)
pub const LEN_STROKE: f64 = 1.38;

/// Fields every workout carries
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Session {
    pub action: u64,
    pub duration: f64,
    pub weight: f64,
}

impl Session {
    /// Validate and build session data. Duration in hours, weight in kg.
    pub fn new(action: u64, duration: f64, weight: f64) -> WorkoutResult<Self> {
        if duration == 0.0 {
            return Err(WorkoutError::DivisionByZero { field: "duration" });
        }
        if !duration.is_finite() || duration < 0.0 {
            return Err(WorkoutError::InvalidField {
                field: "duration",
                value: duration,
                reason: "must be a positive number of hours",
            });
        }
        check_non_negative("weight", weight)?;
        Ok(Self {
            action,
            duration,
            weight,
        })
    }
}

pub(crate) fn check_non_negative(field: &'static str, value: f64) -> WorkoutResult<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(WorkoutError::InvalidField {
            field,
            value,
            reason: "must be a finite non-negative number",
        });
    }
    Ok(value)
}

/// Capability set shared by all workout kinds
pub trait Training {
    /// Distance covered by one action, meters
    const LEN_STEP: f64 = self::LEN_STEP;

    fn session(&self) -> &Session;

    fn kind(&self) -> WorkoutKind;

    /// Distance in km
    fn distance(&self) -> f64 {
        self.session().action as f64 * Self::LEN_STEP / M_IN_KM
    }

    /// Mean speed in km/h
    fn mean_speed(&self) -> f64 {
        self.distance() / self.session().duration
    }

    /// Calories in kcal
    fn spent_calories(&self) -> f64;

    fn show_training_info(&self) -> Summary {
        Summary {
            kind_label: self.kind().label().to_string(),
            duration_hours: self.session().duration,
            distance_km: self.distance(),
            speed_kmh: self.mean_speed(),
            calories_kcal: self.spent_calories(),
        }
    }
}

/// A constructed workout of one of the three kinds
#[derive(Debug, Clone, PartialEq)]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Workout {
    pub fn kind(&self) -> WorkoutKind {
        match self {
            Workout::Running(w) => w.kind(),
            Workout::SportsWalking(w) => w.kind(),
            Workout::Swimming(w) => w.kind(),
        }
    }

    pub fn distance(&self) -> f64 {
        match self {
            Workout::Running(w) => w.distance(),
            Workout::SportsWalking(w) => w.distance(),
            Workout::Swimming(w) => w.distance(),
        }
    }

    pub fn mean_speed(&self) -> f64 {
        match self {
            Workout::Running(w) => w.mean_speed(),
            Workout::SportsWalking(w) => w.mean_speed(),
            Workout::Swimming(w) => w.mean_speed(),
        }
    }

    pub fn spent_calories(&self) -> f64 {
        match self {
            Workout::Running(w) => w.spent_calories(),
            Workout::SportsWalking(w) => w.spent_calories(),
            Workout::Swimming(w) => w.spent_calories(),
        }
    }

    /// Compute the summary for this workout
    pub fn show_training_info(&self) -> Summary {
        match self {
            Workout::Running(w) => w.show_training_info(),
            Workout::SportsWalking(w) => w.show_training_info(),
            Workout::Swimming(w) => w.show_training_info(),
        }
    }
}

impl From<Running> for Workout {
    fn from(w: Running) -> Self {
        Workout::Running(w)
    }
}

impl From<SportsWalking> for Workout {
    fn from(w: SportsWalking) -> Self {
        Workout::SportsWalking(w)
    }
}

impl From<Swimming> for Workout {
    fn from(w: Swimming) -> Self {
        Workout::Swimming(w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_session_zero_duration() {
        let err = Session::new(100, 0.0, 70.0).unwrap_err();
        assert_eq!(err, WorkoutError::DivisionByZero { field: "duration" });
    }

    #[test]
    fn test_session_negative_duration() {
        let err = Session::new(100, -1.0, 70.0).unwrap_err();
        assert!(matches!(err, WorkoutError::InvalidField { field: "duration", .. }));
    }

    #[test]
    fn test_session_nan_weight() {
        let err = Session::new(100, 1.0, f64::NAN).unwrap_err();
        assert!(matches!(err, WorkoutError::InvalidField { field: "weight", .. }));
    }

    #[test]
    fn test_workout_delegates_to_variant() {
        let running = Running::new(420, 4.0, 20.0).unwrap();
        let workout = Workout::from(running.clone());
        assert_eq!(workout.kind(), WorkoutKind::Running);
        assert!((workout.distance() - running.distance()).abs() < EPS);
        assert!((workout.mean_speed() - running.mean_speed()).abs() < EPS);
        assert!((workout.spent_calories() - running.spent_calories()).abs() < EPS);
    }

    #[test]
    fn test_summary_is_idempotent() {
        let workout = Workout::from(Swimming::new(720, 1.0, 80.0, 25.0, 40.0).unwrap());
        assert_eq!(workout.show_training_info(), workout.show_training_info());
    }

    #[test]
    fn test_summary_fields() {
        let workout = Workout::from(SportsWalking::new(9000, 1.0, 75.0, 180.0).unwrap());
        let summary = workout.show_training_info();
        assert_eq!(summary.kind_label, "SportsWalking");
        assert_eq!(summary.duration_hours, 1.0);
        assert!((summary.distance_km - 5.85).abs() < EPS);
        assert!((summary.speed_kmh - 5.85).abs() < EPS);
        assert!((summary.calories_kcal - 348.9453125).abs() < EPS);
    }
}
