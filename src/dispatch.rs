//! Dispatch from a three-letter type code to a workout kind

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::{WorkoutError, WorkoutResult};
use crate::training::{Running, SportsWalking, Swimming, Workout};

/// Workout kinds recognized by the dispatcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutKind {
    Running,
    SportsWalking,
    Swimming,
}

impl WorkoutKind {
    /// Three-letter input code
    pub fn code(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "RUN",
            WorkoutKind::SportsWalking => "WLK",
            WorkoutKind::Swimming => "SWM",
        }
    }

    /// Human name used in reports
    pub fn label(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::SportsWalking => "SportsWalking",
            WorkoutKind::Swimming => "Swimming",
        }
    }

    /// Number of numeric fields the constructor takes
    pub fn arity(&self) -> usize {
        match self {
            WorkoutKind::Running => 3,
            WorkoutKind::SportsWalking => 4,
            WorkoutKind::Swimming => 5,
        }
    }

    /// Field names in constructor order
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            WorkoutKind::Running => &["action", "duration", "weight"],
            WorkoutKind::SportsWalking => &["action", "duration", "weight", "height"],
            WorkoutKind::Swimming => {
                &["action", "duration", "weight", "length_pool", "count_pool"]
            }
        }
    }

    pub fn all() -> &'static [WorkoutKind] {
        &[
            WorkoutKind::Swimming,
            WorkoutKind::Running,
            WorkoutKind::SportsWalking,
        ]
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for WorkoutKind {
    type Err = WorkoutError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        WorkoutKind::all()
            .iter()
            .copied()
            .find(|kind| kind.code() == code)
            .ok_or_else(|| WorkoutError::UnknownWorkoutKind(code.to_string()))
    }
}

/// Build a workout from its type code and raw fields.
///
/// Fields must match the constructor order of the kind exactly:
/// `RUN` action, duration, weight; `WLK` adds height;
/// `SWM` adds pool length and lap count.
pub fn read_package(workout_type: &str, data: &[f64]) -> WorkoutResult<Workout> {
    let kind: WorkoutKind = workout_type.parse()?;
    if data.len() != kind.arity() {
        return Err(WorkoutError::ArityMismatch {
            kind,
            expected: kind.arity(),
            got: data.len(),
        });
    }
    debug!("Dispatching {} with {:?}", kind, data);

    let action = to_action(data[0])?;
    let workout: Workout = match kind {
        WorkoutKind::Running => Running::new(action, data[1], data[2])?.into(),
        WorkoutKind::SportsWalking => {
            SportsWalking::new(action, data[1], data[2], data[3])?.into()
        }
        WorkoutKind::Swimming => {
            Swimming::new(action, data[1], data[2], data[3], data[4])?.into()
        }
    };
    Ok(workout)
}

/// Action counts arrive as numbers but must be whole and non-negative
fn to_action(value: f64) -> WorkoutResult<u64> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value < u64::MAX as f64 {
        Ok(value as u64)
    } else {
        Err(WorkoutError::InvalidField {
            field: "action",
            value,
            reason: "must be a non-negative whole number",
        })
    }
}
