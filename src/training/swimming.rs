//! Swimming - speed comes from pool length and lap count, not strokes

use super::{LEN_STROKE, M_IN_KM, Session, Training, check_non_negative};
use crate::dispatch::WorkoutKind;
use crate::error::WorkoutResult;

const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    session: Session,
    /// Pool length in meters
    length_pool: f64,
    /// Laps swum
    count_pool: f64,
}

impl Swimming {
    pub fn new(
        action: u64,
        duration: f64,
        weight: f64,
        length_pool: f64,
        count_pool: f64,
    ) -> WorkoutResult<Self> {
        Ok(Self {
            session: Session::new(action, duration, weight)?,
            length_pool: check_non_negative("length_pool", length_pool)?,
            count_pool: check_non_negative("count_pool", count_pool)?,
        })
    }
}

impl Training for Swimming {
    const LEN_STEP: f64 = LEN_STROKE;

    fn session(&self) -> &Session {
        &self.session
    }

    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Swimming
    }

    fn mean_speed(&self) -> f64 {
        self.length_pool * self.count_pool / M_IN_KM / self.session.duration
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed() + CALORIES_MEAN_SPEED_SHIFT)
            * CALORIES_WEIGHT_MULTIPLIER
            * self.session.weight
            * self.session.duration
    }
}
