//! Running - steps of 0.65 m

use super::{M_IN_H, M_IN_KM, Session, Training};
use crate::dispatch::WorkoutKind;
use crate::error::WorkoutResult;

const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.79;

#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    session: Session,
}

impl Running {
    pub fn new(action: u64, duration: f64, weight: f64) -> WorkoutResult<Self> {
        Ok(Self {
            session: Session::new(action, duration, weight)?,
        })
    }
}

impl Training for Running {
    fn session(&self) -> &Session {
        &self.session
    }

    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Running
    }

    fn spent_calories(&self) -> f64 {
        let duration_in_min = self.session.duration * M_IN_H;
        (CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed() + CALORIES_MEAN_SPEED_SHIFT)
            * self.session.weight
            / M_IN_KM
            * duration_in_min
    }
}
