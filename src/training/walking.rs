//! Sports walking - calories depend on height

use super::{CM_IN_M, KM_H_IN_M_S_COEFF, M_IN_H, Session, Training, check_non_negative};
use crate::dispatch::WorkoutKind;
use crate::error::{WorkoutError, WorkoutResult};

const WALKING_TYPE_COEFF: f64 = 0.035;
const SPEED_ON_HEIGHT_COEFF: f64 = 0.029;

#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    session: Session,
    /// Height in cm
    height: f64,
}

impl SportsWalking {
    pub fn new(action: u64, duration: f64, weight: f64, height: f64) -> WorkoutResult<Self> {
        let session = Session::new(action, duration, weight)?;
        if height == 0.0 {
            return Err(WorkoutError::DivisionByZero { field: "height" });
        }
        let height = check_non_negative("height", height)?;
        Ok(Self { session, height })
    }
}

impl Training for SportsWalking {
    fn session(&self) -> &Session {
        &self.session
    }

    fn kind(&self) -> WorkoutKind {
        WorkoutKind::SportsWalking
    }

    fn spent_calories(&self) -> f64 {
        let mean_speed_m_s = self.mean_speed() / KM_H_IN_M_S_COEFF;
        let height_in_m = self.height / CM_IN_M;
        let duration_in_min = self.session.duration * M_IN_H;
        let weight = self.session.weight;
        (WALKING_TYPE_COEFF * weight
            + (mean_speed_m_s.powi(2) / height_in_m) * SPEED_ON_HEIGHT_COEFF * weight)
            * duration_in_min
    }
}
