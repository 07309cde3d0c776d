//! stridecalc - Workout statistics calculator
//!
//! Distance, mean speed and calories for running, sports walking and swimming

pub mod dispatch;
pub mod error;
pub mod packages;
pub mod report;
pub mod training;

pub use dispatch::{WorkoutKind, read_package};
pub use error::{WorkoutError, WorkoutResult};
pub use report::{Locale, Summary};
pub use training::{Training, Workout};
