//! Workout metric calculations
//!
//! Distance and mean speed are shared across sports; calories burned go
//! through a per-sport formula selected from a dispatch table. All
//! arithmetic is plain `f64` so results reproduce the sensor firmware's
//! floating-point behavior exactly.

use thiserror::Error;

use crate::models::{Sport, SportReadings, WorkoutRecord};

/// Metres advanced by one step while running or walking
pub const STEP_LENGTH_M: f64 = 0.65;

/// Metres advanced by one stroke while swimming
pub const STROKE_LENGTH_M: f64 = 1.38;

const M_IN_KM: f64 = 1000.0;
const MIN_IN_HOUR: f64 = 60.0;
const CM_IN_M: f64 = 100.0;
const KMH_TO_MS: f64 = 0.278;

const RUN_SPEED_MULTIPLIER: f64 = 18.0;
const RUN_SPEED_SHIFT: f64 = 1.79;
const WALK_WEIGHT_FACTOR: f64 = 0.035;
const WALK_SPEED_HEIGHT_FACTOR: f64 = 0.029;
const SWIM_SPEED_SHIFT: f64 = 1.1;
const SWIM_WEIGHT_MULTIPLIER: f64 = 2.0;

/// Calorie calculation errors
#[derive(Error, Debug)]
pub enum CalorieError {
    #[error("Unsupported sport for calorie calculation: {0:?}")]
    UnsupportedSport(Sport),
}

/// Calorie formula signature shared by every sport in the dispatch table
///
/// A formula assumes a record of its own sport, so the table stays
/// crate-private; `spent_calories` is the public surface and always
/// pairs a record with its own sport's formula.
pub(crate) type CalorieFn = fn(&WorkoutRecord) -> f64;

/// Core calculation engine for workout metrics
pub struct CalorieCalculator;

impl CalorieCalculator {
    /// Metres advanced by one action unit: stride for running and
    /// walking, stroke for swimming
    pub fn step_length_m(sport: Sport) -> f64 {
        match sport {
            Sport::Running | Sport::Walking => STEP_LENGTH_M,
            Sport::Swimming => STROKE_LENGTH_M,
        }
    }

    /// Distance covered in kilometres
    /// distance = action_count × step_length / 1000
    pub fn distance_km(record: &WorkoutRecord) -> f64 {
        record.action_count() as f64 * Self::step_length_m(record.sport()) / M_IN_KM
    }

    /// Mean speed in km/h
    ///
    /// Running and walking derive it from the step-based distance.
    /// Swimming derives it from pool geometry and ignores the
    /// stroke-based distance.
    pub fn mean_speed_kmh(record: &WorkoutRecord) -> f64 {
        match record.readings() {
            SportReadings::Swimming {
                pool_length_m,
                pool_laps,
            } => pool_length_m * pool_laps as f64 / M_IN_KM / record.duration_hours(),
            _ => Self::distance_km(record) / record.duration_hours(),
        }
    }

    /// Look up the calorie formula registered for a sport
    ///
    /// A lookup miss means no formula is implemented for that sport and
    /// surfaces as `CalorieError::UnsupportedSport` in `spent_calories`.
    pub(crate) fn formula(sport: Sport) -> Option<CalorieFn> {
        match sport {
            Sport::Running => Some(Self::running_calories),
            Sport::Walking => Some(Self::walking_calories),
            Sport::Swimming => Some(Self::swimming_calories),
        }
    }

    /// Calories burned during the workout, via the sport's formula
    pub fn spent_calories(record: &WorkoutRecord) -> Result<f64, CalorieError> {
        let formula = Self::formula(record.sport())
            .ok_or(CalorieError::UnsupportedSport(record.sport()))?;
        Ok(formula(record))
    }

    /// Running calories
    /// kcal = (18 × speed + 1.79) × weight / 1000 × duration_h × 60
    fn running_calories(record: &WorkoutRecord) -> f64 {
        (RUN_SPEED_MULTIPLIER * Self::mean_speed_kmh(record) + RUN_SPEED_SHIFT)
            * record.weight_kg()
            / M_IN_KM
            * record.duration_hours()
            * MIN_IN_HOUR
    }

    /// Walking calories
    /// kcal = (0.035 × weight + speed_ms² / height_m × 0.029 × weight) × duration_min
    fn walking_calories(record: &WorkoutRecord) -> f64 {
        let height_cm = match record.readings() {
            SportReadings::Walking { height_cm } => height_cm,
            other => unreachable!("walking formula applied to {:?} readings", other),
        };
        let speed_ms = Self::mean_speed_kmh(record) * KMH_TO_MS;
        let height_m = height_cm / CM_IN_M;
        let duration_min = record.duration_hours() * MIN_IN_HOUR;
        (WALK_WEIGHT_FACTOR * record.weight_kg()
            + speed_ms * speed_ms / height_m * WALK_SPEED_HEIGHT_FACTOR * record.weight_kg())
            * duration_min
    }

    /// Swimming calories
    /// kcal = (speed + 1.1) × 2 × weight × duration_h
    fn swimming_calories(record: &WorkoutRecord) -> f64 {
        (Self::mean_speed_kmh(record) + SWIM_SPEED_SHIFT)
            * SWIM_WEIGHT_MULTIPLIER
            * record.weight_kg()
            * record.duration_hours()
    }
}
