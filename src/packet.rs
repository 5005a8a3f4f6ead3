//! Sensor packet decoding
//!
//! A packet is the untyped wire form of one workout: a short type code
//! plus an ordered value list. `decode` turns it into a validated
//! `WorkoutRecord`, checking code membership first, then arity, then
//! value types.

use serde::{Deserialize, Serialize};

use crate::error::{FitStatsError, Result};
use crate::models::{Sport, WorkoutRecord};

/// One raw reading from the sensor line
///
/// Value order is fixed by the firmware: `action_count`, `duration_hours`,
/// `weight_kg`, then per-sport extras (walking: `height_cm`; swimming:
/// `pool_length_m`, `pool_laps`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorPacket {
    pub workout_type: String,
    pub values: Vec<f64>,
}

impl SensorPacket {
    pub fn new(workout_type: &str, values: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.to_string(),
            values,
        }
    }

    /// Decode the packet into a typed workout record
    ///
    /// The workout code is checked before anything else, so an unknown
    /// code is always reported as `UnknownWorkoutType` even when the
    /// value list is malformed too.
    pub fn decode(&self) -> Result<WorkoutRecord> {
        let sport: Sport = self.workout_type.parse()?;

        let expected = sport.expected_values();
        if self.values.len() != expected {
            return Err(FitStatsError::InvalidInput {
                sport,
                reason: format!("expected {} values, got {}", expected, self.values.len()),
            });
        }

        let action_count = count_value(sport, "action_count", self.values[0])?;
        match sport {
            Sport::Running => {
                WorkoutRecord::running(action_count, self.values[1], self.values[2])
            }
            Sport::Walking => WorkoutRecord::walking(
                action_count,
                self.values[1],
                self.values[2],
                self.values[3],
            ),
            Sport::Swimming => {
                let pool_laps = count_value(sport, "pool_laps", self.values[4])?;
                WorkoutRecord::swimming(
                    action_count,
                    self.values[1],
                    self.values[2],
                    self.values[3],
                    pool_laps,
                )
            }
        }
    }
}

/// Counts arrive as floats on the wire but must be whole and non-negative
fn count_value(sport: Sport, field: &str, value: f64) -> Result<u32> {
    if value < 0.0 || value.fract() != 0.0 || value > u32::MAX as f64 {
        return Err(FitStatsError::InvalidInput {
            sport,
            reason: format!("{} must be a non-negative whole number, got {}", field, value),
        });
    }
    Ok(value as u32)
}
