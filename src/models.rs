//! Core domain types for workout sessions
//!
//! A `WorkoutRecord` holds validated raw sensor readings for one session:
//! the fields shared by every sport plus a per-sport payload. Derived
//! metrics (distance, speed, calories) are never stored on the record;
//! the calculation layer recomputes them on demand.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{FitStatsError, Result};

/// Sport types supported by the statistics pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sport {
    Running,
    Walking,
    Swimming,
}

impl Sport {
    /// Wire code used by sensor packets
    pub fn code(&self) -> &'static str {
        match self {
            Sport::Running => "RUN",
            Sport::Walking => "WLK",
            Sport::Swimming => "SWM",
        }
    }

    /// Number of values a sensor packet must carry for this sport
    pub fn expected_values(&self) -> usize {
        match self {
            Sport::Running => 3,
            Sport::Walking => 4,
            Sport::Swimming => 5,
        }
    }

    /// All supported sports, in wire-code order
    pub fn all() -> [Sport; 3] {
        [Sport::Running, Sport::Walking, Sport::Swimming]
    }
}

impl std::fmt::Display for Sport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sport::Running => write!(f, "Running"),
            Sport::Walking => write!(f, "Walking"),
            Sport::Swimming => write!(f, "Swimming"),
        }
    }
}

impl FromStr for Sport {
    type Err = FitStatsError;

    /// Codes are exact and case-sensitive, matching the sensor firmware table
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "RUN" => Ok(Sport::Running),
            "WLK" => Ok(Sport::Walking),
            "SWM" => Ok(Sport::Swimming),
            _ => Err(FitStatsError::UnknownWorkoutType {
                code: s.to_string(),
            }),
        }
    }
}

/// Per-sport sensor readings attached to a workout record
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SportReadings {
    /// Running carries no readings beyond the common fields
    Running,
    /// Walking adds the athlete's height, a divisor in its calorie formula
    Walking { height_cm: f64 },
    /// Swimming adds the pool geometry its mean speed is derived from
    Swimming { pool_length_m: f64, pool_laps: u32 },
}

/// Validated, immutable raw readings for one workout session
///
/// Built through the per-sport constructors, which reject readings that
/// would break the derived metrics: non-positive duration or weight, and
/// for walking a non-positive height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkoutRecord {
    action_count: u32,
    duration_hours: f64,
    weight_kg: f64,
    readings: SportReadings,
}

impl WorkoutRecord {
    /// Build a running record from step count, duration and athlete weight
    pub fn running(action_count: u32, duration_hours: f64, weight_kg: f64) -> Result<Self> {
        require_positive(Sport::Running, "duration_hours", duration_hours)?;
        require_positive(Sport::Running, "weight_kg", weight_kg)?;
        Ok(Self {
            action_count,
            duration_hours,
            weight_kg,
            readings: SportReadings::Running,
        })
    }

    /// Build a walking record; height feeds the walking calorie formula
    pub fn walking(
        action_count: u32,
        duration_hours: f64,
        weight_kg: f64,
        height_cm: f64,
    ) -> Result<Self> {
        require_positive(Sport::Walking, "duration_hours", duration_hours)?;
        require_positive(Sport::Walking, "weight_kg", weight_kg)?;
        require_positive(Sport::Walking, "height_cm", height_cm)?;
        Ok(Self {
            action_count,
            duration_hours,
            weight_kg,
            readings: SportReadings::Walking { height_cm },
        })
    }

    /// Build a swimming record from stroke count, duration, weight and
    /// pool geometry
    pub fn swimming(
        action_count: u32,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_laps: u32,
    ) -> Result<Self> {
        require_positive(Sport::Swimming, "duration_hours", duration_hours)?;
        require_positive(Sport::Swimming, "weight_kg", weight_kg)?;
        Ok(Self {
            action_count,
            duration_hours,
            weight_kg,
            readings: SportReadings::Swimming {
                pool_length_m,
                pool_laps,
            },
        })
    }

    /// Sport tag for this record
    pub fn sport(&self) -> Sport {
        match self.readings {
            SportReadings::Running => Sport::Running,
            SportReadings::Walking { .. } => Sport::Walking,
            SportReadings::Swimming { .. } => Sport::Swimming,
        }
    }

    /// Steps (running/walking) or strokes (swimming) counted by the sensor
    pub fn action_count(&self) -> u32 {
        self.action_count
    }

    /// Session duration in hours
    pub fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    /// Athlete weight in kilograms
    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    /// Per-sport readings
    pub fn readings(&self) -> SportReadings {
        self.readings
    }
}

fn require_positive(sport: Sport, field: &str, value: f64) -> Result<()> {
    if value.is_nan() || value <= 0.0 {
        return Err(FitStatsError::InvalidInput {
            sport,
            reason: format!("{} must be positive, got {}", field, value),
        });
    }
    Ok(())
}
