//! Derived metrics snapshot, message formatting and batch processing

use serde::{Deserialize, Serialize};

use crate::calories::CalorieCalculator;
use crate::error::{FitStatsError, Result};
use crate::models::{Sport, WorkoutRecord};
use crate::packet::SensorPacket;

/// Derived metrics for one workout, computed fresh from the record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSummary {
    pub sport: Sport,
    pub duration_hours: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories: f64,
}

impl WorkoutSummary {
    /// Compute all metrics for a record and snapshot them
    pub fn from_record(record: &WorkoutRecord) -> Result<Self> {
        Ok(Self {
            sport: record.sport(),
            duration_hours: record.duration_hours(),
            distance_km: CalorieCalculator::distance_km(record),
            mean_speed_kmh: CalorieCalculator::mean_speed_kmh(record),
            calories: CalorieCalculator::spent_calories(record)?,
        })
    }
}

/// Outcome for one packet of a batch, in input order
#[derive(Debug)]
pub enum BatchEntry {
    /// Packet decoded and summarized
    Summarized(WorkoutSummary),
    /// Packet rejected; `index` is its zero-based batch position
    Rejected {
        index: usize,
        code: String,
        error: FitStatsError,
    },
}

/// Summarize a packet batch, preserving input order
///
/// Hardened mode (`strict = false`) records a bad packet as a
/// `Rejected` entry and keeps going, so one bad packet never poisons
/// its neighbors. Strict mode stops at the first bad packet; its
/// `Rejected` entry is always the last one returned.
pub fn summarize_batch(packets: &[SensorPacket], strict: bool) -> Vec<BatchEntry> {
    let mut entries = Vec::with_capacity(packets.len());

    for (index, packet) in packets.iter().enumerate() {
        let outcome = packet
            .decode()
            .and_then(|record| WorkoutSummary::from_record(&record));

        match outcome {
            Ok(summary) => entries.push(BatchEntry::Summarized(summary)),
            Err(error) => {
                tracing::warn!(
                    index = index + 1,
                    code = %packet.workout_type,
                    error = %error,
                    "Rejecting bad packet"
                );
                entries.push(BatchEntry::Rejected {
                    index,
                    code: packet.workout_type.clone(),
                    error,
                });
                if strict {
                    break;
                }
            }
        }
    }

    entries
}

impl std::fmt::Display for WorkoutSummary {
    /// Fixed message template, three decimals for every float field
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Workout type: {}; Duration: {:.3} h; Distance: {:.3} km; Avg speed: {:.3}; Calories burned: {:.3}.",
            self.sport, self.duration_hours, self.distance_km, self.mean_speed_kmh, self.calories
        )
    }
}
