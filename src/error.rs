//! Unified error hierarchy for fitstats
//!
//! Provides the crate-wide error type with structured error information
//! and a common `Result` alias.

use thiserror::Error;

use crate::calories::CalorieError;
use crate::import::ImportError;
use crate::models::Sport;

/// Top-level error type for all fitstats operations
#[derive(Debug, Error)]
pub enum FitStatsError {
    /// Workout code not recognized by the packet decoder
    #[error("Unknown workout type code: {code}")]
    UnknownWorkoutType { code: String },

    /// Sensor values rejected during record construction
    #[error("Invalid input for {sport}: {reason}")]
    InvalidInput { sport: Sport, reason: String },

    /// Calorie calculation errors
    #[error("Calorie calculation error: {0}")]
    Calorie(#[from] CalorieError),

    /// Packet file import errors
    #[error("Import error: {0}")]
    Import(#[from] ImportError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for fitstats operations
pub type Result<T> = std::result::Result<T, FitStatsError>;

impl FitStatsError {
    /// Get user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            FitStatsError::UnknownWorkoutType { code } => {
                format!(
                    "Workout code {:?} is not supported (expected RUN, WLK or SWM)",
                    code
                )
            }
            FitStatsError::InvalidInput { sport, reason } => {
                format!("Sensor readings for {} rejected: {}", sport, reason)
            }
            FitStatsError::Calorie(CalorieError::UnsupportedSport(sport)) => {
                format!("No calorie formula is implemented for {}", sport)
            }
            _ => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_code_message() {
        let err = FitStatsError::UnknownWorkoutType {
            code: "BIKE".to_string(),
        };
        assert!(err.to_string().contains("BIKE"));
        assert!(err.user_message().contains("RUN, WLK or SWM"));
    }

    #[test]
    fn test_invalid_input_message() {
        let err = FitStatsError::InvalidInput {
            sport: Sport::Walking,
            reason: "duration_hours must be positive, got 0".to_string(),
        };
        assert!(err.to_string().contains("Walking"));
        assert!(err.user_message().contains("rejected"));
    }

    #[test]
    fn test_calorie_error_conversion() {
        let err: FitStatsError = CalorieError::UnsupportedSport(Sport::Swimming).into();
        assert!(matches!(err, FitStatsError::Calorie(_)));
        assert!(err.user_message().contains("Swimming"));
    }
}
