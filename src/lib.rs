// Library interface for the fitstats modules
// This allows integration tests to access the core functionality

pub mod calories;
pub mod config;
pub mod error;
pub mod import;
pub mod logging;
pub mod models;
pub mod packet;
pub mod summary;

// Re-export commonly used types for convenience
pub use calories::{CalorieCalculator, CalorieError};
pub use config::AppConfig;
pub use error::{FitStatsError, Result};
pub use import::{import_packets, ImportError};
pub use logging::{LogConfig, LogFormat, LogLevel};
pub use models::{Sport, SportReadings, WorkoutRecord};
pub use packet::SensorPacket;
pub use summary::{summarize_batch, BatchEntry, WorkoutSummary};
