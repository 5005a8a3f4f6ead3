//! Packet file intake
//!
//! Reads an ordered packet list from disk. The format is picked from the
//! file extension: `.csv` holds one packet per row with no header
//! (`RUN,15000,1,75`), `.json` holds an array of `[code, [values...]]`
//! pairs.

use csv::ReaderBuilder;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::packet::SensorPacket;

/// Packet file import errors
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("No importer for file: {0}")]
    UnsupportedFormat(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Row {row}: cannot parse {value:?} as a number")]
    InvalidValue { row: usize, value: String },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read packets from a file, preserving input order
pub fn import_packets(path: &Path) -> Result<Vec<SensorPacket>, ImportError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "csv" => import_csv(path),
        "json" => import_json(path),
        _ => Err(ImportError::UnsupportedFormat(path.display().to_string())),
    }
}

fn import_csv(path: &Path) -> Result<Vec<SensorPacket>, ImportError> {
    // Rows carry different value counts per sport, so the reader must be
    // flexible about field counts.
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut packets = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let record = result?;
        let code = record.get(0).unwrap_or_default();
        let mut values = Vec::with_capacity(record.len().saturating_sub(1));
        for field in record.iter().skip(1) {
            let value = field.parse::<f64>().map_err(|_| ImportError::InvalidValue {
                row: row + 1,
                value: field.to_string(),
            })?;
            values.push(value);
        }
        packets.push(SensorPacket::new(code, values));
    }
    Ok(packets)
}

fn import_json(path: &Path) -> Result<Vec<SensorPacket>, ImportError> {
    let contents = fs::read_to_string(path)?;
    let entries: Vec<(String, Vec<f64>)> = serde_json::from_str(&contents)?;
    Ok(entries
        .into_iter()
        .map(|(code, values)| SensorPacket::new(&code, values))
        .collect())
}
