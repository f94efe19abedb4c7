//! Error types and exit codes for ramal
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (missing data file, unknown station, no route)

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes reported by the ramal binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing data file, unknown station, no route (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during ramal operations
#[derive(Error, Debug)]
pub enum RamalError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("station data not found: {path:?}")]
    DataNotFound { path: PathBuf },

    #[error("invalid station record at line {line}: {reason}")]
    InvalidRecord { line: u64, reason: String },

    #[error("conflicting coordinates for station {name} at row {id}")]
    ConflictingCoordinates { name: String, id: u64 },

    #[error("station not found: {name}")]
    StationNotFound { name: String },

    #[error("no route exists from {origin} to {destination}")]
    Unreachable { origin: String, destination: String },

    // Generic failures (exit code 1)
    /// Route reconstruction hit a station with no recorded predecessor.
    /// The search itself succeeded, so this is an internal invariant
    /// violation, not a user error.
    #[error("route reconstruction stalled at {station}: no predecessor recorded")]
    BrokenPath { station: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RamalError {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            // Usage errors
            RamalError::UnknownFormat(_) | RamalError::UsageError(_) => ExitCode::Usage,

            // Data errors
            RamalError::DataNotFound { .. }
            | RamalError::InvalidRecord { .. }
            | RamalError::ConflictingCoordinates { .. }
            | RamalError::StationNotFound { .. }
            | RamalError::Unreachable { .. } => ExitCode::Data,

            // Generic failures
            RamalError::BrokenPath { .. }
            | RamalError::Io(_)
            | RamalError::Csv(_)
            | RamalError::Json(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            RamalError::UnknownFormat(_) => "unknown_format",
            RamalError::UsageError(_) => "usage_error",
            RamalError::DataNotFound { .. } => "data_not_found",
            RamalError::InvalidRecord { .. } => "invalid_record",
            RamalError::ConflictingCoordinates { .. } => "conflicting_coordinates",
            RamalError::StationNotFound { .. } => "station_not_found",
            RamalError::Unreachable { .. } => "unreachable",
            RamalError::BrokenPath { .. } => "broken_path",
            RamalError::Io(_) => "io_error",
            RamalError::Csv(_) => "csv_error",
            RamalError::Json(_) => "json_error",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for ramal operations
pub type Result<T> = std::result::Result<T, RamalError>;
