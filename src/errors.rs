// Error types for race-strategy

use snafu::Snafu;
use std::io;

#[derive(Debug, Snafu)]
pub enum RaceStrategyError {
    // Precondition violations on car or track values
    #[snafu(display("Invalid input: {field} - {reason}"))]
    InvalidInput { field: String, reason: String },

    // Catalog and preset lookups
    #[snafu(display("Unknown {kind}: {value}"))]
    UnknownComponent { kind: String, value: String },
    #[snafu(display("Unknown track: {name}"))]
    UnknownTrack { name: String },

    // Config management errors
    #[snafu(display("Could not find application data directory to save config file"))]
    NoConfigDir,
    #[snafu(display("Error reading or writing config file"))]
    ConfigIOError { source: io::Error },
    #[snafu(display("Error serializing config file"))]
    ConfigSerializeError { source: serde_json::Error },

    #[snafu(display("Error serializing report"))]
    ReportSerializeError { source: serde_json::Error },

    // Car and track description files
    #[snafu(display("Error reading input file: {path}"))]
    InputFileError { path: String, source: io::Error },
    #[snafu(display("Error parsing input file: {path}"))]
    InputParseError {
        path: String,
        source: serde_json::Error,
    },
}

impl RaceStrategyError {
    pub(crate) fn invalid_input(field: &str, reason: impl Into<String>) -> Self {
        RaceStrategyError::InvalidInput {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}
