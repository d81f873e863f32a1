//! Module for the error management
use thiserror::Error;

/// Specific line from a CSV file that could not be read
#[derive(Debug)]
pub struct LineError {
    /// Headers of the CSV file
    pub headers: Vec<String>,
    /// Values of the line that could not be parsed
    pub values: Vec<String>,
}

/// An error that can occur when loading or querying route data.
#[derive(Error, Debug)]
pub enum Error {
    /// The requested (origin, destination) pair is not in the table.
    /// Expected outcome for a selection with no data, not a fault.
    #[error("no route from '{origin}' to '{destination}'")]
    RouteNotFound { origin: String, destination: String },
    /// A mode was given a non-positive total time. Progress is undefined
    /// for such a duration, so the source data is considered broken.
    #[error("mode '{mode}' has non-positive total time {minutes} min")]
    NonPositiveTime { mode: String, minutes: f64 },
    /// Impossible to read a file
    #[error("impossible to read '{file_name}'")]
    NamedFileIO {
        /// The file name that could not be read
        file_name: String,
        /// The inital error that caused the unability to read the file
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// Impossible to read a CSV file
    #[error("impossible to read csv file '{file_name}'")]
    CSVError {
        /// File name that could not be parsed as CSV
        file_name: String,
        /// The initial error by the csv library
        #[source]
        source: csv::Error,
        /// The line that could not be parsed by the csv library
        line_in_error: Option<LineError>,
    },
}
