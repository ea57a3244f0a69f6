//! Error types for peakseek.

use thiserror::Error;

/// Result alias for peakseek operations.
pub type PeakSeekResult<T> = std::result::Result<T, PeakSeekError>;

/// Errors that can occur while searching for high points.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum PeakSeekError {
    /// The search parameters are invalid.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    /// The elevation client could not be constructed.
    #[error("elevation client setup failed: {0}")]
    ClientSetup(String),
    /// The elevation service failed or returned a non-success response.
    #[error("elevation lookup at ({lat}, {lon}) failed: {reason}")]
    Upstream {
        /// Requested latitude.
        lat: f64,
        /// Requested longitude.
        lon: f64,
        /// Transport or status description.
        reason: String,
    },
    /// The elevation service answered without an elevation value.
    #[error("elevation service returned no result for ({lat}, {lon})")]
    MissingElevation {
        /// Requested latitude.
        lat: f64,
        /// Requested longitude.
        lon: f64,
    },
    /// Fewer tracked points than report slots.
    #[error("insufficient points for report: needed {needed}, got {got}")]
    InsufficientPoints {
        /// Number of slots in the report.
        needed: usize,
        /// Number of points available.
        got: usize,
    },
}
