//! Error types for the signal core.

use thiserror::Error;

/// Result type for synthesis operations.
pub type SignalResult<T> = Result<T, SignalError>;

/// Errors raised by synthesis precondition checks.
///
/// Every variant is detected before any computation begins and carries the
/// offending value, so callers can report exactly what was rejected.
#[derive(Debug, Error)]
pub enum SignalError {
    /// Configuration field out of range.
    #[error("invalid config: {message}")]
    InvalidConfig {
        /// Description of the violated constraint.
        message: String,
    },

    /// Frequency outside the open interval (0, Nyquist).
    #[error("invalid frequency: {freq} Hz (must be in (0, {nyquist}) Hz)")]
    InvalidFrequency {
        /// The rejected frequency.
        freq: f64,
        /// Nyquist limit for the configured sample rate.
        nyquist: f64,
    },

    /// Non-positive or non-finite duration.
    #[error("invalid duration: {duration} seconds")]
    InvalidDuration {
        /// The rejected duration.
        duration: f64,
    },

    /// Duty cycle outside the open interval (0, 1).
    #[error("invalid duty cycle: {duty_cycle} (must be in (0, 1))")]
    InvalidDutyCycle {
        /// The rejected duty cycle.
        duty_cycle: f64,
    },

    /// Modulation intensity outside [0, 1].
    #[error("invalid intensity: {intensity} (must be in [0, 1])")]
    InvalidIntensity {
        /// The rejected intensity.
        intensity: f64,
    },

    /// Influence level outside [0, 1].
    #[error("invalid influence level: {influence} (must be in [0, 1])")]
    InvalidInfluence {
        /// The rejected influence level.
        influence: f64,
    },
}

impl SignalError {
    /// Creates an invalid config error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}
