//! Shared signal configuration.
//!
//! A [`SignalConfig`] is validated once at construction and then shared
//! read-only by every synthesis component. Invalid values are rejected
//! before any signal work happens.

use serde::Serialize;

use crate::error::{SignalError, SignalResult};

/// Immutable synthesis configuration.
///
/// Fields are private so the only way to obtain a config is through the
/// validating constructor. Copyable; each component keeps its own copy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SignalConfig {
    sample_rate: u32,
    min_freq: f64,
    max_freq: f64,
    duration: f64,
}

impl SignalConfig {
    /// Creates a validated configuration.
    ///
    /// # Arguments
    /// * `sample_rate` - Sampling rate in Hz, must be positive
    /// * `min_freq` - Lower delivery bound in Hz, must be positive
    /// * `max_freq` - Upper delivery bound in Hz, must exceed `min_freq`
    /// * `duration` - Default waveform duration in seconds, must be positive
    ///
    /// # Errors
    /// `InvalidConfig` on the first violated constraint.
    pub fn new(sample_rate: u32, min_freq: f64, max_freq: f64, duration: f64) -> SignalResult<Self> {
        if sample_rate == 0 {
            return Err(SignalError::invalid_config("sample_rate must be positive"));
        }
        if !min_freq.is_finite() || min_freq <= 0.0 {
            return Err(SignalError::invalid_config(format!(
                "min_freq must be a positive finite value, got {min_freq}"
            )));
        }
        if !max_freq.is_finite() || max_freq <= min_freq {
            return Err(SignalError::invalid_config(format!(
                "max_freq must exceed min_freq ({min_freq}), got {max_freq}"
            )));
        }
        if !duration.is_finite() || duration <= 0.0 {
            return Err(SignalError::invalid_config(format!(
                "duration must be a positive finite value, got {duration}"
            )));
        }

        Ok(Self {
            sample_rate,
            min_freq,
            max_freq,
            duration,
        })
    }

    /// Sampling rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Lower delivery bound in Hz.
    pub fn min_freq(&self) -> f64 {
        self.min_freq
    }

    /// Upper delivery bound in Hz.
    pub fn max_freq(&self) -> f64 {
        self.max_freq
    }

    /// Default waveform duration in seconds.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Nyquist frequency for the configured sample rate.
    pub fn nyquist(&self) -> f64 {
        self.sample_rate as f64 / 2.0
    }

    /// Number of samples covering `duration` seconds at the configured rate.
    pub(crate) fn num_samples(&self, duration: f64) -> usize {
        (self.sample_rate as f64 * duration).round() as usize
    }

    /// Checks that a tone frequency is renderable at the configured rate.
    pub(crate) fn ensure_frequency(&self, freq: f64) -> SignalResult<()> {
        let nyquist = self.nyquist();
        if !freq.is_finite() || freq <= 0.0 || freq >= nyquist {
            return Err(SignalError::InvalidFrequency { freq, nyquist });
        }
        Ok(())
    }

    /// Checks that a duration is usable for buffer sizing.
    pub(crate) fn ensure_duration(&self, duration: f64) -> SignalResult<()> {
        if !duration.is_finite() || duration <= 0.0 {
            return Err(SignalError::InvalidDuration { duration });
        }
        Ok(())
    }
}

impl Default for SignalConfig {
    /// The original deployment values: 44100 Hz, 1-40 Hz delivery band,
    /// 5 second default duration.
    fn default() -> Self {
        Self {
            sample_rate: 44100,
            min_freq: 1.0,
            max_freq: 40.0,
            duration: 5.0,
        }
    }
}
