//! Brainwave band catalog.
//!
//! Static lookup of the named EEG frequency bands and their canonical
//! bounds. The representative frequency of a band (its midpoint) is what
//! the synthesis components render when asked to target that band.

use serde::{Deserialize, Serialize};

/// Named EEG frequency band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BrainwaveBand {
    /// 0.5-4 Hz: deep sleep.
    Delta,
    /// 4-8 Hz: deep relaxation, meditation.
    Theta,
    /// 8-13 Hz: relaxed awareness.
    Alpha,
    /// 13-30 Hz: active thinking.
    Beta,
    /// 30-40 Hz: high-level cognition.
    Gamma,
}

impl BrainwaveBand {
    /// All bands, in ascending frequency order.
    pub const ALL: [BrainwaveBand; 5] = [
        BrainwaveBand::Delta,
        BrainwaveBand::Theta,
        BrainwaveBand::Alpha,
        BrainwaveBand::Beta,
        BrainwaveBand::Gamma,
    ];

    /// Lower and upper bound of the band in Hz.
    pub fn bounds(self) -> (f64, f64) {
        match self {
            BrainwaveBand::Delta => (0.5, 4.0),
            BrainwaveBand::Theta => (4.0, 8.0),
            BrainwaveBand::Alpha => (8.0, 13.0),
            BrainwaveBand::Beta => (13.0, 30.0),
            BrainwaveBand::Gamma => (30.0, 40.0),
        }
    }

    /// Lower bound in Hz.
    pub fn low(self) -> f64 {
        self.bounds().0
    }

    /// Upper bound in Hz.
    pub fn high(self) -> f64 {
        self.bounds().1
    }

    /// Representative frequency: the band midpoint.
    pub fn representative(self) -> f64 {
        let (low, high) = self.bounds();
        (low + high) / 2.0
    }
}
