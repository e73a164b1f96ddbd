//! Band-to-band entrainment sweeps.
//!
//! A sweep is rendered by integrating the instantaneous frequency through
//! the shared phase accumulator, never by evaluating `sin(2π·f(t)·t)`
//! directly. Phase stays continuous at every sample, so the sweep is free
//! of clicks regardless of how far apart the two bands sit.

use crate::band::BrainwaveBand;
use crate::config::SignalConfig;
use crate::error::SignalResult;
use crate::oscillator::{sine, PhaseAccumulator};
use crate::waveform::Waveform;

/// Builds click-free frequency sweeps between brainwave bands.
#[derive(Debug, Clone, Copy)]
pub struct EntrainmentSequencer {
    config: SignalConfig,
}

impl EntrainmentSequencer {
    /// Creates a sequencer over the given configuration.
    pub fn new(config: SignalConfig) -> Self {
        Self { config }
    }

    /// Sweeps between two bands across the configured default duration.
    pub fn sequence(
        &self,
        start_band: BrainwaveBand,
        target_band: BrainwaveBand,
    ) -> SignalResult<Waveform> {
        self.sequence_for(start_band, target_band, self.config.duration())
    }

    /// Sweeps from `start_band`'s representative frequency to
    /// `target_band`'s across `duration` seconds.
    ///
    /// The instantaneous frequency follows the geometric interpolation
    /// `f(t) = f0 * (f1/f0)^t`, which is perceptually even for pitch.
    /// When both bands are equal the interpolation is exactly constant
    /// and the output matches `SignalSynthesizer::generate_for` sample
    /// for sample.
    pub fn sequence_for(
        &self,
        start_band: BrainwaveBand,
        target_band: BrainwaveBand,
        duration: f64,
    ) -> SignalResult<Waveform> {
        let start_freq = start_band.representative();
        let target_freq = target_band.representative();
        self.config.ensure_frequency(start_freq)?;
        self.config.ensure_frequency(target_freq)?;
        self.config.ensure_duration(duration)?;

        let num_samples = self.config.num_samples(duration);
        let ratio = target_freq / start_freq;

        let mut samples = Vec::with_capacity(num_samples);
        let mut phase_acc = PhaseAccumulator::new(self.config.sample_rate() as f64);

        for i in 0..num_samples {
            let t = i as f64 / num_samples as f64;
            let freq = start_freq * ratio.powf(t);
            let phase = phase_acc.advance(freq);
            samples.push(sine(phase));
        }

        Ok(Waveform::new(samples, self.config.sample_rate()))
    }
}
