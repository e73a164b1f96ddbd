//! Tone, binaural, and isochronic synthesis.

use crate::config::SignalConfig;
use crate::error::SignalResult;
use crate::oscillator::{sine, square, PhaseAccumulator};
use crate::waveform::Waveform;

/// Default on-fraction of the isochronic pulse cycle.
pub const DEFAULT_DUTY_CYCLE: f64 = 0.5;

/// The isochronic gate pulses at carrier frequency divided by this.
const PULSE_DIVISOR: f64 = 10.0;

/// Produces raw waveforms from frequency parameters.
///
/// Every method is a pure function of its inputs and the shared
/// [`SignalConfig`]; instances are freely shareable across threads.
#[derive(Debug, Clone, Copy)]
pub struct SignalSynthesizer {
    config: SignalConfig,
}

impl SignalSynthesizer {
    /// Creates a synthesizer over the given configuration.
    pub fn new(config: SignalConfig) -> Self {
        Self { config }
    }

    /// The configuration this synthesizer renders with.
    pub fn config(&self) -> &SignalConfig {
        &self.config
    }

    /// Generates a constant-frequency tone at the configured default
    /// duration.
    pub fn generate(&self, frequency: f64) -> SignalResult<Waveform> {
        self.generate_for(frequency, self.config.duration())
    }

    /// Generates a constant-frequency tone.
    ///
    /// The buffer holds `round(sample_rate * duration)` samples.
    ///
    /// # Errors
    /// `InvalidFrequency` unless `0 < frequency < Nyquist`;
    /// `InvalidDuration` unless `duration > 0`.
    pub fn generate_for(&self, frequency: f64, duration: f64) -> SignalResult<Waveform> {
        self.config.ensure_frequency(frequency)?;
        self.config.ensure_duration(duration)?;

        let num_samples = self.config.num_samples(duration);
        let mut samples = Vec::with_capacity(num_samples);
        let mut phase_acc = PhaseAccumulator::new(self.config.sample_rate() as f64);

        for _ in 0..num_samples {
            let phase = phase_acc.advance(frequency);
            samples.push(sine(phase));
        }

        Ok(Waveform::new(samples, self.config.sample_rate()))
    }

    /// Generates a binaural pair: left at `base_freq`, right at
    /// `base_freq + beat_freq`.
    ///
    /// Both channels share length and sample rate; the perceived beat
    /// equals `beat_freq`. Both tone frequencies must individually pass
    /// the `generate` preconditions.
    pub fn binaural(&self, base_freq: f64, beat_freq: f64) -> SignalResult<(Waveform, Waveform)> {
        let left = self.generate(base_freq)?;
        let right = self.generate(base_freq + beat_freq)?;
        Ok((left, right))
    }

    /// Generates an isochronic tone with the default 50% duty cycle.
    pub fn isochronic(&self, frequency: f64) -> SignalResult<Waveform> {
        self.isochronic_with_duty(frequency, DEFAULT_DUTY_CYCLE)
    }

    /// Generates an isochronic tone: a carrier at `frequency` gated on and
    /// off by a pulse train at one tenth of the carrier frequency.
    ///
    /// The ±1 pulse is remapped to [0, 1] before multiplying the carrier.
    ///
    /// # Errors
    /// `InvalidDutyCycle` unless `0 < duty_cycle < 1`, plus the `generate`
    /// preconditions.
    pub fn isochronic_with_duty(&self, frequency: f64, duty_cycle: f64) -> SignalResult<Waveform> {
        self.config.ensure_frequency(frequency)?;
        if !duty_cycle.is_finite() || duty_cycle <= 0.0 || duty_cycle >= 1.0 {
            return Err(crate::error::SignalError::InvalidDutyCycle { duty_cycle });
        }

        let sample_rate = self.config.sample_rate() as f64;
        let num_samples = self.config.num_samples(self.config.duration());
        let pulse_freq = frequency / PULSE_DIVISOR;

        let mut samples = Vec::with_capacity(num_samples);
        let mut carrier_acc = PhaseAccumulator::new(sample_rate);
        let mut gate_acc = PhaseAccumulator::new(sample_rate);

        for _ in 0..num_samples {
            let carrier = sine(carrier_acc.advance(frequency));
            let gate = (square(gate_acc.advance(pulse_freq), duty_cycle) + 1.0) / 2.0;
            samples.push(carrier * gate);
        }

        Ok(Waveform::new(samples, self.config.sample_rate()))
    }
}
