//! Neurotone Signal Core
//!
//! Deterministic synthesis of brainwave-entrainment waveforms: pure tones,
//! binaural pairs, isochronic pulse trains, band-to-band frequency sweeps,
//! and amplitude/spectral modulation.
//!
//! # Overview
//!
//! All components render into fully materialized [`Waveform`] buffers and
//! are pure functions of their explicit inputs plus an immutable shared
//! [`SignalConfig`]. There is no I/O, no suspension point, and no ambient
//! state, so synthesis may run freely in parallel across sessions.
//!
//! Audio container encoding (PCM quantization, WAV framing, transport) is
//! the consumer's concern; the contract here ends at a buffer normalized
//! to [-1, 1].
//!
//! # Determinism
//!
//! The only randomized operation is the rogue pattern, and its noise
//! source is always injected by the caller as a seeded PCG32 generator.
//! Given equal inputs and equal generator state, every operation is
//! sample-identical across runs. The [`rng`] module derives independent
//! reproducible seeds per component via BLAKE3.
//!
//! # Crate Structure
//!
//! - [`band`] - Brainwave band catalog (bounds and representative tones)
//! - [`config`] - Validated immutable synthesis configuration
//! - [`error`] - Precondition error taxonomy
//! - [`filter`] - Biquad and one-pole filters
//! - [`modulation`] - Psychological modulation and rogue patterns
//! - [`oscillator`] - Phase accumulation and waveform primitives
//! - [`rng`] - Deterministic seed derivation
//! - [`sequence`] - Click-free entrainment sweeps
//! - [`synth`] - Tone, binaural, and isochronic synthesis
//! - [`waveform`] - Materialized sample buffers

pub mod band;
pub mod config;
pub mod error;
pub mod filter;
pub mod modulation;
pub mod oscillator;
pub mod rng;
pub mod sequence;
pub mod synth;
pub mod waveform;

// Re-export main types at crate root
pub use band::BrainwaveBand;
pub use config::SignalConfig;
pub use error::{SignalError, SignalResult};
pub use modulation::ModulationEngine;
pub use sequence::EntrainmentSequencer;
pub use synth::SignalSynthesizer;
pub use waveform::Waveform;

#[cfg(test)]
mod integration_tests {
    use super::*;
    use crate::rng::create_rng;
    use rustfft::num_complex::Complex;
    use rustfft::FftPlanner;

    /// Magnitude spectrum of the first half of the FFT bins.
    fn magnitude_spectrum(samples: &[f64]) -> Vec<f64> {
        let mut buffer: Vec<Complex<f64>> =
            samples.iter().map(|&s| Complex::new(s, 0.0)).collect();
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(buffer.len());
        fft.process(&mut buffer);
        buffer[..buffer.len() / 2].iter().map(|c| c.norm()).collect()
    }

    /// Index of the largest magnitude bin, ignoring DC.
    fn peak_bin(spectrum: &[f64]) -> usize {
        spectrum
            .iter()
            .enumerate()
            .skip(1)
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
            .map(|(i, _)| i)
            .unwrap()
    }

    #[test]
    fn test_binaural_beat_frequency_in_spectrum() {
        let config = SignalConfig::new(44100, 1.0, 40.0, 2.0).unwrap();
        let synth = SignalSynthesizer::new(config);

        let (left, right) = synth.binaural(100.0, 10.0).unwrap();
        assert_eq!(left.len(), 88200);

        let bin_hz = 44100.0 / left.len() as f64;
        let left_peak = peak_bin(&magnitude_spectrum(&left.samples)) as f64 * bin_hz;
        let right_peak = peak_bin(&magnitude_spectrum(&right.samples)) as f64 * bin_hz;

        let beat = right_peak - left_peak;
        assert!(
            (beat - 10.0).abs() <= bin_hz,
            "measured beat {beat} Hz outside one bin of 10 Hz"
        );
    }

    #[test]
    fn test_rogue_pattern_spectrum_stays_in_band() {
        let config = SignalConfig::new(2000, 50.0, 400.0, 1.0).unwrap();
        let synth = SignalSynthesizer::new(config);
        let engine = ModulationEngine::new(config);

        let base = synth.generate(100.0).unwrap();
        let bin_hz = 2000.0 / base.len() as f64;

        for influence in [0.0, 0.3, 0.7, 1.0] {
            let mut rng = create_rng(1234);
            let out = engine.rogue_pattern(&base, influence, &mut rng).unwrap();
            let spectrum = magnitude_spectrum(&out.samples);

            let total: f64 = spectrum.iter().map(|m| m * m).sum();
            // Out-of-band measured an octave past each edge; the cascade
            // rolloff makes everything beyond that negligible.
            let outside: f64 = spectrum
                .iter()
                .enumerate()
                .filter(|(i, _)| {
                    let freq = *i as f64 * bin_hz;
                    freq < 25.0 || freq > 800.0
                })
                .map(|(_, m)| m * m)
                .sum();

            assert!(total > 0.0);
            assert!(
                outside / total < 1e-2,
                "influence {influence}: out-of-band energy ratio {}",
                outside / total
            );
        }
    }

    #[test]
    fn test_full_pipeline_determinism() {
        let config = SignalConfig::new(4000, 20.0, 500.0, 1.0).unwrap();
        let sequencer = EntrainmentSequencer::new(config);
        let engine = ModulationEngine::new(config);

        let render = || {
            let sweep = sequencer
                .sequence(BrainwaveBand::Beta, BrainwaveBand::Theta)
                .unwrap();
            let modulated = engine.psychological_modulation(&sweep, 0.5).unwrap();
            let mut rng = create_rng(rng::derive_component_seed(7, "turn-1"));
            engine.rogue_pattern(&modulated, 0.3, &mut rng).unwrap()
        };

        let first = render();
        let second = render();
        assert_eq!(first.samples, second.samples);
        assert_eq!(first.sample_rate, second.sample_rate);
    }

    #[test]
    fn test_generated_tone_peak_is_at_requested_frequency() {
        let config = SignalConfig::new(2000, 1.0, 40.0, 2.0).unwrap();
        let synth = SignalSynthesizer::new(config);

        let tone = synth.generate(25.0).unwrap();
        let bin_hz = 2000.0 / tone.len() as f64;
        let peak = peak_bin(&magnitude_spectrum(&tone.samples)) as f64 * bin_hz;
        assert!((peak - 25.0).abs() <= bin_hz);
    }
}
