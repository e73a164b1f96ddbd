//! Amplitude/spectral modulation and rogue-pattern processing.
//!
//! Two post-processing paths over an already synthesized waveform:
//! a deterministic "psychological" modulation (bell envelope plus harmonic
//! overtones), and the rogue pattern, which blends the input with filtered
//! noise and wavelet transients while keeping the delivered spectrum inside
//! the configured frequency band.

use rand_pcg::Pcg32;

use crate::config::SignalConfig;
use crate::error::{SignalError, SignalResult};
use crate::filter::{BiquadFilter, OnePoleFilter, BUTTERWORTH_Q};
use crate::oscillator::white_noise;
use crate::waveform::Waveform;

/// Harmonic overtone ratios summed into the modulated signal.
const HARMONIC_RATIOS: [usize; 3] = [2, 3, 4];

/// Envelope spread as a fraction of signal length.
const ENVELOPE_SPREAD_DIVISOR: f64 = 6.0;

/// Influence level above which a warning event is emitted.
const HIGH_INFLUENCE_THRESHOLD: f64 = 0.7;

/// Number of pattern-interrupt bursts spread across the buffer.
const INTERRUPT_COUNT: usize = 4;

/// Wavelet width in samples per unit of influence.
const INTERRUPT_WIDTH_SCALE: f64 = 10.0;

/// Cascade depth of the band-limiting filters. Four Butterworth passes
/// per edge approximate the steep rolloff of a high-order bandpass.
const BAND_LIMIT_PASSES: usize = 4;

/// Post-processes waveforms with amplitude envelopes, overtones, and
/// band-constrained noise injection.
#[derive(Debug, Clone, Copy)]
pub struct ModulationEngine {
    config: SignalConfig,
}

impl ModulationEngine {
    /// Creates a modulation engine over the given configuration.
    pub fn new(config: SignalConfig) -> Self {
        Self { config }
    }

    /// Applies a bell-shaped amplitude envelope and harmonic overtones.
    ///
    /// The envelope is `1 + intensity * gauss(i)` centered mid-signal with
    /// spread `len/6`, so it never dips below unity. Overtones are copies
    /// of the input shifted by their harmonic ratio, smoothed with a
    /// one-pole lowpass, and attenuated by the ratio. The combined signal
    /// is rescaled to exact unit peak; an all-zero input comes back
    /// unchanged. Deterministic.
    ///
    /// # Errors
    /// `InvalidIntensity` unless `0 <= intensity <= 1`.
    pub fn psychological_modulation(
        &self,
        signal: &Waveform,
        intensity: f64,
    ) -> SignalResult<Waveform> {
        if !intensity.is_finite() || !(0.0..=1.0).contains(&intensity) {
            return Err(SignalError::InvalidIntensity { intensity });
        }

        let n = signal.len();
        if n == 0 {
            return Ok(signal.clone());
        }

        let center = (n as f64 - 1.0) / 2.0;
        let spread = n as f64 / ENVELOPE_SPREAD_DIVISOR;

        let harmonics = self.harmonic_overtones(&signal.samples);

        let mut samples = Vec::with_capacity(n);
        for (i, &input) in signal.samples.iter().enumerate() {
            let z = (i as f64 - center) / spread;
            let envelope = 1.0 + intensity * (-0.5 * z * z).exp();
            samples.push(input * envelope + intensity * harmonics[i]);
        }

        let mut output = Waveform::new(samples, signal.sample_rate);
        output.normalize_peak();
        Ok(output)
    }

    /// Sums smoothed, shifted copies of the input at the 2:1, 3:1, and
    /// 4:1 harmonic ratios.
    fn harmonic_overtones(&self, input: &[f64]) -> Vec<f64> {
        let n = input.len();
        let sample_rate = self.config.sample_rate() as f64;
        let mut harmonics = vec![0.0; n];

        for ratio in HARMONIC_RATIOS {
            let gain = 1.0 / ratio as f64;
            let mut smoother = OnePoleFilter::new(sample_rate / (2.0 * ratio as f64), sample_rate);
            for i in 0..n {
                // Circular shift by the ratio keeps the copy time-aligned
                // with the source length.
                let shifted = input[(i + n - (ratio % n)) % n];
                harmonics[i] += smoother.process(shifted) * gain;
            }
        }

        harmonics
    }

    /// Blends the base signal with a subliminal noise bed and wavelet
    /// pattern interrupts, band-limited to the configured range.
    ///
    /// The mix is
    /// `base*(1-level) + subliminal*level*0.5 + interrupts*level*0.5`,
    /// run through cascaded highpass/lowpass filters at the configured
    /// band edges and rescaled to unit peak (zero-peak buffers come back
    /// unscaled). Deterministic for a given generator state; emits a
    /// non-fatal warning event above the high-influence threshold.
    ///
    /// # Errors
    /// `InvalidInfluence` unless `0 <= influence_level <= 1`.
    pub fn rogue_pattern(
        &self,
        base_signal: &Waveform,
        influence_level: f64,
        noise_source: &mut Pcg32,
    ) -> SignalResult<Waveform> {
        if !influence_level.is_finite() || !(0.0..=1.0).contains(&influence_level) {
            return Err(SignalError::InvalidInfluence { influence: influence_level });
        }
        if influence_level > HIGH_INFLUENCE_THRESHOLD {
            tracing::warn!(influence_level, "high influence level in rogue pattern generation");
        }

        let n = base_signal.len();
        if n == 0 {
            return Ok(base_signal.clone());
        }

        let sample_rate = self.config.sample_rate() as f64;

        // Subliminal bed: white noise through a heavy lowpass at the
        // bottom of the delivery band.
        let noise = white_noise(noise_source, n);
        let mut bed_filter = OnePoleFilter::new(self.config.min_freq(), sample_rate);
        let subliminal = bed_filter.process_buffer_copy(&noise);

        let interrupts = pattern_interrupts(n, influence_level);

        let mut samples: Vec<f64> = (0..n)
            .map(|i| {
                base_signal.samples[i] * (1.0 - influence_level)
                    + subliminal[i] * influence_level * 0.5
                    + interrupts[i] * influence_level * 0.5
            })
            .collect();

        self.band_limit(&mut samples);

        let mut output = Waveform::new(samples, base_signal.sample_rate);
        output.normalize_peak();
        Ok(output)
    }

    /// Constrains a buffer to `[min_freq, max_freq]` with cascaded
    /// Butterworth biquads.
    fn band_limit(&self, samples: &mut [f64]) {
        let sample_rate = self.config.sample_rate() as f64;
        for _ in 0..BAND_LIMIT_PASSES {
            BiquadFilter::highpass(self.config.min_freq(), BUTTERWORTH_Q, sample_rate)
                .process_buffer(samples);
            BiquadFilter::lowpass(self.config.max_freq(), BUTTERWORTH_Q, sample_rate)
                .process_buffer(samples);
        }
    }
}

/// Lays localized Ricker wavelet bursts at evenly spaced centers.
///
/// Burst width grows with `influence_level`; zero influence yields
/// silence (and the interrupt term is zero-weighted there anyway).
fn pattern_interrupts(num_samples: usize, influence_level: f64) -> Vec<f64> {
    let mut buffer = vec![0.0; num_samples];
    let window = num_samples / INTERRUPT_COUNT;
    let width = influence_level * INTERRUPT_WIDTH_SCALE;
    if window == 0 || width <= 0.0 {
        return buffer;
    }

    let burst = ricker(window, width);
    for k in 0..INTERRUPT_COUNT {
        let offset = k * window;
        for (i, &w) in burst.iter().enumerate() {
            buffer[offset + i] += w;
        }
    }

    buffer
}

/// Ricker (Mexican hat) wavelet over `points` samples with width `a`.
fn ricker(points: usize, a: f64) -> Vec<f64> {
    let amplitude = 2.0 / ((3.0 * a).sqrt() * std::f64::consts::PI.powf(0.25));
    let center = (points as f64 - 1.0) / 2.0;
    (0..points)
        .map(|i| {
            let x = i as f64 - center;
            let xa = x / a;
            amplitude * (1.0 - xa * xa) * (-x * x / (2.0 * a * a)).exp()
        })
        .collect()
}
