use crate::audio::domain::audio_signal::PitchFrame;
use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

/// Analysis window length: three periods of the 75 Hz pitch floor.
const WINDOW_SECS: f64 = 0.04;

/// Hop between successive analysis frames.
const HOP_SECS: f64 = 0.01;

/// Default search range for the fundamental.
pub const DEFAULT_PITCH_FLOOR_HZ: f64 = 75.0;
pub const DEFAULT_PITCH_CEILING_HZ: f64 = 600.0;

/// Minimum normalized autocorrelation peak for a frame to count as voiced.
const VOICING_THRESHOLD: f64 = 0.45;

/// Frames with RMS below this are treated as silence (samples are in [-1, 1]).
const SILENCE_RMS: f64 = 0.01;

/// Frame-wise fundamental-frequency estimation via FFT autocorrelation.
///
/// Each frame is mean-removed, autocorrelated, and searched for the best
/// lag inside the floor/ceiling band; the peak is refined by parabolic
/// interpolation. Frames that are silent or insufficiently periodic come
/// back unvoiced.
pub struct AutocorrelationPitchTracker {
    floor_hz: f64,
    ceiling_hz: f64,
}

impl AutocorrelationPitchTracker {
    pub fn new(floor_hz: f64, ceiling_hz: f64) -> Self {
        Self {
            floor_hz,
            ceiling_hz,
        }
    }

    /// Pitch contour for a mono signal. Frame times are relative to the
    /// start of `samples`, at the center of each analysis window.
    pub fn track(&self, samples: &[f32], sample_rate: u32) -> Vec<PitchFrame> {
        let sr = sample_rate as f64;
        let window_len = (WINDOW_SECS * sr).round() as usize;
        let hop = ((HOP_SECS * sr).round() as usize).max(1);

        if window_len < 2 || samples.len() < window_len {
            return Vec::new();
        }

        let min_lag = ((sr / self.ceiling_hz).ceil() as usize).max(2);
        let max_lag = ((sr / self.floor_hz).floor() as usize).min(window_len - 1);
        if min_lag >= max_lag {
            return Vec::new();
        }

        let fft_len = (2 * window_len).next_power_of_two();
        let mut planner = FftPlanner::<f64>::new();
        let fft_forward = planner.plan_fft_forward(fft_len);
        let fft_inverse = planner.plan_fft_inverse(fft_len);

        let num_frames = (samples.len() - window_len) / hop + 1;
        let mut contour = Vec::with_capacity(num_frames);

        for frame_idx in 0..num_frames {
            let start = frame_idx * hop;
            let frame = &samples[start..start + window_len];
            let time = (start as f64 + window_len as f64 / 2.0) / sr;

            let frequency = self.estimate_frame(
                frame,
                sr,
                min_lag,
                max_lag,
                fft_len,
                fft_forward.as_ref(),
                fft_inverse.as_ref(),
            );

            contour.push(PitchFrame { time, frequency });
        }

        contour
    }

    #[allow(clippy::too_many_arguments)]
    fn estimate_frame(
        &self,
        frame: &[f32],
        sr: f64,
        min_lag: usize,
        max_lag: usize,
        fft_len: usize,
        fft_forward: &dyn rustfft::Fft<f64>,
        fft_inverse: &dyn rustfft::Fft<f64>,
    ) -> Option<f64> {
        let n = frame.len();
        let mean = frame.iter().map(|s| *s as f64).sum::<f64>() / n as f64;

        let mut buf: Vec<Complex<f64>> = frame
            .iter()
            .map(|s| Complex::new(*s as f64 - mean, 0.0))
            .collect();
        buf.resize(fft_len, Complex::new(0.0, 0.0));

        let energy: f64 = buf.iter().map(|c| c.re * c.re).sum();
        let rms = (energy / n as f64).sqrt();
        if rms < SILENCE_RMS {
            return None;
        }

        // Autocorrelation = IFFT of the power spectrum.
        fft_forward.process(&mut buf);
        for c in buf.iter_mut() {
            *c = Complex::new(c.norm_sqr(), 0.0);
        }
        fft_inverse.process(&mut buf);

        let r0 = buf[0].re;
        if r0 <= 0.0 {
            return None;
        }

        // Normalize and correct the linear taper of the finite window,
        // so a perfectly periodic frame peaks near 1.0 at its period.
        let corr = |lag: usize| -> f64 {
            (buf[lag].re / r0) * (n as f64 / (n - lag) as f64)
        };

        let mut best_lag = min_lag;
        let mut best_value = corr(min_lag);
        for lag in min_lag + 1..=max_lag {
            let value = corr(lag);
            if value > best_value {
                best_value = value;
                best_lag = lag;
            }
        }

        if best_value < VOICING_THRESHOLD {
            return None;
        }

        let refined = refine_peak(best_lag, min_lag, max_lag, &corr);
        let frequency = sr / refined;
        if frequency < self.floor_hz || frequency > self.ceiling_hz {
            return None;
        }
        Some(frequency)
    }
}

impl Default for AutocorrelationPitchTracker {
    fn default() -> Self {
        Self::new(DEFAULT_PITCH_FLOOR_HZ, DEFAULT_PITCH_CEILING_HZ)
    }
}

/// Parabolic interpolation of the correlation peak across its neighbors.
fn refine_peak(lag: usize, min_lag: usize, max_lag: usize, corr: &dyn Fn(usize) -> f64) -> f64 {
    if lag <= min_lag || lag >= max_lag {
        return lag as f64;
    }
    let left = corr(lag - 1);
    let center = corr(lag);
    let right = corr(lag + 1);
    let denom = left - 2.0 * center + right;
    if denom.abs() < 1e-12 {
        return lag as f64;
    }
    let shift = 0.5 * (left - right) / denom;
    lag as f64 + shift.clamp(-1.0, 1.0)
}
