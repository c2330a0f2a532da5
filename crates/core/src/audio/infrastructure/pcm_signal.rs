use crate::audio::domain::audio_signal::{AudioSignal, AudioSignalError, PitchFrame};
use crate::audio::infrastructure::autocorrelation_tracker::AutocorrelationPitchTracker;

/// An `AudioSignal` backed by mono PCM samples normalized to [-1.0, 1.0].
///
/// `start_time` is the absolute time of the first sample, so windows
/// extracted from a window keep reporting absolute frame times.
#[derive(Clone, Debug)]
pub struct PcmSignal {
    samples: Vec<f32>,
    sample_rate: u32,
    start_time: f64,
}

impl PcmSignal {
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
            start_time: 0.0,
        }
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn start_time(&self) -> f64 {
        self.start_time
    }

    fn end_time(&self) -> f64 {
        self.start_time + self.duration()
    }

    fn sample_index_at_time(&self, time: f64) -> usize {
        ((time - self.start_time) * self.sample_rate as f64).round() as usize
    }
}

impl AudioSignal for PcmSignal {
    fn duration(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }

    fn extract_window(
        &self,
        start: f64,
        end: f64,
    ) -> Result<Box<dyn AudioSignal>, AudioSignalError> {
        if start > end || start < self.start_time || end > self.end_time() {
            return Err(AudioSignalError::OutOfRange {
                start,
                end,
                min: self.start_time,
                max: self.end_time(),
            });
        }

        let from = self.sample_index_at_time(start);
        let to = self.sample_index_at_time(end).min(self.samples.len());
        Ok(Box::new(PcmSignal {
            samples: self.samples[from..to].to_vec(),
            sample_rate: self.sample_rate,
            start_time: start,
        }))
    }

    fn pitch_contour(&self) -> Vec<PitchFrame> {
        let tracker = AutocorrelationPitchTracker::default();
        tracker
            .track(&self.samples, self.sample_rate)
            .into_iter()
            .map(|frame| PitchFrame {
                time: self.start_time + frame.time,
                frequency: frame.frequency,
            })
            .collect()
    }
}
