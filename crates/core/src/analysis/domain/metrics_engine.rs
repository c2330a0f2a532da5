use super::filler_detector::FillerDetector;
use super::syllable_estimator::SyllableEstimator;
use super::transcript::{SegmentMetrics, TranscriptSegment};
use crate::audio::domain::audio_signal::{AudioSignal, AudioSignalError};
use crate::audio::domain::pitch_contour_analyzer::PitchContourAnalyzer;
use crate::shared::constants::ZERO_DURATION_FLOOR;

/// Computes the per-segment metrics record: speaking rate, filler rate
/// and count, pitch variety. Pure with respect to its inputs: repeated
/// calls on the same segment and audio yield identical metrics.
pub struct SegmentMetricsEngine {
    syllables: SyllableEstimator,
    fillers: FillerDetector,
}

impl SegmentMetricsEngine {
    pub fn new(syllables: SyllableEstimator, fillers: FillerDetector) -> Self {
        Self { syllables, fillers }
    }

    pub fn compute(
        &self,
        segment: &TranscriptSegment,
        audio: &dyn AudioSignal,
    ) -> Result<SegmentMetrics, AudioSignalError> {
        let mut metrics = self.compute_without_pitch(segment);
        metrics.pitch_variety =
            PitchContourAnalyzer::pitch_variety(audio, segment.start_time, segment.end_time)?;
        Ok(metrics)
    }

    /// Text-only metrics with the pitch variety left missing. Used when
    /// the caller chose to keep segments whose audio window is
    /// unavailable.
    pub fn compute_without_pitch(&self, segment: &TranscriptSegment) -> SegmentMetrics {
        let line = segment.text.to_lowercase();

        let syllable_count: usize = line
            .split_whitespace()
            .map(|token| self.syllables.count(token))
            .sum();

        // A coinciding start and end would divide by zero; the fixed 0.01
        // floor keeps degenerate segments in the pipeline.
        let mut time_delta = segment.end_time - segment.start_time;
        if time_delta == 0.0 {
            time_delta = ZERO_DURATION_FLOOR;
        }

        let speaking_rate = syllable_count as f64 / time_delta;
        let filler_count = self.fillers.count(&line);
        let filler_rate = filler_count as f64 / time_delta;

        SegmentMetrics {
            speaking_rate,
            filler_rate,
            filler_count,
            pitch_variety: None,
        }
    }
}
