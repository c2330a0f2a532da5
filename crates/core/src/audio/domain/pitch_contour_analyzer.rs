use super::audio_signal::{AudioSignal, AudioSignalError};
use crate::shared::constants::{PITCH_LOWER_PERCENTILE, PITCH_UPPER_PERCENTILE};
use crate::shared::math::percentile;

/// Computes the pitch-variety statistic over a time window: the spread
/// between the 95th and 5th percentile of the voiced frequencies.
pub struct PitchContourAnalyzer;

impl PitchContourAnalyzer {
    /// Pitch spread in Hz over `[start, end]`, or `None` when the window
    /// contains no voiced frames. The missing value is propagated, never
    /// replaced with zero.
    pub fn pitch_variety(
        audio: &dyn AudioSignal,
        start: f64,
        end: f64,
    ) -> Result<Option<f64>, AudioSignalError> {
        let window = audio.extract_window(start, end)?;

        let mut voiced: Vec<f64> = window
            .pitch_contour()
            .iter()
            .filter_map(|frame| frame.frequency)
            .collect();
        voiced.sort_by(f64::total_cmp);

        let upper = percentile(&voiced, PITCH_UPPER_PERCENTILE);
        let lower = percentile(&voiced, PITCH_LOWER_PERCENTILE);
        match (upper, lower) {
            (Some(hi), Some(lo)) => Ok(Some(hi - lo)),
            _ => Ok(None),
        }
    }
}
