use thiserror::Error;

#[derive(Error, Debug)]
pub enum AudioSignalError {
    #[error("window {start:.3}s..{end:.3}s lies outside the signal ({min:.3}s..{max:.3}s)")]
    OutOfRange {
        start: f64,
        end: f64,
        min: f64,
        max: f64,
    },
}

/// One pitch-tracking sample: `frequency` is `None` for unvoiced frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PitchFrame {
    /// Absolute time of the frame center, in seconds.
    pub time: f64,
    /// Fundamental frequency in Hz, if a periodic signal was detected.
    pub frequency: Option<f64>,
}

/// Capability over a loaded recording: time-windowed extraction and
/// pitch-contour computation.
///
/// Implementations must be safely shareable across threads; the analysis
/// pipeline holds one read-only handle for all segments.
pub trait AudioSignal: Send + Sync {
    /// Length of the signal in seconds.
    fn duration(&self) -> f64;

    /// Sub-signal between `start` and `end` (absolute seconds).
    ///
    /// Fails with `OutOfRange` when the window falls outside the signal
    /// or is inverted. A zero-length window is valid and yields an
    /// empty contour.
    fn extract_window(&self, start: f64, end: f64)
        -> Result<Box<dyn AudioSignal>, AudioSignalError>;

    /// Pitch contour over the whole signal, one frame per analysis hop.
    fn pitch_contour(&self) -> Vec<PitchFrame>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pitch_frame_voiced_and_unvoiced() {
        let voiced = PitchFrame {
            time: 0.5,
            frequency: Some(180.0),
        };
        let unvoiced = PitchFrame {
            time: 0.51,
            frequency: None,
        };
        assert!(voiced.frequency.is_some());
        assert!(unvoiced.frequency.is_none());
    }

    #[test]
    fn test_out_of_range_error_message_names_bounds() {
        let err = AudioSignalError::OutOfRange {
            start: 3.0,
            end: 5.0,
            min: 0.0,
            max: 4.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("3.000"));
        assert!(msg.contains("4.000"));
    }
}
