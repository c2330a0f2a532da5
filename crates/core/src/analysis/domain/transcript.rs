use serde::{Deserialize, Serialize};

use super::classifier::Comment;

/// One transcribed utterance with absolute timestamps, as produced by the
/// transcript-acquisition layer. Consumed read-only by the analysis core.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    pub text: String,
    pub start_time: f64,
    pub end_time: f64,
}

impl TranscriptSegment {
    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }
}

/// Per-segment speech-quality metrics. Computed once, immutable after.
///
/// `pitch_variety` is `None` when the segment's window contains no voiced
/// frames; that is a valid value, not an error.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SegmentMetrics {
    /// Syllables per second.
    pub speaking_rate: f64,
    /// Filler occurrences per second.
    pub filler_rate: f64,
    pub filler_count: usize,
    /// 95th minus 5th percentile of voiced pitch, in Hz.
    pub pitch_variety: Option<f64>,
}

/// A transcript segment together with its metrics and qualitative comment.
/// Serializes flat (segment and metric fields at the top level) with the
/// comment nested, matching the transcript JSON the tool emits.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnrichedSegment {
    #[serde(flatten)]
    pub segment: TranscriptSegment,
    #[serde(flatten)]
    pub metrics: SegmentMetrics,
    pub comment: Comment,
}
