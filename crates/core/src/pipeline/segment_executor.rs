use crate::analysis::domain::transcript::EnrichedSegment;

use super::analyze_transcript_use_case::AnalysisError;

/// Indexed per-segment analysis job. Must be callable from any thread;
/// segments are independent so calls never observe each other.
pub type SegmentJob<'a> = dyn Fn(usize) -> Result<EnrichedSegment, AnalysisError> + Sync + 'a;

/// Abstracts how the per-segment jobs are executed.
///
/// This is a port (application-layer interface). Whatever the execution
/// order, the returned vector is in segment-index order and with multiple
/// failures the lowest-index error is reported.
pub trait SegmentExecutor: Send + Sync {
    fn execute(
        &self,
        count: usize,
        job: &SegmentJob,
    ) -> Result<Vec<EnrichedSegment>, AnalysisError>;
}

/// Runs every job on the calling thread, in input order.
pub struct SequentialSegmentExecutor;

impl SegmentExecutor for SequentialSegmentExecutor {
    fn execute(
        &self,
        count: usize,
        job: &SegmentJob,
    ) -> Result<Vec<EnrichedSegment>, AnalysisError> {
        (0..count).map(job).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::domain::classifier::{
        Comment, FillerRateLabel, PitchVarietyLabel, SpeakingRateLabel,
    };
    use crate::analysis::domain::transcript::{SegmentMetrics, TranscriptSegment};

    fn enriched(index: usize) -> EnrichedSegment {
        EnrichedSegment {
            segment: TranscriptSegment {
                text: format!("segment {index}"),
                start_time: index as f64,
                end_time: index as f64 + 1.0,
            },
            metrics: SegmentMetrics {
                speaking_rate: index as f64,
                filler_rate: 0.0,
                filler_count: 0,
                pitch_variety: None,
            },
            comment: Comment {
                speaking_rate: SpeakingRateLabel::Good,
                pitch_variety: PitchVarietyLabel::Unknown,
                filler_rate: FillerRateLabel::Good,
            },
        }
    }

    #[test]
    fn test_sequential_preserves_order() {
        let results = SequentialSegmentExecutor
            .execute(4, &|index| Ok(enriched(index)))
            .unwrap();
        assert_eq!(results.len(), 4);
        for (i, result) in results.iter().enumerate() {
            assert_eq!(result.segment.text, format!("segment {i}"));
        }
    }

    #[test]
    fn test_sequential_empty_input() {
        let results = SequentialSegmentExecutor
            .execute(0, &|index| Ok(enriched(index)))
            .unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_sequential_stops_on_error() {
        let result = SequentialSegmentExecutor.execute(4, &|index| {
            if index == 2 {
                Err(AnalysisError::WorkerLost { index })
            } else {
                Ok(enriched(index))
            }
        });
        assert!(matches!(result, Err(AnalysisError::WorkerLost { index: 2 })));
    }
}
