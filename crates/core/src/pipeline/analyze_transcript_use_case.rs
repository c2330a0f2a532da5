use thiserror::Error;

use crate::analysis::domain::classifier::{Classifier, MissingMetricError};
use crate::analysis::domain::metrics_engine::SegmentMetricsEngine;
use crate::analysis::domain::transcript::{EnrichedSegment, TranscriptSegment};
use crate::audio::domain::audio_signal::{AudioSignal, AudioSignalError};

use super::analysis_logger::AnalysisLogger;
use super::segment_executor::{SegmentExecutor, SequentialSegmentExecutor};

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("segment {index}: start time {start:.3}s is after end time {end:.3}s")]
    InvalidSegment {
        index: usize,
        start: f64,
        end: f64,
    },
    #[error("segment {index}: audio window unavailable: {source}")]
    AudioWindow {
        index: usize,
        #[source]
        source: AudioSignalError,
    },
    #[error("segment {index}: {source}")]
    IncompleteMetrics {
        index: usize,
        #[source]
        source: MissingMetricError,
    },
    #[error("segment {index}: analysis worker terminated without a result")]
    WorkerLost { index: usize },
}

/// Orchestrates the full transcript analysis: one pass over the segments,
/// metrics then classification, producing exactly one enriched segment
/// per input segment, in input order.
///
/// Computations are pure and deterministic, so there are no retries; a
/// degenerate zero-duration segment is not an error (the metrics engine
/// floors the time delta), while inverted timing aborts the whole call.
pub struct AnalyzeTranscriptUseCase {
    engine: SegmentMetricsEngine,
    executor: Box<dyn SegmentExecutor>,
    skip_unreadable_audio: bool,
}

impl AnalyzeTranscriptUseCase {
    pub fn new(
        engine: SegmentMetricsEngine,
        executor: Box<dyn SegmentExecutor>,
        skip_unreadable_audio: bool,
    ) -> Self {
        Self {
            engine,
            executor,
            skip_unreadable_audio,
        }
    }

    /// Single-threaded analyzer that aborts on unreadable audio windows.
    pub fn sequential(engine: SegmentMetricsEngine) -> Self {
        Self::new(engine, Box::new(SequentialSegmentExecutor), false)
    }

    pub fn run(
        &self,
        segments: &[TranscriptSegment],
        audio: &dyn AudioSignal,
        logger: &mut dyn AnalysisLogger,
    ) -> Result<Vec<EnrichedSegment>, AnalysisError> {
        // Malformed timing is a caller bug: reject the whole transcript
        // before any audio work.
        for (index, segment) in segments.iter().enumerate() {
            if segment.start_time > segment.end_time {
                return Err(AnalysisError::InvalidSegment {
                    index,
                    start: segment.start_time,
                    end: segment.end_time,
                });
            }
        }

        let analyze = |index: usize| -> Result<EnrichedSegment, AnalysisError> {
            let segment = &segments[index];

            let metrics = match self.engine.compute(segment, audio) {
                Ok(metrics) => metrics,
                Err(source) if self.skip_unreadable_audio => {
                    log::warn!(
                        "segment {index}: audio window unavailable, leaving pitch variety missing ({source})"
                    );
                    self.engine.compute_without_pitch(segment)
                }
                Err(source) => return Err(AnalysisError::AudioWindow { index, source }),
            };

            let comment = Classifier::classify(&metrics)
                .map_err(|source| AnalysisError::IncompleteMetrics { index, source })?;

            Ok(EnrichedSegment {
                segment: segment.clone(),
                metrics,
                comment,
            })
        };

        logger.info(&format!("analyzing {} segments", segments.len()));
        let enriched = self.executor.execute(segments.len(), &analyze)?;

        let total = enriched.len();
        for (index, result) in enriched.iter().enumerate() {
            logger.progress(index + 1, total);
            logger.metric("speaking_rate", result.metrics.speaking_rate);
            logger.metric("filler_rate", result.metrics.filler_rate);
            if let Some(spread) = result.metrics.pitch_variety {
                logger.metric("pitch_variety", spread);
            }
        }
        logger.summary();

        Ok(enriched)
    }
}
