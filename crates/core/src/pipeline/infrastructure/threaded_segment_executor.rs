use crate::analysis::domain::transcript::EnrichedSegment;
use crate::pipeline::analyze_transcript_use_case::AnalysisError;
use crate::pipeline::segment_executor::{SegmentExecutor, SegmentJob};

/// Fans the per-segment jobs out over a worker pool.
///
/// Segments are independent and the audio handle is shared read-only, so
/// jobs can run in any order; results are keyed by index and reassembled
/// into input order before returning. With multiple failures the
/// lowest-index error wins, matching sequential behavior.
pub struct ThreadedSegmentExecutor {
    workers: usize,
}

impl ThreadedSegmentExecutor {
    pub fn new(workers: usize) -> Self {
        Self {
            workers: workers.max(1),
        }
    }

    /// One worker per available core.
    pub fn with_available_parallelism() -> Self {
        let workers = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        Self::new(workers)
    }
}

impl SegmentExecutor for ThreadedSegmentExecutor {
    fn execute(
        &self,
        count: usize,
        job: &SegmentJob,
    ) -> Result<Vec<EnrichedSegment>, AnalysisError> {
        if count == 0 {
            return Ok(Vec::new());
        }

        let (index_tx, index_rx) = crossbeam_channel::unbounded::<usize>();
        let (result_tx, result_rx) =
            crossbeam_channel::unbounded::<(usize, Result<EnrichedSegment, AnalysisError>)>();

        for index in 0..count {
            // Receiver outlives the sends; an unbounded send cannot block.
            let _ = index_tx.send(index);
        }
        drop(index_tx);

        let workers = self.workers.min(count);
        std::thread::scope(|scope| {
            for _ in 0..workers {
                let index_rx = index_rx.clone();
                let result_tx = result_tx.clone();
                scope.spawn(move || {
                    for index in index_rx {
                        if result_tx.send((index, job(index))).is_err() {
                            break;
                        }
                    }
                });
            }
        });
        drop(result_tx);

        let mut slots: Vec<Option<EnrichedSegment>> = (0..count).map(|_| None).collect();
        let mut first_error: Option<(usize, AnalysisError)> = None;

        for (index, result) in result_rx {
            match result {
                Ok(segment) => slots[index] = Some(segment),
                Err(error) => {
                    if first_error.as_ref().map_or(true, |(i, _)| index < *i) {
                        first_error = Some((index, error));
                    }
                }
            }
        }

        if let Some((_, error)) = first_error {
            return Err(error);
        }

        slots
            .into_iter()
            .enumerate()
            .map(|(index, slot)| slot.ok_or(AnalysisError::WorkerLost { index }))
            .collect()
    }
}
