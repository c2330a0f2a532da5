use std::collections::HashMap;
use std::time::Instant;

/// Cross-cutting observer for analysis-run events.
///
/// Decouples the use case from specific output mechanisms so callers can
/// watch a run without changing the orchestration code.
pub trait AnalysisLogger: Send {
    /// Report segment-level progress.
    fn progress(&mut self, current: usize, total: usize);

    /// Record a per-segment metric value.
    fn metric(&mut self, name: &str, value: f64);

    /// Log a human-readable status message.
    fn info(&mut self, message: &str);

    /// Emit an end-of-run summary. Default: no-op.
    fn summary(&self) {}
}

/// Silent logger that discards all events. Used by tests and by callers
/// with their own progress reporting.
pub struct NullAnalysisLogger;

impl AnalysisLogger for NullAnalysisLogger {
    fn progress(&mut self, _current: usize, _total: usize) {}
    fn metric(&mut self, _name: &str, _value: f64) {}
    fn info(&mut self, _message: &str) {}
}

/// CLI-oriented logger: aggregates metric values and reports a summary
/// at the end of the run. Progress output is throttled to every
/// `throttle_segments` segments to keep long transcripts quiet.
pub struct StdoutAnalysisLogger {
    throttle_segments: usize,
    metrics: HashMap<String, Vec<f64>>,
    start_time: Instant,
    total_segments: usize,
}

impl StdoutAnalysisLogger {
    pub fn new(throttle_segments: usize) -> Self {
        Self {
            throttle_segments: throttle_segments.max(1),
            metrics: HashMap::new(),
            start_time: Instant::now(),
            total_segments: 0,
        }
    }

    /// Returns the formatted summary string, or `None` if no data recorded.
    pub fn summary_string(&self) -> Option<String> {
        if self.metrics.is_empty() {
            return None;
        }

        let elapsed = self.start_time.elapsed().as_secs_f64();
        let mut lines = vec![format!(
            "Analysis summary ({} segments, {elapsed:.1}s total):",
            self.total_segments
        )];

        let mut names: Vec<_> = self.metrics.keys().collect();
        names.sort();
        for name in names {
            let values = &self.metrics[name];
            if values.is_empty() {
                continue;
            }
            let mean = values.iter().sum::<f64>() / values.len() as f64;
            let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
            let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            lines.push(format!(
                "  {name}: mean {mean:.2}, min {min:.2}, max {max:.2} ({} values)",
                values.len()
            ));
        }

        Some(lines.join("\n"))
    }
}

impl AnalysisLogger for StdoutAnalysisLogger {
    fn progress(&mut self, current: usize, total: usize) {
        self.total_segments = total;
        if current % self.throttle_segments == 0 || current == total {
            let pct = if total > 0 {
                current as f64 / total as f64 * 100.0
            } else {
                100.0
            };
            log::info!("Analyzing: {current}/{total} segments ({pct:.1}%)");
        }
    }

    fn metric(&mut self, name: &str, value: f64) {
        self.metrics.entry(name.to_string()).or_default().push(value);
    }

    fn info(&mut self, message: &str) {
        log::info!("{message}");
    }

    fn summary(&self) {
        if let Some(text) = self.summary_string() {
            log::info!("\n\n{text}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_logger_accepts_everything() {
        let mut logger = NullAnalysisLogger;
        logger.progress(1, 10);
        logger.metric("speaking_rate", 4.2);
        logger.info("done");
        logger.summary();
    }

    #[test]
    fn test_summary_empty_without_metrics() {
        let logger = StdoutAnalysisLogger::new(10);
        assert!(logger.summary_string().is_none());
    }

    #[test]
    fn test_summary_aggregates_metrics() {
        let mut logger = StdoutAnalysisLogger::new(10);
        logger.progress(3, 3);
        logger.metric("speaking_rate", 2.0);
        logger.metric("speaking_rate", 4.0);
        logger.metric("filler_rate", 1.0);

        let text = logger.summary_string().unwrap();
        assert!(text.contains("3 segments"));
        assert!(text.contains("speaking_rate: mean 3.00, min 2.00, max 4.00 (2 values)"));
        assert!(text.contains("filler_rate"));
    }

    #[test]
    fn test_throttle_floor_is_one() {
        let mut logger = StdoutAnalysisLogger::new(0);
        // Must not divide by zero when reporting every segment.
        logger.progress(1, 2);
    }
}
