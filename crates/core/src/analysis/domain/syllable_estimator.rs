use super::pronunciation_source::{HeuristicSource, PronunciationSource};

/// Counts syllables in a single word: a pronunciation dictionary is
/// consulted first, the vowel-run heuristic covers everything it misses.
/// The result is always at least 1.
pub struct SyllableEstimator {
    primary: Option<Box<dyn PronunciationSource>>,
    fallback: HeuristicSource,
}

impl SyllableEstimator {
    /// Estimator backed by a pronunciation dictionary.
    pub fn with_dictionary(primary: Box<dyn PronunciationSource>) -> Self {
        Self {
            primary: Some(primary),
            fallback: HeuristicSource,
        }
    }

    /// Heuristic-only estimator, for running without a dictionary.
    pub fn heuristic_only() -> Self {
        Self {
            primary: None,
            fallback: HeuristicSource,
        }
    }

    pub fn count(&self, word: &str) -> usize {
        let word = word.to_lowercase();
        self.primary
            .as_ref()
            .and_then(|source| source.syllables(&word))
            .unwrap_or_else(|| self.fallback.estimate(&word))
            .max(1)
    }
}
