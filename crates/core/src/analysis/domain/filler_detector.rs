use std::collections::HashSet;

use crate::shared::constants::{DEFAULT_FILLER_PHRASES, DEFAULT_FILLER_WORDS};

/// Filler vocabulary: single-token words matched per token, multi-word
/// phrases matched as substrings of the whole line. Injectable so callers
/// can extend or localize the lists without code changes.
#[derive(Clone, Debug)]
pub struct FillerLexicon {
    words: HashSet<String>,
    phrases: Vec<String>,
}

impl FillerLexicon {
    pub fn new<W, P>(words: W, phrases: P) -> Self
    where
        W: IntoIterator,
        W::Item: AsRef<str>,
        P: IntoIterator,
        P::Item: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
            phrases: phrases
                .into_iter()
                .map(|p| p.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn is_filler_word(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }
}

impl Default for FillerLexicon {
    fn default() -> Self {
        Self::new(DEFAULT_FILLER_WORDS, DEFAULT_FILLER_PHRASES)
    }
}

/// Counts filler occurrences in a line of transcript text.
#[derive(Clone, Debug, Default)]
pub struct FillerDetector {
    lexicon: FillerLexicon,
}

impl FillerDetector {
    pub fn new(lexicon: FillerLexicon) -> Self {
        Self { lexicon }
    }

    /// Total filler count: one per token equal to a filler word, plus one
    /// per non-overlapping phrase occurrence in the lowercased line. A
    /// word inside a matched phrase still counts on its own; the two
    /// passes deliberately do not deduplicate.
    pub fn count(&self, line: &str) -> usize {
        let line = line.to_lowercase();

        let word_hits = line
            .split_whitespace()
            .filter(|token| self.lexicon.is_filler_word(token))
            .count();

        let phrase_hits: usize = self
            .lexicon
            .phrases()
            .iter()
            .map(|phrase| line.matches(phrase.as_str()).count())
            .sum();

        word_hits + phrase_hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_line_has_no_fillers() {
        let detector = FillerDetector::default();
        assert_eq!(detector.count("the quick brown fox"), 0);
    }

    #[test]
    fn test_word_and_phrase_passes_sum() {
        // Token pass: uh, um, basically (3). Phrase pass: "i guess",
        // "you know" (2).
        let detector = FillerDetector::default();
        assert_eq!(
            detector.count("uh i guess you know this is um basically fine"),
            5
        );
    }

    #[test]
    fn test_counting_is_case_insensitive() {
        let detector = FillerDetector::default();
        assert_eq!(detector.count("Well You Know"), 1 + 1);
    }

    #[test]
    fn test_punctuation_breaks_exact_token_match() {
        // Tokens keep their punctuation, so "well," is not the token
        // "well" -- only the phrase pass sees through it.
        let detector = FillerDetector::default();
        assert_eq!(detector.count("well,"), 0);
    }

    #[test]
    fn test_phrase_word_overlap_double_counts() {
        // "uh huh" matches the phrase once and its "uh" token once.
        let detector = FillerDetector::default();
        assert_eq!(detector.count("uh huh"), 2);
    }

    #[test]
    fn test_repeated_phrase_counts_each_occurrence() {
        let detector = FillerDetector::default();
        assert_eq!(detector.count("you know what you know"), 2);
    }

    #[test]
    fn test_token_must_match_exactly() {
        // "wells" and "umbrella" contain filler words but are not tokens
        // equal to them; "umbrella" also must not trip a substring match.
        let detector = FillerDetector::default();
        assert_eq!(detector.count("wells umbrella"), 0);
    }

    #[test]
    fn test_custom_lexicon_replaces_defaults() {
        let detector = FillerDetector::new(FillerLexicon::new(["eh"], ["pues nada"]));
        assert_eq!(detector.count("eh pues nada eh"), 3);
        assert_eq!(detector.count("um you know"), 0);
    }

    #[test]
    fn test_lexicon_normalizes_case_at_construction() {
        let detector = FillerDetector::new(FillerLexicon::new(["UM"], ["You Know"]));
        assert_eq!(detector.count("um you know"), 2);
    }
}
