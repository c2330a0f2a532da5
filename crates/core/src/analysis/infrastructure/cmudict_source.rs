use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

use crate::analysis::domain::pronunciation_source::PronunciationSource;

/// Pronunciation dictionary in the CMU `cmudict.dict` text format:
/// one entry per line, `word PH PH PH ...`, alternate pronunciations as
/// `word(2) ...`, `;;;` comment lines, optional trailing `# ...` comments.
///
/// All variants are kept in file order; lookups use the first one. Load
/// this once at startup and share it read-only.
pub struct CmudictSource {
    entries: HashMap<String, Vec<Vec<String>>>,
}

impl CmudictSource {
    pub fn from_file(path: &Path) -> io::Result<Self> {
        Ok(Self::parse(&fs::read_to_string(path)?))
    }

    pub fn parse(text: &str) -> Self {
        let mut entries: HashMap<String, Vec<Vec<String>>> = HashMap::new();

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with(";;;") {
                continue;
            }
            let line = match line.split_once(" #") {
                Some((before, _comment)) => before.trim_end(),
                None => line,
            };

            let mut tokens = line.split_whitespace();
            let Some(head) = tokens.next() else { continue };
            let phonemes: Vec<String> = tokens.map(str::to_string).collect();
            if phonemes.is_empty() {
                continue;
            }

            let word = strip_variant_suffix(head).to_lowercase();
            entries.entry(word).or_default().push(phonemes);
        }

        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PronunciationSource for CmudictSource {
    fn syllables(&self, word: &str) -> Option<usize> {
        let variants = self.entries.get(word)?;
        let first = variants.first()?;
        // Vowel phonemes carry a trailing stress digit; their count is
        // the syllable count.
        Some(
            first
                .iter()
                .filter(|phoneme| {
                    phoneme
                        .chars()
                        .last()
                        .is_some_and(|c| c.is_ascii_digit())
                })
                .count(),
        )
    }
}

/// `word(2)` -> `word`; anything without the suffix passes through.
fn strip_variant_suffix(head: &str) -> &str {
    match head.split_once('(') {
        Some((base, _)) if head.ends_with(')') => base,
        _ => head,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
;;; comment header
hello HH AH0 L OW1
hello(2) HH EH0 L OW1 EH2
world W ER1 L D
read R IY1 D # present tense
read(2) R EH1 D
";

    #[test]
    fn test_first_variant_wins() {
        // First variant has 2 stress digits, second has 3.
        let dict = CmudictSource::parse(SAMPLE);
        assert_eq!(dict.syllables("hello"), Some(2));
    }

    #[test]
    fn test_single_syllable_word() {
        let dict = CmudictSource::parse(SAMPLE);
        assert_eq!(dict.syllables("world"), Some(1));
    }

    #[test]
    fn test_unknown_word_is_none() {
        let dict = CmudictSource::parse(SAMPLE);
        assert_eq!(dict.syllables("xylophone"), None);
    }

    #[test]
    fn test_comment_lines_are_skipped() {
        let dict = CmudictSource::parse(SAMPLE);
        assert_eq!(dict.len(), 3);
    }

    #[test]
    fn test_trailing_comment_is_stripped() {
        let dict = CmudictSource::parse(SAMPLE);
        assert_eq!(dict.syllables("read"), Some(1));
    }

    #[test]
    fn test_lookup_is_lowercase() {
        let dict = CmudictSource::parse("NASA N AE1 S AH0");
        assert_eq!(dict.syllables("nasa"), Some(2));
    }

    #[test]
    fn test_empty_input() {
        let dict = CmudictSource::parse("");
        assert!(dict.is_empty());
        assert_eq!(dict.syllables("anything"), None);
    }

    #[test]
    fn test_from_file_round_trip() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("mini.dict");
        fs::write(&path, "testing T EH1 S T IH0 NG\n").unwrap();
        let dict = CmudictSource::from_file(&path).unwrap();
        assert_eq!(dict.syllables("testing"), Some(2));
    }

    #[test]
    fn test_missing_file_errors() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = CmudictSource::from_file(&dir.path().join("absent.dict"));
        assert!(result.is_err());
    }
}
