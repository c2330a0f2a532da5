use serde::Deserialize;
use thiserror::Error;

use crate::analysis::domain::transcript::TranscriptSegment;

#[derive(Error, Debug)]
pub enum TranscriptParseError {
    #[error("malformed recognition payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// Sessionless speech-recognition response: one result per recognized
/// utterance, alternatives ranked best-first, word timestamps as
/// `[word, start, end]` triples.
#[derive(Debug, Deserialize)]
pub struct RecognitionResponse {
    results: Vec<RecognitionResult>,
}

#[derive(Debug, Deserialize)]
struct RecognitionResult {
    alternatives: Vec<RecognitionAlternative>,
}

#[derive(Debug, Deserialize)]
struct RecognitionAlternative {
    transcript: String,
    #[serde(default)]
    timestamps: Vec<(String, f64, f64)>,
}

impl RecognitionResponse {
    /// Convert to transcript segments: best alternative only, sentence
    /// text capitalized, start taken from the first word timestamp and
    /// end from the last word timestamp's start value (a single-word
    /// utterance therefore yields a zero-duration segment, which the
    /// metrics engine already tolerates).
    pub fn into_segments(self) -> Vec<TranscriptSegment> {
        let mut segments = Vec::with_capacity(self.results.len());

        for result in self.results {
            let Some(alt) = result.alternatives.into_iter().next() else {
                log::warn!("recognition result with no alternatives, skipping");
                continue;
            };
            let (Some(first), Some(last)) = (alt.timestamps.first(), alt.timestamps.last()) else {
                log::warn!(
                    "alternative without word timestamps, skipping: {:?}",
                    alt.transcript
                );
                continue;
            };

            segments.push(TranscriptSegment {
                text: capitalize(alt.transcript.trim()),
                start_time: first.1,
                end_time: last.1,
            });
        }

        segments
    }
}

/// Parse a raw recognition payload into ordered transcript segments.
pub fn parse_segments(json: &str) -> Result<Vec<TranscriptSegment>, TranscriptParseError> {
    let response: RecognitionResponse = serde_json::from_str(json)?;
    Ok(response.into_segments())
}

/// First character uppercased, everything after it lowercased.
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
