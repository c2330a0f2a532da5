use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::transcript::SegmentMetrics;
use crate::shared::constants::{
    FAST_SPEAKING_RATE, HIGH_FILLER_RATE, LOW_FILLER_RATE, MONOTONE_PITCH_SPREAD,
    SLOW_SPEAKING_RATE,
};

/// Raised when a metrics record reaches classification with a required
/// rate that is not a finite number. The engine always produces finite
/// rates, so hitting this is a broken internal contract, not user error.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("segment metrics incomplete: {field} is not a finite value")]
pub struct MissingMetricError {
    pub field: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeakingRateLabel {
    Slow,
    Good,
    Fast,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PitchVarietyLabel {
    Monotone,
    Good,
    /// No voiced frames in the window: monotony cannot be judged.
    Unknown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillerRateLabel {
    Good,
    Some,
    Many,
}

/// Qualitative assessment of one segment, derived purely from its metrics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub speaking_rate: SpeakingRateLabel,
    pub pitch_variety: PitchVarietyLabel,
    pub filler_rate: FillerRateLabel,
}

/// Maps metrics to labels with fixed strict thresholds; boundary values
/// land in the middle band.
pub struct Classifier;

impl Classifier {
    pub fn classify(metrics: &SegmentMetrics) -> Result<Comment, MissingMetricError> {
        if !metrics.speaking_rate.is_finite() {
            return Err(MissingMetricError {
                field: "speaking_rate",
            });
        }
        if !metrics.filler_rate.is_finite() {
            return Err(MissingMetricError {
                field: "filler_rate",
            });
        }

        let speaking_rate = if metrics.speaking_rate > FAST_SPEAKING_RATE {
            SpeakingRateLabel::Fast
        } else if metrics.speaking_rate < SLOW_SPEAKING_RATE {
            SpeakingRateLabel::Slow
        } else {
            SpeakingRateLabel::Good
        };

        let pitch_variety = match metrics.pitch_variety {
            None => PitchVarietyLabel::Unknown,
            Some(spread) if spread < MONOTONE_PITCH_SPREAD => PitchVarietyLabel::Monotone,
            Some(_) => PitchVarietyLabel::Good,
        };

        let filler_rate = if metrics.filler_rate < LOW_FILLER_RATE {
            FillerRateLabel::Good
        } else if metrics.filler_rate > HIGH_FILLER_RATE {
            FillerRateLabel::Many
        } else {
            FillerRateLabel::Some
        };

        Ok(Comment {
            speaking_rate,
            pitch_variety,
            filler_rate,
        })
    }
}
