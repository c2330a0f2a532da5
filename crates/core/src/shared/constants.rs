/// Substituted for a segment's time delta when start and end coincide,
/// so rates stay finite. Must stay at 0.01 exactly.
pub const ZERO_DURATION_FLOOR: f64 = 0.01;

/// Speaking rate above this is "fast" (syllables/second, strict).
pub const FAST_SPEAKING_RATE: f64 = 5.0;

/// Speaking rate below this is "slow" (syllables/second, strict).
pub const SLOW_SPEAKING_RATE: f64 = 3.0;

/// Pitch spread below this is "monotone" (Hz, strict).
pub const MONOTONE_PITCH_SPREAD: f64 = 120.0;

/// Filler rate below this is "good" (fillers/second, strict).
pub const LOW_FILLER_RATE: f64 = 5.0;

/// Filler rate above this is "many" (fillers/second, strict).
pub const HIGH_FILLER_RATE: f64 = 15.0;

/// Upper and lower percentile ranks for the pitch-variety spread.
pub const PITCH_UPPER_PERCENTILE: f64 = 95.0;
pub const PITCH_LOWER_PERCENTILE: f64 = 5.0;

/// Single-token fillers checked against each whitespace token.
pub const DEFAULT_FILLER_WORDS: &[&str] = &[
    "uh", "um", "like", "basically", "well", "er", "hmm", "actually", "very",
    "seriously", "that", "just", "only", "really", "slightly", "almost",
    "seemed", "perhaps", "maybe", "simply", "somehow", "absolutely", "now",
    "okay", "so", "right", "mhm", "totally", "literally", "clearly",
];

/// Multi-word fillers matched as substrings of the whole line.
pub const DEFAULT_FILLER_PHRASES: &[&str] = &[
    "sort of", "kind of", "a little", "uh huh", "or something", "you see",
    "you know", "i mean", "believe me", "i guess", "i suppose",
];

pub const CMUDICT_FILE_NAME: &str = "cmudict.dict";
pub const CMUDICT_URL: &str =
    "https://raw.githubusercontent.com/cmusphinx/cmudict/master/cmudict.dict";
