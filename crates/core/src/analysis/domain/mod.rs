pub mod classifier;
pub mod filler_detector;
pub mod metrics_engine;
pub mod pronunciation_source;
pub mod syllable_estimator;
pub mod transcript;
