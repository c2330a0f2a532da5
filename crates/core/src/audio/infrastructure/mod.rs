pub mod autocorrelation_tracker;
pub mod pcm_signal;
