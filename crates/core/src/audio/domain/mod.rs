pub mod audio_signal;
pub mod pitch_contour_analyzer;
