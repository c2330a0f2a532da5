pub mod analysis_logger;
pub mod analyze_transcript_use_case;
pub mod infrastructure;
pub mod segment_executor;
