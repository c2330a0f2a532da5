use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use speechcoach_core::analysis::domain::filler_detector::FillerDetector;
use speechcoach_core::analysis::domain::metrics_engine::SegmentMetricsEngine;
use speechcoach_core::analysis::domain::syllable_estimator::SyllableEstimator;
use speechcoach_core::analysis::domain::transcript::TranscriptSegment;
use speechcoach_core::analysis::infrastructure::cmudict_source::CmudictSource;
use speechcoach_core::analysis::infrastructure::dict_resolver;
use speechcoach_core::analysis::infrastructure::recognition_result;
use speechcoach_core::audio::domain::audio_signal::AudioSignal;
use speechcoach_core::audio::infrastructure::pcm_signal::PcmSignal;
use speechcoach_core::pipeline::analysis_logger::{
    AnalysisLogger, NullAnalysisLogger, StdoutAnalysisLogger,
};
use speechcoach_core::pipeline::analyze_transcript_use_case::AnalyzeTranscriptUseCase;
use speechcoach_core::pipeline::infrastructure::threaded_segment_executor::ThreadedSegmentExecutor;
use speechcoach_core::pipeline::segment_executor::{SegmentExecutor, SequentialSegmentExecutor};
use speechcoach_core::shared::constants::{CMUDICT_FILE_NAME, CMUDICT_URL};

/// Speech-delivery analysis for a recording with a timestamped transcript.
#[derive(Parser)]
#[command(name = "speechcoach")]
struct Cli {
    /// Input WAV recording.
    audio: PathBuf,

    /// Transcript JSON: an array of segments, or a raw recognition
    /// payload with `--format watson`.
    transcript: PathBuf,

    /// Write the enriched transcript here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Transcript file format: segments or watson.
    #[arg(long, default_value = "segments")]
    format: String,

    /// Use a local pronunciation dictionary file.
    #[arg(long)]
    dict: Option<PathBuf>,

    /// Skip the pronunciation dictionary, syllables via heuristic only.
    #[arg(long)]
    no_dict: bool,

    /// Worker threads for segment analysis (1 = sequential).
    #[arg(long, default_value = "1")]
    threads: usize,

    /// Keep segments whose time window falls outside the audio instead
    /// of aborting; their pitch variety is reported as missing.
    #[arg(long)]
    skip_bad_windows: bool,

    /// Log an aggregate summary after the run.
    #[arg(long)]
    summary: bool,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let audio = read_wav(&cli.audio)?;
    let segments = load_transcript(&cli.transcript, &cli.format)?;
    log::info!(
        "analyzing {} segments over {:.1}s of audio",
        segments.len(),
        audio.duration()
    );

    let engine = SegmentMetricsEngine::new(build_estimator(&cli)?, FillerDetector::default());
    let executor: Box<dyn SegmentExecutor> = if cli.threads > 1 {
        Box::new(ThreadedSegmentExecutor::new(cli.threads))
    } else {
        Box::new(SequentialSegmentExecutor)
    };
    let use_case = AnalyzeTranscriptUseCase::new(engine, executor, cli.skip_bad_windows);

    let mut logger: Box<dyn AnalysisLogger> = if cli.summary {
        Box::new(StdoutAnalysisLogger::new(10))
    } else {
        Box::new(NullAnalysisLogger)
    };

    let enriched = use_case.run(&segments, &audio, logger.as_mut())?;

    let json = serde_json::to_string_pretty(&enriched)?;
    match &cli.output {
        Some(path) => {
            fs::write(path, json)?;
            log::info!("saved {}", path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if cli.threads == 0 {
        return Err("--threads must be at least 1".into());
    }
    if cli.format != "segments" && cli.format != "watson" {
        return Err(format!("unknown transcript format: {}", cli.format).into());
    }
    if cli.dict.is_some() && cli.no_dict {
        return Err("--dict and --no-dict are mutually exclusive".into());
    }
    Ok(())
}

/// Decode a WAV file into a mono [-1, 1] signal, averaging channels.
fn read_wav(path: &Path) -> Result<PcmSignal, Box<dyn std::error::Error>> {
    let mut reader = hound::WavReader::open(path)?;
    let spec = reader.spec();
    let channels = spec.channels as usize;

    let samples: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Float => reader.samples::<f32>().collect::<Result<_, _>>()?,
        hound::SampleFormat::Int => {
            let full_scale = (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 / full_scale))
                .collect::<Result<_, _>>()?
        }
    };

    let mono: Vec<f32> = if channels > 1 {
        samples
            .chunks_exact(channels)
            .map(|frame| frame.iter().sum::<f32>() / channels as f32)
            .collect()
    } else {
        samples
    };

    Ok(PcmSignal::new(mono, spec.sample_rate))
}

fn load_transcript(
    path: &Path,
    format: &str,
) -> Result<Vec<TranscriptSegment>, Box<dyn std::error::Error>> {
    let text = fs::read_to_string(path)?;
    match format {
        "watson" => Ok(recognition_result::parse_segments(&text)?),
        _ => Ok(serde_json::from_str(&text)?),
    }
}

/// Build the syllable estimator, loading the pronunciation dictionary
/// exactly once for the whole run.
fn build_estimator(cli: &Cli) -> Result<SyllableEstimator, Box<dyn std::error::Error>> {
    if cli.no_dict {
        return Ok(SyllableEstimator::heuristic_only());
    }

    let path = match &cli.dict {
        Some(path) => path.clone(),
        None => dict_resolver::resolve(
            CMUDICT_FILE_NAME,
            CMUDICT_URL,
            None,
            Some(Box::new(|downloaded, total| {
                log::debug!("dictionary download: {downloaded}/{total} bytes");
            })),
        )?,
    };

    let dict = CmudictSource::from_file(&path)?;
    log::info!("loaded pronunciation dictionary ({} words)", dict.len());
    Ok(SyllableEstimator::with_dictionary(Box::new(dict)))
}
