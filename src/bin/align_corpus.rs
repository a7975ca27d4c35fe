use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use chunkalign::pipeline::discovery;
use chunkalign::pipeline::worker;
use chunkalign::{AlignConfig, ChunkAlignerBuilder, ShortChunkPolicy};

#[derive(Debug, Parser)]
#[command(name = "align_corpus")]
#[command(about = "Align whisper word-timestamp transcripts against ground-truth texts")]
struct Args {
    /// Directory of per-recording `<id>.json` whisper transcripts.
    #[arg(long, env = "CHUNKALIGN_WHISPER_DIR")]
    whisper_dir: PathBuf,
    /// Directory of per-recording `<id>.txt` ground-truth texts.
    #[arg(long, env = "CHUNKALIGN_GROUND_TRUTH_DIR")]
    ground_truth_dir: PathBuf,
    /// Directory for the per-recording aligned `<id>.json` outputs.
    #[arg(long, env = "CHUNKALIGN_OUT_DIR")]
    out_dir: PathBuf,
    /// Chunk duration bound in seconds.
    #[arg(long, env = "CHUNKALIGN_DURATION", default_value_t = AlignConfig::DEFAULT_CHUNK_DURATION_SECS)]
    duration: f64,
    /// Worker pool size; recordings are aligned in parallel, chunks within a
    /// recording never are.
    #[arg(long, env = "CHUNKALIGN_WORKERS", default_value_t = worker::DEFAULT_WORKERS)]
    workers: usize,
    /// Align chunks with fewer than two words instead of skipping them.
    #[arg(long, env = "CHUNKALIGN_KEEP_SHORT_CHUNKS", default_value_t = false)]
    keep_short_chunks: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    if run().is_err() {
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = Args::parse();
    if !args.duration.is_finite() || args.duration <= 0.0 {
        return Err(format!(
            "--duration must be a positive number of seconds, got {}",
            args.duration
        ));
    }

    let pairs = discovery::discover_pairs(&args.whisper_dir, &args.ground_truth_dir)
        .map_err(|err| format!("corpus discovery failed: {err}"))?;
    if pairs.is_empty() {
        return Err(format!(
            "no paired recordings found under '{}' and '{}'",
            args.whisper_dir.display(),
            args.ground_truth_dir.display()
        ));
    }

    let config = AlignConfig {
        chunk_duration_secs: args.duration,
        short_chunk_policy: if args.keep_short_chunks {
            ShortChunkPolicy::PassThrough
        } else {
            ShortChunkPolicy::Skip
        },
        ..AlignConfig::default()
    };
    let aligner = ChunkAlignerBuilder::new(config).build();

    let progress = ProgressBar::new(pairs.len() as u64);
    progress.set_style(
        ProgressStyle::with_template(
            "[{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} ({eta}) {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=>-"),
    );
    progress.set_message("aligning...");

    let started = Instant::now();
    let written_pairs = AtomicUsize::new(0);
    let outcomes = worker::process_corpus(&aligner, &pairs, &args.out_dir, args.workers, |done| {
        if let Ok(count) = &done.result {
            written_pairs.fetch_add(*count, Ordering::Relaxed);
        }
        progress.inc(1);
    })
    .map_err(|err| format!("corpus processing failed: {err}"))?;
    progress.finish_with_message("alignment pass complete");

    let failures: Vec<&worker::RecordingOutcome> =
        outcomes.iter().filter(|o| o.result.is_err()).collect();
    for outcome in &failures {
        if let Err(err) = &outcome.result {
            eprintln!("{}: {err}", outcome.id);
        }
    }
    println!(
        "aligned {} recording(s) ({} pair(s), {} failed) in {:.2}s -> {}",
        outcomes.len() - failures.len(),
        written_pairs.load(Ordering::Relaxed),
        failures.len(),
        started.elapsed().as_secs_f64(),
        args.out_dir.display()
    );

    if failures.len() == outcomes.len() {
        return Err("every recording failed".to_string());
    }
    Ok(())
}
