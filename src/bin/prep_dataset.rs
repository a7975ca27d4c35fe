use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use chunkalign::dataset::{split_recordings, windowed_records, DatasetRecord};
use chunkalign::types::AlignedPair;

#[derive(Debug, Parser)]
#[command(name = "prep_dataset")]
#[command(about = "Assemble aligned chunks into time-windowed train/test records")]
struct Args {
    /// Directory of per-recording aligned `<id>.json` files (align_corpus output).
    #[arg(long, env = "CHUNKALIGN_CHUNKS_DIR")]
    chunks_dir: PathBuf,
    /// JSON map of recording id to duration in seconds. Durations come from
    /// the audio files; this tool never decodes audio itself.
    #[arg(long, env = "CHUNKALIGN_DURATIONS")]
    durations: PathBuf,
    /// Directory for train.json and test.json.
    #[arg(long, env = "CHUNKALIGN_DATASET_OUT_DIR")]
    out_dir: PathBuf,
    /// Width of each dataset time window, in seconds.
    #[arg(long, env = "CHUNKALIGN_WINDOW", default_value_t = 30.0)]
    window: f64,
    /// Fraction of recordings assigned to the train split.
    #[arg(long, env = "CHUNKALIGN_TRAIN_RATIO", default_value_t = 0.8)]
    train_ratio: f64,
    /// Seed for the recording shuffle.
    #[arg(long, env = "CHUNKALIGN_SPLIT_SEED", default_value_t = 42)]
    seed: u64,
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
    if !(0.0..=1.0).contains(&args.train_ratio) {
        return Err(format!(
            "--train-ratio must be in [0, 1], got {}",
            args.train_ratio
        ));
    }
    if !args.window.is_finite() || args.window <= 0.0 {
        return Err(format!(
            "--window must be a positive number of seconds, got {}",
            args.window
        ));
    }

    let durations = load_durations(&args.durations)?;
    let recordings = load_aligned_recordings(&args.chunks_dir)?;
    if recordings.is_empty() {
        return Err(format!(
            "no aligned recordings found under '{}'",
            args.chunks_dir.display()
        ));
    }

    let mut records_by_id: HashMap<String, Vec<DatasetRecord>> = HashMap::new();
    for (id, pairs) in &recordings {
        let Some(&duration) = durations.get(id) else {
            tracing::warn!(id = id.as_str(), "no duration entry for recording; skipping");
            continue;
        };
        records_by_id.insert(id.clone(), windowed_records(id, pairs, duration, args.window));
    }

    let mut ids: Vec<String> = records_by_id.keys().cloned().collect();
    ids.sort();
    let split = split_recordings(&ids, args.train_ratio, args.seed);

    let train = collect_records(&split.train, &records_by_id);
    let test = collect_records(&split.test, &records_by_id);

    fs::create_dir_all(&args.out_dir)
        .map_err(|err| format!("failed to create '{}': {err}", args.out_dir.display()))?;
    write_records(&args.out_dir.join("train.json"), &train)?;
    write_records(&args.out_dir.join("test.json"), &test)?;

    println!(
        "wrote {} train record(s) from {} recording(s), {} test record(s) from {} recording(s) -> {}",
        train.len(),
        split.train.len(),
        test.len(),
        split.test.len(),
        args.out_dir.display()
    );
    Ok(())
}

fn load_durations(path: &Path) -> Result<HashMap<String, f64>, String> {
    let contents = fs::read_to_string(path)
        .map_err(|err| format!("failed to read durations file '{}': {err}", path.display()))?;
    serde_json::from_str(&contents)
        .map_err(|err| format!("failed to parse durations file '{}': {err}", path.display()))
}

fn load_aligned_recordings(chunks_dir: &Path) -> Result<Vec<(String, Vec<AlignedPair>)>, String> {
    let entries = fs::read_dir(chunks_dir)
        .map_err(|err| format!("failed to read '{}': {err}", chunks_dir.display()))?;

    let mut recordings = Vec::new();
    for entry in entries {
        let entry = entry
            .map_err(|err| format!("failed to read entry in '{}': {err}", chunks_dir.display()))?;
        let path = entry.path();
        if path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_none_or(|ext| !ext.eq_ignore_ascii_case("json"))
        {
            continue;
        }
        let Some(id) = path.file_stem().and_then(|stem| stem.to_str()) else {
            continue;
        };
        let contents = fs::read_to_string(&path)
            .map_err(|err| format!("failed to read '{}': {err}", path.display()))?;
        let pairs: Vec<AlignedPair> = serde_json::from_str(&contents)
            .map_err(|err| format!("failed to parse '{}': {err}", path.display()))?;
        recordings.push((id.to_string(), pairs));
    }

    recordings.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(recordings)
}

fn collect_records(
    ids: &[String],
    records_by_id: &HashMap<String, Vec<DatasetRecord>>,
) -> Vec<DatasetRecord> {
    ids.iter()
        .filter_map(|id| records_by_id.get(id))
        .flat_map(|records| records.iter().cloned())
        .collect()
}

fn write_records(path: &Path, records: &[DatasetRecord]) -> Result<(), String> {
    let json = serde_json::to_string_pretty(records)
        .map_err(|err| format!("failed to serialize '{}': {err}", path.display()))?;
    fs::write(path, json).map_err(|err| format!("failed to write '{}': {err}", path.display()))
}
