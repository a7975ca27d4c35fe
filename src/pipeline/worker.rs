use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::error::AlignError;
use crate::pipeline::discovery::RecordingPair;
use crate::pipeline::runtime::ChunkAligner;
use crate::types::WhisperTranscript;

pub const DEFAULT_WORKERS: usize = 10;

/// Outcome of one recording's load → align → write cycle.
#[derive(Debug)]
pub struct RecordingOutcome {
    pub id: String,
    pub result: Result<usize, AlignError>,
}

/// Runs the full per-recording cycle for every pair on a bounded worker pool.
///
/// Recordings are independent: each worker owns its ground truth, cursor and
/// output file, so no coordination is needed, and a failure in one recording
/// is captured in its outcome instead of aborting the others. `on_done` is
/// called once per finished recording (progress reporting).
pub fn process_corpus(
    aligner: &ChunkAligner,
    pairs: &[RecordingPair],
    out_dir: &Path,
    workers: usize,
    on_done: impl Fn(&RecordingOutcome) + Send + Sync,
) -> Result<Vec<RecordingOutcome>, AlignError> {
    fs::create_dir_all(out_dir).map_err(|e| AlignError::io("create output directory", e))?;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers.max(1))
        .build()
        .map_err(|e| AlignError::Runtime {
            context: "build worker pool",
            message: e.to_string(),
        })?;

    let outcomes = pool.install(|| {
        pairs
            .par_iter()
            .map(|pair| {
                let outcome = RecordingOutcome {
                    id: pair.id.clone(),
                    result: process_recording(aligner, pair, out_dir),
                };
                if let Err(err) = &outcome.result {
                    tracing::error!(id = outcome.id.as_str(), %err, "recording failed");
                }
                on_done(&outcome);
                outcome
            })
            .collect()
    });
    Ok(outcomes)
}

/// Loads one recording, aligns it fully in memory, and writes the aligned
/// pairs once. Returns the number of pairs written.
pub fn process_recording(
    aligner: &ChunkAligner,
    pair: &RecordingPair,
    out_dir: &Path,
) -> Result<usize, AlignError> {
    let whisper_json = fs::read_to_string(&pair.whisper_path)
        .map_err(|e| AlignError::io("read whisper transcript", e))?;
    let transcript: WhisperTranscript = serde_json::from_str(&whisper_json)
        .map_err(|e| AlignError::json("parse whisper transcript", e))?;
    let ground_truth = fs::read_to_string(&pair.ground_truth_path)
        .map_err(|e| AlignError::io("read ground-truth text", e))?;

    let aligned = aligner.align_recording(&transcript.words, &ground_truth);
    let out_path = out_dir.join(format!("{}.json", pair.id));
    write_json_atomic(&out_path, &aligned)?;
    Ok(aligned.len())
}

/// Serializes to a sibling temp file and renames it into place, so a crash
/// mid-write never leaves a truncated output file.
fn write_json_atomic<T: serde::Serialize>(path: &Path, value: &T) -> Result<(), AlignError> {
    let json =
        serde_json::to_string_pretty(value).map_err(|e| AlignError::json("serialize output", e))?;
    let tmp_path = tmp_sibling(path);
    fs::write(&tmp_path, json).map_err(|e| AlignError::io("write temp output file", e))?;
    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(AlignError::io("rename output file into place", e));
    }
    Ok(())
}

fn tmp_sibling(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AlignConfig;
    use crate::pipeline::builder::ChunkAlignerBuilder;
    use crate::types::AlignedPair;

    fn temp_dirs(tag: &str) -> (PathBuf, PathBuf, PathBuf) {
        let root = std::env::temp_dir().join(format!("chunkalign_worker_{tag}"));
        let _ = fs::remove_dir_all(&root);
        let whisper_dir = root.join("whisper");
        let gt_dir = root.join("gt");
        let out_dir = root.join("out");
        fs::create_dir_all(&whisper_dir).expect("create whisper dir");
        fs::create_dir_all(&gt_dir).expect("create gt dir");
        (whisper_dir, gt_dir, out_dir)
    }

    fn write_recording(whisper_dir: &Path, gt_dir: &Path, id: &str) {
        let words = r#"{"words": [
            {"word": "hello", "start": 0.0, "end": 0.5},
            {"word": "there", "start": 0.5, "end": 1.0}
        ]}"#;
        fs::write(whisper_dir.join(format!("{id}.json")), words).expect("write json");
        fs::write(gt_dir.join(format!("{id}.txt")), "A: hello there\n").expect("write txt");
    }

    #[test]
    fn processes_recording_and_writes_output() {
        let (whisper_dir, gt_dir, out_dir) = temp_dirs("single");
        write_recording(&whisper_dir, &gt_dir, "rec1");
        let pair = RecordingPair {
            id: "rec1".to_string(),
            whisper_path: whisper_dir.join("rec1.json"),
            ground_truth_path: gt_dir.join("rec1.txt"),
        };
        fs::create_dir_all(&out_dir).expect("create out dir");

        let aligner = ChunkAlignerBuilder::new(AlignConfig::default()).build();
        let written = process_recording(&aligner, &pair, &out_dir).expect("process");
        assert_eq!(written, 1);

        let output = fs::read_to_string(out_dir.join("rec1.json")).expect("read output");
        let pairs: Vec<AlignedPair> = serde_json::from_str(&output).expect("parse output");
        assert_eq!(pairs[0].whisper_chunk, "hello there");
        assert_eq!(pairs[0].gt_chunk, "A: hello there");
    }

    #[test]
    fn one_bad_recording_does_not_abort_the_rest() {
        let (whisper_dir, gt_dir, out_dir) = temp_dirs("isolated");
        write_recording(&whisper_dir, &gt_dir, "good");
        fs::write(whisper_dir.join("bad.json"), "not json at all").expect("write bad json");
        fs::write(gt_dir.join("bad.txt"), "whatever").expect("write bad txt");

        let pairs = vec![
            RecordingPair {
                id: "bad".to_string(),
                whisper_path: whisper_dir.join("bad.json"),
                ground_truth_path: gt_dir.join("bad.txt"),
            },
            RecordingPair {
                id: "good".to_string(),
                whisper_path: whisper_dir.join("good.json"),
                ground_truth_path: gt_dir.join("good.txt"),
            },
        ];

        let aligner = ChunkAlignerBuilder::new(AlignConfig::default()).build();
        let outcomes = process_corpus(&aligner, &pairs, &out_dir, 2, |_| {}).expect("corpus");
        assert_eq!(outcomes.len(), 2);
        let failed: Vec<&str> = outcomes
            .iter()
            .filter(|o| o.result.is_err())
            .map(|o| o.id.as_str())
            .collect();
        assert_eq!(failed, ["bad"]);
        assert!(out_dir.join("good.json").exists());
        assert!(!out_dir.join("bad.json").exists());
    }

    #[test]
    fn atomic_write_leaves_no_temp_file() {
        let root = std::env::temp_dir().join("chunkalign_worker_atomic");
        let _ = fs::remove_dir_all(&root);
        fs::create_dir_all(&root).expect("create root");
        let path = root.join("out.json");
        write_json_atomic(&path, &vec!["a", "b"]).expect("write");
        assert!(path.exists());
        assert!(!root.join("out.json.tmp").exists());
    }
}
