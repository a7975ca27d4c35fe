use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AlignError;

/// One recording's input files, keyed by the shared base identifier
/// (`<id>.json` whisper transcript plus `<id>.txt` ground truth).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordingPair {
    pub id: String,
    pub whisper_path: PathBuf,
    pub ground_truth_path: PathBuf,
}

/// Pairs every `*.json` file in `whisper_dir` with its `<id>.txt` counterpart
/// in `ground_truth_dir`. Transcripts without a counterpart are logged and
/// skipped rather than failing the run. Results are sorted by id so corpus
/// runs are deterministic.
pub fn discover_pairs(
    whisper_dir: &Path,
    ground_truth_dir: &Path,
) -> Result<Vec<RecordingPair>, AlignError> {
    let entries =
        fs::read_dir(whisper_dir).map_err(|e| AlignError::io("read whisper directory", e))?;

    let mut pairs = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| AlignError::io("read whisper directory entry", e))?;
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

        let ground_truth_path = ground_truth_dir.join(format!("{id}.txt"));
        if !ground_truth_path.exists() {
            tracing::warn!(id, "no ground-truth text for whisper transcript; skipping");
            continue;
        }
        pairs.push(RecordingPair {
            id: id.to_string(),
            whisper_path: path,
            ground_truth_path,
        });
    }

    pairs.sort_by(|a, b| a.id.cmp(&b.id));
    Ok(pairs)
}
