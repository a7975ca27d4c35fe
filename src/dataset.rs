use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::types::AlignedPair;

/// One fixed-width training record: a time window of a recording paired with
/// the ground-truth text aligned to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetRecord {
    pub recording_id: String,
    pub start_time: f64,
    pub end_time: f64,
    pub gt_chunk: String,
}

/// Recording-level train/test assignment. Every record of a recording stays
/// inside a single split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitAssignment {
    pub train: Vec<String>,
    pub test: Vec<String>,
}

/// Lays the aligned pairs of one recording onto fixed-width time windows.
///
/// Windows advance in `window` steps from zero; the last one is clipped to
/// `total_duration`, which comes from outside (typically the audio file) —
/// this module never decodes audio. Pairs beyond the recording's duration are
/// dropped, mirroring the window walk ending once the duration is covered.
/// A non-positive `total_duration` yields no records: a zero-width window
/// carries no audio to train on.
pub fn windowed_records(
    recording_id: &str,
    pairs: &[AlignedPair],
    total_duration: f64,
    window: f64,
) -> Vec<DatasetRecord> {
    let mut records = Vec::new();
    let mut start_time = 0.0;
    for pair in pairs {
        if start_time >= total_duration {
            break;
        }
        let end_time = (start_time + window).min(total_duration);
        records.push(DatasetRecord {
            recording_id: recording_id.to_string(),
            start_time,
            end_time,
            gt_chunk: pair.gt_chunk.clone(),
        });
        start_time += window;
    }
    records
}

/// Shuffles recording ids with a seeded RNG and partitions them at
/// `train_ratio`. The split is by recording, never by record, so no
/// recording's content leaks across the train/test boundary.
pub fn split_recordings(ids: &[String], train_ratio: f64, seed: u64) -> SplitAssignment {
    let mut shuffled: Vec<String> = ids.to_vec();
    let mut rng = StdRng::seed_from_u64(seed);
    shuffled.shuffle(&mut rng);

    let ratio = train_ratio.clamp(0.0, 1.0);
    let train_count = (shuffled.len() as f64 * ratio).round() as usize;
    let test = shuffled.split_off(train_count.min(shuffled.len()));
    SplitAssignment {
        train: shuffled,
        test,
    }
}
