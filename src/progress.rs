//! Per-user, per-track progress record and its scoring rules.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Persisted progress of one user on one track.
///
/// Field names match the stored JSON (`highestUnlocked`, `lastLevel`, ...).
/// `total_score` always equals the sum of `level_scores` once the record has
/// gone through [`TrackProgress::repaired`] or [`TrackProgress::record_completion`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TrackProgress {
    pub highest_unlocked: u32,
    pub last_level: u32,
    pub total_score: u32,
    pub level_scores: BTreeMap<u32, u32>,
    /// Seconds taken on the latest completion of each level.
    pub level_times: BTreeMap<u32, u32>,
}

impl Default for TrackProgress {
    fn default() -> Self {
        Self {
            highest_unlocked: 1,
            last_level: 1,
            total_score: 0,
            level_scores: BTreeMap::new(),
            level_times: BTreeMap::new(),
        }
    }
}

impl TrackProgress {
    /// Default-fill a record read back from storage.
    pub fn repaired(mut self) -> Self {
        self.highest_unlocked = self.highest_unlocked.max(1);
        self.last_level = self.last_level.max(1);
        self.total_score = self.score_sum();
        self
    }

    pub fn score_sum(&self) -> u32 {
        self.level_scores.values().fold(0u32, |acc, s| acc.saturating_add(*s))
    }

    /// Apply a successful attempt. `level_count` caps the unlock frontier;
    /// the frontier itself never moves backwards.
    pub fn record_completion(&mut self, level_id: u32, score: u32, elapsed_secs: u32, level_count: u32) {
        self.level_scores.insert(level_id, score);
        self.level_times.insert(level_id, elapsed_secs);
        self.total_score = self.score_sum();
        let next = level_id.saturating_add(1).min(level_count.max(1));
        self.highest_unlocked = self.highest_unlocked.max(next).max(1);
        self.last_level = level_id;
    }

    pub fn is_completed(&self, level_id: u32) -> bool {
        self.level_scores.contains_key(&level_id)
    }

    pub fn is_unlocked(&self, level_id: u32) -> bool {
        level_id >= 1 && level_id <= self.highest_unlocked
    }

    pub fn completed_count(&self) -> usize {
        self.level_scores.len()
    }

    /// Mean completion time in whole seconds (floored); `None` before any completion.
    pub fn average_time_secs(&self) -> Option<u32> {
        if self.level_times.is_empty() {
            return None;
        }
        let sum: u64 = self.level_times.values().map(|t| u64::from(*t)).sum();
        Some((sum / self.level_times.len() as u64) as u32)
    }
}
