//! Tunable game constants.
//!
//! Every field has a default so a host page can pass a partial JSON override
//! (e.g. `{"timer_seconds": 90}`) and leave the rest alone.

use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Countdown length of one level attempt.
    pub timer_seconds: u32,
    pub base_score: u32,
    /// Points per second left on the clock when the fix is accepted.
    pub time_bonus_multiplier: u32,
    /// Pause between "time's up" and the automatic restart.
    pub restart_delay_secs: u32,
    pub tick_interval_ms: u32,
    /// Levels offered per track; capped by the catalogue length.
    pub playable_levels: u32,
    pub warning_threshold_secs: u32,
    pub danger_threshold_secs: u32,
    pub storage: StorageKeys,
    /// `tracing` filter directive for the browser console, e.g. `"bugfix_sim=debug"`.
    pub log_filter: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            timer_seconds: 60,
            base_score: 100,
            time_bonus_multiplier: 2,
            restart_delay_secs: 2,
            tick_interval_ms: 1000,
            playable_levels: 15,
            warning_threshold_secs: 20,
            danger_threshold_secs: 10,
            storage: StorageKeys::default(),
            log_filter: "info".to_string(),
        }
    }
}

/// localStorage keys of the single nested blob layout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
    pub current_user: String,
    pub all_users: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            current_user: "bfs_username".to_string(),
            all_users: "bfs_all_users".to_string(),
        }
    }
}

impl GameConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Number of levels a track actually offers.
    pub fn level_count(&self, catalogue_len: usize) -> u32 {
        self.playable_levels.clamp(1, catalogue_len.max(1) as u32)
    }

    /// Countdown length of an attempt, at least one second.
    pub fn timer_secs(&self) -> u32 {
        self.timer_seconds.max(1)
    }

    pub fn restart_delay_ms(&self) -> u32 {
        self.restart_delay_secs.saturating_mul(1000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_override_keeps_other_defaults() {
        let cfg = GameConfig::from_json(r#"{"timer_seconds": 90, "storage": {"all_users": "x"}}"#)
            .unwrap();
        assert_eq!(cfg.timer_seconds, 90);
        assert_eq!(cfg.base_score, 100);
        assert_eq!(cfg.storage.all_users, "x");
        assert_eq!(cfg.storage.current_user, "bfs_username");
    }

    #[test]
    fn malformed_override_is_an_error() {
        assert!(GameConfig::from_json("{ nope").is_err());
    }

    #[test]
    fn level_count_is_capped_by_catalogue() {
        let cfg = GameConfig { playable_levels: 50, ..GameConfig::default() };
        assert_eq!(cfg.level_count(20), 20);
        let cfg = GameConfig { playable_levels: 0, ..GameConfig::default() };
        assert_eq!(cfg.level_count(20), 1);
        assert_eq!(GameConfig::default().level_count(20), 15);
    }

    #[test]
    fn countdown_is_at_least_one_second() {
        let cfg = GameConfig::from_json(r#"{"timer_seconds": 0}"#).unwrap();
        assert_eq!(cfg.timer_secs(), 1);
        assert_eq!(GameConfig::default().timer_secs(), 60);
    }
}
