//! Cross-user leaderboard built from every stored progress record.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::Serialize;

use crate::error::GameError;
use crate::levels::Track;
use crate::storage::UserRecord;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScoreFilter {
    #[default]
    All,
    Only(Track),
}

impl ScoreFilter {
    fn admits(self, track: Track) -> bool {
        match self {
            ScoreFilter::All => true,
            ScoreFilter::Only(t) => t == track,
        }
    }
}

impl FromStr for ScoreFilter {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(ScoreFilter::All);
        }
        s.parse().map(ScoreFilter::Only)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScoreboardEntry {
    pub rank: usize,
    pub username: String,
    pub track: Track,
    pub score: u32,
    pub completed_levels: usize,
    /// Floored mean completion time, 0 when unknown.
    pub avg_time_secs: u32,
    /// Row belongs to the player and track currently selected.
    pub is_current: bool,
}

/// Rank every user/track pair with a positive score, best first.
/// Ties keep storage order (users by name, then track order).
pub fn build(
    users: &BTreeMap<String, UserRecord>,
    filter: ScoreFilter,
    current: Option<(&str, Track)>,
) -> Vec<ScoreboardEntry> {
    let mut rows: Vec<ScoreboardEntry> = users
        .iter()
        .flat_map(|(name, rec)| {
            Track::ALL
                .into_iter()
                .filter(move |t| filter.admits(*t))
                .filter_map(move |t| rec.tracks.get(&t).map(|p| (name, t, p)))
        })
        .filter(|(_, _, p)| p.total_score > 0)
        .map(|(name, track, p)| ScoreboardEntry {
            rank: 0,
            username: name.clone(),
            track,
            score: p.total_score,
            completed_levels: p.completed_count(),
            avg_time_secs: p.average_time_secs().unwrap_or(0),
            is_current: current == Some((name.as_str(), track)),
        })
        .collect();

    rows.sort_by(|a, b| b.score.cmp(&a.score));
    for (idx, row) in rows.iter_mut().enumerate() {
        row.rank = idx + 1;
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::TrackProgress;

    fn record(js: &[(u32, u32, u32)], py: &[(u32, u32, u32)]) -> UserRecord {
        let mut rec = UserRecord::new_player();
        for (track, levels) in [(Track::JavaScript, js), (Track::Python, py)] {
            let mut p = TrackProgress::default();
            for &(id, score, secs) in levels {
                p.record_completion(id, score, secs, 15);
            }
            rec.tracks.insert(track, p);
        }
        rec
    }

    fn users() -> BTreeMap<String, UserRecord> {
        BTreeMap::from([
            ("alice".to_string(), record(&[(1, 150, 20), (2, 170, 11)], &[])),
            ("bob".to_string(), record(&[(1, 200, 5)], &[(1, 400, 1), (2, 120, 30)])),
            ("carol".to_string(), record(&[], &[])),
        ])
    }

    #[test]
    fn ranks_by_score_and_skips_zero_totals() {
        let rows = build(&users(), ScoreFilter::All, Some(("alice", Track::JavaScript)));
        let summary: Vec<_> = rows.iter().map(|r| (r.rank, r.username.as_str(), r.track, r.score)).collect();
        assert_eq!(
            summary,
            [
                (1, "bob", Track::Python, 520),
                (2, "alice", Track::JavaScript, 320),
                (3, "bob", Track::JavaScript, 200),
            ]
        );
        assert!(rows[1].is_current);
        assert!(!rows[0].is_current);
        assert_eq!(rows[1].avg_time_secs, 15);
        assert_eq!(rows[0].completed_levels, 2);
    }

    #[test]
    fn filter_limits_tracks() {
        let rows = build(&users(), ScoreFilter::Only(Track::JavaScript), None);
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.track == Track::JavaScript));
        assert_eq!(rows[0].username, "alice");
    }

    #[test]
    fn filter_parses() {
        assert_eq!("all".parse::<ScoreFilter>().unwrap(), ScoreFilter::All);
        assert_eq!("python".parse::<ScoreFilter>().unwrap(), ScoreFilter::Only(Track::Python));
        assert!("ruby".parse::<ScoreFilter>().is_err());
    }
}
