//! Level catalogue: one static table of buggy/correct snippets per track.
//!
//! Tables live in per-track child modules; `catalogue()` is the single
//! lookup point the rest of the crate goes through.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GameError;

mod javascript;
mod python;

pub use javascript::JAVASCRIPT_LEVELS;
pub use python::PYTHON_LEVELS;

/// Language-specific level set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Track {
    #[default]
    JavaScript,
    Python,
}

impl Track {
    pub const ALL: [Track; 2] = [Track::JavaScript, Track::Python];

    /// Identifier used as the storage key and in the JS API.
    pub fn id(self) -> &'static str {
        match self {
            Track::JavaScript => "javascript",
            Track::Python => "python",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Track::JavaScript => "JavaScript",
            Track::Python => "Python",
        }
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Track {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "javascript" | "js" => Ok(Track::JavaScript),
            "python" | "py" => Ok(Track::Python),
            other => Err(GameError::UnknownTrack(other.to_string())),
        }
    }
}

/// Immutable level definition.
#[derive(Debug, Serialize)]
pub struct LevelDef {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub buggy_code: &'static str,
    pub correct_code: &'static str,
    pub hints: &'static [&'static str],
}

pub fn catalogue(track: Track) -> &'static [LevelDef] {
    match track {
        Track::JavaScript => &JAVASCRIPT_LEVELS,
        Track::Python => &PYTHON_LEVELS,
    }
}

/// Level `id` (1-based) of `track`.
pub fn level(track: Track, id: u32) -> Option<&'static LevelDef> {
    let idx = (id as usize).checked_sub(1)?;
    catalogue(track).get(idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_round_trips_through_its_id() {
        for t in Track::ALL {
            assert_eq!(t.id().parse::<Track>().unwrap(), t);
        }
        assert_eq!(" Python ".parse::<Track>().unwrap(), Track::Python);
        assert!("cobol".parse::<Track>().is_err());
    }

    #[test]
    fn track_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Track::JavaScript).unwrap(), "\"javascript\"");
        let t: Track = serde_json::from_str("\"python\"").unwrap();
        assert_eq!(t, Track::Python);
    }

    #[test]
    fn level_lookup_is_one_based() {
        assert!(level(Track::JavaScript, 0).is_none());
        assert_eq!(level(Track::JavaScript, 1).map(|l| l.id), Some(1));
        assert_eq!(level(Track::Python, 20).map(|l| l.id), Some(20));
        assert!(level(Track::Python, 21).is_none());
    }
}
