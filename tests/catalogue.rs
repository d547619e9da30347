// Catalogue invariants for both tracks.
// Native-only: no wasm/browser APIs are touched.

use std::collections::HashSet;

use bugfix_sim::levels::{catalogue, level};
use bugfix_sim::{GameConfig, Track, normalize_code, validate_code};

#[test]
fn ids_are_sequential_from_one() {
    for track in Track::ALL {
        for (idx, lvl) in catalogue(track).iter().enumerate() {
            assert_eq!(lvl.id as usize, idx + 1, "{track} level at index {idx} has id {}", lvl.id);
        }
    }
}

#[test]
fn every_playable_level_exists() {
    let cfg = GameConfig::default();
    for track in Track::ALL {
        let count = cfg.level_count(catalogue(track).len());
        assert_eq!(count, 15);
        for id in 1..=count {
            assert!(level(track, id).is_some(), "{track} is missing level {id}");
        }
    }
}

#[test]
fn buggy_code_is_never_already_correct() {
    for track in Track::ALL {
        for lvl in catalogue(track) {
            assert!(
                !validate_code(lvl.buggy_code, lvl.correct_code),
                "{track} level {} '{}' is solved by its own buggy code",
                lvl.id,
                lvl.title
            );
        }
    }
}

#[test]
fn correct_code_survives_editor_noise() {
    for track in Track::ALL {
        for lvl in catalogue(track) {
            let noisy: String = lvl
                .correct_code
                .lines()
                .map(|l| format!("{l}   \n"))
                .collect();
            let noisy = format!("\n\n{noisy}\n");
            assert!(validate_code(&noisy, lvl.correct_code), "{track} level {}", lvl.id);
        }
    }
}

#[test]
fn correct_code_is_already_normalized() {
    for track in Track::ALL {
        for lvl in catalogue(track) {
            assert_eq!(normalize_code(lvl.correct_code), lvl.correct_code, "{track} level {}", lvl.id);
        }
    }
}

#[test]
fn levels_have_text_and_distinct_hints() {
    for track in Track::ALL {
        let mut titles = HashSet::new();
        for lvl in catalogue(track) {
            assert!(!lvl.title.is_empty() && !lvl.description.is_empty());
            assert!(titles.insert(lvl.title), "duplicate {track} title '{}'", lvl.title);
            assert!(!lvl.hints.is_empty(), "{track} level {} has no hints", lvl.id);
            let unique: HashSet<_> = lvl.hints.iter().collect();
            assert_eq!(unique.len(), lvl.hints.len(), "{track} level {} repeats a hint", lvl.id);
        }
    }
}
