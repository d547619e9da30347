// End-to-end game flow against in-memory storage.
// Exercises the progress and session properties a player relies on.

use std::rc::Rc;

use bugfix_sim::game::{Feedback, GameContext, View};
use bugfix_sim::levels::level;
use bugfix_sim::session::TickOutcome;
use bugfix_sim::storage::{KeyValueStore, MemoryStorage, ProgressStore};
use bugfix_sim::{GameConfig, Track, TrackProgress};

fn player(storage: Rc<MemoryStorage>, name: &str, track: Track) -> GameContext<Rc<MemoryStorage>> {
    let mut g = GameContext::new(storage, GameConfig::default());
    assert!(g.login(name));
    g.choose_track(track);
    g
}

/// Play `id` on the current track, letting `ticks` seconds run first.
fn solve(g: &mut GameContext<Rc<MemoryStorage>>, id: u32, ticks: u32) -> u32 {
    let view = g.start_level(id, 0.0);
    for _ in 0..ticks {
        assert!(matches!(g.tick(view.generation), TickOutcome::Running { .. }));
    }
    let code = level(g.track(), id).unwrap().correct_code;
    match g.submit(code, f64::from(ticks) * 1000.0) {
        Feedback::Solved(done) => done.score.total,
        other => panic!("level {id} not solved: {other:?}"),
    }
}

#[test]
fn worked_scoring_example() {
    let mut g = player(Rc::new(MemoryStorage::new()), "alice", Track::JavaScript);
    assert_eq!(solve(&mut g, 1, 35), 150);
    assert_eq!(solve(&mut g, 2, 25), 170);
    assert_eq!(solve(&mut g, 3, 15), 190);
    let p = g.progress();
    assert_eq!(p.total_score, 510);
    assert_eq!(p.highest_unlocked, 4);
    assert_eq!(p.last_level, 3);
}

#[test]
fn total_matches_sum_and_frontier_never_drops() {
    let mut g = player(Rc::new(MemoryStorage::new()), "alice", Track::Python);
    let mut frontier = 1;
    for (id, ticks) in [(1, 3), (2, 59), (1, 40), (5, 0), (3, 10), (15, 1), (2, 2)] {
        solve(&mut g, id, ticks);
        let p = g.progress();
        assert_eq!(p.total_score, p.level_scores.values().sum::<u32>());
        assert!(p.highest_unlocked >= frontier, "frontier dropped after level {id}");
        assert!(p.highest_unlocked <= 15);
        frontier = p.highest_unlocked;
    }
    assert_eq!(frontier, 15);
}

#[test]
fn reset_touches_only_the_current_track() {
    let storage = Rc::new(MemoryStorage::new());
    let mut g = player(storage.clone(), "alice", Track::JavaScript);
    solve(&mut g, 1, 0);
    g.choose_track(Track::Python);
    solve(&mut g, 1, 0);
    let python_before = g.progress();

    g.choose_track(Track::JavaScript);
    g.reset_progress();
    assert_eq!(g.progress(), TrackProgress::default());

    let store = ProgressStore::new(storage, GameConfig::default().storage);
    assert_eq!(store.load("alice", Track::Python), python_before);
}

#[test]
fn hints_stop_at_the_last_one() {
    let mut g = player(Rc::new(MemoryStorage::new()), "alice", Track::JavaScript);
    g.start_level(1, 0.0);
    let expected = level(Track::JavaScript, 1).unwrap().hints;
    assert_eq!(expected.len(), 3);
    for (i, text) in expected.iter().enumerate() {
        let hint = g.reveal_hint().expect("hint available");
        assert_eq!(hint.number, i + 1);
        assert_eq!(hint.text, *text);
    }
    assert!(g.reveal_hint().is_none());
    assert!(g.reveal_hint().is_none());
    assert_eq!(g.session().hints_revealed(), 3);
}

#[test]
fn time_out_locks_the_attempt_until_restart() {
    let mut g = player(Rc::new(MemoryStorage::new()), "alice", Track::JavaScript);
    let view = g.start_level(2, 0.0);
    for _ in 0..59 {
        g.tick(view.generation);
    }
    assert_eq!(g.tick(view.generation), TickOutcome::TimedOut);
    let correct = level(Track::JavaScript, 2).unwrap().correct_code;
    assert_eq!(g.submit(correct, 60_000.0), Feedback::Rejected);

    let again = g.restart(62_000.0);
    assert_eq!(again.id, 2);
    assert_eq!(again.remaining, 60);
    assert!(matches!(g.submit(correct, 63_000.0), Feedback::Solved(_)));
}

#[test]
fn corrupt_storage_starts_clean() {
    let storage = Rc::new(MemoryStorage::new());
    storage.set_item("bfs_username", "alice");
    storage.set_item("bfs_all_users", "{\"alice\": ");
    let mut g = GameContext::new(storage.clone(), GameConfig::default());
    assert_eq!(g.view(), View::Menu);
    assert_eq!(g.progress(), TrackProgress::default());

    // The next save replaces the broken blob.
    solve(&mut g, 1, 0);
    let raw = storage.get_item("bfs_all_users").unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed["alice"]["javascript"]["totalScore"], 220);
}

#[test]
fn players_do_not_share_progress() {
    let storage = Rc::new(MemoryStorage::new());
    let mut alice = player(storage.clone(), "alice", Track::JavaScript);
    solve(&mut alice, 1, 0);
    drop(alice);

    let mut bob = player(storage.clone(), "bob", Track::JavaScript);
    assert_eq!(bob.progress(), TrackProgress::default());
    solve(&mut bob, 1, 30);

    let board = bob.scoreboard(bugfix_sim::scoreboard::ScoreFilter::All);
    let names: Vec<_> = board.iter().map(|r| r.username.as_str()).collect();
    assert_eq!(names, ["alice", "bob"]);
    assert!(board[1].is_current);
}
