//! Game context: screen flow plus the single live level session.
//!
//! Everything the web app kept in module-level variables (current track,
//! current level, timer state) lives here and is passed explicitly. Timers are
//! not owned here; the caller arms a countdown for the generation returned by
//! [`GameContext::start_level`] and feeds ticks back through
//! [`GameContext::tick`].

use serde::Serialize;
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::levels::{self, LevelDef, Track};
use crate::progress::TrackProgress;
use crate::scoreboard::{self, ScoreFilter, ScoreboardEntry};
use crate::session::{Hint, LevelSession, Score, SubmitOutcome, TickOutcome, TimerUrgency};
use crate::storage::{KeyValueStore, ProgressStore};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    Start,
    Login,
    Language,
    Menu,
    Scoreboard,
    Game,
}

/// What a freshly started level shows.
#[derive(Clone, Debug, Serialize)]
pub struct LevelView {
    pub id: u32,
    pub level_count: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub buggy_code: &'static str,
    pub hints_total: usize,
    pub remaining: u32,
    pub urgency: TimerUrgency,
    pub total_score: u32,
    /// Countdown generation to arm the timer with.
    pub generation: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelStatus {
    Completed,
    Current,
    Locked,
    Unlocked,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LevelTile {
    pub id: u32,
    pub status: LevelStatus,
    pub score: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MenuSummary {
    pub username: Option<String>,
    pub track: Track,
    pub track_label: &'static str,
    pub total_score: u32,
    pub completed: usize,
    pub level_count: u32,
    pub avg_time_secs: Option<u32>,
    pub last_level: u32,
    pub levels: Vec<LevelTile>,
}

impl MenuSummary {
    /// "3/15"
    pub fn completed_label(&self) -> String {
        format!("{}/{}", self.completed, self.level_count)
    }

    /// "42s", or "--" before the first completion.
    pub fn avg_time_label(&self) -> String {
        self.avg_time_secs.map_or_else(|| "--".to_string(), |s| format!("{s}s"))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Completion {
    pub level_id: u32,
    pub score: Score,
    pub total_score: u32,
    pub has_next: bool,
}

/// Result of a submission as shown to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Feedback {
    /// "Please write some code first!"
    Empty,
    /// "Not quite right. Keep trying or use a hint!"
    Incorrect,
    /// Input is locked (time is up or the level is already solved).
    Rejected,
    Solved(Completion),
}

pub struct GameContext<S> {
    store: ProgressStore<S>,
    config: GameConfig,
    track: Track,
    view: View,
    session: LevelSession,
}

impl<S: KeyValueStore> GameContext<S> {
    /// Restore the remembered player (if any) and pick the opening screen.
    pub fn new(storage: S, config: GameConfig) -> Self {
        let store = ProgressStore::new(storage, config.storage.clone());
        let user = store.current_user();
        let track = user.as_deref().map(|u| store.current_track(u)).unwrap_or_default();
        let view = if user.is_some() { View::Menu } else { View::Start };
        debug!(user = user.as_deref().unwrap_or("-"), %track, ?view, "game context ready");
        Self { store, config, track, view, session: LevelSession::new() }
    }

    pub fn view(&self) -> View {
        self.view
    }
    pub fn track(&self) -> Track {
        self.track
    }
    pub fn config(&self) -> &GameConfig {
        &self.config
    }
    pub fn session(&self) -> &LevelSession {
        &self.session
    }
    pub fn store(&self) -> &ProgressStore<S> {
        &self.store
    }
    pub fn current_user(&self) -> Option<String> {
        self.store.current_user()
    }

    /// Number of playable levels on the current track.
    pub fn level_count(&self) -> u32 {
        self.config.level_count(levels::catalogue(self.track).len())
    }

    pub fn progress(&self) -> TrackProgress {
        match self.store.current_user() {
            Some(user) => self.store.load(&user, self.track),
            None => TrackProgress::default(),
        }
    }

    fn current_level(&self) -> Option<&'static LevelDef> {
        levels::level(self.track, self.session.level_id())
    }

    // --- screen flow -------------------------------------------------------

    /// Switch screens. Any screen other than the level drops the live attempt.
    fn show(&mut self, view: View) {
        if view != View::Game {
            self.session.abort();
        }
        self.view = view;
    }

    pub fn press_start(&mut self) -> View {
        self.show(if self.store.current_user().is_some() { View::Menu } else { View::Login });
        self.view
    }

    /// Remember `name` (trimmed) and go to track selection. Blank names are ignored.
    pub fn login(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        self.store.set_current_user(name);
        self.store.ensure_user(name);
        self.track = self.store.current_track(name);
        self.show(View::Language);
        info!(user = name, "player logged in");
        true
    }

    pub fn login_back(&mut self) {
        self.show(View::Start);
    }

    /// Back out of track selection; the remembered player is forgotten.
    pub fn language_back(&mut self) {
        self.store.clear_current_user();
        self.show(View::Login);
    }

    pub fn choose_track(&mut self, track: Track) {
        if let Some(user) = self.store.current_user() {
            self.store.set_current_track(&user, track);
        }
        self.track = track;
        self.show(View::Menu);
        debug!(%track, "track selected");
    }

    pub fn logout(&mut self) {
        self.store.clear_current_user();
        self.track = Track::default();
        self.show(View::Login);
    }

    /// Wipe the current track of the current player and return to the menu.
    pub fn reset_progress(&mut self) {
        self.show(View::Menu);
        if let Some(user) = self.store.current_user() {
            self.store.reset(&user, self.track);
            info!(user = user.as_str(), track = %self.track, "progress reset");
        }
    }

    pub fn open_scoreboard(&mut self) {
        self.show(View::Scoreboard);
    }

    pub fn scoreboard_back(&mut self) {
        self.show(View::Menu);
    }

    pub fn exit_to_menu(&mut self) {
        self.show(View::Menu);
    }

    pub fn menu_summary(&self) -> MenuSummary {
        let progress = self.progress();
        let level_count = self.level_count();
        let levels = (1..=level_count)
            .map(|id| {
                let score = progress.level_scores.get(&id).copied();
                let status = if score.is_some() {
                    LevelStatus::Completed
                } else if id == progress.last_level {
                    LevelStatus::Current
                } else if !progress.is_unlocked(id) {
                    LevelStatus::Locked
                } else {
                    LevelStatus::Unlocked
                };
                LevelTile { id, status, score }
            })
            .collect();
        MenuSummary {
            username: self.store.current_user(),
            track: self.track,
            track_label: self.track.label(),
            total_score: progress.total_score,
            completed: progress.completed_count(),
            level_count,
            avg_time_secs: progress.average_time_secs(),
            last_level: progress.last_level,
            levels,
        }
    }

    pub fn scoreboard(&self, filter: ScoreFilter) -> Vec<ScoreboardEntry> {
        let user = self.store.current_user();
        let current = user.as_deref().map(|u| (u, self.track));
        scoreboard::build(&self.store.all_users(), filter, current)
    }

    // --- level session -----------------------------------------------------

    /// Start level `n` (clamped to the playable range) and switch to the game view.
    pub fn start_level(&mut self, n: u32, now_ms: f64) -> LevelView {
        let level_count = self.level_count();
        let id = n.clamp(1, level_count);
        let generation = self.session.start(id, self.config.timer_secs(), now_ms);
        self.view = View::Game;
        let level = self.current_level();
        let remaining = self.session.remaining();
        LevelView {
            id,
            level_count,
            title: level.map_or("", |l| l.title),
            description: level.map_or("", |l| l.description),
            buggy_code: level.map_or("", |l| l.buggy_code),
            hints_total: level.map_or(0, |l| l.hints.len()),
            remaining,
            urgency: TimerUrgency::for_remaining(&self.config, remaining),
            total_score: self.progress().total_score,
            generation,
        }
    }

    /// Resume at the last level played.
    pub fn continue_level(&mut self, now_ms: f64) -> LevelView {
        let last = self.progress().last_level;
        self.start_level(last, now_ms)
    }

    pub fn restart(&mut self, now_ms: f64) -> LevelView {
        let id = self.session.level_id().max(1);
        self.start_level(id, now_ms)
    }

    /// Start the following level, if there is one.
    pub fn next_level(&mut self, now_ms: f64) -> Option<LevelView> {
        let id = self.session.level_id();
        if id >= self.level_count() {
            return None;
        }
        Some(self.start_level(id + 1, now_ms))
    }

    pub fn tick(&mut self, generation: u64) -> TickOutcome {
        self.session.tick(generation)
    }

    pub fn reveal_hint(&mut self) -> Option<Hint> {
        let level = self.current_level()?;
        self.session.reveal_hint(level.hints)
    }

    /// Validate a fix. A correct one is scored and written to the progress store.
    pub fn submit(&mut self, code: &str, now_ms: f64) -> Feedback {
        let Some(level) = self.current_level() else {
            return Feedback::Rejected;
        };
        match self.session.submit(code, level.correct_code, &self.config, now_ms) {
            SubmitOutcome::Empty => Feedback::Empty,
            SubmitOutcome::Incorrect => Feedback::Incorrect,
            SubmitOutcome::Rejected => Feedback::Rejected,
            SubmitOutcome::Correct(score) => Feedback::Solved(self.record(level.id, score)),
        }
    }

    fn record(&mut self, level_id: u32, score: Score) -> Completion {
        let level_count = self.level_count();
        let mut progress = self.progress();
        progress.record_completion(level_id, score.total, score.elapsed_secs, level_count);
        if let Some(user) = self.store.current_user() {
            self.store.save(&user, self.track, &progress);
        }
        info!(level_id, score = score.total, total = progress.total_score, track = %self.track, "level solved");
        Completion {
            level_id,
            score,
            total_score: progress.total_score,
            has_next: level_id < level_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn logged_in(track: Track) -> GameContext<MemoryStorage> {
        let mut g = GameContext::new(MemoryStorage::new(), GameConfig::default());
        assert!(g.login("alice"));
        g.choose_track(track);
        g
    }

    #[test]
    fn fresh_start_asks_for_a_name() {
        let mut g = GameContext::new(MemoryStorage::new(), GameConfig::default());
        assert_eq!(g.view(), View::Start);
        assert_eq!(g.press_start(), View::Login);
        assert!(!g.login("   "));
        assert_eq!(g.view(), View::Login);
        assert!(g.login("  alice "));
        assert_eq!(g.view(), View::Language);
        assert_eq!(g.current_user().as_deref(), Some("alice"));
    }

    #[test]
    fn start_level_clamps_and_enters_game() {
        let mut g = logged_in(Track::Python);
        let v = g.start_level(99, 0.0);
        assert_eq!(v.id, 15);
        assert_eq!(v.remaining, 60);
        assert_eq!(v.title, "Mutable Default Argument");
        assert_eq!(g.view(), View::Game);
        assert_eq!(g.start_level(0, 0.0).id, 1);
    }

    #[test]
    fn solving_updates_progress_and_unlocks_next() {
        let mut g = logged_in(Track::JavaScript);
        let v = g.start_level(1, 0.0);
        for _ in 0..10 {
            g.tick(v.generation);
        }
        let fb = g.submit("const x = 5;\nconst y = 10;\n\n", 10_400.0);
        let Feedback::Solved(done) = fb else {
            panic!("expected a solve, got {fb:?}");
        };
        assert_eq!(done.score.total, 200);
        assert!(done.has_next);
        let p = g.progress();
        assert_eq!(p.level_scores.get(&1), Some(&200));
        assert_eq!(p.level_times.get(&1), Some(&10));
        assert_eq!(p.highest_unlocked, 2);
        assert_eq!(g.submit("const x = 5;\nconst y = 10;", 0.0), Feedback::Rejected);
    }

    #[test]
    fn last_level_has_no_next() {
        let mut g = logged_in(Track::Python);
        g.start_level(15, 0.0);
        let fb = g.submit(levels::level(Track::Python, 15).unwrap().correct_code, 1_000.0);
        let Feedback::Solved(done) = fb else { panic!("{fb:?}") };
        assert!(!done.has_next);
        assert_eq!(g.progress().highest_unlocked, 15);
        assert!(g.next_level(0.0).is_none());
    }

    #[test]
    fn exit_to_menu_invalidates_pending_ticks() {
        let mut g = logged_in(Track::JavaScript);
        let v = g.start_level(2, 0.0);
        g.exit_to_menu();
        assert_eq!(g.view(), View::Menu);
        assert_eq!(g.tick(v.generation), TickOutcome::Stale);
        assert!(g.reveal_hint().is_none());
    }

    #[test]
    fn switching_track_mid_level_drops_the_attempt() {
        let mut g = logged_in(Track::JavaScript);
        let v = g.start_level(1, 0.0);
        g.choose_track(Track::Python);
        assert_eq!(g.view(), View::Menu);
        assert!(!g.session().is_running());
        assert_eq!(g.tick(v.generation), TickOutcome::Stale);
        let py1 = levels::level(Track::Python, 1).unwrap().correct_code;
        assert_eq!(g.submit(py1, 1_000.0), Feedback::Rejected);
        assert!(g.progress().level_scores.is_empty());
    }

    #[test]
    fn every_screen_but_the_level_stops_the_clock() {
        let leave: [fn(&mut GameContext<MemoryStorage>); 4] = [
            |g| g.open_scoreboard(),
            |g| g.reset_progress(),
            |g| {
                g.press_start();
            },
            |g| {
                g.login("bob");
            },
        ];
        for step in leave {
            let mut g = logged_in(Track::JavaScript);
            let v = g.start_level(3, 0.0);
            step(&mut g);
            assert_ne!(g.view(), View::Game);
            assert!(!g.session().is_running());
            assert_eq!(g.tick(v.generation), TickOutcome::Stale);
        }
    }

    #[test]
    fn zero_second_timer_still_gives_one_tick() {
        let config = GameConfig { timer_seconds: 0, ..GameConfig::default() };
        let mut g = GameContext::new(MemoryStorage::new(), config);
        let v = g.start_level(1, 0.0);
        assert_eq!(v.remaining, 1);
        assert!(g.session().is_running());
        assert_eq!(g.tick(v.generation), TickOutcome::TimedOut);
    }

    #[test]
    fn restart_gives_a_new_generation() {
        let mut g = logged_in(Track::JavaScript);
        let first = g.start_level(4, 0.0);
        g.reveal_hint();
        let second = g.restart(0.0);
        assert_eq!(second.id, 4);
        assert_ne!(first.generation, second.generation);
        assert_eq!(g.tick(first.generation), TickOutcome::Stale);
        assert_eq!(g.reveal_hint().map(|h| h.number), Some(1));
    }

    #[test]
    fn menu_summary_marks_level_states() {
        let mut g = logged_in(Track::JavaScript);
        g.start_level(1, 0.0);
        g.submit("const x = 5;\nconst y = 10;", 20_000.0);
        let m = g.menu_summary();
        assert_eq!(m.levels[0].status, LevelStatus::Completed);
        assert_eq!(m.levels[0].score, Some(220));
        assert_eq!(m.levels[1].status, LevelStatus::Unlocked);
        assert_eq!(m.levels[2].status, LevelStatus::Locked);
        assert_eq!(m.completed_label(), "1/15");
        assert_eq!(m.avg_time_label(), "20s");
        assert_eq!(m.track_label, "JavaScript");
    }

    #[test]
    fn track_choice_survives_a_reload() {
        let storage = std::rc::Rc::new(MemoryStorage::new());
        let mut g = GameContext::new(storage.clone(), GameConfig::default());
        g.login("alice");
        g.choose_track(Track::Python);
        drop(g);

        let g = GameContext::new(storage, GameConfig::default());
        assert_eq!(g.view(), View::Menu);
        assert_eq!(g.track(), Track::Python);
    }

    #[test]
    fn logout_resets_track_and_forgets_user() {
        let mut g = logged_in(Track::Python);
        g.start_level(1, 0.0);
        g.logout();
        assert_eq!(g.view(), View::Login);
        assert_eq!(g.track(), Track::JavaScript);
        assert!(g.current_user().is_none());
        assert!(!g.session().is_running());
    }
}
