//! `wasm-bindgen` surface for the host page.
//!
//! The page owns the DOM; it calls into [`BugFixGame`] on user actions and
//! renders the JSON it gets back. Session events (countdown ticks, time-outs,
//! automatic restarts) are pushed to a listener registered with
//! `set_listener`.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use serde::Serialize;
use tracing::{debug, warn};
use wasm_bindgen::prelude::*;

use crate::config::GameConfig;
use crate::error::Result;
use crate::game::{GameContext, LevelView};
use crate::levels::Track;
use crate::logging;
use crate::scoreboard::ScoreFilter;
use crate::session::{SessionState, TickOutcome, TimerUrgency};
use crate::storage::BrowserStorage;
use crate::timer::{ScheduledTask, now_ms};

/// Pushed to the page listener as a JSON string.
#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum SessionEvent {
    Tick { remaining: u32, urgency: TimerUrgency },
    TimedOut { level_id: u32 },
    Restarted { level: LevelView },
}

struct Shared {
    ctx: GameContext<BrowserStorage>,
    countdown: Option<ScheduledTask>,
    auto_restart: Option<ScheduledTask>,
    listener: Option<js_sys::Function>,
}

impl Shared {
    fn cancel_timers(&mut self) {
        self.countdown = None;
        self.auto_restart = None;
    }
}

#[wasm_bindgen]
pub struct BugFixGame {
    shared: Rc<RefCell<Shared>>,
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

fn notify(listener: Option<js_sys::Function>, event: &SessionEvent) {
    let Some(listener) = listener else { return };
    match to_json(event) {
        Ok(json) => {
            if let Err(err) = listener.call1(&JsValue::NULL, &JsValue::from_str(&json)) {
                warn!(error = ?err, "session listener threw");
            }
        }
        Err(err) => warn!(error = %err, "could not encode session event"),
    }
}

fn arm_countdown(shared: &Rc<RefCell<Shared>>, generation: u64) -> Result<()> {
    let weak: Weak<RefCell<Shared>> = Rc::downgrade(shared);
    let period = shared.borrow().ctx.config().tick_interval_ms;
    let task = ScheduledTask::every(period, move || {
        if let Some(shared) = weak.upgrade() {
            on_tick(&shared, generation);
        }
    })?;
    shared.borrow_mut().countdown = Some(task);
    Ok(())
}

fn on_tick(shared: &Rc<RefCell<Shared>>, generation: u64) {
    let (event, listener) = {
        let mut s = shared.borrow_mut();
        let event = match s.ctx.tick(generation) {
            TickOutcome::Stale => return,
            TickOutcome::Running { remaining } => SessionEvent::Tick {
                remaining,
                urgency: TimerUrgency::for_remaining(s.ctx.config(), remaining),
            },
            TickOutcome::TimedOut => {
                s.countdown = None;
                let delay = s.ctx.config().restart_delay_ms();
                let weak = Rc::downgrade(shared);
                match ScheduledTask::after(delay, move || {
                    if let Some(shared) = weak.upgrade() {
                        restart_after_timeout(&shared, generation);
                    }
                }) {
                    Ok(task) => s.auto_restart = Some(task),
                    Err(err) => warn!(error = %err, "could not schedule restart after time-out"),
                }
                SessionEvent::TimedOut { level_id: s.ctx.session().level_id() }
            }
        };
        (event, s.listener.clone())
    };
    notify(listener, &event);
}

fn restart_after_timeout(shared: &Rc<RefCell<Shared>>, generation: u64) {
    let level = {
        let mut s = shared.borrow_mut();
        s.auto_restart = None;
        let session = s.ctx.session();
        // The player may have moved on during the pause.
        if session.generation() != generation || !matches!(session.state(), SessionState::Failed { .. }) {
            return;
        }
        s.ctx.restart(now_ms())
    };
    if let Err(err) = arm_countdown(shared, level.generation) {
        warn!(error = %err, "could not arm countdown after restart");
    }
    debug!(level_id = level.id, "level restarted after time-out");
    let listener = shared.borrow().listener.clone();
    notify(listener, &SessionEvent::Restarted { level });
}

impl BugFixGame {
    fn begin(&self, start: impl FnOnce(&mut GameContext<BrowserStorage>, f64) -> Option<LevelView>) -> Result<Option<String>> {
        let level = {
            let mut s = self.shared.borrow_mut();
            s.cancel_timers();
            start(&mut s.ctx, now_ms())
        };
        let Some(level) = level else { return Ok(None) };
        arm_countdown(&self.shared, level.generation)?;
        to_json(&level).map(Some)
    }

    /// Run a screen change. Once the session is idle its timers go too.
    fn navigate<R>(&self, f: impl FnOnce(&mut GameContext<BrowserStorage>) -> R) -> R {
        let mut s = self.shared.borrow_mut();
        let out = f(&mut s.ctx);
        if s.ctx.session().state() == SessionState::Idle {
            s.cancel_timers();
        }
        out
    }

    fn level_json(&self, start: impl FnOnce(&mut GameContext<BrowserStorage>, f64) -> LevelView) -> std::result::Result<String, JsValue> {
        let json = self.begin(|ctx, now| Some(start(ctx, now)))?;
        Ok(json.unwrap_or_default())
    }
}

#[wasm_bindgen]
impl BugFixGame {
    /// `config_json` is an optional partial [`GameConfig`] override.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> std::result::Result<BugFixGame, JsValue> {
        let config = match config_json.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => GameConfig::from_json(raw)?,
            _ => GameConfig::default(),
        };
        logging::init(&config.log_filter);
        let storage = BrowserStorage::local()?;
        let ctx = GameContext::new(storage, config);
        Ok(BugFixGame {
            shared: Rc::new(RefCell::new(Shared { ctx, countdown: None, auto_restart: None, listener: None })),
        })
    }

    pub fn set_listener(&self, listener: js_sys::Function) {
        self.shared.borrow_mut().listener = Some(listener);
    }

    pub fn view(&self) -> std::result::Result<String, JsValue> {
        Ok(to_json(&self.shared.borrow().ctx.view())?)
    }

    pub fn track(&self) -> String {
        self.shared.borrow().ctx.track().id().to_string()
    }

    pub fn current_user(&self) -> Option<String> {
        self.shared.borrow().ctx.current_user()
    }

    pub fn press_start(&self) -> std::result::Result<String, JsValue> {
        let view = self.navigate(|ctx| ctx.press_start());
        Ok(to_json(&view)?)
    }

    pub fn login(&self, name: &str) -> bool {
        self.navigate(|ctx| ctx.login(name))
    }

    pub fn login_back(&self) {
        self.navigate(|ctx| ctx.login_back());
    }

    pub fn language_back(&self) {
        self.navigate(|ctx| ctx.language_back());
    }

    pub fn choose_track(&self, track: &str) -> std::result::Result<(), JsValue> {
        let track: Track = track.parse()?;
        self.navigate(|ctx| ctx.choose_track(track));
        Ok(())
    }

    pub fn logout(&self) {
        self.navigate(|ctx| ctx.logout());
    }

    pub fn reset_progress(&self) {
        self.navigate(|ctx| ctx.reset_progress());
    }

    pub fn menu(&self) -> std::result::Result<String, JsValue> {
        Ok(to_json(&self.shared.borrow().ctx.menu_summary())?)
    }

    pub fn open_scoreboard(&self) {
        self.navigate(|ctx| ctx.open_scoreboard());
    }

    pub fn scoreboard_back(&self) {
        self.navigate(|ctx| ctx.scoreboard_back());
    }

    /// `filter` is `all`, `javascript` or `python`.
    pub fn scoreboard(&self, filter: &str) -> std::result::Result<String, JsValue> {
        let filter: ScoreFilter = filter.parse()?;
        Ok(to_json(&self.shared.borrow().ctx.scoreboard(filter))?)
    }

    pub fn start_level(&self, n: u32) -> std::result::Result<String, JsValue> {
        self.level_json(|ctx, now| ctx.start_level(n, now))
    }

    pub fn continue_level(&self) -> std::result::Result<String, JsValue> {
        self.level_json(|ctx, now| ctx.continue_level(now))
    }

    pub fn restart(&self) -> std::result::Result<String, JsValue> {
        self.level_json(|ctx, now| ctx.restart(now))
    }

    /// `undefined` on the last level.
    pub fn next_level(&self) -> std::result::Result<Option<String>, JsValue> {
        Ok(self.begin(|ctx, now| ctx.next_level(now))?)
    }

    pub fn exit_to_menu(&self) {
        self.navigate(|ctx| ctx.exit_to_menu());
    }

    pub fn submit(&self, code: &str) -> std::result::Result<String, JsValue> {
        let mut s = self.shared.borrow_mut();
        let feedback = s.ctx.submit(code, now_ms());
        if !s.ctx.session().is_running() {
            s.countdown = None;
        }
        Ok(to_json(&feedback)?)
    }

    /// Next hint as JSON, or `undefined` when none are left.
    pub fn reveal_hint(&self) -> std::result::Result<Option<String>, JsValue> {
        let hint = self.shared.borrow_mut().ctx.reveal_hint();
        Ok(hint.as_ref().map(to_json).transpose()?)
    }
}

