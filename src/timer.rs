//! Single-owner browser timers.
//!
//! A [`ScheduledTask`] wraps a `setInterval`/`setTimeout` registration and
//! the Rust closure behind it. Dropping the task clears the registration, so
//! whoever holds the task is the only one who can keep it alive.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::window;

use crate::error::{GameError, Result};

enum Kind {
    Interval,
    Timeout,
}

pub struct ScheduledTask {
    id: i32,
    kind: Kind,
    _callback: Closure<dyn FnMut()>,
}

impl ScheduledTask {
    /// Run `f` every `period_ms` until dropped.
    pub fn every(period_ms: u32, f: impl FnMut() + 'static) -> Result<Self> {
        let win = window().ok_or(GameError::MissingGlobal("window"))?;
        let callback = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
        let id = win.set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            period_ms.min(i32::MAX as u32) as i32,
        )?;
        Ok(Self { id, kind: Kind::Interval, _callback: callback })
    }

    /// Run `f` once after `delay_ms` unless dropped first.
    pub fn after(delay_ms: u32, f: impl FnMut() + 'static) -> Result<Self> {
        let win = window().ok_or(GameError::MissingGlobal("window"))?;
        let callback = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
        let id = win.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            delay_ms.min(i32::MAX as u32) as i32,
        )?;
        Ok(Self { id, kind: Kind::Timeout, _callback: callback })
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        if let Some(win) = window() {
            match self.kind {
                Kind::Interval => win.clear_interval_with_handle(self.id),
                Kind::Timeout => win.clear_timeout_with_handle(self.id),
            }
        }
    }
}

/// Milliseconds from `performance.now()`, 0 outside a browser.
pub fn now_ms() -> f64 {
    window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}
