//! Crate error type.
//!
//! Only construction and browser-binding paths return these. The progress
//! store and the session state machine never fail outward.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("invalid game config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("browser global `{0}` is unavailable")]
    MissingGlobal(&'static str),

    #[error("unknown track `{0}`")]
    UnknownTrack(String),

    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for GameError {
    fn from(value: JsValue) -> Self {
        GameError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<GameError> for JsValue {
    fn from(err: GameError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
