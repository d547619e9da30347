//! Progress persistence over a string key-value store.
//!
//! Layout is a single nested blob, as the shipped web app wrote it:
//!
//! ```text
//! bfs_username  -> "alice"
//! bfs_all_users -> { "alice": { "currentLanguage": "python",
//!                               "javascript": { ...TrackProgress },
//!                               "python":     { ...TrackProgress } } }
//! ```
//!
//! Reads never fail: a missing key, unparsable JSON or a malformed record is
//! treated as "no data" and replaced by defaults. Writes that the backend
//! rejects are logged and dropped.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::config::StorageKeys;
use crate::error::{GameError, Result};
use crate::levels::Track;
use crate::progress::TrackProgress;

/// Minimal string key-value backend (the shape of `window.localStorage`).
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;
    /// Returns `false` if the backend refused the write.
    fn set_item(&self, key: &str, value: &str) -> bool;
    fn remove_item(&self, key: &str);
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Rc<T> {
    fn get_item(&self, key: &str) -> Option<String> {
        (**self).get_item(key)
    }
    fn set_item(&self, key: &str, value: &str) -> bool {
        (**self).set_item(key, value)
    }
    fn remove_item(&self, key: &str) {
        (**self).remove_item(key)
    }
}

/// In-memory backend for native builds and tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }
    fn set_item(&self, key: &str, value: &str) -> bool {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        true
    }
    fn remove_item(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

/// `window.localStorage`.
pub struct BrowserStorage {
    inner: web_sys::Storage,
}

impl BrowserStorage {
    pub fn local() -> Result<Self> {
        let win = web_sys::window().ok_or(GameError::MissingGlobal("window"))?;
        let inner = win
            .local_storage()?
            .ok_or(GameError::MissingGlobal("localStorage"))?;
        Ok(Self { inner })
    }
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.inner.get_item(key).ok().flatten()
    }
    fn set_item(&self, key: &str, value: &str) -> bool {
        match self.inner.set_item(key, value) {
            Ok(()) => true,
            Err(err) => {
                warn!(key, error = ?err, "localStorage write rejected");
                false
            }
        }
    }
    fn remove_item(&self, key: &str) {
        if let Err(err) = self.inner.remove_item(key) {
            warn!(key, error = ?err, "localStorage remove rejected");
        }
    }
}

/// Everything stored for one user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserRecord {
    pub current_track: Track,
    pub tracks: BTreeMap<Track, TrackProgress>,
}

impl UserRecord {
    /// Fresh record with a default entry for every track.
    pub fn new_player() -> Self {
        Self {
            current_track: Track::default(),
            tracks: Track::ALL.iter().map(|t| (*t, TrackProgress::default())).collect(),
        }
    }

    pub fn progress(&self, track: Track) -> TrackProgress {
        self.tracks.get(&track).cloned().unwrap_or_default()
    }

    fn from_value(user: &str, value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            warn!(user, "discarding malformed user record");
            return Self::default();
        };
        let current_track = obj
            .get("currentLanguage")
            .and_then(Value::as_str)
            .and_then(|s| s.parse().ok())
            .unwrap_or_default();
        let tracks = Track::ALL
            .iter()
            .filter_map(|t| obj.get(t.id()).map(|v| (*t, parse_progress(user, *t, v))))
            .collect();
        Self { current_track, tracks }
    }

    fn to_value(&self) -> Value {
        let mut obj = Map::new();
        obj.insert("currentLanguage".into(), Value::from(self.current_track.id()));
        for (track, progress) in &self.tracks {
            // Plain struct of integers and integer-keyed maps; serialization cannot fail.
            if let Ok(v) = serde_json::to_value(progress) {
                obj.insert(track.id().into(), v);
            }
        }
        Value::Object(obj)
    }
}

fn parse_progress(user: &str, track: Track, value: &Value) -> TrackProgress {
    match serde_json::from_value::<TrackProgress>(value.clone()) {
        Ok(p) => p.repaired(),
        Err(err) => {
            warn!(user, %track, error = %err, "discarding malformed track progress");
            TrackProgress::default()
        }
    }
}

/// Progress store keyed by user name and track.
pub struct ProgressStore<S> {
    storage: S,
    keys: StorageKeys,
}

impl<S: KeyValueStore> ProgressStore<S> {
    pub fn new(storage: S, keys: StorageKeys) -> Self {
        Self { storage, keys }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Remembered player name, if any.
    pub fn current_user(&self) -> Option<String> {
        self.storage
            .get_item(&self.keys.current_user)
            .filter(|name| !name.is_empty())
    }

    pub fn set_current_user(&self, name: &str) {
        self.storage.set_item(&self.keys.current_user, name);
    }

    pub fn clear_current_user(&self) {
        self.storage.remove_item(&self.keys.current_user);
    }

    /// Every stored user record, keyed by name.
    pub fn all_users(&self) -> BTreeMap<String, UserRecord> {
        let Some(raw) = self.storage.get_item(&self.keys.all_users) else {
            return BTreeMap::new();
        };
        let parsed: Value = match serde_json::from_str(&raw) {
            Ok(v) => v,
            Err(err) => {
                warn!(error = %err, "stored progress blob is not valid JSON, ignoring it");
                return BTreeMap::new();
            }
        };
        let Some(users) = parsed.as_object() else {
            warn!("stored progress blob is not an object, ignoring it");
            return BTreeMap::new();
        };
        users
            .iter()
            .map(|(name, v)| (name.clone(), UserRecord::from_value(name, v)))
            .collect()
    }

    fn write_all(&self, users: &BTreeMap<String, UserRecord>) {
        let blob: Map<String, Value> = users
            .iter()
            .map(|(name, rec)| (name.clone(), rec.to_value()))
            .collect();
        let raw = Value::Object(blob).to_string();
        if self.storage.set_item(&self.keys.all_users, &raw) {
            debug!(bytes = raw.len(), users = users.len(), "progress saved");
        }
    }

    fn update_user(&self, user: &str, f: impl FnOnce(&mut UserRecord)) {
        let mut users = self.all_users();
        let rec = users.entry(user.to_string()).or_insert_with(UserRecord::new_player);
        f(rec);
        self.write_all(&users);
    }

    /// Stored record of `user`, or a fresh one (not persisted).
    pub fn user(&self, user: &str) -> UserRecord {
        self.all_users().remove(user).unwrap_or_else(UserRecord::new_player)
    }

    /// Create the record for a first-time player.
    pub fn ensure_user(&self, user: &str) {
        if !self.all_users().contains_key(user) {
            debug!(user, "creating player record");
            self.update_user(user, |_| {});
        }
    }

    pub fn current_track(&self, user: &str) -> Track {
        self.user(user).current_track
    }

    pub fn set_current_track(&self, user: &str, track: Track) {
        self.update_user(user, |rec| rec.current_track = track);
    }

    pub fn load(&self, user: &str, track: Track) -> TrackProgress {
        self.user(user).progress(track)
    }

    pub fn save(&self, user: &str, track: Track, progress: &TrackProgress) {
        self.update_user(user, |rec| {
            rec.tracks.insert(track, progress.clone());
        });
    }

    /// Put one track back to defaults; other tracks are left as they are.
    pub fn reset(&self, user: &str, track: Track) {
        self.update_user(user, |rec| {
            rec.tracks.insert(track, TrackProgress::default());
        });
    }
}
