//! Persistent key-value bridge.
//!
//! The original client kept every collection under a fixed browser-storage
//! key; here each key maps to one JSON document at `<workspace>/store/<key>.json`.
//! Loads are defensive: a missing or malformed document yields the caller's
//! fallback, never an error. Writes replace the whole document synchronously.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Fixed storage keys shared with the original client.
pub mod keys {
    pub const USER: &str = "cooksync_user";
    pub const LIKED_RECIPES: &str = "cooksync_liked_recipes";
    pub const CONVERSATIONS: &str = "cooksync_conversations";
    pub const MESSAGES: &str = "cooksync_messages";
    pub const USER_RECIPES: &str = "cooksync_user_recipes";
    pub const USER_POSTS: &str = "cooksync_user_posts";
    pub const LIKED_POSTS: &str = "cooksync_liked_posts";
    pub const COMPLETED_RECIPES: &str = "cooksync_completed_recipes";
    pub const REVIEWED_RECIPES: &str = "cooksync_reviewed_recipes";
}

/// Appends `:userId` to a base key when a user is present.
pub fn namespaced_key(base: &str, user_id: Option<&str>) -> String {
    match user_id {
        Some(id) => format!("{base}:{id}"),
        None => base.to_string(),
    }
}

/// Directory-backed key-value store of JSON documents.
#[derive(Debug, Clone)]
pub struct Storage {
    store_dir: PathBuf,
}

impl Storage {
    pub fn at(root: &Path) -> Self {
        Self {
            store_dir: root.join("store"),
        }
    }

    pub fn ensure(&self) -> Result<()> {
        fs::create_dir_all(&self.store_dir)
            .with_context(|| format!("Failed to create store directory {:?}", self.store_dir))
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.store_dir.join(format!("{key}.json"))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.key_path(key).exists()
    }

    /// Loads the document under `key`, returning `fallback` on any failure.
    pub fn load_json<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        let path = self.key_path(key);
        let data = match fs::read(&path) {
            Ok(data) => data,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return fallback,
            Err(err) => {
                log::warn!("unreadable document {key}: {err}");
                return fallback;
            }
        };
        match serde_json::from_slice(&data) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("malformed document {key}: {err}");
                fallback
            }
        }
    }

    /// Loads the raw JSON value under `key` for shape-dependent decoding.
    pub fn load_value(&self, key: &str) -> Option<serde_json::Value> {
        let data = fs::read(self.key_path(key)).ok()?;
        match serde_json::from_slice(&data) {
            Ok(value) => Some(value),
            Err(err) => {
                log::warn!("malformed document {key}: {err}");
                None
            }
        }
    }

    /// Replaces the whole document under `key`.
    pub fn save_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let path = self.key_path(key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(value)
            .with_context(|| format!("Failed serializing document {key}"))?;
        fs::write(&path, data).with_context(|| format!("Failed to persist document {key}"))
    }

    /// Deletes the document under `key`; an absent document is fine.
    pub fn remove(&self, key: &str) -> Result<()> {
        let path = self.key_path(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err).with_context(|| format!("Failed to remove document {key}")),
        }
    }
}
