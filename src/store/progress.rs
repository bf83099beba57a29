//! Per-user completion and review tracking.
//!
//! Both sets are namespaced by account (`<key>:<userId>`) with a fallback to
//! the pre-namespacing key so data recorded before accounts were scoped is
//! still visible. Inserts short-circuit when the id is already present, so a
//! repeated mark never rewrites the document.

use super::{CookSyncStore, StarReason};
use crate::events::EventType;
use crate::storage::{keys, namespaced_key};
use anyhow::Result;
use serde_json::json;
use std::collections::BTreeSet;

impl CookSyncStore {
    /// Records a finished cook for the current user; no-op when logged out
    /// or already recorded.
    pub fn mark_recipe_as_completed(&mut self, recipe_id: &str) -> Result<()> {
        let Some(user_id) = self.user.as_ref().map(|u| u.id.clone()) else {
            return Ok(());
        };
        if self.completed_recipes.contains(recipe_id) {
            return Ok(());
        }
        self.completed_recipes.insert(recipe_id.to_string());
        let key = namespaced_key(keys::COMPLETED_RECIPES, Some(&user_id));
        self.storage.save_json(&key, &self.completed_recipes)?;
        self.record_event(EventType::RecipeCompleted, json!({ "recipe_id": recipe_id }));
        Ok(())
    }

    /// Records a submitted review. A recipe enters the set at most once; a
    /// second mark is a silent no-op with no write.
    pub fn mark_recipe_as_reviewed(&mut self, recipe_id: &str) -> Result<()> {
        let Some(user_id) = self.user.as_ref().map(|u| u.id.clone()) else {
            return Ok(());
        };
        if self.reviewed_recipes.contains(recipe_id) {
            return Ok(());
        }
        self.reviewed_recipes.insert(recipe_id.to_string());
        let key = namespaced_key(keys::REVIEWED_RECIPES, Some(&user_id));
        self.storage.save_json(&key, &self.reviewed_recipes)?;
        self.record_event(EventType::RecipeReviewed, json!({ "recipe_id": recipe_id }));
        Ok(())
    }

    pub fn has_user_reviewed_recipe(&self, recipe_id: &str) -> bool {
        self.reviewed_recipes.contains(recipe_id)
    }

    pub fn is_recipe_completed(&self, recipe_id: &str) -> bool {
        self.completed_recipes.contains(recipe_id)
    }

    /// Finishing a guided cook: record completion, then credit one star with
    /// the cook reason. Returns whether the star was actually granted.
    pub fn complete_cooking(&mut self, recipe_id: &str) -> Result<bool> {
        self.mark_recipe_as_completed(recipe_id)?;
        self.earn_stars(1, StarReason::Cook)
    }

    /// Re-resolves both sets for the current identity (or the legacy
    /// un-namespaced documents when logged out).
    pub(crate) fn reload_user_scoped_sets(&mut self) {
        let user_id = self.user.as_ref().map(|u| u.id.clone());
        self.completed_recipes = self.load_user_set(keys::COMPLETED_RECIPES, user_id.as_deref());
        self.reviewed_recipes = self.load_user_set(keys::REVIEWED_RECIPES, user_id.as_deref());
    }

    fn load_user_set(&self, base: &str, user_id: Option<&str>) -> BTreeSet<String> {
        let legacy: Vec<String> = self.storage.load_json(base, Vec::new());
        let ids = match user_id {
            Some(_) => self
                .storage
                .load_json(&namespaced_key(base, user_id), legacy),
            None => legacy,
        };
        ids.into_iter().collect()
    }
}
