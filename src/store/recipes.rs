//! Recipe collections: the liked-recipe set and fully authored recipes.

use super::{local_id, CookSyncStore, StarReason};
use crate::events::EventType;
use crate::storage::keys;
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Saved reference into the liked-recipes set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikedRecipe {
    pub id: String,
    pub title: String,
    pub image: String,
    pub author: String,
    /// Dotted calendar day (`YYYY.MM.DD`), as the original client wrote it.
    pub saved_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub amount: String,
}

/// One authored cooking step.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthoredStep {
    pub id: u32,
    pub action: String,
    pub description: String,
    /// Seconds.
    pub duration: u32,
    #[serde(default)]
    pub image_preview: Option<String>,
    #[serde(default)]
    pub tips: String,
}

/// A recipe authored by the current user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecipe {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub servings: u32,
    pub thumbnail: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub steps: Vec<AuthoredStep>,
    pub created_at: DateTime<Utc>,
}

/// Everything but the locally assigned id and creation stamp.
#[derive(Debug, Clone)]
pub struct RecipeDraft {
    pub title: String,
    pub description: String,
    pub category: String,
    pub servings: u32,
    pub thumbnail: String,
    pub tags: Vec<String>,
    pub ingredients: Vec<Ingredient>,
    pub steps: Vec<AuthoredStep>,
}

/// Partial recipe edit; unset fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct RecipeUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub servings: Option<u32>,
    pub thumbnail: Option<String>,
    pub tags: Option<Vec<String>>,
    pub ingredients: Option<Vec<Ingredient>>,
    pub steps: Option<Vec<AuthoredStep>>,
}

impl CookSyncStore {
    /// Adds or removes the recipe from the liked set, keyed by id.
    pub fn toggle_like_recipe(&mut self, recipe: &LikedRecipe) -> Result<()> {
        let already_liked = self.liked_recipes.iter().any(|r| r.id == recipe.id);
        if already_liked {
            self.liked_recipes.retain(|r| r.id != recipe.id);
        } else {
            let mut saved = recipe.clone();
            saved.saved_at = Utc::now().format("%Y.%m.%d").to_string();
            self.liked_recipes.push(saved);
        }
        self.storage
            .save_json(keys::LIKED_RECIPES, &self.liked_recipes)?;
        self.record_event(
            EventType::RecipeLikeToggled,
            json!({ "recipe_id": recipe.id, "liked": !already_liked }),
        );
        Ok(())
    }

    pub fn is_recipe_liked(&self, recipe_id: &str) -> bool {
        self.liked_recipes.iter().any(|r| r.id == recipe_id)
    }

    /// Stores a new authored recipe (newest first) and credits one star,
    /// subject to the daily cap. Returns the assigned id.
    pub fn add_user_recipe(&mut self, draft: RecipeDraft) -> Result<String> {
        let id = local_id("user-recipe");
        let recipe = UserRecipe {
            id: id.clone(),
            title: draft.title,
            description: draft.description,
            category: draft.category,
            servings: draft.servings,
            thumbnail: draft.thumbnail,
            tags: draft.tags,
            ingredients: draft.ingredients,
            steps: draft.steps,
            created_at: Utc::now(),
        };
        self.user_recipes.insert(0, recipe);
        self.storage
            .save_json(keys::USER_RECIPES, &self.user_recipes)?;
        self.record_event(EventType::RecipeCreated, json!({ "recipe_id": id }));
        // The reward may be silently capped; authoring succeeds either way.
        self.earn_stars(1, StarReason::Recipe)?;
        Ok(id)
    }

    /// Shallow-merges the edit into the matching recipe; no-op when absent.
    pub fn update_user_recipe(&mut self, id: &str, update: &RecipeUpdate) -> Result<()> {
        let Some(recipe) = self.user_recipes.iter_mut().find(|r| r.id == id) else {
            return Ok(());
        };
        if let Some(title) = &update.title {
            recipe.title = title.clone();
        }
        if let Some(description) = &update.description {
            recipe.description = description.clone();
        }
        if let Some(category) = &update.category {
            recipe.category = category.clone();
        }
        if let Some(servings) = update.servings {
            recipe.servings = servings;
        }
        if let Some(thumbnail) = &update.thumbnail {
            recipe.thumbnail = thumbnail.clone();
        }
        if let Some(tags) = &update.tags {
            recipe.tags = tags.clone();
        }
        if let Some(ingredients) = &update.ingredients {
            recipe.ingredients = ingredients.clone();
        }
        if let Some(steps) = &update.steps {
            recipe.steps = steps.clone();
        }
        self.storage
            .save_json(keys::USER_RECIPES, &self.user_recipes)?;
        self.record_event(EventType::RecipeUpdated, json!({ "recipe_id": id }));
        Ok(())
    }

    pub fn delete_user_recipe(&mut self, id: &str) -> Result<()> {
        let before = self.user_recipes.len();
        self.user_recipes.retain(|r| r.id != id);
        if self.user_recipes.len() == before {
            return Ok(());
        }
        self.storage
            .save_json(keys::USER_RECIPES, &self.user_recipes)?;
        self.record_event(EventType::RecipeDeleted, json!({ "recipe_id": id }));
        Ok(())
    }
}
