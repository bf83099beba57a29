//! The CookSync client state store.
//!
//! One struct owns the signed-in user and every cross-page collection, and is
//! the sole writer to the persistence layer. Pages of the original client
//! consumed this surface through a context hook; here it is an explicit
//! application-state value constructed at startup and passed by reference.

mod gamification;
mod marketplace;
mod messaging;
mod progress;
mod recipes;
mod session;

pub use gamification::StarReason;
pub use marketplace::{LikedPost, PostDraft, PostStatus, PostUpdate, UserPost};
pub use messaging::{Conversation, Message};
pub use recipes::{AuthoredStep, Ingredient, LikedRecipe, RecipeDraft, RecipeUpdate, UserRecipe};
pub use session::{ProfileUpdate, SignupData, User};

use crate::events::{EventLog, EventType};
use crate::storage::{keys, Storage};
use crate::workspace::{self, AppConfig};
use anyhow::Result;
use chrono::Utc;
use std::collections::BTreeSet;
use std::path::Path;
use std::sync::atomic::{AtomicI64, Ordering};

/// Client state store backed by the workspace persistence layer.
pub struct CookSyncStore {
    config: AppConfig,
    storage: Storage,
    events: EventLog,
    user: Option<User>,
    liked_recipes: Vec<LikedRecipe>,
    conversations: Vec<Conversation>,
    messages: Vec<Message>,
    user_recipes: Vec<UserRecipe>,
    user_posts: Vec<UserPost>,
    liked_posts: Vec<LikedPost>,
    completed_recipes: BTreeSet<String>,
    reviewed_recipes: BTreeSet<String>,
}

impl CookSyncStore {
    /// Opens the store at the default workspace location.
    pub fn open() -> Result<Self> {
        let root = workspace::workspace_root()?;
        Self::open_at(&root)
    }

    /// Opens the store at an explicit workspace root, restoring every
    /// persisted collection with defensive parsing.
    pub fn open_at(root: &Path) -> Result<Self> {
        workspace::ensure_workspace_at(root)?;
        let config = workspace::load_or_default(root)?;
        let storage = Storage::at(root);
        storage.ensure()?;
        let events = EventLog::at(root);

        let user: Option<User> = storage.load_json(keys::USER, None);
        let liked_recipes = storage.load_json(keys::LIKED_RECIPES, Vec::new());
        let conversations = storage.load_json(keys::CONVERSATIONS, Vec::new());
        let messages = storage.load_json(keys::MESSAGES, Vec::new());
        let user_recipes = storage.load_json(keys::USER_RECIPES, Vec::new());
        let user_posts: Vec<UserPost> = storage.load_json(keys::USER_POSTS, Vec::new());
        let liked_posts =
            marketplace::normalize_liked_posts(storage.load_value(keys::LIKED_POSTS), &user_posts);

        let mut store = Self {
            config,
            storage,
            events,
            user,
            liked_recipes,
            conversations,
            messages,
            user_recipes,
            user_posts,
            liked_posts,
            completed_recipes: BTreeSet::new(),
            reviewed_recipes: BTreeSet::new(),
        };
        store.reload_user_scoped_sets();
        Ok(store)
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn liked_recipes(&self) -> &[LikedRecipe] {
        &self.liked_recipes
    }

    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    pub fn user_recipes(&self) -> &[UserRecipe] {
        &self.user_recipes
    }

    pub fn user_posts(&self) -> &[UserPost] {
        &self.user_posts
    }

    pub fn liked_posts(&self) -> &[LikedPost] {
        &self.liked_posts
    }

    pub fn completed_recipes(&self) -> &BTreeSet<String> {
        &self.completed_recipes
    }

    pub fn reviewed_recipes(&self) -> &BTreeSet<String> {
        &self.reviewed_recipes
    }

    /// Appends to the journal; failures degrade to a logged warning so no
    /// mutation ever fails on account of its audit trail.
    fn record_event(&self, event_type: EventType, details: serde_json::Value) {
        let event = crate::events::StoreEvent::new(event_type, details);
        if let Err(err) = self.events.append_event(&event) {
            log::warn!("event journal append failed: {err:#}");
        }
    }
}

/// Today as the calendar-day string the star ledger compares against.
pub(crate) fn today_string() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

static LAST_ID_MILLIS: AtomicI64 = AtomicI64::new(0);

/// Epoch-millisecond id source, clamped monotonic so ids issued within the
/// same millisecond stay distinct.
fn next_id_millis() -> i64 {
    let now = Utc::now().timestamp_millis();
    let mut last = LAST_ID_MILLIS.load(Ordering::Relaxed);
    loop {
        let candidate = now.max(last + 1);
        match LAST_ID_MILLIS.compare_exchange(last, candidate, Ordering::Relaxed, Ordering::Relaxed)
        {
            Ok(_) => return candidate,
            Err(actual) => last = actual,
        }
    }
}

pub(crate) fn local_id(prefix: &str) -> String {
    format!("{prefix}-{}", next_id_millis())
}

pub(crate) fn millis_id() -> String {
    next_id_millis().to_string()
}
