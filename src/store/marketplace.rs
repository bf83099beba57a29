//! Marketplace ("N빵") listings and the liked-post set.
//!
//! The liked-post document has a legacy shape: an array of post ids instead
//! of full post objects. Loading branches on shape explicitly — ids first,
//! then objects, else empty — and resolves legacy ids against the known
//! listings.

use super::{local_id, CookSyncStore};
use crate::events::EventType;
use crate::storage::keys;
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostStatus {
    Available,
    Completed,
}

/// A marketplace listing authored by the current user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPost {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: String,
    pub image: String,
    pub place: String,
    pub likes: u32,
    pub created_at: DateTime<Utc>,
    pub status: PostStatus,
}

/// Everything the author provides; id, stamp, likes, and status are assigned.
#[derive(Debug, Clone)]
pub struct PostDraft {
    pub title: String,
    pub description: String,
    pub price: String,
    pub image: String,
    pub place: String,
}

/// Partial listing edit; status toggles independently of deletion.
#[derive(Debug, Clone, Default)]
pub struct PostUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub image: Option<String>,
    pub place: Option<String>,
    pub likes: Option<u32>,
    pub status: Option<PostStatus>,
}

/// A listing saved into the liked-posts set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikedPost {
    #[serde(flatten)]
    pub post: UserPost,
    pub saved_at: DateTime<Utc>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredLikedPost {
    #[serde(flatten)]
    post: UserPost,
    #[serde(default)]
    saved_at: Option<DateTime<Utc>>,
}

/// Decodes the persisted liked-posts document, tolerating the legacy
/// id-array format. Unknown legacy ids are dropped; missing save stamps
/// default to now.
pub(crate) fn normalize_liked_posts(
    raw: Option<serde_json::Value>,
    posts: &[UserPost],
) -> Vec<LikedPost> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    if let Ok(ids) = serde_json::from_value::<Vec<String>>(raw.clone()) {
        let now = Utc::now();
        return ids
            .iter()
            .filter_map(|id| posts.iter().find(|p| &p.id == id))
            .map(|post| LikedPost {
                post: post.clone(),
                saved_at: now,
            })
            .collect();
    }
    if let Ok(entries) = serde_json::from_value::<Vec<StoredLikedPost>>(raw) {
        let now = Utc::now();
        return entries
            .into_iter()
            .map(|entry| LikedPost {
                post: entry.post,
                saved_at: entry.saved_at.unwrap_or(now),
            })
            .collect();
    }
    log::warn!("liked posts document has an unrecognized shape, starting empty");
    Vec::new()
}

impl CookSyncStore {
    /// Stores a new listing (newest first), available with zero likes.
    pub fn add_user_post(&mut self, draft: PostDraft) -> Result<String> {
        let id = local_id("user-post");
        let post = UserPost {
            id: id.clone(),
            title: draft.title,
            description: draft.description,
            price: draft.price,
            image: draft.image,
            place: draft.place,
            likes: 0,
            created_at: Utc::now(),
            status: PostStatus::Available,
        };
        self.user_posts.insert(0, post);
        self.storage.save_json(keys::USER_POSTS, &self.user_posts)?;
        self.record_event(EventType::PostCreated, json!({ "post_id": id }));
        Ok(id)
    }

    /// Shallow-merges the edit into the matching listing; no-op when absent.
    pub fn update_user_post(&mut self, id: &str, update: &PostUpdate) -> Result<()> {
        let Some(post) = self.user_posts.iter_mut().find(|p| p.id == id) else {
            return Ok(());
        };
        if let Some(title) = &update.title {
            post.title = title.clone();
        }
        if let Some(description) = &update.description {
            post.description = description.clone();
        }
        if let Some(price) = &update.price {
            post.price = price.clone();
        }
        if let Some(image) = &update.image {
            post.image = image.clone();
        }
        if let Some(place) = &update.place {
            post.place = place.clone();
        }
        if let Some(likes) = update.likes {
            post.likes = likes;
        }
        if let Some(status) = update.status {
            post.status = status;
        }
        self.storage.save_json(keys::USER_POSTS, &self.user_posts)?;
        self.record_event(EventType::PostUpdated, json!({ "post_id": id }));
        Ok(())
    }

    pub fn delete_user_post(&mut self, id: &str) -> Result<()> {
        let before = self.user_posts.len();
        self.user_posts.retain(|p| p.id != id);
        if self.user_posts.len() == before {
            return Ok(());
        }
        self.storage.save_json(keys::USER_POSTS, &self.user_posts)?;
        self.record_event(EventType::PostDeleted, json!({ "post_id": id }));
        Ok(())
    }

    /// Adds or removes the listing from the liked set, keyed by id.
    pub fn toggle_like_post(&mut self, post: &UserPost) -> Result<()> {
        let already_liked = self.liked_posts.iter().any(|p| p.post.id == post.id);
        if already_liked {
            self.liked_posts.retain(|p| p.post.id != post.id);
        } else {
            self.liked_posts.push(LikedPost {
                post: post.clone(),
                saved_at: Utc::now(),
            });
        }
        self.storage.save_json(keys::LIKED_POSTS, &self.liked_posts)?;
        self.record_event(
            EventType::PostLikeToggled,
            json!({ "post_id": post.id, "liked": !already_liked }),
        );
        Ok(())
    }

    pub fn is_post_liked(&self, post_id: &str) -> bool {
        self.liked_posts.iter().any(|p| p.post.id == post_id)
    }
}
