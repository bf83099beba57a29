//! Session and identity: the signed-in user record and its lifecycle.
//!
//! Login and signup are simulated with a fixed artificial delay and always
//! succeed; this is a prototype session, not an auth system. Logout removes
//! only the user record, so content collections stay sticky across sessions.

use super::{today_string, CookSyncStore};
use crate::events::EventType;
use crate::storage::keys;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::thread;
use std::time::Duration;

/// The signed-in user, persisted under `cooksync_user`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub nickname: String,
    pub email: String,
    #[serde(default)]
    pub profile_image: Option<String>,
    /// Display rank, e.g. "미슐랭 0스타".
    pub level: String,
    pub bio: String,
    #[serde(default)]
    pub location: Option<String>,
    pub stars: u32,
    pub today_stars: u32,
    /// Calendar day (`YYYY-MM-DD`) of the most recent star grant.
    pub last_star_date: String,
}

/// Profile payload collected by the signup form.
#[derive(Debug, Clone)]
pub struct SignupData {
    pub name: String,
    pub nickname: String,
    pub email: String,
    pub password: String,
}

/// Partial profile edit; unset fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub nickname: Option<String>,
    pub email: Option<String>,
    pub profile_image: Option<String>,
    pub level: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
}

impl CookSyncStore {
    /// Simulated login: fixed delay, no credential validation, fabricates
    /// the deterministic demo user.
    pub fn login(&mut self, email: &str, _password: &str) -> Result<()> {
        self.simulate_network_delay();
        let user = User {
            id: "1".to_string(),
            name: "김민지".to_string(),
            nickname: "민지".to_string(),
            email: email.to_string(),
            profile_image: None,
            level: "미슐랭 3스타".to_string(),
            bio: "매일 조금씩 요리 실력을 키워가고 있어요!".to_string(),
            location: Some("대전 서구 둔산동".to_string()),
            stars: 15,
            today_stars: 0,
            last_star_date: today_string(),
        };
        self.replace_user(user)?;
        self.record_event(EventType::UserLoggedIn, json!({ "email": email }));
        Ok(())
    }

    /// Simulated signup: fresh user with zeroed star ledger.
    pub fn signup(&mut self, data: &SignupData) -> Result<()> {
        self.simulate_network_delay();
        let user = User {
            id: super::millis_id(),
            name: data.name.clone(),
            nickname: data.nickname.clone(),
            email: data.email.clone(),
            profile_image: None,
            level: "미슐랭 0스타".to_string(),
            bio: "CookSync와 함께 요리를 시작해요!".to_string(),
            location: None,
            stars: 0,
            today_stars: 0,
            last_star_date: today_string(),
        };
        let user_id = user.id.clone();
        self.replace_user(user)?;
        self.record_event(EventType::UserSignedUp, json!({ "user_id": user_id }));
        Ok(())
    }

    /// Clears the session. Liked recipes, posts, and authored content
    /// survive logout.
    pub fn logout(&mut self) -> Result<()> {
        self.user = None;
        self.storage.remove(keys::USER)?;
        self.reload_user_scoped_sets();
        self.record_event(EventType::UserLoggedOut, json!({}));
        Ok(())
    }

    /// Shallow-merges the edit into the current user; no-op when logged out.
    pub fn update_profile(&mut self, update: &ProfileUpdate) -> Result<()> {
        let Some(user) = self.user.as_mut() else {
            return Ok(());
        };
        let mut changed: Vec<&str> = Vec::new();
        if let Some(name) = &update.name {
            user.name = name.clone();
            changed.push("name");
        }
        if let Some(nickname) = &update.nickname {
            user.nickname = nickname.clone();
            changed.push("nickname");
        }
        if let Some(email) = &update.email {
            user.email = email.clone();
            changed.push("email");
        }
        if update.profile_image.is_some() {
            user.profile_image = update.profile_image.clone();
            changed.push("profileImage");
        }
        if let Some(level) = &update.level {
            user.level = level.clone();
            changed.push("level");
        }
        if let Some(bio) = &update.bio {
            user.bio = bio.clone();
            changed.push("bio");
        }
        if update.location.is_some() {
            user.location = update.location.clone();
            changed.push("location");
        }
        let snapshot = user.clone();
        self.storage.save_json(keys::USER, &snapshot)?;
        self.record_event(EventType::ProfileUpdated, json!({ "fields": changed }));
        Ok(())
    }

    fn replace_user(&mut self, user: User) -> Result<()> {
        self.storage.save_json(keys::USER, &user)?;
        self.user = Some(user);
        // The completed/reviewed sets are keyed per account.
        self.reload_user_scoped_sets();
        Ok(())
    }

    fn simulate_network_delay(&self) {
        let ms = self.config.session.simulated_delay_ms;
        if ms > 0 {
            thread::sleep(Duration::from_millis(ms));
        }
    }
}
