//! The star ledger: a capped daily/lifetime reward counter.

use super::{today_string, CookSyncStore};
use crate::events::EventType;
use crate::storage::keys;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Why stars were granted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StarReason {
    Cook,
    Recipe,
}

impl CookSyncStore {
    /// Grants up to `amount` stars, bounded by the daily cap and the
    /// lifetime ceiling. Returns `Ok(false)` when logged out or when the
    /// day's budget is exhausted; `Ok(true)` when at least one star was
    /// granted.
    ///
    /// The day boundary is applied lazily: the persisted `today_stars`
    /// field is only rewritten when a grant actually happens.
    pub fn earn_stars(&mut self, amount: u32, reason: StarReason) -> Result<bool> {
        let daily_cap = self.config.gamification.daily_star_cap;
        let lifetime_cap = self.config.gamification.lifetime_star_cap;
        let Some(user) = self.user.as_mut() else {
            return Ok(false);
        };
        let today = today_string();
        let effective = if user.last_star_date == today {
            user.today_stars
        } else {
            0
        };
        if effective >= daily_cap {
            return Ok(false);
        }
        let granted = amount.min(daily_cap - effective);
        if granted == 0 {
            return Ok(false);
        }
        user.stars = (user.stars + granted).min(lifetime_cap);
        user.today_stars = effective + granted;
        user.last_star_date = today;
        let snapshot = user.clone();
        self.storage.save_json(keys::USER, &snapshot)?;
        self.record_event(
            EventType::StarsEarned,
            json!({ "amount": granted, "reason": reason }),
        );
        Ok(true)
    }

    /// Stars grantable today, after the lazy day-boundary reset.
    pub fn effective_today_stars(&self) -> u32 {
        match &self.user {
            Some(user) if user.last_star_date == today_string() => user.today_stars,
            _ => 0,
        }
    }

    /// Derived display level: one level per ten stars.
    pub fn star_level(&self) -> u32 {
        self.user.as_ref().map(|u| u.stars / 10).unwrap_or(0)
    }
}
