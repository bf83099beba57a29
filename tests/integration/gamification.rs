use crate::support::IntegrationHarness;
use anyhow::Result;
use cooksync::storage::keys;
use cooksync::store::StarReason;
use cooksync::{CookSyncStore, Storage, User};

fn persisted_user(stars: u32, today_stars: u32, last_star_date: &str) -> User {
    User {
        id: "1".to_string(),
        name: "김민지".to_string(),
        nickname: "민지".to_string(),
        email: "minji@cooksync.app".to_string(),
        profile_image: None,
        level: "미슐랭 1스타".to_string(),
        bio: String::new(),
        location: None,
        stars,
        today_stars,
        last_star_date: last_star_date.to_string(),
    }
}

fn store_with_user(harness: &IntegrationHarness, user: &User) -> Result<CookSyncStore> {
    Storage::at(harness.workspace_path()).save_json(keys::USER, user)?;
    CookSyncStore::open_at(harness.workspace_path())
}

#[test]
fn stars_never_exceed_the_lifetime_cap() -> Result<()> {
    let harness = IntegrationHarness::new();
    let mut store = store_with_user(&harness, &persisted_user(99, 0, "2000-01-01"))?;

    assert!(store.earn_stars(5, StarReason::Cook)?);
    assert_eq!(store.user().unwrap().stars, 100);

    // The day's budget is spent; further calls are refused.
    assert!(!store.earn_stars(1, StarReason::Cook)?);
    assert_eq!(store.user().unwrap().stars, 100);
    Ok(())
}

#[test]
fn the_daily_cap_holds_across_many_calls() -> Result<()> {
    let harness = IntegrationHarness::new();
    let mut store = harness.store();
    store.signup(&crate::support::signup_data("홍길동", "길동이", "a@b.com"))?;

    assert!(store.earn_stars(2, StarReason::Cook)?);
    // Only one star of this request fits under the cap.
    assert!(store.earn_stars(2, StarReason::Cook)?);
    assert!(!store.earn_stars(1, StarReason::Cook)?);
    assert!(!store.earn_stars(10, StarReason::Recipe)?);

    let user = store.user().unwrap();
    assert_eq!(user.stars, 3);
    assert_eq!(user.today_stars, 3);
    Ok(())
}

#[test]
fn a_day_boundary_resets_the_budget_lazily() -> Result<()> {
    let harness = IntegrationHarness::new();
    // Yesterday's ledger is exhausted; today it counts as zero.
    let mut store = store_with_user(&harness, &persisted_user(10, 3, "2000-01-01"))?;
    assert_eq!(store.effective_today_stars(), 0);

    assert!(store.earn_stars(1, StarReason::Cook)?);
    let user = store.user().unwrap();
    assert_eq!(user.stars, 11);
    assert_eq!(user.today_stars, 1);
    assert_eq!(store.effective_today_stars(), 1);
    Ok(())
}

#[test]
fn earning_requires_a_session() -> Result<()> {
    let harness = IntegrationHarness::new();
    let mut store = harness.store();
    assert!(!store.earn_stars(3, StarReason::Cook)?);
    Ok(())
}

#[test]
fn star_level_is_derived_from_lifetime_stars() -> Result<()> {
    let harness = IntegrationHarness::new();
    let store = store_with_user(&harness, &persisted_user(37, 0, "2000-01-01"))?;
    assert_eq!(store.star_level(), 3);

    let fresh = IntegrationHarness::new();
    let logged_out = fresh.store();
    assert_eq!(logged_out.star_level(), 0);
    Ok(())
}
