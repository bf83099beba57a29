use crate::support::{recipe_draft, signup_data, IntegrationHarness};
use anyhow::Result;
use cooksync::store::{LikedRecipe, RecipeUpdate};

fn liked(id: &str) -> LikedRecipe {
    LikedRecipe {
        id: id.to_string(),
        title: "김치찌개".to_string(),
        image: "/placeholder.svg".to_string(),
        author: "집밥요리왕".to_string(),
        saved_at: String::new(),
    }
}

#[test]
fn toggling_twice_restores_the_original_membership() -> Result<()> {
    let harness = IntegrationHarness::new();
    let mut store = harness.store();

    assert!(!store.is_recipe_liked("r1"));
    store.toggle_like_recipe(&liked("r1"))?;
    assert!(store.is_recipe_liked("r1"));
    assert!(!store.liked_recipes()[0].saved_at.is_empty());

    store.toggle_like_recipe(&liked("r1"))?;
    assert!(!store.is_recipe_liked("r1"));
    assert!(store.liked_recipes().is_empty());
    Ok(())
}

#[test]
fn adding_a_recipe_prepends_and_credits_one_star() -> Result<()> {
    let harness = IntegrationHarness::new();
    let mut store = harness.store();
    store.signup(&signup_data("홍길동", "길동이", "a@b.com"))?;

    let first = store.add_user_recipe(recipe_draft("비빔국수"))?;
    assert!(first.starts_with("user-recipe-"));
    assert_eq!(store.user().unwrap().stars, 1);

    let second = store.add_user_recipe(recipe_draft("잔치국수"))?;
    assert_ne!(first, second);
    // Newest first.
    assert_eq!(store.user_recipes()[0].id, second);
    assert_eq!(store.user_recipes()[1].id, first);
    Ok(())
}

#[test]
fn four_recipes_in_one_day_cap_the_reward_at_three() -> Result<()> {
    let harness = IntegrationHarness::new();
    let mut store = harness.store();
    store.signup(&signup_data("홍길동", "길동이", "a@b.com"))?;

    for i in 0..4 {
        store.add_user_recipe(recipe_draft(&format!("레시피 {i}")))?;
    }
    assert_eq!(store.user_recipes().len(), 4);
    // Only three of the four authoring rewards land on the same day.
    assert_eq!(store.user().unwrap().stars, 3);
    assert_eq!(store.effective_today_stars(), 3);
    Ok(())
}

#[test]
fn updating_merges_only_the_given_fields() -> Result<()> {
    let harness = IntegrationHarness::new();
    let mut store = harness.logged_in_store();
    let id = store.add_user_recipe(recipe_draft("계란말이"))?;

    store.update_user_recipe(
        &id,
        &RecipeUpdate {
            servings: Some(4),
            tags: Some(vec!["반찬".to_string()]),
            ..Default::default()
        },
    )?;
    let recipe = &store.user_recipes()[0];
    assert_eq!(recipe.servings, 4);
    assert_eq!(recipe.tags, vec!["반찬".to_string()]);
    assert_eq!(recipe.title, "계란말이");
    Ok(())
}

#[test]
fn updating_an_unknown_id_changes_nothing() -> Result<()> {
    let harness = IntegrationHarness::new();
    let mut store = harness.logged_in_store();
    store.add_user_recipe(recipe_draft("계란말이"))?;
    let before = store.user_recipes().to_vec();

    store.update_user_recipe(
        "user-recipe-0",
        &RecipeUpdate {
            title: Some("없는 레시피".to_string()),
            ..Default::default()
        },
    )?;
    assert_eq!(store.user_recipes().len(), before.len());
    assert_eq!(store.user_recipes()[0].title, "계란말이");
    Ok(())
}

#[test]
fn deleting_removes_the_entry() -> Result<()> {
    let harness = IntegrationHarness::new();
    let mut store = harness.logged_in_store();
    let id = store.add_user_recipe(recipe_draft("계란말이"))?;

    store.delete_user_recipe(&id)?;
    assert!(store.user_recipes().is_empty());

    // Deleting again is harmless.
    store.delete_user_recipe(&id)?;
    assert!(store.user_recipes().is_empty());
    Ok(())
}
