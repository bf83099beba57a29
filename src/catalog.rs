//! Built-in demo recipe catalog.
//!
//! The catalog is read-only reference data the pages browse and the guided
//! cook mode runs against; the store never writes it. Lookups are linear,
//! which is fine at catalog scale.

use crate::store::LikedRecipe;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// One step of a catalog recipe.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeStep {
    pub id: u32,
    pub step_number: u32,
    pub action: String,
    pub description: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub tools: Vec<String>,
    /// Seconds.
    pub duration: u32,
    pub image_url: String,
    #[serde(default)]
    pub tips: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    #[serde(rename = "초보")]
    Beginner,
    #[serde(rename = "중급")]
    Intermediate,
    #[serde(rename = "상급")]
    Expert,
}

/// A browsable catalog recipe.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub thumbnail: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub hashtags: Vec<String>,
    #[serde(default)]
    pub author: Option<String>,
    /// Michelin-style rating shown on cards.
    #[serde(default)]
    pub rating: Option<f32>,
    /// Minutes, end to end.
    pub duration: u32,
    pub difficulty: Difficulty,
    pub servings: u32,
    #[serde(default)]
    pub calories: Option<u32>,
    #[serde(default)]
    pub description: Option<String>,
    pub steps: Vec<RecipeStep>,
}

impl Recipe {
    /// The liked-recipes reference the scrap button stores for this recipe.
    pub fn liked_reference(&self) -> LikedRecipe {
        LikedRecipe {
            id: self.id.clone(),
            title: self.name.clone(),
            image: self.thumbnail.clone(),
            author: self
                .hashtags
                .first()
                .cloned()
                .unwrap_or_else(|| "미슐랭 0스타".to_string()),
            saved_at: Utc::now().format("%Y.%m.%d").to_string(),
        }
    }
}

pub fn find_recipe<'a>(recipes: &'a [Recipe], id: &str) -> Option<&'a Recipe> {
    recipes.iter().find(|r| r.id == id)
}

pub fn filter_by_tag<'a>(recipes: &'a [Recipe], tag: &str) -> Vec<&'a Recipe> {
    recipes.iter().filter(|r| r.tags.iter().any(|t| t == tag)).collect()
}

fn step(id: u32, action: &str, description: &str, duration: u32, tips: Option<&str>) -> RecipeStep {
    RecipeStep {
        id,
        step_number: id,
        action: action.to_string(),
        description: description.to_string(),
        ingredients: Vec::new(),
        tools: Vec::new(),
        duration,
        image_url: "/placeholder.svg".to_string(),
        tips: tips.map(str::to_string),
    }
}

/// The bundled demo dataset.
pub fn demo_recipes() -> Vec<Recipe> {
    vec![
        Recipe {
            id: "kimchi-jjigae".to_string(),
            name: "김치찌개".to_string(),
            thumbnail: "/recipes/kimchi-jjigae.jpg".to_string(),
            tags: vec!["한식".to_string(), "찌개".to_string()],
            hashtags: vec!["#집밥요리왕".to_string()],
            author: Some("집밥요리왕".to_string()),
            rating: Some(3.0),
            duration: 30,
            difficulty: Difficulty::Beginner,
            servings: 2,
            calories: Some(320),
            description: Some("잘 익은 김치로 끓이는 기본 김치찌개.".to_string()),
            steps: vec![
                step(1, "재료 손질", "김치와 돼지고기를 한입 크기로 썬다.", 180, None),
                step(2, "볶기", "냄비에 고기와 김치를 넣고 중불에 볶는다.", 300, Some("김치가 투명해질 때까지")),
                step(3, "끓이기", "물을 붓고 두부를 올려 끓인다.", 600, None),
            ],
        },
        Recipe {
            id: "doenjang-jjigae".to_string(),
            name: "된장찌개".to_string(),
            thumbnail: "/recipes/doenjang-jjigae.jpg".to_string(),
            tags: vec!["한식".to_string(), "찌개".to_string()],
            hashtags: vec!["#뚝배기장인".to_string()],
            author: Some("뚝배기장인".to_string()),
            rating: Some(2.5),
            duration: 25,
            difficulty: Difficulty::Beginner,
            servings: 2,
            calories: Some(250),
            description: Some("멸치 육수에 된장을 풀어 구수하게.".to_string()),
            steps: vec![
                step(1, "육수 내기", "멸치와 다시마로 육수를 낸다.", 420, None),
                step(2, "된장 풀기", "육수에 된장을 체에 걸러 푼다.", 60, None),
                step(3, "끓이기", "애호박, 두부, 양파를 넣고 끓인다.", 480, Some("팔팔 끓으면 불을 줄인다")),
            ],
        },
        Recipe {
            id: "gyeran-mari".to_string(),
            name: "계란말이".to_string(),
            thumbnail: "/recipes/gyeran-mari.jpg".to_string(),
            tags: vec!["한식".to_string(), "반찬".to_string()],
            hashtags: vec!["#아침10분".to_string()],
            author: Some("아침10분".to_string()),
            rating: Some(2.0),
            duration: 15,
            difficulty: Difficulty::Intermediate,
            servings: 2,
            calories: Some(210),
            description: Some("도시락 단골 반찬, 폭신한 계란말이.".to_string()),
            steps: vec![
                step(1, "계란물 만들기", "계란을 풀고 쪽파와 소금을 섞는다.", 120, None),
                step(2, "부치며 말기", "약불에서 계란물을 부어가며 만다.", 360, Some("약불 유지가 핵심")),
                step(3, "모양 잡기", "김발로 감싸 모양을 잡고 식힌 뒤 썬다.", 180, None),
            ],
        },
    ]
}
