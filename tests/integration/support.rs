use cooksync::store::{PostDraft, RecipeDraft, SignupData};
use cooksync::workspace::{save_config, AppConfig};
use cooksync::CookSyncStore;
use std::path::Path;
use tempfile::TempDir;

pub struct IntegrationHarness {
    workspace: TempDir,
}

impl IntegrationHarness {
    pub fn new() -> Self {
        let workspace = TempDir::new().expect("failed to create temp workspace");
        let mut config = AppConfig::default();
        config.session.simulated_delay_ms = 0;
        save_config(workspace.path(), &config).expect("failed to write test config");
        Self { workspace }
    }

    pub fn workspace_path(&self) -> &Path {
        self.workspace.path()
    }

    pub fn store(&self) -> CookSyncStore {
        CookSyncStore::open_at(self.workspace.path()).expect("failed to open store")
    }

    pub fn logged_in_store(&self) -> CookSyncStore {
        let mut store = self.store();
        store
            .login("test@cooksync.app", "password")
            .expect("login failed");
        store
    }
}

pub fn signup_data(name: &str, nickname: &str, email: &str) -> SignupData {
    SignupData {
        name: name.to_string(),
        nickname: nickname.to_string(),
        email: email.to_string(),
        password: "x".to_string(),
    }
}

pub fn recipe_draft(title: &str) -> RecipeDraft {
    RecipeDraft {
        title: title.to_string(),
        description: "테스트 레시피".to_string(),
        category: "한식".to_string(),
        servings: 2,
        thumbnail: "/placeholder.svg".to_string(),
        tags: vec!["테스트".to_string()],
        ingredients: Vec::new(),
        steps: Vec::new(),
    }
}

pub fn post_draft(title: &str) -> PostDraft {
    PostDraft {
        title: title.to_string(),
        description: "대파 한 단 나눠요".to_string(),
        price: "2000원".to_string(),
        image: "/placeholder.svg".to_string(),
        place: "둔산동".to_string(),
    }
}
