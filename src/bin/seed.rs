use std::env;

use anyhow::{Context, Result};
use cooksync::catalog;
use cooksync::logging::init_logging;
use cooksync::workspace::ensure_workspace_structure;
use cooksync::CookSyncStore;

/// Bootstraps the workspace and, unless asked not to, seeds a demo session
/// so a fresh checkout has something to browse.
fn main() -> Result<()> {
    let paths = ensure_workspace_structure()?;
    init_logging(&paths.logs_dir)?;
    let args = CliArgs::parse()?;

    let mut store = CookSyncStore::open()?;
    if args.skip_demo {
        println!("Workspace ready at {}", paths.root.display());
        return Ok(());
    }

    if !store.is_logged_in() {
        store.login(&args.email, "demo")?;
    }

    let recipes = catalog::demo_recipes();
    let first = recipes.first().context("demo catalog is empty")?;
    if !store.is_recipe_liked(&first.id) {
        store.toggle_like_recipe(&first.liked_reference())?;
    }
    if store.conversations().is_empty() {
        store.send_message(
            "neighbor-1",
            "옆집사는이웃",
            None,
            "안녕하세요! 김치 반 포기 나눔 아직 가능할까요?",
        )?;
    }

    println!(
        "Workspace ready at {} ({} liked recipe(s), {} conversation(s))",
        paths.root.display(),
        store.liked_recipes().len(),
        store.conversations().len()
    );
    Ok(())
}

struct CliArgs {
    email: String,
    skip_demo: bool,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        let mut args = env::args().skip(1);
        let mut email = "demo@cooksync.app".to_string();
        let mut skip_demo = false;
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--email" => {
                    email = args.next().context("Expected an address after --email")?;
                }
                "--skip-demo" => skip_demo = true,
                other => anyhow::bail!("Unknown argument: {other}"),
            }
        }
        Ok(Self { email, skip_demo })
    }
}
