use anyhow::Result;
use cooksync::catalog::{demo_recipes, filter_by_tag, find_recipe, RecipeStep};
use cooksync::cook_mode::{format_time, SkillLevel, StepCookSession, TickOutcome};

fn steps(durations: &[u32]) -> Vec<RecipeStep> {
    durations
        .iter()
        .enumerate()
        .map(|(i, &duration)| RecipeStep {
            id: i as u32 + 1,
            step_number: i as u32 + 1,
            action: format!("단계 {}", i + 1),
            description: String::new(),
            ingredients: Vec::new(),
            tools: Vec::new(),
            duration,
            image_url: "/placeholder.svg".to_string(),
            tips: None,
        })
        .collect()
}

#[test]
fn ticking_to_zero_auto_advances() -> Result<()> {
    let mut session = StepCookSession::new(steps(&[2, 5]))?;
    session.start_timer();
    assert_eq!(session.remaining_seconds(), 2);

    assert_eq!(session.tick(), TickOutcome::Counting(1));
    assert_eq!(session.tick(), TickOutcome::Advanced(1));
    assert_eq!(session.current_index(), 1);
    // The next step's countdown is armed and rolling.
    assert_eq!(session.remaining_seconds(), 5);
    assert!(session.is_running());
    Ok(())
}

#[test]
fn skill_levels_scale_the_countdown() {
    assert_eq!(SkillLevel::Expert.adjusted_duration(600), 450);
    assert_eq!(SkillLevel::Beginner.adjusted_duration(600), 750);
    assert_eq!(SkillLevel::Intermediate.adjusted_duration(600), 600);
}

#[test]
fn changing_skill_mid_step_rescales_proportionally() -> Result<()> {
    let mut session = StepCookSession::new(steps(&[100]))?;
    session.start_timer();
    for _ in 0..50 {
        session.tick();
    }
    assert_eq!(session.remaining_seconds(), 50);

    // Half the step remains, so half of the expert budget remains.
    session.set_skill_level(SkillLevel::Expert);
    assert_eq!(session.remaining_seconds(), 38);
    Ok(())
}

#[test]
fn the_last_step_completes_the_session() -> Result<()> {
    let mut session = StepCookSession::new(steps(&[1]))?;
    session.start_timer();
    assert_eq!(session.tick(), TickOutcome::SessionComplete);
    assert!(session.is_finished());
    assert_eq!(session.tick(), TickOutcome::Idle);
    Ok(())
}

#[test]
fn disabling_auto_advance_stops_at_the_step_boundary() -> Result<()> {
    let mut session = StepCookSession::new(steps(&[1, 1]))?;
    session.set_auto_advance(false);
    session.start_timer();
    assert_eq!(session.tick(), TickOutcome::StepFinished);
    assert_eq!(session.current_index(), 0);
    assert!(!session.is_running());
    Ok(())
}

#[test]
fn jumping_back_reopens_the_skipped_steps() -> Result<()> {
    let mut session = StepCookSession::new(steps(&[10, 10, 10]))?;
    session.next_step();
    session.next_step();
    assert_eq!(session.current_index(), 2);
    assert_eq!(session.completed_steps().len(), 2);

    session.jump_to(0);
    assert_eq!(session.current_index(), 0);
    assert!(session.completed_steps().is_empty());
    // The first step waits for an explicit start.
    assert!(!session.is_running());
    Ok(())
}

#[test]
fn added_time_extends_the_countdown() -> Result<()> {
    let mut session = StepCookSession::new(steps(&[60]))?;
    session.start_timer();
    session.add_time();
    assert_eq!(session.remaining_seconds(), 180);
    Ok(())
}

#[test]
fn a_catalog_recipe_drives_a_session() -> Result<()> {
    let recipes = demo_recipes();
    let recipe = &recipes[0];
    let mut session = StepCookSession::new(recipe.steps.clone())?;
    session.start_timer();
    assert_eq!(session.remaining_seconds(), recipe.steps[0].duration);
    assert!(session.progress() < f64::EPSILON);
    Ok(())
}

#[test]
fn pausing_holds_and_stepping_back_reopens() -> Result<()> {
    let mut session = StepCookSession::new(steps(&[5, 5]))?;
    session.start_timer();
    session.pause_timer();
    assert!(!session.is_running());
    assert_eq!(session.tick(), TickOutcome::Idle);

    session.next_step();
    assert_eq!(session.current_index(), 1);
    session.previous_step();
    assert_eq!(session.current_index(), 0);
    assert!(session.completed_steps().is_empty());
    Ok(())
}

#[test]
fn the_catalog_is_browsable() {
    let recipes = demo_recipes();
    assert_eq!(filter_by_tag(&recipes, "찌개").len(), 2);
    assert!(find_recipe(&recipes, "gyeran-mari").is_some());
    assert!(find_recipe(&recipes, "missing").is_none());

    let reference = recipes[0].liked_reference();
    assert_eq!(reference.id, recipes[0].id);
    assert_eq!(reference.author, "#집밥요리왕");
}

#[test]
fn sessions_need_at_least_one_step() {
    assert!(StepCookSession::new(Vec::new()).is_err());
}

#[test]
fn countdown_renders_as_minutes_and_seconds() {
    assert_eq!(format_time(125), "02:05");
    assert_eq!(format_time(0), "00:00");
}
