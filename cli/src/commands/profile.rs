use anyhow::Context;
use lifetimer::{compute_tick, ProfileDraft};
use tracing::info;

use crate::args::InitArgs;
use crate::render::render_report;
use crate::state::AppState;

/// Validate the flags into a profile and save it over whatever was stored
pub fn init(state: &AppState, args: InitArgs) -> anyhow::Result<()> {
    let draft = ProfileDraft {
        birth_date: args.birth_date,
        gender: args.gender,
        target_age: args.target_age,
        show_sleep_count: args.sleep,
        show_meal_count: args.meal,
        family: args.members,
    };

    let now = state.clock.now();
    let profile = draft.into_profile(now.date_naive())?;
    state
        .store
        .save(&profile)
        .context("failed to save profile")?;
    info!(
        "Profile saved: target age {}, {} family member(s)",
        profile.target_age,
        profile.family.len()
    );

    println!("Saved profile to {}\n", state.store.path().display());
    print!("{}", render_report(&compute_tick(now, &profile)));
    Ok(())
}

/// Remove all saved data
pub fn clear(state: &AppState) -> anyhow::Result<()> {
    state
        .store
        .clear()
        .context("failed to clear saved data")?;
    println!("All saved data deleted");
    Ok(())
}
