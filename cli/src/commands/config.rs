use crate::state::AppState;

pub fn get_config(state: &AppState) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(&state.config)?);
    Ok(())
}
