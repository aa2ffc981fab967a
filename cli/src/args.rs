//! Command line arguments

use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, Utc};
use clap::{Args, Parser, Subcommand};
use lifetimer::{FamilyMemberDraft, Gender, Relationship, DEFAULT_TICK_INTERVAL};

/// Countdown to your life-expectancy date, with time left alongside family
#[derive(Parser, Debug)]
#[command(name = "life-timer", version, about)]
pub struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub config: ConfigArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    /// Saved profile location
    #[arg(long, global = true, env = "LIFE_TIMER_DATA", value_name = "FILE")]
    pub data_file: Option<PathBuf>,

    /// Milliseconds between ticks in watch mode
    #[arg(
        long,
        global = true,
        env = "LIFE_TIMER_INTERVAL_MS",
        default_value_t = DEFAULT_TICK_INTERVAL.as_millis() as u64,
        value_name = "MS"
    )]
    pub interval_ms: u64,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Save a new profile, replacing any existing one
    Init(InitArgs),
    /// Print the countdown once
    Show(ShowArgs),
    /// Refresh the countdown every tick until Enter is pressed
    Watch(WatchArgs),
    /// Delete all saved data
    Clear,
    /// Print the resolved configuration
    Config,
}

#[derive(Args, Debug)]
pub struct InitArgs {
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub birth_date: Option<NaiveDate>,

    /// male or female
    #[arg(long)]
    pub gender: Option<Gender>,

    /// Target age in years (1-150); defaults to the average lifespan for the gender
    #[arg(long, value_name = "YEARS")]
    pub target_age: Option<u32>,

    /// Show the number of nights of sleep left
    #[arg(long)]
    pub sleep: bool,

    /// Show the number of meals left
    #[arg(long)]
    pub meal: bool,

    /// Family member; repeat for each one. Members with blank fields are skipped.
    #[arg(
        long = "member",
        value_name = "NAME:RELATIONSHIP:GENDER:YYYY-MM-DD",
        value_parser = parse_member
    )]
    pub members: Vec<FamilyMemberDraft>,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Compute for this instant instead of now (RFC 3339)
    #[arg(long, value_name = "TIMESTAMP")]
    pub at: Option<DateTime<Utc>>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct WatchArgs {
    /// Stop after this many ticks
    #[arg(long, value_name = "N")]
    pub ticks: Option<u32>,
}

/// Parse `NAME:RELATIONSHIP:GENDER:YYYY-MM-DD`. Blank fields stay unset so the
/// member is dropped during validation; malformed ones are rejected here.
fn parse_member(raw: &str) -> Result<FamilyMemberDraft, String> {
    let mut parts = raw.splitn(4, ':').map(str::trim);
    let mut next = || parts.next().filter(|part| !part.is_empty());

    let name = next().map(str::to_string);
    let relationship = next()
        .map(str::parse::<Relationship>)
        .transpose()
        .map_err(|e| e.to_string())?;
    let gender = next()
        .map(str::parse::<Gender>)
        .transpose()
        .map_err(|e| e.to_string())?;
    let birth_date = next()
        .map(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d"))
        .transpose()
        .map_err(|e| format!("invalid birth date: {e}"))?;

    Ok(FamilyMemberDraft {
        name,
        relationship,
        gender,
        birth_date,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_member() {
        let m = parse_member("Aki:child:female:2015-03-03").unwrap();
        assert_eq!(m.name.as_deref(), Some("Aki"));
        assert_eq!(m.relationship, Some(Relationship::Child));
        assert_eq!(m.gender, Some(Gender::Female));
        assert_eq!(m.birth_date, NaiveDate::from_ymd_opt(2015, 3, 3));
    }

    #[test]
    fn test_parse_member_blank_fields() {
        let m = parse_member("Aki::female").unwrap();
        assert_eq!(m.relationship, None);
        assert_eq!(m.birth_date, None);
        assert!(m.complete().is_none());
    }

    #[test]
    fn test_parse_member_rejects_garbage() {
        assert!(parse_member("Aki:cousin:female:2015-03-03").is_err());
        assert!(parse_member("Aki:child:female:03/03/2015").is_err());
    }
}
