use std::io::{self, IsTerminal};
use std::sync::{mpsc, Arc};
use std::thread;

use anyhow::{anyhow, Context};
use lifetimer::{compute_tick, CountdownRunner, Profile, TickReport};
use tracing::{debug, info};

use crate::args::{ShowArgs, WatchArgs};
use crate::render::render_report;
use crate::state::AppState;

/// Clear screen and home the cursor
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

enum WatchEvent {
    Tick(TickReport),
    Stop,
}

fn require_profile(state: &AppState) -> anyhow::Result<Profile> {
    state
        .load_profile()
        .ok_or_else(|| anyhow!("no saved profile; run `life-timer init` first"))
}

/// Compute and print a single tick
pub fn show(state: &AppState, args: ShowArgs) -> anyhow::Result<()> {
    let profile = require_profile(state)?;
    let now = args.at.unwrap_or_else(|| state.clock.now());
    let report = compute_tick(now, &profile);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_report(&report));
    }
    Ok(())
}

/// Run the countdown until Enter is pressed or the tick limit is hit
pub fn watch(state: &AppState, args: WatchArgs) -> anyhow::Result<()> {
    let profile = Arc::new(require_profile(state)?);
    let interactive = io::stdout().is_terminal();

    let (tx, rx) = mpsc::channel();
    let tick_tx = tx.clone();

    let mut runner = CountdownRunner::new();
    runner.start(
        Arc::clone(&profile),
        Arc::clone(&state.clock),
        state.config.tick_interval(),
        move |report| {
            // Receiver gone means the watch loop already ended
            let _ = tick_tx.send(WatchEvent::Tick(report));
        },
    );

    thread::Builder::new()
        .name("watch-stdin".into())
        .spawn(move || {
            let mut line = String::new();
            // EOF leaves the countdown running
            if matches!(io::stdin().read_line(&mut line), Ok(n) if n > 0) {
                let _ = tx.send(WatchEvent::Stop);
            }
        })
        .context("failed to spawn stdin reader")?;

    if interactive {
        eprintln!("Press Enter to stop");
    }

    let mut shown = 0u32;
    for event in rx.iter() {
        match event {
            WatchEvent::Tick(report) => {
                if interactive {
                    print!("{}", CLEAR_SCREEN);
                }
                println!("{}", render_report(&report));
                shown += 1;
                if args.ticks.is_some_and(|limit| shown >= limit) {
                    debug!("Tick limit reached");
                    break;
                }
            }
            WatchEvent::Stop => break,
        }
    }

    runner.stop();
    info!("Countdown stopped after {} tick(s)", shown);
    Ok(())
}
