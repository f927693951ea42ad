//! Play subcommand handler

use std::rc::Rc;

use anyhow::{Context, Result};
use tracing::info;

use derelict::terminal::{build_terminal, TerminalCommands, TypewriterEngine};
use derelict::{tui, Config, ShipClock, TerminalScreen};

use super::session_rng;

/// Boot the named terminal and run it until the player logs out.
#[cfg(not(tarpaulin_include))]
pub fn handle(config: &Config, name: &str, seed: Option<u64>) -> Result<()> {
    let spec = config.terminal(name)?;
    let mut rng = session_rng(seed);
    let build = build_terminal(spec, &config.typewriter, &mut rng)
        .with_context(|| format!("Failed to set up terminal '{}'", spec.name))?;

    let clock = ShipClock::new(config.mission_start()?).shared();
    let engine = TypewriterEngine::new(build.script, build.score, &config.typewriter, rng)
        .with_timestamps(Box::new(Rc::clone(&clock)));
    let commands = TerminalCommands::new(build.integrity, build.score);
    let mut screen =
        TerminalScreen::new(build.designation, engine, commands, &config.typewriter);

    info!(terminal = %spec.name, "session started");
    tui::run(&mut screen, &clock)?;
    info!(terminal = %spec.name, "session ended");
    Ok(())
}
