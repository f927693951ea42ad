//! Status subcommand handler

use anyhow::Result;

use derelict::terminal::script::designation;
use derelict::tui::current_theme;
use derelict::{compute_degradation, Config, TerminalSpec};

use super::session_rng;

/// Print integrity and degradation for one terminal, or all of them.
pub fn handle(config: &Config, name: Option<&str>, seed: Option<u64>) -> Result<()> {
    let terminals: Vec<&TerminalSpec> = match name {
        Some(name) => vec![config.terminal(name)?],
        None => config.terminals.iter().collect(),
    };

    let theme = current_theme();
    let mut rng = session_rng(seed);

    if terminals.is_empty() {
        println!("{}", theme.primary_text("No terminals configured."));
        return Ok(());
    }

    for spec in terminals {
        let integrity = spec.integrity()?;
        let score = compute_degradation(&integrity);
        println!(
            "{} {}",
            theme.accent_text(&format!("{:<10}", spec.name)),
            theme.primary_text(&designation(&spec.kind, &mut rng))
        );
        println!("  {}", theme.primary_text(&integrity.to_string()));
        println!(
            "  {}",
            theme.primary_text(&format!("System degradation: {}%", score))
        );
    }
    Ok(())
}
