//! Config subcommands handler

use std::path::Path;

use anyhow::{bail, Result};

use derelict::tui::current_theme;
use derelict::Config;

/// Show the effective configuration as TOML.
pub fn handle_show(path: &Path) -> Result<()> {
    let config = Config::load_from(path)?;
    let toml_str = toml::to_string_pretty(&config)?;
    let theme = current_theme();
    println!("{}", theme.primary_text(&toml_str));
    Ok(())
}

/// Write the default configuration to `path`.
///
/// Refuses to replace an existing file unless `force` is set.
pub fn handle_init(path: &Path, force: bool) -> Result<()> {
    let theme = current_theme();
    if path.exists() && !force {
        bail!(
            "Config file {} already exists (use --force to overwrite)",
            path.display()
        );
    }

    Config::default().save_to(path)?;
    println!(
        "{}",
        theme.primary_text(&format!("Wrote default config to {}", path.display()))
    );
    Ok(())
}

/// Print the config file path.
pub fn handle_path(path: &Path) -> Result<()> {
    println!("{}", path.display());
    Ok(())
}
