use anyhow::Result;
use colored::Colorize;

use crate::cli::ConfigCommands;
use crate::config::Config;

pub fn run(command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => show(),
        ConfigCommands::Set { key, value } => set(&key, &value),
    }
}

fn show() -> Result<()> {
    let path = Config::path()?;
    let config = Config::load_or_default();

    println!("{} {}", "Config file:".bold(), path.display());
    println!();
    println!(
        "  {:<24} {}",
        "defaults.theme",
        config.theme().unwrap_or("light (default)")
    );
    println!(
        "  {:<24} {}",
        "defaults.animations",
        if config.animations_enabled() { "on" } else { "off" }
    );
    println!(
        "  {:<24} {}",
        "defaults.start_slide",
        config
            .start_slide()
            .map(|n| n.to_string())
            .unwrap_or_else(|| "1 (default)".to_string())
    );
    println!(
        "  {:<24} {}",
        "input.swipe_threshold",
        config.swipe_threshold()
    );
    Ok(())
}

fn set(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load_or_default();
    config.set(key, value)?;
    let path = config.save()?;
    println!(
        "{} {key} = {value} ({})",
        "Saved".green().bold(),
        path.display()
    );
    Ok(())
}
