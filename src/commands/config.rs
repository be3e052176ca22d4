use anyhow::{Context, Result};
use checkin_core::config::PickerConfig;
use owo_colors::OwoColorize;

pub fn init(force: bool) -> Result<()> {
    let path = PickerConfig::config_path()?;

    if path.exists() && !force {
        anyhow::bail!(
            "Config file already exists at {}\n\nUse --force to overwrite it.",
            path.display()
        );
    }

    PickerConfig::create_default_config(&path)
        .with_context(|| format!("Could not create {}", path.display()))?;
    println!("{}", format!("Created {}", path.display()).green());

    Ok(())
}

pub fn show() -> Result<()> {
    let path = PickerConfig::config_path()?;
    let config = PickerConfig::load_from(&path)?;

    println!("{}", "Paths".bold());
    println!("  Config:  {}", path.display());
    println!();
    println!("{}", "Settings".bold());
    println!("  locale:       {}", config.locale);
    println!("  pad_grid:     {}", config.pad_grid);
    println!(
        "  hotels_file:  {}",
        config
            .hotels_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none)".dimmed().to_string())
    );

    Ok(())
}
