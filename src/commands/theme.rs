use anyhow::Result;
use colgit_core::config::ConfigStore;
use colgit_core::theme::get_theme_colors;
use owo_colors::OwoColorize;

use crate::render::Render;

/// Print the palette for `name`, or for the configured theme.
pub fn run(config: &ConfigStore, name: Option<&str>) -> Result<()> {
    let configured = config.get_theme();
    let name = name.unwrap_or(configured.name());

    println!("{} {}", config.get_text("theme").bold(), name);
    println!("{}", get_theme_colors(name).render());

    Ok(())
}
