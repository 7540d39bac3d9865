//! Terminal rendering for ColGit types.

use colgit_core::config::{ConfigState, ConfigStore};
use colgit_core::i18n::Language;
use colgit_core::reminders::Reminders;
use colgit_core::session::Outcome;
use colgit_core::theme::Palette;
use colgit_core::versioning::Marker;
use owo_colors::OwoColorize;

/// Extension trait for colored terminal rendering.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Marker {
    fn render(&self) -> String {
        match self {
            Marker::Commit(_) => format!("{} {}", "●".yellow(), self),
            Marker::Branch(_) => format!("{} {}", "⑂".green(), self),
        }
    }
}

/// Parse "#rrggbb" into its channels.
fn hex_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

impl Render for Palette {
    fn render(&self) -> String {
        self.entries()
            .iter()
            .map(|(name, value)| {
                let swatch = match hex_rgb(value) {
                    Some((r, g, b)) => "   ".on_truecolor(r, g, b).to_string(),
                    None => "   ".to_string(),
                };
                format!("  {swatch} {:<20} {}", name, value.dimmed())
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn render_config(state: &ConfigState, config: &ConfigStore) -> String {
    let language_note = match Language::resolve(&state.language) {
        Some(lang) => format!("({})", lang.code()).dimmed().to_string(),
        None => "(unknown, showing English)".yellow().to_string(),
    };

    [
        format!("  {:<16} {} {}", config.get_text("language"), state.language, language_note),
        format!("  {:<16} {}", config.get_text("theme"), config.get_text(&state.theme.name().to_lowercase())),
        format!("  {:<16} {} GB", config.get_text("set_storage_limit"), state.storage_limit),
        format!("  {:<16} {}", "File", config.path().display().dimmed()),
    ]
    .join("\n")
}

fn render_reminders(reminders: &Reminders, config: &ConfigStore) -> String {
    if reminders.is_empty() {
        return format!("{}: 0", config.get_text("reminders"));
    }

    let mut lines = vec![format!("{}: {}", config.get_text("reminders").bold(), reminders.len())];
    for key in reminders.keys() {
        let value = reminders.get(key).map(|v| v.to_string()).unwrap_or_default();
        lines.push(format!("  {} {}", key, value.dimmed()));
    }
    lines.join("\n")
}

/// Human-readable text for an action's result, in the configured language.
pub fn render_outcome(outcome: &Outcome, config: &ConfigStore) -> String {
    match outcome {
        Outcome::Committed(commit) => format!(
            "{} {}: {}",
            "✓".green(),
            config.get_text("commit"),
            commit.path.display()
        ),
        Outcome::Branched(branch) => format!(
            "{} {}: {}",
            "✓".green(),
            config.get_text("branch"),
            branch.name
        ),
        Outcome::Markers(markers) if markers.is_empty() => {
            config.get_text("no_markers").dimmed().to_string()
        }
        Outcome::Markers(markers) => markers
            .iter()
            .map(|marker| marker.render())
            .collect::<Vec<_>>()
            .join("\n"),
        Outcome::Status(status) => config.get_text(status.message_key()).yellow().to_string(),
        Outcome::TaskAdded(task) => format!("{} {}", config.get_text("task_added"), task),
        Outcome::Tasks(tasks) if tasks.is_empty() => config.get_text("no_tasks").dimmed().to_string(),
        Outcome::Tasks(tasks) => tasks
            .iter()
            .enumerate()
            .map(|(i, task)| format!("  {}. {}", i + 1, task))
            .collect::<Vec<_>>()
            .join("\n"),
        Outcome::NoteSaved { date } => format!(
            "{} {} ({})",
            "✓".green(),
            config.get_text("note_saved"),
            date
        ),
        Outcome::Note { content, .. } if content.is_empty() => {
            config.get_text("no_note").dimmed().to_string()
        }
        Outcome::Note { content, .. } => content.clone(),
        Outcome::NoteDates(dates) if dates.is_empty() => {
            config.get_text("no_notes").dimmed().to_string()
        }
        Outcome::NoteDates(dates) => dates.join("\n"),
        Outcome::Config(state) => render_config(state, config),
        Outcome::ConfigSaved(state) => format!(
            "{} {}\n{}",
            "✓".green(),
            config.get_text("config_saved"),
            render_config(state, config)
        ),
        Outcome::Reminders(reminders) => render_reminders(reminders, config),
    }
}
