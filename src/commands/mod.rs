pub mod shell;
pub mod theme;

use std::io::{IsTerminal, Read};

use anyhow::{Context, Result};
use clap::Subcommand;
use colgit_core::session::Action;
use colgit_core::theme::Theme;
use dialoguer::Input;

/// Subcommands that map one-to-one onto a session action. Shared between the
/// command line and the interactive shell.
#[derive(Subcommand)]
pub enum ActionCommand {
    /// Record a commit marker for the current second
    Commit,
    /// Create a branch marker
    Branch {
        /// Branch name (a single path segment)
        name: String,
    },
    /// Merge branches (not implemented)
    Merge,
    /// Connect to a remote such as GitHub (not implemented)
    Connect,
    /// List commit and branch markers
    Log,
    /// Read and write per-date notes
    Note {
        #[command(subcommand)]
        command: NoteCommand,
    },
    /// Show or change settings
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
    /// Show the reminders file contents
    Reminders,
}

#[derive(Subcommand)]
pub enum NoteCommand {
    /// Save a note, replacing any existing note for that date
    Save {
        /// Date key (defaults to today, YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,

        /// Note text. Read from stdin or prompted for when omitted
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },
    /// Print the note for a date
    Show {
        /// Date key (defaults to today, YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List dates that have notes
    List,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the current settings
    Show {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Set the interface language (name or code, e.g. "Español" or "es")
    SetLanguage { language: String },
    /// Set the colour theme
    SetTheme { theme: Theme },
    /// Set the storage limit in GB
    SetStorageLimit {
        #[arg(allow_negative_numbers = true)]
        limit: f64,
    },
}

#[derive(Subcommand)]
pub enum TaskCommand {
    /// Add a task to this session's list
    Add {
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },
    /// List this session's tasks
    List,
    /// Sync tasks with a calendar (not implemented)
    Sync,
}

impl ActionCommand {
    /// `read_body` supplies the note text when `note save` is given none.
    pub fn into_action(self, read_body: impl FnOnce() -> Result<String>) -> Result<Action> {
        let action = match self {
            ActionCommand::Commit => Action::Commit,
            ActionCommand::Branch { name } => Action::Branch(name),
            ActionCommand::Merge => Action::Merge,
            ActionCommand::Connect => Action::ConnectRemote,
            ActionCommand::Log => Action::ListMarkers,
            ActionCommand::Note { command } => match command {
                NoteCommand::Save { date, text } => {
                    let content = if text.is_empty() {
                        read_body()?
                    } else {
                        text.join(" ")
                    };
                    Action::SaveNote {
                        date: date.unwrap_or_else(today),
                        content,
                    }
                }
                NoteCommand::Show { date } => Action::LoadNote(date.unwrap_or_else(today)),
                NoteCommand::List => Action::ListNotes,
            },
            ActionCommand::Config { command } => match command {
                ConfigCommand::Show { .. } => Action::ShowConfig,
                ConfigCommand::SetLanguage { language } => Action::SetLanguage(language),
                ConfigCommand::SetTheme { theme } => Action::SetTheme(theme),
                ConfigCommand::SetStorageLimit { limit } => Action::SetStorageLimit(limit),
            },
            ActionCommand::Reminders => Action::ShowReminders,
        };

        Ok(action)
    }

    /// Whether output should be machine-readable.
    pub fn wants_json(&self) -> bool {
        matches!(
            self,
            ActionCommand::Config {
                command: ConfigCommand::Show { json: true }
            }
        )
    }
}

impl TaskCommand {
    pub fn into_action(self) -> Action {
        match self {
            TaskCommand::Add { text } => Action::AddTask(text.join(" ")),
            TaskCommand::List => Action::ListTasks,
            TaskCommand::Sync => Action::SyncCalendar,
        }
    }
}

/// Date key for today, matching what a calendar picker would hand us.
pub fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// Note text for one-shot commands: prompted for on a terminal, otherwise
/// all of stdin.
pub fn read_note_body() -> Result<String> {
    if std::io::stdin().is_terminal() {
        let text: String = Input::new()
            .with_prompt("  Note")
            .allow_empty(true)
            .interact_text()?;
        return Ok(text);
    }

    let mut content = String::new();
    std::io::stdin()
        .read_to_string(&mut content)
        .context("Failed to read note from stdin")?;
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn today_is_iso_date() {
        let date = today();
        assert_eq!(date.len(), 10);
        assert!(chrono::NaiveDate::parse_from_str(&date, "%Y-%m-%d").is_ok());
    }

    #[test]
    fn task_text_is_joined() {
        let command = TaskCommand::Add {
            text: vec!["buy".into(), "milk".into()],
        };
        assert_eq!(command.into_action(), Action::AddTask("buy milk".into()));
    }

    #[test]
    fn note_text_from_args() {
        let command = ActionCommand::Note {
            command: NoteCommand::Save {
                date: Some("2025-03-20".into()),
                text: vec!["call".into(), "mom".into()],
            },
        };
        assert_eq!(
            command
                .into_action(|| anyhow::bail!("body should come from args"))
                .unwrap(),
            Action::SaveNote {
                date: "2025-03-20".into(),
                content: "call mom".into()
            }
        );
    }

    #[test]
    fn note_text_from_reader_when_omitted() {
        let command = ActionCommand::Note {
            command: NoteCommand::Save {
                date: Some("2025-03-20".into()),
                text: vec![],
            },
        };
        assert_eq!(
            command.into_action(|| Ok("line one\nline two".into())).unwrap(),
            Action::SaveNote {
                date: "2025-03-20".into(),
                content: "line one\nline two".into()
            }
        );
    }

    #[test]
    fn json_flag_detected() {
        let command = ActionCommand::Config {
            command: ConfigCommand::Show { json: true },
        };
        assert!(command.wants_json());
        assert!(!ActionCommand::Log.wants_json());
    }
}
