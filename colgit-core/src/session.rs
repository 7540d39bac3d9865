//! One place that owns every component and runs user actions against them.

use crate::config::{ConfigState, ConfigStore};
use crate::error::ColGitResult;
use crate::notes::NoteStore;
use crate::paths::Paths;
use crate::reminders::Reminders;
use crate::status::Status;
use crate::tasks::TaskList;
use crate::theme::Theme;
use crate::versioning::{BranchMarker, CommitMarker, Marker, Repository};

/// Everything a front end can ask for.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Commit,
    Branch(String),
    Merge,
    ConnectRemote,
    ListMarkers,
    AddTask(String),
    ListTasks,
    SyncCalendar,
    SaveNote { date: String, content: String },
    LoadNote(String),
    ListNotes,
    ShowConfig,
    SetLanguage(String),
    SetTheme(Theme),
    SetStorageLimit(f64),
    ShowReminders,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Committed(CommitMarker),
    Branched(BranchMarker),
    Markers(Vec<Marker>),
    Status(Status),
    TaskAdded(String),
    Tasks(Vec<String>),
    NoteSaved { date: String },
    Note { date: String, content: String },
    NoteDates(Vec<String>),
    Config(ConfigState),
    ConfigSaved(ConfigState),
    Reminders(Reminders),
}

pub struct Session {
    paths: Paths,
    config: ConfigStore,
    repo: Repository,
    notes: NoteStore,
    tasks: TaskList,
    reminders: Reminders,
}

impl Session {
    /// Load settings and reminders and make sure the repository root exists.
    pub fn open(paths: Paths) -> ColGitResult<Self> {
        let config = ConfigStore::load_from(paths.config_file())?;
        let reminders = Reminders::load(&paths.reminders_file())?;
        let repo = Repository::open(paths.repo_root())?;
        let notes = NoteStore::new(paths.notes_dir());

        tracing::debug!(home = %paths.home().display(), "session opened");

        Ok(Session {
            paths,
            config,
            repo,
            notes,
            tasks: TaskList::new(),
            reminders,
        })
    }

    pub fn paths(&self) -> &Paths {
        &self.paths
    }

    pub fn config(&self) -> &ConfigStore {
        &self.config
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    /// Translate `key` into the configured language.
    pub fn text<'a>(&self, key: &'a str) -> &'a str {
        self.config.get_text(key)
    }

    pub fn dispatch(&mut self, action: Action) -> ColGitResult<Outcome> {
        tracing::debug!(?action, "dispatch");

        let outcome = match action {
            Action::Commit => Outcome::Committed(self.repo.commit()?),
            Action::Branch(name) => Outcome::Branched(self.repo.branch(&name)?),
            Action::Merge => Outcome::Status(self.repo.merge()),
            Action::ConnectRemote => Outcome::Status(self.repo.connect_remote()),
            Action::ListMarkers => Outcome::Markers(self.repo.markers()?),

            Action::AddTask(text) => {
                self.tasks.add_task(text.clone());
                Outcome::TaskAdded(text)
            }
            Action::ListTasks => {
                Outcome::Tasks(self.tasks.list_tasks().map(String::from).collect())
            }
            Action::SyncCalendar => Outcome::Status(self.tasks.sync_calendar()),

            Action::SaveNote { date, content } => {
                self.notes.save_note(&date, &content)?;
                Outcome::NoteSaved { date }
            }
            Action::LoadNote(date) => {
                let content = self.notes.load_note(&date)?;
                Outcome::Note { date, content }
            }
            Action::ListNotes => Outcome::NoteDates(self.notes.dates()?),

            Action::ShowConfig => Outcome::Config(self.config.state().clone()),
            Action::SetLanguage(language) => {
                self.config.set_language(&language)?;
                Outcome::ConfigSaved(self.config.state().clone())
            }
            Action::SetTheme(theme) => {
                self.config.set_theme(theme)?;
                Outcome::ConfigSaved(self.config.state().clone())
            }
            Action::SetStorageLimit(limit) => {
                self.config.set_storage_limit(limit)?;
                Outcome::ConfigSaved(self.config.state().clone())
            }

            Action::ShowReminders => Outcome::Reminders(self.reminders.clone()),
        };

        Ok(outcome)
    }
}
