//! One plain-text note per calendar date.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::ColGitResult;
use crate::storage::{validate_segment, write_atomic};

const NOTE_EXTENSION: &str = "txt";

pub struct NoteStore {
    dir: PathBuf,
}

impl NoteStore {
    /// The directory is created lazily on the first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        NoteStore { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, date: &str) -> ColGitResult<PathBuf> {
        let date = validate_segment(date)?;
        Ok(self.dir.join(format!("{date}.{NOTE_EXTENSION}")))
    }

    /// Store `content` as the note for `date`, replacing any previous note.
    pub fn save_note(&self, date: &str, content: &str) -> ColGitResult<PathBuf> {
        let path = self.path_for(date)?;
        write_atomic(&path, content)?;

        tracing::info!(path = %path.display(), bytes = content.len(), "note saved");
        Ok(path)
    }

    /// The note for `date`, or an empty string if there is none.
    pub fn load_note(&self, date: &str) -> ColGitResult<String> {
        let path = self.path_for(date)?;
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(String::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Date keys that have a note, sorted.
    pub fn dates(&self) -> ColGitResult<Vec<String>> {
        let entries = match std::fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut dates: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && path.extension().is_some_and(|e| e == NOTE_EXTENSION))
            .filter_map(|path| path.file_stem().and_then(|s| s.to_str()).map(String::from))
            .collect();

        dates.sort();
        Ok(dates)
    }
}
