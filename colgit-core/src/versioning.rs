//! Marker-directory "version control".
//!
//! A commit is an empty directory named after the second it was made in, a
//! branch is an empty directory named after the user's label. Nothing else is
//! recorded: there is no content, history or branch pointer.

use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime, Timelike};

use crate::error::{ColGitError, ColGitResult};
use crate::status::Status;
use crate::storage::validate_segment;

const COMMIT_PREFIX: &str = "commit_";
const BRANCH_PREFIX: &str = "branch_";
const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMarker {
    pub timestamp: NaiveDateTime,
    pub path: PathBuf,
}

impl CommitMarker {
    pub fn dir_name(timestamp: &NaiveDateTime) -> String {
        format!("{}{}", COMMIT_PREFIX, timestamp.format(TIMESTAMP_FORMAT))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchMarker {
    pub name: String,
    pub path: PathBuf,
}

impl BranchMarker {
    pub fn dir_name(name: &str) -> String {
        format!("{}{}", BRANCH_PREFIX, name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Marker {
    Commit(CommitMarker),
    Branch(BranchMarker),
}

impl Marker {
    pub fn path(&self) -> &Path {
        match self {
            Marker::Commit(c) => &c.path,
            Marker::Branch(b) => &b.path,
        }
    }

    fn from_dir_name(name: &str, path: PathBuf) -> Option<Marker> {
        if let Some(stamp) = name.strip_prefix(COMMIT_PREFIX) {
            let timestamp = NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT).ok()?;
            return Some(Marker::Commit(CommitMarker { timestamp, path }));
        }

        let branch = name.strip_prefix(BRANCH_PREFIX)?;
        Some(Marker::Branch(BranchMarker {
            name: branch.to_string(),
            path,
        }))
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Marker::Commit(c) => write!(f, "commit {}", c.timestamp.format("%Y-%m-%d %H:%M:%S")),
            Marker::Branch(b) => write!(f, "branch {}", b.name),
        }
    }
}

pub struct Repository {
    root: PathBuf,
}

impl Repository {
    /// Open the repository at `root`, creating the directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> ColGitResult<Self> {
        let repo = Repository { root: root.into() };
        repo.ensure_root()?;
        Ok(repo)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_root(&self) -> ColGitResult<()> {
        std::fs::create_dir_all(&self.root)?;
        Ok(())
    }

    /// Record a commit marker for the current local second.
    pub fn commit(&self) -> ColGitResult<CommitMarker> {
        self.commit_at(Local::now().naive_local())
    }

    /// Record a commit marker for `at`, truncated to whole seconds.
    ///
    /// Two commits in the same second map to the same directory, so the
    /// second one fails with [`ColGitError::DuplicateCommit`].
    pub fn commit_at(&self, at: NaiveDateTime) -> ColGitResult<CommitMarker> {
        let dir_name = CommitMarker::dir_name(&at);
        let path = self.create_marker_dir(&dir_name, ColGitError::DuplicateCommit)?;

        let timestamp = at.with_nanosecond(0).unwrap_or(at);

        tracing::info!(path = %path.display(), "commit marker created");
        Ok(CommitMarker { timestamp, path })
    }

    pub fn branch(&self, name: &str) -> ColGitResult<BranchMarker> {
        let name = validate_segment(name)?;
        let dir_name = BranchMarker::dir_name(name);
        let path = self.create_marker_dir(&dir_name, ColGitError::DuplicateBranch)?;

        tracing::info!(path = %path.display(), "branch marker created");
        Ok(BranchMarker {
            name: name.to_string(),
            path,
        })
    }

    pub fn merge(&self) -> Status {
        Status::NotImplemented("merge_not_implemented")
    }

    pub fn connect_remote(&self) -> Status {
        Status::NotImplemented("github_not_implemented")
    }

    /// Existing markers: commits oldest first, then branches by name.
    /// Entries that aren't marker directories are ignored.
    pub fn markers(&self) -> ColGitResult<Vec<Marker>> {
        let entries = match std::fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut commits = Vec::new();
        let mut branches = Vec::new();

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!(error = %e, "skipping unreadable repository entry");
                    continue;
                }
            };
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }
            let Some(name) = path.file_name().and_then(|n| n.to_str()).map(String::from) else {
                continue;
            };

            match Marker::from_dir_name(&name, path) {
                Some(Marker::Commit(c)) => commits.push(c),
                Some(Marker::Branch(b)) => branches.push(b),
                None => {}
            }
        }

        commits.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
        branches.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(commits
            .into_iter()
            .map(Marker::Commit)
            .chain(branches.into_iter().map(Marker::Branch))
            .collect())
    }

    fn create_marker_dir(
        &self,
        dir_name: &str,
        duplicate: fn(String) -> ColGitError,
    ) -> ColGitResult<PathBuf> {
        self.ensure_root()?;

        let path = self.root.join(dir_name);
        match std::fs::create_dir(&path) {
            Ok(()) => Ok(path),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => Err(duplicate(dir_name.to_string())),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn at(h: u32, m: u32, s: u32, milli: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 20)
            .unwrap()
            .and_hms_milli_opt(h, m, s, milli)
            .unwrap()
    }

    fn open_repo(dir: &TempDir) -> Repository {
        Repository::open(dir.path().join("ColGit_Repo")).unwrap()
    }

    #[test]
    fn test_open_creates_root() {
        let dir = TempDir::new().unwrap();
        let repo = open_repo(&dir);
        assert!(repo.root().is_dir());
    }

    #[test]
    fn test_commit_creates_timestamped_dir() {
        let dir = TempDir::new().unwrap();
        let repo = open_repo(&dir);

        let marker = repo.commit_at(at(15, 4, 5, 0)).unwrap();
        assert_eq!(marker.path, repo.root().join("commit_20250320_150405"));
        assert!(marker.path.is_dir());
        assert_eq!(std::fs::read_dir(&marker.path).unwrap().count(), 0);
    }

    #[test]
    fn test_commit_in_same_second_collides() {
        let dir = TempDir::new().unwrap();
        let repo = open_repo(&dir);

        repo.commit_at(at(9, 0, 0, 100)).unwrap();
        let err = repo.commit_at(at(9, 0, 0, 900)).unwrap_err();
        assert!(matches!(err, ColGitError::DuplicateCommit(name) if name == "commit_20250320_090000"));

        assert!(repo.commit_at(at(9, 0, 1, 0)).is_ok());
    }

    #[test]
    fn test_commit_now() {
        let dir = TempDir::new().unwrap();
        let repo = open_repo(&dir);
        let marker = repo.commit().unwrap();
        assert!(marker.path.is_dir());
    }

    #[test]
    fn test_commit_recreates_missing_root() {
        let dir = TempDir::new().unwrap();
        let repo = open_repo(&dir);
        std::fs::remove_dir(repo.root()).unwrap();

        assert!(repo.commit_at(at(10, 0, 0, 0)).is_ok());
    }

    #[test]
    fn test_branch_and_duplicate() {
        let dir = TempDir::new().unwrap();
        let repo = open_repo(&dir);

        let marker = repo.branch("feature-x").unwrap();
        assert_eq!(marker.path, repo.root().join("branch_feature-x"));
        assert!(marker.path.is_dir());

        assert!(matches!(
            repo.branch("feature-x"),
            Err(ColGitError::DuplicateBranch(_))
        ));
    }

    #[test]
    fn test_branch_rejects_path_tricks() {
        let dir = TempDir::new().unwrap();
        let repo = open_repo(&dir);

        for bad in ["", "../escape", "a/b", "..", "what?"] {
            assert!(matches!(
                repo.branch(bad),
                Err(ColGitError::InvalidName { .. })
            ));
        }
        assert!(repo.markers().unwrap().is_empty());
    }

    #[test]
    fn test_placeholders_report_not_implemented() {
        let dir = TempDir::new().unwrap();
        let repo = open_repo(&dir);
        assert_eq!(repo.merge(), Status::NotImplemented("merge_not_implemented"));
        assert_eq!(
            repo.connect_remote(),
            Status::NotImplemented("github_not_implemented")
        );
    }

    #[test]
    fn test_markers_sorted_and_filtered() {
        let dir = TempDir::new().unwrap();
        let repo = open_repo(&dir);

        repo.branch("zeta").unwrap();
        repo.commit_at(at(12, 0, 0, 0)).unwrap();
        repo.branch("alpha").unwrap();
        repo.commit_at(at(8, 30, 0, 0)).unwrap();
        std::fs::create_dir(repo.root().join("commit_garbage")).unwrap();
        std::fs::create_dir(repo.root().join("unrelated")).unwrap();
        std::fs::write(repo.root().join("branch_file"), "").unwrap();

        let rendered: Vec<String> = repo.markers().unwrap().iter().map(|m| m.to_string()).collect();
        assert_eq!(
            rendered,
            vec![
                "commit 2025-03-20 08:30:00",
                "commit 2025-03-20 12:00:00",
                "branch alpha",
                "branch zeta",
            ]
        );
    }
}
