//! Read-only access to the reminders file.
//!
//! The file is loaded if present and otherwise left alone; nothing writes it.

use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{ColGitError, ColGitResult};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Reminders {
    entries: Map<String, Value>,
}

impl Reminders {
    pub fn load(path: &Path) -> ColGitResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let corrupt = |reason: String| ColGitError::CorruptReminders {
            path: path.to_path_buf(),
            reason,
        };

        match serde_json::from_str::<Value>(&content).map_err(|e| corrupt(e.to_string()))? {
            Value::Object(entries) => Ok(Reminders { entries }),
            _ => Err(corrupt("expected a JSON object".into())),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let reminders = Reminders::load(&dir.path().join("ColGit_Reminders.json")).unwrap();
        assert!(reminders.is_empty());
    }

    #[test]
    fn test_open_ended_object() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ColGit_Reminders.json");
        std::fs::write(&path, r#"{"3/20/25": ["dentist"], "misc": {"a": 1}}"#).unwrap();

        let reminders = Reminders::load(&path).unwrap();
        assert_eq!(reminders.len(), 2);
        assert_eq!(reminders.get("3/20/25"), Some(&serde_json::json!(["dentist"])));
        assert_eq!(reminders.keys().collect::<Vec<_>>(), vec!["3/20/25", "misc"]);
    }

    #[test]
    fn test_non_object_is_corrupt() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ColGit_Reminders.json");

        for content in ["[1, 2]", "nope"] {
            std::fs::write(&path, content).unwrap();
            assert!(matches!(
                Reminders::load(&path),
                Err(ColGitError::CorruptReminders { .. })
            ));
        }
    }
}
