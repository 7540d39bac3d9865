//! Core types for ColGit.
//!
//! - [`config`]: persisted settings (language, theme, storage limit)
//! - [`versioning`]: commit and branch marker directories
//! - [`notes`] and [`tasks`]: per-date notes on disk, session tasks in memory
//! - [`session`]: the [`session::Action`] dispatcher front ends drive

pub mod config;
pub mod error;
pub mod i18n;
pub mod notes;
pub mod paths;
pub mod reminders;
pub mod session;
pub mod status;
pub mod tasks;
pub mod theme;
pub mod versioning;

mod storage;

pub use error::{ColGitError, ColGitResult};
pub use storage::validate_segment;
