//! Result of placeholder operations.

/// What a placeholder operation reports back instead of doing work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The feature exists in the interface but does nothing yet. Carries the
    /// translation key for the message to show.
    NotImplemented(&'static str),
}

impl Status {
    pub fn message_key(&self) -> &'static str {
        match self {
            Status::NotImplemented(key) => key,
        }
    }
}
