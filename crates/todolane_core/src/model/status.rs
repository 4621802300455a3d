//! Todo lifecycle status.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Lifecycle state shared by tasks and projects.
///
/// Wire names use the underscore form (`UP_NEXT`); display text uses a
/// space (`UP NEXT`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    /// Created but not started.
    #[default]
    Todo,
    /// Queued to be worked on next.
    UpNext,
    /// Work is in progress.
    InProgress,
    /// Completed.
    Done,
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::Todo => "TODO",
            Self::UpNext => "UP NEXT",
            Self::InProgress => "IN PROGRESS",
            Self::Done => "DONE",
        };
        f.write_str(text)
    }
}
