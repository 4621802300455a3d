//! Uniquely-named task tag.

use crate::model::{TodoError, TodoResult};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Named label attached to a task. Uniqueness is by name, enforced by the
/// owning task, not by this type.
///
/// Serialized as `{"name": ...}` in the task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    name: String,
}

impl Tag {
    /// Creates a tag, rejecting empty names.
    pub fn new(name: impl Into<String>) -> TodoResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(TodoError::EmptyInput("tag name"));
        }
        Ok(Self { name })
    }

    /// Builds a tag from a name already validated as non-empty.
    pub(crate) fn new_unchecked(name: String) -> Self {
        debug_assert!(!name.is_empty());
        Self { name }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.name)
    }
}
