//! Leaf task entity.
//!
//! # Responsibility
//! - Own the tag collection and the directly-settable progress and time
//!   estimate of a single work item.
//! - Apply the description mini-language (`parse::metadata`) atomically on
//!   every description mutation.
//!
//! # Invariants
//! - The description is never empty after construction or mutation.
//! - Tag names are unique; enumeration is most-recently-added-first.
//! - Progress stays within `[0, 100]`; the time estimate is never negative.
//! - Equality covers description, due date, priority and status only. Tags,
//!   progress and estimate are excluded; container de-duplication depends on
//!   this exact field subset.

use crate::model::due_date::DueDate;
use crate::model::priority::Priority;
use crate::model::status::Status;
use crate::model::tag::Tag;
use crate::model::{TodoError, TodoResult};
use crate::parse::metadata::{self, MetadataUpdate};
use std::fmt::{Display, Formatter};

/// Leaf to-do item.
#[derive(Debug, Clone)]
pub struct Task {
    description: String,
    priority: Priority,
    status: Status,
    due_date: Option<DueDate>,
    progress: u8,
    estimated_time: u32,
    /// Newest tag first; `tags()` exposes this order directly.
    tags: Vec<Tag>,
}

impl Task {
    /// Creates a task from a raw description.
    ///
    /// The raw string goes through the same metadata parse as
    /// [`Task::set_description`], so `"pay rent ## urgent; tomorrow"` builds
    /// an urgent task due tomorrow with description `"pay rent "`.
    pub fn new(raw: impl Into<String>) -> TodoResult<Self> {
        let mut task = Self {
            description: String::new(),
            priority: Priority::default(),
            status: Status::default(),
            due_date: None,
            progress: 0,
            estimated_time: 0,
            tags: Vec::new(),
        };
        task.set_description(raw)?;
        Ok(task)
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn due_date(&self) -> Option<DueDate> {
        self.due_date
    }

    /// Percentage of completion, within `[0, 100]`.
    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn estimated_time_to_complete(&self) -> u32 {
        self.estimated_time
    }

    /// Tags in enumeration order: most recently added first.
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Replaces the description, consuming inline metadata.
    ///
    /// The raw string splits on the first `"##"`. Everything before the
    /// delimiter becomes the description verbatim (trailing whitespace
    /// preserved); everything after is parsed as `;`-separated metadata
    /// tokens and applied in one step. Without a delimiter the whole string
    /// is the description and nothing else changes.
    ///
    /// # Errors
    /// - `EmptyInput` when the raw string, or the description segment in
    ///   front of a delimiter, is empty. The task is left unchanged.
    pub fn set_description(&mut self, raw: impl Into<String>) -> TodoResult<()> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(TodoError::EmptyInput("description"));
        }
        if let (head, Some(segment)) = metadata::split_description(&raw) {
            if head.is_empty() {
                return Err(TodoError::EmptyInput("description"));
            }
            let update = metadata::parse_metadata(segment);
            self.description = head.to_string();
            self.apply_metadata(update);
            return Ok(());
        }
        self.description = raw;
        Ok(())
    }

    fn apply_metadata(&mut self, update: MetadataUpdate) {
        if update.important {
            self.priority.important = true;
        }
        if update.urgent {
            self.priority.urgent = true;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(due_date) = update.due_date {
            self.due_date = Some(due_date);
        }
        for name in update.tags {
            // Parser tokens are trimmed and non-empty.
            self.insert_tag(name);
        }
    }

    /// Adds a tag unless one with the same name exists.
    ///
    /// # Errors
    /// - `EmptyInput` when the name is empty.
    pub fn add_tag(&mut self, name: &str) -> TodoResult<()> {
        if name.is_empty() {
            return Err(TodoError::EmptyInput("tag name"));
        }
        self.insert_tag(name.to_string());
        Ok(())
    }

    fn insert_tag(&mut self, name: String) {
        if self.tags.iter().any(|tag| tag.name() == name) {
            return;
        }
        self.tags.insert(0, Tag::new_unchecked(name));
    }

    /// Removes the uniquely-named tag; no-op when absent.
    ///
    /// # Errors
    /// - `EmptyInput` when the name is empty.
    pub fn remove_tag(&mut self, name: &str) -> TodoResult<()> {
        if name.is_empty() {
            return Err(TodoError::EmptyInput("tag name"));
        }
        self.tags.retain(|tag| tag.name() != name);
        Ok(())
    }

    /// Membership test by tag name.
    ///
    /// # Errors
    /// - `EmptyInput` when the name is empty.
    pub fn contains_tag(&self, name: &str) -> TodoResult<bool> {
        if name.is_empty() {
            return Err(TodoError::EmptyInput("tag name"));
        }
        Ok(self.tags.iter().any(|tag| tag.name() == name))
    }

    pub fn set_priority(&mut self, priority: Priority) {
        self.priority = priority;
    }

    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    pub fn set_due_date(&mut self, due_date: Option<DueDate>) {
        self.due_date = due_date;
    }

    /// Sets the percentage of completion.
    ///
    /// # Errors
    /// - `InvalidProgress` when `value` is outside `[0, 100]`.
    pub fn set_progress(&mut self, value: i32) -> TodoResult<()> {
        if !(0..=100).contains(&value) {
            return Err(TodoError::InvalidProgress(value));
        }
        self.progress = value as u8;
        Ok(())
    }

    /// Sets the time estimate.
    ///
    /// # Errors
    /// - `NegativeInput` when `value` is below zero.
    pub fn set_estimated_time_to_complete(&mut self, value: i32) -> TodoResult<()> {
        if value < 0 {
            return Err(TodoError::NegativeInput(value));
        }
        self.estimated_time = value as u32;
        Ok(())
    }
}

impl PartialEq for Task {
    fn eq(&self, other: &Self) -> bool {
        self.description == other.description
            && self.due_date == other.due_date
            && self.priority == other.priority
            && self.status == other.status
    }
}

impl Eq for Task {}

impl Display for Task {
    /// Fixed multi-line presentation block, preceded by a newline.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let due_date = self
            .due_date
            .map(|due| due.to_string())
            .unwrap_or_default();
        let tags = self
            .tags
            .iter()
            .map(Tag::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        write!(
            f,
            "\n{{\n\tDescription: {}\n\tDue date: {}\n\tStatus: {}\n\tPriority: {}\n\tTags: {}\n}}",
            self.description, due_date, self.status, self.priority, tags
        )
    }
}
