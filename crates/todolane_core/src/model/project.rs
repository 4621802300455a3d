//! Composite project entity.
//!
//! # Responsibility
//! - Own an ordered, duplicate-free sequence of child todos.
//! - Derive progress and time estimate from children on every read.
//!
//! # Invariants
//! - Children are unique by `Todo` equality and keep insertion order.
//! - A project never contains itself as a direct child. Transitive
//!   self-containment is *not* checked: inserting a project into its own
//!   descendant would make recursive aggregation diverge, and callers must
//!   avoid it.
//! - Equality is keyed on the description alone; two projects with the same
//!   description are equal regardless of children.

use crate::model::due_date::DueDate;
use crate::model::prioritized::PrioritizedIter;
use crate::model::priority::Priority;
use crate::model::status::Status;
use crate::model::todo::Todo;
use crate::model::{TodoError, TodoResult};

/// Composite to-do grouping tasks and nested projects.
#[derive(Debug, Clone)]
pub struct Project {
    description: String,
    priority: Priority,
    status: Status,
    due_date: Option<DueDate>,
    children: Vec<Todo>,
}

impl Project {
    /// Creates an empty project.
    ///
    /// # Errors
    /// - `EmptyInput` when the description is empty.
    pub fn new(description: impl Into<String>) -> TodoResult<Self> {
        let description = description.into();
        if description.is_empty() {
            return Err(TodoError::EmptyInput("description"));
        }
        Ok(Self {
            description,
            priority: Priority::default(),
            status: Status::default(),
            due_date: None,
            children: Vec::new(),
        })
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

    /// Direct children in insertion order.
    pub fn children(&self) -> &[Todo] {
        &self.children
    }

    /// Replaces the description. Unlike [`crate::Task::set_description`]
    /// this is a plain setter; the metadata mini-language belongs to tasks.
    ///
    /// # Errors
    /// - `EmptyInput` when the description is empty.
    pub fn set_description(&mut self, description: impl Into<String>) -> TodoResult<()> {
        let description = description.into();
        if description.is_empty() {
            return Err(TodoError::EmptyInput("description"));
        }
        self.description = description;
        Ok(())
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

    /// Appends a child unless an equal child is already present or the child
    /// is a project equal to this one (the direct self-containment guard).
    ///
    /// Returns whether the child sequence changed. Idempotent.
    pub fn add(&mut self, todo: impl Into<Todo>) -> bool {
        let todo = todo.into();
        if let Todo::Project(child) = &todo {
            if child == self {
                return false;
            }
        }
        if self.contains(&todo) {
            return false;
        }
        self.children.push(todo);
        true
    }

    /// Removes the child equal to `todo`; no-op when absent.
    ///
    /// Returns whether the child sequence changed. The removed child's own
    /// descendants go with it; there is no cascading bookkeeping.
    pub fn remove(&mut self, todo: &Todo) -> bool {
        match self.children.iter().position(|child| child == todo) {
            Some(index) => {
                self.children.remove(index);
                true
            }
            None => false,
        }
    }

    /// Membership test by `Todo` equality.
    pub fn contains(&self, todo: &Todo) -> bool {
        self.children.iter().any(|child| child == todo)
    }

    /// Count of direct children; does not recurse.
    pub fn number_of_tasks(&self) -> usize {
        self.children.len()
    }

    /// Percentage of completion: floor of the mean of each child's own
    /// progress, recursively through sub-projects. Childless projects are
    /// at 0.
    pub fn progress(&self) -> u8 {
        if self.children.is_empty() {
            return 0;
        }
        let total: u32 = self
            .children
            .iter()
            .map(|child| u32::from(child.progress()))
            .sum();
        (total / self.children.len() as u32) as u8
    }

    /// Recursive sum of the children's time estimates.
    pub fn estimated_time_to_complete(&self) -> u32 {
        self.children
            .iter()
            .map(Todo::estimated_time_to_complete)
            .sum()
    }

    /// True only for a non-empty project whose progress reads 100.
    pub fn is_completed(&self) -> bool {
        self.number_of_tasks() != 0 && self.progress() == 100
    }

    /// Fresh priority-ordered traversal of the current direct children.
    ///
    /// Each call snapshots the class counts anew; independent iterators over
    /// the same project coexist. The iterator borrows the child sequence, so
    /// the children cannot be mutated while one is alive.
    pub fn prioritized(&self) -> PrioritizedIter<'_> {
        PrioritizedIter::new(&self.children)
    }
}

impl PartialEq for Project {
    fn eq(&self, other: &Self) -> bool {
        self.description == other.description
    }
}

impl Eq for Project {}

impl<'a> IntoIterator for &'a Project {
    type Item = &'a Todo;
    type IntoIter = PrioritizedIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.prioritized()
    }
}
