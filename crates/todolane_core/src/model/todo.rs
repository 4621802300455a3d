//! Tagged-variant todo entity.
//!
//! The shared accessor surface dispatches by variant; task-only mutators
//! stay on [`Task`] and are reached through `as_task_mut`.

use crate::model::due_date::DueDate;
use crate::model::priority::Priority;
use crate::model::project::Project;
use crate::model::status::Status;
use crate::model::task::Task;

/// Either a leaf [`Task`] or a composite [`Project`].
///
/// Equality dispatches to the variant's own contract (tasks compare
/// description/due date/priority/status, projects compare description only);
/// a task never equals a project.
#[derive(Debug, Clone)]
pub enum Todo {
    Task(Task),
    Project(Project),
}

impl Todo {
    pub fn description(&self) -> &str {
        match self {
            Self::Task(task) => task.description(),
            Self::Project(project) => project.description(),
        }
    }

    pub fn priority(&self) -> Priority {
        match self {
            Self::Task(task) => task.priority(),
            Self::Project(project) => project.priority(),
        }
    }

    pub fn status(&self) -> Status {
        match self {
            Self::Task(task) => task.status(),
            Self::Project(project) => project.status(),
        }
    }

    pub fn due_date(&self) -> Option<DueDate> {
        match self {
            Self::Task(task) => task.due_date(),
            Self::Project(project) => project.due_date(),
        }
    }

    /// Percentage of completion: stored for tasks, derived from children for
    /// projects.
    pub fn progress(&self) -> u8 {
        match self {
            Self::Task(task) => task.progress(),
            Self::Project(project) => project.progress(),
        }
    }

    /// Time estimate: stored for tasks, a recursive sum for projects.
    pub fn estimated_time_to_complete(&self) -> u32 {
        match self {
            Self::Task(task) => task.estimated_time_to_complete(),
            Self::Project(project) => project.estimated_time_to_complete(),
        }
    }

    pub fn is_task(&self) -> bool {
        matches!(self, Self::Task(_))
    }

    pub fn is_project(&self) -> bool {
        matches!(self, Self::Project(_))
    }

    pub fn as_task(&self) -> Option<&Task> {
        match self {
            Self::Task(task) => Some(task),
            Self::Project(_) => None,
        }
    }

    pub fn as_task_mut(&mut self) -> Option<&mut Task> {
        match self {
            Self::Task(task) => Some(task),
            Self::Project(_) => None,
        }
    }

    pub fn as_project(&self) -> Option<&Project> {
        match self {
            Self::Task(_) => None,
            Self::Project(project) => Some(project),
        }
    }

    pub fn as_project_mut(&mut self) -> Option<&mut Project> {
        match self {
            Self::Task(_) => None,
            Self::Project(project) => Some(project),
        }
    }
}

impl From<Task> for Todo {
    fn from(value: Task) -> Self {
        Self::Task(value)
    }
}

impl From<Project> for Todo {
    fn from(value: Project) -> Self {
        Self::Project(value)
    }
}

impl PartialEq for Todo {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Task(a), Self::Task(b)) => a == b,
            (Self::Project(a), Self::Project(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Todo {}
