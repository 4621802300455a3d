//! Core domain logic for Todolane.
//! This crate is the single source of truth for to-do business invariants.

pub mod logging;
pub mod model;
pub mod parse;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::due_date::DueDate;
pub use model::prioritized::PrioritizedIter;
pub use model::priority::{Priority, PriorityClass};
pub use model::project::Project;
pub use model::status::Status;
pub use model::tag::Tag;
pub use model::task::Task;
pub use model::todo::Todo;
pub use model::{TodoError, TodoResult};
pub use parse::metadata::{
    parse_metadata, relative_due_date, split_description, MetadataUpdate,
};
pub use store::codec::{
    decode_task, encode_task, tasks_from_json, tasks_to_json, CodecError, TaskRecord,
};
pub use store::task_file::{read_tasks, write_tasks};
pub use store::StoreError;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
