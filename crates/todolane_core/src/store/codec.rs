//! Task wire records and JSON array codec.
//!
//! # Responsibility
//! - Map between `Task` entities and the persisted record shape.
//! - Decode whole task arrays, skipping malformed records wholesale.
//!
//! # Invariants
//! - Every record field is required; `due-date` is required but nullable.
//! - Decoding goes through `Task::new` + setters, so domain invariants hold
//!   for every loaded task.

use crate::model::due_date::DueDate;
use crate::model::priority::Priority;
use crate::model::status::Status;
use crate::model::tag::Tag;
use crate::model::task::Task;
use crate::model::TodoError;
use log::warn;
use serde::{Deserialize, Deserializer, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CodecResult<T> = Result<T, CodecError>;

/// Error for record encode/decode operations.
#[derive(Debug)]
pub enum CodecError {
    /// The surrounding JSON is malformed or a record has the wrong shape.
    Json(serde_json::Error),
    /// The due-date fields do not name a real calendar instant.
    InvalidDueDate(DueDateRecord),
    /// The record violates a domain invariant (empty description or tag).
    Domain(TodoError),
}

impl Display for CodecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(err) => write!(f, "{err}"),
            Self::InvalidDueDate(record) => write!(
                f,
                "invalid due date {:04}-{:02}-{:02} {:02}:{:02}",
                record.year, record.month, record.day, record.hour, record.minute
            ),
            Self::Domain(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CodecError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::InvalidDueDate(_) => None,
            Self::Domain(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for CodecError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<TodoError> for CodecError {
    fn from(value: TodoError) -> Self {
        Self::Domain(value)
    }
}

/// Persisted shape of one task.
///
/// All fields are required. `due-date` must be present but may be `null`;
/// an absent field rejects the record. Unknown extra fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub description: String,
    pub tags: Vec<Tag>,
    #[serde(rename = "due-date", deserialize_with = "required_nullable")]
    pub due_date: Option<DueDateRecord>,
    pub priority: Priority,
    pub status: Status,
}

/// Calendar fields of a persisted due date. Month is 1..=12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DueDateRecord {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl From<DueDate> for DueDateRecord {
    fn from(value: DueDate) -> Self {
        Self {
            year: value.year(),
            month: value.month(),
            day: value.day(),
            hour: value.hour(),
            minute: value.minute(),
        }
    }
}

// serde treats a missing `Option` field as `None`; routing through
// `deserialize_with` (and no `default`) makes the field's presence
// mandatory while still accepting `null`.
fn required_nullable<'de, D>(deserializer: D) -> Result<Option<DueDateRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<DueDateRecord>::deserialize(deserializer)
}

/// Builds the wire record from a task's accessor surface.
///
/// Tags serialize in enumeration order (most recently added first).
pub fn encode_task(task: &Task) -> TaskRecord {
    TaskRecord {
        description: task.description().to_string(),
        tags: task.tags().to_vec(),
        due_date: task.due_date().map(DueDateRecord::from),
        priority: task.priority(),
        status: task.status(),
    }
}

/// Rebuilds a task from a record via constructor and setters.
///
/// # Errors
/// - `Domain` when the description or a tag name is empty.
/// - `InvalidDueDate` when the calendar fields are impossible.
pub fn decode_task(record: &TaskRecord) -> CodecResult<Task> {
    let mut task = Task::new(record.description.as_str())?;
    task.set_priority(record.priority);
    task.set_status(record.status);
    if let Some(fields) = record.due_date {
        let due_date =
            DueDate::from_ymd_hm(fields.year, fields.month, fields.day, fields.hour, fields.minute)
                .ok_or(CodecError::InvalidDueDate(fields))?;
        task.set_due_date(Some(due_date));
    }
    for tag in &record.tags {
        task.add_tag(tag.name())?;
    }
    Ok(task)
}

/// Renders a task list as the persisted JSON array.
pub fn tasks_to_json(tasks: &[Task]) -> CodecResult<String> {
    let records: Vec<TaskRecord> = tasks.iter().map(encode_task).collect();
    Ok(serde_json::to_string(&records)?)
}

/// Parses the persisted JSON array back into tasks.
///
/// The input must be a JSON array; anything else fails outright. Each
/// element that is not a valid record, or whose record violates a domain
/// invariant, is skipped wholesale with a warn event while valid siblings
/// still load.
pub fn tasks_from_json(input: &str) -> CodecResult<Vec<Task>> {
    let values: Vec<serde_json::Value> = serde_json::from_str(input)?;
    let mut tasks = Vec::with_capacity(values.len());
    for value in values {
        let decoded = serde_json::from_value::<TaskRecord>(value)
            .map_err(CodecError::from)
            .and_then(|record| decode_task(&record));
        match decoded {
            Ok(task) => tasks.push(task),
            Err(err) => {
                warn!("event=task_record_skipped module=store status=warn reason={err}");
            }
        }
    }
    Ok(tasks)
}

#[cfg(test)]
mod tests {
    use super::{encode_task, DueDateRecord};
    use crate::model::due_date::DueDate;
    use crate::model::task::Task;

    #[test]
    fn record_serializes_with_hyphenated_due_date_key() {
        let mut task = Task::new("write report").expect("non-empty description");
        task.set_due_date(DueDate::from_ymd_hm(2026, 8, 23, 9, 30));
        task.add_tag("work").expect("non-empty tag");

        let json = serde_json::to_value(encode_task(&task)).expect("record serializes");
        assert_eq!(json["description"], "write report");
        assert_eq!(json["due-date"]["year"], 2026);
        assert_eq!(json["due-date"]["month"], 8);
        assert_eq!(json["priority"]["important"], false);
        assert_eq!(json["status"], "TODO");
        assert_eq!(json["tags"][0]["name"], "work");
    }

    #[test]
    fn due_date_record_mirrors_due_date_fields() {
        let due = DueDate::from_ymd_hm(2026, 12, 31, 23, 59).expect("valid calendar fields");
        let record = DueDateRecord::from(due);
        assert_eq!(record.year, 2026);
        assert_eq!(record.month, 12);
        assert_eq!(record.day, 31);
        assert_eq!(record.hour, 23);
        assert_eq!(record.minute, 59);
    }

    #[test]
    fn null_due_date_encodes_as_json_null() {
        let task = Task::new("no deadline").expect("non-empty description");
        let json = serde_json::to_value(encode_task(&task)).expect("record serializes");
        assert!(json["due-date"].is_null());
    }
}
