//! Priority flags and classification.
//!
//! # Responsibility
//! - Keep the raw (important, urgent) flag pair attached to every todo.
//! - Classify the pair into one of four ordered priority classes.
//!
//! # Invariants
//! - Classification is pure: same flags, same class, no side effects.
//! - `PriorityClass::ALL` is the traversal order used by prioritized
//!   iteration and must stay `Critical, Important, Urgent, Standard`.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Mutable (important, urgent) flag pair carried by every todo.
///
/// Serialized as `{"important": bool, "urgent": bool}` in the task record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Priority {
    pub important: bool,
    pub urgent: bool,
}

impl Priority {
    /// Creates the default priority (neither important nor urgent).
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifies this flag pair into its priority class.
    pub fn classify(self) -> PriorityClass {
        match (self.important, self.urgent) {
            (true, true) => PriorityClass::Critical,
            (true, false) => PriorityClass::Important,
            (false, true) => PriorityClass::Urgent,
            (false, false) => PriorityClass::Standard,
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let label = match (self.important, self.urgent) {
            (true, true) => "IMPORTANT & URGENT",
            (true, false) => "IMPORTANT",
            (false, true) => "URGENT",
            (false, false) => "DEFAULT",
        };
        f.write_str(label)
    }
}

/// Ordered priority class derived from the flag pair.
///
/// `Critical` outranks `Important` outranks `Urgent` outranks `Standard`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PriorityClass {
    Critical,
    Important,
    Urgent,
    Standard,
}

impl PriorityClass {
    /// All classes in traversal order, highest priority first.
    pub const ALL: [PriorityClass; 4] = [
        PriorityClass::Critical,
        PriorityClass::Important,
        PriorityClass::Urgent,
        PriorityClass::Standard,
    ];
}
