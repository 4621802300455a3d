//! Domain model for the to-do hierarchy.
//!
//! # Responsibility
//! - Define the leaf (`Task`) and composite (`Project`) entities and the
//!   tagged-variant `Todo` that unifies them.
//! - Enforce construction and mutation invariants at the entity boundary.
//!
//! # Invariants
//! - A description is never empty after construction or mutation.
//! - Project children are duplicate-free by `Todo` equality and keep
//!   insertion order.
//! - Progress is always within `[0, 100]`; time estimates are never negative.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod due_date;
pub mod prioritized;
pub mod priority;
pub mod project;
pub mod status;
pub mod tag;
pub mod task;
pub mod todo;

pub type TodoResult<T> = Result<T, TodoError>;

/// Validation error raised by entity constructors and setters.
///
/// Every setter fully validates before mutating, so a returned error means
/// the entity is unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoError {
    /// A required string argument was empty. Carries the argument name.
    EmptyInput(&'static str),
    /// A progress value outside `[0, 100]`.
    InvalidProgress(i32),
    /// A time estimate below zero.
    NegativeInput(i32),
}

impl Display for TodoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput(argument) => write!(f, "{argument} must not be empty"),
            Self::InvalidProgress(value) => {
                write!(f, "progress must be within 0..=100, got {value}")
            }
            Self::NegativeInput(value) => {
                write!(f, "time estimate must not be negative, got {value}")
            }
        }
    }
}

impl Error for TodoError {}
