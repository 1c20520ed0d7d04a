//! User record model
//!
//! The full persisted state for one user: a name plus an ordered list of
//! objectives, each holding an ordered list of tasks. Objectives and tasks
//! are addressed by 1-based ordinal position, so deleting or reordering
//! shifts subsequent ordinals.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single task under an objective
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Task title, unique within its objective
    pub title: String,

    /// Free-form due date text
    pub due_date: String,
}

impl Task {
    /// Create a new task
    pub fn new(title: impl Into<String>, due_date: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            due_date: due_date.into(),
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (due {})", self.title, self.due_date)
    }
}

/// An objective with its ordered task list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Objective {
    /// Objective title, unique within a record
    pub title: String,

    /// Ordered tasks; ordinal addressing is 1-based
    pub tasks: Vec<Task>,
}

impl Objective {
    /// Create a new objective with no tasks
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            tasks: Vec::new(),
        }
    }

    /// Check whether a task with this exact title exists (case-sensitive)
    pub fn has_task(&self, title: &str) -> bool {
        self.tasks.iter().any(|t| t.title == title)
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// The full persisted state for one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Identity; the record file is named after this field
    pub user_name: String,

    /// Ordered objectives; ordinal addressing is 1-based
    pub objectives: Vec<Objective>,
}

impl UserRecord {
    /// Create a fresh record with no objectives
    pub fn new(user_name: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            objectives: Vec::new(),
        }
    }

    /// Check whether an objective with this exact title exists (case-sensitive)
    pub fn has_objective(&self, title: &str) -> bool {
        self.objectives.iter().any(|o| o.title == title)
    }

    /// Get the objective at a 1-based ordinal, if in range
    pub fn objective(&self, ordinal: usize) -> Option<&Objective> {
        ordinal.checked_sub(1).and_then(|i| self.objectives.get(i))
    }

    /// Get the objective at a 1-based ordinal mutably, if in range
    pub fn objective_mut(&mut self, ordinal: usize) -> Option<&mut Objective> {
        ordinal
            .checked_sub(1)
            .and_then(|i| self.objectives.get_mut(i))
    }
}
