//! Sparse task updates and the ordered mutations derived from them.

use super::{TaskDomainError, TaskName, TaskStatus};
use serde::{Deserialize, Serialize};

/// Partial update request for a task.
///
/// Each field is either present or absent. Only `None` and the empty string
/// mean "leave unchanged"; any other value is present and gets validated, so
/// a whitespace-only status is an invalid status and a whitespace-only name
/// is an empty name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPatch {
    /// Replacement display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Replacement status in its storage spelling (`START` or `END`).
    #[serde(default)]
    pub status: Option<String>,
}

impl TaskPatch {
    /// Creates a patch with no fields set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the replacement name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the replacement status.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Validates the patch and builds the mutation it describes.
    ///
    /// Rules are checked in order: a patch with no present field is rejected,
    /// then a present status must be exactly `START` or `END`. The current
    /// stored values are never consulted, so a name equal to the stored one
    /// still yields an assignment.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyPatch`] when neither field is present,
    /// [`TaskDomainError::InvalidStatus`] when the status is not a member of
    /// [`TaskStatus`], and the [`TaskName::new`] error for a present name that
    /// is blank or too long.
    pub fn validate(&self) -> Result<TaskMutation, TaskDomainError> {
        let name = present(self.name.as_deref());
        let status = present(self.status.as_deref());

        if name.is_none() && status.is_none() {
            return Err(TaskDomainError::EmptyPatch);
        }

        let parsed_status = status
            .map(TaskStatus::try_from)
            .transpose()
            .map_err(|err| TaskDomainError::InvalidStatus(err.0))?;
        let parsed_name = name.map(TaskName::new).transpose()?;

        let mut assignments = Vec::with_capacity(2);
        if let Some(task_name) = parsed_name {
            assignments.push(TaskAssignment::Name(task_name));
        }
        if let Some(task_status) = parsed_status {
            assignments.push(TaskAssignment::Status(task_status));
        }
        Ok(TaskMutation { assignments })
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|raw| !raw.is_empty())
}

/// Task field targeted by an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskField {
    /// The display name.
    Name,
    /// The lifecycle status.
    Status,
}

/// A single field assignment within a [`TaskMutation`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskAssignment {
    /// Replace the display name.
    Name(TaskName),
    /// Replace the lifecycle status.
    Status(TaskStatus),
}

impl TaskAssignment {
    /// Returns the field this assignment writes.
    #[must_use]
    pub const fn field(&self) -> TaskField {
        match self {
            Self::Name(_) => TaskField::Name,
            Self::Status(_) => TaskField::Status,
        }
    }
}

/// Validated, non-empty, ordered list of assignments.
///
/// Holds at most one assignment per field, name before status. Only
/// [`TaskPatch::validate`] produces values of this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskMutation {
    assignments: Vec<TaskAssignment>,
}

impl TaskMutation {
    /// Returns the assignments in application order.
    #[must_use]
    pub fn assignments(&self) -> &[TaskAssignment] {
        &self.assignments
    }

    /// Returns the replacement name, if assigned.
    #[must_use]
    pub fn name(&self) -> Option<&TaskName> {
        self.assignments.iter().find_map(|assignment| match assignment {
            TaskAssignment::Name(name) => Some(name),
            TaskAssignment::Status(_) => None,
        })
    }

    /// Returns the replacement status, if assigned.
    #[must_use]
    pub fn status(&self) -> Option<TaskStatus> {
        self.assignments.iter().find_map(|assignment| match assignment {
            TaskAssignment::Status(status) => Some(*status),
            TaskAssignment::Name(_) => None,
        })
    }

    /// Returns the number of assignments (one or two).
    #[must_use]
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Always `false`: a mutation carries at least one assignment.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}
