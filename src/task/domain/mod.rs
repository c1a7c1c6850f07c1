//! Domain model for per-user task management.
//!
//! Tasks belong to exactly one owner and move between the `START` and `END`
//! statuses. Updates arrive as sparse patches that are validated into ordered
//! mutations before any store sees them.

mod error;
mod ids;
mod patch;
mod task;

pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::{TaskId, TaskName};
pub use patch::{TaskAssignment, TaskField, TaskMutation, TaskPatch};
pub use task::{PersistedTaskData, Task, TaskStatus};
