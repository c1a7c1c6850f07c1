//! Application services for task management.

mod lifecycle;

pub use lifecycle::{CreateTaskRequest, TaskService, TaskServiceError, TaskServiceResult};
