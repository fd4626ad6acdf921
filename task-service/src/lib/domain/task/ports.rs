use async_trait::async_trait;

use crate::domain::task::models::Task;
use crate::domain::task::models::TaskDraft;
use crate::domain::task::models::TaskId;
use crate::task::errors::TaskError;

/// Port for task operations.
#[async_trait]
pub trait TaskServicePort: Send + Sync + 'static {
    async fn list_tasks(&self) -> Result<Vec<Task>, TaskError>;

    /// # Errors
    /// * `NotFound` - Task does not exist
    async fn get_task(&self, id: TaskId) -> Result<Task, TaskError>;

    async fn create_task(&self, draft: TaskDraft) -> Result<Task, TaskError>;

    /// Replace every field of an existing task, keeping its ID.
    ///
    /// # Errors
    /// * `NotFound` - Task does not exist
    async fn update_task(&self, id: TaskId, draft: TaskDraft) -> Result<Task, TaskError>;

    /// # Errors
    /// * `NotFound` - Task does not exist
    async fn delete_task(&self, id: TaskId) -> Result<(), TaskError>;
}

/// Persistence operations for tasks.
#[async_trait]
pub trait TaskRepository: Send + Sync + 'static {
    /// Retrieve all tasks ordered by ID.
    async fn list_all(&self) -> Result<Vec<Task>, TaskError>;

    /// # Returns
    /// Optional task (None if not found)
    async fn find_by_id(&self, id: TaskId) -> Result<Option<Task>, TaskError>;

    /// Persist a new task under the next sequential ID.
    async fn create(&self, draft: TaskDraft) -> Result<Task, TaskError>;

    /// # Errors
    /// * `NotFound` - Task does not exist
    async fn update(&self, task: Task) -> Result<Task, TaskError>;

    /// # Errors
    /// * `NotFound` - Task does not exist
    async fn delete(&self, id: TaskId) -> Result<(), TaskError>;
}
