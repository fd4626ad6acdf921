use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::task::models::Task;
use crate::domain::task::models::TaskDraft;
use crate::domain::task::models::TaskId;
use crate::task::errors::TaskError;
use crate::task::ports::TaskRepository;
use crate::task::ports::TaskServicePort;

/// Domain service implementation for task operations.
pub struct TaskService<TR>
where
    TR: TaskRepository,
{
    repository: Arc<TR>,
}

impl<TR> TaskService<TR>
where
    TR: TaskRepository,
{
    pub fn new(repository: Arc<TR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<TR> TaskServicePort for TaskService<TR>
where
    TR: TaskRepository,
{
    async fn list_tasks(&self) -> Result<Vec<Task>, TaskError> {
        self.repository.list_all().await
    }

    async fn get_task(&self, id: TaskId) -> Result<Task, TaskError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TaskError::NotFound(id.to_string()))
    }

    async fn create_task(&self, draft: TaskDraft) -> Result<Task, TaskError> {
        let task = self.repository.create(draft).await?;
        tracing::info!(task_id = %task.id, "Task created");
        Ok(task)
    }

    async fn update_task(&self, id: TaskId, draft: TaskDraft) -> Result<Task, TaskError> {
        let task = self.repository.update(Task::from_draft(id, draft)).await?;
        tracing::info!(task_id = %task.id, "Task updated");
        Ok(task)
    }

    async fn delete_task(&self, id: TaskId) -> Result<(), TaskError> {
        self.repository.delete(id).await?;
        tracing::info!(task_id = %id, "Task deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;

    mock! {
        pub TestTaskRepository {}

        #[async_trait]
        impl TaskRepository for TestTaskRepository {
            async fn list_all(&self) -> Result<Vec<Task>, TaskError>;
            async fn find_by_id(&self, id: TaskId) -> Result<Option<Task>, TaskError>;
            async fn create(&self, draft: TaskDraft) -> Result<Task, TaskError>;
            async fn update(&self, task: Task) -> Result<Task, TaskError>;
            async fn delete(&self, id: TaskId) -> Result<(), TaskError>;
        }
    }

    fn draft(title: &str) -> TaskDraft {
        TaskDraft {
            title: title.to_string(),
            description: "This is a test task".to_string(),
            due_date: "2024-08-09".to_string(),
            status: "pending".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_task() {
        let mut repository = MockTestTaskRepository::new();

        repository
            .expect_create()
            .withf(|draft| draft.title == "Test Task")
            .times(1)
            .returning(|draft| Ok(Task::from_draft(TaskId(1), draft)));

        let service = TaskService::new(Arc::new(repository));

        let task = service.create_task(draft("Test Task")).await.unwrap();
        assert_eq!(task.id, TaskId(1));
        assert_eq!(task.status, "pending");
    }

    #[tokio::test]
    async fn test_get_task_not_found() {
        let mut repository = MockTestTaskRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = TaskService::new(Arc::new(repository));

        let result = service.get_task(TaskId(7)).await;
        assert!(matches!(result.unwrap_err(), TaskError::NotFound(id) if id == "7"));
    }

    #[tokio::test]
    async fn test_update_task_keeps_id() {
        let mut repository = MockTestTaskRepository::new();

        repository
            .expect_update()
            .withf(|task| task.id == TaskId(3) && task.title == "Updated Task")
            .times(1)
            .returning(|task| Ok(task));

        let service = TaskService::new(Arc::new(repository));

        let task = service
            .update_task(TaskId(3), draft("Updated Task"))
            .await
            .unwrap();
        assert_eq!(task.id, TaskId(3));
    }

    #[tokio::test]
    async fn test_delete_task_not_found() {
        let mut repository = MockTestTaskRepository::new();

        repository
            .expect_delete()
            .times(1)
            .returning(|id| Err(TaskError::NotFound(id.to_string())));

        let service = TaskService::new(Arc::new(repository));

        let result = service.delete_task(TaskId(9)).await;
        assert!(matches!(result.unwrap_err(), TaskError::NotFound(_)));
    }
}
