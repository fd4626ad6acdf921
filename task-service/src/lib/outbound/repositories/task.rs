use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::task::models::Task;
use crate::domain::task::models::TaskDraft;
use crate::domain::task::models::TaskId;
use crate::domain::task::ports::TaskRepository;
use crate::task::errors::TaskError;

#[derive(Default)]
struct TaskStore {
    tasks: BTreeMap<TaskId, Task>,
    last_id: u64,
}

/// Task storage held in process memory. IDs are never reused.
#[derive(Default)]
pub struct InMemoryTaskRepository {
    store: RwLock<TaskStore>,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn list_all(&self) -> Result<Vec<Task>, TaskError> {
        Ok(self.store.read().await.tasks.values().cloned().collect())
    }

    async fn find_by_id(&self, id: TaskId) -> Result<Option<Task>, TaskError> {
        Ok(self.store.read().await.tasks.get(&id).cloned())
    }

    async fn create(&self, draft: TaskDraft) -> Result<Task, TaskError> {
        let mut store = self.store.write().await;
        store.last_id += 1;

        let task = Task::from_draft(TaskId(store.last_id), draft);
        store.tasks.insert(task.id, task.clone());

        Ok(task)
    }

    async fn update(&self, task: Task) -> Result<Task, TaskError> {
        let mut store = self.store.write().await;

        let slot = store
            .tasks
            .get_mut(&task.id)
            .ok_or(TaskError::NotFound(task.id.to_string()))?;
        *slot = task.clone();

        Ok(task)
    }

    async fn delete(&self, id: TaskId) -> Result<(), TaskError> {
        self.store
            .write()
            .await
            .tasks
            .remove(&id)
            .map(|_| ())
            .ok_or(TaskError::NotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str) -> TaskDraft {
        TaskDraft {
            title: title.to_string(),
            description: "This is a test task".to_string(),
            due_date: "2024-08-09".to_string(),
            status: "pending".to_string(),
        }
    }

    #[tokio::test]
    async fn test_task_lifecycle() {
        let repository = InMemoryTaskRepository::new();

        let task = repository.create(draft("Test Task")).await.unwrap();
        assert_eq!(task.id, TaskId(1));
        assert_eq!(repository.list_all().await.unwrap().len(), 1);

        let mut updated = task.clone();
        updated.title = "Updated Task".to_string();
        repository.update(updated).await.unwrap();
        let fetched = repository.find_by_id(TaskId(1)).await.unwrap().unwrap();
        assert_eq!(fetched.title, "Updated Task");

        repository.delete(TaskId(1)).await.unwrap();
        assert!(repository.find_by_id(TaskId(1)).await.unwrap().is_none());
        assert!(matches!(
            repository.delete(TaskId(1)).await.unwrap_err(),
            TaskError::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn test_ids_are_not_reused() {
        let repository = InMemoryTaskRepository::new();

        let first = repository.create(draft("first")).await.unwrap();
        repository.delete(first.id).await.unwrap();
        let second = repository.create(draft("second")).await.unwrap();

        assert_eq!(second.id, TaskId(2));
    }

    #[tokio::test]
    async fn test_update_missing_task() {
        let repository = InMemoryTaskRepository::new();
        let task = Task::from_draft(TaskId(5), draft("ghost"));

        assert!(matches!(
            repository.update(task).await.unwrap_err(),
            TaskError::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_id() {
        let repository = InMemoryTaskRepository::new();
        for title in ["a", "b", "c"] {
            repository.create(draft(title)).await.unwrap();
        }

        let ids: Vec<u64> = repository
            .list_all()
            .await
            .unwrap()
            .iter()
            .map(|task| task.id.0)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
