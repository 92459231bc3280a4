use anyhow::Result;
use std::sync::Arc;
use tracing::{info, warn};

use crate::storage::TaskStorage;
use shared::{CreateTaskRequest, DailyTaskSummary, Task, UpdateTaskRequest, WithPetName};

/// Service for daily care tasks.
///
/// A task is one row per day; "recurring" is only a label and no future
/// occurrences are generated.
#[derive(Clone)]
pub struct TaskService {
    storage: Arc<dyn TaskStorage>,
}

impl TaskService {
    pub fn new(storage: Arc<dyn TaskStorage>) -> Self {
        Self { storage }
    }

    /// Tasks of a single pet on `date` (exact string match)
    pub async fn list_tasks_for_pet(&self, pet_id: i64, date: &str) -> Result<Vec<Task>> {
        info!("Listing tasks for pet {} on {}", pet_id, date);
        self.storage.list_tasks_for_date(pet_id, date).await
    }

    /// Tasks on `date` across all of a user's pets, each tagged with its pet name
    pub async fn list_tasks_for_date(
        &self,
        user_id: i64,
        date: &str,
    ) -> Result<Vec<WithPetName<Task>>> {
        info!("Listing tasks for user {} on {}", user_id, date);

        let tasks = self.storage.list_all_tasks_for_date(user_id, date).await?;

        info!("Found {} tasks", tasks.len());
        Ok(tasks)
    }

    /// Completed/pending counters for the dashboard
    pub async fn daily_summary(&self, user_id: i64, date: &str) -> Result<DailyTaskSummary> {
        let tasks = self.storage.list_all_tasks_for_date(user_id, date).await?;
        let completed = tasks.iter().filter(|task| task.record.completed).count();

        Ok(DailyTaskSummary {
            date: date.to_string(),
            total: tasks.len(),
            completed,
            pending: tasks.len() - completed,
        })
    }

    pub async fn get_task(&self, task_id: i64) -> Result<Option<Task>> {
        let task = self.storage.get_task(task_id).await?;
        if task.is_none() {
            warn!("Task not found: {}", task_id);
        }
        Ok(task)
    }

    pub async fn create_task(&self, request: CreateTaskRequest) -> Result<Task> {
        info!(
            "Creating task: title={}, pet_id={}, date={}",
            request.title, request.pet_id, request.date
        );

        let task = self.storage.create_task(request).await?;

        info!("Created task: {} with ID: {}", task.title, task.id);
        Ok(task)
    }

    pub async fn update_task(
        &self,
        task_id: i64,
        request: UpdateTaskRequest,
    ) -> Result<Option<Task>> {
        info!("Updating task: {}", task_id);

        let task = self.storage.update_task(task_id, request).await?;

        match &task {
            Some(task) => info!("Updated task {} (completed: {})", task.id, task.completed),
            None => warn!("Task not found for update: {}", task_id),
        }
        Ok(task)
    }

    pub async fn delete_task(&self, task_id: i64) -> Result<bool> {
        info!("Deleting task: {}", task_id);

        let deleted = self.storage.delete_task(task_id).await?;

        if !deleted {
            warn!("Task not found for delete: {}", task_id);
        }
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, PetStorage};
    use shared::CreatePetRequest;

    async fn create_test_service() -> (TaskService, MemoryStore) {
        let store = MemoryStore::new();
        store
            .create_pet(
                1,
                CreatePetRequest {
                    name: "Biscuit".to_string(),
                    pet_type: "cat".to_string(),
                    breed: "Tabby".to_string(),
                    age: 2,
                    photo_url: None,
                },
            )
            .await
            .expect("Failed to create test pet");

        (TaskService::new(Arc::new(store.clone())), store)
    }

    fn task(title: &str, completed: bool) -> CreateTaskRequest {
        CreateTaskRequest {
            pet_id: 1,
            title: title.to_string(),
            description: None,
            time: None,
            completed,
            date: "2024-05-01".to_string(),
            is_recurring: true,
        }
    }

    #[tokio::test]
    async fn test_daily_summary_counts() {
        let (service, _store) = create_test_service().await;
        service.create_task(task("Feed", true)).await.unwrap();
        service.create_task(task("Brush", false)).await.unwrap();
        service.create_task(task("Play", false)).await.unwrap();

        let summary = service.daily_summary(1, "2024-05-01").await.unwrap();

        assert_eq!(summary.total, 3);
        assert_eq!(summary.completed, 1);
        assert_eq!(summary.pending, 2);

        let empty = service.daily_summary(1, "2024-05-02").await.unwrap();
        assert_eq!(empty.total, 0);
    }

    #[tokio::test]
    async fn test_complete_task_then_reopen() {
        let (service, _store) = create_test_service().await;
        let created = service.create_task(task("Feed", false)).await.unwrap();

        let done = service
            .update_task(
                created.id,
                UpdateTaskRequest {
                    completed: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .expect("task exists");
        assert!(done.completed);

        let reopened = service
            .update_task(
                created.id,
                UpdateTaskRequest {
                    completed: Some(false),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .expect("task exists");
        assert!(!reopened.completed);
        assert_eq!(reopened.title, "Feed");
    }

    #[tokio::test]
    async fn test_deleted_pet_drops_out_of_daily_list() {
        let (service, store) = create_test_service().await;
        let created = service.create_task(task("Feed", false)).await.unwrap();

        assert_eq!(service.list_tasks_for_date(1, "2024-05-01").await.unwrap().len(), 1);

        store.delete_pet(1).await.unwrap();

        assert!(service.list_tasks_for_date(1, "2024-05-01").await.unwrap().is_empty());
        assert_eq!(service.list_tasks_for_pet(1, "2024-05-01").await.unwrap().len(), 1);
        assert_eq!(service.get_task(created.id).await.unwrap(), Some(created));
    }
}
