//! # Storage Traits
//!
//! Storage abstraction used by the domain services. Absent records are
//! reported as `Ok(None)` or `Ok(false)`, never as an error; `Err` is reserved
//! for failures of the backend itself.

use anyhow::Result;
use async_trait::async_trait;
use shared::{
    CreateDiaryEntryRequest, CreatePetRequest, CreateTaskRequest, CreateUserRequest,
    CreateVaccineRequest, DiaryEntry, Pet, Task, UpdateDiaryEntryRequest, UpdatePetRequest,
    UpdateTaskRequest, UpdateVaccineRequest, User, Vaccine, WithPetName,
};

#[async_trait]
pub trait UserStorage: Send + Sync {
    async fn get_user(&self, id: i64) -> Result<Option<User>>;

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;

    /// Fails with [`StorageError::UsernameTaken`](super::StorageError) when the
    /// username is already registered
    async fn create_user(&self, request: CreateUserRequest) -> Result<User>;
}

#[async_trait]
pub trait PetStorage: Send + Sync {
    /// Pets owned by `user_id`, in creation order
    async fn list_pets(&self, user_id: i64) -> Result<Vec<Pet>>;

    async fn get_pet(&self, id: i64) -> Result<Option<Pet>>;

    async fn create_pet(&self, user_id: i64, request: CreatePetRequest) -> Result<Pet>;

    async fn update_pet(&self, id: i64, request: UpdatePetRequest) -> Result<Option<Pet>>;

    /// Does not touch the pet's tasks, vaccines or diary entries
    async fn delete_pet(&self, id: i64) -> Result<bool>;
}

#[async_trait]
pub trait TaskStorage: Send + Sync {
    async fn get_task(&self, id: i64) -> Result<Option<Task>>;

    /// Tasks of one pet whose date string equals `date` exactly
    async fn list_tasks_for_date(&self, pet_id: i64, date: &str) -> Result<Vec<Task>>;

    /// Tasks on `date` across every pet currently owned by `user_id`
    async fn list_all_tasks_for_date(
        &self,
        user_id: i64,
        date: &str,
    ) -> Result<Vec<WithPetName<Task>>>;

    async fn create_task(&self, request: CreateTaskRequest) -> Result<Task>;

    async fn update_task(&self, id: i64, request: UpdateTaskRequest) -> Result<Option<Task>>;

    async fn delete_task(&self, id: i64) -> Result<bool>;
}

#[async_trait]
pub trait VaccineStorage: Send + Sync {
    async fn get_vaccine(&self, id: i64) -> Result<Option<Vaccine>>;

    async fn list_vaccines(&self, pet_id: i64) -> Result<Vec<Vaccine>>;

    async fn list_all_vaccines(&self, user_id: i64) -> Result<Vec<WithPetName<Vaccine>>>;

    async fn create_vaccine(&self, request: CreateVaccineRequest) -> Result<Vaccine>;

    async fn update_vaccine(
        &self,
        id: i64,
        request: UpdateVaccineRequest,
    ) -> Result<Option<Vaccine>>;

    async fn delete_vaccine(&self, id: i64) -> Result<bool>;
}

/// Diary listings are returned most recent first by (date, time)
#[async_trait]
pub trait DiaryStorage: Send + Sync {
    async fn get_diary_entry(&self, id: i64) -> Result<Option<DiaryEntry>>;

    async fn list_diary_entries(&self, pet_id: i64) -> Result<Vec<DiaryEntry>>;

    async fn list_all_diary_entries(&self, user_id: i64) -> Result<Vec<WithPetName<DiaryEntry>>>;

    async fn create_diary_entry(&self, request: CreateDiaryEntryRequest) -> Result<DiaryEntry>;

    async fn update_diary_entry(
        &self,
        id: i64,
        request: UpdateDiaryEntryRequest,
    ) -> Result<Option<DiaryEntry>>;

    async fn delete_diary_entry(&self, id: i64) -> Result<bool>;
}
