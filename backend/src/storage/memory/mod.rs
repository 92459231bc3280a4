//! # In-Memory Store
//!
//! Process-lifetime implementation of every storage trait. All collections sit
//! behind one lock and no operation awaits while holding it, so each call is
//! atomic with respect to every other call.

mod joins;
mod table;

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use self::joins::{sort_most_recent_first, PetNames};
use self::table::Table;
use super::error::StorageError;
use super::traits::{DiaryStorage, PetStorage, TaskStorage, UserStorage, VaccineStorage};
use shared::{
    CreateDiaryEntryRequest, CreatePetRequest, CreateTaskRequest, CreateUserRequest,
    CreateVaccineRequest, DiaryEntry, Pet, Task, UpdateDiaryEntryRequest, UpdatePetRequest,
    UpdateTaskRequest, UpdateVaccineRequest, User, Vaccine, WithPetName,
};

pub const SEED_USERNAME: &str = "demo";
const SEED_PASSWORD: &str = "demo";

#[derive(Debug)]
struct StoreState {
    users: Table<User>,
    pets: Table<Pet>,
    tasks: Table<Task>,
    vaccines: Table<Vaccine>,
    diary_entries: Table<DiaryEntry>,
}

impl StoreState {
    fn pet_names(&self, user_id: i64) -> PetNames {
        PetNames::owned_by(user_id, self.pets.iter())
    }
}

/// Shared handle to the in-memory entity collections
#[derive(Clone, Debug)]
pub struct MemoryStore {
    state: Arc<RwLock<StoreState>>,
}

impl MemoryStore {
    /// Empty store holding only the seed user (id 1)
    pub fn new() -> Self {
        let mut users = Table::new();
        users.insert_with(|id| User {
            id,
            username: SEED_USERNAME.to_string(),
            password: SEED_PASSWORD.to_string(),
        });

        Self {
            state: Arc::new(RwLock::new(StoreState {
                users,
                pets: Table::new(),
                tasks: Table::new(),
                vaccines: Table::new(),
                diary_entries: Table::new(),
            })),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStorage for MemoryStore {
    async fn get_user(&self, id: i64) -> Result<Option<User>> {
        Ok(self.state.read().await.users.get(id))
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        let state = self.state.read().await;
        let user = state
            .users
            .iter()
            .find(|user| user.username == username)
            .cloned();
        Ok(user)
    }

    async fn create_user(&self, request: CreateUserRequest) -> Result<User> {
        let mut state = self.state.write().await;

        if state.users.iter().any(|user| user.username == request.username) {
            return Err(StorageError::UsernameTaken(request.username).into());
        }

        let user = state.users.insert_with(|id| User::from_request(id, request));
        debug!(user_id = user.id, "stored user");
        Ok(user)
    }
}

#[async_trait]
impl PetStorage for MemoryStore {
    async fn list_pets(&self, user_id: i64) -> Result<Vec<Pet>> {
        let state = self.state.read().await;
        Ok(state.pets.filter(|pet| pet.user_id == user_id))
    }

    async fn get_pet(&self, id: i64) -> Result<Option<Pet>> {
        Ok(self.state.read().await.pets.get(id))
    }

    async fn create_pet(&self, user_id: i64, request: CreatePetRequest) -> Result<Pet> {
        let mut state = self.state.write().await;
        let pet = state
            .pets
            .insert_with(|id| Pet::from_request(id, user_id, request));
        debug!(pet_id = pet.id, user_id, "stored pet");
        Ok(pet)
    }

    async fn update_pet(&self, id: i64, request: UpdatePetRequest) -> Result<Option<Pet>> {
        let mut state = self.state.write().await;
        let updated = state.pets.update_with(id, |pet| pet.apply(request));
        debug!(pet_id = id, found = updated.is_some(), "updated pet");
        Ok(updated)
    }

    async fn delete_pet(&self, id: i64) -> Result<bool> {
        let removed = self.state.write().await.pets.remove(id);
        debug!(pet_id = id, removed, "deleted pet");
        Ok(removed)
    }
}

#[async_trait]
impl TaskStorage for MemoryStore {
    async fn get_task(&self, id: i64) -> Result<Option<Task>> {
        Ok(self.state.read().await.tasks.get(id))
    }

    async fn list_tasks_for_date(&self, pet_id: i64, date: &str) -> Result<Vec<Task>> {
        let state = self.state.read().await;
        Ok(state
            .tasks
            .filter(|task| task.pet_id == pet_id && task.date == date))
    }

    async fn list_all_tasks_for_date(
        &self,
        user_id: i64,
        date: &str,
    ) -> Result<Vec<WithPetName<Task>>> {
        let state = self.state.read().await;
        let names = state.pet_names(user_id);

        let tasks = state
            .tasks
            .iter()
            .filter(|task| names.owns(task.pet_id) && task.date == date)
            .map(|task| names.attach(task.pet_id, task.clone()))
            .collect();
        Ok(tasks)
    }

    async fn create_task(&self, request: CreateTaskRequest) -> Result<Task> {
        let mut state = self.state.write().await;
        let task = state.tasks.insert_with(|id| Task::from_request(id, request));
        debug!(task_id = task.id, pet_id = task.pet_id, "stored task");
        Ok(task)
    }

    async fn update_task(&self, id: i64, request: UpdateTaskRequest) -> Result<Option<Task>> {
        let mut state = self.state.write().await;
        let updated = state.tasks.update_with(id, |task| task.apply(request));
        debug!(task_id = id, found = updated.is_some(), "updated task");
        Ok(updated)
    }

    async fn delete_task(&self, id: i64) -> Result<bool> {
        let removed = self.state.write().await.tasks.remove(id);
        debug!(task_id = id, removed, "deleted task");
        Ok(removed)
    }
}

#[async_trait]
impl VaccineStorage for MemoryStore {
    async fn get_vaccine(&self, id: i64) -> Result<Option<Vaccine>> {
        Ok(self.state.read().await.vaccines.get(id))
    }

    async fn list_vaccines(&self, pet_id: i64) -> Result<Vec<Vaccine>> {
        let state = self.state.read().await;
        Ok(state.vaccines.filter(|vaccine| vaccine.pet_id == pet_id))
    }

    async fn list_all_vaccines(&self, user_id: i64) -> Result<Vec<WithPetName<Vaccine>>> {
        let state = self.state.read().await;
        let names = state.pet_names(user_id);

        let vaccines = state
            .vaccines
            .iter()
            .filter(|vaccine| names.owns(vaccine.pet_id))
            .map(|vaccine| names.attach(vaccine.pet_id, vaccine.clone()))
            .collect();
        Ok(vaccines)
    }

    async fn create_vaccine(&self, request: CreateVaccineRequest) -> Result<Vaccine> {
        let mut state = self.state.write().await;
        let vaccine = state
            .vaccines
            .insert_with(|id| Vaccine::from_request(id, request));
        debug!(vaccine_id = vaccine.id, pet_id = vaccine.pet_id, "stored vaccine");
        Ok(vaccine)
    }

    async fn update_vaccine(
        &self,
        id: i64,
        request: UpdateVaccineRequest,
    ) -> Result<Option<Vaccine>> {
        let mut state = self.state.write().await;
        let updated = state.vaccines.update_with(id, |vaccine| vaccine.apply(request));
        debug!(vaccine_id = id, found = updated.is_some(), "updated vaccine");
        Ok(updated)
    }

    async fn delete_vaccine(&self, id: i64) -> Result<bool> {
        let removed = self.state.write().await.vaccines.remove(id);
        debug!(vaccine_id = id, removed, "deleted vaccine");
        Ok(removed)
    }
}

#[async_trait]
impl DiaryStorage for MemoryStore {
    async fn get_diary_entry(&self, id: i64) -> Result<Option<DiaryEntry>> {
        Ok(self.state.read().await.diary_entries.get(id))
    }

    async fn list_diary_entries(&self, pet_id: i64) -> Result<Vec<DiaryEntry>> {
        let state = self.state.read().await;
        let mut entries = state.diary_entries.filter(|entry| entry.pet_id == pet_id);
        sort_most_recent_first(&mut entries, |entry| entry);
        Ok(entries)
    }

    async fn list_all_diary_entries(&self, user_id: i64) -> Result<Vec<WithPetName<DiaryEntry>>> {
        let state = self.state.read().await;
        let names = state.pet_names(user_id);

        let mut entries: Vec<_> = state
            .diary_entries
            .iter()
            .filter(|entry| names.owns(entry.pet_id))
            .map(|entry| names.attach(entry.pet_id, entry.clone()))
            .collect();
        sort_most_recent_first(&mut entries, |joined| &joined.record);
        Ok(entries)
    }

    async fn create_diary_entry(&self, request: CreateDiaryEntryRequest) -> Result<DiaryEntry> {
        let mut state = self.state.write().await;
        let entry = state
            .diary_entries
            .insert_with(|id| DiaryEntry::from_request(id, request));
        debug!(entry_id = entry.id, pet_id = entry.pet_id, "stored diary entry");
        Ok(entry)
    }

    async fn update_diary_entry(
        &self,
        id: i64,
        request: UpdateDiaryEntryRequest,
    ) -> Result<Option<DiaryEntry>> {
        let mut state = self.state.write().await;
        let updated = state.diary_entries.update_with(id, |entry| entry.apply(request));
        debug!(entry_id = id, found = updated.is_some(), "updated diary entry");
        Ok(updated)
    }

    async fn delete_diary_entry(&self, id: i64) -> Result<bool> {
        let removed = self.state.write().await.diary_entries.remove(id);
        debug!(entry_id = id, removed, "deleted diary entry");
        Ok(removed)
    }
}
