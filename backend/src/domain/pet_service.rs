use anyhow::Result;
use std::sync::Arc;
use tracing::{info, warn};

use crate::storage::PetStorage;
use shared::{CreatePetRequest, Pet, UpdatePetRequest};

/// Service for managing the pets a user owns
#[derive(Clone)]
pub struct PetService {
    storage: Arc<dyn PetStorage>,
}

impl PetService {
    pub fn new(storage: Arc<dyn PetStorage>) -> Self {
        Self { storage }
    }

    /// List the pets owned by a user, oldest first
    pub async fn list_pets(&self, user_id: i64) -> Result<Vec<Pet>> {
        info!("Listing pets for user: {}", user_id);

        let pets = self.storage.list_pets(user_id).await?;

        info!("Found {} pets", pets.len());
        Ok(pets)
    }

    pub async fn get_pet(&self, pet_id: i64) -> Result<Option<Pet>> {
        let pet = self.storage.get_pet(pet_id).await?;
        if pet.is_none() {
            warn!("Pet not found: {}", pet_id);
        }
        Ok(pet)
    }

    /// Create a pet owned by `user_id`
    pub async fn create_pet(&self, user_id: i64, request: CreatePetRequest) -> Result<Pet> {
        info!("Creating pet: name={}, type={}", request.name, request.pet_type);

        let pet = self.storage.create_pet(user_id, request).await?;

        info!("Created pet: {} with ID: {}", pet.name, pet.id);
        Ok(pet)
    }

    pub async fn update_pet(&self, pet_id: i64, request: UpdatePetRequest) -> Result<Option<Pet>> {
        info!("Updating pet: {}", pet_id);

        let pet = self.storage.update_pet(pet_id, request).await?;

        match &pet {
            Some(pet) => info!("Updated pet: {} with ID: {}", pet.name, pet.id),
            None => warn!("Pet not found for update: {}", pet_id),
        }
        Ok(pet)
    }

    /// Remove a pet. Its tasks, vaccines and diary entries are kept.
    pub async fn delete_pet(&self, pet_id: i64) -> Result<bool> {
        info!("Deleting pet: {}", pet_id);

        let deleted = self.storage.delete_pet(pet_id).await?;

        if !deleted {
            warn!("Pet not found for delete: {}", pet_id);
        }
        Ok(deleted)
    }
}
