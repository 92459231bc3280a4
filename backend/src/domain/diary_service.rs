use anyhow::Result;
use std::sync::Arc;
use tracing::{info, warn};

use crate::storage::DiaryStorage;
use shared::{CreateDiaryEntryRequest, DiaryEntry, UpdateDiaryEntryRequest, WithPetName};

/// Service for per-pet diary entries. Listings come back newest first.
#[derive(Clone)]
pub struct DiaryService {
    storage: Arc<dyn DiaryStorage>,
}

impl DiaryService {
    pub fn new(storage: Arc<dyn DiaryStorage>) -> Self {
        Self { storage }
    }

    pub async fn list_entries_for_pet(&self, pet_id: i64) -> Result<Vec<DiaryEntry>> {
        info!("Listing diary entries for pet {}", pet_id);
        self.storage.list_diary_entries(pet_id).await
    }

    pub async fn list_entries(&self, user_id: i64) -> Result<Vec<WithPetName<DiaryEntry>>> {
        info!("Listing diary entries for user {}", user_id);

        let entries = self.storage.list_all_diary_entries(user_id).await?;

        info!("Found {} diary entries", entries.len());
        Ok(entries)
    }

    pub async fn get_entry(&self, entry_id: i64) -> Result<Option<DiaryEntry>> {
        let entry = self.storage.get_diary_entry(entry_id).await?;
        if entry.is_none() {
            warn!("Diary entry not found: {}", entry_id);
        }
        Ok(entry)
    }

    pub async fn create_entry(&self, request: CreateDiaryEntryRequest) -> Result<DiaryEntry> {
        info!(
            "Creating diary entry: pet_id={}, at {} {}",
            request.pet_id, request.date, request.time
        );

        let entry = self.storage.create_diary_entry(request).await?;

        info!("Created diary entry with ID: {}", entry.id);
        Ok(entry)
    }

    pub async fn update_entry(
        &self,
        entry_id: i64,
        request: UpdateDiaryEntryRequest,
    ) -> Result<Option<DiaryEntry>> {
        info!("Updating diary entry: {}", entry_id);

        let entry = self.storage.update_diary_entry(entry_id, request).await?;

        if entry.is_none() {
            warn!("Diary entry not found for update: {}", entry_id);
        }
        Ok(entry)
    }

    pub async fn delete_entry(&self, entry_id: i64) -> Result<bool> {
        info!("Deleting diary entry: {}", entry_id);

        let deleted = self.storage.delete_diary_entry(entry_id).await?;

        if !deleted {
            warn!("Diary entry not found for delete: {}", entry_id);
        }
        Ok(deleted)
    }
}
