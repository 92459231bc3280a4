use anyhow::Result;
use chrono::{Duration, NaiveDate};
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::calendar::{format_day, parse_day};
use crate::storage::VaccineStorage;
use shared::{
    CreateVaccineRequest, UpdateVaccineRequest, Vaccine, VaccineSchedule, WithPetName,
};

/// Default look-ahead window for the "due soon" bucket
pub const DEFAULT_DUE_SOON_DAYS: u32 = 30;

/// Service for vaccination records and their due dates
#[derive(Clone)]
pub struct VaccineService {
    storage: Arc<dyn VaccineStorage>,
}

impl VaccineService {
    pub fn new(storage: Arc<dyn VaccineStorage>) -> Self {
        Self { storage }
    }

    pub async fn list_vaccines_for_pet(&self, pet_id: i64) -> Result<Vec<Vaccine>> {
        info!("Listing vaccines for pet {}", pet_id);
        self.storage.list_vaccines(pet_id).await
    }

    pub async fn list_vaccines(&self, user_id: i64) -> Result<Vec<WithPetName<Vaccine>>> {
        info!("Listing vaccines for user {}", user_id);

        let vaccines = self.storage.list_all_vaccines(user_id).await?;

        info!("Found {} vaccines", vaccines.len());
        Ok(vaccines)
    }

    /// Group a user's vaccines by urgency relative to `today`.
    ///
    /// Open vaccines are overdue before `today`, due soon up to and including
    /// `today + due_soon_days`, later after that, and unscheduled when the due
    /// date does not parse. Completed vaccines are listed apart whatever their
    /// date. A window reaching past the last representable day saturates.
    pub async fn schedule(
        &self,
        user_id: i64,
        today: NaiveDate,
        due_soon_days: u32,
    ) -> Result<VaccineSchedule> {
        info!(
            "Building vaccine schedule for user {} from {} ({} days)",
            user_id, today, due_soon_days
        );

        let horizon = today
            .checked_add_signed(Duration::days(i64::from(due_soon_days)))
            .unwrap_or(NaiveDate::MAX);
        let mut schedule = VaccineSchedule {
            today: format_day(today),
            due_soon_days,
            ..Default::default()
        };

        for vaccine in self.storage.list_all_vaccines(user_id).await? {
            if vaccine.record.completed {
                schedule.completed.push(vaccine);
                continue;
            }

            match parse_day(&vaccine.record.due_date) {
                None => schedule.unscheduled.push(vaccine),
                Some(due) if due < today => schedule.overdue.push(vaccine),
                Some(due) if due <= horizon => schedule.due_soon.push(vaccine),
                Some(_) => schedule.later.push(vaccine),
            }
        }

        for bucket in [
            &mut schedule.overdue,
            &mut schedule.due_soon,
            &mut schedule.later,
        ] {
            bucket.sort_by_key(|vaccine| parse_day(&vaccine.record.due_date));
        }

        Ok(schedule)
    }

    pub async fn get_vaccine(&self, vaccine_id: i64) -> Result<Option<Vaccine>> {
        let vaccine = self.storage.get_vaccine(vaccine_id).await?;
        if vaccine.is_none() {
            warn!("Vaccine not found: {}", vaccine_id);
        }
        Ok(vaccine)
    }

    pub async fn create_vaccine(&self, request: CreateVaccineRequest) -> Result<Vaccine> {
        info!(
            "Creating vaccine: name={}, pet_id={}, due={}",
            request.name, request.pet_id, request.due_date
        );

        let vaccine = self.storage.create_vaccine(request).await?;

        info!("Created vaccine: {} with ID: {}", vaccine.name, vaccine.id);
        Ok(vaccine)
    }

    pub async fn update_vaccine(
        &self,
        vaccine_id: i64,
        request: UpdateVaccineRequest,
    ) -> Result<Option<Vaccine>> {
        info!("Updating vaccine: {}", vaccine_id);

        let vaccine = self.storage.update_vaccine(vaccine_id, request).await?;

        if vaccine.is_none() {
            warn!("Vaccine not found for update: {}", vaccine_id);
        }
        Ok(vaccine)
    }

    pub async fn delete_vaccine(&self, vaccine_id: i64) -> Result<bool> {
        info!("Deleting vaccine: {}", vaccine_id);

        let deleted = self.storage.delete_vaccine(vaccine_id).await?;

        if !deleted {
            warn!("Vaccine not found for delete: {}", vaccine_id);
        }
        Ok(deleted)
    }
}
