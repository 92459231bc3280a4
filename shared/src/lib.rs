use serde::{Deserialize, Deserializer, Serialize};

/// Name attached to joined records whose pet no longer exists
pub const UNKNOWN_PET_NAME: &str = "Unknown Pet";

/// Deserializes a field that was present in the payload, so that an explicit
/// `null` becomes `Some(None)` while an absent field stays `None` via `default`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Deserializes a patch field that must not be cleared: absent stays `None`
/// via `default`, while an explicit `null` is rejected.
fn required<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

fn default_true() -> bool {
    true
}

/// Overwrite `target` when the patch carries a value for it
fn merge<T>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
}

impl User {
    pub fn from_request(id: i64, request: CreateUserRequest) -> Self {
        Self {
            id,
            username: request.username,
            password: request.password,
        }
    }
}

/// A pet owned by a single user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub id: i64,
    pub name: String,
    /// Species label such as "dog" or "cat"
    #[serde(rename = "type")]
    pub pet_type: String,
    pub breed: String,
    pub age: i32,
    pub photo_url: Option<String>,
    pub user_id: i64,
}

/// Body of `POST /api/pets`; the owner is injected by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePetRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub pet_type: String,
    pub breed: String,
    pub age: i32,
    #[serde(default)]
    pub photo_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePetRequest {
    #[serde(default, deserialize_with = "required", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        default,
        rename = "type",
        deserialize_with = "required",
        skip_serializing_if = "Option::is_none"
    )]
    pub pet_type: Option<String>,
    #[serde(default, deserialize_with = "required", skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,
    #[serde(default, deserialize_with = "required", skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<Option<String>>,
}

impl Pet {
    pub fn from_request(id: i64, user_id: i64, request: CreatePetRequest) -> Self {
        Self {
            id,
            name: request.name,
            pet_type: request.pet_type,
            breed: request.breed,
            age: request.age,
            photo_url: request.photo_url,
            user_id,
        }
    }

    /// Shallow merge: supplied fields overwrite, everything else is kept
    pub fn apply(&mut self, update: UpdatePetRequest) {
        merge(&mut self.name, update.name);
        merge(&mut self.pet_type, update.pet_type);
        merge(&mut self.breed, update.breed);
        merge(&mut self.age, update.age);
        merge(&mut self.photo_url, update.photo_url);
    }
}

/// One care task on one calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: i64,
    pub pet_id: i64,
    pub title: String,
    pub description: Option<String>,
    /// Free-form time of day, e.g. "7:00 AM"
    pub time: Option<String>,
    pub completed: bool,
    /// Day in YYYY-MM-DD form, compared as a plain string
    pub date: String,
    pub is_recurring: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    pub pet_id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub completed: bool,
    pub date: String,
    #[serde(default = "default_true")]
    pub is_recurring: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    #[serde(default, deserialize_with = "required", skip_serializing_if = "Option::is_none")]
    pub pet_id: Option<i64>,
    #[serde(default, deserialize_with = "required", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub time: Option<Option<String>>,
    #[serde(default, deserialize_with = "required", skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(default, deserialize_with = "required", skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "required", skip_serializing_if = "Option::is_none")]
    pub is_recurring: Option<bool>,
}

impl Task {
    pub fn from_request(id: i64, request: CreateTaskRequest) -> Self {
        Self {
            id,
            pet_id: request.pet_id,
            title: request.title,
            description: request.description,
            time: request.time,
            completed: request.completed,
            date: request.date,
            is_recurring: request.is_recurring,
        }
    }

    pub fn apply(&mut self, update: UpdateTaskRequest) {
        merge(&mut self.pet_id, update.pet_id);
        merge(&mut self.title, update.title);
        merge(&mut self.description, update.description);
        merge(&mut self.time, update.time);
        merge(&mut self.completed, update.completed);
        merge(&mut self.date, update.date);
        merge(&mut self.is_recurring, update.is_recurring);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vaccine {
    pub id: i64,
    pub pet_id: i64,
    pub name: String,
    /// Day in YYYY-MM-DD form
    pub due_date: String,
    pub completed: bool,
    pub notes: Option<String>,
    pub veterinarian: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVaccineRequest {
    pub pet_id: i64,
    pub name: String,
    pub due_date: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub veterinarian: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVaccineRequest {
    #[serde(default, deserialize_with = "required", skip_serializing_if = "Option::is_none")]
    pub pet_id: Option<i64>,
    #[serde(default, deserialize_with = "required", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "required", skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(default, deserialize_with = "required", skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub notes: Option<Option<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub veterinarian: Option<Option<String>>,
}

impl Vaccine {
    pub fn from_request(id: i64, request: CreateVaccineRequest) -> Self {
        Self {
            id,
            pet_id: request.pet_id,
            name: request.name,
            due_date: request.due_date,
            completed: request.completed,
            notes: request.notes,
            veterinarian: request.veterinarian,
        }
    }

    pub fn apply(&mut self, update: UpdateVaccineRequest) {
        merge(&mut self.pet_id, update.pet_id);
        merge(&mut self.name, update.name);
        merge(&mut self.due_date, update.due_date);
        merge(&mut self.completed, update.completed);
        merge(&mut self.notes, update.notes);
        merge(&mut self.veterinarian, update.veterinarian);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiaryEntry {
    pub id: i64,
    pub pet_id: i64,
    pub content: String,
    /// e.g. "happy", "content", "tired"
    pub mood: Option<String>,
    /// e.g. "high", "medium", "low"
    pub energy: Option<String>,
    pub activity: Option<String>,
    pub photo_url: Option<String>,
    /// YYYY-MM-DD
    pub date: String,
    /// HH:MM
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDiaryEntryRequest {
    pub pet_id: i64,
    pub content: String,
    #[serde(default)]
    pub mood: Option<String>,
    #[serde(default)]
    pub energy: Option<String>,
    #[serde(default)]
    pub activity: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    pub date: String,
    pub time: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDiaryEntryRequest {
    #[serde(default, deserialize_with = "required", skip_serializing_if = "Option::is_none")]
    pub pet_id: Option<i64>,
    #[serde(default, deserialize_with = "required", skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub mood: Option<Option<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub energy: Option<Option<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub activity: Option<Option<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "required", skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "required", skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

impl DiaryEntry {
    pub fn from_request(id: i64, request: CreateDiaryEntryRequest) -> Self {
        Self {
            id,
            pet_id: request.pet_id,
            content: request.content,
            mood: request.mood,
            energy: request.energy,
            activity: request.activity,
            photo_url: request.photo_url,
            date: request.date,
            time: request.time,
        }
    }

    pub fn apply(&mut self, update: UpdateDiaryEntryRequest) {
        merge(&mut self.pet_id, update.pet_id);
        merge(&mut self.content, update.content);
        merge(&mut self.mood, update.mood);
        merge(&mut self.energy, update.energy);
        merge(&mut self.activity, update.activity);
        merge(&mut self.photo_url, update.photo_url);
        merge(&mut self.date, update.date);
        merge(&mut self.time, update.time);
    }
}

/// A record joined with the name of the pet it belongs to.
///
/// Serializes flat: the record's own fields plus `petName`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithPetName<T> {
    #[serde(flatten)]
    pub record: T,
    pub pet_name: String,
}

/// Task counters for one day across all of a user's pets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyTaskSummary {
    pub date: String,
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

/// A user's vaccines grouped by urgency relative to a reference day
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaccineSchedule {
    pub today: String,
    pub due_soon_days: u32,
    pub overdue: Vec<WithPetName<Vaccine>>,
    pub due_soon: Vec<WithPetName<Vaccine>>,
    pub later: Vec<WithPetName<Vaccine>>,
    pub unscheduled: Vec<WithPetName<Vaccine>>,
    pub completed: Vec<WithPetName<Vaccine>>,
}

/// Body of every non-2xx response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Body of a successful delete
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}
