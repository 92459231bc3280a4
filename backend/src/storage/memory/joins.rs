//! Helpers shared by the owner-scoped queries.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use shared::{DiaryEntry, Pet, WithPetName, UNKNOWN_PET_NAME};
use std::cmp::Reverse;
use std::collections::HashMap;

/// Pet id to pet name for the pets one user currently owns.
///
/// Built once per query so each joined row is a map lookup.
pub(crate) struct PetNames(HashMap<i64, String>);

impl PetNames {
    pub(crate) fn owned_by<'a>(user_id: i64, pets: impl Iterator<Item = &'a Pet>) -> Self {
        Self(
            pets.filter(|pet| pet.user_id == user_id)
                .map(|pet| (pet.id, pet.name.clone()))
                .collect(),
        )
    }

    pub(crate) fn owns(&self, pet_id: i64) -> bool {
        self.0.contains_key(&pet_id)
    }

    pub(crate) fn attach<T>(&self, pet_id: i64, record: T) -> WithPetName<T> {
        let pet_name = self
            .0
            .get(&pet_id)
            .cloned()
            .unwrap_or_else(|| UNKNOWN_PET_NAME.to_string());

        WithPetName { record, pet_name }
    }
}

/// Parse the (date, time) pair of a diary entry into one timestamp
pub(crate) fn diary_timestamp(entry: &DiaryEntry) -> Option<NaiveDateTime> {
    let date = NaiveDate::parse_from_str(entry.date.trim(), "%Y-%m-%d").ok()?;
    let time = NaiveTime::parse_from_str(entry.time.trim(), "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(entry.time.trim(), "%H:%M:%S"))
        .ok()?;

    Some(date.and_time(time))
}

/// Most recent first. Unparseable entries go last and ties keep their order.
pub(crate) fn sort_most_recent_first<T>(items: &mut [T], entry: impl Fn(&T) -> &DiaryEntry) {
    items.sort_by_key(|item| Reverse(diary_timestamp(entry(item))));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: i64, date: &str, time: &str) -> DiaryEntry {
        DiaryEntry {
            id,
            pet_id: 1,
            content: format!("entry {}", id),
            mood: None,
            energy: None,
            activity: None,
            photo_url: None,
            date: date.to_string(),
            time: time.to_string(),
        }
    }

    fn ids(entries: &[DiaryEntry]) -> Vec<i64> {
        entries.iter().map(|e| e.id).collect()
    }

    #[test]
    fn test_diary_timestamp_formats() {
        assert!(diary_timestamp(&entry(1, "2024-01-02", "09:00")).is_some());
        assert!(diary_timestamp(&entry(1, "2024-01-02", "09:00:30")).is_some());
        assert!(diary_timestamp(&entry(1, "2024-01-02", "9am")).is_none());
        assert!(diary_timestamp(&entry(1, "yesterday", "09:00")).is_none());
    }

    #[test]
    fn test_sort_uses_date_before_time() {
        let mut entries = vec![
            entry(1, "2024-01-01", "18:00"),
            entry(2, "2024-01-02", "09:00"),
            entry(3, "2024-01-02", "08:59"),
        ];

        sort_most_recent_first(&mut entries, |e| e);

        assert_eq!(ids(&entries), vec![2, 3, 1]);
    }

    #[test]
    fn test_sort_puts_malformed_last_and_is_stable() {
        let mut entries = vec![
            entry(1, "not a date", "10:00"),
            entry(2, "2024-03-01", "10:00"),
            entry(3, "2024-03-01", "10:00"),
            entry(4, "2023-12-31", "23:59"),
        ];

        sort_most_recent_first(&mut entries, |e| e);

        assert_eq!(ids(&entries), vec![2, 3, 4, 1]);
    }

    #[test]
    fn test_pet_names_scope_to_owner() {
        let pets = vec![
            Pet {
                id: 1,
                name: "A".to_string(),
                pet_type: "dog".to_string(),
                breed: "Mixed".to_string(),
                age: 3,
                photo_url: None,
                user_id: 1,
            },
            Pet {
                id: 2,
                name: "B".to_string(),
                pet_type: "cat".to_string(),
                breed: "Tabby".to_string(),
                age: 2,
                photo_url: None,
                user_id: 2,
            },
        ];

        let names = PetNames::owned_by(1, pets.iter());

        assert!(names.owns(1));
        assert!(!names.owns(2));
        assert_eq!(names.attach(1, ()).pet_name, "A");
        assert_eq!(names.attach(2, ()).pet_name, UNKNOWN_PET_NAME);
    }
}
