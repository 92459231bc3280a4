use std::collections::BTreeMap;

/// One entity collection keyed by a per-table monotonic id.
///
/// Rows iterate in id order, which is also insertion order because ids only
/// ever grow.
#[derive(Debug)]
pub(crate) struct Table<T> {
    rows: BTreeMap<i64, T>,
    next_id: i64,
}

impl<T: Clone> Table<T> {
    pub(crate) fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Assign the next id, build the row from it and store it
    pub(crate) fn insert_with(&mut self, build: impl FnOnce(i64) -> T) -> T {
        let id = self.next_id;
        self.next_id += 1;

        let row = build(id);
        self.rows.insert(id, row.clone());
        row
    }

    pub(crate) fn get(&self, id: i64) -> Option<T> {
        self.rows.get(&id).cloned()
    }

    /// Mutate the row in place and return the merged copy, or `None` if absent
    pub(crate) fn update_with(&mut self, id: i64, apply: impl FnOnce(&mut T)) -> Option<T> {
        let row = self.rows.get_mut(&id)?;
        apply(row);
        Some(row.clone())
    }

    pub(crate) fn remove(&mut self, id: i64) -> bool {
        self.rows.remove(&id).is_some()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &T> {
        self.rows.values()
    }

    pub(crate) fn filter(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        self.iter().filter(|row| predicate(row)).cloned().collect()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_start_at_one_and_increase() {
        let mut table = Table::new();
        assert_eq!(table.insert_with(|id| id), 1);
        assert_eq!(table.insert_with(|id| id), 2);
        assert_eq!(table.insert_with(|id| id), 3);
    }

    #[test]
    fn test_removed_id_is_not_reused() {
        let mut table = Table::new();
        table.insert_with(|id| id);
        table.insert_with(|id| id);
        let third = table.insert_with(|id| id);

        assert!(table.remove(third));
        assert!(!table.remove(third));
        assert_eq!(table.insert_with(|id| id), 4);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_update_missing_row_does_nothing() {
        let mut table: Table<(i64, &str)> = Table::new();
        table.insert_with(|id| (id, "a"));

        assert_eq!(table.update_with(7, |row| row.1 = "b"), None);
        assert_eq!(table.get(1), Some((1, "a")));
    }

    #[test]
    fn test_filter_keeps_insertion_order() {
        let mut table = Table::new();
        for _ in 0..5 {
            table.insert_with(|id| id);
        }

        assert_eq!(table.filter(|id| id % 2 == 1), vec![1, 3, 5]);
    }
}
