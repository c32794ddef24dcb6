use super::RecordStore;
use crate::error::AddError;
use crate::model::StudentRecord;
use crate::validation::normalize_roll;
use std::collections::HashMap;

/// In-memory record storage. Does NOT persist data.
///
/// Records are kept in a `Vec` for insertion order, with a side index from the
/// normalized roll to the record's position.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: Vec<StudentRecord>,
    index: HashMap<String, usize>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for InMemoryStore {
    fn insert(&mut self, record: StudentRecord) -> Result<(), AddError> {
        let key = normalize_roll(record.roll());
        if self.index.contains_key(&key) {
            return Err(AddError::DuplicateRoll(record.roll().to_string()));
        }
        self.index.insert(key, self.records.len());
        self.records.push(record);
        Ok(())
    }

    fn find(&self, roll: &str) -> Option<&StudentRecord> {
        self.index
            .get(&normalize_roll(roll))
            .map(|&pos| &self.records[pos])
    }

    fn find_mut(&mut self, roll: &str) -> Option<&mut StudentRecord> {
        let pos = *self.index.get(&normalize_roll(roll))?;
        self.records.get_mut(pos)
    }

    fn records(&self) -> &[StudentRecord] {
        &self.records
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Marks, SUBJECT_COUNT};

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_student(mut self, name: &str, roll: &str, marks: [f64; SUBJECT_COUNT]) -> Self {
            let marks = Marks::new(marks).unwrap();
            let record = StudentRecord::new(name.to_string(), roll.to_string(), marks);
            self.store.insert(record).unwrap();
            self
        }

        /// Adds a student whose five marks all equal `mark`.
        pub fn with_flat_student(self, name: &str, roll: &str, mark: f64) -> Self {
            self.with_student(name, roll, [mark; SUBJECT_COUNT])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;
    use crate::model::Marks;

    #[test]
    fn preserves_insertion_order() {
        let store = StoreFixture::new()
            .with_flat_student("Zed", "Z9", 10.0)
            .with_flat_student("Amy", "A1", 90.0)
            .with_flat_student("Max", "M5", 50.0)
            .store;

        let rolls: Vec<_> = store.records().iter().map(|r| r.roll()).collect();
        assert_eq!(rolls, ["Z9", "A1", "M5"]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn finds_case_insensitively() {
        let store = StoreFixture::new()
            .with_flat_student("Amy", "Ab12", 90.0)
            .store;

        assert_eq!(store.find("aB12").map(|r| r.name()), Some("Amy"));
        assert!(store.contains(" AB12 "));
        assert!(store.find("ab1").is_none());
    }

    #[test]
    fn rejects_duplicate_roll_without_mutation() {
        let mut store = StoreFixture::new()
            .with_flat_student("Amy", "R01", 90.0)
            .store;

        let marks = Marks::new([0.0; 5]).unwrap();
        let err = store
            .insert(StudentRecord::new("Other".into(), "r01".into(), marks))
            .unwrap_err();
        assert_eq!(err, AddError::DuplicateRoll("r01".into()));
        assert_eq!(store.len(), 1);
        assert_eq!(store.records()[0].name(), "Amy");
    }

    #[test]
    fn empty_store_is_valid() {
        let store = InMemoryStore::new();
        assert!(store.is_empty());
        assert!(store.records().is_empty());
        assert!(store.find("R1").is_none());
    }
}
