use crate::model::StudentRecord;
use crate::store::RecordStore;

pub fn run<S: RecordStore>(store: &S, roll: &str) -> Option<StudentRecord> {
    let found = store.find(roll).cloned();
    tracing::debug!(roll = %roll.trim(), found = found.is_some(), "lookup by roll");
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn finds_by_roll_ignoring_case() {
        let store = StoreFixture::new()
            .with_flat_student("Alice", "R01", 70.0)
            .with_flat_student("Bob", "R02", 80.0)
            .store;

        let found = run(&store, "r02").unwrap();
        assert_eq!(found.name(), "Bob");
        assert_eq!(run(&store, "  R01 ").unwrap().name(), "Alice");
    }

    #[test]
    fn missing_roll_is_none() {
        let store = StoreFixture::new()
            .with_flat_student("Alice", "R01", 70.0)
            .store;
        assert!(run(&store, "R0").is_none());
        assert!(run(&store, "").is_none());
    }
}
