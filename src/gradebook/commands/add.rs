use crate::error::AddError;
use crate::model::{Marks, StudentRecord, SUBJECT_COUNT};
use crate::store::RecordStore;
use crate::validation::{validate_name, validate_roll};

/// Validates and appends a new student.
///
/// Checks run in a fixed order: name, roll, duplicate roll, then marks in subject
/// order. Nothing is stored unless every check passes.
pub fn run<S: RecordStore>(
    store: &mut S,
    name: &str,
    roll: &str,
    marks: [f64; SUBJECT_COUNT],
) -> Result<StudentRecord, AddError> {
    let name = validate_name(name)?;
    let roll = validate_roll(roll)?;
    if store.contains(&roll) {
        tracing::warn!(roll = %roll, "rejected duplicate roll");
        return Err(AddError::DuplicateRoll(roll));
    }
    let marks = Marks::new(marks).inspect_err(|err| {
        tracing::warn!(roll = %roll, subject = %err.subject(), "rejected invalid mark");
    })?;

    let record = StudentRecord::new(name, roll, marks);
    store.insert(record.clone())?;
    tracing::info!(
        roll = %record.roll(),
        total = record.total(),
        grade = %record.grade(),
        "student added"
    );
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MarkError;
    use crate::model::{Grade, Subject};
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn adds_and_derives_scores() {
        let mut store = InMemoryStore::new();
        let record = run(&mut store, "Alice", "R1", [90.0, 80.0, 70.0, 60.0, 50.0]).unwrap();

        assert_eq!(record.total(), 350.0);
        assert_eq!(record.average(), 70.0);
        assert_eq!(record.grade(), Grade::C);
        assert_eq!(store.len(), 1);
        assert_eq!(store.find("r1"), Some(&record));
    }

    #[test]
    fn stores_trimmed_name_and_roll() {
        let mut store = InMemoryStore::new();
        let record = run(&mut store, "  Alice ", " R1\n", [50.0; 5]).unwrap();
        assert_eq!(record.name(), "Alice");
        assert_eq!(record.roll(), "R1");
    }

    #[test]
    fn rejects_empty_name_and_roll() {
        let mut store = InMemoryStore::new();
        assert_eq!(run(&mut store, "  ", "R1", [50.0; 5]), Err(AddError::EmptyName));
        assert_eq!(run(&mut store, "Al", "", [50.0; 5]), Err(AddError::EmptyRoll));
        assert!(store.is_empty());
    }

    #[test]
    fn name_is_checked_before_roll() {
        let mut store = InMemoryStore::new();
        assert_eq!(run(&mut store, "", "", [50.0; 5]), Err(AddError::EmptyName));
    }

    #[test]
    fn rejects_duplicate_roll_in_any_case() {
        let mut fixture = StoreFixture::new().with_flat_student("Alice", "R01", 70.0);
        let before = fixture.store.records().to_vec();

        let err = run(&mut fixture.store, "Bob", "r01", [80.0; 5]).unwrap_err();
        assert_eq!(err, AddError::DuplicateRoll("r01".into()));
        assert_eq!(fixture.store.records(), before.as_slice());
    }

    #[test]
    fn duplicate_is_reported_before_bad_marks() {
        let mut store = StoreFixture::new()
            .with_flat_student("Alice", "R01", 70.0)
            .store;
        let err = run(&mut store, "Bob", "R01", [101.0; 5]).unwrap_err();
        assert!(matches!(err, AddError::DuplicateRoll(_)));
    }

    #[test]
    fn rejects_out_of_range_marks_without_mutation() {
        let mut store = InMemoryStore::new();
        for bad in [-1.0, 101.0] {
            let err = run(&mut store, "Al", "R1", [50.0, 50.0, bad, 50.0, 50.0]).unwrap_err();
            assert_eq!(
                err,
                AddError::InvalidMark(MarkError::OutOfRange {
                    subject: Subject::Science,
                    value: bad
                })
            );
        }
        assert!(store.is_empty());
    }

    #[test]
    fn accepts_boundary_marks() {
        let mut store = InMemoryStore::new();
        let record = run(&mut store, "Al", "R1", [0.0, 100.0, 0.0, 100.0, 0.0]).unwrap();
        assert_eq!(record.total(), 200.0);
        assert_eq!(record.average(), 40.0);
        assert_eq!(record.grade(), Grade::F);
    }
}
