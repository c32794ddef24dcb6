//! End-to-end library scenarios through the API facade.

use gradebook::api::GradebookApi;
use gradebook::error::{AddError, EmptyStoreError, MarkError, UpdateError};
use gradebook::model::{Grade, Subject};
use gradebook::store::memory::InMemoryStore;
use std::path::PathBuf;

fn api() -> GradebookApi<InMemoryStore> {
    GradebookApi::new(InMemoryStore::new(), PathBuf::from("unused"))
}

#[test]
fn alice_and_bob_session() {
    let mut api = api();
    let alice = api
        .add_student("Alice", "R1", [90.0, 80.0, 70.0, 60.0, 50.0])
        .unwrap();
    assert_eq!(alice.total(), 350.0);
    assert_eq!(alice.average(), 70.0);
    assert_eq!(alice.grade(), Grade::C);

    api.add_student("Bob", "R2", [100.0; 5]).unwrap();

    let ranked = api.ranked_by_total();
    assert_eq!(ranked[0].record.name(), "Bob");
    assert_eq!(ranked[0].rank, 1);
    assert_eq!(ranked[1].record.name(), "Alice");
    assert_eq!(ranked[1].rank, 2);

    let stats = api.class_statistics().unwrap();
    assert_eq!(stats.total_students, 2);
    assert_eq!(stats.class_average, 85.0);
    assert_eq!(stats.highest_scorer.name(), "Bob");
    assert_eq!(stats.lowest_scorer.name(), "Alice");
    assert_eq!(stats.grade_distribution.count(Grade::A), 1);
    assert_eq!(stats.grade_distribution.count(Grade::C), 1);
    assert_eq!(stats.grade_distribution.count(Grade::B), 0);

    let updated = api.update_marks("r1", [95.0; 5]).unwrap();
    assert_eq!(updated.grade(), Grade::A);
    assert_eq!(api.find_by_roll("R1").unwrap().total(), 475.0);
    assert_eq!(api.class_statistics().unwrap().grade_distribution.count(Grade::A), 2);
}

#[test]
fn duplicate_roll_leaves_store_unchanged() {
    let mut api = api();
    api.add_student("Alice", "R1", [90.0, 80.0, 70.0, 60.0, 50.0])
        .unwrap();

    let err = api.add_student("Eve", " r1 ", [10.0; 5]).unwrap_err();
    assert!(matches!(err, AddError::DuplicateRoll(_)));
    assert_eq!(api.len(), 1);
    assert_eq!(api.find_by_roll("R1").unwrap().name(), "Alice");
}

#[test]
fn invalid_update_is_all_or_nothing() {
    let mut api = api();
    api.add_student("Alice", "R1", [90.0, 80.0, 70.0, 60.0, 50.0])
        .unwrap();

    let err = api
        .update_marks("R1", [100.0, 100.0, 101.0, 100.0, 100.0])
        .unwrap_err();
    match err {
        UpdateError::InvalidMark(MarkError::OutOfRange { subject, value }) => {
            assert_eq!(subject, Subject::Science);
            assert_eq!(value, 101.0);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(api.find_by_roll("R1").unwrap().total(), 350.0);

    assert!(matches!(
        api.update_marks("R9", [0.0; 5]),
        Err(UpdateError::NotFound(_))
    ));
}

#[test]
fn boundary_marks_are_accepted() {
    let mut api = api();
    let low = api.add_student("Low", "L", [0.0; 5]).unwrap();
    assert_eq!(low.grade(), Grade::F);
    let high = api.add_student("High", "H", [100.0; 5]).unwrap();
    assert_eq!(high.grade(), Grade::A);
    let edge = api.add_student("Edge", "E", [90.0; 5]).unwrap();
    assert_eq!(edge.grade(), Grade::A);
    let just_below = api.add_student("Below", "B", [89.99; 5]).unwrap();
    assert_eq!(just_below.grade(), Grade::B);
}

#[test]
fn queries_on_empty_store() {
    let api = api();
    assert!(api.list_all().is_empty());
    assert!(api.ranked_by_total().is_empty());
    assert_eq!(api.class_statistics().unwrap_err(), EmptyStoreError);
    assert!(api.find_by_roll("R1").is_none());
}

#[test]
fn list_preserves_insertion_order() {
    let mut api = api();
    for (name, roll) in [("Cy", "R3"), ("Alice", "R1"), ("Bob", "R2")] {
        api.add_student(name, roll, [50.0; 5]).unwrap();
    }
    let names: Vec<_> = api
        .list_all()
        .iter()
        .map(|r| r.name().to_string())
        .collect();
    assert_eq!(names, ["Cy", "Alice", "Bob"]);

    // Equal totals keep insertion order in the ranking.
    let ranked: Vec<_> = api
        .ranked_by_total()
        .iter()
        .map(|r| r.record.roll().to_string())
        .collect();
    assert_eq!(ranked, ["R3", "R1", "R2"]);
}
