use crate::model::StudentRecord;
use crate::store::RecordStore;

/// All records in insertion order. An empty list is a normal result.
pub fn run<S: RecordStore>(store: &S) -> Vec<StudentRecord> {
    store.records().to_vec()
}
