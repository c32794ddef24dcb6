use crate::commands::RankedRecord;
use crate::store::RecordStore;

/// Ranks students by total, highest first.
///
/// The sort is stable: students with equal totals keep their insertion order and
/// still receive distinct consecutive ranks.
pub fn run<S: RecordStore>(store: &S) -> Vec<RankedRecord> {
    let mut records = store.records().to_vec();
    records.sort_by(|a, b| b.total().total_cmp(&a.total()));

    records
        .into_iter()
        .enumerate()
        .map(|(i, record)| RankedRecord { rank: i + 1, record })
        .collect()
}
