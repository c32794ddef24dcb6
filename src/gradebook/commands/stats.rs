use crate::commands::{ClassStats, GradeDistribution};
use crate::error::EmptyStoreError;
use crate::store::RecordStore;

/// Aggregates class-wide statistics.
///
/// Highest and lowest scorers are chosen by total; on ties the earliest inserted
/// student wins. Fails on an empty store rather than averaging zero records.
pub fn run<S: RecordStore>(store: &S) -> Result<ClassStats, EmptyStoreError> {
    let records = store.records();
    let (first, rest) = records.split_first().ok_or(EmptyStoreError)?;

    let mut highest = first;
    let mut lowest = first;
    for record in rest {
        if record.total() > highest.total() {
            highest = record;
        }
        if record.total() < lowest.total() {
            lowest = record;
        }
    }

    let mut grade_distribution = GradeDistribution::default();
    for record in records {
        grade_distribution.record(record.grade());
    }

    let total_students = records.len();
    let class_average =
        records.iter().map(|r| r.average()).sum::<f64>() / total_students as f64;

    tracing::debug!(
        total_students,
        class_average,
        highest = %highest.roll(),
        lowest = %lowest.roll(),
        "class statistics"
    );

    Ok(ClassStats {
        total_students,
        class_average,
        highest_scorer: highest.clone(),
        lowest_scorer: lowest.clone(),
        grade_distribution,
    })
}
