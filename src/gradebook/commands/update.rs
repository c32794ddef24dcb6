use crate::error::UpdateError;
use crate::model::{Marks, StudentRecord, SUBJECT_COUNT};
use crate::store::RecordStore;

/// Replaces a student's marks.
///
/// Marks are validated before the record is touched, so a rejected update leaves
/// the old marks and derived fields in place.
pub fn run<S: RecordStore>(
    store: &mut S,
    roll: &str,
    marks: [f64; SUBJECT_COUNT],
) -> Result<StudentRecord, UpdateError> {
    let Some(record) = store.find_mut(roll) else {
        tracing::warn!(roll = %roll.trim(), "update of unknown roll");
        return Err(UpdateError::NotFound(roll.trim().to_string()));
    };
    let marks = Marks::new(marks)?;
    record.set_marks(marks);

    tracing::info!(
        roll = %record.roll(),
        average = record.average(),
        grade = %record.grade(),
        "marks updated"
    );
    Ok(record.clone())
}
