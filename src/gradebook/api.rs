//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry point
//! for every gradebook operation, regardless of the UI in front of it.
//!
//! The facade:
//! - **Dispatches** to the appropriate command function
//! - **Returns typed results** (`Result<StudentRecord, AddError>`, `Option<..>`, ...)
//!
//! It does not validate (that is `commands/*.rs` and [`validation`](crate::validation)),
//! and it never prints.
//!
//! ## Generic Over RecordStore
//!
//! `GradebookApi<S: RecordStore>` is generic over the storage backend. The binary and
//! the tests both use `GradebookApi<InMemoryStore>`.

use crate::commands::{self, ClassStats, RankedRecord};
use crate::error::{AddError, EmptyStoreError, Result, UpdateError};
use crate::model::{StudentRecord, SUBJECT_COUNT};
use crate::store::RecordStore;
use std::path::{Path, PathBuf};

/// The main API facade for gradebook operations.
pub struct GradebookApi<S: RecordStore> {
    store: S,
    config_dir: PathBuf,
}

impl<S: RecordStore> GradebookApi<S> {
    pub fn new(store: S, config_dir: PathBuf) -> Self {
        Self { store, config_dir }
    }

    pub fn add_student(
        &mut self,
        name: &str,
        roll: &str,
        marks: [f64; SUBJECT_COUNT],
    ) -> std::result::Result<StudentRecord, AddError> {
        commands::add::run(&mut self.store, name, roll, marks)
    }

    pub fn find_by_roll(&self, roll: &str) -> Option<StudentRecord> {
        commands::find::run(&self.store, roll)
    }

    /// Cheap existence check, used to reject a duplicate roll before prompting for marks.
    pub fn roll_exists(&self, roll: &str) -> bool {
        self.store.contains(roll)
    }

    pub fn update_marks(
        &mut self,
        roll: &str,
        marks: [f64; SUBJECT_COUNT],
    ) -> std::result::Result<StudentRecord, UpdateError> {
        commands::update::run(&mut self.store, roll, marks)
    }

    pub fn list_all(&self) -> Vec<StudentRecord> {
        commands::list::run(&self.store)
    }

    pub fn ranked_by_total(&self) -> Vec<RankedRecord> {
        commands::rank::run(&self.store)
    }

    pub fn class_statistics(&self) -> std::result::Result<ClassStats, EmptyStoreError> {
        commands::stats::run(&self.store)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, GradeDistribution, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Grade;
    use crate::store::memory::InMemoryStore;
    use tempfile::TempDir;

    fn api() -> GradebookApi<InMemoryStore> {
        GradebookApi::new(InMemoryStore::new(), PathBuf::from("unused"))
    }

    #[test]
    fn add_then_find() {
        let mut api = api();
        let added = api.add_student("Alice", "R1", [90.0, 80.0, 70.0, 60.0, 50.0]).unwrap();
        assert_eq!(api.find_by_roll("r1"), Some(added));
        assert!(api.roll_exists("R1"));
        assert_eq!(api.len(), 1);
    }

    #[test]
    fn update_dispatches_to_store() {
        let mut api = api();
        api.add_student("Alice", "R1", [50.0; 5]).unwrap();
        let updated = api.update_marks("R1", [100.0; 5]).unwrap();
        assert_eq!(updated.grade(), Grade::A);
        assert_eq!(api.list_all()[0].grade(), Grade::A);
    }

    #[test]
    fn queries_on_empty_api() {
        let api = api();
        assert!(api.is_empty());
        assert!(api.list_all().is_empty());
        assert!(api.ranked_by_total().is_empty());
        assert_eq!(api.class_statistics(), Err(EmptyStoreError));
        assert!(api.find_by_roll("R1").is_none());
    }

    #[test]
    fn config_uses_api_config_dir() {
        let temp = TempDir::new().unwrap();
        let api = GradebookApi::new(InMemoryStore::new(), temp.path().to_path_buf());
        api.config(ConfigAction::Set("banner".into(), "false".into()))
            .unwrap();
        let shown = api.config(ConfigAction::ShowAll).unwrap();
        assert!(!shown.config.unwrap().banner);
        assert_eq!(api.config_dir(), temp.path());
    }
}
