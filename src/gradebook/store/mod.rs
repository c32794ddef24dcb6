//! # Storage Layer
//!
//! The [`RecordStore`] trait abstracts where student records live. The command layer
//! is generic over it, so business rules never depend on a concrete backend.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: the only backend. Records exist for the lifetime of
//!   the process and are never written to disk.
//!
//! ## Keys
//!
//! Records are addressed by roll number. Stores compare rolls through
//! [`normalize_roll`](crate::validation::normalize_roll), so `"R01"` and `" r01"` are
//! the same key.
//!
//! Mutation takes `&mut self`, which serializes every add and update and keeps the
//! uniqueness and consistency invariants intact.

use crate::error::AddError;
use crate::model::StudentRecord;

pub mod memory;

/// Abstract interface for student record storage.
pub trait RecordStore {
    /// Append a record. Fails with `DuplicateRoll` and leaves the store unchanged if
    /// the roll is already taken.
    fn insert(&mut self, record: StudentRecord) -> Result<(), AddError>;

    /// Look up a record by roll, case-insensitively.
    fn find(&self, roll: &str) -> Option<&StudentRecord>;

    /// Mutable lookup by roll, case-insensitively.
    fn find_mut(&mut self, roll: &str) -> Option<&mut StudentRecord>;

    /// All records in insertion order.
    fn records(&self) -> &[StudentRecord];

    fn contains(&self, roll: &str) -> bool {
        self.find(roll).is_some()
    }

    fn len(&self) -> usize {
        self.records().len()
    }

    fn is_empty(&self) -> bool {
        self.records().is_empty()
    }
}
