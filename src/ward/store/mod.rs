//! # Storage Layer
//!
//! This module defines the storage abstraction for ward. The [`DataStore`] trait
//! is what the command layer talks to; it never sees tree nodes.
//!
//! ## Implementations
//!
//! - [`bst::PatientTree`]: the production store, an unbalanced binary search tree
//!   keyed by [`PatientId`]. Shape follows insertion order, so sorted input
//!   degrades it to a list (O(n) operations). There is no rebalancing.
//!
//! - [`memory::InMemoryStore`]: a `BTreeMap`-backed store used as the reference
//!   ordering in tests. Replaying the same operations against both stores must
//!   produce the same observable results.
//!
//! ## Outcomes
//!
//! Every failure is a value: [`WardError::DuplicateKey`] for inserts of a present
//! key, [`WardError::NotFound`] for updates and deletes of an absent one. A failed
//! operation leaves the store exactly as it was. "Nothing matched" is an empty
//! `Vec`, never an error.
//!
//! [`WardError::DuplicateKey`]: crate::error::WardError::DuplicateKey
//! [`WardError::NotFound`]: crate::error::WardError::NotFound

use crate::error::Result;
use crate::model::{Patient, PatientId, PatientUpdate};

pub mod bst;
pub mod memory;

/// Abstract interface for patient storage.
///
/// All listings are in ascending id order.
pub trait DataStore {
    /// Insert a new patient; rejects a key that is already present.
    fn insert(&mut self, patient: Patient) -> Result<()>;

    /// Get a patient by id
    fn get(&self, id: PatientId) -> Option<&Patient>;

    /// Every patient accepted by `matcher`
    fn find_matching(&self, matcher: &dyn Fn(&Patient) -> bool) -> Vec<&Patient>;

    /// Apply field replacements in place, returning the updated record.
    fn update(&mut self, id: PatientId, update: &PatientUpdate) -> Result<&Patient>;

    /// Remove a patient, returning the removed record.
    fn delete(&mut self, id: PatientId) -> Result<Patient>;

    /// All patients
    fn list(&self) -> Vec<&Patient>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, id: PatientId) -> bool {
        self.get(id).is_some()
    }

    /// Case-insensitive substring search on names.
    fn search_name(&self, needle: &str) -> Vec<&Patient> {
        self.find_matching(&|p: &Patient| p.name_contains(needle))
    }
}
