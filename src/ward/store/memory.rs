use super::DataStore;
use crate::error::{Result, WardError};
use crate::model::{Patient, PatientId, PatientUpdate};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

/// Reference store backed by a `BTreeMap`.
/// Used to check [`PatientTree`](super::bst::PatientTree) against a known-good ordering.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    patients: BTreeMap<PatientId, Patient>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn insert(&mut self, patient: Patient) -> Result<()> {
        match self.patients.entry(patient.id) {
            Entry::Occupied(_) => Err(WardError::DuplicateKey(patient.id)),
            Entry::Vacant(slot) => {
                slot.insert(patient);
                Ok(())
            }
        }
    }

    fn get(&self, id: PatientId) -> Option<&Patient> {
        self.patients.get(&id)
    }

    fn find_matching(&self, matcher: &dyn Fn(&Patient) -> bool) -> Vec<&Patient> {
        self.patients.values().filter(|&p| matcher(p)).collect()
    }

    fn update(&mut self, id: PatientId, update: &PatientUpdate) -> Result<&Patient> {
        let patient = self.patients.get_mut(&id).ok_or(WardError::NotFound(id))?;
        update.apply_to(patient);
        Ok(patient)
    }

    fn delete(&mut self, id: PatientId) -> Result<Patient> {
        self.patients.remove(&id).ok_or(WardError::NotFound(id))
    }

    fn list(&self) -> Vec<&Patient> {
        self.patients.values().collect()
    }

    fn len(&self) -> usize {
        self.patients.len()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::store::bst::PatientTree;

    /// Builds a store pre-filled with generated patients.
    pub struct StoreFixture<S: DataStore> {
        pub store: S,
    }

    impl StoreFixture<PatientTree> {
        pub fn tree() -> Self {
            Self {
                store: PatientTree::new(),
            }
        }
    }

    impl StoreFixture<InMemoryStore> {
        pub fn reference() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }
    }

    impl<S: DataStore> StoreFixture<S> {
        pub fn with_ids(mut self, ids: &[PatientId]) -> Self {
            for &id in ids {
                let patient = Patient::new(id, format!("Patient {}", id), 40, "M", "None");
                self.store.insert(patient).unwrap();
            }
            self
        }

        pub fn with_patient(mut self, id: PatientId, name: &str, age: u32, gender: &str) -> Self {
            let patient = Patient::new(id, name, age, gender, "Checkup");
            self.store.insert(patient).unwrap();
            self
        }
    }
}
