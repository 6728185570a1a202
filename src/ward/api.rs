//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every ward operation, whatever the UI.
//!
//! The facade dispatches to `commands/*.rs` and returns structured
//! [`CmdResult`]s. It holds no business logic and performs no terminal I/O.
//!
//! `WardApi<S: DataStore>` is generic over the storage backend:
//! - Production: `WardApi<PatientTree>`
//! - Testing: either store; `InMemoryStore` is the reference ordering

use crate::commands;
use crate::error::{Result, WardError};
use crate::model::{Patient, PatientId, PatientUpdate};
use crate::store::DataStore;
use std::path::{Path, PathBuf};

/// The main API facade for ward operations.
pub struct WardApi<S: DataStore> {
    store: S,
    config_dir: Option<PathBuf>,
}

impl<S: DataStore> WardApi<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            config_dir: None,
        }
    }

    pub fn with_config_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config_dir = Some(dir.into());
        self
    }

    pub fn create_patient(&mut self, patient: Patient) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, patient)
    }

    pub fn get_patient(&self, id: PatientId) -> Result<commands::CmdResult> {
        commands::get::run(&self.store, id)
    }

    pub fn search_patients(&self, needle: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, needle)
    }

    pub fn find(&self, query: &str) -> Result<commands::CmdResult> {
        commands::find::run(&self.store, query)
    }

    pub fn update_patient(
        &mut self,
        id: PatientId,
        update: &PatientUpdate,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, id, update)
    }

    pub fn delete_patient(&mut self, id: PatientId) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn list_patients(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn stats(&self) -> Result<commands::CmdResult> {
        commands::stats::run(&self.store)
    }

    pub fn export(&self) -> Result<commands::CmdResult> {
        commands::export::run(&self.store)
    }

    pub fn import_patients(&mut self, patients: Vec<Patient>) -> Result<commands::CmdResult> {
        commands::import::run(&mut self.store, patients)
    }

    pub fn import_file<P: AsRef<Path>>(&mut self, path: P) -> Result<commands::CmdResult> {
        commands::import::run_file(&mut self.store, path)
    }

    pub fn seed_demo(&mut self) -> Result<commands::CmdResult> {
        commands::seed::run(&mut self.store)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        let dir = self
            .config_dir
            .as_deref()
            .ok_or_else(|| WardError::Api("No config directory available".to_string()))?;
        commands::config::run(dir, action)
    }

    /// Read-only access to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, PatientStats};
