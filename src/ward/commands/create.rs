use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, WardError};
use crate::model::Patient;
use crate::store::DataStore;
use log::warn;

pub fn run<S: DataStore>(store: &mut S, patient: Patient) -> Result<CmdResult> {
    match store.insert(patient.clone()) {
        Ok(()) => {
            let message = CmdMessage::success(format!("Patient {} added.", patient.name));
            Ok(CmdResult::default()
                .with_affected_patients(vec![patient])
                .with_message(message))
        }
        Err(WardError::DuplicateKey(id)) => {
            warn!("rejected insert of duplicate patient id {}", id);
            Ok(CmdResult::default().with_message(CmdMessage::error(format!(
                "Patient ID {} already exists.",
                id
            ))))
        }
        Err(e) => Err(e),
    }
}
