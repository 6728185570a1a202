use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, WardError};
use crate::model::PatientId;
use crate::store::DataStore;
use log::warn;

pub fn run<S: DataStore>(store: &mut S, id: PatientId) -> Result<CmdResult> {
    match store.delete(id) {
        Ok(patient) => Ok(CmdResult::default()
            .with_affected_patients(vec![patient])
            .with_message(CmdMessage::success(format!("Patient ID {} deleted.", id)))),
        Err(WardError::NotFound(id)) => {
            warn!("delete of unknown patient id {}", id);
            Ok(CmdResult::default().with_message(CmdMessage::error(format!(
                "Patient ID {} not found.",
                id
            ))))
        }
        Err(e) => Err(e),
    }
}
