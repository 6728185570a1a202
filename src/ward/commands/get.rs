use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::PatientId;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S, id: PatientId) -> Result<CmdResult> {
    let result = match store.get(id) {
        Some(patient) => CmdResult::default().with_listed_patients(vec![patient.clone()]),
        None => CmdResult::default().with_message(CmdMessage::info("Record not found.")),
    };
    Ok(result)
}
