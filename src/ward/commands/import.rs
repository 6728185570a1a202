use crate::commands::{create, CmdMessage, CmdResult, MessageLevel};
use crate::error::Result;
use crate::model::Patient;
use crate::store::DataStore;
use log::info;
use std::fs;
use std::path::Path;

/// Insert a batch of patients. Duplicates are skipped with a warning each.
pub fn run<S: DataStore>(store: &mut S, patients: Vec<Patient>) -> Result<CmdResult> {
    let total = patients.len();
    let mut result = CmdResult::default();

    for patient in patients {
        let outcome = create::run(store, patient)?;
        if outcome.affected_patients.is_empty() {
            for message in outcome.messages {
                result.add_message(CmdMessage::warning(message.content));
            }
        } else {
            result.affected_patients.extend(outcome.affected_patients);
        }
    }

    let imported = result.affected_patients.len();
    info!("imported {}/{} patients", imported, total);
    result.add_message(CmdMessage::success(format!(
        "Imported {} of {} patients.",
        imported, total
    )));
    Ok(result)
}

/// Read a JSON array of patients and import it.
pub fn run_file<S: DataStore, P: AsRef<Path>>(store: &mut S, path: P) -> Result<CmdResult> {
    let content = fs::read_to_string(path.as_ref())?;
    let patients: Vec<Patient> = serde_json::from_str(&content)?;
    run(store, patients)
}

/// Number of records in `result` that were skipped.
pub fn skipped(result: &CmdResult) -> usize {
    result
        .messages
        .iter()
        .filter(|m| m.level == MessageLevel::Warning)
        .count()
}
