use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, WardError};
use crate::model::{PatientId, PatientUpdate};
use crate::store::DataStore;
use log::warn;

pub fn run<S: DataStore>(store: &mut S, id: PatientId, update: &PatientUpdate) -> Result<CmdResult> {
    match store.update(id, update) {
        Ok(patient) => {
            let patient = patient.clone();
            let message = if update.is_empty() {
                CmdMessage::info("No changes.")
            } else {
                CmdMessage::success("Patient record updated.")
            };
            Ok(CmdResult::default()
                .with_affected_patients(vec![patient])
                .with_message(message))
        }
        Err(WardError::NotFound(id)) => {
            warn!("update of unknown patient id {}", id);
            Ok(CmdResult::default().with_message(CmdMessage::error("Patient not found.")))
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::Patient;
    use crate::store::bst::PatientTree;

    fn store() -> PatientTree {
        let mut store = PatientTree::new();
        store
            .insert(Patient::new(50, "Alice Brown", 45, "F", "Diabetes"))
            .unwrap();
        store
    }

    #[test]
    fn changes_exactly_the_given_field() {
        let mut store = store();
        let update = PatientUpdate::new().medical_history("Type 2 Diabetes");
        let result = run(&mut store, 50, &update).unwrap();

        assert_eq!(result.messages[0].level, MessageLevel::Success);
        let patient = store.get(50).unwrap();
        assert_eq!(patient.medical_history, "Type 2 Diabetes");
        assert_eq!(patient.name, "Alice Brown");
        assert_eq!(patient.age, 45);
        assert_eq!(patient.gender, "F");
    }

    #[test]
    fn blank_fields_keep_previous_values() {
        let mut store = store();
        let update = PatientUpdate::new().name("").gender("");
        let result = run(&mut store, 50, &update).unwrap();

        assert_eq!(result.messages[0].content, "No changes.");
        assert_eq!(store.get(50).unwrap().name, "Alice Brown");
        assert_eq!(store.get(50).unwrap().gender, "F");
    }

    #[test]
    fn unknown_id_is_reported() {
        let mut store = store();
        let result = run(&mut store, 51, &PatientUpdate::new().age(3)).unwrap();
        assert!(result.has_errors());
        assert!(result.affected_patients.is_empty());
    }
}
