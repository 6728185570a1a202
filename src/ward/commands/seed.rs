use crate::commands::{create, CmdResult};
use crate::error::Result;
use crate::model::Patient;
use crate::store::DataStore;

/// The five demo patients loaded at start-up unless disabled.
pub fn demo_patients() -> Vec<Patient> {
    vec![
        Patient::new(101, "John Doe", 30, "M", "Flu"),
        Patient::new(50, "Alice Brown", 45, "F", "Diabetes"),
        Patient::new(150, "Bob White", 60, "M", "Hypertension"),
        Patient::new(75, "Charlie Green", 12, "M", "Asthma"),
        Patient::new(120, "Diana Prince", 28, "F", "Checkup"),
    ]
}

pub fn run<S: DataStore>(store: &mut S) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    for patient in demo_patients() {
        let outcome = create::run(store, patient)?;
        result.affected_patients.extend(outcome.affected_patients);
        result.messages.extend(outcome.messages);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::bst::PatientTree;

    #[test]
    fn loads_demo_data_in_insertion_order() {
        let mut store = PatientTree::new();
        let result = run(&mut store).unwrap();

        assert_eq!(result.affected_patients.len(), 5);
        assert_eq!(store.height(), 3);
        let ids: Vec<_> = store.list().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![50, 75, 101, 120, 150]);
    }

    #[test]
    fn seeding_twice_reports_duplicates() {
        let mut store = PatientTree::new();
        run(&mut store).unwrap();
        let result = run(&mut store).unwrap();
        assert!(result.affected_patients.is_empty());
        assert_eq!(result.messages.len(), 5);
        assert!(result.has_errors());
    }
}
