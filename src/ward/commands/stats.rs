use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatientStats {
    pub total: usize,
    /// Mean age rounded to the nearest year; 0 for an empty store
    pub average_age: u32,
    /// Patients per gender value. "M" and "F" are always present.
    pub gender_distribution: BTreeMap<String, usize>,
}

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let patients = store.list();
    let total = patients.len();

    let age_sum: u64 = patients.iter().map(|p| u64::from(p.age)).sum();
    let average_age = if total == 0 {
        0
    } else {
        (age_sum as f64 / total as f64).round() as u32
    };

    let mut gender_distribution: BTreeMap<String, usize> =
        [("F".to_string(), 0), ("M".to_string(), 0)].into_iter().collect();
    for patient in &patients {
        *gender_distribution.entry(patient.gender.clone()).or_default() += 1;
    }

    Ok(CmdResult::default().with_stats(PatientStats {
        total,
        average_age,
        gender_distribution,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::seed;
    use crate::store::bst::PatientTree;

    #[test]
    fn summarises_demo_data() {
        let mut store = PatientTree::new();
        seed::run(&mut store).unwrap();
        let stats = run(&store).unwrap().stats.unwrap();

        assert_eq!(stats.total, 5);
        // (30 + 45 + 60 + 12 + 28) / 5 = 35
        assert_eq!(stats.average_age, 35);
        assert_eq!(stats.gender_distribution["M"], 3);
        assert_eq!(stats.gender_distribution["F"], 2);
    }

    #[test]
    fn empty_store_has_zeroed_stats() {
        let stats = run(&PatientTree::new()).unwrap().stats.unwrap();
        assert_eq!(stats.total, 0);
        assert_eq!(stats.average_age, 0);
        assert_eq!(stats.gender_distribution.len(), 2);
    }

    #[test]
    fn other_genders_get_their_own_bucket() {
        let mut store = PatientTree::new();
        store
            .insert(crate::model::Patient::new(1, "Sam", 33, "X", ""))
            .unwrap();
        let stats = run(&store).unwrap().stats.unwrap();
        assert_eq!(stats.gender_distribution["X"], 1);
        assert_eq!(stats.average_age, 33);
    }
}
