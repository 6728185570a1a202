use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use ward::error::WardError;
use ward::model::{Patient, PatientId, PatientUpdate};
use ward::store::bst::PatientTree;
use ward::store::memory::InMemoryStore;
use ward::store::DataStore;

const NAMES: &[&str] = &["Jane Doe", "jane smith", "Marijane", "Janice", "Bob White", "Ana"];
const GENDERS: &[&str] = &["F", "M", "X"];

fn random_patient<R: Rng>(rng: &mut R, key_space: PatientId) -> Patient {
    Patient::new(
        rng.gen_range(0..key_space),
        NAMES[rng.gen_range(0..NAMES.len())],
        rng.gen_range(0..100),
        GENDERS[rng.gen_range(0..GENDERS.len())],
        format!("note {}", rng.gen::<u16>()),
    )
}

fn random_update<R: Rng>(rng: &mut R) -> PatientUpdate {
    let mut update = PatientUpdate::new();
    if rng.gen_bool(0.5) {
        update.name = Some(if rng.gen_bool(0.3) {
            String::new()
        } else {
            NAMES[rng.gen_range(0..NAMES.len())].to_string()
        });
    }
    if rng.gen_bool(0.5) {
        update.age = Some(rng.gen_range(0..100));
    }
    if rng.gen_bool(0.3) {
        update.medical_history = Some(String::new());
    }
    update
}

/// Both stores report the same variant for an outcome.
fn same_outcome<T, U>(a: &Result<T, WardError>, b: &Result<U, WardError>) -> bool {
    match (a, b) {
        (Ok(_), Ok(_)) => true,
        (Err(WardError::DuplicateKey(x)), Err(WardError::DuplicateKey(y))) => x == y,
        (Err(WardError::NotFound(x)), Err(WardError::NotFound(y))) => x == y,
        _ => false,
    }
}

fn replay(seed: u64, steps: usize, key_space: PatientId) {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let mut tree = PatientTree::new();
    let mut reference = InMemoryStore::new();

    for step in 0..steps {
        match rng.gen_range(0..10) {
            0..=4 => {
                let patient = random_patient(&mut rng, key_space);
                let a = tree.insert(patient.clone());
                let b = reference.insert(patient);
                assert!(same_outcome(&a, &b), "insert diverged at step {}", step);
            }
            5..=6 => {
                let id = rng.gen_range(0..key_space);
                let a = tree.delete(id);
                let b = reference.delete(id);
                assert!(same_outcome(&a, &b), "delete diverged at step {}", step);
                if let (Ok(x), Ok(y)) = (&a, &b) {
                    assert_eq!(x, y);
                }
                assert!(tree.get(id).is_none());
            }
            7..=8 => {
                let id = rng.gen_range(0..key_space);
                let update = random_update(&mut rng);
                let a = tree.update(id, &update).map(|p| p.clone());
                let b = reference.update(id, &update).map(|p| p.clone());
                assert!(same_outcome(&a, &b), "update diverged at step {}", step);
            }
            _ => {
                let id = rng.gen_range(0..key_space);
                assert_eq!(tree.get(id), reference.get(id));
            }
        }

        assert_eq!(tree.len(), reference.len());
        assert_eq!(tree.list(), reference.list(), "listing diverged at step {}", step);
    }

    let ids: Vec<_> = tree.list().iter().map(|p| p.id).collect();
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(tree.search_name("jane"), reference.search_name("jane"));
    assert_eq!(tree.search_name("JANICE"), reference.search_name("janice"));
}

#[test]
fn replay_matches_reference_small_key_space() {
    for seed in 0..16 {
        replay(seed, 400, 32);
    }
}

#[test]
fn replay_matches_reference_sparse_keys() {
    for seed in 100..104 {
        replay(seed, 1_000, 10_000);
    }
}

#[test]
fn insert_then_delete_everything_in_random_order() {
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    let mut tree = PatientTree::new();
    let mut keys: Vec<PatientId> = (0..200).map(|k| k * 3 - 150).collect();

    keys.shuffle(&mut rng);
    for &k in &keys {
        tree.insert(Patient::new(k, "P", 1, "M", "")).unwrap();
    }

    keys.shuffle(&mut rng);
    for (n, &k) in keys.iter().enumerate() {
        tree.delete(k).unwrap();
        assert!(tree.get(k).is_none());
        assert_eq!(tree.len(), keys.len() - n - 1);
        let remaining: Vec<_> = tree.iter().map(|p| p.id).collect();
        assert!(remaining.windows(2).all(|w| w[0] < w[1]));
    }
    assert!(tree.is_empty());
}
