use serde::{Deserialize, Serialize};

/// Unique key of a patient record. Orders the store.
pub type PatientId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    #[serde(rename = "patientId")]
    pub id: PatientId,
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub medical_history: String,
}

impl Patient {
    pub fn new(
        id: PatientId,
        name: impl Into<String>,
        age: u32,
        gender: impl Into<String>,
        medical_history: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            gender: gender.into(),
            medical_history: medical_history.into(),
        }
    }

    /// Case-insensitive substring match on the name.
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(&needle.to_lowercase())
    }
}

/// A set of field replacements for an existing patient.
///
/// `None` leaves a field as it is. An empty string is treated the same way:
/// blank input never clears a field. The id is not part of an update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatientUpdate {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub gender: Option<String>,
    pub medical_history: Option<String>,
}

impl PatientUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    pub fn medical_history(mut self, history: impl Into<String>) -> Self {
        self.medical_history = Some(history.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        !has_text(&self.name)
            && self.age.is_none()
            && !has_text(&self.gender)
            && !has_text(&self.medical_history)
    }

    /// Applies the non-empty replacements to `patient` in place.
    pub fn apply_to(&self, patient: &mut Patient) {
        replace_text(&mut patient.name, &self.name);
        if let Some(age) = self.age {
            patient.age = age;
        }
        replace_text(&mut patient.gender, &self.gender);
        replace_text(&mut patient.medical_history, &self.medical_history);
    }
}

fn has_text(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

fn replace_text(field: &mut String, value: &Option<String>) {
    if let Some(v) = value.as_deref().filter(|v| !v.is_empty()) {
        *field = v.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> Patient {
        Patient::new(7, "Jane Doe", 41, "F", "Migraine")
    }

    #[test]
    fn name_match_is_case_insensitive_substring() {
        let names = ["Jane Doe", "jane smith", "Marijane", "Janice"];
        let matched: Vec<_> = names
            .iter()
            .filter(|n| Patient::new(1, **n, 1, "", "").name_contains("jane"))
            .collect();
        assert_eq!(matched, vec![&"Jane Doe", &"jane smith", &"Marijane"]);
    }

    #[test]
    fn update_changes_only_given_fields() {
        let mut patient = jane();
        PatientUpdate::new().age(42).apply_to(&mut patient);
        assert_eq!(patient.age, 42);
        assert_eq!(patient.name, "Jane Doe");
        assert_eq!(patient.gender, "F");
        assert_eq!(patient.medical_history, "Migraine");
    }

    #[test]
    fn empty_strings_leave_fields_unchanged() {
        let mut patient = jane();
        let update = PatientUpdate::new().name("").medical_history("");
        assert!(update.is_empty());
        update.apply_to(&mut patient);
        assert_eq!(patient, jane());
    }

    #[test]
    fn serializes_with_original_field_names() {
        let json = serde_json::to_value(jane()).unwrap();
        assert_eq!(json["patientId"], 7);
        assert_eq!(json["medicalHistory"], "Migraine");
    }
}
