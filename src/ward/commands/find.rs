use crate::commands::{get, list, search, CmdResult};
use crate::error::Result;
use crate::model::PatientId;
use crate::store::DataStore;

/// Free-form lookup: a blank query lists everything, a number is an id lookup,
/// anything else is a name search.
pub fn run<S: DataStore>(store: &S, query: &str) -> Result<CmdResult> {
    let query = query.trim();
    if query.is_empty() {
        return list::run(store);
    }
    match query.parse::<PatientId>() {
        Ok(id) => get::run(store, id),
        Err(_) => search::run(store, query),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    fn fixture() -> StoreFixture<crate::store::bst::PatientTree> {
        StoreFixture::tree()
            .with_patient(101, "John Doe", 30, "M")
            .with_patient(50, "Alice Brown", 45, "F")
    }

    #[test]
    fn numeric_query_looks_up_id() {
        let result = run(&fixture().store, " 50 ").unwrap();
        assert_eq!(result.listed_patients.len(), 1);
        assert_eq!(result.listed_patients[0].name, "Alice Brown");
    }

    #[test]
    fn text_query_searches_names() {
        let result = run(&fixture().store, "doe").unwrap();
        assert_eq!(result.listed_patients[0].id, 101);
    }

    #[test]
    fn blank_query_lists_all() {
        let result = run(&fixture().store, "").unwrap();
        assert_eq!(result.listed_patients.len(), 2);
    }
}
