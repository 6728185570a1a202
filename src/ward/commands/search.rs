use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

/// Case-insensitive name search. Results keep ascending id order.
pub fn run<S: DataStore>(store: &S, needle: &str) -> Result<CmdResult> {
    let listed: Vec<_> = store.search_name(needle).into_iter().cloned().collect();

    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No patients found with name: {}",
            needle
        )));
    }
    Ok(result.with_listed_patients(listed))
}
