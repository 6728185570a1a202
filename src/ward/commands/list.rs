use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let listed: Vec<_> = store.list().into_iter().cloned().collect();

    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info("No records found."));
    }
    Ok(result.with_listed_patients(listed))
}
