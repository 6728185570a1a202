use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

/// All patients as a pretty-printed JSON array, in id order.
pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let json = serde_json::to_string_pretty(&store.list())?;
    Ok(CmdResult::default().with_export(json))
}
