use crate::commands::CmdResult;
use crate::error::Result;
use crate::session::Session;
use crate::stats::compute_stats;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S, session: &Session) -> Result<CmdResult> {
    let resources = store.load_resources(session)?;
    Ok(CmdResult::default().with_stats(compute_stats(&resources)))
}
