use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

/// All categories, ordered by name.
pub fn list<S: DataStore>(store: &S) -> Result<CmdResult> {
    let categories = store.load_categories()?;
    let mut result = CmdResult::default();
    if categories.is_empty() {
        result.add_message(CmdMessage::info("No categories yet."));
    }
    Ok(result.with_categories(categories))
}

pub fn create<S: DataStore>(
    store: &mut S,
    name: &str,
    description: Option<String>,
    color: Option<String>,
) -> Result<CmdResult> {
    let category = store.create_category(name, description, color)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Category created: {}",
        category.name
    )));
    Ok(result.with_categories(vec![category]))
}
