use crate::commands::{CmdMessage, CmdResult};
use crate::config::DeckIdConfig;
use crate::error::Result;
use crate::store::RecordStore;

use super::helpers::view_for;

/// Rewrites labels so index order matches the listed order of `group` (or of everything).
pub fn run<S: RecordStore>(
    store: &mut S,
    config: &DeckIdConfig,
    group: Option<&str>,
) -> Result<CmdResult> {
    let view = view_for(store, &config.label_field, group)?;
    let changed = view.renumber(store, &config.label_field)?;

    let mut result = CmdResult::default();
    result.add_message(if changed == 0 {
        CmdMessage::success("Labels already follow list order.")
    } else {
        CmdMessage::warning(format!("Renumbered {} label(s).", changed))
    });
    let entries = view.entries(store, &config.label_field, &config.front_field)?;
    Ok(result.with_listed_entries(entries))
}
