use crate::commands::{CmdMessage, CmdResult};
use crate::config::DeckIdConfig;
use crate::error::Result;
use crate::ordinal::sweep;
use crate::store::RecordStore;

use super::helpers::resolve_group;

pub fn run<S: RecordStore>(
    store: &mut S,
    config: &DeckIdConfig,
    group_name: &str,
) -> Result<CmdResult> {
    let group = resolve_group(store, group_name)?;
    let report = sweep(store, &config.label_field, &group.id)?;

    let mut result = CmdResult::default();
    if report.changed == 0 {
        result.add_message(CmdMessage::success(format!(
            "{}: {} label(s) already contiguous.",
            group_name, report.visited
        )));
    } else {
        result.add_message(CmdMessage::warning(format!(
            "{}: renumbered {} of {} label(s).",
            group_name, report.changed, report.visited
        )));
    }
    Ok(result)
}
