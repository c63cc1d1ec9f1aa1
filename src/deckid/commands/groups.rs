use crate::commands::{CmdMessage, CmdResult, GroupSummary};
use crate::error::Result;
use crate::model::Group;
use crate::store::RecordStore;

use super::helpers::resolve_group;

pub fn add<S: RecordStore>(store: &mut S, name: &str, parent: Option<&str>) -> Result<CmdResult> {
    let group = match parent {
        Some(parent_name) => Group::child_of(name, &resolve_group(store, parent_name)?),
        None => Group::new(name),
    };
    store.add_group(&group)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Created group {}",
        store.group_display_name(&group.id)?
    )));
    Ok(result)
}

pub fn list<S: RecordStore>(store: &S, field: &str) -> Result<CmdResult> {
    let mut summaries = Vec::new();
    for group in store.list_groups()? {
        let members = store.group_members(&group.id, false)?;
        let mut labeled = 0;
        for id in &members {
            if store.get_record(id)?.has_field(field) {
                labeled += 1;
            }
        }
        summaries.push(GroupSummary {
            name: store.group_display_name(&group.id)?,
            records: members.len(),
            labeled,
        });
    }
    summaries.sort_by(|a, b| a.name.cmp(&b.name));

    let mut result = CmdResult::default();
    if summaries.is_empty() {
        result.add_message(CmdMessage::info("No groups yet."));
    }
    Ok(result.with_groups(summaries))
}
