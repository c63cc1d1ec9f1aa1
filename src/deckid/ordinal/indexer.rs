use crate::error::Result;
use crate::label::{self, read_label, LabelError};
use crate::model::Record;
use crate::store::RecordStore;
use tracing::{debug, info};
use uuid::Uuid;

use super::sweep::sweep;

/// Highest valid index among the records of `group`, or 0 when there is none.
///
/// Subgroups are excluded. Absent and malformed labels are skipped.
pub fn max_index<S: RecordStore>(store: &S, field: &str, group: &Uuid) -> Result<u64> {
    let mut max = 0;
    for id in store.group_members(group, false)? {
        let record = store.get_record(&id)?;
        match read_label(&record, field) {
            Ok(label) => max = max.max(label.index),
            Err(LabelError::Absent) => {}
            Err(LabelError::Malformed(raw)) => {
                debug!(record = %id, label = %raw, "ignoring malformed label");
            }
        }
    }
    Ok(max)
}

/// The index a new record of `group` should get.
///
/// Sweeps the group first, so the answer is always `N + 1` for a group with
/// `N` labeled records rather than one past a stale gap.
pub fn next_index<S: RecordStore>(store: &mut S, field: &str, group: &Uuid) -> Result<u64> {
    sweep(store, field, group)?;
    Ok(max_index(store, field, group)? + 1)
}

/// Writes the next free label of `group` onto `record` without persisting it.
///
/// Meant for records that are about to be added; the host stores them.
pub fn assign_label<S: RecordStore>(
    store: &mut S,
    field: &str,
    record: &mut Record,
    group: &Uuid,
) -> Result<String> {
    let group_name = store.group_display_name(group)?;
    let index = next_index(store, field, group)?;
    if index == 1 {
        info!(group = %group_name, "no valid label found, starting at 00001");
    }

    let new_label = label::format(&group_name, index);
    record.set_field(field, new_label.clone());
    info!(record = %record.id, label = %new_label, "assigned label");
    Ok(new_label)
}

/// Like [`assign_label`], but also persists the record.
pub fn assign_label_and_persist<S: RecordStore>(
    store: &mut S,
    field: &str,
    record: &mut Record,
    group: &Uuid,
) -> Result<String> {
    let new_label = assign_label(store, field, record, group)?;
    store.update_record(record)?;
    Ok(new_label)
}
