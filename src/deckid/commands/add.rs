use crate::commands::{CmdMessage, CmdResult};
use crate::config::DeckIdConfig;
use crate::error::Result;
use crate::model::Record;
use crate::ordinal::assign_label;
use crate::store::RecordStore;
use uuid::Uuid;

use super::helpers::resolve_group;

/// Labels a record that is about to be added to `group`.
///
/// Only records that carry the label field get a label; others pass through
/// untouched and stay outside ordinal bookkeeping.
pub fn prepare<S: RecordStore>(
    store: &mut S,
    field: &str,
    record: &mut Record,
    group: &Uuid,
) -> Result<Option<String>> {
    if !record.has_field(field) {
        return Ok(None);
    }
    assign_label(store, field, record, group).map(Some)
}

pub fn run<S: RecordStore>(
    store: &mut S,
    config: &DeckIdConfig,
    group_name: &str,
    front: String,
    labeled: bool,
) -> Result<CmdResult> {
    let group = resolve_group(store, group_name)?;

    let mut fields = vec![(config.front_field.clone(), front)];
    if labeled {
        fields.push((config.label_field.clone(), String::new()));
    }
    let mut record = Record::new(group.id, fields);

    let label = prepare(store, &config.label_field, &mut record, &group.id)?;
    store.insert_record(&record)?;

    let mut result = CmdResult::default();
    match &label {
        Some(label) => result.add_message(CmdMessage::success(format!("Added {}", label))),
        None => result.add_message(CmdMessage::success(format!(
            "Added unlabeled record to {}",
            group_name
        ))),
    }
    Ok(result.with_affected_records(vec![record]))
}
