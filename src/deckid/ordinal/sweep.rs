use crate::error::Result;
use crate::label::{self, read_label, Label, LabelError};
use crate::model::Record;
use crate::store::RecordStore;
use tracing::{debug, info, warn};
use uuid::Uuid;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SweepReport {
    /// Labeled records rewritten by the sweep.
    pub visited: usize,
    /// How many of those ended up with a different label.
    pub changed: usize,
}

/// Renumbers the labeled records of `group` to `1..N`.
///
/// Subgroups are not included. Records are ordered by their current index;
/// malformed labels count as lower than any index and so go first, keeping
/// their relative member order. Records without the label field are left
/// alone. Every visited record is persisted, changed or not.
///
/// A well-formed label keeps its own prefix. A malformed one is rebuilt from
/// the group's display name.
pub fn sweep<S: RecordStore>(store: &mut S, field: &str, group: &Uuid) -> Result<SweepReport> {
    let group_name = store.group_display_name(group)?;

    let mut entries: Vec<(Option<Label>, Record)> = Vec::new();
    for id in store.group_members(group, false)? {
        let record = store.get_record(&id)?;
        match read_label(&record, field) {
            Ok(label) => entries.push((Some(label), record)),
            Err(LabelError::Absent) => {}
            Err(LabelError::Malformed(raw)) => {
                warn!(record = %id, label = %raw, "malformed label, sorting to front of {}", group_name);
                entries.push((None, record));
            }
        }
    }

    // Stable: equal indexes and malformed labels keep member order.
    entries.sort_by_key(|(label, _)| label.as_ref().map(|l| l.index));

    let mut report = SweepReport::default();
    for (position, (label, mut record)) in entries.into_iter().enumerate() {
        let prefix = match label {
            Some(label) => label.prefix,
            None => group_name.clone(),
        };
        let relabeled = label::format(&prefix, position as u64 + 1);
        if record.field(field) != Some(relabeled.as_str()) {
            report.changed += 1;
        }
        debug!(record = %record.id, label = %relabeled, "sweep");
        record.set_field(field, relabeled);
        store.update_record(&record)?;
        report.visited += 1;
    }

    info!(
        group = %group_name,
        visited = report.visited,
        changed = report.changed,
        "swept group"
    );
    Ok(report)
}
