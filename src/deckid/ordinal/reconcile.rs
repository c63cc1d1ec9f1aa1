use crate::error::Result;
use crate::label;
use crate::model::Record;
use crate::store::RecordStore;
use std::collections::HashMap;
use tracing::{debug, info};
use uuid::Uuid;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReconcileReport {
    /// Records carrying the label field.
    pub visited: usize,
    /// Records whose label was rewritten.
    pub updated: usize,
    /// Records without the label field.
    pub skipped: usize,
}

/// Renumbers every labeled record in `ids` into contiguous per-group sequences.
///
/// Records are visited in lexical order of their raw label text (a missing
/// label sorts as the empty string, ties keep the order of `ids`). Each
/// record's group comes from the store, not from its label prefix. Every group
/// has its own counter starting at 1; a record is only written when its label
/// differs from `<group>@<counter>`.
///
/// Records without the label field are skipped and never given one.
pub fn reconcile<S: RecordStore>(
    store: &mut S,
    field: &str,
    ids: &[Uuid],
) -> Result<ReconcileReport> {
    let mut records = ids
        .iter()
        .map(|id| store.get_record(id))
        .collect::<Result<Vec<Record>>>()?;
    records.sort_by(|a, b| {
        a.field(field)
            .unwrap_or_default()
            .cmp(b.field(field).unwrap_or_default())
    });

    let mut counters: HashMap<String, u64> = HashMap::new();
    let mut report = ReconcileReport::default();

    for mut record in records {
        if !record.has_field(field) {
            report.skipped += 1;
            continue;
        }
        report.visited += 1;

        let group = store.resolve_group(&record)?;
        let group_name = store.group_display_name(&group)?;
        let counter = counters.entry(group_name.clone()).or_insert(0);
        *counter += 1;

        let expected = label::format(&group_name, *counter);
        if record.field(field) != Some(expected.as_str()) {
            debug!(record = %record.id, label = %expected, "reconcile");
            record.set_field(field, expected);
            store.update_record(&record)?;
            report.updated += 1;
        }
    }

    info!(
        visited = report.visited,
        updated = report.updated,
        skipped = report.skipped,
        "reconciled labels"
    );
    Ok(report)
}
