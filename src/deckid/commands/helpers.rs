use crate::error::{DeckIdError, Result};
use crate::model::Group;
use crate::store::RecordStore;
use crate::view::{OrderedView, ViewScope};
use uuid::Uuid;

pub fn resolve_group<S: RecordStore>(store: &S, name: &str) -> Result<Group> {
    store
        .find_group(name)?
        .ok_or_else(|| DeckIdError::GroupNotFound(name.to_string()))
}

/// Snapshot of one group, or of the whole store when `group` is `None`.
pub fn view_for<S: RecordStore>(store: &S, field: &str, group: Option<&str>) -> Result<OrderedView> {
    let scope = match group {
        Some(name) => ViewScope::Group(resolve_group(store, name)?.id),
        None => ViewScope::All,
    };
    OrderedView::snapshot(store, field, scope)
}

/// Maps a 1-based list position to the record shown there.
pub fn resolve_position(view: &OrderedView, position: usize) -> Result<Uuid> {
    view.id_at(position).ok_or_else(|| {
        DeckIdError::Api(format!(
            "Position {} not found (list has {} entries)",
            position,
            view.len()
        ))
    })
}
