//! # Ordered Views
//!
//! An [`OrderedView`] is the list a user is looking at while reordering: a
//! snapshot of record IDs taken once, then updated in place as moves succeed.
//!
//! ## Why a Snapshot
//!
//! Moving a record is a swap of its index with a neighbor's. The neighbor is
//! whoever sits next to it **in the view**, which is the order the user sees.
//! After a successful swap the two IDs trade places in the view as well, so
//! the list on screen and the labels in the store agree without re-querying.
//!
//! Nothing resyncs the view with the store afterwards. If something else
//! changes the store, take a new snapshot.
//!
//! ## Positions
//!
//! Lists show 1-based positions (`1.`, `2.`, ...). [`OrderedView::id_at`]
//! maps such a position back to the record it points at, the same way display
//! indexes are resolved to UUIDs elsewhere.

use crate::error::{DeckIdError, Result};
use crate::label::{self, read_label, LabelError};
use crate::ordinal::swap::{swap, SwapOutcome};
use crate::store::RecordStore;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tracing::{debug, warn};
use uuid::Uuid;

/// Which records a snapshot covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewScope {
    /// Every record in the store.
    All,
    /// The records of one group, without its subgroups.
    Group(Uuid),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Result of a single move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    /// There is no neighbor in the requested direction.
    AtEdge,
    /// The neighbor exists but the swap was refused.
    Refused(SwapOutcome),
}

impl MoveOutcome {
    pub fn is_moved(self) -> bool {
        self == MoveOutcome::Moved
    }
}

/// One row of a displayed view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewEntry {
    pub position: usize,
    pub id: Uuid,
    pub label: Option<String>,
    pub front: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderedView {
    ids: Vec<Uuid>,
}

impl OrderedView {
    pub fn new(ids: Vec<Uuid>) -> Self {
        Self { ids }
    }

    /// Takes a snapshot of `scope`, sorted the way a label column sorts.
    ///
    /// Labeled records come first in raw label order; records without the
    /// label field follow in store order.
    pub fn snapshot<S: RecordStore>(store: &S, field: &str, scope: ViewScope) -> Result<Self> {
        let ids = match scope {
            ViewScope::All => store.all_records()?,
            ViewScope::Group(group) => store.group_members(&group, false)?,
        };

        let mut keyed = Vec::with_capacity(ids.len());
        for id in ids {
            let record = store.get_record(&id)?;
            let label = record.field(field).map(str::to_string);
            keyed.push((label.is_none(), label, id));
        }
        keyed.sort_by(|a, b| (a.0, &a.1).cmp(&(b.0, &b.1)));

        Ok(Self::new(keyed.into_iter().map(|(_, _, id)| id).collect()))
    }

    pub fn ids(&self) -> &[Uuid] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn position_of(&self, id: &Uuid) -> Option<usize> {
        self.ids.iter().position(|i| i == id)
    }

    /// The record shown at 1-based `position`.
    pub fn id_at(&self, position: usize) -> Option<Uuid> {
        position
            .checked_sub(1)
            .and_then(|i| self.ids.get(i))
            .copied()
    }

    pub fn move_up<S: RecordStore>(&mut self, store: &mut S, field: &str, id: &Uuid) -> Result<bool> {
        Ok(self.step(store, field, id, Direction::Up)?.is_moved())
    }

    pub fn move_down<S: RecordStore>(
        &mut self,
        store: &mut S,
        field: &str,
        id: &Uuid,
    ) -> Result<bool> {
        Ok(self.step(store, field, id, Direction::Down)?.is_moved())
    }

    /// Swaps `id` with its neighbor in `direction`, in the store and in the view.
    pub fn step<S: RecordStore>(
        &mut self,
        store: &mut S,
        field: &str,
        id: &Uuid,
        direction: Direction,
    ) -> Result<MoveOutcome> {
        let index = self
            .position_of(id)
            .ok_or_else(|| DeckIdError::Api(format!("Record {} is not in this view", id)))?;

        let neighbor = match direction {
            Direction::Up => index.checked_sub(1),
            Direction::Down => Some(index + 1).filter(|&n| n < self.ids.len()),
        };
        let Some(neighbor) = neighbor else {
            return Ok(MoveOutcome::AtEdge);
        };

        let outcome = swap(store, field, id, &self.ids[neighbor])?;
        if !outcome.is_swapped() {
            return Ok(MoveOutcome::Refused(outcome));
        }

        self.ids.swap(index, neighbor);
        debug!(record = %id, ?direction, "moved");
        Ok(MoveOutcome::Moved)
    }

    /// Resolves the view into display rows.
    pub fn entries<S: RecordStore>(
        &self,
        store: &S,
        field: &str,
        front_field: &str,
    ) -> Result<Vec<ViewEntry>> {
        self.ids
            .iter()
            .enumerate()
            .map(|(i, id)| {
                let record = store.get_record(id)?;
                Ok(ViewEntry {
                    position: i + 1,
                    id: *id,
                    label: record.field(field).map(str::to_string),
                    front: record
                        .field(front_field)
                        .or_else(|| record.first_field())
                        .unwrap_or_default()
                        .to_string(),
                    created_at: record.created_at,
                })
            })
            .collect()
    }

    /// Rewrites labels so that index order follows view order.
    ///
    /// Every prefix gets its own counter starting at 1, so each group is
    /// numbered `1..N` from the top of the view down. Records without a label
    /// or with a malformed one are skipped. Every other record in the view is
    /// persisted. Returns the number of records whose label changed.
    ///
    /// Records of the same group that sit outside the view are not touched and
    /// may end up sharing an index with one inside it; `sweep` separates them.
    pub fn renumber<S: RecordStore>(&self, store: &mut S, field: &str) -> Result<usize> {
        let mut counters: HashMap<String, u64> = HashMap::new();
        let mut changed = 0;
        for id in &self.ids {
            let mut record = store.get_record(id)?;
            let prefix = match read_label(&record, field) {
                Ok(label) => label.prefix,
                Err(LabelError::Absent) => continue,
                Err(LabelError::Malformed(raw)) => {
                    warn!(record = %id, label = %raw, "skipping malformed label");
                    continue;
                }
            };
            let counter = counters.entry(prefix.clone()).or_insert(0);
            *counter += 1;

            let relabeled = label::format(&prefix, *counter);
            if record.field(field) != Some(relabeled.as_str()) {
                changed += 1;
            }
            record.set_field(field, relabeled);
            store.update_record(&record)?;
        }
        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::{StoreFixture, FRONT_FIELD, LABEL_FIELD};

    #[test]
    fn move_up_swaps_labels_and_positions() {
        let mut fx = StoreFixture::new();
        let history = fx.group("History");
        let w = fx.labeled(history, "History@00001");
        let x = fx.labeled(history, "History@00002");
        let y = fx.labeled(history, "History@00003");
        let mut view = OrderedView::new(vec![w, x, y]);

        assert!(view.move_up(&mut fx.store, LABEL_FIELD, &y).unwrap());

        assert_eq!(fx.label_of(x).as_deref(), Some("History@00003"));
        assert_eq!(fx.label_of(y).as_deref(), Some("History@00002"));
        assert_eq!(view.ids(), &[w, y, x]);
    }

    #[test]
    fn move_down_swaps_with_next() {
        let mut fx = StoreFixture::new();
        let history = fx.group("History");
        let x = fx.labeled(history, "History@00001");
        let y = fx.labeled(history, "History@00002");
        let mut view = OrderedView::new(vec![x, y]);

        assert!(view.move_down(&mut fx.store, LABEL_FIELD, &x).unwrap());

        assert_eq!(view.ids(), &[y, x]);
        assert_eq!(fx.label_of(x).as_deref(), Some("History@00002"));
    }

    #[test]
    fn edges_do_not_move() {
        let mut fx = StoreFixture::new();
        let history = fx.group("History");
        let x = fx.labeled(history, "History@00001");
        let y = fx.labeled(history, "History@00002");
        let mut view = OrderedView::new(vec![x, y]);

        assert_eq!(
            view.step(&mut fx.store, LABEL_FIELD, &x, Direction::Up).unwrap(),
            MoveOutcome::AtEdge
        );
        assert!(!view.move_down(&mut fx.store, LABEL_FIELD, &y).unwrap());
        assert_eq!(view.ids(), &[x, y]);
        assert_eq!(fx.store.write_count(), 0);
    }

    #[test]
    fn cross_group_neighbor_blocks_move() {
        let mut fx = StoreFixture::new();
        let history = fx.group("History");
        let science = fx.group("Science");
        let x = fx.labeled(history, "History@00002");
        let z = fx.labeled(science, "Science@00001");
        let mut view = OrderedView::new(vec![x, z]);

        assert_eq!(
            view.step(&mut fx.store, LABEL_FIELD, &z, Direction::Up).unwrap(),
            MoveOutcome::Refused(SwapOutcome::CrossGroup)
        );
        assert_eq!(view.ids(), &[x, z]);
        assert_eq!(fx.label_of(x).as_deref(), Some("History@00002"));
        assert_eq!(fx.label_of(z).as_deref(), Some("Science@00001"));
    }

    #[test]
    fn unknown_id_is_an_error() {
        let mut fx = StoreFixture::new();
        let mut view = OrderedView::new(vec![]);
        assert!(matches!(
            view.move_up(&mut fx.store, LABEL_FIELD, &Uuid::new_v4()),
            Err(DeckIdError::Api(_))
        ));
    }

    #[test]
    fn snapshot_sorts_by_label_with_unlabeled_last() {
        let mut fx = StoreFixture::new();
        let art = fx.group("Art");
        let math = fx.group("Math");
        let bare = fx.unlabeled(art, "bare");
        let m1 = fx.labeled(math, "Math@00001");
        let a2 = fx.labeled(art, "Art@00002");
        let a1 = fx.labeled(art, "Art@00001");

        let all = OrderedView::snapshot(&fx.store, LABEL_FIELD, ViewScope::All).unwrap();
        assert_eq!(all.ids(), &[a1, a2, m1, bare]);

        let art_only =
            OrderedView::snapshot(&fx.store, LABEL_FIELD, ViewScope::Group(art)).unwrap();
        assert_eq!(art_only.ids(), &[a1, a2, bare]);
    }

    #[test]
    fn positions_are_one_based() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let view = OrderedView::new(vec![a, b]);
        assert_eq!(view.id_at(1), Some(a));
        assert_eq!(view.id_at(2), Some(b));
        assert_eq!(view.id_at(0), None);
        assert_eq!(view.id_at(3), None);
    }

    #[test]
    fn entries_show_label_and_front() {
        let mut fx = StoreFixture::new();
        let art = fx.group("Art");
        let a = fx.labeled(art, "Art@00001");
        let bare = fx.unlabeled(art, "plain");
        let view = OrderedView::new(vec![a, bare]);

        let rows = view.entries(&fx.store, LABEL_FIELD, FRONT_FIELD).unwrap();

        assert_eq!(rows[0].position, 1);
        assert_eq!(rows[0].label.as_deref(), Some("Art@00001"));
        assert_eq!(rows[0].front, "front of Art@00001");
        assert_eq!(rows[1].label, None);
        assert_eq!(rows[1].front, "plain");
    }

    #[test]
    fn renumber_follows_view_order_per_prefix() {
        let mut fx = StoreFixture::new();
        let art = fx.group("Art");
        let math = fx.group("Math");
        let a3 = fx.labeled(art, "Art@00003");
        let m1 = fx.labeled(math, "Math@00001");
        let a1 = fx.labeled(art, "Art@00001");
        let m2 = fx.labeled(math, "Math@00002");
        let bare = fx.unlabeled(art, "bare");

        let view = OrderedView::new(vec![a3, m2, bare, a1, m1]);
        let changed = view.renumber(&mut fx.store, LABEL_FIELD).unwrap();

        assert_eq!(fx.label_of(a3).as_deref(), Some("Art@00001"));
        assert_eq!(fx.label_of(a1).as_deref(), Some("Art@00002"));
        assert_eq!(fx.label_of(m2).as_deref(), Some("Math@00001"));
        assert_eq!(fx.label_of(m1).as_deref(), Some("Math@00002"));
        assert_eq!(fx.label_of(bare), None);
        assert_eq!(changed, 4);
    }

    #[test]
    fn renumber_closes_gaps_in_view() {
        let mut fx = StoreFixture::new();
        let art = fx.group("Art");
        let four = fx.labeled(art, "Art@00004");
        let nine = fx.labeled(art, "Art@00009");

        let view = OrderedView::new(vec![four, nine]);
        let changed = view.renumber(&mut fx.store, LABEL_FIELD).unwrap();

        assert_eq!(fx.label_of(four).as_deref(), Some("Art@00001"));
        assert_eq!(fx.label_of(nine).as_deref(), Some("Art@00002"));
        assert_eq!(changed, 2);
        assert_eq!(fx.store.write_count(), 2);
    }

    #[test]
    fn renumber_skips_malformed_labels() {
        let mut fx = StoreFixture::new();
        let art = fx.group("Art");
        let broken = fx.labeled(art, "Art@two");
        let five = fx.labeled(art, "Art@00005");

        let view = OrderedView::new(vec![broken, five]);
        view.renumber(&mut fx.store, LABEL_FIELD).unwrap();

        assert_eq!(fx.label_of(broken).as_deref(), Some("Art@two"));
        assert_eq!(fx.label_of(five).as_deref(), Some("Art@00001"));
    }
}
