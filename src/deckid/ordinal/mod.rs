//! # Ordinal Bookkeeping
//!
//! Everything that reads or rewrites ordinal labels on records lives here.
//! All functions are generic over [`RecordStore`](crate::store::RecordStore)
//! and take the name of the label field, so the same code serves any host.
//!
//! - [`indexer`]: highest index in a group, next free index, labels for new records
//! - [`swap`]: exchange the indexes of two records of the same group
//! - [`sweep`]: renumber one group to `1..N`, keeping numeric order
//! - [`reconcile`]: renumber the whole collection, in lexical label order
//!
//! ## Two Orderings
//!
//! `sweep` orders a group by the **numeric** index, so `Math@00010` follows
//! `Math@00009`. `reconcile` orders the collection by the **raw label text**,
//! so `Math@100000` sorts before `Math@99999`. Both are kept as they are; the
//! tests in `reconcile` pin down where they disagree.
//!
//! ## Partial Progress
//!
//! Every record is written as soon as its new label is known. A store failure
//! stops the pass and is returned to the caller; records already written keep
//! their new labels.

pub mod indexer;
pub mod reconcile;
pub mod swap;
pub mod sweep;

pub use indexer::{assign_label, assign_label_and_persist, max_index, next_index};
pub use reconcile::{reconcile, ReconcileReport};
pub use swap::{swap, SwapOutcome};
pub use sweep::{sweep, SweepReport};
