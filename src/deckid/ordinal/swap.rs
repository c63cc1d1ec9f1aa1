use crate::error::Result;
use crate::label::{self, read_label, LABEL_SEPARATOR};
use crate::model::Record;
use crate::store::RecordStore;
use tracing::debug;
use uuid::Uuid;

/// What happened when two records were asked to trade places.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapOutcome {
    /// Both records were rewritten and persisted.
    Swapped,
    /// At least one record has no label or a malformed one. Nothing was written.
    Unlabeled,
    /// The labels have different prefixes. Nothing was written.
    CrossGroup,
}

impl SwapOutcome {
    pub fn is_swapped(self) -> bool {
        self == SwapOutcome::Swapped
    }
}

/// Exchanges the indexes of records `a` and `b`, keeping each record's prefix.
///
/// Only records whose labels share a prefix are swapped. The index text moves
/// as written, so `Math@1` stays `1` rather than becoming `00001`.
///
/// `a` is persisted before `b`; if writing `b` fails, `a` keeps its new index
/// and the error is returned.
pub fn swap<S: RecordStore>(store: &mut S, field: &str, a: &Uuid, b: &Uuid) -> Result<SwapOutcome> {
    let mut record_a = store.get_record(a)?;
    let mut record_b = store.get_record(b)?;

    let (label_a, label_b) = match (read_label(&record_a, field), read_label(&record_b, field)) {
        (Ok(label_a), Ok(label_b)) => (label_a, label_b),
        (a_res, b_res) => {
            debug!(a = ?a_res, b = ?b_res, "swap refused: unlabeled record");
            return Ok(SwapOutcome::Unlabeled);
        }
    };

    if label_a.prefix != label_b.prefix {
        debug!(a = %label_a, b = %label_b, "swap refused: different groups");
        return Ok(SwapOutcome::CrossGroup);
    }

    let new_a = format!("{}{}{}", label_a.prefix, LABEL_SEPARATOR, raw_suffix(&record_b, field));
    let new_b = format!("{}{}{}", label_b.prefix, LABEL_SEPARATOR, raw_suffix(&record_a, field));

    record_a.set_field(field, new_a.as_str());
    store.update_record(&record_a)?;

    record_b.set_field(field, new_b.as_str());
    store.update_record(&record_b)?;

    debug!(a = %new_a, b = %new_b, "swapped");
    Ok(SwapOutcome::Swapped)
}

/// The index part of a record's label, exactly as stored.
fn raw_suffix(record: &Record, field: &str) -> String {
    record
        .field(field)
        .and_then(label::split)
        .map(|(_, suffix)| suffix.to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DeckIdError;
    use crate::label::parse;
    use crate::store::memory::fixtures::{StoreFixture, LABEL_FIELD};

    #[test]
    fn exchanges_indexes_within_group() {
        let mut fx = StoreFixture::new();
        let history = fx.group("History");
        let x = fx.labeled(history, "History@00002");
        let y = fx.labeled(history, "History@00003");

        let outcome = swap(&mut fx.store, LABEL_FIELD, &y, &x).unwrap();

        assert!(outcome.is_swapped());
        assert_eq!(fx.label_of(x).as_deref(), Some("History@00003"));
        assert_eq!(fx.label_of(y).as_deref(), Some("History@00002"));
    }

    #[test]
    fn index_text_moves_verbatim() {
        let mut fx = StoreFixture::new();
        let math = fx.group("Math");
        let short = fx.labeled(math, "Math@1");
        let padded = fx.labeled(math, "Math@00007");

        let outcome = swap(&mut fx.store, LABEL_FIELD, &short, &padded).unwrap();

        assert!(outcome.is_swapped());
        assert_eq!(fx.label_of(short).as_deref(), Some("Math@00007"));
        assert_eq!(fx.label_of(padded).as_deref(), Some("Math@1"));
    }

    #[test]
    fn refuses_cross_group_swap() {
        let mut fx = StoreFixture::new();
        let history = fx.group("History");
        let science = fx.group("Science");
        let x = fx.labeled(history, "History@00002");
        let z = fx.labeled(science, "Science@00001");

        let outcome = swap(&mut fx.store, LABEL_FIELD, &x, &z).unwrap();

        assert_eq!(outcome, SwapOutcome::CrossGroup);
        assert!(!outcome.is_swapped());
        assert_eq!(fx.label_of(x).as_deref(), Some("History@00002"));
        assert_eq!(fx.label_of(z).as_deref(), Some("Science@00001"));
        assert_eq!(fx.store.write_count(), 0);
    }

    #[test]
    fn guard_compares_prefixes_not_stored_groups() {
        // Same stored group, but one label still carries an old prefix.
        let mut fx = StoreFixture::new();
        let math = fx.group("Math");
        let a = fx.labeled(math, "Math@00001");
        let b = fx.labeled(math, "Algebra@00002");

        let outcome = swap(&mut fx.store, LABEL_FIELD, &a, &b).unwrap();

        assert_eq!(outcome, SwapOutcome::CrossGroup);
    }

    #[test]
    fn refuses_malformed_or_absent_labels() {
        let mut fx = StoreFixture::new();
        let math = fx.group("Math");
        let good = fx.labeled(math, "Math@00001");
        let broken = fx.labeled(math, "Math@two");
        let bare = fx.unlabeled(math, "bare");

        assert_eq!(
            swap(&mut fx.store, LABEL_FIELD, &good, &broken).unwrap(),
            SwapOutcome::Unlabeled
        );
        assert_eq!(
            swap(&mut fx.store, LABEL_FIELD, &bare, &good).unwrap(),
            SwapOutcome::Unlabeled
        );
        assert_eq!(fx.label_of(good).as_deref(), Some("Math@00001"));
        assert_eq!(fx.label_of(broken).as_deref(), Some("Math@two"));
        assert_eq!(fx.label_of(bare), None);
        assert_eq!(fx.store.write_count(), 0);
    }

    #[test]
    fn prefixes_stay_attached() {
        let mut fx = StoreFixture::new();
        let group = fx.group("user@host");
        let a = fx.labeled(group, "user@host@00001");
        let b = fx.labeled(group, "user@host@00007");

        swap(&mut fx.store, LABEL_FIELD, &a, &b).unwrap();

        let la = parse(&fx.label_of(a).unwrap()).unwrap();
        let lb = parse(&fx.label_of(b).unwrap()).unwrap();
        assert_eq!((la.prefix.as_str(), la.index), ("user@host", 7));
        assert_eq!((lb.prefix.as_str(), lb.index), ("user@host", 1));
    }

    #[test]
    fn second_write_failure_leaves_first_record_renumbered() {
        let mut fx = StoreFixture::new();
        let math = fx.group("Math");
        let a = fx.labeled(math, "Math@00001");
        let b = fx.labeled(math, "Math@00002");

        fx.store.fail_writes_after(1);
        let err = swap(&mut fx.store, LABEL_FIELD, &a, &b).unwrap_err();

        assert!(matches!(err, DeckIdError::Store(_)));
        // No rollback: both records now claim index 2.
        assert_eq!(fx.label_of(a).as_deref(), Some("Math@00002"));
        assert_eq!(fx.label_of(b).as_deref(), Some("Math@00002"));
    }

    #[test]
    fn missing_record_is_an_error() {
        let mut fx = StoreFixture::new();
        let math = fx.group("Math");
        let a = fx.labeled(math, "Math@00001");
        let ghost = Uuid::new_v4();

        assert!(matches!(
            swap(&mut fx.store, LABEL_FIELD, &a, &ghost),
            Err(DeckIdError::RecordNotFound(id)) if id == ghost
        ));
    }
}
