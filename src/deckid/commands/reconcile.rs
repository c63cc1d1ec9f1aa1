use crate::commands::{CmdMessage, CmdResult};
use crate::config::DeckIdConfig;
use crate::error::Result;
use crate::ordinal::reconcile;
use crate::store::RecordStore;

/// Reconciles every record in the store.
pub fn run<S: RecordStore>(store: &mut S, config: &DeckIdConfig) -> Result<CmdResult> {
    let ids = store.all_records()?;
    let report = reconcile(store, &config.label_field, &ids)?;

    let mut result = CmdResult::default();
    if report.updated == 0 {
        result.add_message(CmdMessage::success(format!(
            "All {} label(s) verified.",
            report.visited
        )));
    } else {
        result.add_message(CmdMessage::warning(format!(
            "Updated {} of {} label(s).",
            report.updated, report.visited
        )));
    }
    if report.skipped > 0 {
        result.add_message(CmdMessage::info(format!(
            "  - Skipped {} record(s) without a '{}' field.",
            report.skipped, config.label_field
        )));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn repairs_then_verifies() {
        let mut fx = StoreFixture::new();
        let art = fx.group("Art");
        let five = fx.labeled(art, "Art@00005");
        let two = fx.labeled(art, "Art@00002");
        fx.unlabeled(art, "bare");
        let config = DeckIdConfig::default();

        let first = run(&mut fx.store, &config).unwrap();
        assert_eq!(first.messages[0].content, "Updated 2 of 2 label(s).");
        assert!(first.messages[1].content.contains("Skipped 1"));
        assert_eq!(fx.label_of(two).as_deref(), Some("Art@00001"));
        assert_eq!(fx.label_of(five).as_deref(), Some("Art@00002"));

        let second = run(&mut fx.store, &config).unwrap();
        assert_eq!(second.messages[0].content, "All 2 label(s) verified.");
    }
}
