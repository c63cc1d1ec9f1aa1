use crate::commands::CmdResult;
use crate::config::DeckIdConfig;
use crate::error::Result;
use crate::store::RecordStore;

use super::helpers::view_for;

pub fn run<S: RecordStore>(
    store: &S,
    config: &DeckIdConfig,
    group: Option<&str>,
) -> Result<CmdResult> {
    let view = view_for(store, &config.label_field, group)?;
    let entries = view.entries(store, &config.label_field, &config.front_field)?;
    Ok(CmdResult::default().with_listed_entries(entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn lists_group_in_label_order() {
        let mut fx = StoreFixture::new();
        let art = fx.group("Art");
        let math = fx.group("Math");
        fx.labeled(art, "Art@00002");
        fx.labeled(math, "Math@00001");
        fx.labeled(art, "Art@00001");

        let result = run(&fx.store, &DeckIdConfig::default(), Some("Art")).unwrap();

        let labels: Vec<_> = result
            .listed_entries
            .iter()
            .map(|e| e.label.clone().unwrap_or_default())
            .collect();
        assert_eq!(labels, vec!["Art@00001", "Art@00002"]);
        assert_eq!(result.listed_entries[1].position, 2);
    }

    #[test]
    fn lists_everything_without_group() {
        let mut fx = StoreFixture::new();
        let art = fx.group("Art");
        let math = fx.group("Math");
        fx.labeled(math, "Math@00001");
        fx.unlabeled(art, "bare");

        let result = run(&fx.store, &DeckIdConfig::default(), None).unwrap();

        assert_eq!(result.listed_entries.len(), 2);
        assert_eq!(result.listed_entries[1].front, "bare");
    }
}
