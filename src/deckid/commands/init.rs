use crate::commands::{CmdMessage, CmdResult, DeckIdPaths};
use crate::config::DeckIdConfig;
use crate::error::Result;
use std::fs;

/// Creates the data directory and writes a default `config.json` if none exists.
pub fn run(paths: &DeckIdPaths) -> Result<CmdResult> {
    let dir = &paths.root;
    fs::create_dir_all(dir)?;

    let mut result = CmdResult::default();
    if dir.join("config.json").exists() {
        result.add_message(CmdMessage::info(format!(
            "Keeping existing config at {}",
            dir.display()
        )));
    } else {
        DeckIdConfig::default().save(dir)?;
    }
    result.add_message(CmdMessage::success(format!(
        "Initialized deckid store at {}",
        dir.display()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn creates_directory_and_config() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("nested").join("deckid");
        let paths = DeckIdPaths { root: root.clone() };

        let result = run(&paths).unwrap();

        assert!(root.join("config.json").exists());
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn keeps_existing_config() {
        let dir = tempdir().unwrap();
        let paths = DeckIdPaths {
            root: dir.path().to_path_buf(),
        };
        let mut config = DeckIdConfig::default();
        config.label_field = "Card".to_string();
        config.save(dir.path()).unwrap();

        run(&paths).unwrap();

        assert_eq!(DeckIdConfig::load(dir.path()).unwrap().label_field, "Card");
    }
}
