use crate::commands::{CmdMessage, CmdResult, DeckIdPaths};
use crate::config::DeckIdConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &DeckIdPaths, action: ConfigAction) -> Result<CmdResult> {
    let dir = &paths.root;
    match action {
        ConfigAction::ShowAll => {
            let config = DeckIdConfig::load(dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = DeckIdConfig::load(dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = DeckIdConfig::load(dir)?;
            if let Err(e) = config.set(&key, &value) {
                let mut res = CmdResult::default();
                res.add_message(CmdMessage::error(e));
                return Ok(res);
            }
            config.save(dir)?;
            let display_val = config.get(&key).unwrap_or_else(|| value.clone());
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn paths(dir: &tempfile::TempDir) -> DeckIdPaths {
        DeckIdPaths {
            root: dir.path().to_path_buf(),
        }
    }

    #[test]
    fn set_persists_and_show_key_reads_back() {
        let dir = tempdir().unwrap();
        let paths = paths(&dir);

        let result = run(
            &paths,
            ConfigAction::Set("reconcile-on-start".into(), "off".into()),
        )
        .unwrap();
        assert_eq!(result.messages[0].content, "reconcile-on-start set to false");

        let shown = run(&paths, ConfigAction::ShowKey("reconcile-on-start".into())).unwrap();
        assert_eq!(shown.messages[0].content, "false");
    }

    #[test]
    fn unknown_key_is_reported() {
        let dir = tempdir().unwrap();
        let result = run(&paths(&dir), ConfigAction::ShowKey("nope".into())).unwrap();
        assert!(result.has_errors());
    }

    #[test]
    fn invalid_value_is_not_saved() {
        let dir = tempdir().unwrap();
        let paths = paths(&dir);

        let result = run(
            &paths,
            ConfigAction::Set("label-field".into(), "  ".into()),
        )
        .unwrap();
        assert!(result.has_errors());

        let all = run(&paths, ConfigAction::ShowAll).unwrap();
        assert_eq!(all.config, Some(DeckIdConfig::default()));
    }
}
