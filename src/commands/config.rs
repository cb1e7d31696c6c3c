use crate::commands::{CmdMessage, CmdResult};
use crate::config::BoardConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(board_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let config = BoardConfig::load(board_dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = BoardConfig::load(board_dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => {
                    result.add_message(CmdMessage::info(val));
                    Ok(result)
                }
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)));
                    Ok(result)
                }
            }
        }
        ConfigAction::Set(key, value) => {
            let mut config = BoardConfig::load(board_dir)?;
            if let Err(e) = config.set(&key, &value) {
                let mut res = CmdResult::default();
                res.add_message(CmdMessage::error(e));
                return Ok(res);
            }
            config.save(board_dir)?;
            let display_val = config.get(&key).unwrap_or(value);
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
    use crate::commands::MessageLevel;
    use tempfile::TempDir;

    #[test]
    fn show_all_returns_defaults_when_unconfigured() {
        let dir = TempDir::new().unwrap();
        let result = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config.unwrap(), BoardConfig::default());
    }

    #[test]
    fn set_then_show_round_trips() {
        let dir = TempDir::new().unwrap();
        run(
            dir.path(),
            ConfigAction::Set("export-prefix".into(), "board".into()),
        )
        .unwrap();

        let result = run(dir.path(), ConfigAction::ShowKey("export-prefix".into())).unwrap();
        assert_eq!(result.messages[0].content, "board");
    }

    #[test]
    fn unknown_key_is_an_error_message() {
        let dir = TempDir::new().unwrap();
        let result = run(dir.path(), ConfigAction::ShowKey("bogus".into())).unwrap();
        assert!(matches!(result.messages[0].level, MessageLevel::Error));
    }
}
