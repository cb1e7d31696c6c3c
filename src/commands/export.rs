use crate::board::NoteBoard;
use crate::commands::{CmdMessage, CmdResult};
use crate::config::BoardConfig;
use crate::error::{NotzError, Result};
use crate::model::Note;
use crate::store::SnapshotStore;
use chrono::Local;
use std::fs;
use std::path::Path;

pub fn run<S: SnapshotStore>(
    board: &NoteBoard<S>,
    config: &BoardConfig,
    out_dir: &Path,
) -> Result<CmdResult> {
    if board.count() == 0 {
        let mut res = CmdResult::default();
        res.add_message(CmdMessage::info("No notes to export."));
        return Ok(res);
    }

    let filename = format!(
        "{}_{}.txt",
        config.export_prefix,
        Local::now().format("%Y-%m-%d")
    );
    let path = out_dir.join(&filename);

    fs::write(&path, render_document(board.notes())).map_err(NotzError::Io)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Exported {} note{} to {}",
        board.count(),
        if board.count() == 1 { "" } else { "s" },
        path.display()
    )));
    Ok(result)
}

/// The export document: one numbered block per note in board order,
/// blocks separated by a rule.
fn render_document(notes: &[Note]) -> String {
    notes
        .iter()
        .enumerate()
        .map(|(i, note)| format!("Note {} ({}):\n{}\n", i + 1, note.timestamp, note.text))
        .collect::<Vec<_>>()
        .join("\n---\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures::board_with;
    use tempfile::TempDir;

    #[test]
    fn renders_numbered_blocks_with_separator() {
        let board = board_with(&["first", "second"]);
        let doc = render_document(board.notes());

        assert!(doc.starts_with("Note 1 ("));
        assert!(doc.contains("):\nfirst\n"));
        assert!(doc.contains("\n---\n\nNote 2 ("));
        assert!(doc.ends_with("second\n"));
    }

    #[test]
    fn writes_a_dated_file() {
        let board = board_with(&["x"]);
        let dir = TempDir::new().unwrap();

        let result = run(&board, &BoardConfig::default(), dir.path()).unwrap();
        assert!(matches!(result.messages[0].level, MessageLevel::Success));

        let expected = format!("notes_{}.txt", Local::now().format("%Y-%m-%d"));
        assert!(dir.path().join(expected).exists());
    }

    #[test]
    fn empty_board_exports_nothing() {
        let board = board_with(&[]);
        let dir = TempDir::new().unwrap();

        let result = run(&board, &BoardConfig::default(), dir.path()).unwrap();
        assert!(matches!(result.messages[0].level, MessageLevel::Info));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn honors_configured_prefix() {
        let board = board_with(&["x"]);
        let dir = TempDir::new().unwrap();
        let config = BoardConfig {
            export_prefix: "board".to_string(),
        };

        run(&board, &config, dir.path()).unwrap();
        let expected = format!("board_{}.txt", Local::now().format("%Y-%m-%d"));
        assert!(dir.path().join(expected).exists());
    }
}
