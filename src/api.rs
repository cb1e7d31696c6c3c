//! # API Facade
//!
//! [`BoardApi`] is a thin facade over the command layer and the single entry
//! point for all board operations, regardless of the UI driving it. It
//! dispatches to `commands/*`, owns the open [`NoteBoard`], and returns
//! structured [`CmdResult`] values; it never touches stdout or stderr.
//!
//! Generic over [`SnapshotStore`] so the same facade serves production
//! (`FileStore`) and tests (`InMemoryStore`).

use crate::board::NoteBoard;
use crate::commands;
use crate::config::BoardConfig;
use crate::error::Result;
use crate::store::SnapshotStore;
use std::path::{Path, PathBuf};

pub struct BoardApi<S: SnapshotStore> {
    board: NoteBoard<S>,
    board_dir: PathBuf,
}

impl<S: SnapshotStore> BoardApi<S> {
    /// Open the board from `store`; `board_dir` is where the slot and the
    /// config file live.
    pub fn new(store: S, board_dir: PathBuf) -> Self {
        Self {
            board: NoteBoard::open(store),
            board_dir,
        }
    }

    pub fn add_note(&mut self, text: &str) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.board, text)
    }

    pub fn list_notes(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.board)
    }

    pub fn search_notes(&self, term: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.board, term)
    }

    pub fn edit_note(&mut self, position: usize, new_text: &str) -> Result<commands::CmdResult> {
        commands::edit::run(&mut self.board, position, new_text)
    }

    pub fn delete_note(&mut self, position: usize) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.board, position)
    }

    pub fn move_note(
        &mut self,
        position: usize,
        before: Option<usize>,
    ) -> Result<commands::CmdResult> {
        commands::shift::run(&mut self.board, position, before)
    }

    pub fn export_notes(&self, out_dir: &Path) -> Result<commands::CmdResult> {
        let config = BoardConfig::load(&self.board_dir)?;
        commands::export::run(&self.board, &config, out_dir)
    }

    pub fn clear_board(&mut self) -> Result<commands::CmdResult> {
        commands::clear::run(&mut self.board)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.board_dir, action)
    }

    pub fn count(&self) -> usize {
        self.board.count()
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, ListedNote, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use tempfile::TempDir;

    fn api(dir: &TempDir) -> BoardApi<InMemoryStore> {
        BoardApi::new(InMemoryStore::new(), dir.path().to_path_buf())
    }

    #[test]
    fn dispatches_add_and_list() {
        let dir = TempDir::new().unwrap();
        let mut api = api(&dir);

        api.add_note("hello").unwrap();
        let listed = api.list_notes().unwrap().listed;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].note.text, "hello");
        assert_eq!(api.count(), 1);
    }

    #[test]
    fn dispatches_mutations_by_position() {
        let dir = TempDir::new().unwrap();
        let mut api = api(&dir);

        api.add_note("A").unwrap();
        api.add_note("B").unwrap();
        api.edit_note(1, "A2").unwrap();
        api.move_note(1, None).unwrap();
        api.delete_note(2).unwrap();

        let listed = api.list_notes().unwrap().listed;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].note.text, "B");
    }

    #[test]
    fn clear_board_empties_everything() {
        let dir = TempDir::new().unwrap();
        let mut api = api(&dir);

        api.add_note("A").unwrap();
        api.clear_board().unwrap();
        assert_eq!(api.count(), 0);
    }
}
