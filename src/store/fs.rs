use super::SnapshotStore;
use crate::error::{NotzError, Result};
use crate::model::Note;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Name of the board slot inside the board directory.
pub const BOARD_FILENAME: &str = "board.json";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn board_path(&self) -> PathBuf {
        self.root.join(BOARD_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(NotzError::Io)?;
        }
        Ok(())
    }
}

impl SnapshotStore for FileStore {
    fn load(&self) -> Vec<Note> {
        let Ok(content) = fs::read_to_string(self.board_path()) else {
            return Vec::new();
        };
        serde_json::from_str(&content).unwrap_or_default()
    }

    fn save(&mut self, notes: &[Note]) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(notes).map_err(NotzError::Serialization)?;
        fs::write(self.board_path(), content).map_err(NotzError::Io)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        match fs::remove_file(self.board_path()) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(NotzError::Io(e)),
        }
    }
}
