use super::SnapshotStore;
use crate::error::Result;
use crate::model::Note;

/// In-memory slot for testing and development.
/// Does NOT persist data across processes.
#[derive(Default)]
pub struct InMemoryStore {
    slot: Option<Vec<Note>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The raw slot contents; `None` means the slot is absent (cleared or
    /// never written), distinct from an empty board having been saved.
    pub fn slot(&self) -> Option<&[Note]> {
        self.slot.as_deref()
    }
}

impl SnapshotStore for InMemoryStore {
    fn load(&self) -> Vec<Note> {
        self.slot.clone().unwrap_or_default()
    }

    fn save(&mut self, notes: &[Note]) -> Result<()> {
        self.slot = Some(notes.to_vec());
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.slot = None;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::board::{AddOutcome, NoteBoard};
    use crate::error::NotzError;

    /// A store whose writes always fail, for exercising the
    /// mutation-applied-but-not-saved path.
    pub struct FailingStore;

    impl SnapshotStore for FailingStore {
        fn load(&self) -> Vec<Note> {
            Vec::new()
        }

        fn save(&mut self, _notes: &[Note]) -> Result<()> {
            Err(NotzError::Store("slot rejected the write".to_string()))
        }

        fn clear(&mut self) -> Result<()> {
            Err(NotzError::Store("slot rejected the write".to_string()))
        }
    }

    /// Fresh in-memory board pre-populated with one note per text.
    pub fn board_with(texts: &[&str]) -> NoteBoard<InMemoryStore> {
        let mut board = NoteBoard::open(InMemoryStore::new());
        for text in texts {
            match board.add(text).unwrap() {
                AddOutcome::Added(_) => {}
                AddOutcome::EmptyText => panic!("fixture text must be non-empty"),
            }
        }
        board
    }
}
