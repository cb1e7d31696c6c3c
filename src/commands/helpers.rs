use crate::board::NoteBoard;
use crate::commands::{CmdMessage, ListedNote};
use crate::error::{NotzError, Result};
use crate::store::SnapshotStore;
use uuid::Uuid;

/// Resolve a 1-based board position to the note's stable id.
pub fn resolve_position<S: SnapshotStore>(board: &NoteBoard<S>, position: usize) -> Result<Uuid> {
    position
        .checked_sub(1)
        .and_then(|i| board.notes().get(i))
        .map(|n| n.id)
        .ok_or_else(|| NotzError::Api(format!("No note at position {}", position)))
}

/// The full board as positioned entries for display.
pub fn listed_notes<S: SnapshotStore>(board: &NoteBoard<S>) -> Vec<ListedNote> {
    board
        .notes()
        .iter()
        .cloned()
        .enumerate()
        .map(|(i, note)| ListedNote {
            position: i + 1,
            note,
        })
        .collect()
}

/// Warning for a mutation that applied in memory but could not be saved.
pub fn storage_warning(err: &NotzError) -> CmdMessage {
    CmdMessage::warning(format!(
        "Change kept for this session but not saved: {}",
        err
    ))
}

/// Short single-line form of a note's text for messages.
pub fn preview(text: &str) -> String {
    const MAX: usize = 40;
    let flat: String = text
        .chars()
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect();
    if flat.chars().count() <= MAX {
        flat
    } else {
        let mut cut: String = flat.chars().take(MAX - 1).collect();
        cut.push('…');
        cut
    }
}
