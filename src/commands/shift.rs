use crate::board::NoteBoard;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::SnapshotStore;

use super::helpers::{listed_notes, resolve_position, storage_warning};

/// Move the note at `position` to sit in front of the note at `before`, or
/// to the end of the board when `before` is omitted.
pub fn run<S: SnapshotStore>(
    board: &mut NoteBoard<S>,
    position: usize,
    before: Option<usize>,
) -> Result<CmdResult> {
    let id = resolve_position(board, position)?;
    let before_id = match before {
        Some(p) => Some(resolve_position(board, p)?),
        None => None,
    };

    let mut result = CmdResult::default();
    match board.reorder(&id, before_id.as_ref()) {
        Ok(()) => {
            result.add_message(CmdMessage::success("Note moved."));
        }
        Err(e) if e.is_storage() => {
            result.add_message(storage_warning(&e));
        }
        Err(e) => return Err(e),
    }

    // Show the new order so the caller can reprint the board
    result.listed = listed_notes(board);
    Ok(result)
}
