use crate::board::{EditOutcome, NoteBoard};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::SnapshotStore;

use super::helpers::{preview, resolve_position, storage_warning};

pub fn run<S: SnapshotStore>(
    board: &mut NoteBoard<S>,
    position: usize,
    new_text: &str,
) -> Result<CmdResult> {
    let id = resolve_position(board, position)?;
    let mut result = CmdResult::default();

    match board.edit(&id, new_text) {
        Ok(EditOutcome::Edited(note)) => {
            result.add_message(CmdMessage::success(format!(
                "Note {} updated: {}",
                position,
                preview(&note.text)
            )));
            result.affected.push(note);
        }
        Ok(EditOutcome::EmptyText) => {
            result.add_message(CmdMessage::info("Empty text; note left unchanged."));
        }
        Err(e) if e.is_storage() => {
            if let Some(note) = board.get(&id).cloned() {
                result.affected.push(note);
            }
            result.add_message(storage_warning(&e));
        }
        Err(e) => return Err(e),
    }

    Ok(result)
}
