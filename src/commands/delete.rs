use crate::board::NoteBoard;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::SnapshotStore;

use super::helpers::{preview, resolve_position, storage_warning};

pub fn run<S: SnapshotStore>(board: &mut NoteBoard<S>, position: usize) -> Result<CmdResult> {
    let id = resolve_position(board, position)?;
    let mut result = CmdResult::default();

    match board.delete(&id) {
        Ok(note) => {
            result.add_message(CmdMessage::success(format!(
                "Note {} deleted: {}",
                position,
                preview(&note.text)
            )));
            result.affected.push(note);
        }
        Err(e) if e.is_storage() => {
            result.add_message(storage_warning(&e));
        }
        Err(e) => return Err(e),
    }

    Ok(result)
}
