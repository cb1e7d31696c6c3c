use crate::board::{AddOutcome, NoteBoard};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::SnapshotStore;

use super::helpers::{preview, storage_warning};

pub fn run<S: SnapshotStore>(board: &mut NoteBoard<S>, text: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match board.add(text) {
        Ok(AddOutcome::Added(note)) => {
            result.add_message(CmdMessage::success(format!(
                "Note added: {}",
                preview(&note.text)
            )));
            result.affected.push(note);
        }
        Ok(AddOutcome::EmptyText) => {
            result.add_message(CmdMessage::info("Nothing to add."));
        }
        Err(e) if e.is_storage() => {
            // The note is on the board; only the snapshot write failed
            if let Some(note) = board.notes().last().cloned() {
                result.affected.push(note);
            }
            result.add_message(storage_warning(&e));
        }
        Err(e) => return Err(e),
    }

    Ok(result)
}
