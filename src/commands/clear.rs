use crate::board::NoteBoard;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::SnapshotStore;

use super::helpers::storage_warning;

pub fn run<S: SnapshotStore>(board: &mut NoteBoard<S>) -> Result<CmdResult> {
    let removed = board.count();
    let mut result = CmdResult::default();

    match board.clear_all() {
        Ok(()) if removed == 0 => {
            result.add_message(CmdMessage::info("The board is already empty."));
        }
        Ok(()) => {
            result.add_message(CmdMessage::success(format!(
                "Cleared {} note{}.",
                removed,
                if removed == 1 { "" } else { "s" }
            )));
        }
        Err(e) if e.is_storage() => {
            result.add_message(storage_warning(&e));
        }
        Err(e) => return Err(e),
    }

    Ok(result)
}
