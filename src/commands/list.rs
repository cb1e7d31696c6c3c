use crate::board::NoteBoard;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::SnapshotStore;

use super::helpers::listed_notes;

pub fn run<S: SnapshotStore>(board: &NoteBoard<S>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed(listed_notes(board)))
}
