use crate::board::NoteBoard;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::SnapshotStore;

use super::helpers::listed_notes;

/// Case-insensitive substring filter over note text. Pure read; positions in
/// the result are the notes' real board positions, so they stay valid as
/// references for edit/delete.
pub fn run<S: SnapshotStore>(board: &NoteBoard<S>, term: &str) -> Result<CmdResult> {
    let term_lower = term.to_lowercase();
    let listed = listed_notes(board)
        .into_iter()
        .filter(|ln| ln.note.text.to_lowercase().contains(&term_lower))
        .collect();

    Ok(CmdResult::default().with_listed(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::board_with;

    #[test]
    fn matches_case_insensitively() {
        let board = board_with(&["Buy Milk", "water plants", "buy stamps"]);
        let result = run(&board, "BUY").unwrap();

        let texts: Vec<_> = result.listed.iter().map(|ln| ln.note.text.as_str()).collect();
        assert_eq!(texts, vec!["Buy Milk", "buy stamps"]);
    }

    #[test]
    fn keeps_original_board_positions() {
        let board = board_with(&["alpha", "beta", "alpine"]);
        let result = run(&board, "alp").unwrap();

        let positions: Vec<_> = result.listed.iter().map(|ln| ln.position).collect();
        assert_eq!(positions, vec![1, 3]);
    }

    #[test]
    fn empty_term_matches_everything() {
        let board = board_with(&["a", "b"]);
        let result = run(&board, "").unwrap();
        assert_eq!(result.listed.len(), 2);
    }
}
