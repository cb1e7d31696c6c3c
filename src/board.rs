//! # Note Board
//!
//! [`NoteBoard`] owns the authoritative ordered collection of notes for a
//! session and is the sole writer to its [`SnapshotStore`]. Every completed
//! mutation is followed by a full-snapshot write, so the in-memory order and
//! the persisted order never diverge past the end of an operation.
//!
//! A failed snapshot write does NOT roll the mutation back: memory is the
//! source of truth for the running session, and the storage error propagates
//! so callers can surface it as a non-fatal notice.

use crate::error::{NotzError, Result};
use crate::model::{Color, Note};
use crate::store::SnapshotStore;
use uuid::Uuid;

/// Outcome of [`NoteBoard::add`].
#[derive(Debug)]
pub enum AddOutcome {
    Added(Note),
    /// The submitted text was empty after trimming; nothing was added and
    /// nothing was written.
    EmptyText,
}

/// Outcome of [`NoteBoard::edit`].
#[derive(Debug)]
pub enum EditOutcome {
    Edited(Note),
    /// Blank submission. The note is untouched and the edit session is
    /// simply closed; this is a cancel, not an error.
    EmptyText,
}

pub struct NoteBoard<S: SnapshotStore> {
    notes: Vec<Note>,
    // Session-scoped rotation cursor, deliberately not persisted: a fresh
    // board always starts the palette from the first color.
    color_cursor: usize,
    store: S,
}

impl<S: SnapshotStore> NoteBoard<S> {
    /// Open the board backed by `store`, loading whatever snapshot it holds.
    /// Corrupt or absent snapshots load as an empty board.
    pub fn open(store: S) -> Self {
        let notes = store.load();
        Self {
            notes,
            color_cursor: 0,
            store,
        }
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn count(&self) -> usize {
        self.notes.len()
    }

    pub fn get(&self, id: &Uuid) -> Option<&Note> {
        self.notes.iter().find(|n| &n.id == id)
    }

    /// Pure read in board order; used for search-filtering.
    pub fn query(&self, predicate: impl Fn(&Note) -> bool) -> Vec<&Note> {
        self.notes.iter().filter(|n| predicate(n)).collect()
    }

    /// Append a new note. Text is trimmed; an empty result rejects the add
    /// with no state change and no write. The new note takes the next
    /// palette color and the current wall-clock timestamp.
    pub fn add(&mut self, text: &str) -> Result<AddOutcome> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(AddOutcome::EmptyText);
        }

        let color = Color::PALETTE[self.color_cursor];
        self.color_cursor = (self.color_cursor + 1) % Color::PALETTE.len();

        let note = Note::new(text.to_string(), color);
        self.notes.push(note.clone());
        self.persist()?;
        Ok(AddOutcome::Added(note))
    }

    /// Replace a note's text and re-stamp it with the edit time. Color and
    /// id never change. A blank submission closes the edit without touching
    /// the note.
    pub fn edit(&mut self, id: &Uuid, new_text: &str) -> Result<EditOutcome> {
        let pos = self.position(id).ok_or(NotzError::NoteNotFound(*id))?;

        let new_text = new_text.trim();
        if new_text.is_empty() {
            return Ok(EditOutcome::EmptyText);
        }

        let note = &mut self.notes[pos];
        note.text = new_text.to_string();
        note.touch();
        let edited = note.clone();
        self.persist()?;
        Ok(EditOutcome::Edited(edited))
    }

    /// Remove a note, returning the removed record.
    pub fn delete(&mut self, id: &Uuid) -> Result<Note> {
        let pos = self.position(id).ok_or(NotzError::NoteNotFound(*id))?;
        let note = self.notes.remove(pos);
        self.persist()?;
        Ok(note)
    }

    /// Move `id` to sit immediately before `before`, or to the end when
    /// `before` is `None` or no longer on the board. A stale `before` falls
    /// back to the end rather than erroring: interactive reorders routinely
    /// race with deletes. Relative order of all other notes is preserved.
    pub fn reorder(&mut self, id: &Uuid, before: Option<&Uuid>) -> Result<()> {
        if before == Some(id) {
            return Ok(());
        }
        let from = self.position(id).ok_or(NotzError::NoteNotFound(*id))?;
        let note = self.notes.remove(from);
        let to = before
            .and_then(|b| self.position(b))
            .unwrap_or(self.notes.len());
        self.notes.insert(to, note);
        self.persist()?;
        Ok(())
    }

    /// Empty the board and remove the persisted slot entirely. Idempotent.
    pub fn clear_all(&mut self) -> Result<()> {
        self.notes.clear();
        self.store.clear()
    }

    fn position(&self, id: &Uuid) -> Option<usize> {
        self.notes.iter().position(|n| &n.id == id)
    }

    fn persist(&mut self) -> Result<()> {
        self.store.save(&self.notes)
    }
}
