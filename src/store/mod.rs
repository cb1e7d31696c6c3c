//! # Storage Layer
//!
//! The [`SnapshotStore`] trait is the board's persistence slot: one fixed
//! location holding the entire ordered collection as a single serialized
//! snapshot. Every write replaces the whole snapshot; there is no
//! incremental patching, so the slot can never hold a partially-applied
//! mutation.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, a single `board.json` under the
//!   board directory.
//! - [`memory::InMemoryStore`]: in-memory slot for tests, no persistence.
//!
//! ## Degradation policy
//!
//! `load` never fails: an absent or unparseable slot reads as an empty
//! board. A first-time user and a corrupted slot are indistinguishable by
//! design, so corruption degrades to "no notes" instead of an error.

use crate::error::Result;
use crate::model::Note;

pub mod fs;
pub mod memory;

/// Abstract interface for the board's single persistence slot.
pub trait SnapshotStore {
    /// Read the full board snapshot. Absent or unparseable data loads as an
    /// empty board.
    fn load(&self) -> Vec<Note>;

    /// Overwrite the slot with the complete ordered collection.
    fn save(&mut self, notes: &[Note]) -> Result<()>;

    /// Remove the slot entirely. Idempotent; a missing slot is not an error.
    fn clear(&mut self) -> Result<()>;
}
