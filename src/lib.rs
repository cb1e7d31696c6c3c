//! # Notz Architecture
//!
//! Notz is a **UI-agnostic sticky-note board library** with a thin CLI
//! client. The board is an ordered collection of short color-tagged notes,
//! persisted as a single whole-board snapshot in one storage slot.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, wired by main.rs)                      │
//! │  - Parses arguments, prints output, asks for confirmation   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic per operation, position → id resolution   │
//! │  - Returns CmdResult; no I/O assumptions                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Board + Storage (board.rs, store/)                         │
//! │  - NoteBoard: the ordered collection and its invariants     │
//! │  - SnapshotStore trait; FileStore (prod), InMemoryStore     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Invariants
//!
//! - Note ids are unique and stable; they are the only reorder/lookup key.
//! - Stored note text is never empty: blank add/edit submissions are
//!   rejected as silent no-ops.
//! - After every completed mutation the persisted snapshot equals the
//!   in-memory board, order included. Persistence is always the whole
//!   collection, never a diff.
//! - A failed snapshot write keeps the in-memory mutation; memory is the
//!   source of truth for the session and the failure surfaces as a warning.
//!
//! ## Confirmation
//!
//! Destructive operations (`delete`, `clear`) are confirmed in the CLI layer
//! before the API is invoked; cancelling leaves all state untouched. The
//! core never prompts.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`board`]: The note-collection state manager
//! - [`store`]: Snapshot persistence trait and implementations
//! - [`model`]: Core data types (`Note`, `Color`)
//! - [`config`]: Board configuration
//! - [`error`]: Error types

pub mod api;
pub mod board;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
