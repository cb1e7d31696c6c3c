use crate::config::BoardConfig;
use crate::model::Note;

pub mod add;
pub mod clear;
pub mod config;
pub mod delete;
pub mod edit;
pub mod export;
pub mod helpers;
pub mod list;
pub mod search;
pub mod shift;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A note paired with its 1-based position on the board. Positions are how
/// the CLI addresses notes; ids stay internal.
#[derive(Debug, Clone)]
pub struct ListedNote {
    pub position: usize,
    pub note: Note,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected: Vec<Note>,
    pub listed: Vec<ListedNote>,
    pub config: Option<BoardConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, notes: Vec<Note>) -> Self {
        self.affected = notes;
        self
    }

    pub fn with_listed(mut self, notes: Vec<ListedNote>) -> Self {
        self.listed = notes;
        self
    }

    pub fn with_config(mut self, config: BoardConfig) -> Self {
        self.config = Some(config);
        self
    }
}
