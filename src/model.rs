use chrono::Local;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The four board colors, handed out round-robin as notes are created.
///
/// Serialized as the palette tokens `"color-1"`..`"color-4"` so the board
/// file stays a plain, stable format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    #[serde(rename = "color-1")]
    Cream,
    #[serde(rename = "color-2")]
    Rose,
    #[serde(rename = "color-3")]
    Sage,
    #[serde(rename = "color-4")]
    Sky,
}

impl Color {
    /// Canonical rotation order for new notes.
    pub const PALETTE: [Color; 4] = [Color::Cream, Color::Rose, Color::Sage, Color::Sky];

    /// The persisted token for this color.
    pub fn token(&self) -> &'static str {
        match self {
            Color::Cream => "color-1",
            Color::Rose => "color-2",
            Color::Sage => "color-3",
            Color::Sky => "color-4",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub id: Uuid,
    pub text: String,
    pub color: Color,
    // Display string, re-stamped on edit. Never used for ordering; board
    // position is the only ordering.
    pub timestamp: String,
}

impl Note {
    pub fn new(text: String, color: Color) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            color,
            timestamp: current_timestamp(),
        }
    }

    /// Re-stamp with the current time. Called on every successful edit.
    pub fn touch(&mut self) {
        self.timestamp = current_timestamp();
    }
}

/// Wall-clock time of day in the board's display format, e.g. "3:07 PM".
pub fn current_timestamp() -> String {
    Local::now().format("%-I:%M %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_tokens_are_stable() {
        let tokens: Vec<_> = Color::PALETTE.iter().map(|c| c.token()).collect();
        assert_eq!(tokens, vec!["color-1", "color-2", "color-3", "color-4"]);
    }

    #[test]
    fn color_serializes_as_token() {
        let json = serde_json::to_string(&Color::Sage).unwrap();
        assert_eq!(json, "\"color-3\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color::Sage);
    }

    #[test]
    fn timestamp_is_twelve_hour_clock() {
        let ts = current_timestamp();
        assert!(ts.ends_with("AM") || ts.ends_with("PM"), "got {}", ts);
        assert!(ts.contains(':'));
        // No zero-padded hour: "03:07 PM" would read oddly on a sticky note
        assert!(!ts.starts_with('0'));
    }

    #[test]
    fn new_note_gets_fresh_id_and_stamp() {
        let a = Note::new("a".into(), Color::Cream);
        let b = Note::new("b".into(), Color::Cream);
        assert_ne!(a.id, b.id);
        assert!(!a.timestamp.is_empty());
    }
}
