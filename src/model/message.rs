//! Output message types.

use super::Rect;
use serde::{Deserialize, Serialize};

/// Kind of a reconstructed message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    /// A left- or right-aligned chat bubble
    #[default]
    Text,
    /// Centered system or timestamp caption
    System,
}

/// A message reconstructed from one screenshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedMessage {
    /// Message text: lines joined by `\n`, fragments within a line by a space
    pub content: String,

    /// Whether the bubble was sent by the screenshot owner (always false for system captions)
    pub is_from_me: bool,

    /// Message kind
    pub kind: MessageKind,

    /// Union of the message's fragment rectangles
    pub bbox: Rect,

    /// 0-based position in reading order
    pub order: usize,
}

impl ClassifiedMessage {
    /// Create a chat bubble message.
    pub fn text(content: impl Into<String>, is_from_me: bool, bbox: Rect, order: usize) -> Self {
        Self {
            content: content.into(),
            is_from_me,
            kind: MessageKind::Text,
            bbox,
            order,
        }
    }

    /// Create a centered system caption.
    pub fn system(content: impl Into<String>, bbox: Rect, order: usize) -> Self {
        Self {
            content: content.into(),
            is_from_me: false,
            kind: MessageKind::System,
            bbox,
            order,
        }
    }

    /// Check if this is a system caption.
    pub fn is_system(&self) -> bool {
        self.kind == MessageKind::System
    }
}
