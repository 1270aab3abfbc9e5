//! Data model for chat screenshot parsing.
//!
//! Input types describe what the OCR engine produced for one screenshot;
//! output types describe the reconstructed conversation. Both are plain
//! values with serde support so they can cross process boundaries as JSON.

mod fragment;
mod message;
mod rect;

pub use fragment::{ChatScreenshot, Fragment};
pub use message::{ClassifiedMessage, MessageKind};
pub use rect::Rect;
