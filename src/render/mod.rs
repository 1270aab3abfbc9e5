//! Rendering module for converting parsed messages to output formats.

mod json;
mod options;
mod text;

pub use json::{serialize, to_json, JsonFormat};
pub use options::TextOptions;
pub use text::to_text;
