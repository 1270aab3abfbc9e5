//! # unchat
//!
//! Reconstruct chat conversations from the OCR output of a chat screenshot.
//!
//! Given recognized text fragments and their bounding rectangles, the library
//! groups fragments into lines and lines into messages, separates centered
//! system/timestamp captions from chat bubbles, and decides which bubbles were
//! sent by the screenshot owner. Every decision comes from layout geometry, so
//! the same code works across chat apps and languages.
//!
//! ## Quick Start
//!
//! ```
//! use unchat::{parse_blocks, Fragment, Rect};
//!
//! let blocks = vec![
//!     Fragment::new("Hello", Rect::new(20.0, 100.0, 100.0, 30.0)),
//!     Fragment::new("Hi there", Rect::new(280.0, 160.0, 100.0, 30.0)),
//! ];
//!
//! let messages = parse_blocks(&blocks, 400.0, 800.0);
//! assert!(!messages[0].is_from_me);
//! assert!(messages[1].is_from_me);
//! ```
//!
//! ## Pipeline
//!
//! 1. Normalize: trim text, drop noise, sort top-to-bottom
//! 2. Group fragments into lines
//! 3. Group lines into message candidates
//! 4. Flag centered captions (two-stage two-means clustering)
//! 5. Split bubbles into left/right (two-means over horizontal bias)
//! 6. Assemble typed messages in reading order
//!
//! Parsing never fails: unusable input yields an empty message list.

pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{ChatScreenshot, ClassifiedMessage, Fragment, MessageKind, Rect};
pub use parser::{ChatParseConfig, ChatParseResult, ChatParser, ParseStatistics};
pub use render::{JsonFormat, TextOptions};

use std::path::Path;

/// Parse OCR fragments with default thresholds.
///
/// # Arguments
///
/// * `blocks` - OCR fragments in any order
/// * `image_width` - Screenshot width in pixels
/// * `image_height` - Screenshot height in pixels
pub fn parse_blocks(
    blocks: &[Fragment],
    image_width: f64,
    image_height: f64,
) -> Vec<ClassifiedMessage> {
    ChatParser::new().parse(blocks, image_width, image_height)
}

/// Parse OCR fragments with custom thresholds.
///
/// # Example
///
/// ```
/// use unchat::{parse_blocks_with_config, ChatParseConfig};
///
/// let config = ChatParseConfig::new().with_line_gap(24.0);
/// let messages = parse_blocks_with_config(&[], 1080.0, 2340.0, config);
/// assert!(messages.is_empty());
/// ```
pub fn parse_blocks_with_config(
    blocks: &[Fragment],
    image_width: f64,
    image_height: f64,
    config: ChatParseConfig,
) -> Vec<ClassifiedMessage> {
    ChatParser::with_config(config).parse(blocks, image_width, image_height)
}

/// Parse a decoded screenshot with default thresholds.
pub fn parse_screenshot(screenshot: &ChatScreenshot) -> ChatParseResult {
    ChatParser::new().parse_screenshot(screenshot)
}

/// Decode a screenshot from JSON and parse it.
///
/// # Example
///
/// ```
/// let json = r#"{"imageWidth": 400, "imageHeight": 800, "blocks": [
///     {"text": "Hello", "rect": {"x": 20, "y": 100, "width": 100, "height": 30}}
/// ]}"#;
/// let result = unchat::parse_json(json)?;
/// assert_eq!(result.len(), 1);
/// # Ok::<(), unchat::Error>(())
/// ```
pub fn parse_json(json: &str) -> Result<ChatParseResult> {
    ChatParser::new().parse_json(json)
}

/// Read a screenshot JSON file and parse it.
///
/// ```no_run
/// let result = unchat::parse_file("screenshot.json").unwrap();
/// println!("{}", result.statistics);
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<ChatParseResult> {
    ChatParser::new().parse_file(path)
}

/// Parse a screenshot JSON file and render it as a text transcript.
pub fn to_text<P: AsRef<Path>>(path: P, options: &TextOptions) -> Result<String> {
    let result = parse_file(path)?;
    Ok(render::to_text(&result.messages, options))
}

/// Parse a screenshot JSON file and render the messages as JSON.
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let result = parse_file(path)?;
    render::to_json(&result.messages, format)
}
