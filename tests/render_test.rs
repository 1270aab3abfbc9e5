//! Integration tests for file input and rendering.

use std::io::Write;

use tempfile::NamedTempFile;
use unchat::{ClassifiedMessage, Error, JsonFormat, MessageKind, TextOptions};

const SCREENSHOT: &str = r#"{
    "imageWidth": 400,
    "imageHeight": 800,
    "blocks": [
        {"text": " Hello ", "label": "text", "rect": {"x": 20, "y": 100, "width": 100, "height": 30}},
        {"text": "Hi there", "bbox": {"x": 280, "y": 160, "width": 100, "height": 30}},
        {"text": "10:32 AM", "rect": {"x": 150, "y": 50, "width": 100, "height": 20}},
        {"text": "", "rect": {"x": 150, "y": 300, "width": 100, "height": 20}}
    ]
}"#;

fn screenshot_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_parse_file_statistics() {
    let file = screenshot_file(SCREENSHOT);
    let result = unchat::parse_file(file.path()).unwrap();

    assert_eq!(result.len(), 3);
    assert_eq!(result.statistics.input_block_count, 4);
    assert_eq!(result.statistics.dropped_block_count(), 1);
    assert_eq!(
        result.statistics.to_string(),
        "input=4 → normalized=3 → lines=3 → candidates=3 | system=1 left=1 right=1"
    );
}

#[test]
fn test_file_to_text() {
    let file = screenshot_file(SCREENSHOT);
    let text = unchat::to_text(file.path(), &TextOptions::default()).unwrap();
    assert_eq!(text, "[System] 10:32 AM\nOther: Hello\nMe: Hi there");
}

#[test]
fn test_file_to_text_custom_labels() {
    let file = screenshot_file(SCREENSHOT);
    let options = TextOptions::new()
        .with_title("Alice")
        .with_me_label("Bob")
        .with_other_label("Alice")
        .with_system_prefix("*");

    let text = unchat::to_text(file.path(), &options).unwrap();
    assert_eq!(
        text,
        "=== Alice ===\n\n* 10:32 AM\nAlice: Hello\nBob: Hi there"
    );
}

#[test]
fn test_file_to_json() {
    let file = screenshot_file(SCREENSHOT);
    let json = unchat::to_json(file.path(), JsonFormat::Pretty).unwrap();

    assert!(json.contains("\"isFromMe\": true"));
    assert!(json.contains("\"kind\": \"system\""));

    let messages: Vec<ClassifiedMessage> = serde_json::from_str(&json).unwrap();
    let order: Vec<usize> = messages.iter().map(|m| m.order).collect();
    assert_eq!(order, vec![0, 1, 2]);
    assert_eq!(messages[0].kind, MessageKind::System);
    assert_eq!(messages[1].content, "Hello");
}

#[test]
fn test_config_from_json() {
    let config: unchat::ChatParseConfig =
        serde_json::from_str(r#"{"maxLineHorizontalGapPx": 1000}"#).unwrap();
    assert_eq!(config.max_line_horizontal_gap_px, 1000.0);
    assert_eq!(config.max_message_line_gap_px, 26.0);

    // "Hello" and "Hi there" sit on different rows, so a wide line gap alone
    // does not merge them.
    let file = screenshot_file(SCREENSHOT);
    let result = unchat::ChatParser::with_config(config)
        .parse_file(file.path())
        .unwrap();
    assert_eq!(result.len(), 3);
}

#[test]
fn test_malformed_file() {
    let file = screenshot_file(r#"{"imageWidth": "wide"}"#);
    assert!(matches!(
        unchat::parse_file(file.path()),
        Err(Error::InvalidInput(_))
    ));
}

#[test]
fn test_missing_blocks_is_empty() {
    let file = screenshot_file(r#"{"imageWidth": 400, "imageHeight": 800}"#);
    let result = unchat::parse_file(file.path()).unwrap();
    assert!(result.is_empty());
    assert_eq!(result.statistics.input_block_count, 0);
}
