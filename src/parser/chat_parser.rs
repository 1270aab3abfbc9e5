//! Chat screenshot parser.

use std::fs;
use std::path::Path;

use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::model::{ChatScreenshot, ClassifiedMessage, Fragment};

use super::classify::{classify_direction, classify_system_flags};
use super::layout::{
    group_fragments_into_lines, group_lines_into_candidates, normalize_blocks, MessageCandidate,
};
use super::options::ChatParseConfig;
use super::result::{ChatParseResult, ParseStatistics};

/// Reconstructs chat messages from screenshot OCR output.
///
/// Parsing is a pure function of the fragments, the image size and the
/// configuration: it never fails, and degenerate input (zero-sized image, no
/// usable fragments) simply yields no messages.
///
/// # Example
///
/// ```
/// use unchat::{ChatParser, Fragment, MessageKind, Rect};
///
/// let blocks = vec![
///     Fragment::new("10:32 AM", Rect::new(150.0, 50.0, 100.0, 20.0)),
///     Fragment::new("Hello", Rect::new(20.0, 100.0, 100.0, 30.0)),
///     Fragment::new("Hi there", Rect::new(280.0, 160.0, 100.0, 30.0)),
/// ];
///
/// let messages = ChatParser::new().parse(&blocks, 400.0, 800.0);
/// assert_eq!(messages[0].kind, MessageKind::System);
/// assert!(!messages[1].is_from_me);
/// assert!(messages[2].is_from_me);
/// ```
#[derive(Debug, Clone)]
pub struct ChatParser {
    config: ChatParseConfig,
    parallel: bool,
}

impl ChatParser {
    /// Create a parser with default thresholds.
    pub fn new() -> Self {
        Self::with_config(ChatParseConfig::default())
    }

    /// Create a parser with custom thresholds.
    pub fn with_config(config: ChatParseConfig) -> Self {
        Self {
            config,
            parallel: true,
        }
    }

    /// Enable or disable parallel batch parsing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Parse batches on the calling thread.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// The thresholds in use.
    pub fn config(&self) -> &ChatParseConfig {
        &self.config
    }

    /// Parse OCR fragments into ordered messages.
    pub fn parse(
        &self,
        blocks: &[Fragment],
        image_width: f64,
        image_height: f64,
    ) -> Vec<ClassifiedMessage> {
        self.parse_with_statistics(blocks, image_width, image_height)
            .into_messages()
    }

    /// Parse OCR fragments and report counts for every stage.
    pub fn parse_with_statistics(
        &self,
        blocks: &[Fragment],
        image_width: f64,
        image_height: f64,
    ) -> ChatParseResult {
        let input_block_count = blocks.len();

        if !(image_width > 0.0 && image_height > 0.0) {
            log::debug!(
                "Unusable image size {}x{}; {}",
                image_width,
                image_height,
                ParseStatistics::empty(input_block_count)
            );
            return ChatParseResult {
                messages: Vec::new(),
                statistics: ParseStatistics::empty(input_block_count),
            };
        }

        let fragments = normalize_blocks(blocks, &self.config);
        let normalized_block_count = fragments.len();

        if fragments.is_empty() {
            let statistics = ParseStatistics::empty(input_block_count);
            log::debug!("{}", statistics);
            return ChatParseResult {
                messages: Vec::new(),
                statistics,
            };
        }

        let lines = group_fragments_into_lines(fragments, &self.config);
        let line_count = lines.len();

        let candidates = group_lines_into_candidates(lines, &self.config);

        let (messages, system_count, right_count) = self.assemble(&candidates, image_width);

        let statistics = ParseStatistics {
            input_block_count,
            normalized_block_count,
            line_count,
            candidate_count: candidates.len(),
            system_message_count: system_count,
            left_bubble_count: messages.len() - system_count - right_count,
            right_bubble_count: right_count,
        };
        log::debug!("{}", statistics);

        ChatParseResult {
            messages,
            statistics,
        }
    }

    /// Parse a decoded screenshot.
    pub fn parse_screenshot(&self, screenshot: &ChatScreenshot) -> ChatParseResult {
        self.parse_with_statistics(
            &screenshot.blocks,
            screenshot.image_width,
            screenshot.image_height,
        )
    }

    /// Parse many screenshots; results keep the input order.
    pub fn parse_batch(&self, screenshots: &[ChatScreenshot]) -> Vec<ChatParseResult> {
        if self.parallel {
            screenshots
                .par_iter()
                .map(|s| self.parse_screenshot(s))
                .collect()
        } else {
            screenshots.iter().map(|s| self.parse_screenshot(s)).collect()
        }
    }

    /// Decode a screenshot from JSON and parse it.
    pub fn parse_json(&self, json: &str) -> Result<ChatParseResult> {
        let screenshot = load_screenshot_str(json)?;
        Ok(self.parse_screenshot(&screenshot))
    }

    /// Read a screenshot JSON file and parse it.
    pub fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<ChatParseResult> {
        let screenshot = load_screenshot(path)?;
        Ok(self.parse_screenshot(&screenshot))
    }

    /// Merge system flags and bubble directions back into reading order.
    ///
    /// Returns the messages plus the system and right-bubble counts.
    fn assemble(
        &self,
        candidates: &[MessageCandidate],
        image_width: f64,
    ) -> (Vec<ClassifiedMessage>, usize, usize) {
        let system_flags = classify_system_flags(candidates, image_width, &self.config);

        let bubbles: Vec<&MessageCandidate> = candidates
            .iter()
            .zip(&system_flags)
            .filter(|(_, &is_system)| !is_system)
            .map(|(c, _)| c)
            .collect();
        let mut directed = classify_direction(&bubbles, image_width, &self.config).into_iter();

        let mut messages = Vec::with_capacity(candidates.len());
        let (mut system_count, mut right_count) = (0, 0);

        for (candidate, &is_system) in candidates.iter().zip(&system_flags) {
            let order = messages.len();
            if is_system {
                system_count += 1;
                messages.push(ClassifiedMessage::system(
                    candidate.text(),
                    candidate.bbox,
                    order,
                ));
            } else if let Some(bubble) = directed.next() {
                if bubble.is_from_me {
                    right_count += 1;
                }
                messages.push(ClassifiedMessage::text(
                    bubble.candidate.text(),
                    bubble.is_from_me,
                    bubble.candidate.bbox,
                    order,
                ));
            }
        }

        (messages, system_count, right_count)
    }
}

impl Default for ChatParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode a screenshot from a JSON string.
pub fn load_screenshot_str(json: &str) -> Result<ChatScreenshot> {
    serde_json::from_str(json).map_err(|e| Error::InvalidInput(e.to_string()))
}

/// Read and decode a screenshot JSON file.
pub fn load_screenshot<P: AsRef<Path>>(path: P) -> Result<ChatScreenshot> {
    let data = fs::read_to_string(path)?;
    load_screenshot_str(&data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MessageKind, Rect};

    fn sample_blocks() -> Vec<Fragment> {
        vec![
            Fragment::new("Hello", Rect::new(20.0, 100.0, 100.0, 30.0)),
            Fragment::new("Hi there", Rect::new(280.0, 160.0, 100.0, 30.0)),
            Fragment::new("10:32 AM", Rect::new(150.0, 50.0, 100.0, 20.0)),
        ]
    }

    #[test]
    fn test_worked_example() {
        let result = ChatParser::new().parse_with_statistics(&sample_blocks(), 400.0, 800.0);
        let messages = &result.messages;

        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0].content, "10:32 AM");
        assert_eq!(messages[0].kind, MessageKind::System);
        assert!(!messages[0].is_from_me);
        assert_eq!(messages[1].content, "Hello");
        assert_eq!(messages[1].kind, MessageKind::Text);
        assert!(!messages[1].is_from_me);
        assert_eq!(messages[2].content, "Hi there");
        assert!(messages[2].is_from_me);

        let orders: Vec<usize> = messages.iter().map(|m| m.order).collect();
        assert_eq!(orders, vec![0, 1, 2]);

        let stats = result.statistics;
        assert_eq!(stats.candidate_count, 3);
        assert_eq!(stats.system_message_count, 1);
        assert_eq!(stats.left_bubble_count, 1);
        assert_eq!(stats.right_bubble_count, 1);
    }

    #[test]
    fn test_unusable_image_size() {
        let parser = ChatParser::new();
        assert!(parser.parse(&sample_blocks(), 0.0, 0.0).is_empty());
        assert!(parser.parse(&sample_blocks(), 400.0, 0.0).is_empty());
        assert!(parser.parse(&sample_blocks(), -1.0, 800.0).is_empty());
        assert!(parser.parse(&sample_blocks(), f64::NAN, 800.0).is_empty());

        let result = parser.parse_with_statistics(&sample_blocks(), 0.0, 0.0);
        assert_eq!(result.statistics.input_block_count, 3);
        assert_eq!(result.statistics.normalized_block_count, 0);
    }

    #[test]
    fn test_all_noise() {
        let blocks = vec![
            Fragment::new(" ", Rect::new(20.0, 100.0, 100.0, 30.0)),
            Fragment::new("x", Rect::new(20.0, 200.0, 0.0, 30.0)),
        ];
        let result = ChatParser::new().parse_with_statistics(&blocks, 400.0, 800.0);
        assert!(result.is_empty());
        assert_eq!(result.statistics.input_block_count, 2);
    }

    #[test]
    fn test_parse_json() {
        let json = r#"{
            "imageWidth": 400,
            "imageHeight": 800,
            "blocks": [
                {"text": "Hello", "label": "text", "rect": {"x": 20, "y": 100, "width": 100, "height": 30}},
                {"text": "Hi there", "rect": {"x": 280, "y": 160, "width": 100, "height": 30}}
            ]
        }"#;

        let result = ChatParser::new().parse_json(json).unwrap();
        assert_eq!(result.len(), 2);
        assert!(!result.messages[0].is_from_me);
        assert!(result.messages[1].is_from_me);
    }

    #[test]
    fn test_parse_json_invalid() {
        let result = ChatParser::new().parse_json("{not json");
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_batch_matches_single() {
        let shot = ChatScreenshot {
            image_width: 400.0,
            image_height: 800.0,
            blocks: sample_blocks(),
        };
        let batch = vec![shot.clone(), ChatScreenshot::new(0.0, 0.0), shot.clone()];

        let parser = ChatParser::new();
        let parallel = parser.parse_batch(&batch);
        let sequential = parser.clone().sequential().parse_batch(&batch);

        assert_eq!(parallel, sequential);
        assert_eq!(parallel[0], parser.parse_screenshot(&shot));
        assert!(parallel[1].is_empty());
        assert_eq!(parallel[2].len(), 3);
    }
}
