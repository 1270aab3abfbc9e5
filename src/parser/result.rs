//! Parse result with statistics.

use std::fmt;

use crate::model::ClassifiedMessage;
use serde::{Deserialize, Serialize};

/// Messages reconstructed from one screenshot, with stage counts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatParseResult {
    /// Messages in reading order
    pub messages: Vec<ClassifiedMessage>,

    /// Counts collected along the pipeline
    pub statistics: ParseStatistics,
}

impl ChatParseResult {
    /// Number of messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Check if no message was recovered.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Take the messages, dropping the statistics.
    pub fn into_messages(self) -> Vec<ClassifiedMessage> {
        self.messages
    }
}

/// Counts collected while parsing a screenshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseStatistics {
    /// Raw OCR fragments received
    pub input_block_count: usize,

    /// Fragments left after noise filtering
    pub normalized_block_count: usize,

    /// Text lines formed
    pub line_count: usize,

    /// Message candidates formed
    pub candidate_count: usize,

    /// Candidates classified as system captions
    pub system_message_count: usize,

    /// Bubbles from the other party
    pub left_bubble_count: usize,

    /// Bubbles from the screenshot owner
    pub right_bubble_count: usize,
}

impl ParseStatistics {
    /// Statistics for input that never reached the grouping stages.
    pub fn empty(input_block_count: usize) -> Self {
        Self {
            input_block_count,
            ..Self::default()
        }
    }

    /// Number of bubbles (non-system messages).
    pub fn bubble_count(&self) -> usize {
        self.left_bubble_count + self.right_bubble_count
    }

    /// Fragments dropped as noise.
    pub fn dropped_block_count(&self) -> usize {
        self.input_block_count
            .saturating_sub(self.normalized_block_count)
    }

    /// Merge another screenshot's counts into these.
    pub fn merge(&mut self, other: &ParseStatistics) {
        self.input_block_count += other.input_block_count;
        self.normalized_block_count += other.normalized_block_count;
        self.line_count += other.line_count;
        self.candidate_count += other.candidate_count;
        self.system_message_count += other.system_message_count;
        self.left_bubble_count += other.left_bubble_count;
        self.right_bubble_count += other.right_bubble_count;
    }
}

impl fmt::Display for ParseStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "input={} → normalized={} → lines={} → candidates={} | system={} left={} right={}",
            self.input_block_count,
            self.normalized_block_count,
            self.line_count,
            self.candidate_count,
            self.system_message_count,
            self.left_bubble_count,
            self.right_bubble_count
        )
    }
}
