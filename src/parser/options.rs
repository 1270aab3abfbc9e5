//! Parsing thresholds and configuration.

use serde::{Deserialize, Serialize};

/// Thresholds used by the grouping and classification stages.
///
/// Pixel values are in screenshot pixels; ratios are normalized to the image
/// width. The configuration is an immutable value: build a new one instead of
/// mutating a shared instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChatParseConfig {
    /// Minimum vertical overlap (relative to the shorter box) to join a line
    pub min_line_vertical_overlap_ratio: f64,

    /// Maximum horizontal gap in pixels to join a line
    pub max_line_horizontal_gap_px: f64,

    /// Weight of the vertical-center distance when scoring line matches
    pub line_center_weight: f64,

    /// Maximum vertical gap in pixels between a line and the message above it
    pub max_message_line_gap_px: f64,

    /// Maximum left- or right-edge misalignment in pixels to join a message
    pub max_message_x_align_delta_px: f64,

    /// Weight of the edge misalignment when scoring message matches
    pub message_align_weight: f64,

    /// Fragments whose width or height is at most this many pixels are noise
    pub min_fragment_extent_px: f64,

    /// Iteration cap for two-means clustering
    pub cluster_iterations: usize,

    /// Minimum distance between edge-margin centroids for captions to exist
    pub min_margin_separation: f64,

    /// Minimum edge-margin centroid of the centered cluster
    pub min_centered_margin: f64,

    /// Maximum distance of a caption's center from the image center
    pub max_center_offset: f64,
}

impl ChatParseConfig {
    /// Create a configuration with default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum vertical overlap ratio for line grouping.
    pub fn with_line_overlap_ratio(mut self, ratio: f64) -> Self {
        self.min_line_vertical_overlap_ratio = ratio;
        self
    }

    /// Set the maximum horizontal gap for line grouping.
    pub fn with_line_gap(mut self, px: f64) -> Self {
        self.max_line_horizontal_gap_px = px;
        self
    }

    /// Set the vertical-center tie-break weight for line grouping.
    pub fn with_line_center_weight(mut self, weight: f64) -> Self {
        self.line_center_weight = weight;
        self
    }

    /// Set the maximum vertical gap for message grouping.
    pub fn with_message_gap(mut self, px: f64) -> Self {
        self.max_message_line_gap_px = px;
        self
    }

    /// Set the maximum edge misalignment for message grouping.
    pub fn with_message_align_delta(mut self, px: f64) -> Self {
        self.max_message_x_align_delta_px = px;
        self
    }

    /// Set the alignment weight for message grouping.
    pub fn with_message_align_weight(mut self, weight: f64) -> Self {
        self.message_align_weight = weight;
        self
    }

    /// Set the noise threshold for fragment width and height.
    pub fn with_min_fragment_extent(mut self, px: f64) -> Self {
        self.min_fragment_extent_px = px;
        self
    }

    /// Set the clustering iteration cap (at least 1).
    pub fn with_cluster_iterations(mut self, iterations: usize) -> Self {
        self.cluster_iterations = iterations.max(1);
        self
    }

    /// Set the caption center tolerance.
    pub fn with_max_center_offset(mut self, offset: f64) -> Self {
        self.max_center_offset = offset;
        self
    }
}

impl Default for ChatParseConfig {
    fn default() -> Self {
        Self {
            min_line_vertical_overlap_ratio: 0.5,
            max_line_horizontal_gap_px: 18.0,
            line_center_weight: 0.05,
            max_message_line_gap_px: 26.0,
            max_message_x_align_delta_px: 28.0,
            message_align_weight: 0.5,
            min_fragment_extent_px: 1.0,
            cluster_iterations: 8,
            min_margin_separation: 0.12,
            min_centered_margin: 0.18,
            max_center_offset: 0.12,
        }
    }
}
