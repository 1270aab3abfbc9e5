//! Geometry-only classification of message candidates.
//!
//! Two questions are answered per candidate, both by clustering features
//! normalized to the image width rather than by fixed cutoffs:
//!
//! - Is it a centered system/timestamp caption? ([`classify_system_flags`])
//! - For bubbles: is it right-aligned ("me") or left-aligned? ([`classify_direction`])

use super::kmeans::two_means;
use super::layout::MessageCandidate;
use super::ChatParseConfig;

/// Horizontal position features of a candidate, normalized to image width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidateGeometry {
    /// Distance from the left image edge
    pub left_margin: f64,
    /// Distance from the right image edge
    pub right_margin: f64,
    /// Center of the bounding box
    pub center_x: f64,
    /// `left_margin - right_margin`; negative is left-skewed, positive right-skewed
    pub bias: f64,
}

impl CandidateGeometry {
    /// Compute the features of `candidate` on an image `image_width` pixels wide.
    pub fn of(candidate: &MessageCandidate, image_width: f64) -> Self {
        let bbox = &candidate.bbox;
        Self {
            left_margin: bbox.min_x() / image_width,
            right_margin: 1.0 - bbox.max_x() / image_width,
            center_x: bbox.mid_x() / image_width,
            bias: (bbox.min_x() + bbox.max_x()) / image_width - 1.0,
        }
    }

    /// Distance to the nearer image edge.
    pub fn min_edge_distance(&self) -> f64 {
        self.left_margin.min(self.right_margin)
    }
}

/// A bubble candidate with its sender side.
#[derive(Debug, Clone, Copy)]
pub struct DirectedCandidate<'a> {
    /// The classified candidate
    pub candidate: &'a MessageCandidate,
    /// True for right-aligned bubbles
    pub is_from_me: bool,
}

/// Flag candidates that are centered system or timestamp captions.
///
/// 1. Two-means over each candidate's distance to the nearer edge. The cluster
///    with the larger centroid holds the "centered" candidates; if the clusters
///    are too close, or the centered one still hugs the edges, the screenshot
///    has no captions.
/// 2. Keep centered-cluster members whose center is near the image center.
/// 3. Two-means over `|bias|` of those; the lower sub-cluster are captions.
pub fn classify_system_flags(
    candidates: &[MessageCandidate],
    image_width: f64,
    config: &ChatParseConfig,
) -> Vec<bool> {
    let mut flags = vec![false; candidates.len()];
    if candidates.is_empty() || !(image_width > 0.0) {
        return flags;
    }

    let features: Vec<CandidateGeometry> = candidates
        .iter()
        .map(|c| CandidateGeometry::of(c, image_width))
        .collect();

    let margins: Vec<f64> = features.iter().map(|f| f.min_edge_distance()).collect();
    let margin_clusters = two_means(&margins, config.cluster_iterations);
    let centered = margin_clusters.larger_cluster();
    let centered_margin = margin_clusters.centroid(centered);

    if margin_clusters.separation() < config.min_margin_separation
        || centered_margin < config.min_centered_margin
    {
        log::trace!(
            "No caption split: margin centroids {:.3} / {:.3}",
            margin_clusters.centroids.0,
            margin_clusters.centroids.1
        );
        return flags;
    }

    let centered_indices: Vec<usize> = margin_clusters
        .members(centered)
        .filter(|&i| (features[i].center_x - 0.5).abs() <= config.max_center_offset)
        .collect();

    if centered_indices.is_empty() {
        return flags;
    }

    let abs_biases: Vec<f64> = centered_indices
        .iter()
        .map(|&i| features[i].bias.abs())
        .collect();
    let bias_clusters = two_means(&abs_biases, config.cluster_iterations);

    // Identical |bias| values all land in cluster 0, so they are flagged together.
    for pos in bias_clusters.members(bias_clusters.smaller_cluster()) {
        flags[centered_indices[pos]] = true;
    }

    for i in (0..flags.len()).filter(|&i| flags[i]) {
        log::trace!(
            "Caption {}: center={:.3} bias={:.3}",
            i,
            features[i].center_x,
            features[i].bias
        );
    }

    flags
}

/// Assign each bubble to the right ("me") or left side.
///
/// Two-means over `bias`; the cluster with the larger centroid is "me". When
/// all biases coincide every bubble is "me".
pub fn classify_direction<'a>(
    candidates: &[&'a MessageCandidate],
    image_width: f64,
    config: &ChatParseConfig,
) -> Vec<DirectedCandidate<'a>> {
    if candidates.is_empty() || !(image_width > 0.0) {
        return Vec::new();
    }

    let biases: Vec<f64> = candidates
        .iter()
        .map(|c| CandidateGeometry::of(c, image_width).bias)
        .collect();

    let clusters = two_means(&biases, config.cluster_iterations);

    // With a single cluster (all biases equal) both centroids coincide and
    // cluster 0 is "me".
    let me_cluster = clusters.larger_cluster();

    log::trace!(
        "Direction centroids {:.3} / {:.3}, me cluster {}",
        clusters.centroids.0,
        clusters.centroids.1,
        me_cluster
    );

    candidates
        .iter()
        .zip(&clusters.assignments)
        .map(|(&candidate, &cluster)| DirectedCandidate {
            candidate,
            is_from_me: cluster == me_cluster,
        })
        .collect()
}
