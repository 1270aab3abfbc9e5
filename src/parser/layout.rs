//! Layout analysis for chat screenshots.
//!
//! Turns raw OCR fragments into message candidates in three steps:
//! normalization, fragment-to-line grouping and line-to-message grouping.
//! Every step works on geometry only; fragment text is carried along but never
//! inspected.

use std::cmp::Ordering;

use crate::model::{Fragment, Rect};

use super::ChatParseConfig;

/// A cleaned OCR fragment.
///
/// Always has non-empty trimmed text and a rectangle larger than the noise
/// threshold in both dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedFragment {
    /// Trimmed text
    pub text: String,
    /// OCR label, passed through untouched
    pub label: String,
    /// Bounding rectangle
    pub rect: Rect,
}

impl NormalizedFragment {
    /// Clean a raw fragment, or return `None` if it is noise.
    pub fn from_fragment(fragment: &Fragment, min_extent: f64) -> Option<Self> {
        let text = fragment.text.trim();
        if text.is_empty() {
            return None;
        }

        let rect = fragment.rect;
        if !rect.is_finite() || rect.width <= min_extent || rect.height <= min_extent {
            return None;
        }

        Some(Self {
            text: text.to_string(),
            label: fragment.label.clone(),
            rect,
        })
    }
}

/// Fragments sharing one horizontal text line.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// Member fragments in insertion order
    pub fragments: Vec<NormalizedFragment>,
    /// Union of the member rectangles
    pub bbox: Rect,
}

impl Line {
    /// Start a line from a single fragment.
    pub fn new(fragment: NormalizedFragment) -> Self {
        Self {
            bbox: fragment.rect,
            fragments: vec![fragment],
        }
    }

    /// Add a fragment and grow the bounding box.
    pub fn push(&mut self, fragment: NormalizedFragment) {
        self.bbox = self.bbox.union(&fragment.rect);
        self.fragments.push(fragment);
    }

    /// Line text, fragments read left to right and separated by a space.
    pub fn text(&self) -> String {
        let mut ordered: Vec<&NormalizedFragment> = self.fragments.iter().collect();
        ordered.sort_by(|a, b| a.rect.min_x().total_cmp(&b.rect.min_x()));
        ordered
            .iter()
            .map(|f| f.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Lines judged to form one visual message block.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageCandidate {
    /// Lines in top-to-bottom order
    pub lines: Vec<Line>,
    /// Union of the line rectangles
    pub bbox: Rect,
}

impl MessageCandidate {
    /// Start a candidate from a single line.
    pub fn new(line: Line) -> Self {
        Self {
            bbox: line.bbox,
            lines: vec![line],
        }
    }

    /// Append a line below the existing ones.
    pub fn push(&mut self, line: Line) {
        self.bbox = self.bbox.union(&line.bbox);
        self.lines.push(line);
    }

    /// Candidate text, one line per row.
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(|l| l.text())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Number of fragments across all lines.
    pub fn fragment_count(&self) -> usize {
        self.lines.iter().map(|l| l.fragments.len()).sum()
    }
}

/// Clean fragments and sort them top-to-bottom, then left-to-right, then by
/// width.
pub fn normalize_blocks(blocks: &[Fragment], config: &ChatParseConfig) -> Vec<NormalizedFragment> {
    let mut normalized: Vec<NormalizedFragment> = blocks
        .iter()
        .filter_map(|b| NormalizedFragment::from_fragment(b, config.min_fragment_extent_px))
        .collect();

    normalized.sort_by(|a, b| {
        a.rect
            .min_y()
            .total_cmp(&b.rect.min_y())
            .then_with(|| a.rect.min_x().total_cmp(&b.rect.min_x()))
            .then_with(|| a.rect.width.total_cmp(&b.rect.width))
    });

    normalized
}

/// Group normalized fragments into lines with a single forward pass.
///
/// The result is re-sorted by `(min_y, min_x)` because two columns at the
/// same height may create lines out of reading order.
pub fn group_fragments_into_lines(
    fragments: Vec<NormalizedFragment>,
    config: &ChatParseConfig,
) -> Vec<Line> {
    let mut lines = fragments
        .into_iter()
        .fold(Vec::<Line>::new(), |mut lines, fragment| {
            match best_line_index(&fragment, &lines, config) {
                Some(index) => lines[index].push(fragment),
                None => lines.push(Line::new(fragment)),
            }
            lines
        });

    lines.sort_by(|a, b| reading_order(&a.bbox, &b.bbox));
    lines
}

/// Group lines into message candidates with a single forward pass.
pub fn group_lines_into_candidates(
    lines: Vec<Line>,
    config: &ChatParseConfig,
) -> Vec<MessageCandidate> {
    let mut candidates =
        lines
            .into_iter()
            .fold(Vec::<MessageCandidate>::new(), |mut candidates, line| {
                match best_candidate_index(&line, &candidates, config) {
                    Some(index) => candidates[index].push(line),
                    None => candidates.push(MessageCandidate::new(line)),
                }
                candidates
            });

    candidates.sort_by(|a, b| reading_order(&a.bbox, &b.bbox));
    candidates
}

/// Best line for a fragment: horizontal proximity first, vertical center
/// distance as tie-break. Lower score wins; the earliest line wins ties.
fn best_line_index(
    fragment: &NormalizedFragment,
    lines: &[Line],
    config: &ChatParseConfig,
) -> Option<usize> {
    let scores = lines.iter().enumerate().filter_map(|(i, line)| {
        let overlap = line.bbox.vertical_overlap_ratio(&fragment.rect);
        if overlap < config.min_line_vertical_overlap_ratio {
            return None;
        }

        let gap = line.bbox.horizontal_gap(&fragment.rect);
        if gap > config.max_line_horizontal_gap_px {
            return None;
        }

        let dy = (line.bbox.mid_y() - fragment.rect.mid_y()).abs();
        Some((i, gap + dy * config.line_center_weight))
    });

    lowest_score(scores)
}

/// Best candidate for a line: it must sit below the candidate and share its
/// left or right edge.
fn best_candidate_index(
    line: &Line,
    candidates: &[MessageCandidate],
    config: &ChatParseConfig,
) -> Option<usize> {
    let scores = candidates.iter().enumerate().filter_map(|(i, cand)| {
        let gap_y = line.bbox.min_y() - cand.bbox.max_y();
        if !(0.0..=config.max_message_line_gap_px).contains(&gap_y) {
            return None;
        }

        let min_x_delta = (line.bbox.min_x() - cand.bbox.min_x()).abs();
        let max_x_delta = (line.bbox.max_x() - cand.bbox.max_x()).abs();
        let align = min_x_delta.min(max_x_delta);
        if align > config.max_message_x_align_delta_px {
            return None;
        }

        Some((i, gap_y + align * config.message_align_weight))
    });

    lowest_score(scores)
}

fn lowest_score(scores: impl Iterator<Item = (usize, f64)>) -> Option<usize> {
    scores
        .fold(None, |best: Option<(usize, f64)>, (i, score)| match best {
            Some((_, best_score)) if best_score <= score => best,
            _ => Some((i, score)),
        })
        .map(|(i, _)| i)
}

/// Top-to-bottom, then left-to-right.
fn reading_order(a: &Rect, b: &Rect) -> Ordering {
    a.min_y()
        .total_cmp(&b.min_y())
        .then_with(|| a.min_x().total_cmp(&b.min_x()))
}
