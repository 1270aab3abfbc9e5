//! Chat screenshot parsing pipeline.

mod chat_parser;
mod classify;
mod kmeans;
mod layout;
mod options;
mod result;

pub use chat_parser::{load_screenshot, load_screenshot_str, ChatParser};
pub use classify::{classify_direction, classify_system_flags, CandidateGeometry, DirectedCandidate};
pub use kmeans::{two_means, TwoMeans};
pub use layout::{
    group_fragments_into_lines, group_lines_into_candidates, normalize_blocks, Line,
    MessageCandidate, NormalizedFragment,
};
pub use options::ChatParseConfig;
pub use result::{ChatParseResult, ParseStatistics};
