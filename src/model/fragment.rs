//! OCR input types.

use super::Rect;
use serde::{Deserialize, Serialize};

/// One OCR-recognized text span with its bounding rectangle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fragment {
    /// Recognized text
    pub text: String,

    /// Class tag assigned by the OCR engine (opaque to the parser)
    #[serde(default)]
    pub label: String,

    /// Bounding rectangle in image pixels
    #[serde(alias = "bbox")]
    pub rect: Rect,
}

impl Fragment {
    /// Create a fragment without a label.
    pub fn new(text: impl Into<String>, rect: Rect) -> Self {
        Self {
            text: text.into(),
            label: String::new(),
            rect,
        }
    }

    /// Set the OCR label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

/// OCR output for a single screenshot.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatScreenshot {
    /// Image width in pixels
    pub image_width: f64,

    /// Image height in pixels
    pub image_height: f64,

    /// Recognized fragments, in any order
    #[serde(default)]
    pub blocks: Vec<Fragment>,
}

impl ChatScreenshot {
    /// Create an empty screenshot of the given size.
    pub fn new(image_width: f64, image_height: f64) -> Self {
        Self {
            image_width,
            image_height,
            blocks: Vec::new(),
        }
    }

    /// Add a fragment.
    pub fn add_block(&mut self, block: Fragment) {
        self.blocks.push(block);
    }

    /// Builder-style variant of [`add_block`](Self::add_block).
    pub fn with_block(mut self, block: Fragment) -> Self {
        self.blocks.push(block);
        self
    }

    /// Image dimensions as a `(width, height)` tuple.
    pub fn dimensions(&self) -> (f64, f64) {
        (self.image_width, self.image_height)
    }
}
