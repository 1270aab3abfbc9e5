//! Transcript rendering options.

/// Options for rendering a plain-text transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextOptions {
    /// Optional header title (e.g. the contact name)
    pub title: Option<String>,

    /// Speaker label for the screenshot owner's bubbles
    pub me_label: String,

    /// Speaker label for the other party's bubbles
    pub other_label: String,

    /// Prefix for system captions
    pub system_prefix: String,
}

impl TextOptions {
    /// Create new text options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the header title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the label used for "me".
    pub fn with_me_label(mut self, label: impl Into<String>) -> Self {
        self.me_label = label.into();
        self
    }

    /// Set the label used for the other party.
    pub fn with_other_label(mut self, label: impl Into<String>) -> Self {
        self.other_label = label.into();
        self
    }

    /// Set the system caption prefix.
    pub fn with_system_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.system_prefix = prefix.into();
        self
    }
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            title: None,
            me_label: "Me".to_string(),
            other_label: "Other".to_string(),
            system_prefix: "[System]".to_string(),
        }
    }
}
