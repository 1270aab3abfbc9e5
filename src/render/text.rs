//! Plain text transcript rendering.

use crate::model::{ClassifiedMessage, MessageKind};

use super::TextOptions;

/// Render messages as a plain-text transcript, one message per entry, in
/// `order`.
pub fn to_text(messages: &[ClassifiedMessage], options: &TextOptions) -> String {
    let mut ordered: Vec<&ClassifiedMessage> = messages.iter().collect();
    ordered.sort_by_key(|m| m.order);

    let mut lines: Vec<String> = Vec::with_capacity(ordered.len() + 1);
    if let Some(ref title) = options.title {
        lines.push(format!("=== {} ===\n", title));
    }

    for message in ordered {
        let line = match message.kind {
            MessageKind::System => format!("{} {}", options.system_prefix, message.content),
            MessageKind::Text => {
                let speaker = if message.is_from_me {
                    &options.me_label
                } else {
                    &options.other_label
                };
                format!("{}: {}", speaker, message.content)
            }
        };
        lines.push(line);
    }

    lines.join("\n")
}
