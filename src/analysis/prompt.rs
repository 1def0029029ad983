use crate::models::{Message, MessageRole};

/// At most this many user messages feed one analysis prompt.
pub const MAX_SAMPLED_USER_MESSAGES: usize = 5;

/// Per-message character cap before truncation.
pub const MAX_MESSAGE_CHARS: usize = 200;

const TRUNCATION_MARKER: &str = "...";

/// Condense a conversation's user turns into the text sample embedded in the
/// analysis prompt: user-role messages only, first
/// [`MAX_SAMPLED_USER_MESSAGES`], each truncated to [`MAX_MESSAGE_CHARS`]
/// characters, joined by single newlines. Empty when the conversation has no
/// usable user content.
pub fn user_message_sample(messages: &[Message]) -> String {
    messages
        .iter()
        .filter(|m| m.role == MessageRole::User)
        .take(MAX_SAMPLED_USER_MESSAGES)
        .map(|m| truncate_content(&m.content))
        .collect::<Vec<_>>()
        .join("\n")
}

fn truncate_content(content: &str) -> String {
    if content.chars().count() <= MAX_MESSAGE_CHARS {
        return content.to_string();
    }
    let mut truncated: String = content.chars().take(MAX_MESSAGE_CHARS).collect();
    truncated.push_str(TRUNCATION_MARKER);
    truncated
}

/// Natural-language instruction for one per-conversation analysis task.
pub fn build_analysis_prompt(user_messages: &str) -> String {
    format!(
        "Analyze these user messages and write 3-5 concise rules for CLAUDE.md:\n\
         {}\n\
         \n\
         Focus on their communication style, technical preferences, and what frustrates them.\n\
         Write as short directives like:\n\
         - Keep responses brief\n\
         - Never add code comments\n\
         - Use existing files instead of creating new ones",
        user_messages
    )
}
