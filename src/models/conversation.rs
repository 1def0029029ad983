use chrono::{DateTime, Utc};

/// Role of a normalized conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    User,
    Assistant,
}

/// A normalized conversation turn.
///
/// Invariant: `content` is never empty. Entries that reconstruct to empty
/// content are dropped during parsing.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
    pub timestamp: Option<DateTime<Utc>>,
}

/// Per-transcript metadata, captured first-write-wins during parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversationMetadata {
    pub working_directory: Option<String>,
}

/// One transcript's worth of messages, attributed to its owning project.
///
/// Invariant: a `Conversation` with zero messages is never retained in the
/// corpus; discovery drops them.
#[derive(Debug, Clone)]
pub struct Conversation {
    /// Name of the project directory the transcript was found under.
    pub project: String,
    /// File name of the transcript within the project directory.
    pub source_file: String,
    pub messages: Vec<Message>,
    pub metadata: ConversationMetadata,
}

impl Conversation {
    /// Short display name for progress output: the last `-`-separated
    /// segment of the encoded project directory name.
    pub fn project_label(&self) -> &str {
        self.project.rsplit('-').next().unwrap_or(&self.project)
    }
}
