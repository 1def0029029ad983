use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

/// One decoded line from a transcript JSONL file.
///
/// Transcript files interleave conversation turns with bookkeeping entries
/// (`summary`, `system`, `file-history-snapshot`, ...). Anything that is not
/// a user or assistant turn decodes to [`TranscriptRecord::Unrecognized`] and
/// is safely ignorable by the parser.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TranscriptRecord {
    User {
        #[serde(default)]
        message: Option<UserPayload>,
        #[serde(
            default,
            deserialize_with = "crate::parsers::deserializers::deserialize_opt_timestamp"
        )]
        timestamp: Option<DateTime<Utc>>,
        #[serde(default)]
        cwd: Option<String>,
    },
    Assistant {
        #[serde(default)]
        message: Option<AssistantPayload>,
        #[serde(
            default,
            deserialize_with = "crate::parsers::deserializers::deserialize_opt_timestamp"
        )]
        timestamp: Option<DateTime<Utc>>,
        #[serde(default)]
        cwd: Option<String>,
    },
    #[serde(other)]
    Unrecognized,
}

impl TranscriptRecord {
    /// Working directory carried by this record, if any.
    pub fn working_directory(&self) -> Option<&str> {
        match self {
            TranscriptRecord::User { cwd, .. } | TranscriptRecord::Assistant { cwd, .. } => {
                cwd.as_deref()
            }
            TranscriptRecord::Unrecognized => None,
        }
    }
}

/// Payload of a user turn. Content may be a plain string or any other JSON
/// shape (content-block arrays, tool results); the parser accepts either.
#[derive(Debug, Clone, Deserialize)]
pub struct UserPayload {
    #[serde(default)]
    pub content: Option<Value>,
}

/// Payload of an assistant turn: an ordered sequence of content blocks.
#[derive(Debug, Clone, Deserialize)]
pub struct AssistantPayload {
    #[serde(default)]
    pub content: Vec<AssistantContentBlock>,
}

/// One content block within an assistant turn.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AssistantContentBlock {
    Text { text: String },
    ToolUse { name: String },
    /// Thinking blocks and any future block kinds.
    #[serde(other)]
    Other,
}
