use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

use crate::models::{
    AssistantContentBlock, ConversationMetadata, Message, MessageRole, TranscriptRecord,
};

/// Parsed body of one transcript file: ordered messages plus metadata.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    pub messages: Vec<Message>,
    pub metadata: ConversationMetadata,
}

/// Parse a transcript JSONL file into normalized messages.
///
/// Each line is decoded independently; malformed lines and unrecognized
/// record kinds (summaries, system events, snapshots) are skipped without
/// aborting the file. User turns keep string content as-is and serialize any
/// other JSON shape to compact text; assistant turns concatenate text blocks
/// verbatim with tool invocations rendered as `[Used tool: <name>]`. Turns
/// that reconstruct to empty content are dropped. The first `cwd` seen is
/// captured into metadata and never overwritten.
///
/// # Errors
///
/// Returns an error only if the file cannot be opened or read; per-line
/// failures never propagate.
pub fn parse_transcript_file(path: &Path) -> Result<Transcript> {
    let file = File::open(path).context(format!("Failed to open {}", path.display()))?;
    let reader = BufReader::new(file);

    let mut transcript = Transcript::default();

    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            // Invalid UTF-8 is just another malformed line.
            Err(e) if e.kind() == ErrorKind::InvalidData => continue,
            Err(e) => {
                return Err(e).context(format!("Failed to read line from {}", path.display()));
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let Ok(record) = serde_json::from_str::<TranscriptRecord>(&line) else {
            continue;
        };

        if transcript.metadata.working_directory.is_none()
            && let Some(cwd) = record.working_directory()
        {
            transcript.metadata.working_directory = Some(cwd.to_string());
        }

        match record {
            TranscriptRecord::User { message, timestamp, .. } => {
                let Some(content) = message.and_then(|m| m.content) else {
                    continue;
                };
                if let Some(text) = user_content_text(content) {
                    transcript.messages.push(Message {
                        role: MessageRole::User,
                        content: text,
                        timestamp,
                    });
                }
            }
            TranscriptRecord::Assistant { message, timestamp, .. } => {
                let Some(payload) = message else {
                    continue;
                };
                let content = assistant_content_text(&payload.content);
                if !content.is_empty() {
                    transcript.messages.push(Message {
                        role: MessageRole::Assistant,
                        content,
                        timestamp,
                    });
                }
            }
            TranscriptRecord::Unrecognized => {}
        }
    }

    Ok(transcript)
}

/// Normalize user content to text. Strings pass through as-is; any other
/// JSON shape (content-block arrays, tool results) is kept as its compact
/// serialized form. Empty strings and nulls yield no message.
fn user_content_text(content: Value) -> Option<String> {
    match content {
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

/// Reconstruct assistant content by concatenating text blocks and tool-use
/// markers in block order.
fn assistant_content_text(blocks: &[AssistantContentBlock]) -> String {
    let mut content = String::new();
    for block in blocks {
        match block {
            AssistantContentBlock::Text { text } => content.push_str(text),
            AssistantContentBlock::ToolUse { name } => {
                content.push_str(&format!("[Used tool: {}]", name));
            }
            AssistantContentBlock::Other => {}
        }
    }
    content
}
