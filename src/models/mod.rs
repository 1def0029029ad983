//! Data models for Claude Code conversation transcripts.
//!
//! This module defines the data structures used throughout the application:
//!
//! - [`TranscriptRecord`] - One decoded line from a transcript JSONL file
//! - [`Message`] - A normalized user or assistant turn
//! - [`Conversation`] - An ordered sequence of messages from one transcript
//!
//! Records use serde for JSON deserialization with custom deserializers
//! for lenient timestamps in the `parsers::deserializers` module.

pub mod conversation;
pub mod record;

pub use conversation::{Conversation, ConversationMetadata, Message, MessageRole};
pub use record::{AssistantContentBlock, TranscriptRecord};
