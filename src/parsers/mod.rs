//! JSONL parser for Claude Code transcript files
//!
//! # Error Handling Strategy
//!
//! This module follows a **graceful degradation** approach suitable for CLI tools:
//!
//! - **Individual line failures**: Malformed JSON lines and unrecognized record
//!   kinds are skipped, allowing parsing to continue. A single bad line never
//!   aborts a transcript.
//!
//! - **File-level failures**: An unreadable file returns an error; the caller
//!   (discovery) treats a failed parse as "zero messages" for that file and
//!   moves on to the next transcript.
//!
//! - **Error propagation**: Uses `anyhow::Result` with context. Since this is
//!   a binary/CLI tool (not a library), errors are boxed and consumers don't
//!   match on error types.

pub mod deserializers;
pub mod transcript;

pub use transcript::{Transcript, parse_transcript_file};
