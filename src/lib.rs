//! ccoptimizer - Generate an optimized CLAUDE.md from conversation history
//!
//! This library mines Claude Code's local conversation transcripts (one
//! JSONL file per session under `~/.claude/projects/`) for durable
//! behavioral preferences and consolidates them into a single instruction
//! document. It supports:
//!
//! - Parsing transcript JSONL files into normalized conversations, tolerant
//!   of malformed and partial lines
//! - Discovering the full corpus across per-project directories
//! - Bounding the corpus to a deterministic analysis sample
//! - Running one timeout-bounded external analysis task per conversation
//! - Aggregating the per-conversation insights and generating the final
//!   document, with a deterministic fallback
//!
//! # Example
//!
//! ```no_run
//! use std::path::PathBuf;
//!
//! use ccoptimizer::analysis::{AnalysisRunner, CannedEngine, combine_insights};
//! use ccoptimizer::discovery::discover_conversations;
//! use ccoptimizer::progress::NullSink;
//! use ccoptimizer::sampling::{DEFAULT_MAX_CONVERSATIONS, select_sample};
//!
//! let projects_dir = PathBuf::from("/Users/alice/.claude/projects");
//! let corpus = discover_conversations(&projects_dir, &NullSink)?;
//! let sample = select_sample(corpus, DEFAULT_MAX_CONVERSATIONS);
//! let runner = AnalysisRunner::new(Box::new(CannedEngine::new()));
//! let insights = combine_insights(&runner.run_all(&sample, &NullSink));
//! println!("{}", insights);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod analysis;
pub mod cli;
pub mod discovery;
pub mod generate;
pub mod models;
pub mod parsers;
pub mod progress;
pub mod sampling;
pub mod utils;

// Re-export commonly used types
pub use analysis::{AnalysisRunner, CannedEngine, ClaudeCliEngine, InsightEngine, combine_insights};
pub use discovery::discover_conversations;
pub use models::{Conversation, Message, MessageRole};
pub use parsers::parse_transcript_file;
pub use sampling::select_sample;
