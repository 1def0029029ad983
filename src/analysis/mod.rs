//! Bounded analysis of sampled conversations.
//!
//! Each sampled conversation is analyzed by one isolated external task,
//! strictly sequentially in selection order. The [`InsightEngine`] trait is
//! the invocation boundary: the real engine spawns the `claude` CLI with a
//! hard timeout, and a canned engine substitutes a fixed insight for dry
//! runs. No per-conversation failure (timeout, launch failure, empty output)
//! ever aborts the batch; each converts to an absent result at its origin.

pub mod aggregate;
pub mod engine;
pub mod prompt;
pub mod runner;

pub use aggregate::combine_insights;
pub use engine::{
    CannedEngine, ClaudeCliEngine, DEFAULT_ANALYSIS_TIMEOUT, DRY_RUN_INSIGHT, InsightEngine,
};
pub use runner::AnalysisRunner;
