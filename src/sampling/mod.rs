//! Bounds the corpus to a manageable analysis set.
//!
//! Selection is a deterministic prefix truncation in corpus order, not a
//! relevance- or recency-based sample. Known limitation: a most-recent-N or
//! stratified-by-project policy would likely pick a more representative set,
//! but prefix order is kept for reproducibility.

use crate::models::Conversation;

/// Default cap on conversations sent to analysis (cost/latency bound).
pub const DEFAULT_MAX_CONVERSATIONS: usize = 20;

/// Take the first `min(corpus.len(), cap)` conversations in corpus order.
pub fn select_sample(mut corpus: Vec<Conversation>, cap: usize) -> Vec<Conversation> {
    corpus.truncate(cap);
    corpus
}
