//! Final document generation from combined insights.
//!
//! One more engine invocation consolidates the per-conversation insights
//! into a structured instruction document. When the engine fails, times out,
//! or returns content without the expected heading, a deterministic fallback
//! document embedding the raw insights is produced instead, so generation
//! never fails outright.

use std::time::Duration;

use chrono::Local;

use crate::analysis::InsightEngine;

/// Wall-clock limit for the consolidation task. Slightly longer than the
/// per-conversation limit since the input is larger.
pub const CONSOLIDATION_TIMEOUT: Duration = Duration::from_secs(20);

/// Heading the consolidated document is expected to open with.
const DOCUMENT_HEADING: &str = "# Optimized Claude Instructions";

/// Consolidate combined insights into the final instruction document.
pub fn generate_instructions(insights: &str, engine: &dyn InsightEngine) -> String {
    let prompt = build_consolidation_prompt(insights);

    if let Some(content) = engine.analyze(&prompt)
        && content.contains(DOCUMENT_HEADING)
    {
        return format!("{}{}", content, footer());
    }

    fallback_document(insights)
}

fn fallback_document(insights: &str) -> String {
    format!("{}\n\n{}{}", DOCUMENT_HEADING, insights, footer())
}

fn footer() -> String {
    format!("\n\n---\n\n*Generated on {} by ccoptimizer*", Local::now().format("%Y-%m-%d"))
}

fn build_consolidation_prompt(insights: &str) -> String {
    format!(
        "<task>\n\
         Consolidate these user preferences from multiple conversations into a clean CLAUDE.md file.\n\
         The goal is to create clear, actionable instructions that will guide future Claude interactions.\n\
         Open the document with the exact heading \"{}\".\n\
         </task>\n\
         \n\
         <user_preferences>\n\
         {}\n\
         </user_preferences>\n\
         \n\
         <instructions>\n\
         Create a well-structured CLAUDE.md with:\n\
         - Clear section headings (Communication Style, Code Preferences, Task Execution, etc.)\n\
         - Short, declarative bullet points\n\
         - No redundancy between rules\n\
         - Focus on actionable directives that directly impact Claude's behavior\n\
         Output ONLY the final CLAUDE.md content, no meta-commentary.\n\
         </instructions>",
        DOCUMENT_HEADING, insights
    )
}
