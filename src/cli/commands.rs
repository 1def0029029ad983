use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::analysis::{
    AnalysisRunner, CannedEngine, ClaudeCliEngine, DEFAULT_ANALYSIS_TIMEOUT, InsightEngine,
    combine_insights,
};
use crate::discovery::{count_projects, discover_conversations};
use crate::generate::{CONSOLIDATION_TIMEOUT, generate_instructions};
use crate::progress::{ConsoleSink, ProgressSink};
use crate::sampling::{DEFAULT_MAX_CONVERSATIONS, select_sample};
use crate::utils::default_projects_dir;

#[derive(Parser)]
#[command(name = "ccoptimizer")]
#[command(version = "0.1.0")]
#[command(
    about = "Mine Claude Code conversation history for preferences and generate an optimized CLAUDE.md",
    long_about = None
)]
pub struct Cli {
    /// Directory of per-project transcript directories (default: ~/.claude/projects)
    #[arg(long)]
    pub projects_dir: Option<PathBuf>,

    /// Where to write the generated instruction document
    #[arg(long, default_value = "CLAUDE.md")]
    pub output: PathBuf,

    /// Substitute canned analysis output instead of invoking the claude CLI
    #[arg(long)]
    pub dry_run: bool,

    /// Cap on conversations sent to analysis
    #[arg(long, default_value_t = DEFAULT_MAX_CONVERSATIONS)]
    pub max_conversations: usize,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    optimize(&cli, &ConsoleSink)
}

/// Full pipeline: discover -> select -> analyze -> aggregate -> generate ->
/// write the document to the configured output path.
pub fn optimize(cli: &Cli, sink: &dyn ProgressSink) -> Result<()> {
    let projects_dir = match &cli.projects_dir {
        Some(dir) => dir.clone(),
        None => default_projects_dir()?,
    };

    let corpus = discover_conversations(&projects_dir, sink)?;
    sink.report(&format!(
        "Found {} chats from {} projects",
        corpus.len(),
        count_projects(&corpus)
    ));

    let sample = select_sample(corpus, cli.max_conversations);

    let analysis_engine: Box<dyn InsightEngine> = if cli.dry_run {
        Box::new(CannedEngine::new())
    } else {
        Box::new(ClaudeCliEngine::new(DEFAULT_ANALYSIS_TIMEOUT))
    };
    let runner = AnalysisRunner::new(analysis_engine);

    let results = runner.run_all(&sample, sink);
    let insights = combine_insights(&results);

    let consolidation_engine: Box<dyn InsightEngine> = if cli.dry_run {
        Box::new(CannedEngine::new())
    } else {
        Box::new(ClaudeCliEngine::new(CONSOLIDATION_TIMEOUT))
    };
    let document = generate_instructions(&insights, consolidation_engine.as_ref());

    fs::write(&cli.output, document)
        .context(format!("Failed to write {}", cli.output.display()))?;
    sink.report(&format!("Wrote {}", cli.output.display()));

    Ok(())
}
