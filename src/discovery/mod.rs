//! Corpus discovery across the Claude projects directory.
//!
//! # Error Handling Strategy
//!
//! Graceful degradation on a partially-populated or partially-corrupt tree:
//! unreadable project directories and transcripts that fail to parse are
//! skipped, and transcripts yielding zero messages are excluded from the
//! corpus. Only an unreadable root directory propagates as an error.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::Conversation;
use crate::parsers::parse_transcript_file;
use crate::progress::ProgressSink;

const TRANSCRIPT_EXTENSION: &str = "jsonl";

/// Discover all conversations under `projects_dir`.
///
/// Each immediate subdirectory is treated as one project; `*.jsonl` files
/// within it are its transcripts. Directories and files are visited in name
/// order so the corpus is deterministic for a fixed filesystem state.
///
/// # Errors
///
/// Returns an error only if `projects_dir` itself cannot be listed.
pub fn discover_conversations(
    projects_dir: &Path,
    sink: &dyn ProgressSink,
) -> Result<Vec<Conversation>> {
    let entries = fs::read_dir(projects_dir)
        .context(format!("Failed to read projects directory: {}", projects_dir.display()))?;

    let mut project_dirs: Vec<_> =
        entries.flatten().map(|e| e.path()).filter(|p| p.is_dir()).collect();
    project_dirs.sort();

    let mut corpus = Vec::new();

    for project_dir in project_dirs {
        let Some(project) = project_dir.file_name().map(|n| n.to_string_lossy().to_string())
        else {
            continue;
        };

        let files = match fs::read_dir(&project_dir) {
            Ok(files) => files,
            Err(e) => {
                eprintln!(
                    "Warning: Failed to read project directory {}: {}",
                    project_dir.display(),
                    e
                );
                continue;
            }
        };

        let mut transcript_paths: Vec<_> = files
            .flatten()
            .map(|e| e.path())
            .filter(|p| p.extension().is_some_and(|ext| ext == TRANSCRIPT_EXTENSION))
            .collect();
        transcript_paths.sort();

        for path in transcript_paths {
            let Some(source_file) = path.file_name().map(|n| n.to_string_lossy().to_string())
            else {
                continue;
            };
            sink.report(&format!("Reading {}/{}...", project, source_file));

            // A transcript that cannot be parsed contributes zero messages.
            let transcript = match parse_transcript_file(&path) {
                Ok(transcript) => transcript,
                Err(e) => {
                    eprintln!("Warning: Skipping {}: {}", path.display(), e);
                    continue;
                }
            };

            if transcript.messages.is_empty() {
                continue;
            }

            corpus.push(Conversation {
                project: project.clone(),
                source_file,
                messages: transcript.messages,
                metadata: transcript.metadata,
            });
        }
    }

    Ok(corpus)
}

/// Number of distinct projects represented in a corpus.
pub fn count_projects(corpus: &[Conversation]) -> usize {
    let mut projects: Vec<&str> = corpus.iter().map(|c| c.project.as_str()).collect();
    projects.sort_unstable();
    projects.dedup();
    projects.len()
}
