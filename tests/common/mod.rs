//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::TempDir;

/// Builder for creating test projects directory structures
pub struct ProjectsDirBuilder {
    temp_dir: TempDir,
}

impl ProjectsDirBuilder {
    /// Create a new builder with an empty projects directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the projects directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add a project directory with the given transcripts
    pub fn with_project(self, name: &str, transcripts: &[TranscriptBuilder]) -> Self {
        let project_dir = self.temp_dir.path().join(name);
        fs::create_dir(&project_dir).expect("Failed to create project dir");

        for transcript in transcripts {
            transcript.create_in(&project_dir);
        }

        self
    }

    /// Add an empty project directory
    pub fn with_empty_project(self, name: &str) -> Self {
        self.with_project(name, &[])
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

/// Builder for one transcript JSONL file
pub struct TranscriptBuilder {
    file_name: String,
    lines: Vec<String>,
}

impl TranscriptBuilder {
    pub fn new(file_name: &str) -> Self {
        Self { file_name: file_name.to_string(), lines: Vec::new() }
    }

    /// Append a user record with string content
    pub fn user(mut self, text: &str) -> Self {
        self.lines.push(format!(
            r#"{{"type":"user","message":{{"role":"user","content":{}}},"timestamp":{}}}"#,
            serde_json::to_string(text).unwrap(),
            1000 + self.lines.len()
        ));
        self
    }

    /// Append an assistant record with a single text block
    pub fn assistant(mut self, text: &str) -> Self {
        self.lines.push(format!(
            r#"{{"type":"assistant","message":{{"role":"assistant","content":[{{"type":"text","text":{}}}]}},"timestamp":{}}}"#,
            serde_json::to_string(text).unwrap(),
            1000 + self.lines.len()
        ));
        self
    }

    /// Append an assistant record that only invokes a tool
    pub fn assistant_tool_use(mut self, tool: &str) -> Self {
        self.lines.push(format!(
            r#"{{"type":"assistant","message":{{"role":"assistant","content":[{{"type":"tool_use","id":"t1","name":{},"input":{{}}}}]}}}}"#,
            serde_json::to_string(tool).unwrap()
        ));
        self
    }

    /// Append a raw line verbatim (for malformed or bookkeeping records)
    pub fn raw_line(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    /// Append a user record carrying a working directory
    pub fn user_with_cwd(mut self, text: &str, cwd: &str) -> Self {
        self.lines.push(format!(
            r#"{{"type":"user","message":{{"role":"user","content":{}}},"cwd":{}}}"#,
            serde_json::to_string(text).unwrap(),
            serde_json::to_string(cwd).unwrap()
        ));
        self
    }

    /// Write the transcript into the given project directory
    pub fn create_in(&self, project_dir: &Path) {
        let path = project_dir.join(&self.file_name);
        let mut file = fs::File::create(path).expect("Failed to create transcript file");
        file.write_all(self.lines.join("\n").as_bytes()).expect("Failed to write transcript");
    }
}
