use std::io::{Read, Write};
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

/// Wall-clock limit for one per-conversation analysis task.
pub const DEFAULT_ANALYSIS_TIMEOUT: Duration = Duration::from_secs(15);

/// Fixed insight returned in dry-run mode instead of invoking the engine.
pub const DRY_RUN_INSIGHT: &str =
    "- Prefers brief responses\n- No code comments\n- Values simplicity";

/// Poll interval while waiting on an outstanding task.
const WAIT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// External analysis capability: given a text instruction, return a text
/// response, or fail.
///
/// Outcomes: `None` means the engine could not be launched at all;
/// `Some(String::new())` means it ran but produced nothing usable (timeout
/// or empty output). Callers treat both as "no insight", never as errors.
pub trait InsightEngine {
    fn analyze(&self, prompt: &str) -> Option<String>;
}

/// Invokes the `claude` CLI as a one-shot subprocess: write the prompt to
/// stdin, close it, read stdout until exit or the deadline elapses.
pub struct ClaudeCliEngine {
    program: String,
    args: Vec<String>,
    timeout: Duration,
}

impl ClaudeCliEngine {
    pub fn new(timeout: Duration) -> Self {
        Self::with_command("claude", &["-p"], timeout)
    }

    /// Override the spawned command. Used by tests to substitute stand-in
    /// processes for the real CLI.
    pub fn with_command(program: &str, args: &[&str], timeout: Duration) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|s| s.to_string()).collect(),
            timeout,
        }
    }
}

impl InsightEngine for ClaudeCliEngine {
    fn analyze(&self, prompt: &str) -> Option<String> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .ok()?;

        // Drain stdout on its own thread so the child can never stall on a
        // full pipe while we poll for exit.
        let mut reader = child.stdout.take().map(|mut stdout| {
            thread::spawn(move || {
                let mut output = String::new();
                let _ = stdout.read_to_string(&mut output);
                output
            })
        });

        // Feed the prompt on its own thread as well: a child that never
        // drains stdin must not stall the deadline loop once the prompt
        // outgrows the pipe buffer. Dropping stdin closes the pipe,
        // signalling end-of-input.
        let mut writer = child.stdin.take().map(|mut stdin| {
            let prompt = prompt.to_string();
            thread::spawn(move || {
                let _ = stdin.write_all(prompt.as_bytes());
            })
        });

        let deadline = Instant::now() + self.timeout;
        loop {
            match child.try_wait() {
                Ok(Some(_status)) => {
                    // Exit code is irrelevant; whatever was emitted is the
                    // result, possibly nothing. The writer ends on its own
                    // once the child exits and the pipe breaks.
                    if let Some(handle) = writer.take() {
                        let _ = handle.join();
                    }
                    let output =
                        reader.take().and_then(|handle| handle.join().ok()).unwrap_or_default();
                    return Some(output);
                }
                Ok(None) => {}
                Err(_) => {}
            }
            if Instant::now() >= deadline {
                let _ = child.kill();
                let _ = child.wait();
                // Late output is ignored; both pipe threads end once the
                // killed child's pipes close.
                if let Some(handle) = writer.take() {
                    let _ = handle.join();
                }
                if let Some(handle) = reader.take() {
                    let _ = handle.join();
                }
                return Some(String::new());
            }
            thread::sleep(WAIT_POLL_INTERVAL);
        }
    }
}

/// Dry-run engine: returns a fixed canned insight without spawning anything.
pub struct CannedEngine {
    insight: String,
}

impl CannedEngine {
    pub fn new() -> Self {
        Self { insight: DRY_RUN_INSIGHT.to_string() }
    }
}

impl Default for CannedEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightEngine for CannedEngine {
    fn analyze(&self, _prompt: &str) -> Option<String> {
        Some(self.insight.clone())
    }
}
