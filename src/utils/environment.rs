use std::path::PathBuf;

use anyhow::{Context, Result};

/// Default location of Claude Code's per-project transcript directories
/// (~/.claude/projects).
pub fn default_projects_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".claude").join("projects"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_projects_dir_layout() {
        let dir = default_projects_dir().expect("home directory should resolve in tests");
        assert!(dir.ends_with(".claude/projects"));
    }
}
