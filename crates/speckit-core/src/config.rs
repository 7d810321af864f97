use crate::paths::DEFAULT_PROGRAM;
use std::path::{Path, PathBuf};

/// Server-wide settings, fixed at startup and shared read-only by every tool call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base directory for project creation and for every `specify` invocation.
    pub working_dir: PathBuf,
    /// Executable to invoke. Always `specify` unless overridden.
    pub program: String,
}

impl Config {
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
            program: DEFAULT_PROGRAM.to_string(),
        }
    }

    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Build from optional flag/env values. Unset or empty values fall back to
    /// the current directory and the default program.
    pub fn resolve(working_dir: Option<&Path>, program: Option<&str>) -> Self {
        let working_dir = working_dir
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        let config = Self::new(working_dir);
        match program.map(str::trim).filter(|p| !p.is_empty()) {
            Some(p) => config.with_program(p),
            None => config,
        }
    }

    /// Whether the configured program can be found on PATH.
    pub fn program_available(&self) -> bool {
        which::which(&self.program).is_ok()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(".")
    }
}
