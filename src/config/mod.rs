//! Startup configuration.
//!
//! The configuration is built once from command-line arguments and passed
//! by value into the MCP server and the CLI commands. Nothing here is
//! global: two servers built from different configs never share state.

use std::path::{Path, PathBuf};

/// Directory created under the workspace root to hold saved sessions.
pub const LOG_DIR_NAME: &str = "copilot-session_log";

/// File name of the user-editable template inside the log directory.
pub const TEMPLATE_FILE_NAME: &str = "_TEMPLATE.md";

/// Value bound to `{{MODEL}}` unless overridden with `--model`.
pub const DEFAULT_MODEL: &str = "GitHub Copilot";

/// Name of the single tool advertised over MCP.
pub const TOOL_NAME: &str = "save-copilot-session";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Startup-time workspace root override (`--workspaceRoot`).
    pub workspace_root: Option<PathBuf>,

    /// Label rendered into `{{MODEL}}`.
    pub model: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workspace_root: None,
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl Config {
    /// Creates a config with the given startup workspace root override.
    pub fn with_workspace_root(workspace_root: impl Into<PathBuf>) -> Self {
        Self {
            workspace_root: Some(workspace_root.into()),
            ..Self::default()
        }
    }

    /// Resolves the workspace root for a single save.
    ///
    /// Precedence: a non-blank `explicit` argument, then the startup
    /// override, then the current working directory. Relative paths are
    /// made absolute against the current working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the current working directory cannot be read.
    pub fn resolve_workspace_root(&self, explicit: Option<&str>) -> std::io::Result<PathBuf> {
        let chosen = match explicit.map(str::trim).filter(|s| !s.is_empty()) {
            Some(root) => PathBuf::from(root),
            None => match &self.workspace_root {
                Some(root) => root.clone(),
                None => std::env::current_dir()?,
            },
        };

        std::path::absolute(chosen)
    }
}

/// Returns the log directory for a workspace root.
pub fn log_root(workspace_root: &Path) -> PathBuf {
    workspace_root.join(LOG_DIR_NAME)
}
