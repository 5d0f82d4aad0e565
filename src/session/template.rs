//! The user-editable session template.
//!
//! Each workspace keeps its template at `copilot-session_log/_TEMPLATE.md`.
//! The first save writes the default template there; after that the file
//! belongs to the user and is read verbatim.

use std::path::{Path, PathBuf};

use super::SaveError;
use crate::config::TEMPLATE_FILE_NAME;

/// Template written on first use.
pub const DEFAULT_TEMPLATE: &str = "\
# Copilot Session {{DATE}}

## Time

{{TIME_COLON}}

- Workspace: `{{WORKSPACE_ROOT}}`
- Project: {{PROJECT_NAME}}
- OS: {{OS}}
- Model: {{MODEL}}

## Transcript

{{TRANSCRIPT}}
";

/// Loads and creates templates inside a log directory.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    log_root: PathBuf,
}

impl TemplateStore {
    pub fn new(log_root: impl Into<PathBuf>) -> Self {
        Self {
            log_root: log_root.into(),
        }
    }

    pub fn template_path(&self) -> PathBuf {
        self.log_root.join(TEMPLATE_FILE_NAME)
    }

    /// Returns the template text, writing the default template first if
    /// none exists yet.
    pub fn load(&self) -> Result<String, SaveError> {
        let path = self.template_path();

        if path.is_file() {
            return std::fs::read_to_string(&path).map_err(|e| SaveError::io(&path, e));
        }

        std::fs::create_dir_all(&self.log_root).map_err(|e| SaveError::io(&self.log_root, e))?;
        std::fs::write(&path, DEFAULT_TEMPLATE).map_err(|e| SaveError::io(&path, e))?;
        tracing::info!(path = %path.display(), "Created default session template");

        Ok(DEFAULT_TEMPLATE.to_string())
    }
}

/// Convenience wrapper for [`TemplateStore::load`].
pub fn load(log_root: &Path) -> Result<String, SaveError> {
    TemplateStore::new(log_root).load()
}
