//! The save pipeline.

use std::path::{Path, PathBuf};

use super::path::SessionPath;
use super::render::{render, Placeholder, Replacements};
use super::template;
use super::timestamp::resolve_saved_at;
use super::SaveError;
use crate::config::{log_root, Config};

/// Caller-supplied arguments for one save.
#[derive(Debug, Clone, Default)]
pub struct SaveRequest {
    pub transcript_markdown: Option<String>,
    pub saved_at: Option<String>,
    pub workspace_root: Option<String>,
}

/// Saves a transcript and returns the path written.
///
/// Input is validated before anything touches the disk, so a rejected call
/// leaves no directories or files behind.
///
/// # Errors
///
/// Returns a usage error for a missing transcript or an unparseable
/// `savedAt`, and an environment error if the workspace cannot be written.
pub fn save_session(config: &Config, request: &SaveRequest) -> Result<PathBuf, SaveError> {
    let workspace_root = config
        .resolve_workspace_root(request.workspace_root.as_deref())
        .map_err(SaveError::WorkingDirectory)?;

    let saved_at = resolve_saved_at(request.saved_at.as_deref())?;

    let transcript = request
        .transcript_markdown
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(SaveError::MissingTranscript)?;

    let template_text = template::load(&log_root(&workspace_root))?;
    if !template_text.contains(&Placeholder::Transcript.token()) {
        tracing::warn!(
            workspace = %workspace_root.display(),
            "Session template has no {{{{TRANSCRIPT}}}} placeholder; the transcript will not be saved"
        );
    }

    let location = SessionPath::allocate(&workspace_root, &saved_at)?;
    let replacements = build_replacements(config, &workspace_root, &location, transcript);
    let document = render(&template_text, &replacements);

    std::fs::create_dir_all(&location.dir).map_err(|e| SaveError::io(&location.dir, e))?;
    std::fs::write(&location.path, &document).map_err(|e| SaveError::io(&location.path, e))?;

    tracing::info!(
        path = %location.path.display(),
        bytes = document.len(),
        "Saved session transcript"
    );

    Ok(location.path)
}

fn build_replacements(
    config: &Config,
    workspace_root: &Path,
    location: &SessionPath,
    transcript: &str,
) -> Replacements {
    let stamp = &location.stamp;
    let project_name = workspace_root
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| workspace_root.display().to_string());

    Replacements::from([
        (Placeholder::Date, stamp.date_folder.clone()),
        (Placeholder::TimeColon, stamp.time_colon.clone()),
        (Placeholder::TimeDash, stamp.time_dash.clone()),
        (Placeholder::TimeDashMs, stamp.time_dash_ms.clone()),
        (Placeholder::WorkspaceRoot, workspace_root.display().to_string()),
        (Placeholder::ProjectName, project_name),
        (Placeholder::Os, std::env::consts::OS.to_string()),
        (Placeholder::Model, config.model.clone()),
        (Placeholder::Transcript, transcript.to_string()),
    ])
}
