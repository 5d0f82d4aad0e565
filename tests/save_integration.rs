//! End-to-end tests for the save pipeline.
//!
//! These drive the library the way the MCP tool does, against temporary
//! workspaces, and check the files left on disk.

use chrono::{DateTime, Local};
use copilot_session_log::config::Config;
use copilot_session_log::mcp::SessionLogServer;
use copilot_session_log::session::{
    render, save_session, Placeholder, Replacements, SaveError, SaveRequest, DEFAULT_TEMPLATE,
};
use std::path::Path;
use tempfile::tempdir;

// =============================================================================
// Test Helpers
// =============================================================================

fn save_request(transcript: &str, saved_at: Option<&str>) -> SaveRequest {
    SaveRequest {
        transcript_markdown: Some(transcript.to_string()),
        saved_at: saved_at.map(String::from),
        workspace_root: None,
    }
}

/// Lists every file under `root`, relative to it, sorted.
fn files_under(root: &Path) -> Vec<String> {
    fn walk(dir: &Path, root: &Path, out: &mut Vec<String>) {
        let Ok(entries) = std::fs::read_dir(dir) else {
            return;
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                walk(&path, root, out);
            } else if let Ok(rel) = path.strip_prefix(root) {
                out.push(rel.to_string_lossy().replace('\\', "/"));
            }
        }
    }

    let mut out = Vec::new();
    walk(root, root, &mut out);
    out.sort();
    out
}

// =============================================================================
// Save Flow Tests
// =============================================================================

#[test]
fn test_first_save_creates_template_and_session() {
    let dir = tempdir().expect("Failed to create temp directory");
    let config = Config::with_workspace_root(dir.path());
    let saved_at = "2024-03-05T09:07:02.004Z";

    let path = save_session(&config, &save_request("hello", Some(saved_at))).expect("Should save");

    // The folder and file names follow the local wall-clock time of the save
    let local = DateTime::parse_from_rfc3339(saved_at)
        .expect("Valid fixture")
        .with_timezone(&Local);
    let date_folder = local.format("%d-%m-%Y").to_string();
    let file_name = format!("session_{}.md", local.format("%H-%M-%S-%3f"));

    let expected = dir
        .path()
        .join("copilot-session_log")
        .join(&date_folder)
        .join(&file_name);
    assert_eq!(path, expected);

    assert_eq!(
        files_under(dir.path()),
        vec![
            format!("copilot-session_log/{date_folder}/{file_name}"),
            "copilot-session_log/_TEMPLATE.md".to_string(),
        ]
    );

    let template = std::fs::read_to_string(dir.path().join("copilot-session_log/_TEMPLATE.md"))
        .expect("Template written");
    assert_eq!(template, DEFAULT_TEMPLATE);

    let content = std::fs::read_to_string(&path).expect("Session written");
    assert!(content.contains(&format!("# Copilot Session {date_folder}")));
    assert!(content.contains(&local.format("%H:%M:%S").to_string()));
    assert!(content.contains("hello"));
    assert!(!content.contains(&Placeholder::Transcript.token()));
}

#[test]
fn test_zero_padded_names_for_local_timestamp() {
    let dir = tempdir().expect("Failed to create temp directory");
    let config = Config::with_workspace_root(dir.path());

    let path = save_session(
        &config,
        &save_request("hello", Some("2024-03-05T09:07:02.004")),
    )
    .expect("Should save");

    assert!(path.ends_with("copilot-session_log/05-03-2024/session_09-07-02-004.md"));
}

#[test]
fn test_saved_document_matches_rendered_template() {
    let dir = tempdir().expect("Failed to create temp directory");
    let root = dir.path().join("demo-project");
    std::fs::create_dir_all(&root).expect("Failed to create workspace");
    let config = Config::with_workspace_root(&root);

    let path = save_session(
        &config,
        &save_request("line one\nline two", Some("2024-03-05T09:07:02.004")),
    )
    .expect("Should save");

    let replacements: Replacements = [
        (Placeholder::Date, "05-03-2024"),
        (Placeholder::TimeColon, "09:07:02"),
        (Placeholder::TimeDash, "09-07-02"),
        (Placeholder::TimeDashMs, "09-07-02-004"),
        (Placeholder::WorkspaceRoot, &*root.display().to_string()),
        (Placeholder::ProjectName, "demo-project"),
        (Placeholder::Os, std::env::consts::OS),
        (Placeholder::Model, "GitHub Copilot"),
        (Placeholder::Transcript, "line one\nline two"),
    ]
    .into_iter()
    .map(|(p, v)| (p, v.to_string()))
    .collect();

    let content = std::fs::read_to_string(path).expect("Session written");
    assert_eq!(content, render(DEFAULT_TEMPLATE, &replacements));
}

#[test]
fn test_later_saves_reuse_edited_template() {
    let dir = tempdir().expect("Failed to create temp directory");
    let config = Config::with_workspace_root(dir.path());

    save_session(&config, &save_request("first", Some("2024-03-05T09:07:02.004")))
        .expect("First save");
    std::fs::write(
        dir.path().join("copilot-session_log/_TEMPLATE.md"),
        "## {{DATE}} {{TIME_DASH}}\n{{TRANSCRIPT}}\n",
    )
    .expect("Failed to edit template");

    let path = save_session(&config, &save_request("second", Some("2024-03-06T10:00:00.000")))
        .expect("Second save");

    let content = std::fs::read_to_string(path).expect("Session written");
    assert_eq!(content, "## 06-03-2024 10-00-00\nsecond\n");
}

#[test]
fn test_transcript_tokens_are_kept_literally() {
    let dir = tempdir().expect("Failed to create temp directory");
    let config = Config::with_workspace_root(dir.path());

    let path = save_session(
        &config,
        &save_request(
            "Please explain {{DATE}} and {{MODEL}}",
            Some("2024-03-05T09:07:02"),
        ),
    )
    .expect("Should save");

    let content = std::fs::read_to_string(path).expect("Session written");
    assert!(content.contains("Please explain {{DATE}} and {{MODEL}}"));
}

#[test]
fn test_rejected_saves_leave_workspace_untouched() {
    let dir = tempdir().expect("Failed to create temp directory");
    let config = Config::with_workspace_root(dir.path());

    let err = save_session(&config, &save_request("   ", None)).expect_err("Blank transcript");
    assert!(matches!(err, SaveError::MissingTranscript));

    let err = save_session(&config, &save_request("hello", Some("not-a-date")))
        .expect_err("Bad timestamp");
    assert!(err.is_usage());
    assert!(err.to_string().contains("ISO-8601"));

    assert!(files_under(dir.path()).is_empty());
}

#[test]
fn test_server_carries_startup_config() {
    let config = Config::with_workspace_root("/tmp/ws");
    let server = SessionLogServer::new(config.clone());
    assert_eq!(server.config(), &config);
}
