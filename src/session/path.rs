//! Output locations for saved sessions.

use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};

use super::SaveError;
use crate::config::log_root;

/// Date and time strings derived from a save timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionStamp {
    /// `DD-MM-YYYY`, also used as the folder name.
    pub date_folder: String,
    /// `HH:MM:SS` for display inside the document.
    pub time_colon: String,
    /// `HH-MM-SS`.
    pub time_dash: String,
    /// `HH-MM-SS-mmm`, used in the file name.
    pub time_dash_ms: String,
}

impl SessionStamp {
    pub fn from_datetime(timestamp: &NaiveDateTime) -> Self {
        Self {
            date_folder: timestamp.format("%d-%m-%Y").to_string(),
            time_colon: timestamp.format("%H:%M:%S").to_string(),
            time_dash: timestamp.format("%H-%M-%S").to_string(),
            time_dash_ms: timestamp.format("%H-%M-%S-%3f").to_string(),
        }
    }
}

/// Where a session will be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionPath {
    /// `<workspace>/copilot-session_log/<date_folder>`.
    pub dir: PathBuf,
    /// `<dir>/session_<time_dash_ms>.md`.
    pub path: PathBuf,
    pub stamp: SessionStamp,
}

impl SessionPath {
    /// Computes the output location without touching the filesystem.
    ///
    /// Two saves in the same millisecond get the same path; the later one
    /// overwrites the earlier.
    pub fn for_timestamp(workspace_root: &Path, timestamp: &NaiveDateTime) -> Self {
        let stamp = SessionStamp::from_datetime(timestamp);
        let dir = log_root(workspace_root).join(&stamp.date_folder);
        let path = dir.join(format!("session_{}.md", stamp.time_dash_ms));
        Self { dir, path, stamp }
    }

    /// Computes the output location and creates its directory.
    pub fn allocate(workspace_root: &Path, timestamp: &NaiveDateTime) -> Result<Self, SaveError> {
        let allocated = Self::for_timestamp(workspace_root, timestamp);
        std::fs::create_dir_all(&allocated.dir)
            .map_err(|e| SaveError::io(&allocated.dir, e))?;
        Ok(allocated)
    }
}
