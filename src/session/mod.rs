//! Saving chat transcripts as Markdown session files.
//!
//! A save takes the caller's transcript, renders it through the
//! workspace template and writes it to a file named after the save time:
//!
//! ```text
//! <workspace>/copilot-session_log/_TEMPLATE.md
//! <workspace>/copilot-session_log/<dd-mm-yyyy>/session_<hh-mm-ss-mmm>.md
//! ```
//!
//! The submodules are small and independent:
//!
//! - **template**: loads `_TEMPLATE.md`, creating the default on first use
//! - **render**: single-pass placeholder substitution
//! - **path**: date/time stamps and the output path for a save
//! - **timestamp**: parsing the `savedAt` argument
//! - **save**: the pipeline tying the above together

pub mod path;
pub mod render;
pub mod save;
pub mod template;
pub mod timestamp;

use std::path::PathBuf;

pub use path::{SessionPath, SessionStamp};
pub use render::{render, Placeholder, Replacements};
pub use save::{save_session, SaveRequest};
pub use template::{TemplateStore, DEFAULT_TEMPLATE};
pub use timestamp::parse_saved_at;

/// Errors that can occur while saving a session.
///
/// Usage errors come from bad caller input and are reported back to the
/// caller as a failed tool result. Everything else is an environment error.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    /// The transcript was absent or blank.
    #[error(
        "transcriptMarkdown is required: pass the full chat transcript as Markdown text \
         (it was missing or empty)"
    )]
    MissingTranscript,

    /// `savedAt` could not be parsed as a datetime.
    #[error(
        "Invalid savedAt '{value}': expected an ISO-8601 datetime such as \
         2024-03-05T09:07:02.004Z"
    )]
    InvalidSavedAt {
        /// The rejected input.
        value: String,
    },

    /// The current working directory could not be determined.
    #[error("Could not determine the workspace root: {0}")]
    WorkingDirectory(#[source] std::io::Error),

    /// A filesystem operation failed.
    #[error("Failed to access {}: {source}", path.display())]
    Io {
        /// The file or directory being accessed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl SaveError {
    /// Returns true for errors caused by the caller's input.
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::MissingTranscript | Self::InvalidSavedAt { .. })
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
