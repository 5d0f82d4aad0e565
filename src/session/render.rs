//! Placeholder substitution for session templates.

use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Matches anything shaped like a placeholder token: `{{NAME}}`.
static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([A-Z_]+)\}\}").unwrap_or_else(|_| unreachable!()));

/// The closed set of placeholders a template may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Placeholder {
    Date,
    TimeColon,
    TimeDash,
    TimeDashMs,
    WorkspaceRoot,
    ProjectName,
    Os,
    Model,
    Transcript,
}

impl Placeholder {
    pub const ALL: [Placeholder; 9] = [
        Self::Date,
        Self::TimeColon,
        Self::TimeDash,
        Self::TimeDashMs,
        Self::WorkspaceRoot,
        Self::ProjectName,
        Self::Os,
        Self::Model,
        Self::Transcript,
    ];

    /// The name between the braces, e.g. `TIME_DASH_MS`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Date => "DATE",
            Self::TimeColon => "TIME_COLON",
            Self::TimeDash => "TIME_DASH",
            Self::TimeDashMs => "TIME_DASH_MS",
            Self::WorkspaceRoot => "WORKSPACE_ROOT",
            Self::ProjectName => "PROJECT_NAME",
            Self::Os => "OS",
            Self::Model => "MODEL",
            Self::Transcript => "TRANSCRIPT",
        }
    }

    /// The full token as it appears in a template, e.g. `{{DATE}}`.
    pub fn token(self) -> String {
        format!("{{{{{}}}}}", self.name())
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }
}

/// Values bound to placeholders for one render.
pub type Replacements = HashMap<Placeholder, String>;

/// Substitutes every bound placeholder in `template`.
///
/// The template is scanned once; replacement text is never re-scanned, so
/// a transcript containing `{{DATE}}` keeps it literally. Unknown tokens and
/// placeholders without a bound value are left as they are.
pub fn render(template: &str, replacements: &Replacements) -> String {
    TOKEN_PATTERN
        .replace_all(template, |caps: &Captures<'_>| {
            Placeholder::from_name(&caps[1])
                .and_then(|p| replacements.get(&p))
                .cloned()
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}
