//! CLI commands.
//!
//! Each submodule implements a single CLI command with its argument
//! parsing and execution logic.

/// Save a transcript from a file or stdin.
pub mod save;

/// Run the MCP server on stdio.
pub mod serve;

/// Create or show the workspace template.
pub mod template;
