//! Copilot session log - save chat transcripts as Markdown
//!
//! Runs a small MCP server that chat assistants call to persist the
//! current conversation as a timestamped Markdown file inside the
//! workspace, rendered through a user-editable template.

pub mod config;
pub mod mcp;
pub mod session;
